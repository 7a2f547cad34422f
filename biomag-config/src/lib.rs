use serde::Deserialize;
use std::path::Path;
use std::{fs, io};

// --- Error Type ---
#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    ParseJson(serde_json::Error),
    ParseToml(toml::de::Error),
    Validation(String),
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::ParseJson(err)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseToml(err)
    }
}

// --- Configuration Sections ---

/// Per-nutrient values in (protein, carbohydrate, lipid) order.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct NutrientValues {
    pub protein: f64,
    pub carbohydrate: f64,
    pub lipid: f64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct StrawSettings {
    #[serde(default = "default_population")]
    pub population: f64,
    #[serde(default = "default_per_person_per_month")]
    pub per_person_per_month: f64,
    #[serde(default = "default_straw_volume_l")]
    pub straw_volume_l: f64,
}

// The monthly consumption estimate is the one knob meant for users; the
// rest are hand-picked literals from the captured presentation run.
fn default_population() -> f64 {
    43_000.0
}
fn default_per_person_per_month() -> f64 {
    5.0
}
fn default_straw_volume_l() -> f64 {
    0.016
}

#[derive(Deserialize, Debug, Clone)]
pub struct RoutingSettings {
    #[serde(default = "default_ocean_fraction")]
    pub ocean_fraction: f64,
    #[serde(default = "default_patch_fraction")]
    pub patch_fraction: f64,
}

fn default_ocean_fraction() -> f64 {
    0.03
}
fn default_patch_fraction() -> f64 {
    0.03
}

#[derive(Deserialize, Debug, Clone)]
pub struct PatchSettings {
    #[serde(default = "default_patch_mass_kg")]
    pub mass_kg: f64,
    #[serde(default = "default_patch_area_km2")]
    pub area_km2: f64,
    #[serde(default = "default_plastic_density")]
    pub plastic_density_kg_per_l: f64,
}

fn default_patch_mass_kg() -> f64 {
    8.0e7
}
fn default_patch_area_km2() -> f64 {
    1.6e6
}
fn default_plastic_density() -> f64 {
    0.91
}

#[derive(Deserialize, Debug, Clone)]
pub struct CouplingSettings {
    /// Free tuning multiplier linking the patch concentration delta to the
    /// digestibility vectors. It has no physical derivation and is sized
    /// by hand so the perturbation shows up in the chart.
    #[serde(default = "default_lam")]
    pub lam: f64,
}

fn default_lam() -> f64 {
    500.0
}

#[derive(Deserialize, Debug, Clone)]
pub struct OrganismConfig {
    pub name: String,
    pub digestibility: NutrientValues,
    pub diet_fraction: NutrientValues,
    pub gamma: f64,
}

// --- Top-Level Config Struct ---

#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub straws: StrawSettings,
    #[serde(default)]
    pub routing: RoutingSettings,
    #[serde(default)]
    pub patch: PatchSettings,
    #[serde(default)]
    pub coupling: CouplingSettings,
    #[serde(default = "default_effective_concentration")]
    pub effective_concentration: NutrientValues,
    #[serde(default = "default_organisms")]
    pub organisms: Vec<OrganismConfig>,
}

fn default_effective_concentration() -> NutrientValues {
    NutrientValues {
        protein: 0.05,
        carbohydrate: 0.1,
        lipid: 1.0,
    }
}

/// The three organisms from the presentation. The dugong literals match the
/// captured run; the turtle and shark sets are picked in the same spirit.
fn default_organisms() -> Vec<OrganismConfig> {
    vec![
        OrganismConfig {
            name: "Dugong".to_string(),
            digestibility: NutrientValues {
                protein: 0.96,
                carbohydrate: 0.96,
                lipid: 0.96,
            },
            diet_fraction: NutrientValues {
                protein: 0.16,
                carbohydrate: 0.61,
                lipid: 0.01,
            },
            gamma: 0.01,
        },
        OrganismConfig {
            name: "Green Sea Turtle".to_string(),
            digestibility: NutrientValues {
                protein: 0.80,
                carbohydrate: 0.85,
                lipid: 0.90,
            },
            diet_fraction: NutrientValues {
                protein: 0.22,
                carbohydrate: 0.50,
                lipid: 0.08,
            },
            gamma: 0.02,
        },
        OrganismConfig {
            name: "Tiger Shark".to_string(),
            digestibility: NutrientValues {
                protein: 0.92,
                carbohydrate: 0.35,
                lipid: 0.95,
            },
            diet_fraction: NutrientValues {
                protein: 0.70,
                carbohydrate: 0.05,
                lipid: 0.20,
            },
            gamma: 0.015,
        },
    ]
}

impl Default for StrawSettings {
    fn default() -> Self {
        Self {
            population: default_population(),
            per_person_per_month: default_per_person_per_month(),
            straw_volume_l: default_straw_volume_l(),
        }
    }
}

impl Default for RoutingSettings {
    fn default() -> Self {
        Self {
            ocean_fraction: default_ocean_fraction(),
            patch_fraction: default_patch_fraction(),
        }
    }
}

impl Default for PatchSettings {
    fn default() -> Self {
        Self {
            mass_kg: default_patch_mass_kg(),
            area_km2: default_patch_area_km2(),
            plastic_density_kg_per_l: default_plastic_density(),
        }
    }
}

impl Default for CouplingSettings {
    fn default() -> Self {
        Self { lam: default_lam() }
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            straws: StrawSettings::default(),
            routing: RoutingSettings::default(),
            patch: PatchSettings::default(),
            coupling: CouplingSettings::default(),
            effective_concentration: default_effective_concentration(),
            organisms: default_organisms(),
        }
    }
}

// --- Loading Function ---

/// Reads a scenario from `path`. Files ending in `.toml` are parsed as
/// TOML; everything else is treated as JSON.
pub fn load_config(path: &Path) -> Result<ScenarioConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: ScenarioConfig = if path.extension().map_or(false, |ext| ext == "toml") {
        toml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };

    validate(&config)?;
    Ok(config)
}

/// Rejects scenarios the model cannot evaluate. The core arithmetic does no
/// checking of its own, so the guard against a zero diet/concentration
/// weight lives here.
pub fn validate(config: &ScenarioConfig) -> Result<(), ConfigError> {
    if config.straws.population <= 0.0 {
        return Err(ConfigError::Validation(
            "Population must be positive.".to_string(),
        ));
    }
    if config.straws.per_person_per_month <= 0.0 {
        return Err(ConfigError::Validation(
            "Straws per person per month must be positive.".to_string(),
        ));
    }
    if config.straws.straw_volume_l <= 0.0 {
        return Err(ConfigError::Validation(
            "Straw volume must be positive.".to_string(),
        ));
    }

    for (label, fraction) in [
        ("Ocean fraction", config.routing.ocean_fraction),
        ("Patch fraction", config.routing.patch_fraction),
    ] {
        if !(fraction > 0.0 && fraction <= 1.0) {
            return Err(ConfigError::Validation(format!(
                "{} must lie in (0, 1].",
                label
            )));
        }
    }

    if config.patch.mass_kg <= 0.0 || config.patch.area_km2 <= 0.0 {
        return Err(ConfigError::Validation(
            "Patch mass and area must be positive.".to_string(),
        ));
    }
    if config.patch.plastic_density_kg_per_l <= 0.0 {
        return Err(ConfigError::Validation(
            "Plastic density must be positive.".to_string(),
        ));
    }

    if config.organisms.is_empty() {
        return Err(ConfigError::Validation(
            "At least one organism must be configured.".to_string(),
        ));
    }

    let z = &config.effective_concentration;
    for organism in &config.organisms {
        if organism.gamma <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "Gamma for '{}' must be positive.",
                organism.name
            )));
        }

        // A zero weight would make the digestive-efficiency denominator zero.
        let diet = &organism.diet_fraction;
        let weight =
            diet.protein * z.protein + diet.carbohydrate * z.carbohydrate + diet.lipid * z.lipid;
        if weight <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "Diet fractions for '{}' carry no weight under the effective concentration.",
                organism.name
            )));
        }
    }

    Ok(())
}
