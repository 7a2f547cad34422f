use serde::{Deserialize, Serialize};

/// Reference constants for the garbage patch whose concentration is perturbed.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct GarbagePatch {
    /// Baseline floating plastic mass, in kg.
    pub mass_kg: f64,
    /// Patch surface area, in square kilometers.
    pub area_km2: f64,
    /// Plastic density used to convert mass to volume, in kg per liter.
    pub plastic_density_kg_per_l: f64,
}

/// Surface plastic concentration before and after the new waste arrives,
/// in liters per square kilometer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ConcentrationShift {
    pub before_l_per_km2: f64,
    pub after_l_per_km2: f64,
    pub delta_l_per_km2: f64,
}

/// Spreads the baseline plastic, plus the newly arrived straw volume, over
/// the patch surface.
///
/// The added volume rides through the same density conversion as the
/// baseline mass, so the delta is exactly
/// `added_volume / density / area`.
pub fn concentration_shift(patch: &GarbagePatch, added_volume_l: f64) -> ConcentrationShift {
    let before_l_per_km2 = patch.mass_kg / patch.plastic_density_kg_per_l / patch.area_km2;
    let after_l_per_km2 =
        (patch.mass_kg + added_volume_l) / patch.plastic_density_kg_per_l / patch.area_km2;

    ConcentrationShift {
        before_l_per_km2,
        after_l_per_km2,
        delta_l_per_km2: after_l_per_km2 - before_l_per_km2,
    }
}
