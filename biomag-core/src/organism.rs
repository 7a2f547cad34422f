use serde::{Deserialize, Serialize};

use crate::nutrient::NutrientTriple;

/// Fixed parameter set for one modeled organism.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OrganismParams {
    pub name: String,
    /// Dry-matter digestibility per nutrient.
    pub digestibility: NutrientTriple,
    /// Share of the diet made up of each nutrient.
    pub diet_fraction: NutrientTriple,
    /// Counteracting force against biomagnification.
    pub gamma: f64,
}

impl OrganismParams {
    pub fn new(
        name: impl Into<String>,
        digestibility: NutrientTriple,
        diet_fraction: NutrientTriple,
        gamma: f64,
    ) -> Self {
        Self {
            name: name.into(),
            digestibility,
            diet_fraction,
            gamma,
        }
    }
}
