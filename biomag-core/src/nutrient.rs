use serde::{Deserialize, Serialize};

/// Per-nutrient coefficients in (protein, carbohydrate, lipid) order.
///
/// The same shape is used for dry-matter digestibility, diet fractions,
/// and the shared effective-concentration vector.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NutrientTriple {
    pub protein: f64,
    pub carbohydrate: f64,
    pub lipid: f64,
}

impl NutrientTriple {
    pub const fn new(protein: f64, carbohydrate: f64, lipid: f64) -> Self {
        Self {
            protein,
            carbohydrate,
            lipid,
        }
    }

    /// All three entries set to the same value.
    pub const fn splat(value: f64) -> Self {
        Self::new(value, value, value)
    }

    /// Uniform shift applied to every entry.
    pub fn offset(&self, amount: f64) -> Self {
        Self::new(
            self.protein + amount,
            self.carbohydrate + amount,
            self.lipid + amount,
        )
    }

    /// Element-wise product summed over the three nutrients.
    pub fn dot(&self, other: &NutrientTriple) -> f64 {
        self.protein * other.protein
            + self.carbohydrate * other.carbohydrate
            + self.lipid * other.lipid
    }

    /// Sum of `self * weights * scale`, nutrient by nutrient.
    pub fn weighted_dot(&self, weights: &NutrientTriple, scale: &NutrientTriple) -> f64 {
        self.protein * weights.protein * scale.protein
            + self.carbohydrate * weights.carbohydrate * scale.carbohydrate
            + self.lipid * weights.lipid * scale.lipid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_sums_elementwise_products() {
        let a = NutrientTriple::new(1.0, 2.0, 3.0);
        let b = NutrientTriple::new(0.5, 0.25, 2.0);
        assert!((a.dot(&b) - (0.5 + 0.5 + 6.0)).abs() < 1e-12);
    }

    #[test]
    fn weighted_dot_matches_manual_expansion() {
        let values = NutrientTriple::new(0.96, 0.96, 0.96);
        let weights = NutrientTriple::new(0.16, 0.61, 0.01);
        let scale = NutrientTriple::new(0.05, 0.1, 1.0);

        let expected = 0.96 * 0.16 * 0.05 + 0.96 * 0.61 * 0.1 + 0.96 * 0.01 * 1.0;
        assert!((values.weighted_dot(&weights, &scale) - expected).abs() < 1e-12);
    }

    #[test]
    fn offset_shifts_every_entry() {
        let shifted = NutrientTriple::splat(0.5).offset(0.25);
        assert_eq!(shifted, NutrientTriple::splat(0.75));
    }
}
