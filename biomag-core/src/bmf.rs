//! Biomagnification factor arithmetic.
//!
//! The factor for an organism is `1 / (beta + gamma)`, where `beta` is the
//! driving force `1 - alpha_Z` and `alpha_Z` is the diet-and-concentration
//! weighted average of the digestibility coefficients:
//!
//! ```text
//! alpha_Z = sum(digestibility * diet * z) / sum(diet * z)
//! ```
//!
//! A zero `sum(diet * z)` denominator is not guarded here; scenario
//! validation rejects such parameter sets before they reach this module.

use serde::Serialize;

use crate::nutrient::NutrientTriple;
use crate::organism::OrganismParams;

/// Diet-and-concentration-weighted average of the digestibility coefficients.
pub fn digestive_efficiency(
    digestibility: &NutrientTriple,
    diet_fraction: &NutrientTriple,
    effective_concentration: &NutrientTriple,
) -> f64 {
    digestibility.weighted_dot(diet_fraction, effective_concentration)
        / diet_fraction.dot(effective_concentration)
}

/// `1 / (beta + gamma)` with `beta = 1 - alpha_Z`.
pub fn biomagnification_factor(
    digestibility: &NutrientTriple,
    diet_fraction: &NutrientTriple,
    effective_concentration: &NutrientTriple,
    gamma: f64,
) -> f64 {
    let alpha = digestive_efficiency(digestibility, diet_fraction, effective_concentration);
    let beta = 1.0 - alpha;
    1.0 / (beta + gamma)
}

/// Baseline and perturbed factors for one organism.
#[derive(Clone, Debug, Serialize)]
pub struct BmfReading {
    pub organism: String,
    pub baseline: f64,
    pub perturbed: f64,
}

/// Evaluates one organism at the baseline digestibility, then again with a
/// uniform shift applied to every digestibility entry.
///
/// The shift is the concentration delta scaled by the free coupling
/// multiplier; because it is uniform, it moves `alpha_Z` by exactly the
/// shift amount.
pub fn evaluate_organism(
    params: &OrganismParams,
    effective_concentration: &NutrientTriple,
    digestibility_shift: f64,
) -> BmfReading {
    let baseline = biomagnification_factor(
        &params.digestibility,
        &params.diet_fraction,
        effective_concentration,
        params.gamma,
    );

    let shifted = params.digestibility.offset(digestibility_shift);
    let perturbed = biomagnification_factor(
        &shifted,
        &params.diet_fraction,
        effective_concentration,
        params.gamma,
    );

    BmfReading {
        organism: params.name.clone(),
        baseline,
        perturbed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dugong() -> OrganismParams {
        OrganismParams::new(
            "Dugong",
            NutrientTriple::splat(0.96),
            NutrientTriple::new(0.16, 0.61, 0.01),
            0.01,
        )
    }

    fn z() -> NutrientTriple {
        NutrientTriple::new(0.05, 0.1, 1.0)
    }

    #[test]
    fn dugong_baseline_matches_captured_run() {
        // Recorded as 19.99999999999994, i.e. 1 / (1 - 0.96 + 0.01).
        let bmf = biomagnification_factor(
            &dugong().digestibility,
            &dugong().diet_fraction,
            &z(),
            0.01,
        );
        assert!((bmf - 20.0).abs() < 1e-9);
    }

    #[test]
    fn perfect_digestion_gives_unit_efficiency() {
        let perfect = NutrientTriple::splat(1.0);

        let alpha = digestive_efficiency(&perfect, &NutrientTriple::new(0.3, 0.5, 0.2), &z());
        assert!((alpha - 1.0).abs() < 1e-12);

        // The boundary holds for any diet and concentration weighting.
        let alpha = digestive_efficiency(
            &perfect,
            &NutrientTriple::new(0.7, 0.1, 0.9),
            &NutrientTriple::new(1.0, 2.0, 3.0),
        );
        assert!((alpha - 1.0).abs() < 1e-12);
    }

    #[test]
    fn uniform_shift_translates_efficiency() {
        let shift = 0.0116;
        let params = dugong();

        let base = digestive_efficiency(&params.digestibility, &params.diet_fraction, &z());
        let moved = digestive_efficiency(
            &params.digestibility.offset(shift),
            &params.diet_fraction,
            &z(),
        );
        assert!((moved - (base + shift)).abs() < 1e-12);
    }

    #[test]
    fn positive_shift_raises_the_factor() {
        let reading = evaluate_organism(&dugong(), &z(), 0.0116);
        assert!(reading.perturbed > reading.baseline);
    }

    #[test]
    fn evaluation_is_deterministic() {
        let first = evaluate_organism(&dugong(), &z(), 0.0116);
        let second = evaluate_organism(&dugong(), &z(), 0.0116);
        assert_eq!(first.baseline.to_bits(), second.baseline.to_bits());
        assert_eq!(first.perturbed.to_bits(), second.perturbed.to_bits());
    }
}
