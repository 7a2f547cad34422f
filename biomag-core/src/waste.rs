use serde::{Deserialize, Serialize};

/// Straw consumption habits of the modeled population.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct StrawUsage {
    pub population: f64,
    pub straws_per_person_per_month: f64,
    pub straw_volume_l: f64,
}

/// How much of the discarded plastic travels onward.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct WasteRouting {
    /// Fraction of the annual waste that reaches the open ocean.
    pub ocean_fraction: f64,
    /// Fraction of the ocean plastic that collects in the garbage patch.
    pub patch_fraction: f64,
}

/// Annual plastic-straw waste volumes, in liters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct WasteEstimate {
    pub annual_volume_l: f64,
    pub ocean_volume_l: f64,
    pub patch_volume_l: f64,
}

/// Scales per-person monthly consumption up to an annual population-wide
/// volume, then routes it through the ocean and patch fractions.
pub fn estimate_waste(usage: &StrawUsage, routing: &WasteRouting) -> WasteEstimate {
    let annual_volume_l =
        usage.population * usage.straws_per_person_per_month * usage.straw_volume_l * 12.0;
    let ocean_volume_l = routing.ocean_fraction * annual_volume_l;
    let patch_volume_l = routing.patch_fraction * ocean_volume_l;

    WasteEstimate {
        annual_volume_l,
        ocean_volume_l,
        patch_volume_l,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn captured_usage() -> StrawUsage {
        StrawUsage {
            population: 43_000.0,
            straws_per_person_per_month: 5.0,
            straw_volume_l: 0.016,
        }
    }

    fn captured_routing() -> WasteRouting {
        WasteRouting {
            ocean_fraction: 0.03,
            patch_fraction: 0.03,
        }
    }

    #[test]
    fn captured_run_volumes() {
        let estimate = estimate_waste(&captured_usage(), &captured_routing());
        assert!((estimate.annual_volume_l - 41_280.0).abs() < 1e-9);
        assert!((estimate.ocean_volume_l - 1_238.4).abs() < 1e-9);
    }

    #[test]
    fn annual_volume_is_linear_in_each_input() {
        let base = estimate_waste(&captured_usage(), &captured_routing());

        let mut usage = captured_usage();
        usage.population *= 2.0;
        let doubled = estimate_waste(&usage, &captured_routing());
        assert!((doubled.annual_volume_l - 2.0 * base.annual_volume_l).abs() < 1e-9);

        let mut usage = captured_usage();
        usage.straws_per_person_per_month *= 2.0;
        let doubled = estimate_waste(&usage, &captured_routing());
        assert!((doubled.annual_volume_l - 2.0 * base.annual_volume_l).abs() < 1e-9);

        let mut usage = captured_usage();
        usage.straw_volume_l *= 2.0;
        let doubled = estimate_waste(&usage, &captured_routing());
        assert!((doubled.annual_volume_l - 2.0 * base.annual_volume_l).abs() < 1e-9);
    }

    #[test]
    fn routed_volumes_follow_the_fractions() {
        let estimate = estimate_waste(&captured_usage(), &captured_routing());
        assert!((estimate.ocean_volume_l - 0.03 * estimate.annual_volume_l).abs() < 1e-12);
        assert!((estimate.patch_volume_l - 0.03 * estimate.ocean_volume_l).abs() < 1e-12);
    }
}
