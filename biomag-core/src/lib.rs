//! Core model for the straw-waste biomagnification estimate.
//!
//! The model is a single-shot, deterministic evaluation: a waste estimate
//! feeds a garbage-patch concentration shift, which in turn perturbs the
//! per-organism biomagnification factors.

pub mod bmf;
pub mod nutrient;
pub mod organism;
pub mod patch;
pub mod waste;

pub use bmf::{biomagnification_factor, digestive_efficiency, evaluate_organism, BmfReading};
pub use nutrient::NutrientTriple;
pub use organism::OrganismParams;
pub use patch::{concentration_shift, ConcentrationShift, GarbagePatch};
pub use waste::{estimate_waste, StrawUsage, WasteEstimate, WasteRouting};
