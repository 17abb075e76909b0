//! Sampling module - single-spin Monte Carlo update rules.

mod traits;
mod rng;
mod boltzmann;
mod metropolis;
mod reference;
mod rule;

pub use traits::{Trial, UpdateStep};
pub use rng::{spin_rng, SpinRng};
pub use boltzmann::BoltzmannTable;
pub(crate) use boltzmann::validate_temperature;
pub use metropolis::Metropolis;
pub use reference::ReferenceBiased;
pub use rule::UpdateRule;
