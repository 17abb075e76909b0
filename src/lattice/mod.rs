//! Lattice module - the square spin lattice and its local energy.

mod spins;
mod energy;

pub use spins::{InitialCondition, Lattice, Spin};
pub use energy::energy_change;
