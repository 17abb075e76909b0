//! Simulation module - the driver loop and its recorded frames.

mod driver;
mod snapshots;

pub use driver::{Phase, Simulation, SimulationParams};
pub use snapshots::SnapshotSequence;
