//! Ising MC - Metropolis Monte Carlo for the 2D Ising model in Rust
//!
//! This crate evolves an N x N lattice of +/-1 spins with periodic boundaries
//! at a fixed temperature, one single-spin trial at a time, and records
//! snapshots of the whole lattice for later playback.

pub mod error;
pub mod lattice;
pub mod sampling;
pub mod simulation;
pub mod io;

// Re-export commonly used types at crate root
pub use error::{IsingError, Result};
pub use lattice::{energy_change, InitialCondition, Lattice, Spin};
pub use sampling::{spin_rng, BoltzmannTable, Metropolis, ReferenceBiased, SpinRng, Trial, UpdateRule, UpdateStep};
pub use simulation::{Phase, Simulation, SimulationParams, SnapshotSequence};
pub use io::{parse_grid, parse_reference, read_grid, read_reference, read_run_config, save_grid, write_grid, RunConfig};
