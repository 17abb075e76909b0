//! IO module - run configuration and spin grid files.

mod config;
mod grid;

pub use config::{read_run_config, RunConfig};
pub use grid::{parse_grid, parse_reference, read_grid, read_reference, save_grid, write_grid};
