//! Error type shared by configuration, grid I/O and the simulation driver.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IsingError {
    #[error("temperature must be a positive finite number, got {0}")]
    InvalidTemperature(f64),
    #[error("unknown initial condition {0}, expected 1 (cold) or 2 (warm)")]
    InvalidInitialCondition(u8),
    #[error("lattice size must be at least 1")]
    EmptyLattice,
    #[error("frame count must be at least 1")]
    ZeroFrames,
    #[error("reference mode requested but no reference lattice was supplied")]
    MissingReference,
    #[error("reference lattice must be {expected}x{expected}, got {rows} rows and {cols} columns")]
    DimensionMismatch {
        expected: usize,
        rows: usize,
        cols: usize,
    },
    #[error("spin at row {row}, column {col} is {value}, expected -1 or 1")]
    InvalidSpin { row: usize, col: usize, value: i64 },
    #[error("cannot parse cell at row {row}, column {col}: {text:?}")]
    MalformedCell {
        row: usize,
        col: usize,
        text: String,
    },
    #[error("simulation has already completed")]
    AlreadyCompleted,
    #[error("snapshot sequence is sealed")]
    SnapshotSealed,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, IsingError>;
