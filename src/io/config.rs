use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use serde::{Deserialize, Serialize};
use crate::error::{IsingError, Result};
use crate::lattice::{InitialCondition, Lattice};
use crate::sampling::validate_temperature;
use crate::simulation::SimulationParams;
use super::grid::read_reference;

/// Run parameters as written in a YAML file or assembled from the command line.
///
/// Nothing here is trusted until [`RunConfig::validate`] succeeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Linear size N of the N x N lattice
    pub lattice_size: usize,
    /// Temperature in units of the coupling constant
    pub temperature: f64,
    /// 1 for a cold start, 2 for a warm start
    pub initial_condition: u8,
    /// Requested number of update trials
    pub total_steps: usize,
    /// Number of snapshots to record
    pub frame_count: usize,
    /// Use the reference-biased rule instead of Metropolis
    pub reference_mode: bool,
    /// Grid file holding the reference lattice
    pub reference: Option<PathBuf>,
    /// Seed for reproducible runs
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            lattice_size: 256,
            temperature: 2.269,
            initial_condition: 1,
            total_steps: 1_000_000,
            frame_count: 500,
            reference_mode: false,
            reference: None,
            seed: None,
        }
    }
}

impl RunConfig {
    pub fn validate(&self) -> Result<SimulationParams> {
        let temperature = validate_temperature(self.temperature)?;
        let initial = InitialCondition::try_from(self.initial_condition)?;
        if self.lattice_size == 0 {
            return Err(IsingError::EmptyLattice);
        }
        if self.frame_count == 0 {
            return Err(IsingError::ZeroFrames);
        }

        Ok(SimulationParams {
            size: self.lattice_size,
            temperature,
            initial,
            total_steps: self.total_steps,
            frame_count: self.frame_count,
            steps_per_frame: self.total_steps / self.frame_count,
            reference_mode: self.reference_mode,
        })
    }
}

impl RunConfig {
    /// Load the reference grid named by `reference`, sized to `lattice_size`.
    pub fn load_reference(&self) -> Result<Option<Arc<Lattice>>> {
        match &self.reference {
            Some(path) => Ok(Some(Arc::new(read_reference(path, self.lattice_size)?))),
            None => Ok(None),
        }
    }
}

/// Read a [`RunConfig`] from a YAML file. Missing keys take their defaults.
pub fn read_run_config<P: AsRef<Path>>(path: P) -> Result<RunConfig> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let config: RunConfig = serde_yaml::from_reader(reader)?;
    Ok(config)
}

// example of yaml file
// lattice_size: 128
// temperature: 1.5
// initial_condition: 2
// total_steps: 500000
// frame_count: 250
// seed: 17
// reference_mode: true
// reference: pattern.txt
