//! Simulation driver: batches update trials into frames and records a
//! snapshot of the lattice after each batch.

use std::sync::Arc;
use rand::Rng;
use tracing::{debug, info, warn};
use crate::error::{IsingError, Result};
use crate::io::RunConfig;
use crate::lattice::{InitialCondition, Lattice};
use crate::sampling::{spin_rng, BoltzmannTable, Metropolis, ReferenceBiased, SpinRng, UpdateRule, UpdateStep};
use super::snapshots::SnapshotSequence;

/// Validated, immutable parameters of one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParams {
    pub size: usize,
    pub temperature: f64,
    pub initial: InitialCondition,
    /// Requested number of trials
    pub total_steps: usize,
    pub frame_count: usize,
    /// `total_steps / frame_count`, rounded down
    pub steps_per_frame: usize,
    pub reference_mode: bool,
}

impl SimulationParams {
    /// Trials dropped because `total_steps` is not a multiple of `frame_count`.
    pub fn remainder_steps(&self) -> usize {
        self.total_steps % self.frame_count
    }

    /// Trials actually executed: frame 0 is recorded before any trial runs,
    /// every later frame follows `steps_per_frame` trials.
    pub fn executed_steps(&self) -> usize {
        self.frame_count.saturating_sub(1) * self.steps_per_frame
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Configured,
    Running,
    Completed,
}

pub struct Simulation<R: Rng = SpinRng> {
    params: SimulationParams,
    lattice: Lattice,
    table: BoltzmannTable,
    rule: UpdateRule,
    snapshots: SnapshotSequence,
    rng: R,
    phase: Phase,
    trials: usize,
    accepted: usize,
}

impl Simulation<SpinRng> {
    /// Validate `config` and set up a run seeded from `config.seed`.
    pub fn from_config(config: &RunConfig, reference: Option<Arc<Lattice>>) -> Result<Self> {
        let params = config.validate()?;
        Self::new(params, reference, spin_rng(config.seed))
    }
}

impl<R: Rng> Simulation<R> {
    /// Build the lattice, the Boltzmann table and the update rule.
    ///
    /// Every precondition is checked here; once this returns `Ok` the run
    /// itself cannot fail.
    pub fn new(params: SimulationParams, reference: Option<Arc<Lattice>>, mut rng: R) -> Result<Self> {
        let table = BoltzmannTable::new(params.temperature)?;
        if params.size == 0 {
            return Err(IsingError::EmptyLattice);
        }
        if params.frame_count == 0 {
            return Err(IsingError::ZeroFrames);
        }

        let reference = match (params.reference_mode, reference) {
            (true, Some(reference)) => Some(reference),
            (true, None) => return Err(IsingError::MissingReference),
            (false, Some(_)) => {
                warn!("reference lattice supplied without reference mode, ignoring it");
                None
            }
            (false, None) => None,
        };
        if let Some(reference) = &reference {
            if reference.size() != params.size {
                return Err(IsingError::DimensionMismatch {
                    expected: params.size,
                    rows: reference.size(),
                    cols: reference.size(),
                });
            }
        }

        let lattice = Lattice::new(params.size, params.initial, &mut rng)?;
        let rule = match reference {
            Some(reference) => {
                let rule = ReferenceBiased::new(reference);
                rule.check_shape(&lattice)?;
                UpdateRule::ReferenceBiased(rule)
            }
            None => UpdateRule::Metropolis(Metropolis),
        };

        if params.remainder_steps() != 0 {
            warn!(
                total_steps = params.total_steps,
                frame_count = params.frame_count,
                dropped = params.remainder_steps(),
                "total steps not divisible by frame count, remainder is not executed"
            );
        }
        info!(
            size = params.size,
            temperature = params.temperature,
            initial = ?params.initial,
            rule = %rule,
            frames = params.frame_count,
            steps_per_frame = params.steps_per_frame,
            "simulation configured"
        );

        Ok(Self {
            snapshots: SnapshotSequence::with_capacity(params.frame_count, params.steps_per_frame),
            params,
            lattice,
            table,
            rule,
            rng,
            phase: Phase::Configured,
            trials: 0,
            accepted: 0,
        })
    }

    pub fn run(&mut self) -> Result<&SnapshotSequence> {
        self.run_with(|_, _| {})
    }

    /// Run every frame, calling `on_frame(index, lattice)` after each snapshot.
    pub fn run_with<F: FnMut(usize, &Lattice)>(&mut self, mut on_frame: F) -> Result<&SnapshotSequence> {
        if self.phase != Phase::Configured {
            return Err(IsingError::AlreadyCompleted);
        }
        self.phase = Phase::Running;

        for frame in 0..self.params.frame_count {
            if frame > 0 {
                for _ in 0..self.params.steps_per_frame {
                    let trial = self.rule.step(&mut self.lattice, &self.table, &mut self.rng);
                    self.trials += 1;
                    if trial.flipped {
                        self.accepted += 1;
                    }
                }
            }
            self.snapshots.record(&self.lattice)?;
            debug!(frame, trials = self.trials, "recorded snapshot");
            on_frame(frame, &self.lattice);
        }

        self.snapshots.seal();
        self.phase = Phase::Completed;
        info!(
            frames = self.snapshots.len(),
            trials = self.trials,
            acceptance = self.acceptance_rate(),
            "simulation completed"
        );
        Ok(&self.snapshots)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    pub fn table(&self) -> &BoltzmannTable {
        &self.table
    }

    pub fn rule(&self) -> &UpdateRule {
        &self.rule
    }

    pub fn snapshots(&self) -> &SnapshotSequence {
        &self.snapshots
    }

    pub fn into_snapshots(self) -> SnapshotSequence {
        self.snapshots
    }

    pub fn trials_executed(&self) -> usize {
        self.trials
    }

    pub fn accepted_flips(&self) -> usize {
        self.accepted
    }

    pub fn acceptance_rate(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.accepted as f64 / self.trials as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn params(total_steps: usize, frame_count: usize) -> SimulationParams {
        SimulationParams {
            size: 4,
            temperature: 1.0,
            initial: InitialCondition::Cold,
            total_steps,
            frame_count,
            steps_per_frame: total_steps / frame_count,
            reference_mode: false,
        }
    }

    #[test]
    fn test_phases() {
        let mut sim = Simulation::new(params(100, 10), None, ChaCha20Rng::seed_from_u64(0)).unwrap();
        assert_eq!(sim.phase(), Phase::Configured);
        assert!(matches!(sim.rule(), UpdateRule::Metropolis(_)));
        sim.run().unwrap();
        assert_eq!(sim.phase(), Phase::Completed);
        assert!(sim.snapshots().is_sealed());
        assert!(matches!(sim.run(), Err(IsingError::AlreadyCompleted)));
    }

    #[test]
    fn test_truncated_steps() {
        let p = params(105, 10);
        assert_eq!(p.steps_per_frame, 10);
        assert_eq!(p.remainder_steps(), 5);
        assert_eq!(p.executed_steps(), 90);

        let mut sim = Simulation::new(p, None, ChaCha20Rng::seed_from_u64(1)).unwrap();
        sim.run().unwrap();
        assert_eq!(sim.trials_executed(), 90);
        assert!(sim.accepted_flips() <= 90);
    }

    #[test]
    fn test_frame_callback() {
        let mut sim = Simulation::new(params(40, 4), None, ChaCha20Rng::seed_from_u64(2)).unwrap();
        let mut seen = Vec::new();
        sim.run_with(|frame, lattice| seen.push((frame, lattice.clone()))).unwrap();
        assert_eq!(seen.len(), 4);
        for (frame, lattice) in &seen {
            assert_eq!(&sim.snapshots()[*frame], lattice);
        }
    }

    #[test]
    fn test_rejects_bad_parameters() {
        let mut p = params(10, 1);
        p.temperature = 0.0;
        assert!(matches!(
            Simulation::new(p, None, ChaCha20Rng::seed_from_u64(0)),
            Err(IsingError::InvalidTemperature(_))
        ));

        let mut p = params(10, 1);
        p.frame_count = 0;
        assert!(matches!(
            Simulation::new(p, None, ChaCha20Rng::seed_from_u64(0)),
            Err(IsingError::ZeroFrames)
        ));
    }

    #[test]
    fn test_reference_mode_needs_matching_reference() {
        let mut p = params(10, 1);
        p.reference_mode = true;
        assert!(matches!(
            Simulation::new(p, None, ChaCha20Rng::seed_from_u64(0)),
            Err(IsingError::MissingReference)
        ));

        let small = Arc::new(Lattice::cold(3).unwrap());
        assert!(matches!(
            Simulation::new(p, Some(small), ChaCha20Rng::seed_from_u64(0)),
            Err(IsingError::DimensionMismatch { expected: 4, rows: 3, cols: 3 })
        ));

        let fitting = Arc::new(Lattice::cold(4).unwrap());
        let sim = Simulation::new(p, Some(fitting), ChaCha20Rng::seed_from_u64(0)).unwrap();
        assert!(matches!(sim.rule(), UpdateRule::ReferenceBiased(_)));
    }

    #[test]
    fn test_reference_ignored_outside_reference_mode() {
        let reference = Arc::new(Lattice::cold(4).unwrap());
        let sim = Simulation::new(params(10, 1), Some(reference), ChaCha20Rng::seed_from_u64(0)).unwrap();
        assert!(matches!(sim.rule(), UpdateRule::Metropolis(_)));
    }
}
