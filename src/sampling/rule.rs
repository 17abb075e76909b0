use std::fmt;
use rand::Rng;
use crate::lattice::Lattice;
use super::boltzmann::BoltzmannTable;
use super::metropolis::Metropolis;
use super::reference::ReferenceBiased;
use super::traits::{Trial, UpdateStep};

/// The update rule chosen for a run.
#[derive(Debug, Clone)]
pub enum UpdateRule {
    Metropolis(Metropolis),
    ReferenceBiased(ReferenceBiased),
}

impl UpdateStep for UpdateRule {
    #[inline]
    fn step<R: Rng + ?Sized>(&self, lattice: &mut Lattice, table: &BoltzmannTable, rng: &mut R) -> Trial {
        match self {
            Self::Metropolis(rule) => rule.step(lattice, table, rng),
            Self::ReferenceBiased(rule) => rule.step(lattice, table, rng),
        }
    }
}

impl fmt::Display for UpdateRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metropolis(_) => write!(f, "metropolis"),
            Self::ReferenceBiased(_) => write!(f, "reference-biased"),
        }
    }
}
