//! Update rule that pulls the lattice toward a fixed reference pattern.
//!
//! A drawn spin that disagrees with the reference is always flipped. A spin
//! that already agrees is flipped with the constant weight `exp(-4/T)`, which
//! keeps a residual thermal noise regardless of the local energy.

use std::sync::Arc;
use rand::Rng;
use crate::error::{IsingError, Result};
use crate::lattice::Lattice;
use super::boltzmann::BoltzmannTable;
use super::traits::{draw_site, Trial, UpdateStep};

#[derive(Debug, Clone)]
pub struct ReferenceBiased {
    reference: Arc<Lattice>,
}

impl ReferenceBiased {
    /// Wrap a read-only reference lattice. It may be shared between chains.
    pub fn new(reference: Arc<Lattice>) -> Self {
        Self { reference }
    }

    /// Check that the reference has the same shape as `lattice`.
    pub fn check_shape(&self, lattice: &Lattice) -> Result<()> {
        if self.reference.same_shape(lattice) {
            Ok(())
        } else {
            Err(IsingError::DimensionMismatch {
                expected: lattice.size(),
                rows: self.reference.size(),
                cols: self.reference.size(),
            })
        }
    }

    pub fn reference(&self) -> &Lattice {
        &self.reference
    }
}

impl UpdateStep for ReferenceBiased {
    fn step<R: Rng + ?Sized>(&self, lattice: &mut Lattice, table: &BoltzmannTable, rng: &mut R) -> Trial {
        let (row, col) = draw_site(lattice.size(), rng);
        let (i, j) = (row as isize, col as isize);

        let flipped = lattice.get(i, j) != self.reference.get(i, j)
            || rng.gen::<f64>() < table.noise_floor();

        if flipped {
            lattice.flip(i, j);
        }
        Trial { row, col, flipped }
    }
}
