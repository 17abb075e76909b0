//! Traits for single-spin Monte Carlo updates.

use rand::Rng;
use crate::lattice::Lattice;
use super::boltzmann::BoltzmannTable;

/// Outcome of one update trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trial {
    /// Row of the site that was drawn
    pub row: usize,
    /// Column of the site that was drawn
    pub col: usize,
    /// Whether the spin at the drawn site was reversed
    pub flipped: bool,
}

/// A single-site update rule driven by an explicit RNG.
///
/// Each call draws one site, decides whether to flip it and mutates the
/// lattice in place. Trials must run one at a time: every decision reads the
/// state left behind by the previous trial.
pub trait UpdateStep {
    fn step<R: Rng + ?Sized>(&self, lattice: &mut Lattice, table: &BoltzmannTable, rng: &mut R) -> Trial;
}

/// Draw a site uniformly, row first then column.
#[inline]
pub(crate) fn draw_site<R: Rng + ?Sized>(size: usize, rng: &mut R) -> (usize, usize) {
    let row = rng.gen_range(0..size);
    let col = rng.gen_range(0..size);
    (row, col)
}
