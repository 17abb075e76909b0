//! Metropolis single-spin-flip update.
//!
//! Downhill and neutral flips are always taken; uphill flips are taken with
//! the Boltzmann weight of their energy cost.

use rand::Rng;
use crate::lattice::{energy_change, Lattice};
use super::boltzmann::BoltzmannTable;
use super::traits::{draw_site, Trial, UpdateStep};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Metropolis;

impl UpdateStep for Metropolis {
    fn step<R: Rng + ?Sized>(&self, lattice: &mut Lattice, table: &BoltzmannTable, rng: &mut R) -> Trial {
        let (row, col) = draw_site(lattice.size(), rng);
        let delta_energy = energy_change(lattice, row, col);

        // no acceptance draw on the downhill branch
        let flipped = delta_energy <= 0 || rng.gen::<f64>() < table.acceptance(delta_energy);

        if flipped {
            lattice.flip(row as isize, col as isize);
        }
        Trial { row, col, flipped }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_downhill_moves_always_flip() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let table = BoltzmannTable::new(0.1).unwrap();
        let mut lattice = Lattice::warm(8, &mut rng).unwrap();

        let mut downhill = 0;
        for _ in 0..5000 {
            let before = lattice.clone();
            let trial = Metropolis.step(&mut lattice, &table, &mut rng);
            let (i, j) = (trial.row as isize, trial.col as isize);
            if energy_change(&before, trial.row, trial.col) <= 0 {
                downhill += 1;
                assert!(trial.flipped);
                assert_eq!(lattice.get(i, j), -before.get(i, j));
            }
            let expected_changes = if trial.flipped { 1 } else { 0 };
            assert_eq!(lattice.differing_sites(&before), expected_changes);
        }
        assert!(downhill > 0);
    }

    #[test]
    fn test_checkerboard_flips_every_draw() {
        let rows: Vec<Vec<i64>> = (0..6)
            .map(|i| (0..6).map(|j| if (i + j) % 2 == 0 { 1 } else { -1 }).collect())
            .collect();
        let checkerboard = Lattice::from_rows(&rows).unwrap();
        let table = BoltzmannTable::new(1.0).unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(3);

        let mut lattice = checkerboard.clone();
        let trial = Metropolis.step(&mut lattice, &table, &mut rng);
        assert!(trial.flipped);
        assert_eq!(lattice.differing_sites(&checkerboard), 1);
    }

    #[test]
    fn test_downhill_step_draws_only_the_site() {
        let rows: Vec<Vec<i64>> = (0..6)
            .map(|i| (0..6).map(|j| if (i + j) % 2 == 0 { 1 } else { -1 }).collect())
            .collect();
        let mut lattice = Lattice::from_rows(&rows).unwrap();
        let table = BoltzmannTable::new(1.0).unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(21);

        let mut expected = rng.clone();
        let trial = Metropolis.step(&mut lattice, &table, &mut rng);
        assert_eq!(draw_site(6, &mut expected), (trial.row, trial.col));
        assert!(trial.flipped);
        assert_eq!(rng, expected);
    }

    #[test]
    fn test_uphill_step_draws_site_and_acceptance() {
        let mut lattice = Lattice::cold(6).unwrap();
        let table = BoltzmannTable::new(1.0).unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(21);

        let mut expected = rng.clone();
        let trial = Metropolis.step(&mut lattice, &table, &mut rng);
        assert_eq!(draw_site(6, &mut expected), (trial.row, trial.col));
        assert_ne!(rng, expected);
        expected.gen::<f64>();
        assert_eq!(rng, expected);
    }

    #[test]
    fn test_cold_lattice_is_frozen_at_low_temperature() {
        // every flip costs 8 and exp(-800) underflows to zero
        let table = BoltzmannTable::new(0.01).unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let mut lattice = Lattice::cold(8).unwrap();
        for _ in 0..2000 {
            assert!(!Metropolis.step(&mut lattice, &table, &mut rng).flipped);
        }
        assert_eq!(lattice, Lattice::cold(8).unwrap());
    }

    #[test]
    fn test_uphill_moves_accepted_at_high_temperature() {
        let table = BoltzmannTable::new(1.0e12).unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(9);
        let mut lattice = Lattice::cold(8).unwrap();
        let trial = Metropolis.step(&mut lattice, &table, &mut rng);
        assert!(trial.flipped);
        assert_eq!(lattice.get(trial.row as isize, trial.col as isize), 1);
    }
}
