use nalgebra::DMatrix;
use rand::Rng;
use rand_distr::{Distribution, Uniform};
use crate::error::{IsingError, Result};

/// A single spin, always -1 or +1.
pub type Spin = i8;

/// Starting configuration of the lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialCondition {
    /// Every spin set to -1.
    Cold,
    /// Every spin drawn independently and uniformly from {-1, +1}.
    Warm,
}

impl TryFrom<u8> for InitialCondition {
    type Error = IsingError;

    fn try_from(selector: u8) -> Result<Self> {
        match selector {
            1 => Ok(Self::Cold),
            2 => Ok(Self::Warm),
            other => Err(IsingError::InvalidInitialCondition(other)),
        }
    }
}

/// Square N x N lattice of spins with periodic boundary conditions.
///
/// Every accessor takes signed coordinates and wraps them modulo N, so the
/// four nearest neighbours of any site are always addressable as `i +/- 1`
/// and `j +/- 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    size: usize,
    spins: DMatrix<Spin>,
}

impl Lattice {
    pub fn new<R: Rng + ?Sized>(size: usize, initial: InitialCondition, rng: &mut R) -> Result<Self> {
        match initial {
            InitialCondition::Cold => Self::cold(size),
            InitialCondition::Warm => Self::warm(size, rng),
        }
    }

    pub fn cold(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(IsingError::EmptyLattice);
        }
        Ok(Self {
            size,
            spins: DMatrix::from_element(size, size, -1),
        })
    }

    pub fn warm<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self> {
        if size == 0 {
            return Err(IsingError::EmptyLattice);
        }
        let coin = Uniform::new_inclusive(0i8, 1);
        let spins = DMatrix::from_fn(size, size, |_, _| 2 * coin.sample(rng) - 1);
        Ok(Self { size, spins })
    }

    /// Build a lattice from row-major integer data.
    ///
    /// The data must describe a square grid and every cell must be -1 or 1.
    pub fn from_rows(rows: &[Vec<i64>]) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(IsingError::EmptyLattice);
        }
        if let Some(row) = rows.iter().find(|row| row.len() != size) {
            return Err(IsingError::DimensionMismatch {
                expected: size,
                rows: size,
                cols: row.len(),
            });
        }

        let mut spins = DMatrix::from_element(size, size, -1);
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                spins[(row, col)] = match value {
                    -1 => -1,
                    1 => 1,
                    _ => return Err(IsingError::InvalidSpin { row, col, value }),
                };
            }
        }
        Ok(Self { size, spins })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn wrap(&self, index: isize) -> usize {
        index.rem_euclid(self.size as isize) as usize
    }

    #[inline]
    pub fn get(&self, i: isize, j: isize) -> Spin {
        self.spins[(self.wrap(i), self.wrap(j))]
    }

    /// Overwrite one spin. Values other than -1 and 1 are rejected.
    pub fn set(&mut self, i: isize, j: isize, spin: Spin) -> Result<()> {
        let (row, col) = (self.wrap(i), self.wrap(j));
        if spin != -1 && spin != 1 {
            return Err(IsingError::InvalidSpin { row, col, value: spin as i64 });
        }
        self.spins[(row, col)] = spin;
        Ok(())
    }

    /// Reverse the spin at (i, j).
    #[inline]
    pub fn flip(&mut self, i: isize, j: isize) {
        let site = (self.wrap(i), self.wrap(j));
        self.spins[site] = -self.spins[site];
    }

    pub fn same_shape(&self, other: &Lattice) -> bool {
        self.size == other.size
    }

    /// Number of sites whose spins differ between two equally sized lattices.
    ///
    /// # Panics
    ///
    /// Panics if the lattices have different sizes.
    pub fn differing_sites(&self, other: &Lattice) -> usize {
        assert!(
            self.same_shape(other),
            "lattice sizes differ: {} vs {}",
            self.size,
            other.size
        );
        self.spins
            .iter()
            .zip(other.spins.iter())
            .filter(|(a, b)| a != b)
            .count()
    }

    /// Fraction of sites whose spins match between two equally sized lattices.
    pub fn agreement(&self, other: &Lattice) -> f64 {
        let n_sites = self.size * self.size;
        (n_sites - self.differing_sites(other)) as f64 / n_sites as f64
    }

    pub fn row(&self, i: usize) -> Vec<Spin> {
        self.spins.row(i).iter().copied().collect()
    }

    pub fn as_matrix(&self) -> &DMatrix<Spin> {
        &self.spins
    }
}
