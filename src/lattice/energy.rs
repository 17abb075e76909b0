use super::Lattice;

/// Energy cost of flipping the spin at (i, j).
///
/// `dE = 2 s_ij (s_{i-1,j} + s_{i+1,j} + s_{i,j-1} + s_{i,j+1})` with the
/// coupling and Boltzmann constants folded into the temperature scale. With
/// four neighbours of unit magnitude the result is one of -8, -4, 0, 4, 8.
#[inline]
pub fn energy_change(lattice: &Lattice, i: usize, j: usize) -> i32 {
    let (i, j) = (i as isize, j as isize);
    let neighbours = lattice.get(i - 1, j) as i32
        + lattice.get(i + 1, j) as i32
        + lattice.get(i, j - 1) as i32
        + lattice.get(i, j + 1) as i32;
    2 * lattice.get(i, j) as i32 * neighbours
}
