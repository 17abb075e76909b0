use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Random source owned by a simulation run.
pub type SpinRng = ChaCha20Rng;

/// Seeded generator for reproducible runs, entropy-seeded otherwise.
pub fn spin_rng(seed: Option<u64>) -> SpinRng {
    match seed {
        Some(seed) => ChaCha20Rng::seed_from_u64(seed),
        None => ChaCha20Rng::from_entropy(),
    }
}
