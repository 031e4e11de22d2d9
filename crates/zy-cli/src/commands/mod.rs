pub mod cast;
pub mod consult;
pub mod lookup;

use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;
use zy_canon::Canon;

/// Load the reference dataset, reporting a friendly error.
fn load_canon(path: &Path) -> Result<Canon, String> {
    Canon::load(path)
        .map_err(|e| format!("cannot load reference data from {}: {e}", path.display()))
}

/// Seed an RNG: explicit seed for reproducible casts, OS entropy otherwise.
fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
