//! Random array generation

use crate::config::ArrayConfig;
use crate::errors::Result;
use crate::snapshot::Value;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draw `config.len` values uniformly from `config.min..=config.max`.
///
/// Fails if the configuration is invalid (empty, oversized, or inverted
/// bounds).
pub fn generate<R: Rng + ?Sized>(config: &ArrayConfig, rng: &mut R) -> Result<Vec<Value>> {
    config.validate()?;
    Ok(fill(config, rng))
}

/// Generate without re-validating. `config` must already have passed
/// [`ArrayConfig::validate`].
pub(crate) fn fill<R: Rng + ?Sized>(config: &ArrayConfig, rng: &mut R) -> Vec<Value> {
    (0..config.len)
        .map(|_| rng.gen_range(config.min..=config.max))
        .collect()
}

/// RNG for array generation: seeded when reproducibility is wanted,
/// otherwise from OS entropy
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
