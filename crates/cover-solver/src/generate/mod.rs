//! Random problem instances.
//!
//! An instance has a uniformly drawn number of subsets named `S1..Sn`.
//! Each subset has a uniformly drawn size and its elements are sampled
//! without replacement from `0..universe`. Both ranges are inclusive.

pub mod rng;

use rand::seq::index;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use cover_ir::types::{Element, Subset, SubsetCollection};

use self::rng::stream_rng;

/// Generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Elements are drawn from `0..universe`.
    pub universe: usize,
    /// Inclusive bounds on the number of subsets.
    pub num: (usize, usize),
    /// Inclusive bounds on the size of each subset.
    pub size: (usize, usize),
    /// RNG seed. None = draw one from the OS.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            universe: 1_000,
            num: (100, 500),
            size: (10, 30),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeneratorError {
    #[error("Invalid subset count bounds: lower ({lower}) must be below upper ({upper})")]
    InvalidCount { lower: usize, upper: usize },

    #[error(
        "Invalid subset size bounds: need lower ({lower}) < upper ({upper}) < universe ({universe})"
    )]
    InvalidSize {
        lower: usize,
        upper: usize,
        universe: usize,
    },
}

impl GeneratorConfig {
    /// Require `num.0 < num.1` and `size.0 < size.1 < universe`.
    pub fn check(&self) -> Result<(), GeneratorError> {
        let (num_lower, num_upper) = self.num;
        if num_lower >= num_upper {
            return Err(GeneratorError::InvalidCount {
                lower: num_lower,
                upper: num_upper,
            });
        }
        let (size_lower, size_upper) = self.size;
        if size_lower >= size_upper || size_upper >= self.universe {
            return Err(GeneratorError::InvalidSize {
                lower: size_lower,
                upper: size_upper,
                universe: self.universe,
            });
        }
        Ok(())
    }
}

/// A generated instance and the seed that reproduces it.
#[derive(Debug, Clone)]
pub struct GeneratedInstance {
    pub seed: u64,
    pub collection: SubsetCollection,
}

/// Build a random instance from `config`.
pub fn generate(config: &GeneratorConfig) -> Result<GeneratedInstance, GeneratorError> {
    config.check()?;
    let seed = config.seed.unwrap_or_else(rand::random);

    let count = stream_rng(seed, 0).gen_range(config.num.0..=config.num.1);
    debug!(seed, count, "generating instance");

    let subsets = (1..=count)
        .map(|i| {
            let mut rng = stream_rng(seed, i as u64);
            let size = rng.gen_range(config.size.0..=config.size.1);
            let elements = index::sample(&mut rng, config.universe, size)
                .into_iter()
                .map(|e| Element::Int(e as i64));
            Subset::new(format!("S{i}"), elements)
        })
        .collect();

    Ok(GeneratedInstance {
        seed,
        collection: SubsetCollection::new(subsets),
    })
}
