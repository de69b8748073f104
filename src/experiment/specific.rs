use crate::{config::Config, generic::random::MinimalPCG32};

use rand::SeedableRng;

use super::GenericExperiment;

/// An experiment which uses [MinimalPCG32] as a source of randomness.
pub type Experiment = GenericExperiment<MinimalPCG32>;

impl Experiment {
    /// Creates an experiment from some given configuration, with rng seeded from the configuration.
    ///
    /// Two experiments created from the same configuration make the same draws.
    pub fn from_config(config: Config) -> Self {
        let rng = MinimalPCG32::from_seed(config.seed.value.to_le_bytes());
        Self::from_config_and_rng(config, rng)
    }
}
