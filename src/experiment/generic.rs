use crate::config::Config;

use super::Counters;

/// A generic experiment, parameratised to a source of randomness.
///
/// # Example
///
/// ```rust
/// # use hat_draw::experiment::GenericExperiment;
/// # use hat_draw::config::Config;
/// let experiment = GenericExperiment::from_config_and_rng(Config::default(), rand::rng());
/// ```
pub struct GenericExperiment<R: rand::Rng> {
    /// The configuration of an experiment.
    pub config: Config,

    /// Counters related to the trials of an experiment.
    pub counters: Counters,

    /// The source of rng.
    pub rng: R,
}

impl<R: rand::Rng> GenericExperiment<R> {
    /// Creates an experiment from some given configuration and source of rng.
    ///
    /// The seed of the config is ignored, as the rng is given.
    pub fn from_config_and_rng(config: Config, rng: R) -> Self {
        Self {
            config,
            counters: Counters::default(),
            rng,
        }
    }

    /// Resets the counters of the experiment, leaving the configuration and rng as they are.
    pub fn clear_counters(&mut self) {
        self.counters = Counters::default();
    }
}
