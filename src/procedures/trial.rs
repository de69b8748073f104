//! A single trial of an experiment.
//!
//! A trial:
//! - Clones the pool, so the trial starts from the composition the pool was built with.
//! - Draws [draw_size](crate::config::Config::draw_size) items from the clone.
//! - Tests whether the sample meets the target.
//!
//! The clone is dropped at the end of the trial, and the pool given is never drawn from.
//! So, every trial of a run is independent of every other trial, other than through the shared source of rng.

use crate::{
    experiment::GenericExperiment,
    misc::log::targets::{self},
    structures::{pool::Pool, target::Target},
};

impl<R: rand::Rng> GenericExperiment<R> {
    /// Makes a single trial, and returns whether the sample drawn met the target.
    ///
    /// ```rust
    /// # use hat_draw::config::Config;
    /// # use hat_draw::experiment::Experiment;
    /// # use hat_draw::structures::{pool::Pool, target::Target};
    /// let mut config = Config::default();
    /// config.draw_size.value = 1;
    /// let mut the_experiment = Experiment::from_config(config);
    ///
    /// let pool = Pool::new([("red", 1)]).unwrap();
    /// assert!(the_experiment.trial(&pool, &Target::new([("red", 1)]).unwrap()));
    /// assert!(!the_experiment.trial(&pool, &Target::new([("blue", 1)]).unwrap()));
    /// assert_eq!(the_experiment.counters.successes, 1);
    /// ```
    pub fn trial(&mut self, pool: &Pool, target: &Target) -> bool {
        let mut hat = pool.clone();
        let sample = hat.draw(self.config.draw_size.value, &mut self.rng);

        let success = target.is_met_by(&sample);
        log::trace!(target: targets::TRIAL, "Sample {sample:?} met target: {success}");

        self.counters.trials += 1;
        if success {
            self.counters.successes += 1;
        }

        success
    }
}
