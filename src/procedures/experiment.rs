//! Estimates the probability a sample drawn from a pool meets a target.
//!
//! # Overview
//!
//! An estimate is the fraction of trials which succeed, across some (non-zero) number of [trials](crate::procedures::trial).
//!
//! Roughly, a run is:
//!
//! ```rust,ignore
//! let mut successes = 0;
//! for _ in 0..trials {
//!     let mut hat = pool.clone();
//!     let sample = hat.draw(draw_size, rng);
//!     if target.is_met_by(&sample) {
//!         successes += 1;
//!     }
//! }
//! successes as f64 / trials as f64
//! ```
//!
//! Two methods are available:
//! - [run](GenericExperiment::run), on an experiment, with draw size, trial count, and rng given by the experiment.
//! - [experiment], which creates an experiment with rng seeded from the thread-local generator, so each call is independent.
//!
//! # Example
//!
//! ```rust
//! # use hat_draw::structures::{pool::Pool, target::Target};
//! # use hat_draw::procedures::experiment::experiment;
//! let pool = Pool::new([("red", 1), ("blue", 1)]).unwrap();
//! let target = Target::new([("red", 1)]).unwrap();
//!
//! let probability = experiment(&pool, &target, 1, 10_000).unwrap();
//! assert!((probability - 0.5).abs() < 0.03);
//! ```

use rand::SeedableRng;

use crate::{
    config::Config,
    experiment::GenericExperiment,
    generic::random::MinimalPCG32,
    misc::log::targets::{self},
    reports::Estimate,
    structures::{pool::Pool, target::Target},
    types::err::{self, ErrorKind},
};

impl<R: rand::Rng> GenericExperiment<R> {
    /// Runs [trials](crate::config::Config::trials) trials against the pool and target, and returns an estimate from those trials.
    ///
    /// Fails if the configured count of trials is zero.
    pub fn run(&mut self, pool: &Pool, target: &Target) -> Result<Estimate, ErrorKind> {
        let trials = self.config.trials.value;
        if trials == 0 {
            return Err(ErrorKind::from(err::InvalidArgument::ZeroTrials));
        }

        log::info!(target: targets::EXPERIMENT, "Running {trials} trials of {} draws from {pool}", self.config.draw_size.value);

        let mut successes = 0;
        for _ in 0..trials {
            if self.trial(pool, target) {
                successes += 1;
            }
        }

        let estimate = Estimate::new(successes, trials);
        log::info!(target: targets::EXPERIMENT, "Estimate: {estimate}");
        Ok(estimate)
    }
}

/// Estimates the probability that `draw_size` items drawn from `pool` meet `target`, from `trials` trials.
///
/// Each call uses fresh randomness, and so repeated calls return (slightly) different estimates.
/// Fails if `trials` is zero.
pub fn experiment(
    pool: &Pool,
    target: &Target,
    draw_size: usize,
    trials: usize,
) -> Result<f64, ErrorKind> {
    if trials == 0 {
        return Err(ErrorKind::from(err::InvalidArgument::ZeroTrials));
    }

    let mut config = Config::default();
    config.draw_size.set(draw_size)?;
    config.trials.set(trials)?;

    let rng = MinimalPCG32::from_rng(&mut rand::rng());
    let mut the_experiment = GenericExperiment::from_config_and_rng(config, rng);

    Ok(the_experiment.run(pool, target)?.probability())
}

#[cfg(test)]
mod experiment_tests {
    use super::*;
    use crate::experiment::Experiment;

    fn config(draw_size: usize, trials: usize, seed: u64) -> Config {
        let mut config = Config::default();
        config.draw_size.value = draw_size;
        config.trials.value = trials;
        config.seed.value = seed;
        config
    }

    #[test]
    fn zero_trials() {
        let pool = Pool::new([("red", 1)]).unwrap();
        let mut the_experiment = Experiment::from_config(config(1, 0, 0));

        assert_eq!(
            the_experiment.run(&pool, &Target::default()),
            Err(ErrorKind::InvalidArgument(err::InvalidArgument::ZeroTrials))
        );
        assert_eq!(
            experiment(&pool, &Target::default(), 1, 0),
            Err(ErrorKind::InvalidArgument(err::InvalidArgument::ZeroTrials))
        );
    }

    #[test]
    fn same_seed_same_estimate() {
        let pool = Pool::new([("red", 5), ("green", 2), ("blue", 4)]).unwrap();
        let target = Target::new([("red", 2), ("green", 1)]).unwrap();

        let a = Experiment::from_config(config(5, 500, 9)).run(&pool, &target);
        let b = Experiment::from_config(config(5, 500, 9)).run(&pool, &target);
        assert_eq!(a, b);
    }

    #[test]
    fn counters_accumulate_across_runs() {
        let pool = Pool::new([("red", 3)]).unwrap();
        let target = Target::new([("red", 1)]).unwrap();
        let mut the_experiment = Experiment::from_config(config(1, 10, 0));

        assert!(the_experiment.run(&pool, &target).is_ok());
        assert!(the_experiment.run(&pool, &target).is_ok());
        assert_eq!(the_experiment.counters.trials, 20);
        assert_eq!(the_experiment.counters.successes, 20);

        the_experiment.clear_counters();
        assert_eq!(the_experiment.counters.trials, 0);
    }

    #[test]
    fn pool_is_untouched() {
        let pool = Pool::new([("red", 2), ("blue", 2)]).unwrap();
        let before = pool.clone();
        let mut the_experiment = Experiment::from_config(config(3, 50, 1));

        assert!(the_experiment.run(&pool, &Target::default()).is_ok());
        assert_eq!(pool, before);
    }
}
