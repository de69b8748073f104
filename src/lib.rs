//! A library for estimating, by Monte Carlo simulation, the probability of drawing some collection of labelled items from a pool.
//!
//! hat_draw models a hat holding coloured balls.
//! Some number of balls are drawn from the hat, without replacement, and the draw is a success if, for each of some colours, at least some minimum number of balls of that colour were drawn.
//! The probability of success is estimated by repeating the draw many times, each time from a full hat, and taking the fraction of draws which succeed.
//!
//! Exact (combinatorial) probabilities are not computed.
//!
//! # Orientation
//!
//! The library is built around three structures:
//! - A [pool](crate::structures::pool), which is a multiset of labels supporting random draws without replacement.
//! - A [target](crate::structures::target), which is a minimum count for some labels.
//! - An [experiment](crate::experiment), which holds a [configuration](crate::config) and a source of rng, and makes trials against a pool and target.
//!
//! Useful starting points, then, may be:
//! - The [experiment procedure](crate::procedures::experiment), for the loop of trials.
//! - The [draw](crate::structures::pool::Pool::draw) method of a pool, for details of a single draw.
//!
//! # Examples
//!
//! + Estimate the probability of drawing at least two red balls and one green ball, when drawing five balls from a hat of five red, two green, and four blue balls.
//!
//! ```rust
//! # use hat_draw::structures::{pool::Pool, target::Target};
//! let hat = Pool::new([("red", 5), ("green", 2), ("blue", 4)]).unwrap();
//! let target = Target::new([("red", 2), ("green", 1)]).unwrap();
//!
//! let probability = hat_draw::experiment(&hat, &target, 5, 2000).unwrap();
//!
//! // The exact probability is 260/462.
//! assert!((probability - 0.5628).abs() < 0.05);
//! ```
//!
//! + The same, from a seeded experiment, with the pool and target read from text.
//!
//! ```rust
//! # use hat_draw::config::Config;
//! # use hat_draw::experiment::Experiment;
//! # use hat_draw::structures::{pool::Pool, target::Target};
//! let hat: Pool = "red=5 green=2 blue=4".parse().unwrap();
//! let target: Target = "red=2 green=1".parse().unwrap();
//!
//! let mut config = Config::default();
//! config.seed.value = 73;
//!
//! let estimate = Experiment::from_config(config.clone()).run(&hat, &target).unwrap();
//! let again = Experiment::from_config(config).run(&hat, &target).unwrap();
//! assert_eq!(estimate, again);
//! assert_eq!(estimate.trials(), 2000);
//! ```
//!
//! # Logs
//!
//! To help diagnose issues calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - The estimate of each run can be found with `RUST_LOG=experiment=info …`
//! - Every sample drawn, and whether it met the target, can be found with `RUST_LOG=trial=trace …`
//!

pub mod builder;
pub mod procedures;

pub mod config;
pub mod experiment;
pub mod reports;
pub mod structures;
pub mod types;

pub mod generic;

pub mod misc;

pub use procedures::experiment::experiment;
