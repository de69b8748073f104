//! Procedures made within an experiment.
//!
//! For the most part these are methods accessed via an experiment, and primarily placed here for documentation.

pub mod experiment;
pub mod trial;
