//! Generic structures, not specific to pools or experiments.

pub mod random;
