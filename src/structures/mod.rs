//! Key structures: pools of labelled items, and the targets a draw from a pool is measured against.
//!
//! # Labels
//!
//! A [Label] names a kind of item in a pool, e.g. the colour of a ball in a hat.
//! Items with the same label are indistinguishable, and so a pool is a multiset of labels.
//!
//! # Samples
//!
//! The result of a [draw](pool::Pool::draw) is a sample: a sequence of labels, whose order carries no meaning.
//! Samples have no structure of their own, and are represented as a vector of labels.

pub mod pool;
pub mod target;

/// The name of a kind of item.
pub type Label = String;
