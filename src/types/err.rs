//! Error types used in the library.
//!
//! - Every error is a precondition violation, detected eagerly when a pool, target, or experiment is built or run.
//! - No error is transient, and so no error is retried internally.
//!
//! Names of the error enums overlap with the areas they relate to.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::Label;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Config(ConfigError),
    InvalidArgument(InvalidArgument),
    Parse(ParseError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::InvalidArgument(e) => write!(f, "Invalid argument: {e}"),
            Self::Parse(e) => write!(f, "Parse error: {e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Arguments which cannot be used to build a pool or target, or to run an experiment.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InvalidArgument {
    /// A negative count was given for some label of a pool.
    NegativeCount { label: Label, count: i64 },

    /// A negative minimum was given for some label of a target.
    NegativeMinimum { label: Label, count: i64 },

    /// The composition of a pool had no items, as every count was zero or there were no labels.
    EmptyPool,

    /// An experiment was asked to run zero trials, and so has no estimate.
    ZeroTrials,
}

impl std::fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeCount { label, count } => {
                write!(f, "the count of '{label}' is negative ({count})")
            }
            Self::NegativeMinimum { label, count } => {
                write!(f, "the minimum for '{label}' is negative ({count})")
            }
            Self::EmptyPool => write!(f, "a pool must contain at least one item"),
            Self::ZeroTrials => write!(f, "at least one trial is required"),
        }
    }
}

impl From<InvalidArgument> for ErrorKind {
    fn from(e: InvalidArgument) -> Self {
        ErrorKind::InvalidArgument(e)
    }
}

/// Errors when reading a composition from text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// No `label=count` pairs were found.
    Empty,

    /// A malformed pair, at the given (zero-indexed) position.
    ///
    /// A pair is malformed if it has no `=`, an empty label, or a count which is not an integer.
    Pair(usize),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "no label=count pairs found"),
            Self::Pair(position) => write!(f, "malformed label=count pair at position {position}"),
        }
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors when revising a configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// A value outside the bounds of the named option.
    OutOfBounds(&'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfBounds(name) => write!(f, "value out of bounds for {name}"),
        }
    }
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}
