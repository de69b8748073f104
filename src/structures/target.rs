//! The success criterion of a trial: a minimum count for each of some labels.
//!
//! A sample meets a target if, for every (label, minimum) pair of the target, the sample contains at least the minimum number of items with the label.
//! Labels of the sample absent from the target are ignored, and so every sample meets the empty target.
//!
//! ```rust
//! # use hat_draw::structures::target::Target;
//! let target = Target::new([("red", 2), ("green", 1)]).unwrap();
//!
//! assert!(target.is_met_by(&["red", "green", "red", "blue"]));
//! assert!(!target.is_met_by(&["red", "green", "blue"]));
//! assert!(Target::default().is_met_by::<&str>(&[]));
//! ```

use crate::{
    structures::Label,
    types::err::{self, ErrorKind},
};

/// Minimum counts, by label.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Target {
    minimums: Vec<(Label, usize)>,
}

impl Target {
    /// Creates a target from (label, minimum) pairs.
    ///
    /// Fails if any minimum is negative, naming the first such label.
    pub fn new<L: Into<Label>>(
        minimums: impl IntoIterator<Item = (L, i64)>,
    ) -> Result<Self, ErrorKind> {
        let mut collected = Vec::default();

        for (label, count) in minimums {
            let label = label.into();
            if count < 0 {
                return Err(ErrorKind::from(err::InvalidArgument::NegativeMinimum {
                    label,
                    count,
                }));
            }
            collected.push((label, count as usize));
        }

        Ok(Target {
            minimums: collected,
        })
    }

    /// The (label, minimum) pairs of the target, in the order given.
    pub fn minimums(&self) -> &[(Label, usize)] {
        &self.minimums
    }

    pub fn is_empty(&self) -> bool {
        self.minimums.is_empty()
    }

    /// Whether the sample contains at least the minimum count of each label of the target.
    pub fn is_met_by<S: AsRef<str>>(&self, sample: &[S]) -> bool {
        self.minimums.iter().all(|(label, minimum)| {
            sample
                .iter()
                .filter(|item| AsRef::<str>::as_ref(*item) == label.as_str())
                .count()
                >= *minimum
        })
    }
}
