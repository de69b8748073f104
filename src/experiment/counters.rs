/// Counts of trials made by an experiment, across every run until cleared.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// A count of every trial made.
    pub trials: usize,

    /// A count of trials whose sample met the target.
    pub successes: usize,
}
