/*!
Reports from an experiment.
*/

/// An estimate of a probability, from the trials of a single run of an experiment.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Estimate {
    successes: usize,
    trials: usize,
}

impl Estimate {
    /// An estimate from a non-zero count of trials.
    pub(crate) fn new(successes: usize, trials: usize) -> Self {
        debug_assert!(trials > 0 && successes <= trials);
        Estimate { successes, trials }
    }

    /// A count of trials whose sample met the target.
    pub fn successes(&self) -> usize {
        self.successes
    }

    /// A count of trials made.
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// The fraction of trials which succeeded, in [0, 1].
    pub fn probability(&self) -> f64 {
        self.successes as f64 / self.trials as f64
    }

    /// The standard error of the estimate, sqrt(p(1 - p) / n).
    pub fn standard_error(&self) -> f64 {
        let p = self.probability();
        (p * (1.0 - p) / self.trials as f64).sqrt()
    }
}

impl std::fmt::Display for Estimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.4} ± {:.4} ({} of {} trials)",
            self.probability(),
            self.standard_error(),
            self.successes,
            self.trials
        )
    }
}

#[cfg(test)]
mod estimate_tests {
    use super::*;

    #[test]
    fn certain() {
        let estimate = Estimate::new(10, 10);
        assert_eq!(estimate.probability(), 1.0);
        assert_eq!(estimate.standard_error(), 0.0);
    }

    #[test]
    fn display() {
        let estimate = Estimate::new(1, 4);
        assert_eq!(estimate.to_string(), "0.2500 ± 0.2165 (1 of 4 trials)");
    }
}
