//! Scoring a single guess by the number of candidates it is expected to leave.

use crate::constraints::ConstraintState;
use crate::word::Word;

/// Incremental arithmetic mean over a finite set of samples.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunningMean {
    mean: f64,
    count: usize,
}

impl RunningMean {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sample: f64) {
        self.count += 1;
        self.mean += (sample - self.mean) / self.count as f64;
    }

    /// The mean of the samples pushed so far; 0 when there are none.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl FromIterator<f64> for RunningMean {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut acc = Self::new();
        for sample in iter {
            acc.push(sample);
        }
        acc
    }
}

/// Average number of words in `pool` left consistent after playing `guess`,
/// taken over every hypothetical answer in `solutions`.
pub fn expected_remaining(
    state: &ConstraintState,
    guess: &Word,
    solutions: &[Word],
    pool: &[Word],
) -> f64 {
    solutions
        .iter()
        .map(|solution| state.hypothetical(guess, solution).count_consistent(pool) as f64)
        .collect::<RunningMean>()
        .mean()
}
