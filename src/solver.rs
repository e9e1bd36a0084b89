//! Greedy expected-value Wordle solver.
//!
//! At each round the solver scores every allowed guess by the average number
//! of candidate solutions that would survive it, averaged over every
//! candidate that could still be the answer, and plays the guess with the
//! lowest score. This is a one-ply heuristic, not a game-tree search.

use std::sync::Arc;

use log::{debug, warn};
use rayon::ThreadPool;

use crate::constraints::ConstraintState;
use crate::error::{Result, SolverError};
use crate::evaluator::expected_remaining;
use crate::feedback::FeedbackPattern;
use crate::partition::{parallel_scores, worker_pool};
use crate::word::Word;

/// Below this many candidates the first candidate is played without scoring.
pub const SEARCH_THRESHOLD: usize = 3;

/// Result of analyzing a potential guess
#[derive(Debug, Clone, PartialEq)]
pub struct GuessAnalysis {
    pub word: Word,
    /// `None` when the guess was taken without scoring.
    pub expected_remaining: Option<f64>,
    pub is_possible_answer: bool,
}

/// One solving session: the constraint state plus the word lists it filters.
#[derive(Debug, Clone)]
pub struct Session {
    solutions: Arc<[Word]>,
    guesses: Arc<[Word]>,
    state: ConstraintState,
    hard_mode: bool,
}

impl Session {
    pub fn new(solutions: impl Into<Arc<[Word]>>, guesses: impl Into<Arc<[Word]>>) -> Self {
        Self {
            solutions: solutions.into(),
            guesses: guesses.into(),
            state: ConstraintState::new(),
            hard_mode: false,
        }
    }

    /// A fresh session sharing this session's word lists and mode.
    pub fn restart(&self) -> Self {
        Self {
            solutions: Arc::clone(&self.solutions),
            guesses: Arc::clone(&self.guesses),
            state: ConstraintState::new(),
            hard_mode: self.hard_mode,
        }
    }

    pub fn set_hard_mode(&mut self, enabled: bool) {
        self.hard_mode = enabled;
    }

    pub fn is_hard_mode(&self) -> bool {
        self.hard_mode
    }

    pub fn solutions(&self) -> &[Word] {
        &self.solutions
    }

    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    pub fn state(&self) -> &ConstraintState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ConstraintState {
        &mut self.state
    }

    pub fn apply_feedback(&mut self, guess: &Word, pattern: FeedbackPattern) {
        self.state.apply_feedback(guess, pattern);
    }

    /// Solutions consistent with everything learned so far.
    pub fn filtered_solutions(&self) -> Vec<Word> {
        self.state.filter(&self.solutions)
    }

    pub fn remaining_count(&self) -> usize {
        self.state.count_consistent(&self.solutions)
    }

    /// Guesses the player may make: all of them, or in hard mode only those
    /// consistent with the current constraints.
    pub fn guess_pool(&self) -> Vec<Word> {
        if self.hard_mode {
            self.state.filter(&self.guesses)
        } else {
            self.guesses.to_vec()
        }
    }

    /// Pick the next guess on the calling thread.
    pub fn pick_guess(&self) -> Result<Word> {
        self.best_guess(None).map(|a| a.word)
    }

    /// Pick the next guess, splitting the candidates across `workers` threads.
    pub fn pick_guess_parallel(&self, workers: usize) -> Result<Word> {
        let threads = worker_pool(workers)?;
        self.pick_guess_in(&threads)
    }

    /// Pick the next guess on an existing pool, one chunk per pool thread.
    pub fn pick_guess_in(&self, threads: &ThreadPool) -> Result<Word> {
        self.best_guess(Some(threads)).map(|a| a.word)
    }

    /// The guess with the lowest expected number of remaining candidates.
    ///
    /// Ties go to the guess that comes first in the guess pool.
    pub fn best_guess(&self, threads: Option<&ThreadPool>) -> Result<GuessAnalysis> {
        let filtered = self.filtered_solutions();
        let first = *filtered.first().ok_or(SolverError::EmptyCandidatePool)?;
        let unscored = GuessAnalysis {
            word: first,
            expected_remaining: None,
            is_possible_answer: true,
        };
        if filtered.len() < SEARCH_THRESHOLD {
            return Ok(unscored);
        }

        let pool = self.guess_pool();
        if pool.is_empty() {
            warn!("no allowed guess satisfies the hard mode constraints; playing {first}");
            return Ok(unscored);
        }

        let scores = self.score(&pool, &filtered, threads);
        let mut best = 0;
        for (i, &score) in scores.iter().enumerate().skip(1) {
            if score < scores[best] {
                best = i;
            }
        }
        let word = pool[best];
        debug!(
            "best of {} guesses over {} candidates: {} ({:.3})",
            pool.len(),
            filtered.len(),
            word,
            scores[best]
        );
        Ok(GuessAnalysis {
            word,
            expected_remaining: Some(scores[best]),
            is_possible_answer: filtered.contains(&word),
        })
    }

    /// The `n` best guesses, best first. Equal scores keep guess-pool order.
    pub fn rank_guesses(&self, n: usize, workers: Option<usize>) -> Result<Vec<GuessAnalysis>> {
        let filtered = self.filtered_solutions();
        if filtered.is_empty() {
            return Err(SolverError::EmptyCandidatePool);
        }
        let pool = self.guess_pool();
        if filtered.len() < SEARCH_THRESHOLD || pool.is_empty() {
            return Ok(filtered
                .iter()
                .take(n)
                .map(|&word| GuessAnalysis {
                    word,
                    expected_remaining: None,
                    is_possible_answer: true,
                })
                .collect());
        }

        let threads = workers.map(worker_pool).transpose()?;
        let scores = self.score(&pool, &filtered, threads.as_ref());
        let mut ranked: Vec<(Word, f64)> = pool.into_iter().zip(scores).collect();
        ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
        ranked.truncate(n);
        Ok(ranked
            .into_iter()
            .map(|(word, score)| GuessAnalysis {
                word,
                expected_remaining: Some(score),
                is_possible_answer: filtered.contains(&word),
            })
            .collect())
    }

    fn score(&self, pool: &[Word], filtered: &[Word], threads: Option<&ThreadPool>) -> Vec<f64> {
        match threads {
            None => pool
                .iter()
                .map(|guess| expected_remaining(&self.state, guess, filtered, filtered))
                .collect(),
            Some(threads) => {
                let workers = threads.current_num_threads();
                threads.install(|| parallel_scores(&self.state, pool, filtered, workers))
            }
        }
    }

    /// Play `first_guess`, then keep playing the best guess until the
    /// feedback is all hits. Every round is scored on `threads`. Returns every
    /// guess with its feedback.
    pub fn solve_with_feedback<F>(
        &mut self,
        first_guess: Word,
        threads: &ThreadPool,
        mut get_feedback: F,
    ) -> Result<Vec<(Word, FeedbackPattern)>>
    where
        F: FnMut(&Word) -> FeedbackPattern,
    {
        let mut rounds = Vec::new();
        let mut guess = first_guess;

        loop {
            let pattern = get_feedback(&guess);
            rounds.push((guess, pattern));

            if pattern.is_win() {
                break;
            }

            let before = self.state;
            self.apply_feedback(&guess, pattern);
            if self.state == before {
                return Err(SolverError::NoProgress {
                    guess: guess.to_string(),
                });
            }
            guess = self.pick_guess_in(threads)?;
        }

        Ok(rounds)
    }

    /// Solve a puzzle knowing the target word (for testing/benchmarking)
    pub fn solve_for_target(
        &mut self,
        target: &Word,
        first_guess: Word,
        threads: &ThreadPool,
    ) -> Result<Vec<(Word, FeedbackPattern)>> {
        self.solve_with_feedback(first_guess, threads, |guess| {
            FeedbackPattern::simulate(guess, target)
        })
    }
}
