use std::path::PathBuf;

use crate::error::Result;
use crate::solver::Session;
use crate::word::Word;
use crate::wordlist::load_word_list;

/// Opening guess used when none is configured.
pub const DEFAULT_FIRST_GUESS: Word = Word::from_letters(*b"roate");

/// Runtime configuration for a solving session and the batch harness.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Word list of possible solutions, one per line.
    pub solutions_path: PathBuf,
    /// Word list of allowed guesses, one per line.
    pub guesses_path: PathBuf,
    /// Restrict guesses to words consistent with the feedback so far.
    pub hard_mode: bool,
    /// Number of search workers.
    pub workers: usize,
    /// Opening guess for self-play and batch runs.
    pub first_guess: Word,
    /// Append-only `solution,rounds` log written by the batch harness.
    pub results_path: PathBuf,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            solutions_path: PathBuf::from("wordlist_solutions.txt"),
            guesses_path: PathBuf::from("wordlist_guesses.txt"),
            hard_mode: false,
            workers: rayon::current_num_threads(),
            first_guess: DEFAULT_FIRST_GUESS,
            results_path: PathBuf::from("results.txt"),
        }
    }
}

impl SolverConfig {
    /// Load both word lists and start a session in the configured mode.
    pub fn load_session(&self) -> Result<Session> {
        let solutions = load_word_list(&self.solutions_path)?;
        let guesses = load_word_list(&self.guesses_path)?;
        let mut session = Session::new(solutions, guesses);
        session.set_hard_mode(self.hard_mode);
        Ok(session)
    }
}
