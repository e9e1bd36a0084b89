//! # Expected Wordle
//!
//! A multithreaded Wordle solver that plays the guess expected to leave the
//! fewest candidate solutions.
//!
//! Feedback from each round narrows a [`ConstraintState`]. To choose the next
//! guess, the solver pretends each remaining candidate is the answer,
//! simulates the feedback every allowed guess would get, and counts how many
//! candidates would survive. The guess with the lowest average wins. The
//! candidates can be split across worker threads whose partial averages are
//! merged by chunk weight.

pub mod config;
pub mod constraints;
pub mod error;
pub mod evaluator;
pub mod feedback;
pub mod harness;
pub mod interactive;
pub mod partition;
pub mod solver;
pub mod word;
pub mod wordlist;

pub use config::SolverConfig;
pub use constraints::ConstraintState;
pub use error::{FeedbackFormatError, GuessFormatError, Result, SolverError};
pub use feedback::{validate_feedback_format, Feedback, FeedbackPattern};
pub use solver::{GuessAnalysis, Session};
pub use word::{validate_guess_format, LetterSet, Word};
pub use wordlist::{load_word_list, parse_word_list};

/// Word length for Wordle
pub const WORD_LENGTH: usize = 5;
