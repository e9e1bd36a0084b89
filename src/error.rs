//! Error types for the solver and its input boundary.

use thiserror::Error;

/// A typed guess was rejected before reaching the solver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuessFormatError {
    #[error("Guess needs to be of length 5 (got {found}).")]
    WrongLength { found: usize },

    #[error("'{0}' is not a valid word.")]
    NotInList(String),
}

/// A typed feedback pattern was rejected before reaching the solver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedbackFormatError {
    #[error("Result needs to be of length 5 (got {found}).")]
    WrongLength { found: usize },

    #[error("Only y, b, and g are valid inputs (found '{symbol}' at position {position}).")]
    InvalidSymbol { symbol: char, position: usize },
}

#[derive(Error, Debug)]
pub enum SolverError {
    /// Every candidate solution was eliminated. The applied feedback
    /// contradicts itself or the solution list.
    #[error("no candidate solutions remain; the feedback applied so far is inconsistent")]
    EmptyCandidatePool,

    #[error("invalid guess: {0}")]
    InvalidGuess(#[from] GuessFormatError),

    #[error("invalid feedback: {0}")]
    InvalidFeedback(#[from] FeedbackFormatError),

    /// A word list line that is not five ASCII letters after normalization.
    #[error("malformed word {word:?} on line {line}")]
    MalformedWord { line: usize, word: String },

    /// Applying a round's feedback left the constraints unchanged, so the
    /// search would pick the same guess forever.
    #[error("guess '{guess}' revealed nothing new; the search cannot make progress")]
    NoProgress { guess: String },

    /// A results log line that is not `word,count`.
    #[error("malformed results log entry on line {line}")]
    MalformedLog { line: usize },

    #[error("thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SolverError>;
