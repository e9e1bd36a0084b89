//! Loading word lists, one word per line.

use std::fs;
use std::path::Path;

use log::info;

use crate::error::{Result, SolverError};
use crate::word::Word;

/// Parse a word list. Lines are trimmed and lowercased, blank lines are
/// skipped, and order is preserved.
pub fn parse_word_list(contents: &str) -> Result<Vec<Word>> {
    contents
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim().to_lowercase()))
        .filter(|(_, word)| !word.is_empty())
        .map(|(line, word)| Word::parse(&word).ok_or(SolverError::MalformedWord { line, word }))
        .collect()
}

pub fn load_word_list(path: impl AsRef<Path>) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let words = parse_word_list(&fs::read_to_string(path)?)?;
    info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}
