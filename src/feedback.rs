//! Feedback patterns for Wordle guesses.
//!
//! This module handles parsing the colour pattern a player types in and
//! simulating the pattern a guess would receive against a hypothetical
//! solution.

use std::fmt;

use crate::error::FeedbackFormatError;
use crate::word::Word;
use crate::WORD_LENGTH;

/// Represents the feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Correct letter in correct position (green)
    Hit,
    /// Letter occurs elsewhere in the solution (yellow)
    Present,
    /// Letter not in the solution (gray)
    Absent,
}

impl Feedback {
    /// Convert to a character for display
    pub fn to_char(self) -> char {
        match self {
            Feedback::Hit => '🟩',
            Feedback::Present => '🟨',
            Feedback::Absent => '⬛',
        }
    }

    /// The symbol used when typing a pattern (g=green, y=yellow, b=black/gray)
    pub fn symbol(self) -> char {
        match self {
            Feedback::Hit => 'g',
            Feedback::Present => 'y',
            Feedback::Absent => 'b',
        }
    }

    /// Parse from a typed symbol
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'g' => Some(Feedback::Hit),
            'y' => Some(Feedback::Present),
            'b' => Some(Feedback::Absent),
            _ => None,
        }
    }
}

/// A complete feedback pattern for a 5-letter guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackPattern([Feedback; WORD_LENGTH]);

impl FeedbackPattern {
    /// The pattern indicating all letters hit (winning)
    pub const ALL_HIT: Self = Self([Feedback::Hit; WORD_LENGTH]);

    pub fn new(feedbacks: [Feedback; WORD_LENGTH]) -> Self {
        Self(feedbacks)
    }

    /// Simulate the pattern `guess` would receive if `solution` were the answer.
    ///
    /// A non-hit letter is marked present whenever it occurs anywhere in the
    /// solution. Occurrences are not consumed, so a repeated guess letter can
    /// be marked present more than once against a single occurrence in the
    /// solution (`"geese"` against `"creep"` yields `bygby`). Guess quality
    /// depends on this rule; it is not the official duplicate-letter rule.
    pub fn simulate(guess: &Word, solution: &Word) -> Self {
        let solution_letters = solution.letter_set();
        let mut feedback = [Feedback::Absent; WORD_LENGTH];
        for (i, slot) in feedback.iter_mut().enumerate() {
            let c = guess.letter(i);
            if c == solution.letter(i) {
                *slot = Feedback::Hit;
            } else if solution_letters.contains(c) {
                *slot = Feedback::Present;
            }
        }
        Self(feedback)
    }

    pub fn feedbacks(self) -> [Feedback; WORD_LENGTH] {
        self.0
    }

    /// Check if this pattern represents a win (all hit)
    pub fn is_win(self) -> bool {
        self == Self::ALL_HIT
    }

    /// Parse a pattern from a string like "gybbb"
    pub fn parse(s: &str) -> Result<Self, FeedbackFormatError> {
        let found = s.chars().count();
        if found != WORD_LENGTH {
            return Err(FeedbackFormatError::WrongLength { found });
        }
        let mut feedbacks = [Feedback::Absent; WORD_LENGTH];
        for (position, (slot, symbol)) in feedbacks.iter_mut().zip(s.chars()).enumerate() {
            *slot = Feedback::from_symbol(symbol)
                .ok_or(FeedbackFormatError::InvalidSymbol { symbol, position })?;
        }
        Ok(Self(feedbacks))
    }

    /// The typed form, e.g. "bbyyg"
    pub fn to_symbols(self) -> String {
        self.0.iter().map(|f| f.symbol()).collect()
    }

    /// Display as emoji string
    pub fn to_emoji_string(self) -> String {
        self.0.iter().map(|f| f.to_char()).collect()
    }
}

impl fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji_string())
    }
}

/// Check a typed feedback pattern.
pub fn validate_feedback_format(pattern: &str) -> Result<FeedbackPattern, FeedbackFormatError> {
    FeedbackPattern::parse(pattern)
}
