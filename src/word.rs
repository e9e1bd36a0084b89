//! Five-letter words and letter sets.
//!
//! Words are stored as ASCII bytes so that they are `Copy` and compare
//! cheaply inside the search loops.

use std::fmt;

use crate::error::GuessFormatError;
use crate::WORD_LENGTH;

/// A five-letter lowercase word.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    /// Parse a word made of exactly five ASCII letters. Uppercase letters are
    /// lowered; anything else is rejected.
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != WORD_LENGTH {
            return None;
        }
        let mut letters = [0u8; WORD_LENGTH];
        for (slot, &b) in letters.iter_mut().zip(bytes) {
            if !b.is_ascii_alphabetic() {
                return None;
            }
            *slot = b.to_ascii_lowercase();
        }
        Some(Self(letters))
    }

    /// Build a word from letters already known to be lowercase ASCII.
    pub(crate) const fn from_letters(letters: [u8; WORD_LENGTH]) -> Self {
        Self(letters)
    }

    pub fn letter(&self, pos: usize) -> u8 {
        self.0[pos]
    }

    pub fn contains(&self, letter: u8) -> bool {
        self.0.contains(&letter)
    }

    /// The distinct letters of this word.
    pub fn letter_set(&self) -> LetterSet {
        let mut set = LetterSet::EMPTY;
        for &b in &self.0 {
            set.insert(b);
        }
        set
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word(\"{}\")", self)
    }
}

/// A set of lowercase ASCII letters packed into a bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    pub const EMPTY: Self = Self(0);

    fn bit(letter: u8) -> u32 {
        debug_assert!(letter.is_ascii_lowercase());
        1 << (letter - b'a')
    }

    pub fn insert(&mut self, letter: u8) {
        self.0 |= Self::bit(letter);
    }

    pub fn contains(self, letter: u8) -> bool {
        self.0 & Self::bit(letter) != 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    pub fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Letters in `self` that are not in `other`.
    pub fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&c| self.contains(c))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

/// Check a typed guess against the allowed guess list.
pub fn validate_guess_format(input: &str, allowed: &[Word]) -> Result<Word, GuessFormatError> {
    let found = input.chars().count();
    if found != WORD_LENGTH {
        return Err(GuessFormatError::WrongLength { found });
    }
    Word::parse(input)
        .filter(|word| allowed.contains(word))
        .ok_or_else(|| GuessFormatError::NotInList(input.to_string()))
}
