//! Everything known about the hidden solution from the feedback so far.

use crate::feedback::{Feedback, FeedbackPattern};
use crate::word::{LetterSet, Word};
use crate::WORD_LENGTH;

/// Accumulated letter-position constraints.
///
/// The state is a small `Copy` value, so hypothetical states built during the
/// search are independent copies that never alias the session's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConstraintState {
    /// Letters known to be at a specific position (green)
    position_lock: [Option<u8>; WORD_LENGTH],
    /// Letters known not to be at a specific position (yellow)
    position_exclusions: [LetterSet; WORD_LENGTH],
    /// Letters known to appear somewhere in the solution (yellow)
    required: LetterSet,
    /// Letters reported absent (gray)
    excluded: LetterSet,
}

impl ConstraintState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&mut self, pos: usize, letter: u8) {
        self.position_lock[pos] = Some(letter);
    }

    pub fn record_present(&mut self, pos: usize, letter: u8) {
        self.required.insert(letter);
        self.position_exclusions[pos].insert(letter);
    }

    pub fn record_absent(&mut self, letter: u8) {
        self.excluded.insert(letter);
    }

    /// Update constraints based on a guess and its feedback
    pub fn apply_feedback(&mut self, guess: &Word, pattern: FeedbackPattern) {
        for (i, fb) in pattern.feedbacks().into_iter().enumerate() {
            let c = guess.letter(i);
            match fb {
                Feedback::Hit => self.record_hit(i, c),
                Feedback::Present => self.record_present(i, c),
                Feedback::Absent => self.record_absent(c),
            }
        }
    }

    /// The state that would follow if `guess` were played and `solution` were
    /// the answer. `self` is left untouched.
    pub fn hypothetical(&self, guess: &Word, solution: &Word) -> Self {
        let mut next = *self;
        next.apply_feedback(guess, FeedbackPattern::simulate(guess, solution));
        next
    }

    pub fn position_lock(&self, pos: usize) -> Option<u8> {
        self.position_lock[pos]
    }

    pub fn position_exclusions(&self, pos: usize) -> LetterSet {
        self.position_exclusions[pos]
    }

    pub fn required_letters(&self) -> LetterSet {
        self.required
    }

    pub fn excluded_letters(&self) -> LetterSet {
        self.excluded
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Every locked position holds its locked letter.
    pub fn hit_check(&self, word: &Word) -> bool {
        self.position_lock
            .iter()
            .enumerate()
            .all(|(i, lock)| lock.map_or(true, |c| word.letter(i) == c))
    }

    /// Every required letter occurs somewhere in the word.
    pub fn required_check(&self, word: &Word) -> bool {
        self.required.is_subset(word.letter_set())
    }

    /// No letter of the word is excluded, unless it is also required. A
    /// letter reported both present and absent came from a repeated guess
    /// letter, so it only rules out the extra occurrence.
    pub fn absent_check(&self, word: &Word) -> bool {
        !self
            .excluded
            .difference(self.required)
            .intersects(word.letter_set())
    }

    /// No position holds a letter known not to be there.
    pub fn exclusion_check(&self, word: &Word) -> bool {
        (0..WORD_LENGTH).all(|i| !self.position_exclusions[i].contains(word.letter(i)))
    }

    /// Check if a word satisfies all constraints
    pub fn is_consistent(&self, word: &Word) -> bool {
        self.hit_check(word)
            && self.required_check(word)
            && self.absent_check(word)
            && self.exclusion_check(word)
    }

    /// The words consistent with this state, in input order.
    pub fn filter(&self, words: &[Word]) -> Vec<Word> {
        words.iter().copied().filter(|w| self.is_consistent(w)).collect()
    }

    pub fn count_consistent(&self, words: &[Word]) -> usize {
        words.iter().filter(|w| self.is_consistent(w)).count()
    }
}
