//! Cumulative letter knowledge across a game
//!
//! Folds per-guess feedback into three kinds of evidence about the secret:
//! letters confirmed at a position, letters known to occur but excluded from
//! specific positions, and letters eliminated outright. A presentation layer
//! (keyboard coloring, hints) reads this; the solver does not need it, since
//! candidate filtering re-derives constraints from the raw history.

use super::feedback::{Feedback, LetterScore};
use super::word::{WORD_LEN, Word};
use rustc_hash::{FxHashMap, FxHashSet};

/// Letter-state knowledge accumulated from scored guesses
///
/// Invariant: a letter confirmed `Correct` at any position (or known present)
/// is never simultaneously in the eliminated set. The fold upholds this with
/// a repeated-letter guard: an `Absent` mark only eliminates a letter when no
/// other occurrence of it was credited in the same guess, and a letter
/// already known to occur is never eliminated by later evidence.
#[derive(Debug, Clone, Default)]
pub struct LetterKnowledge {
    confirmed: [Option<u8>; WORD_LEN],
    misplaced: FxHashMap<u8, FxHashSet<usize>>,
    required: FxHashSet<u8>,
    eliminated: FxHashSet<u8>,
}

impl LetterKnowledge {
    /// Fresh knowledge with no evidence
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one scored guess into the accumulated knowledge
    pub fn fold(&mut self, guess: &Word, feedback: &Feedback) {
        // Credited positions first, so the Absent guard below sees the full
        // picture for this guess
        for i in 0..WORD_LEN {
            let letter = guess.letters()[i];
            match feedback.at(i) {
                LetterScore::Correct => {
                    self.confirmed[i] = Some(letter);
                    self.required.insert(letter);
                    self.eliminated.remove(&letter);
                }
                LetterScore::Present => {
                    self.misplaced.entry(letter).or_default().insert(i);
                    self.required.insert(letter);
                    self.eliminated.remove(&letter);
                }
                LetterScore::Absent => {}
            }
        }

        for i in 0..WORD_LEN {
            let letter = guess.letters()[i];
            if feedback.at(i) == LetterScore::Absent
                && feedback.credits(guess, letter) == 0
                && !self.required.contains(&letter)
            {
                self.eliminated.insert(letter);
            }
        }
    }

    /// Letter confirmed at a position, if any
    #[inline]
    #[must_use]
    pub const fn confirmed_at(&self, position: usize) -> Option<u8> {
        self.confirmed[position]
    }

    /// All confirmed (position, letter) pairs
    pub fn confirmed(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.confirmed
            .iter()
            .enumerate()
            .filter_map(|(i, letter)| letter.map(|l| (i, l)))
    }

    /// Positions a known-present letter is excluded from
    ///
    /// Returns an empty set view if the letter has no misplacement evidence.
    #[must_use]
    pub fn misplaced_positions(&self, letter: u8) -> Option<&FxHashSet<usize>> {
        self.misplaced.get(&letter)
    }

    /// Check whether a letter is known to occur somewhere in the secret
    #[inline]
    #[must_use]
    pub fn is_required(&self, letter: u8) -> bool {
        self.required.contains(&letter)
    }

    /// Check whether a letter is ruled out of the secret entirely
    #[inline]
    #[must_use]
    pub fn is_eliminated(&self, letter: u8) -> bool {
        self.eliminated.contains(&letter)
    }

    /// Letters ruled out of the secret
    #[must_use]
    pub const fn eliminated(&self) -> &FxHashSet<u8> {
        &self.eliminated
    }

    /// Letters known to occur somewhere in the secret
    #[must_use]
    pub const fn required(&self) -> &FxHashSet<u8> {
        &self.required
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn fold_one(knowledge: &mut LetterKnowledge, secret: &str, guess: &str) -> Feedback {
        let secret = word(secret);
        let guess = word(guess);
        let feedback = Feedback::score(&secret, &guess);
        knowledge.fold(&guess, &feedback);
        feedback
    }

    #[test]
    fn fold_records_confirmed_positions() {
        let mut knowledge = LetterKnowledge::new();
        fold_one(&mut knowledge, "crane", "trace");

        // R, A, E confirmed at positions 1, 2, 4
        assert_eq!(knowledge.confirmed_at(1), Some(b'r'));
        assert_eq!(knowledge.confirmed_at(2), Some(b'a'));
        assert_eq!(knowledge.confirmed_at(4), Some(b'e'));
        assert_eq!(knowledge.confirmed_at(0), None);

        let confirmed: Vec<(usize, u8)> = knowledge.confirmed().collect();
        assert_eq!(confirmed, vec![(1, b'r'), (2, b'a'), (4, b'e')]);
    }

    #[test]
    fn fold_records_misplaced_and_required() {
        let mut knowledge = LetterKnowledge::new();
        fold_one(&mut knowledge, "crane", "trace");

        // C was present at position 3: required somewhere, excluded there
        assert!(knowledge.is_required(b'c'));
        assert!(knowledge.misplaced_positions(b'c').unwrap().contains(&3));
        assert!(!knowledge.is_eliminated(b'c'));
    }

    #[test]
    fn fold_eliminates_absent_letters() {
        let mut knowledge = LetterKnowledge::new();
        fold_one(&mut knowledge, "crane", "moist");

        for letter in [b'm', b'o', b'i', b's', b't'] {
            assert!(knowledge.is_eliminated(letter), "{}", letter as char);
        }
    }

    #[test]
    fn repeated_letter_guard_blocks_elimination() {
        // Secret ALLOT vs guess LOLLY: third L is Absent, but two other Ls
        // were credited in the same guess, so L must not be eliminated.
        let mut knowledge = LetterKnowledge::new();
        fold_one(&mut knowledge, "allot", "lolly");

        assert!(!knowledge.is_eliminated(b'l'));
        assert!(knowledge.is_required(b'l'));
        assert!(knowledge.is_eliminated(b'y'));
    }

    #[test]
    fn confirmed_letter_never_eliminated_across_guesses() {
        let mut knowledge = LetterKnowledge::new();

        // E confirmed at position 4
        fold_one(&mut knowledge, "crane", "slate");
        assert_eq!(knowledge.confirmed_at(4), Some(b'e'));

        // SPEED has two Es against CRANE's single E; the extra E scores
        // Absent but must not eliminate E
        fold_one(&mut knowledge, "crane", "speed");
        assert!(!knowledge.is_eliminated(b'e'));
        assert!(knowledge.is_required(b'e'));
    }

    #[test]
    fn knowledge_accumulates_over_turns() {
        let mut knowledge = LetterKnowledge::new();
        fold_one(&mut knowledge, "crane", "slate");
        fold_one(&mut knowledge, "crane", "grace");

        // From SLATE: A and E confirmed
        assert_eq!(knowledge.confirmed_at(2), Some(b'a'));
        // From GRACE: R and E confirmed, C present at 3
        assert_eq!(knowledge.confirmed_at(1), Some(b'r'));
        assert_eq!(knowledge.confirmed_at(4), Some(b'e'));
        assert!(knowledge.is_required(b'c'));
        // From SLATE: S, L eliminated; from GRACE: G eliminated
        assert!(knowledge.is_eliminated(b's'));
        assert!(knowledge.is_eliminated(b'l'));
        assert!(knowledge.is_eliminated(b'g'));
    }
}
