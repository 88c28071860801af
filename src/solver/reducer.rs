//! Candidate reduction from feedback history
//!
//! A pure conjunctive filter: a word survives if it is consistent with every
//! guess record seen so far. Each record contributes independent constraints,
//! so filtering the pool against only the newest record gives the same result
//! as re-filtering the whole catalog against the full history.

use crate::core::{LetterScore, WORD_LEN, Word};
use crate::game::GuessRecord;
use rayon::prelude::*;

/// Check one candidate against one guess record
///
/// Rules, per position `i` of the recorded guess `g` with feedback `f`:
/// - `f[i] == Correct`: the candidate must have `g[i]` at position `i`
/// - `f[i] == Present`: the candidate must contain `g[i]`, but not at
///   position `i` (it was misplaced there)
/// - `f[i] == Absent`: the candidate's count of `g[i]` must not exceed the
///   number of `Correct`/`Present` marks `g[i]` earned in that same guess, so
///   an `Absent` on one occurrence of a repeated letter never bans a letter
///   that another occurrence proved present
#[must_use]
pub fn satisfies(candidate: &Word, record: &GuessRecord) -> bool {
    let guess = record.guess();
    let feedback = record.feedback();

    for i in 0..WORD_LEN {
        let letter = guess.letters()[i];
        let ok = match feedback.at(i) {
            LetterScore::Correct => candidate.letters()[i] == letter,
            LetterScore::Present => {
                candidate.has_letter(letter) && candidate.letters()[i] != letter
            }
            LetterScore::Absent => {
                candidate.count_of(letter) <= feedback.credits(guess, letter)
            }
        };
        if !ok {
            return false;
        }
    }

    true
}

/// Filter a pool down to the words consistent with the full history
///
/// The output is always a subset of the input (in input order); an empty
/// output means the constraint set is unsatisfiable, which callers must
/// surface rather than pick an arbitrary word.
#[must_use]
pub fn reduce(pool: &[Word], history: &[GuessRecord]) -> Vec<Word> {
    pool.par_iter()
        .filter(|candidate| history.iter().all(|record| satisfies(candidate, record)))
        .cloned()
        .collect()
}
