use crate::results::GameError;
use crate::results::Hint;
use crate::results::LetterHint;
use std::collections::HashMap;
use std::sync::Arc;

/// One turn's worth of evidence: a guess plus the hint it received.
///
/// Clues come out of a live game (see
/// [`play_game_with_guesser`](crate::play_game_with_guesser)) or are authored
/// by hand for offline searches:
///
/// ```
/// use word_guess::Clue;
///
/// let clue = Clue::new("GHOST", "???_?".parse()?)?;
///
/// assert!(clue.is_consistent_with("TOUGH"));
/// assert!(!clue.is_consistent_with("OUGHT"));
/// # Ok::<(), word_guess::GameError>(())
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Clue {
    guess: String,
    hint: Hint,
}

impl Clue {
    /// Pairs a guess with its hint. The two must cover the same number of
    /// letters, else this fails with [`GameError::LengthMismatch`].
    pub fn new(guess: impl Into<String>, hint: Hint) -> Result<Clue, GameError> {
        let guess = guess.into();
        let num_letters = guess.chars().count();
        if num_letters != hint.len() {
            return Err(GameError::LengthMismatch {
                expected: hint.len(),
                actual: num_letters,
            });
        }
        Ok(Clue { guess, hint })
    }

    pub fn guess(&self) -> &str {
        &self.guess
    }

    pub fn hint(&self) -> &Hint {
        &self.hint
    }

    /// Returns `true` iff `candidate` could be the target that produced this
    /// clue.
    ///
    /// The check mirrors the scorer's passes in reverse. `!` positions must
    /// match the candidate exactly and are consumed first; each `?` position
    /// must then find an unconsumed occurrence of its letter somewhere else in
    /// the candidate; finally no `_` letter may have an unconsumed occurrence
    /// left. Candidates of a different length are never consistent.
    pub fn is_consistent_with(&self, candidate: &str) -> bool {
        let candidate_letters: Vec<char> = candidate.chars().collect();
        let guess_letters: Vec<char> = self.guess.chars().collect();
        let marks = self.hint.marks();
        if candidate_letters.len() != guess_letters.len() {
            return false;
        }

        let mut unconsumed: HashMap<char, usize> = HashMap::new();
        for (i, mark) in marks.iter().enumerate() {
            if *mark == LetterHint::Correct {
                if candidate_letters[i] != guess_letters[i] {
                    return false;
                }
            } else {
                // Exactly-matched letters are spoken for; only the rest of
                // the candidate remains claimable.
                *unconsumed.entry(candidate_letters[i]).or_insert(0) += 1;
            }
        }

        for (i, mark) in marks.iter().enumerate() {
            if *mark != LetterHint::Misplaced {
                continue;
            }
            if candidate_letters[i] == guess_letters[i] {
                // A same-position match contradicts "present, but elsewhere".
                return false;
            }
            match unconsumed.get_mut(&guess_letters[i]) {
                Some(count) if *count > 0 => *count -= 1,
                _ => return false,
            }
        }

        for (i, mark) in marks.iter().enumerate() {
            if *mark == LetterHint::Absent
                && unconsumed
                    .get(&guess_letters[i])
                    .map_or(false, |count| *count > 0)
            {
                return false;
            }
        }
        true
    }
}

/// Filters `words` down to those consistent with `clue`, preserving order.
///
/// Pure and order-preserving: the result is always a subsequence of `words`,
/// and filtering the output with the same clue again changes nothing.
pub fn filter_candidates(words: &[Arc<str>], clue: &Clue) -> Vec<Arc<str>> {
    words
        .iter()
        .filter(|word| clue.is_consistent_with(word))
        .cloned()
        .collect()
}

/// Narrows `words` clue by clue, returning the words consistent with all of
/// them.
///
/// An empty result means the clues contradict each other, or the dictionary
/// simply holds no matching word.
pub fn find_matching_words(words: &[Arc<str>], clues: &[Clue]) -> Vec<Arc<str>> {
    let mut remaining = words.to_vec();
    for clue in clues {
        remaining = filter_candidates(&remaining, clue);
    }
    remaining
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clue(guess: &str, hint: &str) -> Clue {
        Clue::new(guess, hint.parse().expect("valid hint")).expect("valid clue")
    }

    #[test]
    fn new_rejects_mismatched_lengths() {
        let result = Clue::new("GHOST", "???_".parse().expect("valid hint"));

        assert!(matches!(
            result,
            Err(GameError::LengthMismatch {
                expected: 4,
                actual: 5
            })
        ));
    }

    #[test]
    fn correct_positions_must_match() {
        let clue = clue("ABBC", "_!__");

        assert!(clue.is_consistent_with("XBXX"));
        assert_eq!(clue.is_consistent_with("XXXX"), false);
    }

    #[test]
    fn misplaced_letter_in_same_spot_is_rejected() {
        let clue = clue("ABBC", "??!_");

        // 'A' must occur somewhere other than position 0.
        assert_eq!(clue.is_consistent_with("ADBD"), false);
    }

    #[test]
    fn misplaced_letters_respect_duplicate_counts() {
        let clue = clue("ABBC", "??!_");

        assert!(clue.is_consistent_with("BDBA"));
        assert!(clue.is_consistent_with("DABB"));

        // The second 'B' sits exactly where the hint says it must not.
        assert_eq!(clue.is_consistent_with("BBBA"), false);
        // No unconsumed 'A' remains.
        assert_eq!(clue.is_consistent_with("BDBD"), false);
        // 'C' was marked absent.
        assert_eq!(clue.is_consistent_with("BCBA"), false);
    }

    #[test]
    fn absent_letters_may_not_linger() {
        let clue = clue("ABBC", "?_!_");

        assert!(clue.is_consistent_with("EDBA"));
        assert!(clue.is_consistent_with("DABE"));
        assert!(clue.is_consistent_with("DABA"));

        // A second unconsumed 'B' contradicts the `_` at position 1.
        assert_eq!(clue.is_consistent_with("BDBA"), false);
        assert_eq!(clue.is_consistent_with("DCBA"), false);
    }

    #[test]
    fn absent_letter_consumed_by_exact_match_is_fine() {
        let clue = clue("ABAB", "!_!_");

        // Both 'A's are claimed by exact matches; both 'B's were absent.
        assert!(clue.is_consistent_with("AXAX"));
        assert_eq!(clue.is_consistent_with("AXAB"), false);
    }

    #[test]
    fn candidates_of_other_lengths_are_inconsistent() {
        let clue = clue("ABBC", "!!!!");

        assert_eq!(clue.is_consistent_with("ABB"), false);
        assert_eq!(clue.is_consistent_with("ABBCC"), false);
    }

    #[test]
    fn filter_preserves_order_and_subsets() {
        let words: Vec<Arc<str>> = ["BDBA", "ADBD", "DABB", "BBBA"]
            .iter()
            .map(|word| Arc::from(*word))
            .collect();
        let clue = clue("ABBC", "??!_");

        let filtered = filter_candidates(&words, &clue);

        assert_eq!(filtered, vec![Arc::from("BDBA"), Arc::from("DABB")]);

        let refiltered = filter_candidates(&filtered, &clue);
        assert_eq!(refiltered, filtered);
    }

    #[test]
    fn find_matching_words_applies_clues_in_sequence() {
        let words: Vec<Arc<str>> = ["BDBA", "DABB", "DBBA"]
            .iter()
            .map(|word| Arc::from(*word))
            .collect();

        let matches = find_matching_words(&words, &[clue("ABBC", "??!_"), clue("BDBA", "??!?")]);

        assert_eq!(matches, vec![Arc::from("DABB")]);
    }

    #[test]
    fn contradictory_clues_match_nothing() {
        let words: Vec<Arc<str>> = vec![Arc::from("AB"), Arc::from("BA")];

        let matches = find_matching_words(&words, &[clue("AB", "!!"), clue("AB", "__")]);

        assert!(matches.is_empty());
    }
}
