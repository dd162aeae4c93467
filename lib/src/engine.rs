use crate::clues::filter_candidates;
use crate::clues::Clue;
use crate::results::score_guess;
use crate::results::GameError;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use rand::SeedableRng;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Produces guesses for a round and digests the clues they earn.
pub trait Guesser {
    /// Picks the word to try next.
    fn select_next_guess(&mut self) -> Result<Arc<str>, GameError>;

    /// Incorporates the clue the last guess received.
    fn update(&mut self, clue: &Clue) -> Result<(), GameError>;
}

/// Guesses uniformly at random from the words still consistent with every
/// clue received so far.
///
/// Each clue shrinks the candidate list via [`filter_candidates`]. The target
/// is consistent with its own hints, so it survives every cut and the guesser
/// needs at most one guess per dictionary word. An empty candidate list is
/// reported as [`GameError::ExhaustedCandidates`].
pub struct RandomGuesser<R: Rng> {
    candidates: Vec<Arc<str>>,
    rng: R,
}

impl RandomGuesser<StdRng> {
    /// A guesser over `words` seeded from OS entropy.
    ///
    /// ```
    /// use word_guess::play_game_with_guesser;
    /// use word_guess::RandomGuesser;
    /// use word_guess::WordList;
    ///
    /// let words = WordList::from_iterator(vec!["tough", "rough", "sound"]);
    /// let summary = play_game_with_guesser("SOUND", RandomGuesser::new(&words))?;
    ///
    /// assert!(summary.num_guesses() <= 3);
    /// # Ok::<(), word_guess::GameError>(())
    /// ```
    pub fn new(words: &[Arc<str>]) -> RandomGuesser<StdRng> {
        RandomGuesser::with_rng(words, StdRng::from_entropy())
    }
}

impl<R: Rng> RandomGuesser<R> {
    /// A guesser over `words` drawing from the given generator, so runs can
    /// be replayed by reusing a seed.
    pub fn with_rng(words: &[Arc<str>], rng: R) -> RandomGuesser<R> {
        RandomGuesser {
            candidates: words.to_vec(),
            rng,
        }
    }

    /// The words still consistent with every clue seen so far.
    pub fn remaining_candidates(&self) -> &[Arc<str>] {
        &self.candidates
    }
}

impl<R: Rng> Guesser for RandomGuesser<R> {
    fn select_next_guess(&mut self) -> Result<Arc<str>, GameError> {
        self.candidates
            .choose(&mut self.rng)
            .cloned()
            .ok_or(GameError::ExhaustedCandidates)
    }

    fn update(&mut self, clue: &Clue) -> Result<(), GameError> {
        self.candidates = filter_candidates(&self.candidates, clue);
        if self.candidates.is_empty() {
            return Err(GameError::ExhaustedCandidates);
        }
        Ok(())
    }
}

/// Draws the secret word for a round uniformly from `words`.
///
/// Fails with [`GameError::EmptyDictionary`] if there is nothing to draw
/// from.
pub fn choose_target<R: Rng>(words: &[Arc<str>], rng: &mut R) -> Result<Arc<str>, GameError> {
    words.choose(rng).cloned().ok_or(GameError::EmptyDictionary)
}

/// The record of a finished round.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameSummary {
    /// Every clue produced during the round, in guess order. The last clue
    /// carries the all-correct hint.
    pub transcript: Vec<Clue>,
}

impl GameSummary {
    /// The number of guesses the round took, counting the winning guess.
    pub fn num_guesses(&self) -> u32 {
        self.transcript.len() as u32
    }
}

/// Plays one headless round: the guesser proposes words until it hits
/// `target`, receiving the clue for each miss.
///
/// There is no guess cap; the loop runs until the guesser finds the target
/// or reports an error. Every guess must have the target's length, else the
/// round fails with [`GameError::LengthMismatch`].
pub fn play_game_with_guesser<G: Guesser>(
    target: &str,
    mut guesser: G,
) -> Result<GameSummary, GameError> {
    let mut transcript = Vec::new();
    loop {
        let guess = guesser.select_next_guess()?;
        let hint = score_guess(&guess, target)?;
        let clue = Clue::new(guess.as_ref(), hint)?;
        if clue.hint().is_full_match() {
            transcript.push(clue);
            return Ok(GameSummary { transcript });
        }
        guesser.update(&clue)?;
        transcript.push(clue);
    }
}

/// Cumulative letter knowledge over a whole round.
///
/// Each recorded guess files its letters under present or absent, depending
/// on whether the target contains them anywhere. Both sets are deduplicated
/// and alphabetically ordered, ready for display.
#[derive(Debug, Clone, Default)]
pub struct LetterTracker {
    present: BTreeSet<char>,
    absent: BTreeSet<char>,
}

impl LetterTracker {
    pub fn new() -> LetterTracker {
        LetterTracker::default()
    }

    /// Records every letter of `guess` against `target`.
    ///
    /// Membership is checked against the whole target word, so a duplicate
    /// guess letter counts as present even when the hint marked its extra
    /// occurrences absent.
    pub fn record(&mut self, guess: &str, target: &str) {
        for letter in guess.chars() {
            if target.contains(letter) {
                self.present.insert(letter);
            } else {
                self.absent.insert(letter);
            }
        }
    }

    /// Letters known to occur in the target, in alphabetical order.
    pub fn present(&self) -> impl Iterator<Item = char> + '_ {
        self.present.iter().copied()
    }

    /// Letters known to be missing from the target, in alphabetical order.
    pub fn absent(&self) -> impl Iterator<Item = char> + '_ {
        self.absent.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracker_starts_empty() {
        let tracker = LetterTracker::new();

        assert_eq!(tracker.present().count(), 0);
        assert_eq!(tracker.absent().count(), 0);
    }

    #[test]
    fn tracker_accumulates_sorted_unique_letters() {
        let mut tracker = LetterTracker::new();

        tracker.record("SASSY", "MESAS");

        assert_eq!(tracker.present().collect::<String>(), "AS");
        assert_eq!(tracker.absent().collect::<String>(), "Y");

        tracker.record("MAMBO", "MESAS");

        assert_eq!(tracker.present().collect::<String>(), "AMS");
        assert_eq!(tracker.absent().collect::<String>(), "BOY");
    }

    #[test]
    fn tracker_counts_exhausted_duplicates_as_present() {
        let mut tracker = LetterTracker::new();

        // The third S of SASSY earns a `_` mark, but S is still in the word.
        tracker.record("SASSY", "MESAS");

        assert!(tracker.present().any(|letter| letter == 'S'));
        assert!(tracker.absent().all(|letter| letter != 'S'));
    }
}
