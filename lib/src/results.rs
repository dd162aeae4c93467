use std::collections::HashMap;
use std::error;
use std::fmt;
use std::io;
use std::iter::zip;
use std::str::FromStr;

/// The feedback for a single letter of a guess.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LetterHint {
    /// The letter matches the target at this position.
    Correct,
    /// The letter occurs in the target, but at a different position.
    Misplaced,
    /// The letter has no unclaimed occurrence in the target.
    Absent,
}

impl LetterHint {
    /// Converts this hint to its text form.
    pub fn to_char(self) -> char {
        match self {
            LetterHint::Correct => '!',
            LetterHint::Misplaced => '?',
            LetterHint::Absent => '_',
        }
    }

    /// Parses a single hint character.
    pub fn from_char(c: char) -> Result<LetterHint, GameError> {
        match c {
            '!' => Ok(LetterHint::Correct),
            '?' => Ok(LetterHint::Misplaced),
            '_' => Ok(LetterHint::Absent),
            _ => Err(GameError::InvalidHint(c)),
        }
    }
}

/// Per-letter feedback comparing a guess to a target word.
///
/// A hint renders as one character per guess position:
///
/// | Character | Meaning |
/// | --------- | ------- |
/// | `!` | letter is in the right spot |
/// | `?` | letter is in the word, but in a different spot |
/// | `_` | letter has no remaining occurrence in the word |
///
/// This text form is the exchange format for manually entered clues, so
/// `Display` and `FromStr` reproduce it exactly.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Hint {
    marks: Vec<LetterHint>,
}

impl Hint {
    /// The per-position marks, in guess order.
    pub fn marks(&self) -> &[LetterHint] {
        &self.marks
    }

    /// The number of positions covered by this hint.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Returns `true` iff every position is [`LetterHint::Correct`], i.e. the
    /// guess was the target.
    pub fn is_full_match(&self) -> bool {
        self.marks
            .iter()
            .all(|mark| *mark == LetterHint::Correct)
    }
}

impl From<Vec<LetterHint>> for Hint {
    fn from(marks: Vec<LetterHint>) -> Self {
        Hint { marks }
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.marks
            .iter()
            .try_for_each(|mark| write!(f, "{}", mark.to_char()))
    }
}

impl FromStr for Hint {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let marks = s
            .chars()
            .map(LetterHint::from_char)
            .collect::<Result<Vec<LetterHint>, GameError>>()?;
        Ok(Hint { marks })
    }
}

/// Scores `guess` against `target`, producing per-letter feedback.
///
/// Duplicate letters are resolved in two passes. Exact matches claim their
/// target letters first; the remaining guess letters then claim leftover
/// target occurrences from left to right. A letter that appears `k` times in
/// the target is therefore claimed by at most `k` guess positions overall.
///
/// Fails with [`GameError::LengthMismatch`] if the words differ in length.
///
/// ```
/// use word_guess::score_guess;
///
/// let hint = score_guess("SASSY", "MESAS")?;
///
/// assert_eq!(hint.to_string(), "??!__");
/// assert!(!hint.is_full_match());
/// # Ok::<(), word_guess::GameError>(())
/// ```
pub fn score_guess(guess: &str, target: &str) -> Result<Hint, GameError> {
    let guess_letters: Vec<char> = guess.chars().collect();
    let target_letters: Vec<char> = target.chars().collect();
    if guess_letters.len() != target_letters.len() {
        return Err(GameError::LengthMismatch {
            expected: target_letters.len(),
            actual: guess_letters.len(),
        });
    }

    let mut marks = vec![LetterHint::Absent; guess_letters.len()];
    let mut unclaimed: HashMap<char, usize> = HashMap::new();
    let mut num_correct = 0;
    for (i, (guess_letter, target_letter)) in zip(&guess_letters, &target_letters).enumerate() {
        if guess_letter == target_letter {
            marks[i] = LetterHint::Correct;
            num_correct += 1;
        } else {
            // Only target letters that weren't matched exactly stay claimable
            // in the presence pass.
            *unclaimed.entry(*target_letter).or_insert(0) += 1;
        }
    }
    if num_correct == marks.len() {
        return Ok(Hint { marks });
    }

    for (i, guess_letter) in guess_letters.iter().enumerate() {
        if marks[i] == LetterHint::Correct {
            continue;
        }
        if let Some(count) = unclaimed.get_mut(guess_letter) {
            if *count > 0 {
                *count -= 1;
                marks[i] = LetterHint::Misplaced;
            }
        }
    }
    Ok(Hint { marks })
}

/// An error from loading a dictionary, scoring a guess, or running the
/// solver.
#[derive(Debug)]
pub enum GameError {
    /// No dictionary file path was provided.
    MissingInput,
    /// The dictionary resolved to zero words.
    EmptyDictionary,
    /// A word's length differs from the rest of the dictionary.
    WrongWordLength {
        word: String,
        actual: usize,
        expected: usize,
    },
    /// A hint contained a character outside `!`, `?` and `_`.
    InvalidHint(char),
    /// Guess, target, and candidate lengths must all agree.
    LengthMismatch { expected: usize, actual: usize },
    /// The solver's candidate list became empty. The target always stays
    /// consistent with its own hints, so this means the scoring or filtering
    /// logic has a bug.
    ExhaustedCandidates,
    /// The dictionary source could not be read.
    Io(io::Error),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::MissingInput => write!(
                f,
                "missing input, please specify a dictionary file as a positional argument"
            ),
            GameError::EmptyDictionary => write!(f, "the dictionary contains no words"),
            GameError::WrongWordLength {
                word,
                actual,
                expected,
            } => write!(
                f,
                "invalid length of word '{}' (actual length {}, expected length {})",
                word, actual, expected
            ),
            GameError::InvalidHint(c) => write!(
                f,
                "invalid character '{}', hints must be '!', '?', or '_'",
                c
            ),
            GameError::LengthMismatch { expected, actual } => write!(
                f,
                "expected a word of length {}, but got length {}",
                expected, actual
            ),
            GameError::ExhaustedCandidates => write!(
                f,
                "no candidate words remain even though the target came from the same list; \
                 this is a bug in the scoring or filtering logic"
            ),
            GameError::Io(error) => write!(f, "failed to read the dictionary: {}", error),
        }
    }
}

impl error::Error for GameError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            GameError::Io(error) => Some(error),
            _ => None,
        }
    }
}

impl From<io::Error> for GameError {
    fn from(error: io::Error) -> Self {
        GameError::Io(error)
    }
}
