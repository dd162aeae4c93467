use crate::results::GameError;
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::ops::Deref;
use std::path::Path;
use std::sync::Arc;

/// How dictionary text is turned into words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    /// Every line is one word, taken as-is apart from the trailing newline.
    /// Nothing is validated.
    Strict,
    /// Blank lines and lines starting with `comment_char` are skipped; all
    /// remaining words must share one length, and at least one word must
    /// survive.
    Lenient { comment_char: char },
}

/// An ordered list of uppercase words sharing one length.
///
/// Words are stored as `Arc<str>` so candidate lists and game transcripts
/// share them without copying. Dereferences to a word slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Arc<str>>,
    word_length: usize,
}

impl WordList {
    /// Reads one word per line, uppercased, exactly as found.
    ///
    /// This is the strict contract: the source is trusted to contain one
    /// clean word per line, and no validation is applied. Use
    /// [`WordList::from_reader_lenient`] for human-maintained files.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<WordList, GameError> {
        let words = reader
            .lines()
            .map(|maybe_line| maybe_line.map(|line| Arc::from(line.to_uppercase())))
            .collect::<Result<Vec<Arc<str>>, std::io::Error>>()?;
        Ok(WordList::assemble(words))
    }

    /// Reads words while skipping blank lines and lines starting with
    /// `comment_char`, enforcing a uniform word length.
    ///
    /// Fails with [`GameError::WrongWordLength`] on the first word whose
    /// length differs from the first surviving word's, and with
    /// [`GameError::EmptyDictionary`] if no words survive.
    pub fn from_reader_lenient<R: BufRead>(
        reader: R,
        comment_char: char,
    ) -> Result<WordList, GameError> {
        let mut words: Vec<Arc<str>> = Vec::new();
        let mut expected_length = None;
        for maybe_line in reader.lines() {
            let line = maybe_line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with(comment_char) {
                continue;
            }
            let word = trimmed.to_uppercase();
            let num_letters = word.chars().count();
            match expected_length {
                None => expected_length = Some(num_letters),
                Some(expected) if num_letters != expected => {
                    return Err(GameError::WrongWordLength {
                        word,
                        actual: num_letters,
                        expected,
                    });
                }
                Some(_) => {}
            }
            words.push(Arc::from(word));
        }
        if words.is_empty() {
            return Err(GameError::EmptyDictionary);
        }
        Ok(WordList::assemble(words))
    }

    /// Builds a list from in-memory words, uppercasing each one. Nothing is
    /// validated.
    pub fn from_iterator<I, S>(words: I) -> WordList
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        WordList::assemble(
            words
                .into_iter()
                .map(|word| Arc::from(word.as_ref().to_uppercase()))
                .collect(),
        )
    }

    /// The length shared by the words in this list, or 0 if it is empty.
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns `true` iff `word` is in this list.
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|known| known.as_ref() == word)
    }

    fn assemble(words: Vec<Arc<str>>) -> WordList {
        let word_length = words.first().map_or(0, |word| word.chars().count());
        WordList { words, word_length }
    }
}

impl Deref for WordList {
    type Target = [Arc<str>];

    fn deref(&self) -> &Self::Target {
        &self.words
    }
}

/// Resolves and loads a dictionary file according to `mode`.
///
/// `path` is typically the program's one positional argument; `None` fails
/// with [`GameError::MissingInput`].
pub fn load_dictionary(path: Option<&Path>, mode: LoadMode) -> Result<WordList, GameError> {
    let path = path.ok_or(GameError::MissingInput)?;
    let reader = BufReader::new(File::open(path)?);
    match mode {
        LoadMode::Strict => WordList::from_reader(reader),
        LoadMode::Lenient { comment_char } => WordList::from_reader_lenient(reader, comment_char),
    }
}
