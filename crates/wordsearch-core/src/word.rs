use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Letters allowed in words and used as filler
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Errors raised while validating words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("empty word")]
    Empty,

    #[error("invalid character {ch:?} in word {word:?}")]
    InvalidCharacter { word: String, ch: char },
}

/// An uppercase, non-empty word over [`ALPHABET`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word(String);

impl Word {
    /// Validate a word that is expected to already be uppercase
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text = text.into();
        if text.is_empty() {
            return Err(WordError::Empty);
        }
        if let Some(ch) = text.chars().find(|c| !ALPHABET.contains(*c)) {
            return Err(WordError::InvalidCharacter { word: text, ch });
        }
        Ok(Self(text))
    }

    /// Uppercase and validate
    pub fn normalize(text: &str) -> Result<Self, WordError> {
        Self::new(text.to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of letters
    pub fn len(&self) -> usize {
        // Alphabet is ASCII, so bytes == chars
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Word {
    type Error = WordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.0
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Drop repeated words, keeping the first occurrence of each
pub fn dedup_words(words: &[Word]) -> Vec<Word> {
    let mut unique: Vec<Word> = Vec::with_capacity(words.len());
    for word in words {
        if !unique.contains(word) {
            unique.push(word.clone());
        }
    }
    unique
}

/// Turn free text into a word list: whitespace-split, uppercased, de-duplicated.
///
/// Any token containing a character outside [`ALPHABET`] rejects the whole list.
pub fn parse_word_list(text: &str) -> Result<Vec<Word>, WordError> {
    let words = text
        .split_whitespace()
        .map(Word::normalize)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(dedup_words(&words))
}
