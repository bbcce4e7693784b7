use core::fmt;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum WordError {
    #[error("expected a word of length {expected_length}, found \"{word}\" of length {}", word.chars().count())]
    LengthMismatch {
        word: String,
        expected_length: usize,
    },
    #[error("word \"{word}\" contains '{letter}', only 'a'..='z' is supported")]
    UnsupportedLetter { word: String, letter: char },
}

/// A fixed-length word over the lowercase Latin alphabet.
#[serde_as]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordN<const N: usize>(#[serde_as(as = "[_; N]")] pub [char; N]);

impl<const N: usize> WordN<N> {
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }

    pub fn count_of(&self, letter: char) -> usize {
        self.0.iter().filter(|&&c| c == letter).count()
    }
}

impl<const N: usize> fmt::Display for WordN<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.iter() {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl<const N: usize> TryFrom<&str> for WordN<N> {
    type Error = WordError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if let Some(letter) = value.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(WordError::UnsupportedLetter {
                word: value.to_string(),
                letter,
            });
        }

        let array = value
            .chars()
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|_: Vec<_>| WordError::LengthMismatch {
                word: value.to_string(),
                expected_length: N,
            })?;

        Ok(Self(array))
    }
}
