use core::fmt;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use thiserror::Error;

use super::{hints::HintsN, word::WordN};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum HotnessError {
    #[error("signal {signal} is not valid at position {}, expected 0, {} or -{}", index + 1, index + 1, index + 1)]
    InvalidSignal { index: usize, signal: i8 },
}

/// The outcome of one guess: the guessed word together with one positional
/// signal per letter. Immutable once built.
#[serde_as]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordHotness<const N: usize> {
    pub word: WordN<N>,
    #[serde_as(as = "[_; N]")]
    pub signals: [i8; N],
}

impl<const N: usize> WordHotness<N> {
    pub fn from_hints(word: WordN<N>, hints: &HintsN<N>) -> Self {
        Self {
            word,
            signals: hints.signals(),
        }
    }

    /// Builds from raw signals; each slot must hold `0`, `i+1` or `-(i+1)`.
    pub fn from_signals(word: WordN<N>, signals: [i8; N]) -> Result<Self, HotnessError> {
        for (index, &signal) in signals.iter().enumerate() {
            let position = (index + 1) as i8;
            if signal != 0 && signal != position && signal != -position {
                return Err(HotnessError::InvalidSignal { index, signal });
            }
        }
        Ok(Self { word, signals })
    }

    pub fn hints(&self) -> HintsN<N> {
        HintsN::from_signals(&self.signals)
    }

    pub fn is_all_correct(&self) -> bool {
        self.signals.iter().all(|&signal| signal > 0)
    }

    #[cfg(feature = "terminal")]
    pub fn pretty(&self) -> String {
        format!("{} {}", self.word, self.hints().pretty())
    }
}

impl<const N: usize> fmt::Display for WordHotness<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word, self.hints())
    }
}
