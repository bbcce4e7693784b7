#[cfg(feature = "terminal")]
use colored::Colorize;
use core::fmt;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum HintsError {
    #[error("'{0}' is not a hint symbol, expected 'c', 'o' or 'w'")]
    InvalidSymbol(char),
    #[error("expected {expected} hint symbols, found {found}")]
    WrongLength { expected: usize, found: usize },
}

#[derive(
    Copy, Clone, Debug, SerializeDisplay, DeserializeFromStr, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub enum Hint {
    Wrong,
    OutOfPlace,
    Correct,
}

impl FromStr for Hint {
    type Err = HintsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.chars().next().map(|x| x.to_ascii_lowercase()) {
            Some('w') => Ok(Hint::Wrong),
            Some('o') => Ok(Hint::OutOfPlace),
            Some('c') => Ok(Hint::Correct),
            Some(other) => Err(HintsError::InvalidSymbol(other)),
            None => Err(HintsError::WrongLength {
                expected: 1,
                found: 0,
            }),
        }
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let char = match self {
            Hint::Wrong => 'w',
            Hint::OutOfPlace => 'o',
            Hint::Correct => 'c',
        };

        write!(f, "{char}")
    }
}

/// The per-position outcome of one guess, in guess order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HintsN<const N: usize>(pub [Hint; N]);

impl<const N: usize> HintsN<N> {
    pub fn correct() -> Self {
        Self([Hint::Correct; N])
    }

    pub fn wrong() -> Self {
        Self([Hint::Wrong; N])
    }

    pub fn is_all_correct(&self) -> bool {
        self.0.iter().all(|&hint| hint == Hint::Correct)
    }

    /// Positional signals: `i+1` for a correct slot, `-(i+1)` for a
    /// present-but-misplaced letter, `0` for an absent one.
    pub fn signals(&self) -> [i8; N] {
        let mut signals = [0i8; N];
        for (i, hint) in self.0.iter().enumerate() {
            signals[i] = match hint {
                Hint::Correct => (i + 1) as i8,
                Hint::OutOfPlace => -((i + 1) as i8),
                Hint::Wrong => 0,
            };
        }
        signals
    }

    pub fn from_signals(signals: &[i8; N]) -> Self {
        let mut hints = Self::wrong();
        for (i, &signal) in signals.iter().enumerate() {
            hints.0[i] = if signal > 0 {
                Hint::Correct
            } else if signal < 0 {
                Hint::OutOfPlace
            } else {
                Hint::Wrong
            };
        }
        hints
    }

    #[cfg(feature = "terminal")]
    pub fn pretty(&self) -> String {
        self.0
            .iter()
            .map(|hint| {
                let square = match hint {
                    Hint::Wrong => "■".red(),
                    Hint::OutOfPlace => "■".yellow(),
                    Hint::Correct => "■".green(),
                };
                square.to_string()
            })
            .collect()
    }
}

impl<const N: usize> FromStr for HintsN<N> {
    type Err = HintsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|c| match c.to_ascii_lowercase() {
                'w' => Ok(Hint::Wrong),
                'o' => Ok(Hint::OutOfPlace),
                'c' => Ok(Hint::Correct),
                other => Err(HintsError::InvalidSymbol(other)),
            })
            .collect::<Result<Vec<_>, _>>()?
            .try_into()
    }
}

impl<const N: usize> fmt::Display for HintsN<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for hint in self.0.iter() {
            write!(f, "{hint}")?;
        }
        Ok(())
    }
}

impl<const N: usize> TryFrom<Vec<Hint>> for HintsN<N> {
    type Error = HintsError;

    fn try_from(value: Vec<Hint>) -> Result<Self, Self::Error> {
        let found = value.len();
        let array: [Hint; N] = value.try_into().map_err(|_: Vec<_>| HintsError::WrongLength {
            expected: N,
            found,
        })?;
        Ok(Self(array))
    }
}
