use core::fmt;
use serde::{Deserialize, Serialize};

use super::word::WordN;
use crate::util::{index_letter, letter_index, ALPHABET};

/// Everything learned about the target so far, indexed by letter.
///
/// `signals[letter]` is the sorted, deduplicated set of positional signals
/// asserted for that letter across all merged guesses; empty means unknown.
/// A trailing `0` marks the letter as fully excluded. `min_freq[letter]` is
/// the lower bound on how many times the letter occurs in the target, taken
/// from the most recent guess that touched it.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeN<const N: usize> {
    pub signals: [Vec<i8>; ALPHABET],
    pub min_freq: [Option<u8>; ALPHABET],
    pub guesses: Vec<WordN<N>>,
}

impl<const N: usize> KnowledgeN<N> {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn get(&self, letter: char) -> &[i8] {
        &self.signals[letter_index(letter)]
    }

    pub fn lower_bound(&self, letter: char) -> Option<u8> {
        self.min_freq[letter_index(letter)]
    }

    pub fn is_excluded(&self, letter: char) -> bool {
        self.get(letter).last() == Some(&0)
    }

    pub fn with_letter(mut self, letter: char, signals: &[i8], min_freq: u8) -> Self {
        let slot = letter_index(letter);
        let mut signals = signals.to_vec();
        signals.sort_unstable();
        signals.dedup();
        self.signals[slot] = signals;
        self.min_freq[slot] = Some(min_freq);
        self
    }
}

impl<const N: usize> fmt::Display for KnowledgeN<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for slot in 0..ALPHABET {
            let signals = &self.signals[slot];
            if signals.is_empty() && self.min_freq[slot].is_none() {
                continue;
            }
            if !first {
                writeln!(f)?;
            }
            first = false;

            write!(f, "{}: [", index_letter(slot))?;
            for (i, &signal) in signals.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                if signal == 0 {
                    write!(f, "x")?;
                } else {
                    write!(f, "{signal}")?;
                }
            }
            write!(f, "]")?;
            if let Some(bound) = self.min_freq[slot] {
                write!(f, " (at least {bound})")?;
            }
        }
        Ok(())
    }
}
