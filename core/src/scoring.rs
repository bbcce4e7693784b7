use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::structs::{KnowledgeN, WordN};
use crate::util::{index_letter, letter_index, ALPHABET};

/// Scoring weights, one entry per recognized signal kind.
///
/// `correct[p-1]` rewards a correct-position match at position `p`,
/// `misplaced[p-1]` a present-but-misplaced match keyed by the signal `-p`,
/// `wrong` prices a contradiction (negative infinity by default, so that it
/// absorbs the rest of the sum) and `unknown` is added once per distinct
/// letter the knowledge state says nothing about.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weights<const N: usize> {
    #[serde_as(as = "[_; N]")]
    pub correct: [f64; N],
    #[serde_as(as = "[_; N]")]
    pub misplaced: [f64; N],
    pub wrong: f64,
    pub unknown: f64,
}

impl<const N: usize> Default for Weights<N> {
    fn default() -> Self {
        Self {
            correct: [5.0; N],
            misplaced: [1.0; N],
            wrong: f64::NEG_INFINITY,
            unknown: 0.0,
        }
    }
}

impl<const N: usize> Weights<N> {
    pub fn signal(&self, signal: i8) -> f64 {
        if signal > 0 {
            self.correct[(signal - 1) as usize]
        } else if signal < 0 {
            self.misplaced[(-signal - 1) as usize]
        } else {
            self.wrong
        }
    }
}

/// Scores a candidate word against the accumulated knowledge.
///
/// A candidate that cannot satisfy the frequency bounds scores `wrong`
/// outright; otherwise each constrained letter contributes its best credit
/// across the stored signals, multiplied by its frequency lower bound.
pub fn score_word<const N: usize>(
    word: &WordN<N>,
    knowledge: &KnowledgeN<N>,
    weights: &Weights<N>,
) -> f64 {
    let mut counts = [0u8; ALPHABET];
    for &letter in &word.0 {
        counts[letter_index(letter)] += 1;
    }

    let mut total = 0.0;

    // The candidate's own letters against the known lower bounds; letters
    // the state says nothing about pick up the unknown weight once each.
    let mut visited = [false; ALPHABET];
    for &letter in &word.0 {
        let slot = letter_index(letter);
        if visited[slot] {
            continue;
        }
        visited[slot] = true;
        match knowledge.min_freq[slot] {
            Some(required) if counts[slot] < required => return weights.wrong,
            None if knowledge.signals[slot].is_empty() => total += weights.unknown,
            _ => {}
        }
    }

    // The reverse direction: every constrained letter must be covered, and
    // a bound of zero forbids the letter outright.
    for slot in 0..ALPHABET {
        if let Some(required) = knowledge.min_freq[slot] {
            if counts[slot] < required || (required == 0 && counts[slot] > 0) {
                return weights.wrong;
            }
        }
    }

    for slot in 0..ALPHABET {
        if counts[slot] == 0 || knowledge.signals[slot].is_empty() {
            continue;
        }
        let required = match knowledge.min_freq[slot] {
            Some(required) if required > 0 => required,
            _ => continue,
        };
        let credit = letter_credit(word, index_letter(slot), &knowledge.signals[slot], weights);
        total += credit * f64::from(required);
    }

    total
}

/// Best credit for one letter, evaluated signal by signal; a definitive
/// mismatch ends the evaluation at the wrong weight.
fn letter_credit<const N: usize>(
    word: &WordN<N>,
    letter: char,
    signals: &[i8],
    weights: &Weights<N>,
) -> f64 {
    let open: Vec<i8> = (1..=N as i8).filter(|p| !signals.contains(&-p)).collect();

    let mut credit = f64::NEG_INFINITY;
    for &signal in signals {
        if signal == 0 {
            // known excluded, yet the word uses it
            return weights.wrong;
        }
        if signal > 0 {
            if word.0[(signal - 1) as usize] == letter {
                credit = credit.max(weights.signal(signal));
            } else {
                return weights.wrong;
            }
        } else {
            if word.0[(-signal - 1) as usize] == letter {
                // repeats a placement already known to be wrong
                return weights.wrong;
            }
            match open[..] {
                [only] if word.0[(only - 1) as usize] == letter => {
                    // position forced by elimination
                    credit = credit.max(weights.signal(only));
                }
                _ => credit = credit.max(weights.signal(signal)),
            }
        }
    }
    credit
}
