use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use rand::seq::IteratorRandom;
#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::algo::{get_hotness, update_knowledge, GuessError};
use crate::scoring::{score_word, Weights};
use crate::structs::{Dictionary, KnowledgeN, WordHotness, WordN};

#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion<const N: usize> {
    pub score: f64,
    pub word: WordN<N>,
}

impl<const N: usize> Eq for Suggestion<N> {}

impl<const N: usize> Ord for Suggestion<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl<const N: usize> PartialOrd for Suggestion<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn push_bounded<const N: usize>(
    top: &mut BinaryHeap<Reverse<Suggestion<N>>>,
    candidate: Suggestion<N>,
    k: usize,
) {
    if top.len() < k {
        top.push(Reverse(candidate));
    } else if top
        .peek()
        .map_or(false, |Reverse(lowest)| candidate.score > lowest.score)
    {
        top.pop();
        top.push(Reverse(candidate));
    }
}

/// The best `min(k, |dictionary|)` next guesses for the current knowledge,
/// sorted by descending score with ties broken by word order.
pub fn suggestions<const N: usize>(
    dictionary: &Dictionary<N>,
    knowledge: &KnowledgeN<N>,
    weights: &Weights<N>,
    k: usize,
) -> Vec<Suggestion<N>> {
    #[cfg(feature = "parallel")]
    let top = dictionary
        .words
        .par_iter()
        .fold(BinaryHeap::new, |mut top, word| {
            let candidate = Suggestion {
                score: score_word(word, knowledge, weights),
                word: word.clone(),
            };
            push_bounded(&mut top, candidate, k);
            top
        })
        .reduce(BinaryHeap::new, |mut merged, other| {
            for Reverse(candidate) in other {
                push_bounded(&mut merged, candidate, k);
            }
            merged
        });

    #[cfg(not(feature = "parallel"))]
    let top = {
        let mut top = BinaryHeap::new();
        for word in &dictionary.words {
            let candidate = Suggestion {
                score: score_word(word, knowledge, weights),
                word: word.clone(),
            };
            push_bounded(&mut top, candidate, k);
        }
        top
    };

    let mut ranked: Vec<_> = top.into_iter().map(|Reverse(candidate)| candidate).collect();
    ranked.sort_unstable_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.word.cmp(&b.word))
    });
    ranked
}

pub fn random_word<const N: usize>(dictionary: &Dictionary<N>) -> Option<&WordN<N>> {
    dictionary.words.iter().choose(&mut rand::thread_rng())
}

#[derive(Debug, Clone, PartialEq)]
pub struct SolveReport<const N: usize> {
    pub guesses: Vec<WordN<N>>,
    pub hotness: Vec<WordHotness<N>>,
    pub solved: bool,
}

/// Plays a known target with the engine's own suggestions until it is
/// guessed or the guess budget runs out.
pub fn solve<const N: usize>(
    dictionary: &Dictionary<N>,
    weights: &Weights<N>,
    target: &WordN<N>,
    max_guesses: usize,
    print: bool,
) -> Result<SolveReport<N>, GuessError> {
    if !dictionary.contains(target) {
        return Err(GuessError::InvalidWord(target.to_string()));
    }

    let mut knowledge = KnowledgeN::<N>::none();
    let mut report = SolveReport {
        guesses: Vec::new(),
        hotness: Vec::new(),
        solved: false,
    };

    for round in 1..=max_guesses {
        let best = match suggestions(dictionary, &knowledge, weights, 1).into_iter().next() {
            Some(best) if best.score > f64::NEG_INFINITY => best,
            _ => break,
        };

        let hotness = get_hotness(&best.word, target, dictionary)?;
        if print {
            println!("guess {round}: {hotness} (score {})", best.score);
        }

        report.solved = &best.word == target;
        report.guesses.push(best.word);
        report.hotness.push(hotness.clone());
        if report.solved {
            break;
        }
        knowledge = update_knowledge(&hotness, knowledge);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS_LENGTH: usize = 5;

    type Word = WordN<WORDS_LENGTH>;
    type Knowledge = KnowledgeN<WORDS_LENGTH>;

    fn word(s: &str) -> Word {
        Word::try_from(s).unwrap()
    }

    fn dictionary(words: &[&str]) -> Dictionary<WORDS_LENGTH> {
        Dictionary::from_counts(words.iter().map(|w| ((*w).to_string(), 1)))
    }

    fn sample_knowledge() -> Knowledge {
        Knowledge::none()
            .with_letter('e', &[0], 0)
            .with_letter('i', &[0], 0)
            .with_letter('n', &[-3], 1)
            .with_letter('r', &[-1], 1)
            .with_letter('s', &[0], 0)
    }

    #[test]
    fn returns_at_most_k_sorted_descending() {
        let dictionary = dictionary(&["angry", "toons", "siren", "wring", "wrung"]);
        let top = suggestions(&dictionary, &sample_knowledge(), &Weights::default(), 3);

        assert_eq!(top.len(), 3);
        assert!(top.windows(2).all(|pair| pair[0].score >= pair[1].score));
        // ties resolve in word order
        assert_eq!(top[0].word, word("angry"));
        assert_eq!(top[1].word, word("wrung"));
        assert_eq!(top[0].score, 2.0);
        assert_eq!(top[1].score, 2.0);
    }

    #[test]
    fn k_beyond_dictionary_size_returns_everything() {
        let dictionary = dictionary(&["angry", "toons"]);
        let top = suggestions(&dictionary, &sample_knowledge(), &Weights::default(), 10);
        assert_eq!(top.len(), 2);
    }

    #[test]
    fn zero_k_returns_nothing() {
        let dictionary = dictionary(&["angry", "toons"]);
        assert!(suggestions(&dictionary, &sample_knowledge(), &Weights::default(), 0).is_empty());
    }

    #[test]
    fn every_returned_word_beats_every_excluded_word() {
        let words = ["angry", "toons", "siren", "wring", "wrung", "nners"];
        let dictionary = dictionary(&words);
        let knowledge = sample_knowledge();
        let weights = Weights::default();

        let top = suggestions(&dictionary, &knowledge, &weights, 2);
        let cutoff = top.last().unwrap().score;
        for candidate in &dictionary.words {
            if top.iter().all(|s| &s.word != candidate) {
                assert!(score_word(candidate, &knowledge, &weights) <= cutoff);
            }
        }
    }

    #[test]
    fn solves_a_known_target() {
        let dictionary = dictionary(&[
            "pouty", "point", "paint", "print", "bread", "nails", "boils",
        ]);
        let report = solve(&dictionary, &Weights::default(), &word("point"), 6, false).unwrap();
        assert!(report.solved);
        assert_eq!(report.guesses.last(), Some(&word("point")));
        assert!(report.guesses.len() <= 6);
        assert!(report.hotness.last().unwrap().is_all_correct());
    }

    #[test]
    fn unknown_target_is_rejected() {
        let dictionary = dictionary(&["point"]);
        let err = solve(&dictionary, &Weights::default(), &word("nails"), 6, false).unwrap_err();
        assert_eq!(err, GuessError::InvalidWord("nails".to_string()));
    }

    #[test]
    fn empty_dictionary_yields_no_guesses() {
        let dictionary = Dictionary::<WORDS_LENGTH>::new(Vec::new());
        assert!(suggestions(&dictionary, &Knowledge::none(), &Weights::default(), 5).is_empty());
        assert!(random_word(&dictionary).is_none());
    }

    #[test]
    fn random_word_comes_from_the_dictionary() {
        let dictionary = dictionary(&["point", "nails"]);
        let chosen = random_word(&dictionary).unwrap();
        assert!(dictionary.contains(chosen));
    }
}
