use itertools::izip;
use thiserror::Error;

use crate::structs::{Dictionary, KnowledgeN, WordHotness, WordN};
use crate::util::{index_letter, letter_index, ALPHABET};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GuessError {
    #[error("\"{0}\" is not in the dictionary")]
    InvalidWord(String),
}

/// Computes the hotness of a guess against a target.
///
/// Position `i` gets `i+1` when the letters match, `-(i+1)` when the guessed
/// letter occurs elsewhere in the target, and `0` when it is absent.
pub fn get_hotness<const N: usize>(
    guess: &WordN<N>,
    target: &WordN<N>,
    dictionary: &Dictionary<N>,
) -> Result<WordHotness<N>, GuessError> {
    for word in [guess, target] {
        if !dictionary.contains(word) {
            return Err(GuessError::InvalidWord(word.to_string()));
        }
    }

    let mut signals = [0i8; N];
    for i in 0..N {
        let position = (i + 1) as i8;
        signals[i] = if guess.0[i] == target.0[i] {
            position
        } else if target.0.contains(&guess.0[i]) {
            -position
        } else {
            0
        };
    }

    Ok(WordHotness {
        word: guess.clone(),
        signals,
    })
}

pub fn update_knowledge<const N: usize>(
    hotness: &WordHotness<N>,
    knowledge: KnowledgeN<N>,
) -> KnowledgeN<N> {
    update_knowledge_traced(hotness, knowledge).0
}

/// Merges one guess outcome into the knowledge state.
///
/// Also reports the letters whose new evidence was dropped because the state
/// had already concluded them fully excluded (last known exclusion wins).
pub fn update_knowledge_traced<const N: usize>(
    hotness: &WordHotness<N>,
    mut knowledge: KnowledgeN<N>,
) -> (KnowledgeN<N>, Vec<char>) {
    // Pass 1: how many copies of each letter this guess confirmed present.
    let mut observed: [Option<u8>; ALPHABET] = [None; ALPHABET];
    for (&letter, &signal) in izip!(&hotness.word.0, &hotness.signals) {
        let count = observed[letter_index(letter)].get_or_insert(0);
        if signal != 0 {
            *count += 1;
        }
    }
    for (slot, observed) in observed.iter().enumerate() {
        if let Some(count) = *observed {
            // the bound follows the most recent guess, even downward
            knowledge.min_freq[slot] = Some(count);
        }
    }

    // Pass 2: a zero for a letter confirmed present elsewhere in the same
    // guess is a wrong placement, not a global exclusion.
    let mut fresh: [Vec<i8>; ALPHABET] = Default::default();
    for (i, (&letter, &signal)) in izip!(&hotness.word.0, &hotness.signals).enumerate() {
        let slot = letter_index(letter);
        let signal = if signal == 0 && observed[slot].unwrap_or(0) > 0 {
            -((i + 1) as i8)
        } else {
            signal
        };
        fresh[slot].push(signal);
    }

    let mut ignored = Vec::new();
    for (slot, mut new_signals) in fresh.into_iter().enumerate() {
        if new_signals.is_empty() {
            continue;
        }
        new_signals.sort_unstable();
        new_signals.dedup();

        let existing = &mut knowledge.signals[slot];
        if existing.is_empty() {
            *existing = new_signals;
        } else if existing.last() == Some(&0) {
            ignored.push(index_letter(slot));
        } else {
            existing.extend(new_signals);
            existing.sort_unstable();
            existing.dedup();
        }
    }

    knowledge.guesses.push(hotness.word.clone());
    (knowledge, ignored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const WORDS_LENGTH: usize = 5;

    type Word = WordN<WORDS_LENGTH>;
    type Knowledge = KnowledgeN<WORDS_LENGTH>;

    fn word(s: &str) -> Word {
        Word::try_from(s).unwrap()
    }

    fn dictionary(words: &[&str]) -> Dictionary<WORDS_LENGTH> {
        Dictionary::from_counts(words.iter().map(|w| ((*w).to_string(), 1)))
    }

    fn hotness_of(word_s: &str, signals: [i8; WORDS_LENGTH]) -> WordHotness<WORDS_LENGTH> {
        WordHotness::from_signals(word(word_s), signals).unwrap()
    }

    fn signals(knowledge: &Knowledge, letter: char) -> Vec<i8> {
        knowledge.get(letter).to_vec()
    }

    #[rstest]
    #[case("point", "point", [1, 2, 3, 4, 5])]
    #[case("bread", "point", [0, 0, 0, 0, 0])]
    #[case("boils", "point", [0, 2, 3, 0, 0])]
    #[case("nails", "point", [-1, 0, 3, 0, 0])]
    fn hotness_ok(#[case] guess: &str, #[case] target: &str, #[case] expected: [i8; 5]) {
        let dictionary = dictionary(&["point", "bread", "boils", "nails"]);
        let hotness = get_hotness(&word(guess), &word(target), &dictionary).unwrap();
        assert_eq!(hotness.signals, expected);
        assert_eq!(hotness.word, word(guess));
    }

    #[test]
    fn hotness_rejects_unknown_guess() {
        let dictionary = dictionary(&["point", "nails"]);
        let err = get_hotness(&word("adfaf"), &word("point"), &dictionary).unwrap_err();
        assert_eq!(err, GuessError::InvalidWord("adfaf".to_string()));
    }

    #[test]
    fn hotness_rejects_unknown_target() {
        let dictionary = dictionary(&["point", "nails"]);
        let err = get_hotness(&word("nails"), &word("adafd"), &dictionary).unwrap_err();
        assert_eq!(err, GuessError::InvalidWord("adafd".to_string()));
    }

    #[test]
    fn merge_into_empty_state() {
        let knowledge = update_knowledge(&hotness_of("paint", [0, -2, 3, 0, 5]), Knowledge::none());
        assert_eq!(signals(&knowledge, 'p'), [0]);
        assert_eq!(signals(&knowledge, 'a'), [-2]);
        assert_eq!(signals(&knowledge, 'i'), [3]);
        assert_eq!(signals(&knowledge, 'n'), [0]);
        assert_eq!(signals(&knowledge, 't'), [5]);
        assert_eq!(knowledge.lower_bound('p'), Some(0));
        assert_eq!(knowledge.lower_bound('a'), Some(1));
        assert_eq!(knowledge.lower_bound('i'), Some(1));
        assert_eq!(knowledge.lower_bound('t'), Some(1));
        assert_eq!(knowledge.lower_bound('z'), None);
    }

    #[test]
    fn repeated_identical_evidence_is_idempotent() {
        let hotness = hotness_of("rinse", [-1, 0, -3, 0, 0]);
        let once = update_knowledge(&hotness, Knowledge::none());
        let twice = update_knowledge(&hotness, once.clone());
        assert_eq!(once.signals, twice.signals);
        assert_eq!(once.min_freq, twice.min_freq);
    }

    #[test]
    fn repeated_letters_split_between_present_and_redundant() {
        let knowledge = Knowledge::none()
            .with_letter('e', &[3], 1)
            .with_letter('l', &[4], 4);
        let knowledge = update_knowledge(&hotness_of("leeks", [-1, 2, 3, 0, 5]), knowledge);

        assert_eq!(signals(&knowledge, 'l'), [-1, 4]);
        assert_eq!(signals(&knowledge, 'e'), [2, 3]);
        assert_eq!(signals(&knowledge, 'k'), [0]);
        assert_eq!(signals(&knowledge, 's'), [5]);
        assert_eq!(knowledge.lower_bound('e'), Some(2));
        assert_eq!(knowledge.lower_bound('k'), Some(0));
        assert_eq!(knowledge.lower_bound('s'), Some(1));
        // overwritten by the latest observation, not maximized
        assert_eq!(knowledge.lower_bound('l'), Some(1));
    }

    #[test]
    fn repeated_letter_with_no_present_copy_stays_excluded() {
        let knowledge = update_knowledge(&hotness_of("again", [0, -2, 0, 0, 5]), Knowledge::none());
        assert_eq!(signals(&knowledge, 'a'), [0]);
        assert_eq!(signals(&knowledge, 'g'), [-2]);
        assert_eq!(signals(&knowledge, 'i'), [0]);
        assert_eq!(signals(&knowledge, 'n'), [5]);
        assert_eq!(knowledge.lower_bound('a'), Some(0));
        assert_eq!(knowledge.lower_bound('g'), Some(1));
    }

    #[test]
    fn wrong_positions_accumulate_across_guesses() {
        let knowledge = Knowledge::none().with_letter('g', &[-1], 1);
        let knowledge = update_knowledge(&hotness_of("again", [0, -2, 0, 0, 5]), knowledge);
        assert_eq!(signals(&knowledge, 'g'), [-2, -1]);
        assert_eq!(knowledge.lower_bound('g'), Some(1));
    }

    #[test]
    fn merge_sequence_accumulates_per_letter_sets() {
        let mut knowledge = Knowledge::none();
        knowledge = update_knowledge(&hotness_of("rinse", [-1, 0, 0, 0, 0]), knowledge);
        knowledge = update_knowledge(&hotness_of("today", [0, -2, 0, -4, 0]), knowledge);
        knowledge = update_knowledge(&hotness_of("arrow", [-1, -2, 0, 4, 0]), knowledge);

        // the second 'r' in "arrow" is redundant, not an exclusion
        assert_eq!(signals(&knowledge, 'r'), [-3, -2, -1]);
        assert_eq!(signals(&knowledge, 'o'), [-2, 4]);
        assert_eq!(signals(&knowledge, 'a'), [-4, -1]);
        for letter in ['i', 'n', 's', 'e', 't', 'd', 'y', 'w'] {
            assert_eq!(signals(&knowledge, letter), [0], "letter {letter}");
            assert_eq!(knowledge.lower_bound(letter), Some(0), "letter {letter}");
        }
        assert_eq!(knowledge.lower_bound('r'), Some(1));
        assert_eq!(knowledge.lower_bound('o'), Some(1));
        assert_eq!(knowledge.lower_bound('a'), Some(1));
        assert_eq!(knowledge.guesses.len(), 3);
    }

    #[test]
    fn excluded_letter_discards_new_evidence() {
        let knowledge = Knowledge::none().with_letter('k', &[0], 0);
        let (knowledge, ignored) =
            update_knowledge_traced(&hotness_of("kings", [-1, 0, 0, 0, 0]), knowledge);
        assert_eq!(signals(&knowledge, 'k'), [0]);
        assert_eq!(ignored, vec!['k']);
        // the frequency observation still lands
        assert_eq!(knowledge.lower_bound('k'), Some(1));
    }
}
