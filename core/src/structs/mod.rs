pub mod hints;
pub mod hotness;
pub mod knowledge;
pub mod word;

use fxhash::FxHashMap;

pub use hints::{Hint, HintsError, HintsN};
pub use hotness::{HotnessError, WordHotness};
pub use knowledge::KnowledgeN;
pub use word::{WordError, WordN};

/// The candidate universe: length-filtered words with their usage counts.
///
/// Words are kept in lexicographic order so that every scan over the
/// dictionary is deterministic; the counts are opaque to scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct Dictionary<const N: usize> {
    pub words: Vec<WordN<N>>,
    pub frequencies: Vec<u64>,
    index: FxHashMap<WordN<N>, usize>,
}

impl<const N: usize> Dictionary<N> {
    pub fn new(mut entries: Vec<(WordN<N>, u64)>) -> Self {
        // stable sort keeps the first-seen count for duplicated words
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries.dedup_by(|a, b| a.0 == b.0);

        let mut words = Vec::with_capacity(entries.len());
        let mut frequencies = Vec::with_capacity(entries.len());
        let mut index = FxHashMap::default();
        for (slot, (word, count)) in entries.into_iter().enumerate() {
            index.insert(word.clone(), slot);
            words.push(word);
            frequencies.push(count);
        }

        Self {
            words,
            frequencies,
            index,
        }
    }

    /// Builds from `(word, usage count)` pairs, dropping entries that are not
    /// length-`N` words over `'a'..='z'`.
    pub fn from_counts<I>(counts: I) -> Self
    where
        I: IntoIterator<Item = (String, u64)>,
    {
        let entries = counts
            .into_iter()
            .filter_map(|(word, count)| {
                WordN::try_from(word.as_str()).ok().map(|word| (word, count))
            })
            .collect();
        Self::new(entries)
    }

    pub fn contains(&self, word: &WordN<N>) -> bool {
        self.index.contains_key(word)
    }

    pub fn frequency(&self, word: &WordN<N>) -> Option<u64> {
        self.index.get(word).map(|&slot| self.frequencies[slot])
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordN<N>> {
        self.words.iter()
    }
}
