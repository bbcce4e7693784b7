use std::io::{self, BufRead, BufReader};
use std::{fs::File, path::Path};

use fxhash::FxHashMap;
use thiserror::Error;

use crate::structs::Dictionary;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Loads a JSON object mapping words to usage counts, keeping only
/// length-`N` words over `'a'..='z'`.
pub fn load_counts<P, const N: usize>(filename: P) -> Result<Dictionary<N>, LoadError>
where
    P: AsRef<Path>,
{
    let file = File::open(filename)?;
    let counts: FxHashMap<String, u64> = serde_json::from_reader(BufReader::new(file))?;
    Ok(Dictionary::from_counts(counts))
}

/// Loads a plain word list, one word per line, with a usage count of 1.
pub fn load_word_list<P, const N: usize>(filename: P) -> Result<Dictionary<N>, LoadError>
where
    P: AsRef<Path>,
{
    let file = File::open(filename)?;
    let lines = BufReader::new(file)
        .lines()
        .collect::<io::Result<Vec<_>>>()?;
    Ok(parse_word_list(lines.iter().map(String::as_str)))
}

pub fn parse_word_list<'a, I, const N: usize>(lines: I) -> Dictionary<N>
where
    I: Iterator<Item = &'a str>,
{
    Dictionary::from_counts(lines.map(|line| (line.trim().to_string(), 1)))
}
