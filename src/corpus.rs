use crate::error::{KeyFitError, KfResult};
use std::cmp::Reverse;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Character frequency distribution over one body of text.
///
/// Built once per input by [`analyze`] and read-only afterwards. The sum
/// of all counts equals [`total`](Self::total), the length in chars of
/// the lowercased input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CharFrequencies {
    counts: HashMap<char, u64>,
    total: u64,
}

impl CharFrequencies {
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn count(&self, ch: char) -> u64 {
        self.counts.get(&ch).copied().unwrap_or(0)
    }

    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Iterates (char, count) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.counts.iter().map(|(&ch, &n)| (ch, n))
    }

    /// Characters ordered by descending count. Equal counts order by
    /// ascending char code so the ranking is reproducible across runs.
    pub fn ranked(&self) -> Vec<(char, u64)> {
        let mut entries: Vec<(char, u64)> = self.iter().collect();
        entries.sort_by_key(|&(ch, n)| (Reverse(n), ch));
        entries
    }

    /// Percentage of the total text taken by `ch`. An empty corpus
    /// reports 0.0 rather than dividing by zero.
    pub fn share(&self, ch: char) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(ch) as f64 / self.total as f64 * 100.0
    }
}

/// Lowercases the text and counts every distinct character, whitespace,
/// punctuation, and digits included. The total is the lowercased text's
/// length in chars (Unicode lowercasing can expand, e.g. 'İ' -> "i̇").
pub fn analyze(text: &str) -> CharFrequencies {
    let mut counts = HashMap::new();
    let mut total = 0u64;
    for ch in text.to_lowercase().chars() {
        *counts.entry(ch).or_insert(0) += 1;
        total += 1;
    }
    CharFrequencies { counts, total }
}

/// Reads the input file fully into memory. Valid UTF-8 is used as-is;
/// anything else is decoded as Latin-1, where every byte maps to the
/// code point of the same value.
pub fn read_input<P: AsRef<Path>>(path: P) -> KfResult<String> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| KeyFitError::CorpusRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => err.into_bytes().iter().map(|&b| b as char).collect(),
    })
}
