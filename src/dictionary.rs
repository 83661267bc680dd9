//! Dictionary of isograms, indexed by word length.
//!
//! The dictionary file is a newline-delimited list of lowercase isograms,
//! sorted by ascending length then lexicographically, optionally preceded
//! by the curator's `{length count},...` summary line. Entries of equal
//! length are contiguous, so a random word of a given length is resolved
//! with a single index into the backing vector.

use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use rand::Rng;

use crate::common::GameError;

#[cfg(feature = "std")]
use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

/// Contiguous run of equal-length words in the backing vector.
#[derive(Debug, Clone, Copy)]
struct LengthRun {
    offset: usize,
    count: usize,
}

/// Immutable, length-indexed store of isograms. Built once at startup.
#[derive(Debug)]
pub struct Dictionary {
    words: Vec<String>,
    runs: BTreeMap<usize, LengthRun>,
}

impl Dictionary {
    /// Build a dictionary from an arbitrary word list.
    ///
    /// Entries are sorted by (length, lexicographic) and deduplicated, so
    /// the per-length contiguity the index relies on is enforced here
    /// rather than trusted from the source. Per-length counts are always
    /// derived from the data itself.
    pub fn from_words(mut words: Vec<String>) -> Self {
        words.sort_unstable_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        words.dedup();

        let mut runs = BTreeMap::new();
        for (slot, word) in words.iter().enumerate() {
            runs.entry(word.len())
                .or_insert(LengthRun {
                    offset: slot,
                    count: 0,
                })
                .count += 1;
        }
        Self { words, runs }
    }

    /// Total number of words across all lengths.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of words of exactly `length`.
    pub fn count_of_length(&self, length: usize) -> usize {
        self.runs.get(&length).map_or(0, |run| run.count)
    }

    /// Word lengths present in the dictionary, ascending.
    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.runs.keys().copied()
    }

    /// Pick a word of exactly `length`, uniformly at random among all
    /// entries of that length.
    pub fn word_of_length<R: Rng>(&self, rng: &mut R, length: usize) -> Result<&str, GameError> {
        let run = self
            .runs
            .get(&length)
            .ok_or(GameError::NoWordsAvailable { length })?;
        let slot = run.offset + rng.random_range(0..run.count);
        Ok(&self.words[slot])
    }
}

/// Parse the curator's summary line, e.g. `{5 8013},{6 10362},` into a
/// length -> count map. Returns `None` if the line is not a summary.
pub fn parse_summary(line: &str) -> Option<BTreeMap<usize, usize>> {
    if !line.trim_start().starts_with('{') {
        return None;
    }
    let mut counts = BTreeMap::new();
    for entry in line.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let body = entry.strip_prefix('{')?.strip_suffix('}')?;
        let mut fields = body.split_whitespace();
        let length: usize = fields.next()?.parse().ok()?;
        let count: usize = fields.next()?.parse().ok()?;
        if fields.next().is_some() {
            return None;
        }
        counts.insert(length, count);
    }
    Some(counts)
}

/// Render a length -> count map in the summary-line format consumed by
/// [`parse_summary`]. Every entry, the last included, ends with a comma.
pub fn format_summary(counts: &BTreeMap<usize, usize>) -> String {
    let mut line = String::new();
    for (length, count) in counts {
        line.push_str(&format!("{{{} {}}},", length, count));
    }
    line
}

/// Errors raised while reading a dictionary source.
#[cfg(feature = "std")]
#[derive(Debug)]
pub enum LoadError {
    /// The source could not be opened or read.
    Io(io::Error),
    /// The source held no words at all.
    Empty,
    /// The source declared more words in its summary line than its body
    /// actually holds.
    Truncated { expected: usize, found: usize },
}

#[cfg(feature = "std")]
impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        LoadError::Io(err)
    }
}

#[cfg(feature = "std")]
impl core::fmt::Display for LoadError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "could not read dictionary source: {}", e),
            LoadError::Empty => write!(f, "dictionary source holds no words"),
            LoadError::Truncated { expected, found } => write!(
                f,
                "dictionary source is truncated: summary declares {} words, found {}",
                expected, found
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "std")]
impl Dictionary {
    /// Load a dictionary file from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    /// Read a dictionary from any buffered source, consuming a leading
    /// summary line as metadata when present and verifying the body
    /// against it.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LoadError> {
        let mut expected: Option<usize> = None;
        let mut words = Vec::new();

        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if number == 0 {
                if let Some(counts) = parse_summary(line) {
                    expected = Some(counts.values().sum());
                    continue;
                }
            }
            if !line.is_empty() {
                words.push(String::from(line));
            }
        }

        if words.is_empty() {
            return Err(LoadError::Empty);
        }
        if let Some(expected) = expected {
            if words.len() < expected {
                return Err(LoadError::Truncated {
                    expected,
                    found: words.len(),
                });
            }
        }
        Ok(Self::from_words(words))
    }
}
