//! Offline dictionary curation: raw word list in, isogram file out.
//!
//! The output format is the one [`crate::Dictionary::load`] consumes: a
//! `{length count},...` summary line followed by one lowercase isogram per
//! line, sorted by ascending length then lexicographically.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::config::MIN_WORD_LENGTH;
use crate::dictionary::format_summary;
use crate::isogram::is_isogram;

/// Summary of a curation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurateReport {
    /// Words written to the dictionary body.
    pub total: usize,
    /// Words per length, as written to the summary line.
    pub counts: BTreeMap<usize, usize>,
}

/// Filter a raw word list down to the dictionary body: lowercase every
/// entry, keep alphabetic isograms of at least [`MIN_WORD_LENGTH`] letters,
/// sort by (length, lexicographic) and drop duplicates.
pub fn curate<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut words: Vec<String> = lines
        .into_iter()
        .map(|line| line.as_ref().trim().to_ascii_lowercase())
        .filter(|word| word.len() >= MIN_WORD_LENGTH && is_isogram(word))
        .collect();
    words.sort_unstable_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    words.dedup();
    words
}

/// Write a curated word list to `path` in the dictionary file format.
pub fn write_dictionary<P: AsRef<Path>>(path: P, words: &[String]) -> anyhow::Result<CurateReport> {
    let mut counts = BTreeMap::new();
    for word in words {
        *counts.entry(word.len()).or_insert(0) += 1;
    }

    let mut body = format_summary(&counts);
    body.push('\n');
    for word in words {
        body.push_str(word);
        body.push('\n');
    }

    let path = path.as_ref();
    fs::write(path, body)
        .with_context(|| format!("could not write dictionary to {}", path.display()))?;
    Ok(CurateReport {
        total: words.len(),
        counts,
    })
}

/// Read a raw word list from `input` and write the curated dictionary to
/// `output`.
pub fn generate<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> anyhow::Result<CurateReport> {
    let input = input.as_ref();
    let raw = fs::read_to_string(input)
        .with_context(|| format!("could not read word list {}", input.display()))?;
    write_dictionary(output, &curate(raw.lines()))
}
