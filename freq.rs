use std::fs::{self, OpenOptions};
use std::io::{Error, ErrorKind, Result, Write};

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

// Compile once. `\W` is any character outside the word class (letter, digit, underscore).
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W").unwrap());

/// Read the whole corpus into memory, lowercased. The file is read exactly once.
pub fn load_corpus(path: &str) -> Result<String> {
    Ok(fs::read_to_string(path)?.to_lowercase())
}

/// Replace every non-word character with a single space. Each match is a
/// single character, so the character length of the text never changes.
pub fn clean(text: &str) -> String {
    NON_WORD.replace_all(text, " ").into_owned()
}

/// Tally whitespace-separated tokens, keeping first-seen order.
pub fn count_tokens(cleaned: &str) -> IndexMap<String, u64> {
    let mut counts = IndexMap::new();
    for token in cleaned.split_whitespace() {
        *counts.entry(token.to_string()).or_insert(0) += 1;
    }
    counts
}

/// Write one `word:count:` line per entry, truncating any existing file.
pub fn write_frequencies(path: &str, counts: &IndexMap<String, u64>) -> Result<()> {
    let mut output = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;
    for (token, count) in counts {
        output.write_all(format!("{}:{}:\n", token, count).as_bytes())?;
    }
    Ok(())
}

/// Load a frequency file written by [`write_frequencies`]. Fields are
/// colon-delimited; the empty field after the trailing colon carries no data
/// and is ignored.
pub fn read_frequencies(path: &str) -> Result<IndexMap<String, u64>> {
    let mut counts = IndexMap::new();
    for line in fs::read_to_string(path)?.lines() {
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split(':');
        let token = fields.next().unwrap_or("").trim().to_lowercase();
        let count = fields.next().ok_or_else(|| {
            Error::new(ErrorKind::InvalidData, format!("missing count in {:?}", line))
        })?;
        let count = count.trim().parse::<u64>().map_err(|e| {
            Error::new(ErrorKind::InvalidData, format!("bad count {:?}: {}", count, e))
        })?;
        counts.insert(token, count);
    }
    Ok(counts)
}
