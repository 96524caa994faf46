//! Word cloud frequency model.
//!
//! Builds a weighted word list from a text column. The terminal layer
//! renders weights as font-ish emphasis (color ramp plus bold tiers);
//! everything here is plain counting.

use std::collections::HashMap;

use crate::data::{DataTable, MissingColumn};

/// Words kept per cloud, heaviest first.
pub const MAX_WORDS: usize = 200;

/// Function words excluded from clouds.
const STOPWORDS: &[&str] = &[
    "a", "all", "an", "and", "are", "as", "at", "be", "by", "due", "for", "from", "in", "is",
    "it", "not", "of", "on", "or", "other", "that", "the", "to", "with",
];

/// One word with its absolute count and normalized weight.
#[derive(Debug, Clone, PartialEq)]
pub struct WordWeight {
    pub word: String,
    pub count: usize,
    /// Count relative to the heaviest word, in `(0, 1]`.
    pub weight: f64,
}

/// A prepared cloud: words sorted by count descending, ties alphabetical.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WordCloud {
    words: Vec<WordWeight>,
}

impl WordCloud {
    /// Builds a cloud from every non-null cell of `column`. An empty or
    /// all-null column yields an empty cloud, not an error.
    pub fn from_column(table: &DataTable, column: &str) -> Result<WordCloud, MissingColumn> {
        let idx = table.require_column(column)?;
        let texts = table
            .rows()
            .iter()
            .filter(|row| !row[idx].is_null())
            .map(|row| row[idx].to_string());
        Ok(Self::from_texts(texts))
    }

    /// Builds a cloud from raw text fragments.
    pub fn from_texts<I, S>(texts: I) -> WordCloud
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for text in texts {
            for token in tokenize(text.as_ref()) {
                *counts.entry(token).or_insert(0) += 1;
            }
        }

        let mut words: Vec<(String, usize)> = counts.into_iter().collect();
        words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        words.truncate(MAX_WORDS);

        let top = words.first().map(|(_, c)| *c).unwrap_or(0);
        let words = words
            .into_iter()
            .map(|(word, count)| WordWeight {
                word,
                count,
                weight: if top == 0 {
                    0.0
                } else {
                    count as f64 / top as f64
                },
            })
            .collect();
        WordCloud { words }
    }

    pub fn words(&self) -> &[WordWeight] {
        &self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Heaviest `n` words.
    pub fn top(&self, n: usize) -> &[WordWeight] {
        &self.words[..n.min(self.words.len())]
    }
}

/// Lowercased alphanumeric tokens, two or more characters, stopwords and
/// pure numbers removed. Internal apostrophes survive.
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric() && c != '\'')
        .map(|t| t.trim_matches('\'').to_lowercase())
        .filter(|t| t.chars().count() >= 2)
        .filter(|t| !t.chars().all(|c| c.is_ascii_digit()))
        .filter(|t| !STOPWORDS.contains(&t.as_str()))
}
