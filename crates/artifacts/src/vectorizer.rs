//! Fitted tf-idf vectorizer for the text feature block.

use crate::error::{ArtifactError, Result};
use serde::Deserialize;
use std::collections::HashMap;

/// One vectorized row: indices into the vocabulary space plus their
/// tf-idf weights. Indices are strictly increasing.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseVector {
    pub indices: Vec<usize>,
    pub values: Vec<f64>,
    /// Total width of the vocabulary space the indices live in
    pub width: usize,
}

impl SparseVector {
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }
}

/// Term-frequency / inverse-document-frequency vectorizer fitted by the
/// external training pipeline.
///
/// `transform` reproduces the fitted transform: lowercase the input, split
/// into word tokens of at least two characters, count occurrences of
/// vocabulary terms, weight by the stored idf values and l2-normalize the
/// row. Vocabulary and idf values are read-only.
#[derive(Debug, Clone, Deserialize)]
pub struct TfidfVectorizer {
    pub vocabulary: HashMap<String, usize>,
    pub idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Width of the text block this vectorizer produces.
    pub fn width(&self) -> usize {
        self.idf.len()
    }

    /// Internal consistency check, run once at load time.
    pub fn validate(&self) -> Result<()> {
        if let Some((term, &idx)) = self
            .vocabulary
            .iter()
            .find(|&(_, &idx)| idx >= self.idf.len())
        {
            return Err(ArtifactError::Inconsistent(format!(
                "vocabulary term {:?} maps to column {} but only {} idf values are present",
                term,
                idx,
                self.idf.len()
            )));
        }
        Ok(())
    }

    /// Vectorize one text into the fitted vocabulary space.
    ///
    /// Out-of-vocabulary tokens are ignored; an input with no known tokens
    /// yields an empty (all-zero) row, which is a valid outcome.
    pub fn transform(&self, text: &str) -> SparseVector {
        // Term counts over vocabulary columns
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for token in tokenize(text) {
            if let Some(&idx) = self.vocabulary.get(&token) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let mut entries: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(idx, count)| (idx, count * self.idf[idx]))
            .collect();
        entries.sort_unstable_by_key(|&(idx, _)| idx);

        // l2 norm over the weighted row
        let norm = entries
            .iter()
            .map(|&(_, v)| v * v)
            .sum::<f64>()
            .sqrt();

        let (indices, values) = entries
            .into_iter()
            .map(|(idx, v)| (idx, if norm > 0.0 { v / norm } else { v }))
            .unzip();

        SparseVector {
            indices,
            values,
            width: self.idf.len(),
        }
    }
}

/// Word tokens of at least two alphanumeric characters, lowercased.
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() >= 2)
        .map(|token| token.to_lowercase())
}
