//! Bag-of-words text similarity.
//!
//! A tiny vector-space model: both texts are tokenized, term frequencies are
//! counted over the union vocabulary, and the two count vectors are compared
//! with cosine similarity. Non-negative vectors keep the result in [0, 1].

use indexmap::{IndexMap, IndexSet};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Normalize and split text into significant word tokens.
///
/// Lowercases, strips diacritics via NFD decomposition (dropping combining
/// marks), maps every non-word character to whitespace, and discards tokens
/// of length <= 2. No stemming, no stopword list.
pub fn tokenize(text: &str) -> Vec<String>
{
    let folded: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| {
            if c.is_alphanumeric() || c == '_' { c } else { ' ' }
        })
        .collect();

    folded
        .split_whitespace()
        .filter(|word| word.chars().count() > 2)
        .map(str::to_string)
        .collect()
}

/// Cosine similarity between two texts, in [0, 1].
///
/// Returns 0 when either side tokenizes to nothing, which doubles as the
/// division-by-zero guard for empty magnitudes.
pub fn cosine_similarity(
    text_a: &str,
    text_b: &str,
) -> f64
{
    let tokens_a = tokenize(text_a);
    let tokens_b = tokenize(text_b);

    let counts_a = term_counts(&tokens_a);
    let counts_b = term_counts(&tokens_b);

    // Union vocabulary in first-seen order; both vectors index into it the
    // same way, so iteration order cannot change the result.
    let vocab: IndexSet<&str> = counts_a
        .keys()
        .chain(counts_b.keys())
        .copied()
        .collect();

    let mut dot = 0.0;
    let mut mag_a = 0.0;
    let mut mag_b = 0.0;

    for word in &vocab
    {
        let a = counts_a.get(word).copied().unwrap_or(0.0);
        let b = counts_b.get(word).copied().unwrap_or(0.0);

        dot += a * b;
        mag_a += a * a;
        mag_b += b * b;
    }

    if mag_a == 0.0 || mag_b == 0.0
    {
        return 0.0;
    }

    dot / (mag_a.sqrt() * mag_b.sqrt())
}

/// Term-frequency map over a token slice, insertion-ordered.
fn term_counts(tokens: &[String]) -> IndexMap<&str, f64>
{
    let mut counts: IndexMap<&str, f64> = IndexMap::new();

    for token in tokens
    {
        *counts
            .entry(token.as_str())
            .or_insert(0.0) += 1.0;
    }

    counts
}
