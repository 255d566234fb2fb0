//! Lexical-overlap similarity between a transcript and seed phrases.
//!
//! A cheap deterministic stand-in for embedding similarity. For each seed
//! phrase, count the seed words that partially contain, or are contained
//! in, some transcript word; normalise by the seed's word count; take the
//! maximum over all phrases. The result is directional and not a metric.

/// Whitespace tokens of the lowercased text
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Similarity of a single seed phrase against pre-tokenized text words
fn phrase_score(text_words: &[String], seed: &str) -> f64 {
    let seed_words = tokenize(seed);

    let overlap = seed_words
        .iter()
        .filter(|seed_word| {
            text_words.iter().any(|text_word| {
                text_word.contains(seed_word.as_str()) || seed_word.contains(text_word.as_str())
            })
        })
        .count();

    overlap as f64 / seed_words.len().max(1) as f64
}

/// Maximum phrase score of `text` across `seeds`, in [0, 1].
///
/// Empty text or an empty seed set yields 0.
pub fn similarity(text: &str, seeds: &[&str]) -> f64 {
    let text_words = tokenize(text);
    if text_words.is_empty() {
        return 0.0;
    }

    seeds
        .iter()
        .map(|seed| phrase_score(&text_words, seed))
        .fold(0.0, f64::max)
}
