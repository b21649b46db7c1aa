use crate::core::rake::RakeExtractor;
use crate::core::types::{Keyword, NormalizeMode};
use std::collections::HashSet;

/// Turns raw input text into a canonical, deduplicated keyword sequence.
pub struct Normalizer {
    extractor: RakeExtractor,
}

impl Normalizer {
    pub fn new() -> Self {
        Self {
            extractor: RakeExtractor::new(),
        }
    }

    /// Produces the keyword sequence for `raw` under `mode`. Empty and
    /// whitespace-only input yields an empty sequence in both modes; telling
    /// that apart from valid input with few keywords is the caller's job.
    pub fn normalize(&self, raw: &str, mode: NormalizeMode) -> Vec<Keyword> {
        match mode {
            NormalizeMode::DelimiterSplit => split_keywords(raw),
            NormalizeMode::PhraseExtraction => self
                .extractor
                .extract(raw)
                .into_iter()
                .map(|(phrase, _)| phrase)
                .collect(),
        }
    }
}

/// Comma-split normalization: trim each piece, drop the empty ones,
/// uppercase, dedupe keeping the first occurrence.
fn split_keywords(raw: &str) -> Vec<Keyword> {
    let mut seen = HashSet::new();
    raw.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_uppercase)
        .filter(|keyword| seen.insert(keyword.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn delimiter_mode_trims_uppercases_and_dedupes() {
        let normalizer = Normalizer::new();
        let keywords = normalizer.normalize("dog, Dog , cat,,  bird", NormalizeMode::DelimiterSplit);
        assert_eq!(keywords, vec!["DOG", "CAT", "BIRD"]);
    }

    #[test]
    fn empty_input_yields_empty_sequence_in_both_modes() {
        let normalizer = Normalizer::new();
        for raw in ["", "   ", " \t\n "] {
            assert!(normalizer.normalize(raw, NormalizeMode::DelimiterSplit).is_empty());
            assert!(normalizer.normalize(raw, NormalizeMode::PhraseExtraction).is_empty());
        }
    }

    #[test]
    fn delimiter_mode_is_idempotent_over_rejoined_output() {
        let normalizer = Normalizer::new();
        let first = normalizer.normalize("apple, Banana,cherry , apple", NormalizeMode::DelimiterSplit);
        let rejoined = first.join(",");
        let second = normalizer.normalize(&rejoined, NormalizeMode::DelimiterSplit);
        assert_eq!(first, second);
    }

    #[test]
    fn delimiter_mode_entries_are_unique_and_nonempty() {
        let normalizer = Normalizer::new();
        let keywords =
            normalizer.normalize(" x , y,x ,  Y, z ,, ", NormalizeMode::DelimiterSplit);
        let unique: HashSet<&String> = keywords.iter().collect();
        assert_eq!(unique.len(), keywords.len());
        assert!(keywords.iter().all(|k| !k.trim().is_empty()));
        assert_eq!(keywords, vec!["X", "Y", "Z"]);
    }

    #[test]
    fn phrase_mode_entries_are_lowercase_and_unique() {
        let normalizer = Normalizer::new();
        let keywords = normalizer.normalize(
            "Statistical keyword extraction. Statistical keyword extraction helps editors.",
            NormalizeMode::PhraseExtraction,
        );
        let unique: HashSet<&String> = keywords.iter().collect();
        assert_eq!(unique.len(), keywords.len());
        assert!(keywords.iter().all(|k| *k == k.to_lowercase()));
        assert!(keywords.contains(&"statistical keyword extraction".to_string()));
    }
}
