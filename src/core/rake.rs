// File: src/core/rake.rs
use std::collections::{HashMap, HashSet};

/// Words that never carry content on their own. They terminate candidate
/// phrases and are excluded from scoring.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an",
    "and", "any", "are", "aren't", "as", "at", "be", "because", "been",
    "before", "being", "below", "between", "both", "but", "by", "can",
    "can't", "cannot", "could", "couldn't", "did", "didn't", "do", "does",
    "doesn't", "doing", "don't", "down", "during", "each", "few", "for",
    "from", "further", "had", "hadn't", "has", "hasn't", "have", "haven't",
    "having", "he", "her", "here", "hers", "herself", "him", "himself",
    "his", "how", "i", "if", "in", "into", "is", "isn't", "it", "it's",
    "its", "itself", "just", "me", "more", "most", "my", "myself", "no",
    "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other",
    "our", "ours", "ourselves", "out", "over", "own", "same", "she",
    "should", "shouldn't", "so", "some", "such", "than", "that", "the",
    "their", "theirs", "them", "themselves", "then", "there", "these",
    "they", "this", "those", "through", "to", "too", "under", "until",
    "up", "very", "was", "wasn't", "we", "were", "weren't", "what", "when",
    "where", "which", "while", "who", "whom", "why", "will", "with",
    "won't", "would", "wouldn't", "you", "your", "yours", "yourself",
    "yourselves",
];

/// Statistical ranked-phrase extractor over word co-occurrence (RAKE).
///
/// Candidate phrases are the maximal runs of content words between stop
/// words, punctuation and line breaks. Each word scores degree over
/// frequency, where degree counts every co-occurrence within a candidate
/// phrase (the word itself included); a phrase scores the sum of its word
/// scores. Longer phrases of rarer words therefore rank highest.
pub struct RakeExtractor {
    stop_words: HashSet<&'static str>,
}

impl RakeExtractor {
    pub fn new() -> Self {
        Self {
            stop_words: STOP_WORDS.iter().copied().collect(),
        }
    }

    /// Returns candidate phrases ranked by descending score, lowercased.
    /// Duplicate phrases are collapsed; the sort is stable, so tied phrases
    /// keep their first-occurrence order within one run.
    pub fn extract(&self, text: &str) -> Vec<(String, f64)> {
        let phrases = self.candidate_phrases(text);
        if phrases.is_empty() {
            return Vec::new();
        }

        // Per-word frequency and degree over all candidate phrases.
        let mut frequency: HashMap<&str, f64> = HashMap::new();
        let mut degree: HashMap<&str, f64> = HashMap::new();
        for phrase in &phrases {
            let span = phrase.len() as f64;
            for word in phrase {
                *frequency.entry(word.as_str()).or_insert(0.0) += 1.0;
                *degree.entry(word.as_str()).or_insert(0.0) += span;
            }
        }

        let mut seen = HashSet::new();
        let mut ranked = Vec::new();
        for phrase in &phrases {
            let joined = phrase.join(" ");
            if !seen.insert(joined.clone()) {
                continue;
            }
            let score: f64 = phrase
                .iter()
                .map(|w| degree[w.as_str()] / frequency[w.as_str()])
                .sum();
            ranked.push((joined, score));
        }
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked
    }

    /// Splits text into candidate phrases. A stop word ends the current
    /// phrase silently; punctuation ends it even between content words, so
    /// no phrase ever crosses a sentence boundary.
    fn candidate_phrases(&self, text: &str) -> Vec<Vec<String>> {
        let mut phrases: Vec<Vec<String>> = Vec::new();
        let mut phrase: Vec<String> = Vec::new();
        let mut word = String::new();

        for c in text.chars() {
            if c.is_alphanumeric() || c == '\'' {
                for lc in c.to_lowercase() {
                    word.push(lc);
                }
                continue;
            }
            self.close_word(&mut word, &mut phrase, &mut phrases);
            if !c.is_whitespace() {
                close_phrase(&mut phrase, &mut phrases);
            }
        }
        self.close_word(&mut word, &mut phrase, &mut phrases);
        close_phrase(&mut phrase, &mut phrases);
        phrases
    }

    fn close_word(
        &self,
        word: &mut String,
        phrase: &mut Vec<String>,
        phrases: &mut Vec<Vec<String>>,
    ) {
        if word.is_empty() {
            return;
        }
        if self.stop_words.contains(word.as_str()) {
            word.clear();
            close_phrase(phrase, phrases);
        } else {
            phrase.push(std::mem::take(word));
        }
    }
}

fn close_phrase(phrase: &mut Vec<String>, phrases: &mut Vec<Vec<String>>) {
    if !phrase.is_empty() {
        phrases.push(std::mem::take(phrase));
    }
}
