// File: src/core/types.rs
use serde::{Deserialize, Serialize};

/// A case-normalized keyword token or short phrase.
/// Within one processed set no two keywords compare equal under the active
/// mode's case rule.
pub type Keyword = String;

/// How raw input is turned into a keyword set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizeMode {
    /// Split on commas, trim each piece, uppercase.
    DelimiterSplit,
    /// Ranked phrase extraction over free text, lowercased.
    PhraseExtraction,
}

/// Lexical metadata fetched for a single keyword.
/// Any of the lists may be empty; a failed lookup and a genuinely empty
/// result look the same here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnrichmentRecord {
    pub definitions: Vec<String>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

impl EnrichmentRecord {
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty() && self.synonyms.is_empty() && self.antonyms.is_empty()
    }
}
