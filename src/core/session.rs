// File: src/core/session.rs
use crate::core::types::{EnrichmentRecord, Keyword};
use crate::errors::Error;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The mutable state of one user session: the keyword set from the most
/// recent processing action plus the enrichment records fetched for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    keywords: Vec<Keyword>,
    details: HashMap<Keyword, EnrichmentRecord>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a freshly processed keyword set. The enrichment map is
    /// cleared unconditionally, even when `new_set` equals the old set.
    pub fn replace(&mut self, new_set: Vec<Keyword>) {
        self.keywords = new_set;
        self.details.clear();
    }

    /// Inserts or overwrites the record for `keyword`, which must be a
    /// member of the current set.
    pub fn record_details(
        &mut self,
        keyword: &str,
        record: EnrichmentRecord,
    ) -> Result<(), Error> {
        if !self.contains(keyword) {
            return Err(Error::UnknownKeyword(keyword.to_string()));
        }
        self.details.insert(keyword.to_string(), record);
        Ok(())
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k == keyword)
    }

    pub fn keywords(&self) -> &[Keyword] {
        &self.keywords
    }

    pub fn details(&self) -> &HashMap<Keyword, EnrichmentRecord> {
        &self.details
    }

    pub fn details_for(&self, keyword: &str) -> Option<&EnrichmentRecord> {
        self.details.get(keyword)
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}
