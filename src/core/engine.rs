use crate::core::normalizer::Normalizer;
use crate::core::session::SessionState;
use crate::core::types::{EnrichmentRecord, Keyword, NormalizeMode};
use crate::enrichment::{EnrichmentClient, EnrichmentConfig};
use crate::errors::Error;
use crate::persistence::{load_session, save_session};
use log::{debug, info};
use std::path::Path;

// The engine is composed of the normalizer, the session store and the
// enrichment client; the presentation layer only ever talks to it.
pub struct KeywordEngine {
    pub session: SessionState,
    normalizer: Normalizer,
    enrichment: EnrichmentClient,
    snapshot_path: Option<String>,
}

impl KeywordEngine {
    pub fn new(config: EnrichmentConfig) -> Self {
        Self {
            session: SessionState::new(),
            normalizer: Normalizer::new(),
            enrichment: EnrichmentClient::new(config),
            snapshot_path: None,
        }
    }

    /// Restores the session from a snapshot file, or starts empty when the
    /// file is missing or unreadable. The path is kept for save-on-exit.
    pub fn from_snapshot_or_new(path: &str, config: EnrichmentConfig) -> Self {
        let mut engine = Self::new(config);
        match load_session(Path::new(path)) {
            Ok(session) => {
                info!(
                    "restored {} keyword(s) from '{}'",
                    session.keywords().len(),
                    path
                );
                engine.session = session;
            }
            Err(e) => debug!("starting with an empty session: {}", e),
        }
        engine.snapshot_path = Some(path.to_string());
        engine
    }

    /// Runs one processing action: normalizes `raw` and installs the result
    /// as the new keyword set, discarding all previously fetched enrichment
    /// records. Input that normalizes to nothing leaves the session
    /// untouched and reports `EmptyInput` so the user can be told.
    pub fn process(&mut self, raw: &str, mode: NormalizeMode) -> Result<&[Keyword], Error> {
        let keywords = self.normalizer.normalize(raw, mode);
        if keywords.is_empty() {
            return Err(Error::EmptyInput);
        }
        debug!("processed input into {} keyword(s)", keywords.len());
        self.session.replace(keywords);
        Ok(self.session.keywords())
    }

    /// Fetches the enrichment record for one keyword of the current set and
    /// stores it in the session. A keyword already enriched in this session
    /// is served from the stored record without another round trip.
    pub fn fetch_details(&mut self, keyword: &str) -> Result<&EnrichmentRecord, Error> {
        if self.session.details_for(keyword).is_none() {
            if !self.session.contains(keyword) {
                return Err(Error::UnknownKeyword(keyword.to_string()));
            }
            let record = self.enrichment.fetch_details(keyword);
            self.session.record_details(keyword, record)?;
        }
        self.session
            .details_for(keyword)
            .ok_or_else(|| Error::UnknownKeyword(keyword.to_string()))
    }

    /// Writes the session snapshot to the configured path, if one is set.
    pub fn save_session(&self) -> Result<(), Error> {
        if let Some(path) = &self.snapshot_path {
            save_session(&self.session, Path::new(path))?;
        }
        Ok(())
    }

    /// Replaces the session with one restored from an explicit snapshot
    /// import. Unlike startup restoration, a missing file is reported.
    pub fn import_session(&mut self, path: &str) -> Result<(), Error> {
        self.session = load_session(Path::new(path))?;
        info!(
            "imported session with {} keyword(s) from '{}'",
            self.session.keywords().len(),
            path
        );
        Ok(())
    }
}
