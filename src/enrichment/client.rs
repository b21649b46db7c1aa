//! Lexical enrichment client.
//!
//! Blocking HTTP client for the thesaurus and dictionary lookups. Each
//! sub-lookup absorbs its own failures: anything that goes wrong collapses
//! into empty result lists before it can reach a caller, and the two
//! lookups cannot affect each other.

use super::types::{DictionaryEntry, ThesaurusResponse};
use crate::core::types::EnrichmentRecord;
use log::warn;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::env;
use std::fmt::Write as _;
use std::time::Duration;
use thiserror::Error;

const THESAURUS_API_BASE: &str = "https://api.api-ninjas.com";
const DICTIONARY_API_BASE: &str = "https://api.dictionaryapi.dev";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Everything that can go wrong inside one sub-lookup. Collapsed to empty
/// result lists at the client boundary, never propagated past it.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("no API credential configured")]
    MissingCredential,
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("service answered {0}")]
    Status(StatusCode),
}

/// Connection settings for the two lexical services.
#[derive(Debug, Clone)]
pub struct EnrichmentConfig {
    pub api_key: Option<String>,
    pub thesaurus_base: String,
    pub dictionary_base: String,
    pub timeout: Duration,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            thesaurus_base: THESAURUS_API_BASE.to_string(),
            dictionary_base: DICTIONARY_API_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl EnrichmentConfig {
    /// Reads the connection settings from the process environment. Every
    /// variable is optional; a missing credential only means the thesaurus
    /// lookups will come back empty.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: env::var("THESAURUS_API_KEY").ok().filter(|k| !k.is_empty()),
            thesaurus_base: env::var("THESAURUS_API_BASE").unwrap_or(defaults.thesaurus_base),
            dictionary_base: env::var("DICTIONARY_API_BASE").unwrap_or(defaults.dictionary_base),
            timeout: env::var("LOOKUP_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
        }
    }
}

/// Client for the thesaurus and dictionary services.
pub struct EnrichmentClient {
    http: Client,
    config: EnrichmentConfig,
}

impl EnrichmentClient {
    pub fn new(config: EnrichmentConfig) -> Self {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!("falling back to the default HTTP client: {}", e);
                Client::new()
            });
        Self { http, config }
    }

    /// Fetches the full enrichment record for one keyword. The two lookups
    /// run independently; a failure in either shows up as empty lists in
    /// the record, never as an error.
    pub fn fetch_details(&self, keyword: &str) -> EnrichmentRecord {
        let thesaurus = self.lookup_thesaurus(keyword);
        let dictionary = self.lookup_dictionary(keyword);
        build_record(keyword, thesaurus, dictionary)
    }

    fn lookup_thesaurus(&self, keyword: &str) -> Result<ThesaurusResponse, LookupError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(LookupError::MissingCredential)?;
        let url = format!(
            "{}/v1/thesaurus?word={}",
            self.config.thesaurus_base,
            encode_query_param(keyword)
        );
        let response = self.http.get(&url).header("X-Api-Key", api_key).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status));
        }
        Ok(response.json()?)
    }

    fn lookup_dictionary(&self, keyword: &str) -> Result<Vec<DictionaryEntry>, LookupError> {
        let url = format!(
            "{}/api/v2/entries/en/{}",
            self.config.dictionary_base,
            encode_query_param(keyword)
        );
        let response = self.http.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status));
        }
        Ok(response.json()?)
    }
}

/// Assembles the record from the two sub-lookup outcomes. Failures arrive
/// here already tagged and turn into empty lists with a warning.
fn build_record(
    keyword: &str,
    thesaurus: Result<ThesaurusResponse, LookupError>,
    dictionary: Result<Vec<DictionaryEntry>, LookupError>,
) -> EnrichmentRecord {
    let (synonyms, antonyms) = match thesaurus {
        Ok(body) => (body.synonyms, body.antonyms),
        Err(e) => {
            warn!("thesaurus lookup for '{}' failed: {}", keyword, e);
            (Vec::new(), Vec::new())
        }
    };
    let definitions = match dictionary {
        Ok(entries) => first_definitions(&entries),
        Err(e) => {
            warn!("dictionary lookup for '{}' failed: {}", keyword, e);
            Vec::new()
        }
    };
    EnrichmentRecord {
        definitions,
        synonyms,
        antonyms,
    }
}

/// First definition string of every meaning, across entries, in service
/// order. Meanings without definitions are skipped.
fn first_definitions(entries: &[DictionaryEntry]) -> Vec<String> {
    entries
        .iter()
        .flat_map(|entry| entry.meanings.iter())
        .filter_map(|meaning| meaning.definitions.first())
        .map(|d| d.definition.clone())
        .collect()
}

/// Minimal percent-encoding for one query value.
fn encode_query_param(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '-' | '_' | '.' | '~' => out.push(c),
            _ => {
                let mut buf = [0u8; 4];
                for byte in c.encode_utf8(&mut buf).as_bytes() {
                    let _ = write!(out, "%{:02X}", byte);
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thesaurus_body(synonyms: &[&str], antonyms: &[&str]) -> ThesaurusResponse {
        ThesaurusResponse {
            synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
            antonyms: antonyms.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn dictionary_body(json: &str) -> Vec<DictionaryEntry> {
        serde_json::from_str(json).unwrap()
    }

    // A port from the discard range: connections are refused immediately,
    // so these tests exercise the failure path without any network.
    fn unroutable_config() -> EnrichmentConfig {
        EnrichmentConfig {
            api_key: Some("test-key".to_string()),
            thesaurus_base: "http://127.0.0.1:9".to_string(),
            dictionary_base: "http://127.0.0.1:9".to_string(),
            timeout: Duration::from_secs(1),
        }
    }

    #[test]
    fn failed_thesaurus_does_not_affect_dictionary_result() {
        let dictionary = dictionary_body(
            r#"[{"meanings":[{"definitions":[{"definition":"to move swiftly"}]}]}]"#,
        );
        let record = build_record("run", Err(LookupError::Status(StatusCode::INTERNAL_SERVER_ERROR)), Ok(dictionary));

        assert!(record.synonyms.is_empty());
        assert!(record.antonyms.is_empty());
        assert_eq!(record.definitions, ["to move swiftly"]);
    }

    #[test]
    fn failed_dictionary_does_not_affect_thesaurus_result() {
        let record = build_record(
            "run",
            Ok(thesaurus_body(&["sprint"], &["walk"])),
            Err(LookupError::MissingCredential),
        );

        assert_eq!(record.synonyms, ["sprint"]);
        assert_eq!(record.antonyms, ["walk"]);
        assert!(record.definitions.is_empty());
    }

    #[test]
    fn both_lookups_failing_still_yields_a_record() {
        let record = build_record(
            "run",
            Err(LookupError::MissingCredential),
            Err(LookupError::Status(StatusCode::NOT_FOUND)),
        );
        assert!(record.is_empty());
    }

    #[test]
    fn first_definition_of_every_meaning_is_extracted_in_order() {
        let entries = dictionary_body(
            r#"[{"meanings":[
                {"definitions":[{"definition":"first of meaning one"},{"definition":"second of meaning one"}]},
                {"definitions":[{"definition":"first of meaning two"}]}
            ]}]"#,
        );
        assert_eq!(
            first_definitions(&entries),
            ["first of meaning one", "first of meaning two"]
        );
    }

    #[test]
    fn meanings_without_definitions_are_skipped() {
        let entries = dictionary_body(
            r#"[{"meanings":[{"definitions":[]},{"definitions":[{"definition":"kept"}]}]}]"#,
        );
        assert_eq!(first_definitions(&entries), ["kept"]);
    }

    #[test]
    fn unreachable_services_are_absorbed_into_an_empty_record() {
        let client = EnrichmentClient::new(unroutable_config());
        let record = client.fetch_details("run");
        assert!(record.is_empty());
    }

    #[test]
    fn missing_credential_fails_only_the_thesaurus_lookup() {
        let client = EnrichmentClient::new(EnrichmentConfig {
            api_key: None,
            ..unroutable_config()
        });
        let err = client.lookup_thesaurus("run").unwrap_err();
        assert!(matches!(err, LookupError::MissingCredential));
    }

    #[test]
    fn query_values_are_percent_encoded() {
        assert_eq!(encode_query_param("well-being"), "well-being");
        assert_eq!(encode_query_param("ice cream"), "ice%20cream");
        assert_eq!(encode_query_param("a&b"), "a%26b");
    }
}
