//! Response shapes for the two lexical services, reduced to the fields
//! this system consumes.

use serde::Deserialize;

/// Success body of the thesaurus service: synonym and antonym lists for one
/// term. Either list may be missing entirely; both default to empty.
#[derive(Debug, Deserialize)]
pub struct ThesaurusResponse {
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

/// One entry of the dictionary service response. A looked-up word maps to
/// one or more entries, each carrying one or more meanings.
#[derive(Debug, Deserialize)]
pub struct DictionaryEntry {
    #[serde(default)]
    pub meanings: Vec<DictionaryMeaning>,
}

#[derive(Debug, Deserialize)]
pub struct DictionaryMeaning {
    #[serde(default)]
    pub definitions: Vec<DictionaryDefinition>,
}

#[derive(Debug, Deserialize)]
pub struct DictionaryDefinition {
    pub definition: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thesaurus_body_parses_with_extra_fields() {
        let body = r#"{"word":"run","synonyms":["sprint","dash"],"antonyms":["walk"]}"#;
        let parsed: ThesaurusResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.synonyms, ["sprint", "dash"]);
        assert_eq!(parsed.antonyms, ["walk"]);
    }

    #[test]
    fn absent_thesaurus_lists_default_to_empty() {
        let parsed: ThesaurusResponse = serde_json::from_str(r#"{"word":"run"}"#).unwrap();
        assert!(parsed.synonyms.is_empty());
        assert!(parsed.antonyms.is_empty());
    }

    #[test]
    fn dictionary_body_parses_nested_meanings() {
        let body = r#"[{"word":"run","meanings":[
            {"partOfSpeech":"verb","definitions":[{"definition":"to move swiftly"}]},
            {"partOfSpeech":"noun","definitions":[{"definition":"an act of running"}]}
        ]}]"#;
        let parsed: Vec<DictionaryEntry> = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].meanings.len(), 2);
        assert_eq!(
            parsed[0].meanings[0].definitions[0].definition,
            "to move swiftly"
        );
    }
}
