//! Definition entries as returned by the dictionary service.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One crowd-sourced definition of a term.
///
/// Every field falls back to its empty value when the server omits it, so a
/// sparse entry still decodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DefinitionEntry {
    /// The term this entry defines
    #[serde(rename = "word")]
    pub headword: String,
    pub definition: String,
    pub example: String,
    pub permalink: String,
    pub author: String,
    pub thumbs_up: u64,
    pub thumbs_down: u64,
    pub written_on: Option<DateTime<Utc>>,
    /// The requesting user's vote, empty when anonymous
    #[serde(rename = "current_vote")]
    pub vote_state: String,
    #[serde(rename = "defid")]
    pub id: u64,
}

impl DefinitionEntry {
    /// Byline shown under the headword, e.g. `by alice on 2005-05-12`.
    pub fn byline(&self) -> Option<String> {
        match (self.author.is_empty(), self.written_on) {
            (true, None) => None,
            (false, None) => Some(format!("by {}", self.author)),
            (true, Some(date)) => Some(format!("on {}", date.format("%Y-%m-%d"))),
            (false, Some(date)) => {
                Some(format!("by {} on {}", self.author, date.format("%Y-%m-%d")))
            }
        }
    }
}

/// Ordered entries for one query, in server order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResultSet {
    list: Vec<DefinitionEntry>,
}

impl ResultSet {
    pub fn new(list: Vec<DefinitionEntry>) -> Self {
        Self { list }
    }

    /// The entry that gets displayed. Only the first one is ever shown.
    pub fn first(&self) -> Option<&DefinitionEntry> {
        self.list.first()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_full_entry() {
        let body = r#"{"list":[{
            "definition": "a greeting",
            "permalink": "http://hello.urbanup.com/1",
            "thumbs_up": 5,
            "author": "alice",
            "word": "hello",
            "defid": 42,
            "current_vote": "",
            "written_on": "2005-05-12T00:00:00.000Z",
            "example": "hello!",
            "thumbs_down": 1
        }]}"#;

        let set: ResultSet = serde_json::from_str(body).unwrap();
        let entry = set.first().unwrap();

        assert_eq!(entry.headword, "hello");
        assert_eq!(entry.id, 42);
        assert_eq!(entry.thumbs_up, 5);
        assert_eq!(entry.thumbs_down, 1);
        assert_eq!(
            entry.written_on,
            Some(Utc.with_ymd_and_hms(2005, 5, 12, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn missing_and_unknown_fields_default() {
        let body = r#"{"list":[{"definition":"x","sound_urls":[]}],"extra":true}"#;
        let set: ResultSet = serde_json::from_str(body).unwrap();

        assert_eq!(
            set.first().cloned().unwrap(),
            DefinitionEntry {
                definition: "x".into(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn missing_list_is_empty() {
        let set: ResultSet = serde_json::from_str("{}").unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn byline_variants() {
        let mut entry = DefinitionEntry::default();
        assert_eq!(entry.byline(), None);

        entry.author = "bob".into();
        assert_eq!(entry.byline().as_deref(), Some("by bob"));

        entry.written_on = Some(Utc.with_ymd_and_hms(2010, 1, 2, 3, 4, 5).unwrap());
        assert_eq!(entry.byline().as_deref(), Some("by bob on 2010-01-02"));
    }
}
