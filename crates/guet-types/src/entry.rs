use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// NOTE: Wire naming
//
// The persistence API kept the historical field names of the original
// office tooling: the primary category travels as "list", the flags as
// "is_crown"/"is_png", and the organisation reference as "order" on read
// but "order_id" on write. In-memory names are the canonical ones; the
// serde renames below are the single place where the drift is absorbed.

/// Primary classification of a roster entry.
///
/// Every entry carries exactly one of these; there is no "unclassified"
/// state on the wire or in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Liste noire
    Noire,
    /// Liste de surveillance
    Surveillance,
    /// Liste noire hors A&C
    Hors,
    /// Archives
    Archives,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Noire,
        Category::Surveillance,
        Category::Hors,
        Category::Archives,
    ];

    /// Wire value ("noire", "surveillance", "hors", "archives").
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Noire => "noire",
            Category::Surveillance => "surveillance",
            Category::Hors => "hors",
            Category::Archives => "archives",
        }
    }

    /// Human-facing label, as displayed on the roster tabs.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Noire => "Liste noire",
            Category::Surveillance => "Liste de surveillance",
            Category::Hors => "Liste noire hors A&C",
            Category::Archives => "Archives",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "noire" => Ok(Category::Noire),
            "surveillance" => Ok(Category::Surveillance),
            "hors" => Ok(Category::Hors),
            "archives" => Ok(Category::Archives),
            other => Err(format!(
                "unknown list '{}' (expected noire, surveillance, hors or archives)",
                other
            )),
        }
    }
}

/// Roster entry ("brigand") as held in the snapshot.
///
/// The id is an opaque stable string assigned by the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,

    pub name: String,

    #[serde(rename = "list")]
    pub category: Category,

    /// Free-text record of the entry's misdeeds; empty means none.
    #[serde(default)]
    pub facts: String,

    #[serde(default, rename = "is_crown")]
    pub crown_wanted: bool,

    #[serde(default, rename = "is_png")]
    pub png: bool,

    /// Reference to an [`crate::Organisation`] id, if affiliated.
    #[serde(default, rename = "order")]
    pub organisation_id: Option<String>,
}

/// Full-record payload for entry create and update.
///
/// Update replaces the stored record wholesale: a draft always carries
/// every field, and nothing is preserved from the previous record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDraft {
    pub name: String,

    #[serde(rename = "list")]
    pub category: Category,

    #[serde(default)]
    pub facts: String,

    #[serde(default, rename = "is_crown")]
    pub crown_wanted: bool,

    #[serde(default, rename = "is_png")]
    pub png: bool,

    #[serde(default, rename = "order_id")]
    pub organisation_id: Option<String>,
}

impl EntryDraft {
    /// Draft carrying the same record as an existing entry.
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            name: entry.name.clone(),
            category: entry.category,
            facts: entry.facts.clone(),
            crown_wanted: entry.crown_wanted,
            png: entry.png,
            organisation_id: entry.organisation_id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_wire_roundtrip() {
        let json = r#"{
            "id": "17",
            "name": "Ravaillac",
            "list": "noire",
            "facts": "Vol de gabelle",
            "is_crown": true,
            "is_png": false,
            "order": "3"
        }"#;

        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, "17");
        assert_eq!(entry.category, Category::Noire);
        assert!(entry.crown_wanted);
        assert!(!entry.png);
        assert_eq!(entry.organisation_id.as_deref(), Some("3"));

        let back = serde_json::to_value(&entry).unwrap();
        assert_eq!(back["list"], "noire");
        assert_eq!(back["is_crown"], true);
        assert_eq!(back["order"], "3");
    }

    #[test]
    fn test_entry_defaults_for_optional_fields() {
        let json = r#"{"id": "1", "name": "Anonyme", "list": "archives"}"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.facts, "");
        assert!(!entry.crown_wanted);
        assert!(!entry.png);
        assert_eq!(entry.organisation_id, None);
    }

    #[test]
    fn test_draft_writes_order_id() {
        let draft = EntryDraft {
            name: "Cartouche".to_string(),
            category: Category::Surveillance,
            facts: String::new(),
            crown_wanted: false,
            png: true,
            organisation_id: Some("9".to_string()),
        };

        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["list"], "surveillance");
        assert_eq!(value["is_png"], true);
        assert_eq!(value["order_id"], "9");
        assert!(value.get("order").is_none());
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!("noire".parse::<Category>().unwrap(), Category::Noire);
        assert_eq!(" Archives ".parse::<Category>().unwrap(), Category::Archives);
        assert!("grise".parse::<Category>().is_err());
    }

    #[test]
    fn test_unknown_category_on_the_wire_is_rejected() {
        let json = r#"{"id": "1", "name": "X", "list": "grise"}"#;
        assert!(serde_json::from_str::<Entry>(json).is_err());
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::Noire.label(), "Liste noire");
        assert_eq!(Category::Hors.label(), "Liste noire hors A&C");
    }
}
