use crate::{Entry, Organisation};
use serde::{Deserialize, Serialize};

/// Full roster state as last fetched from the persistence layer.
///
/// A snapshot is only ever replaced as a unit (one assignment after a
/// successful reload), never patched field by field, so readers always
/// observe a settled state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub entries: Vec<Entry>,

    #[serde(default)]
    pub organisations: Vec<Organisation>,
}

impl Snapshot {
    pub fn entry(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn organisation(&self, id: &str) -> Option<&Organisation> {
        self.organisations.iter().find(|o| o.id == id)
    }

    /// Entries affiliated with the given organisation.
    pub fn organisation_members(&self, id: &str) -> impl Iterator<Item = &Entry> {
        self.entries
            .iter()
            .filter(move |e| e.organisation_id.as_deref() == Some(id))
    }

    /// Referential-integrity check used before organisation deletion.
    pub fn organisation_in_use(&self, id: &str) -> bool {
        self.organisation_members(id).next().is_some()
    }

    /// Locate an entry by name: exact match first (case-insensitive),
    /// then the first name containing the query.
    pub fn find_by_name(&self, query: &str) -> Option<&Entry> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|e| e.name.to_lowercase() == needle)
            .or_else(|| {
                self.entries
                    .iter()
                    .find(|e| e.name.to_lowercase().contains(&needle))
            })
    }
}
