use serde::{Deserialize, Serialize};

/// Brigand organisation, referenced from entries by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organisation {
    pub id: String,

    #[serde(rename = "nom_complet")]
    pub full_name: String,

    /// Abbreviation used in compact mentions; absent when the
    /// organisation has none.
    #[serde(default, rename = "nom_abrege")]
    pub short_name: Option<String>,
}

impl Organisation {
    /// Label shown in selectors and member tables: the abbreviation when
    /// one exists, the full name otherwise.
    pub fn display_label(&self) -> &str {
        match self.short_name.as_deref() {
            Some(short) if !short.trim().is_empty() => short,
            _ => &self.full_name,
        }
    }
}

/// Payload for organisation create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganisationDraft {
    #[serde(rename = "nom_complet")]
    pub full_name: String,

    #[serde(default, rename = "nom_abrege")]
    pub short_name: Option<String>,
}
