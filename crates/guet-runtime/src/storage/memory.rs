use crate::api::{ApiError, ApiResult, RosterApi};
use anyhow::{Context, Result};
use guet_types::{Entry, EntryDraft, Organisation, OrganisationDraft, Snapshot};
use std::fmt::Display;
use std::path::PathBuf;
use std::sync::Mutex;
use uuid::Uuid;

/// Reference implementation of [`RosterApi`]: an in-memory roster with
/// optional JSON-file persistence.
///
/// Behavior mirrors the office backend this trait abstracts, status codes
/// and French messages included, so the coordinator and CLI exercise the
/// same rejection paths they would see in production. Notably, deleting
/// an organisation detaches any remaining members instead of rejecting —
/// the coordinator's referential guard is what protects the roster.
pub struct MemoryStore {
    state: Mutex<Snapshot>,
    path: Option<PathBuf>,
}

impl MemoryStore {
    /// Empty roster, memory only.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(Snapshot::default()),
            path: None,
        }
    }

    /// Memory-only roster seeded with the given snapshot.
    pub fn with_data(snapshot: Snapshot) -> Self {
        Self {
            state: Mutex::new(snapshot),
            path: None,
        }
    }

    /// File-backed roster. A missing file yields an empty roster; every
    /// mutation rewrites the file.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let snapshot = if path.exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("reading roster file {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("parsing roster file {}", path.display()))?
        } else {
            Snapshot::default()
        };

        Ok(Self {
            state: Mutex::new(snapshot),
            path: Some(path),
        })
    }

    fn persist(&self, state: &Snapshot) -> ApiResult<()> {
        if let Some(path) = &self.path {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(transport)?;
            }
            let content = serde_json::to_string_pretty(state).map_err(transport)?;
            std::fs::write(path, content).map_err(transport)?;
        }
        Ok(())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn transport(err: impl Display) -> ApiError {
    ApiError::Transport(err.to_string())
}

impl RosterApi for MemoryStore {
    async fn fetch_entries(&self) -> ApiResult<Vec<Entry>> {
        let state = self.state.lock().unwrap();
        let mut entries = state.entries.clone();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    async fn fetch_organisations(&self) -> ApiResult<Vec<Organisation>> {
        let state = self.state.lock().unwrap();
        let mut organisations = state.organisations.clone();
        organisations.sort_by(|a, b| a.full_name.cmp(&b.full_name));
        Ok(organisations)
    }

    async fn create_entry(&self, draft: &EntryDraft) -> ApiResult<Entry> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(ApiError::rejected(400, "Le nom IG est obligatoire"));
        }

        let mut state = self.state.lock().unwrap();
        let entry = Entry {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            category: draft.category,
            facts: draft.facts.trim().to_string(),
            crown_wanted: draft.crown_wanted,
            png: draft.png,
            organisation_id: draft.organisation_id.clone(),
        };
        state.entries.push(entry.clone());
        self.persist(&state)?;
        Ok(entry)
    }

    async fn update_entry(&self, id: &str, draft: &EntryDraft) -> ApiResult<Entry> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(ApiError::rejected(400, "Le nom IG ne peut pas être vide"));
        }

        let mut state = self.state.lock().unwrap();
        let slot = state
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| ApiError::rejected(404, "Brigand introuvable"))?;

        *slot = Entry {
            id: id.to_string(),
            name: name.to_string(),
            category: draft.category,
            facts: draft.facts.trim().to_string(),
            crown_wanted: draft.crown_wanted,
            png: draft.png,
            organisation_id: draft.organisation_id.clone(),
        };
        let updated = slot.clone();
        self.persist(&state)?;
        Ok(updated)
    }

    async fn delete_entry(&self, id: &str) -> ApiResult<()> {
        let mut state = self.state.lock().unwrap();
        let before = state.entries.len();
        state.entries.retain(|e| e.id != id);
        if state.entries.len() == before {
            return Err(ApiError::rejected(404, "Brigand introuvable"));
        }
        self.persist(&state)
    }

    async fn delete_entries_by_name(&self, names: &[String]) -> ApiResult<Vec<String>> {
        if names.is_empty() {
            return Err(ApiError::rejected(400, "Liste de noms invalide"));
        }

        let mut state = self.state.lock().unwrap();
        let mut deleted = Vec::new();
        for name in names {
            let needle = name.trim();
            if let Some(pos) = state.entries.iter().position(|e| e.name == needle) {
                state.entries.remove(pos);
                deleted.push(name.clone());
            }
        }
        self.persist(&state)?;
        Ok(deleted)
    }

    async fn create_organisation(&self, draft: &OrganisationDraft) -> ApiResult<Organisation> {
        let full_name = draft.full_name.trim();
        if full_name.is_empty() {
            return Err(ApiError::rejected(400, "Le nom complet est obligatoire"));
        }

        let mut state = self.state.lock().unwrap();
        let organisation = Organisation {
            id: Uuid::new_v4().to_string(),
            full_name: full_name.to_string(),
            short_name: draft
                .short_name
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        };
        state.organisations.push(organisation.clone());
        self.persist(&state)?;
        Ok(organisation)
    }

    async fn update_organisation(
        &self,
        id: &str,
        draft: &OrganisationDraft,
    ) -> ApiResult<Organisation> {
        let full_name = draft.full_name.trim();
        if full_name.is_empty() {
            return Err(ApiError::rejected(400, "Le nom complet ne peut pas être vide"));
        }

        let mut state = self.state.lock().unwrap();
        let slot = state
            .organisations
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| ApiError::rejected(404, "Organisation introuvable"))?;

        slot.full_name = full_name.to_string();
        slot.short_name = draft
            .short_name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        let updated = slot.clone();
        self.persist(&state)?;
        Ok(updated)
    }

    async fn delete_organisation(&self, id: &str) -> ApiResult<()> {
        let mut state = self.state.lock().unwrap();
        let before = state.organisations.len();
        state.organisations.retain(|o| o.id != id);
        if state.organisations.len() == before {
            return Err(ApiError::rejected(404, "Organisation introuvable"));
        }

        // Detach members rather than reject; the client-side guard is
        // expected to have fired already.
        for entry in state.entries.iter_mut() {
            if entry.organisation_id.as_deref() == Some(id) {
                entry.organisation_id = None;
            }
        }
        self.persist(&state)
    }
}
