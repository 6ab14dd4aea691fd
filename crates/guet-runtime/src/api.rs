use guet_types::{Entry, EntryDraft, Organisation, OrganisationDraft};
use std::fmt;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Failure reported by the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Transport-level failure: connection, serialization, storage I/O
    Transport(String),

    /// Non-2xx response from the collaborator
    Rejected {
        status: u16,
        /// Server-provided message, surfaced to the user verbatim
        message: Option<String>,
    },
}

impl ApiError {
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        ApiError::Rejected {
            status,
            message: Some(message.into()),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "{}", msg),
            ApiError::Rejected { status, message } => match message {
                Some(msg) => write!(f, "{}", msg),
                None => write!(f, "Erreur HTTP {}", status),
            },
        }
    }
}

impl std::error::Error for ApiError {}

/// Persistence collaborator for the roster.
///
/// HTTP-shaped but transport-agnostic: entries travel with the historical
/// wire names (`list`, `is_crown`, `is_png`, `order`/`order_id`),
/// organisations with `nom_complet`/`nom_abrege`. The server assigns ids
/// and remains the final authority on every mutation; in particular it
/// decides which names a batch delete actually matched.
#[allow(async_fn_in_trait)]
pub trait RosterApi {
    async fn fetch_entries(&self) -> ApiResult<Vec<Entry>>;

    async fn fetch_organisations(&self) -> ApiResult<Vec<Organisation>>;

    async fn create_entry(&self, draft: &EntryDraft) -> ApiResult<Entry>;

    /// Full-record replace of the entry with the given id.
    async fn update_entry(&self, id: &str, draft: &EntryDraft) -> ApiResult<Entry>;

    async fn delete_entry(&self, id: &str) -> ApiResult<()>;

    /// Batch delete by exact name; returns the sub-list of names that
    /// actually matched an entry.
    async fn delete_entries_by_name(&self, names: &[String]) -> ApiResult<Vec<String>>;

    async fn create_organisation(&self, draft: &OrganisationDraft) -> ApiResult<Organisation>;

    async fn update_organisation(
        &self,
        id: &str,
        draft: &OrganisationDraft,
    ) -> ApiResult<Organisation>;

    async fn delete_organisation(&self, id: &str) -> ApiResult<()>;
}
