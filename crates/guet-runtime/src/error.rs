use crate::api::ApiError;
use std::fmt;

/// Result type for guet-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced at the operation boundary.
///
/// None of these is fatal: the snapshot stays whatever it was before the
/// failed operation and no retry is attempted.
#[derive(Debug)]
pub enum Error {
    /// Required field missing or empty; caught before any collaborator call
    Validation(String),

    /// Reading the roster from the persistence layer failed
    Fetch(ApiError),

    /// Write rejected by the persistence layer; carries the server message
    Mutation(ApiError),

    /// Local guard against deleting an organisation still referenced by
    /// at least one entry
    ReferentialConflict {
        organisation_id: String,
        members: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation(msg) => write!(f, "{}", msg),
            Error::Fetch(err) => write!(f, "Chargement impossible: {}", err),
            Error::Mutation(err) => write!(f, "{}", err),
            Error::ReferentialConflict { .. } => write!(
                f,
                "Impossible: des brigands sont encore rattachés à cette organisation."
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Fetch(err) | Error::Mutation(err) => Some(err),
            Error::Validation(_) | Error::ReferentialConflict { .. } => None,
        }
    }
}
