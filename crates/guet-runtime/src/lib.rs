pub mod api;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod storage;

pub use api::{ApiError, ApiResult, RosterApi};
pub use config::{Settings, resolve_data_path};
pub use coordinator::{Coordinator, ViewPage};
pub use error::{Error, Result};
pub use storage::MemoryStore;
