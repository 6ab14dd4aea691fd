pub mod entry;
pub mod organisation;
pub mod snapshot;

pub use entry::{Category, Entry, EntryDraft};
pub use organisation::{Organisation, OrganisationDraft};
pub use snapshot::Snapshot;
