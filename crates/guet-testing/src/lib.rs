//! Internal test utilities: roster fixtures and an isolated environment
//! builder for CLI integration tests.

pub mod fixtures;
pub mod world;

pub use fixtures::{entry, organisation, sample_snapshot};
pub use world::TestWorld;
