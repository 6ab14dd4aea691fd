// NOTE: guet Architecture Rationale
//
// Why reload-everything on any mutation (not incremental patching)?
// - The roster is small and single-operator; correctness beats latency
// - A full snapshot swap keeps every derived view trivially consistent
// - No optimistic update means no rollback paths to maintain
//
// Why one coordinator instance (not ambient state)?
// - The original office page kept the roster and page counters in
//   module-level mutable variables; every regression traced back to that
// - A single owner passed down to presentation makes mutation points
//   auditable and the derivation layer pure
//
// Why a trait seam for persistence (not a baked-in client)?
// - The backend is an external collaborator with a small HTTP-shaped
//   contract; the seam keeps the coordinator testable against scripted
//   fakes and lets the file-backed reference store drive the CLI

mod args;
mod commands;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, OrgCommand};
pub use commands::run;
pub use types::ViewArg;
