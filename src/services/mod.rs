// Service exports
pub mod registry;
pub mod search;

pub use registry::{ResidentRegistry, SharedRegistry, UpsertOutcome};
pub use search::MatchSearch;
