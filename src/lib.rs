//! Swap Algo - apartment exchange matching for residential building complexes
//!
//! Residents register their current floor and orientation together with the
//! floor and orientation they would like instead. The matcher proposes
//! mutually compatible exchange partners ranked by a compatibility score.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;
pub mod telemetry;

// Re-export commonly used types
pub use crate::core::{ExchangeMatcher, MatchError, is_mutually_eligible, calculate_exchange_score};
pub use crate::models::{Resident, Direction, WishFloor, WishDirection, ExchangeMatch, ScoringRules, SearchState, RegisterResidentRequest, FieldErrors};
pub use crate::services::{ResidentRegistry, SharedRegistry, UpsertOutcome, MatchSearch};
