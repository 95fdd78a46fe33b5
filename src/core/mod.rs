// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod scoring;

pub use filters::{floor_satisfies, direction_satisfies, check_eligibility, is_mutually_eligible, Eligibility};
pub use matcher::{ExchangeMatcher, MatchError};
pub use scoring::{calculate_exchange_score, direction_bonus_applies, floor_proximity_bonus};
