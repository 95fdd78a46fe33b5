// Model exports
pub mod domain;
pub mod requests;
pub mod responses;
pub mod validation;

pub use domain::{Direction, WishFloor, WishDirection, Resident, ExchangeMatch, ScoringRules, SearchState, UnknownOption};
pub use requests::{RegisterResidentRequest, FindMatchesQuery};
pub use responses::{FindMatchesResponse, RegisterResidentResponse, ResidentsResponse, OptionsResponse, OptionEntry, HealthResponse, ErrorResponse};
pub use validation::FieldErrors;
