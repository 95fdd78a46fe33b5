use serde::{Deserialize, Serialize};
use crate::models::domain::{ExchangeMatch, Resident};
use crate::models::validation::FieldErrors;
use crate::services::UpsertOutcome;

/// Response for the find matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindMatchesResponse {
    pub subject_id: String,
    pub matches: Vec<ExchangeMatch>,
    pub total_results: usize,
}

/// Response for a successful registration or update
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResidentResponse {
    pub outcome: UpsertOutcome,
    pub resident: Resident,
    pub total_residents: usize,
}

/// Registry listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResidentsResponse {
    pub residents: Vec<Resident>,
    pub count: usize,
}

/// Choices offered by the registration form
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsResponse {
    pub directions: Vec<OptionEntry>,
    pub wish_floors: Vec<OptionEntry>,
    pub wish_directions: Vec<OptionEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionEntry {
    pub value: String,
    pub label: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub residents: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<FieldErrors>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bodies_use_camel_case_keys() {
        let body = serde_json::to_value(FindMatchesResponse {
            subject_id: "29001011234567".to_string(),
            matches: Vec::new(),
            total_results: 0,
        })
        .unwrap();
        assert_eq!(body["subjectId"], "29001011234567");
        assert_eq!(body["totalResults"], 0);
        assert!(body.get("subject_id").is_none());

        let mut fields = FieldErrors::new();
        fields.insert("wish_floor", "Please choose a floor preference.");
        let body = serde_json::to_value(ErrorResponse {
            error: "validation_error".to_string(),
            message: fields.to_string(),
            status_code: 400,
            fields: Some(fields),
        })
        .unwrap();
        assert_eq!(body["statusCode"], 400);
        assert_eq!(body["fields"]["wishFloor"], "Please choose a floor preference.");
    }
}
