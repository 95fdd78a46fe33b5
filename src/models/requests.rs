use once_cell::sync::Lazy;
use regex::Regex;
use serde::{de, Deserialize, Deserializer, Serialize};
use validator::Validate;
use crate::models::domain::{Direction, Resident, WishDirection, WishFloor};
use crate::models::validation::FieldErrors;

/// Exactly 14 digits
pub static NATIONAL_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{14}$").unwrap());

/// Local mobile number: `01`, an operator digit (0, 1, 2 or 5), then 8 digits
pub static MOBILE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^01[0125]\d{8}$").unwrap());

/// Raw registration form as submitted by the client
///
/// Every field arrives as text, the way the form posts it. Numbers are
/// accepted for `floor` and turned into their string form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RegisterResidentRequest {
    #[validate(length(min = 1, message = "Name is required."))]
    #[serde(default)]
    pub name: String,
    #[validate(
        length(min = 1, message = "National ID is required."),
        regex(path = *NATIONAL_ID_RE, message = "National ID must be exactly 14 digits.")
    )]
    #[serde(default, alias = "nationalId")]
    pub national_id: String,
    #[validate(length(min = 1, message = "Building number is required."))]
    #[serde(default)]
    pub building: String,
    #[validate(length(min = 1, message = "Floor number is required."))]
    #[serde(default, deserialize_with = "string_or_number")]
    pub floor: String,
    #[validate(length(min = 1, message = "Current direction is required."))]
    #[serde(default)]
    pub direction: String,
    #[validate(regex(path = *MOBILE_RE, message = "Mobile number format is invalid."))]
    #[serde(default)]
    pub phone: Option<String>,
    #[validate(length(min = 1, message = "Please choose a floor preference."))]
    #[serde(default, alias = "wishFloor")]
    pub wish_floor: String,
    #[validate(length(min = 1, message = "Please choose a direction preference."))]
    #[serde(default, alias = "wishDirection")]
    pub wish_direction: String,
}

impl RegisterResidentRequest {
    /// Trim surrounding whitespace from every text field; a blank phone is absent
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            national_id: self.national_id.trim().to_string(),
            building: self.building.trim().to_string(),
            floor: self.floor.trim().to_string(),
            direction: self.direction.trim().to_string(),
            phone: self
                .phone
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty()),
            wish_floor: self.wish_floor.trim().to_string(),
            wish_direction: self.wish_direction.trim().to_string(),
        }
    }

    /// Validate the form and build the resident record
    ///
    /// All problems are collected; the caller gets one message per field.
    pub fn into_resident(self) -> Result<Resident, FieldErrors> {
        let form = self.normalized();
        let mut errors = match form.validate() {
            Ok(()) => FieldErrors::new(),
            Err(e) => FieldErrors::from(&e),
        };

        let floor = parse_field(&mut errors, "floor", &form.floor, |v| {
            v.parse::<i32>()
                .map_err(|_| "Floor number must be a whole number.".to_string())
        });
        let direction = parse_field(&mut errors, "direction", &form.direction, |v| {
            v.parse::<Direction>().map_err(|e| e.to_string())
        });
        let wish_floor = parse_field(&mut errors, "wish_floor", &form.wish_floor, |v| {
            v.parse::<WishFloor>().map_err(|e| e.to_string())
        });
        let wish_direction =
            parse_field(&mut errors, "wish_direction", &form.wish_direction, |v| {
                v.parse::<WishDirection>().map_err(|e| e.to_string())
            });

        match (floor, direction, wish_floor, wish_direction) {
            (Some(floor), Some(direction), Some(wish_floor), Some(wish_direction))
                if errors.is_empty() =>
            {
                Ok(Resident {
                    national_id: form.national_id,
                    name: form.name,
                    building: form.building,
                    floor,
                    direction,
                    phone: form.phone.unwrap_or_default(),
                    wish_floor,
                    wish_direction,
                })
            }
            _ => Err(errors),
        }
    }
}

/// Parse a field that passed the presence check; skip fields already in error
fn parse_field<T>(
    errors: &mut FieldErrors,
    field: &str,
    value: &str,
    parse: impl FnOnce(&str) -> Result<T, String>,
) -> Option<T> {
    if errors.contains(field) {
        return None;
    }
    match parse(value) {
        Ok(parsed) => Some(parsed),
        Err(message) => {
            errors.insert(field, message);
            None
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(de::Error::custom(format!(
            "expected a string or number, found {}",
            other
        ))),
    }
}

/// Query parameters for the match endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct FindMatchesQuery {
    #[validate(range(min = 1, message = "limit must be at least 1"))]
    pub limit: Option<u16>,
}
