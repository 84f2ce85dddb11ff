use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use validator::ValidationErrors;

pub mod auth;
pub mod submissions;

/// Field path → human-readable messages, as returned in 400 responses.
pub type ValidationDetails = BTreeMap<String, Vec<String>>;

/// Flatten `validator` errors into a field/message map for display.
///
/// Pure formatting; falls back to the error code when a rule carries no
/// message.
pub fn validation_details(errors: &ValidationErrors) -> ValidationDetails {
    let mut details = ValidationDetails::new();
    for (field, field_errors) in errors.field_errors() {
        let messages = field_errors
            .iter()
            .map(|error| match &error.message {
                Some(message) => message.to_string(),
                None => error.code.to_string(),
            })
            .collect();
        details.insert(field.to_string(), messages);
    }
    details
}

/// Deserialize an optional string, treating empty or blank input as `None`.
pub fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
