use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidateError {
    #[error("Missing required fields: name, email, and message are mandatory.")]
    MissingRequiredFields,
}

/// One contact-form payload from a website visitor.
///
/// Built from the raw JSON body of a form submission. A submission is
/// either fully rejected here, before any delivery attempt, or carries
/// everything the relay needs. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
    pub tel: Option<String>,
    pub company: Option<String>,
}

impl ContactSubmission {
    /// Validate an untyped payload into a submission.
    ///
    /// `name`, `email` and `message` must each be present as non-empty
    /// JSON strings. No format, length or content checks are applied
    /// beyond presence. `tel` and `company` pass through verbatim when
    /// present and non-empty.
    pub fn from_payload(payload: &Value) -> Result<Self, ValidateError> {
        let (Some(name), Some(email), Some(message)) = (
            string_field(payload, "name"),
            string_field(payload, "email"),
            string_field(payload, "message"),
        ) else {
            return Err(ValidateError::MissingRequiredFields);
        };

        Ok(Self {
            name,
            email,
            message,
            tel: string_field(payload, "tel"),
            company: string_field(payload, "company"),
        })
    }
}

fn string_field(payload: &Value, key: &str) -> Option<String> {
    match payload.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}
