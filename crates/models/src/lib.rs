//! Domain records and request contracts for the marketplace.
//!
//! Documents in the store are schemaless; these types pin down the fields
//! the API contracts rely on and let everything else flow through
//! untouched via `#[serde(flatten)]`.

pub mod booking;
pub mod errors;
pub mod identity;
pub mod service;

pub use errors::ModelError;

/// Validate an email-shaped field. Deliberately loose: the store treats
/// emails as opaque correlation keys, so only the bare shape is checked.
pub fn validate_email(email: &str) -> Result<(), ModelError> {
    let e = email.trim();
    if e.is_empty() || !e.contains('@') {
        return Err(ModelError::Validation(format!("invalid email: {email:?}")));
    }
    Ok(())
}

/// Validate a required human-readable text field.
pub fn validate_text(field: &str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::Validation(format!("{field} required")));
    }
    Ok(())
}
