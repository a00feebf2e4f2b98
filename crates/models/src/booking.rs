use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::service::to_object;
use crate::{errors::ModelError, validate_email, validate_text};

/// A Booking document as stored. `userEmail` is the requesting customer,
/// `providerEmail` is copied from the booked service; neither is checked
/// against Service existence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "userEmail")]
    pub user_email: String,
    #[serde(rename = "providerEmail")]
    pub provider_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Request contract for `POST /add-booking`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBooking {
    #[serde(rename = "userEmail")]
    pub user_email: String,
    #[serde(rename = "providerEmail")]
    pub provider_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NewBooking {
    pub fn validate(&self) -> Result<(), ModelError> {
        validate_email(&self.user_email)?;
        validate_email(&self.provider_email)?;
        Ok(())
    }

    pub fn into_document(self) -> Result<Map<String, Value>, ModelError> {
        let mut doc = to_object(serde_json::to_value(self))?;
        doc.remove("_id");
        Ok(doc)
    }
}

/// Request contract for `PUT /services-to-do/:id`. Status values are
/// caller-defined; any non-empty string is accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingStatusUpdate {
    pub status: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BookingStatusUpdate {
    pub fn validate(&self) -> Result<(), ModelError> {
        validate_text("status", &self.status)
    }

    pub fn into_patch(self) -> Result<Map<String, Value>, ModelError> {
        let mut patch = to_object(serde_json::to_value(self))?;
        patch.remove("_id");
        Ok(patch)
    }
}
