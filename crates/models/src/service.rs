use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{errors::ModelError, validate_email, validate_text};

/// A Service document as stored. `_id` is store-generated; providers may
/// attach arbitrary descriptive fields beyond the contracted ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "serviceName")]
    pub service_name: String,
    #[serde(rename = "providerEmail")]
    pub provider_email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Request contract for `POST /add-service`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewService {
    #[serde(rename = "serviceName")]
    pub service_name: String,
    #[serde(rename = "providerEmail")]
    pub provider_email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NewService {
    pub fn validate(&self) -> Result<(), ModelError> {
        validate_text("serviceName", &self.service_name)?;
        validate_email(&self.provider_email)?;
        Ok(())
    }

    /// Flatten into a store document. Any caller-supplied `_id` is
    /// dropped; the store assigns identifiers.
    pub fn into_document(self) -> Result<Map<String, Value>, ModelError> {
        let mut doc = to_object(serde_json::to_value(self))?;
        doc.remove("_id");
        Ok(doc)
    }
}

/// Request contract for `PATCH /manage-services/:id`: a partial Service.
/// Contracted fields are re-validated when present; everything else is
/// merged as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceUpdate {
    #[serde(rename = "serviceName", skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    #[serde(rename = "providerEmail", skip_serializing_if = "Option::is_none")]
    pub provider_email: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ServiceUpdate {
    pub fn validate(&self) -> Result<(), ModelError> {
        if let Some(name) = &self.service_name {
            validate_text("serviceName", name)?;
        }
        if let Some(email) = &self.provider_email {
            validate_email(email)?;
        }
        if self.service_name.is_none()
            && self.provider_email.is_none()
            && self.extra.keys().all(|k| k == "_id")
        {
            return Err(ModelError::Validation("empty update".into()));
        }
        Ok(())
    }

    pub fn into_patch(self) -> Result<Map<String, Value>, ModelError> {
        let mut patch = to_object(serde_json::to_value(self))?;
        patch.remove("_id");
        Ok(patch)
    }
}

pub(crate) fn to_object(
    value: Result<Value, serde_json::Error>,
) -> Result<Map<String, Value>, ModelError> {
    match value.map_err(|e| ModelError::Serialization(e.to_string()))? {
        Value::Object(map) => Ok(map),
        other => Err(ModelError::Serialization(format!(
            "expected object, got {other}"
        ))),
    }
}
