use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{errors::ModelError, validate_email};

/// The identity payload embedded in a session token. Minimally an email;
/// whatever else the login flow supplies rides along as extra claims.
/// This is the only source of trust for ownership checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Identity {
    pub fn new(email: impl Into<String>) -> Self {
        Self { email: email.into(), extra: Map::new() }
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        validate_email(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extra_claims_ride_along() {
        let id: Identity = serde_json::from_value(json!({
            "email": "user@example.com",
            "displayName": "User",
        }))
        .unwrap();
        id.validate().unwrap();
        assert_eq!(id.extra["displayName"], "User");
    }

    #[test]
    fn email_is_required_shape() {
        let id = Identity::new("not-an-email");
        assert!(id.validate().is_err());
    }
}
