use chrono::Utc;
use jsonwebtoken::{
    decode, encode, Algorithm, DecodingKey, EncodingKey, Header as JwtHeader, Validation,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, instrument};

use models::identity::Identity;

use super::errors::AuthError;

/// Token service configuration.
#[derive(Clone)]
pub struct TokenConfig {
    pub secret: String,
    /// Fixed expiry window; observed deployments use 1 or 5 hours.
    pub ttl_hours: i64,
}

/// Mints and verifies the session credential. Stateless; the signed
/// token itself is the session.
pub struct TokenService {
    cfg: TokenConfig,
}

#[derive(Serialize, Deserialize)]
struct Claims {
    email: String,
    iat: i64,
    exp: i64,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl TokenService {
    pub fn new(cfg: TokenConfig) -> Self {
        Self { cfg }
    }

    /// Sign the identity payload into an HS256 token with the configured
    /// expiry window.
    #[instrument(skip(self, identity), fields(email = %identity.email))]
    pub fn issue(&self, identity: &Identity) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            email: identity.email.clone(),
            iat: now.timestamp(),
            exp: (now + chrono::Duration::hours(self.cfg.ttl_hours)).timestamp(),
            extra: identity.extra.clone(),
        };
        encode(
            &JwtHeader::default(),
            &claims,
            &EncodingKey::from_secret(self.cfg.secret.as_bytes()),
        )
        .map_err(|e| AuthError::Token(e.to_string()))
    }

    /// Verify signature and expiry, returning the embedded identity.
    /// Every failure collapses into `Unauthorized`: a tampered token must
    /// look exactly like an absent one to the caller.
    pub fn verify(&self, token: &str) -> Result<Identity, AuthError> {
        let key = DecodingKey::from_secret(self.cfg.secret.as_bytes());
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.required_spec_claims.clear();

        match decode::<Claims>(token, &key, &validation) {
            Ok(data) => Ok(Identity {
                email: data.claims.email,
                extra: data.claims.extra,
            }),
            Err(e) => {
                debug!(error = %e, "token verification failed");
                Err(AuthError::Unauthorized)
            }
        }
    }
}
