use thiserror::Error;

/// Business errors for the session token workflows.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Missing, malformed, tampered, or expired credential. Deliberately
    /// a single variant: callers must not be able to distinguish them.
    #[error("invalid or expired credential")]
    Unauthorized,
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("token error: {0}")]
    Token(String),
}
