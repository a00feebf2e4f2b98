pub mod errors;
pub mod tokens;

pub use errors::AuthError;
pub use tokens::{TokenConfig, TokenService};
