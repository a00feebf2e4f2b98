//! Business layer between the HTTP surface and the document store.
//! - `store`: schemaless document collections behind an injectable trait.
//! - `query`: request parameters translated to store filter predicates.
//! - `auth`: session token minting and verification.
//! - `marketplace`: the Service/Booking access operations themselves.

pub mod auth;
pub mod errors;
pub mod marketplace;
pub mod query;
pub mod store;

pub use errors::ServiceError;
