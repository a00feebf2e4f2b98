//! The resource access layer minus HTTP: every operation the route
//! handlers expose, expressed against the injected `Collection` seam.
//! Ownership checks compare request parameters to the verified identity
//! and live with the handlers; this layer validates contracts and talks
//! to the store.

pub mod catalog;
pub mod ledger;

pub use catalog::ServiceCatalog;
pub use ledger::BookingLedger;
