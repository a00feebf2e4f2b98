pub mod errors;
pub mod guard;
pub mod openapi;
pub mod routes;
pub mod startup;
pub mod state;

pub use startup::run;
