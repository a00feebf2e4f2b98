use std::sync::Arc;

use tracing::{info, instrument};

use models::booking::{BookingStatusUpdate, NewBooking};

use crate::errors::ServiceError;
use crate::query::field_eq;
use crate::store::{Collection, Document, InsertOutcome, UpdateOutcome};

/// Operations on the Bookings collection. Bookings are never deleted.
#[derive(Clone)]
pub struct BookingLedger {
    col: Arc<dyn Collection>,
}

impl BookingLedger {
    pub fn new(col: Arc<dyn Collection>) -> Self {
        Self { col }
    }

    #[instrument(skip(self, input), fields(customer = %input.user_email))]
    pub async fn add(&self, input: NewBooking) -> Result<InsertOutcome, ServiceError> {
        input.validate()?;
        let outcome = self.col.insert_one(input.into_document()?).await?;
        info!(booking_id = %outcome.inserted_id, "booking_created");
        Ok(outcome)
    }

    /// Bookings placed by the given customer (exact `userEmail` match).
    pub async fn by_customer(&self, email: &str) -> Result<Vec<Document>, ServiceError> {
        self.col.find(&field_eq("userEmail", email)).await
    }

    /// Bookings assigned to the given provider (exact `providerEmail`
    /// match); the provider's to-do list.
    pub async fn by_provider(&self, email: &str) -> Result<Vec<Document>, ServiceError> {
        self.col.find(&field_eq("providerEmail", email)).await
    }

    /// Merge a status patch into the booking. Upsert is deliberately on:
    /// a missing id creates a booking holding the patch plus that id,
    /// matching the observed store behavior.
    #[instrument(skip(self, patch))]
    pub async fn set_status(
        &self,
        id: &str,
        patch: BookingStatusUpdate,
    ) -> Result<UpdateOutcome, ServiceError> {
        patch.validate()?;
        self.col.update_one(id, patch.into_patch()?, true).await
    }
}
