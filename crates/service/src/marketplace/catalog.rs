use std::sync::Arc;

use tracing::{info, instrument};

use models::service::{NewService, ServiceUpdate};

use crate::errors::ServiceError;
use crate::query::{field_eq, search_filter};
use crate::store::{Collection, DeleteOutcome, Document, InsertOutcome, UpdateOutcome};

/// Operations on the Services collection.
#[derive(Clone)]
pub struct ServiceCatalog {
    col: Arc<dyn Collection>,
}

impl ServiceCatalog {
    pub fn new(col: Arc<dyn Collection>) -> Self {
        Self { col }
    }

    /// Public search: case-insensitive substring on `serviceName`; an
    /// empty term returns the whole collection.
    #[instrument(skip(self))]
    pub async fn search(&self, term: Option<&str>) -> Result<Vec<Document>, ServiceError> {
        self.col.find(&search_filter("serviceName", term)).await
    }

    pub async fn get(&self, id: &str) -> Result<Option<Document>, ServiceError> {
        self.col.find_one(id).await
    }

    #[instrument(skip(self, input), fields(provider = %input.provider_email))]
    pub async fn add(&self, input: NewService) -> Result<InsertOutcome, ServiceError> {
        input.validate()?;
        let outcome = self.col.insert_one(input.into_document()?).await?;
        info!(service_id = %outcome.inserted_id, "service_created");
        Ok(outcome)
    }

    /// Partial update; never creates a document.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: &str, patch: ServiceUpdate) -> Result<UpdateOutcome, ServiceError> {
        patch.validate()?;
        self.col.update_one(id, patch.into_patch()?, false).await
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, id: &str) -> Result<DeleteOutcome, ServiceError> {
        self.col.delete_one(id).await
    }

    /// Every service owned by the given provider (exact email match).
    pub async fn by_provider(&self, email: &str) -> Result<Vec<Document>, ServiceError> {
        self.col.find(&field_eq("providerEmail", email)).await
    }
}
