use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::Deserialize;

use models::identity::Identity;
use models::service::{NewService, ServiceUpdate};
use service::store::{DeleteOutcome, Document, InsertOutcome, UpdateOutcome};

use crate::errors::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EmailParams {
    pub email: String,
}

/// `GET /services?searchTerm=`: public catalog search.
#[utoipa::path(get, path = "/services", tag = "services",
    responses((status = 200, description = "Matching services")))]
pub async fn list_services(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Document>>, ApiError> {
    let found = state.catalog.search(params.search_term.as_deref()).await?;
    Ok(Json(found))
}

/// `GET /services/:id`: single service, `null` when the id is unknown.
#[utoipa::path(get, path = "/services/{id}", tag = "services",
    responses((status = 200, description = "Service or null"), (status = 401, description = "Unauthorized")))]
pub async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<Document>>, ApiError> {
    Ok(Json(state.catalog.get(&id).await?))
}

/// `POST /add-service`: provider submits a new service.
#[utoipa::path(post, path = "/add-service", tag = "services",
    responses((status = 200, description = "Insertion acknowledgement"), (status = 400, description = "Invalid service")))]
pub async fn add_service(
    State(state): State<AppState>,
    Json(input): Json<NewService>,
) -> Result<Json<InsertOutcome>, ApiError> {
    Ok(Json(state.catalog.add(input).await?))
}

/// `GET /manage-services?email=`: a provider's own services. The
/// queried email must match the verified identity.
#[utoipa::path(get, path = "/manage-services", tag = "services",
    responses((status = 200, description = "Provider's services"), (status = 403, description = "Email mismatch")))]
pub async fn manage_services(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Query(params): Query<EmailParams>,
) -> Result<Json<Vec<Document>>, ApiError> {
    if identity.email != params.email {
        return Err(ApiError::Forbidden);
    }
    Ok(Json(state.catalog.by_provider(&params.email).await?))
}

/// `PATCH /manage-services/:id`: partial update, never an upsert.
#[utoipa::path(patch, path = "/manage-services/{id}", tag = "services",
    responses((status = 200, description = "Update acknowledgement"), (status = 400, description = "Invalid patch")))]
pub async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ServiceUpdate>,
) -> Result<Json<UpdateOutcome>, ApiError> {
    Ok(Json(state.catalog.update(&id, patch).await?))
}

/// `DELETE /manage-services/:id`: idempotent; a second delete reports
/// zero documents deleted.
#[utoipa::path(delete, path = "/manage-services/{id}", tag = "services",
    responses((status = 200, description = "Deletion acknowledgement")))]
pub async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteOutcome>, ApiError> {
    Ok(Json(state.catalog.remove(&id).await?))
}
