use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};

use models::booking::{BookingStatusUpdate, NewBooking};
use models::identity::Identity;
use service::store::{Document, InsertOutcome, UpdateOutcome};

use crate::errors::ApiError;
use crate::routes::services::EmailParams;
use crate::state::AppState;

/// `POST /add-booking`: customer books a service.
#[utoipa::path(post, path = "/add-booking", tag = "bookings",
    responses((status = 200, description = "Insertion acknowledgement"), (status = 400, description = "Invalid booking")))]
pub async fn add_booking(
    State(state): State<AppState>,
    Json(input): Json<NewBooking>,
) -> Result<Json<InsertOutcome>, ApiError> {
    Ok(Json(state.bookings.add(input).await?))
}

/// `GET /bookings?email=`: a customer's own bookings; queried email
/// must match the verified identity.
#[utoipa::path(get, path = "/bookings", tag = "bookings",
    responses((status = 200, description = "Customer's bookings"), (status = 403, description = "Email mismatch")))]
pub async fn my_bookings(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Query(params): Query<EmailParams>,
) -> Result<Json<Vec<Document>>, ApiError> {
    if identity.email != params.email {
        return Err(ApiError::Forbidden);
    }
    Ok(Json(state.bookings.by_customer(&params.email).await?))
}

/// `GET /services-to-do?email=`: bookings assigned to a provider; same
/// ownership rule.
#[utoipa::path(get, path = "/services-to-do", tag = "bookings",
    responses((status = 200, description = "Provider's booking to-do list"), (status = 403, description = "Email mismatch")))]
pub async fn provider_todo(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Query(params): Query<EmailParams>,
) -> Result<Json<Vec<Document>>, ApiError> {
    if identity.email != params.email {
        return Err(ApiError::Forbidden);
    }
    Ok(Json(state.bookings.by_provider(&params.email).await?))
}

/// `PUT /services-to-do/:id`: merge a status patch into the booking;
/// upsert semantics preserved from the original store behavior.
#[utoipa::path(put, path = "/services-to-do/{id}", tag = "bookings",
    responses((status = 200, description = "Update/insert acknowledgement"), (status = 400, description = "Invalid status")))]
pub async fn update_booking_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<BookingStatusUpdate>,
) -> Result<Json<UpdateOutcome>, ApiError> {
    Ok(Json(state.bookings.set_status(&id, patch).await?))
}
