use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(ToSchema)]
pub struct IdentityDoc {
    pub email: String,
}

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct NewServiceDoc {
    pub serviceName: String,
    pub providerEmail: String,
}

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct NewBookingDoc {
    pub userEmail: String,
    pub providerEmail: String,
    pub status: Option<String>,
}

#[derive(ToSchema)]
pub struct BookingStatusDoc {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::root,
        crate::routes::health,
        crate::routes::auth::issue_token,
        crate::routes::auth::logout,
        crate::routes::services::list_services,
        crate::routes::services::get_service,
        crate::routes::services::add_service,
        crate::routes::services::manage_services,
        crate::routes::services::update_service,
        crate::routes::services::delete_service,
        crate::routes::bookings::add_booking,
        crate::routes::bookings::my_bookings,
        crate::routes::bookings::provider_todo,
        crate::routes::bookings::update_booking_status,
    ),
    components(
        schemas(
            HealthResponse,
            IdentityDoc,
            NewServiceDoc,
            NewBookingDoc,
            BookingStatusDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "auth"),
        (name = "services"),
        (name = "bookings")
    )
)]
pub struct ApiDoc;
