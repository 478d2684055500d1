// HTTP handlers for the reservation endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::analytics::AnalyticsReport;
use crate::auth::{guards::require_role, middleware::AuthenticatedUser, models::Role};
use crate::reservations::{
    CountResponse, CreateReservationRequest, Reservation, ReservationDetail, ReservationError,
    UpdateReservationRequest,
};

/// Handler for POST /api/reservations
/// Books a hotel for the authenticated user
#[utoipa::path(
    post,
    path = "/api/reservations",
    request_body = CreateReservationRequest,
    responses(
        (status = 201, description = "Reservation created successfully", body = Reservation),
        (status = 400, description = "Invalid input data", body = String, example = json!({"error": "Check-out date must be after check-in date"})),
        (status = 403, description = "Caller does not hold the user role", body = String, example = json!({"error": "Insufficient permissions: required role 'user'"})),
        (status = 404, description = "Hotel or user not found", body = String, example = json!({"error": "Hotel with id 1 not found"})),
        (status = 500, description = "Internal server error", body = String, example = json!({"error": "A database error occurred"}))
    ),
    tag = "reservations"
)]
pub async fn create_reservation_handler(
    State(state): State<crate::AppState>,
    user: AuthenticatedUser,
    Json(request): Json<CreateReservationRequest>,
) -> Result<(StatusCode, Json<Reservation>), ReservationError> {
    // Booking is a user-role operation; the check is exact, so admin
    // accounts cannot create reservations through this endpoint
    require_role(&user, Role::User)?;

    tracing::debug!(
        "Creating reservation for user {} at hotel {}",
        user.user_id,
        request.hotel_id
    );

    request
        .validate()
        .map_err(|e| ReservationError::ValidationError(e.to_string()))?;

    let reservation = state
        .reservation_service
        .create(user.user_id, request)
        .await?;

    Ok((StatusCode::CREATED, Json(reservation)))
}

/// Handler for GET /api/reservations
/// Lists every reservation across all users (admin only)
#[utoipa::path(
    get,
    path = "/api/reservations",
    responses(
        (status = 200, description = "All reservations, newest first", body = Vec<ReservationDetail>),
        (status = 403, description = "Caller is not an administrator", body = String, example = json!({"error": "Insufficient permissions: required role 'admin'"}))
    ),
    tag = "reservations"
)]
pub async fn list_all_reservations_handler(
    State(state): State<crate::AppState>,
    user: AuthenticatedUser,
) -> Result<Json<Vec<ReservationDetail>>, ReservationError> {
    require_role(&user, Role::Admin)?;

    let reservations = state.reservation_service.find_all().await?;
    Ok(Json(reservations))
}

/// Handler for GET /api/reservations/my-reservations
/// Lists the authenticated user's reservations
#[utoipa::path(
    get,
    path = "/api/reservations/my-reservations",
    responses(
        (status = 200, description = "The caller's reservations, newest first", body = Vec<ReservationDetail>)
    ),
    tag = "reservations"
)]
pub async fn my_reservations_handler(
    State(state): State<crate::AppState>,
    user: AuthenticatedUser,
) -> Result<Json<Vec<ReservationDetail>>, ReservationError> {
    let reservations = state
        .reservation_service
        .find_user_reservations(user.user_id)
        .await?;

    Ok(Json(reservations))
}

/// Handler for GET /api/reservations/:id
/// Fetches one reservation by id; no ownership check on reads
#[utoipa::path(
    get,
    path = "/api/reservations/{id}",
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation found", body = ReservationDetail),
        (status = 404, description = "Reservation not found", body = String, example = json!({"error": "Reservation not found"}))
    ),
    tag = "reservations"
)]
pub async fn get_reservation_handler(
    State(state): State<crate::AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<i32>,
) -> Result<Json<ReservationDetail>, ReservationError> {
    let reservation = state.reservation_service.find_one(id).await?;
    Ok(Json(reservation))
}

/// Handler for PUT /api/reservations/:id
/// Updates an owned reservation; price is recomputed when the hotel or
/// dates change
#[utoipa::path(
    put,
    path = "/api/reservations/{id}",
    params(("id" = i32, Path, description = "Reservation ID")),
    request_body = UpdateReservationRequest,
    responses(
        (status = 200, description = "Reservation updated successfully", body = Reservation),
        (status = 400, description = "Invalid input data", body = String, example = json!({"error": "Check-out date must be after check-in date"})),
        (status = 403, description = "Caller does not own the reservation", body = String, example = json!({"error": "You can only update your own reservations"})),
        (status = 404, description = "Reservation or hotel not found", body = String, example = json!({"error": "Reservation not found"}))
    ),
    tag = "reservations"
)]
pub async fn update_reservation_handler(
    State(state): State<crate::AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i32>,
    Json(request): Json<UpdateReservationRequest>,
) -> Result<Json<Reservation>, ReservationError> {
    request
        .validate()
        .map_err(|e| ReservationError::ValidationError(e.to_string()))?;

    let reservation = state
        .reservation_service
        .update(id, user.user_id, request)
        .await?;

    Ok(Json(reservation))
}

/// Handler for DELETE /api/reservations/:id
/// Permanently deletes an owned reservation
#[utoipa::path(
    delete,
    path = "/api/reservations/{id}",
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 204, description = "Reservation deleted successfully"),
        (status = 403, description = "Caller does not own the reservation", body = String, example = json!({"error": "You can only delete your own reservations"})),
        (status = 404, description = "Reservation not found", body = String, example = json!({"error": "Reservation not found"}))
    ),
    tag = "reservations"
)]
pub async fn delete_reservation_handler(
    State(state): State<crate::AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i32>,
) -> Result<StatusCode, ReservationError> {
    state.reservation_service.remove(id, user.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /api/reservations/admin/count
/// Total ledger size (admin only)
#[utoipa::path(
    get,
    path = "/api/reservations/admin/count",
    responses(
        (status = 200, description = "Reservation count", body = CountResponse),
        (status = 403, description = "Caller is not an administrator", body = String, example = json!({"error": "Insufficient permissions: required role 'admin'"}))
    ),
    tag = "reservations"
)]
pub async fn reservation_count_handler(
    State(state): State<crate::AppState>,
    user: AuthenticatedUser,
) -> Result<Json<CountResponse>, ReservationError> {
    require_role(&user, Role::Admin)?;

    let count = state.reservation_service.count().await?;
    Ok(Json(CountResponse { count }))
}

/// Handler for GET /api/reservations/admin/analytics
/// Full analytics report over the ledger (admin only)
#[utoipa::path(
    get,
    path = "/api/reservations/admin/analytics",
    responses(
        (status = 200, description = "Analytics report", body = AnalyticsReport),
        (status = 403, description = "Caller is not an administrator", body = String, example = json!({"error": "Insufficient permissions: required role 'admin'"}))
    ),
    tag = "reservations"
)]
pub async fn analytics_handler(
    State(state): State<crate::AppState>,
    user: AuthenticatedUser,
) -> Result<Json<AnalyticsReport>, ReservationError> {
    require_role(&user, Role::Admin)?;

    let report = state.analytics.full_report().await?;
    Ok(Json(report))
}
