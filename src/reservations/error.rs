use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::auth::AuthError;

/// Error types for reservation operations
#[derive(Debug, thiserror::Error)]
pub enum ReservationError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Reservation not found")]
    NotFound,

    #[error("Hotel not found: {0}")]
    HotelNotFound(i32),

    #[error("User not found: {0}")]
    UserNotFound(i32),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl From<sqlx::Error> for ReservationError {
    fn from(err: sqlx::Error) -> Self {
        // Duplicate unique key surfaces as a conflict; everything else is a
        // storage failure.
        if let sqlx::Error::Database(ref db_err) = err {
            if db_err.is_unique_violation() {
                return ReservationError::Conflict(db_err.to_string());
            }
        }
        ReservationError::DatabaseError(err.to_string())
    }
}

// Role guard failures on reservation routes surface as Forbidden.
impl From<AuthError> for ReservationError {
    fn from(err: AuthError) -> Self {
        ReservationError::Forbidden(err.to_string())
    }
}

impl IntoResponse for ReservationError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ReservationError::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A database error occurred".to_string(),
                )
            }
            ReservationError::NotFound => {
                (StatusCode::NOT_FOUND, "Reservation not found".to_string())
            }
            ReservationError::HotelNotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("Hotel with id {} not found", id),
            ),
            ReservationError::UserNotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("User with id {} not found", id),
            ),
            ReservationError::Forbidden(msg) => {
                tracing::warn!("Forbidden reservation access: {}", msg);
                (StatusCode::FORBIDDEN, msg)
            }
            ReservationError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            ReservationError::Conflict(msg) => {
                // Log the full constraint detail internally; the client only
                // sees a stable message
                tracing::warn!("Reservation conflict: {}", msg);
                (StatusCode::CONFLICT, "Reservation conflict".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ReservationError::NotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ReservationError::HotelNotFound(3).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ReservationError::Forbidden("nope".to_string())
                .into_response()
                .status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ReservationError::ValidationError("bad dates".to_string())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ReservationError::Conflict("duplicate".to_string())
                .into_response()
                .status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ReservationError::DatabaseError("boom".to_string())
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_conflict_body_hides_storage_detail() {
        let response = ReservationError::Conflict(
            "duplicate key value violates unique constraint \"reservations_pkey\"".to_string(),
        )
        .into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Reservation conflict");
    }

    #[test]
    fn test_role_guard_failure_maps_to_forbidden() {
        use crate::auth::models::Role;

        let err: ReservationError = AuthError::InsufficientPermissions {
            required: Role::Admin,
            actual: Role::User,
        }
        .into();

        assert!(matches!(err, ReservationError::Forbidden(_)));
    }
}
