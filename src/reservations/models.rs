use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Domain model representing a reservation row in the ledger
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Reservation {
    pub id: i32,
    pub user_id: i32,
    pub hotel_id: i32,
    pub date_debut: NaiveDate,
    pub date_fin: NaiveDate,
    pub prix_total: Decimal,
    pub cree_le: DateTime<Utc>,
}

/// Reservation joined with user and hotel display data
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct ReservationDetail {
    pub id: i32,
    pub user_id: i32,
    pub hotel_id: i32,
    pub date_debut: NaiveDate,
    pub date_fin: NaiveDate,
    pub prix_total: Decimal,
    pub cree_le: DateTime<Utc>,
    pub hotel_nom: String,
    pub user_email: String,
}

/// Request DTO for creating a reservation
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReservationRequest {
    #[validate(range(min = 1, message = "hotel_id must be a positive id"))]
    pub hotel_id: i32,
    pub date_debut: NaiveDate,
    pub date_fin: NaiveDate,
}

/// Request DTO for updating a reservation; omitted fields keep their
/// current values
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateReservationRequest {
    #[validate(range(min = 1, message = "hotel_id must be a positive id"))]
    pub hotel_id: Option<i32>,
    pub date_debut: Option<NaiveDate>,
    pub date_fin: Option<NaiveDate>,
}

/// Response DTO for the reservation count endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct CountResponse {
    pub count: i64,
}

/// Bookings per calendar month (1-12)
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct MonthlyCount {
    pub month: i32,
    pub count: i64,
}

/// Revenue per calendar month (1-12)
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct MonthlyRevenue {
    pub month: i32,
    pub revenue: Decimal,
}

/// Booking count for a single hotel
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct HotelBookings {
    pub hotel_name: String,
    pub booking_count: i64,
}

/// Accumulated revenue for a single hotel
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct HotelRevenue {
    pub hotel_name: String,
    pub total_revenue: Decimal,
}

/// Booking count for a single user
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct ActiveUser {
    pub user_email: String,
    pub booking_count: i64,
}
