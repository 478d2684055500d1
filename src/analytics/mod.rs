// Read-side analytics over the reservation ledger. Every call recomputes
// from current ledger state; no caching at expected data volumes.

use serde::Serialize;
use utoipa::ToSchema;

use crate::reservations::{
    ActiveUser, HotelBookings, HotelRevenue, MonthlyCount, MonthlyRevenue, ReservationError,
    ReservationsRepository,
};

const TOP_HOTELS_LIMIT: i64 = 5;
const ACTIVE_USERS_LIMIT: i64 = 10;

/// Time-series view of the ledger: bookings and revenue per calendar month
#[derive(Debug, Serialize, ToSchema)]
pub struct ReservationAnalytics {
    pub monthly_reservations: Vec<MonthlyCount>,
    pub monthly_revenue: Vec<MonthlyRevenue>,
}

/// Per-hotel view: most booked hotels and revenue ranking
#[derive(Debug, Serialize, ToSchema)]
pub struct HotelPerformance {
    pub top_hotels: Vec<HotelBookings>,
    pub hotel_revenue: Vec<HotelRevenue>,
}

/// Per-user view: most active users and the mean stay length
#[derive(Debug, Serialize, ToSchema)]
pub struct UserBookingPatterns {
    pub active_users: Vec<ActiveUser>,
    pub avg_stay_duration: f64,
}

/// The full report returned by the admin analytics endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct AnalyticsReport {
    pub reservation_analytics: ReservationAnalytics,
    pub hotel_performance: HotelPerformance,
    pub user_patterns: UserBookingPatterns,
}

/// Composes the repository aggregates into the analytics report sections
#[derive(Clone)]
pub struct AnalyticsEngine {
    reservations_repo: ReservationsRepository,
}

impl AnalyticsEngine {
    /// Create a new AnalyticsEngine
    pub fn new(reservations_repo: ReservationsRepository) -> Self {
        Self { reservations_repo }
    }

    /// Bookings and revenue grouped by calendar month of check-in
    pub async fn reservation_analytics(&self) -> Result<ReservationAnalytics, ReservationError> {
        let monthly_reservations = self.reservations_repo.monthly_counts().await?;
        let monthly_revenue = self.reservations_repo.monthly_revenue().await?;

        Ok(ReservationAnalytics {
            monthly_reservations,
            monthly_revenue,
        })
    }

    /// Top hotels by booking count plus the full revenue ranking
    pub async fn hotel_performance(&self) -> Result<HotelPerformance, ReservationError> {
        let top_hotels = self
            .reservations_repo
            .top_hotels_by_bookings(TOP_HOTELS_LIMIT)
            .await?;
        let hotel_revenue = self.reservations_repo.revenue_by_hotel().await?;

        Ok(HotelPerformance {
            top_hotels,
            hotel_revenue,
        })
    }

    /// Most active users and the average stay duration in days
    pub async fn user_booking_patterns(&self) -> Result<UserBookingPatterns, ReservationError> {
        let active_users = self
            .reservations_repo
            .most_active_users(ACTIVE_USERS_LIMIT)
            .await?;
        let avg_stay_duration = self.reservations_repo.average_stay_days().await?;

        Ok(UserBookingPatterns {
            active_users,
            avg_stay_duration,
        })
    }

    /// The full report: all three sections in one response
    pub async fn full_report(&self) -> Result<AnalyticsReport, ReservationError> {
        let reservation_analytics = self.reservation_analytics().await?;
        let hotel_performance = self.hotel_performance().await?;
        let user_patterns = self.user_booking_patterns().await?;

        Ok(AnalyticsReport {
            reservation_analytics,
            hotel_performance,
            user_patterns,
        })
    }
}
