use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::reservations::error::ReservationError;
use crate::reservations::models::{
    ActiveUser, HotelBookings, HotelRevenue, MonthlyCount, MonthlyRevenue, Reservation,
    ReservationDetail,
};

const DETAIL_COLUMNS: &str = r#"
    r.id, r.user_id, r.hotel_id, r.date_debut, r.date_fin, r.prix_total, r.cree_le,
    h.nom AS hotel_nom, u.email AS user_email
"#;

/// Repository over the reservation ledger: CRUD plus the fixed set of
/// aggregate queries the analytics engine composes. No dynamic query
/// assembly; every statement is named and parameterized.
#[derive(Clone)]
pub struct ReservationsRepository {
    pool: PgPool,
}

impl ReservationsRepository {
    /// Create a new ReservationsRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a reservation; id and cree_le are assigned by the database
    pub async fn create(
        &self,
        user_id: i32,
        hotel_id: i32,
        date_debut: NaiveDate,
        date_fin: NaiveDate,
        prix_total: Decimal,
    ) -> Result<Reservation, ReservationError> {
        let reservation = sqlx::query_as::<_, Reservation>(
            r#"
            INSERT INTO reservations (user_id, hotel_id, date_debut, date_fin, prix_total)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, hotel_id, date_debut, date_fin, prix_total, cree_le
            "#,
        )
        .bind(user_id)
        .bind(hotel_id)
        .bind(date_debut)
        .bind(date_fin)
        .bind(prix_total)
        .fetch_one(&self.pool)
        .await?;

        Ok(reservation)
    }

    /// Find a reservation by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Reservation>, ReservationError> {
        let reservation = sqlx::query_as::<_, Reservation>(
            r#"
            SELECT id, user_id, hotel_id, date_debut, date_fin, prix_total, cree_le
            FROM reservations
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(reservation)
    }

    /// Find a reservation by ID, joined with user and hotel display data
    pub async fn find_detail_by_id(
        &self,
        id: i32,
    ) -> Result<Option<ReservationDetail>, ReservationError> {
        let detail = sqlx::query_as::<_, ReservationDetail>(&format!(
            r#"
            SELECT {DETAIL_COLUMNS}
            FROM reservations r
            JOIN hotels h ON h.id = r.hotel_id
            JOIN users u ON u.id = r.user_id
            WHERE r.id = $1
            "#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(detail)
    }

    /// Every reservation across all users, newest first
    pub async fn find_all_with_details(&self) -> Result<Vec<ReservationDetail>, ReservationError> {
        let details = sqlx::query_as::<_, ReservationDetail>(&format!(
            r#"
            SELECT {DETAIL_COLUMNS}
            FROM reservations r
            JOIN hotels h ON h.id = r.hotel_id
            JOIN users u ON u.id = r.user_id
            ORDER BY r.cree_le DESC
            "#
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(details)
    }

    /// Reservations owned by one user, newest first
    pub async fn find_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<ReservationDetail>, ReservationError> {
        let details = sqlx::query_as::<_, ReservationDetail>(&format!(
            r#"
            SELECT {DETAIL_COLUMNS}
            FROM reservations r
            JOIN hotels h ON h.id = r.hotel_id
            JOIN users u ON u.id = r.user_id
            WHERE r.user_id = $1
            ORDER BY r.cree_le DESC
            "#
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(details)
    }

    /// Overwrite the mutable fields of a reservation; user_id and cree_le
    /// never change
    pub async fn update(
        &self,
        id: i32,
        hotel_id: i32,
        date_debut: NaiveDate,
        date_fin: NaiveDate,
        prix_total: Decimal,
    ) -> Result<Reservation, ReservationError> {
        let reservation = sqlx::query_as::<_, Reservation>(
            r#"
            UPDATE reservations
            SET hotel_id = $1, date_debut = $2, date_fin = $3, prix_total = $4
            WHERE id = $5
            RETURNING id, user_id, hotel_id, date_debut, date_fin, prix_total, cree_le
            "#,
        )
        .bind(hotel_id)
        .bind(date_debut)
        .bind(date_fin)
        .bind(prix_total)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(ReservationError::NotFound)?;

        Ok(reservation)
    }

    /// Delete a reservation permanently; a second delete of the same id fails
    pub async fn delete(&self, id: i32) -> Result<(), ReservationError> {
        let result = sqlx::query("DELETE FROM reservations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ReservationError::NotFound);
        }

        Ok(())
    }

    /// Total number of reservations in the ledger
    pub async fn count(&self) -> Result<i64, ReservationError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reservations")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Bookings per calendar month of check-in (1-12), merged across years
    pub async fn monthly_counts(&self) -> Result<Vec<MonthlyCount>, ReservationError> {
        let rows = sqlx::query_as::<_, MonthlyCount>(
            r#"
            SELECT EXTRACT(MONTH FROM date_debut)::INT4 AS month, COUNT(*) AS count
            FROM reservations
            GROUP BY month
            ORDER BY month
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Revenue per calendar month of check-in (1-12), merged across years
    pub async fn monthly_revenue(&self) -> Result<Vec<MonthlyRevenue>, ReservationError> {
        let rows = sqlx::query_as::<_, MonthlyRevenue>(
            r#"
            SELECT EXTRACT(MONTH FROM date_debut)::INT4 AS month, SUM(prix_total) AS revenue
            FROM reservations
            GROUP BY month
            ORDER BY month
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Hotels ranked by booking count, descending, up to `limit`
    pub async fn top_hotels_by_bookings(
        &self,
        limit: i64,
    ) -> Result<Vec<HotelBookings>, ReservationError> {
        let rows = sqlx::query_as::<_, HotelBookings>(
            r#"
            SELECT h.nom AS hotel_name, COUNT(*) AS booking_count
            FROM reservations r
            JOIN hotels h ON h.id = r.hotel_id
            GROUP BY h.id, h.nom
            ORDER BY booking_count DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// All hotels ranked by accumulated revenue, descending
    pub async fn revenue_by_hotel(&self) -> Result<Vec<HotelRevenue>, ReservationError> {
        let rows = sqlx::query_as::<_, HotelRevenue>(
            r#"
            SELECT h.nom AS hotel_name, SUM(r.prix_total) AS total_revenue
            FROM reservations r
            JOIN hotels h ON h.id = r.hotel_id
            GROUP BY h.id, h.nom
            ORDER BY total_revenue DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Users ranked by booking count, descending, up to `limit`
    pub async fn most_active_users(
        &self,
        limit: i64,
    ) -> Result<Vec<ActiveUser>, ReservationError> {
        let rows = sqlx::query_as::<_, ActiveUser>(
            r#"
            SELECT u.email AS user_email, COUNT(*) AS booking_count
            FROM reservations r
            JOIN users u ON u.id = r.user_id
            GROUP BY u.id, u.email
            ORDER BY booking_count DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Mean stay length in days across the whole ledger; 0 when empty
    pub async fn average_stay_days(&self) -> Result<f64, ReservationError> {
        let avg: f64 = sqlx::query_scalar(
            "SELECT COALESCE(AVG(date_fin - date_debut)::FLOAT8, 0) FROM reservations",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(avg)
    }
}
