// Read-only access to the collaborator-owned user and hotel records.
// Account management and hotel CRUD belong to other services; the
// reservation subsystem only resolves ids through these lookups.

use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use crate::auth::models::Role;

/// User record as seen by this subsystem (credential hash never selected)
#[derive(Debug, Clone, FromRow)]
pub struct DirectoryUser {
    pub id: i32,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub role: Role,
}

/// Hotel record as seen by this subsystem
#[derive(Debug, Clone, FromRow)]
pub struct CatalogHotel {
    pub id: i32,
    pub nom: String,
    pub prix_par_nuit: Decimal,
}

/// Lookup interface over the users table
#[derive(Clone)]
pub struct UserDirectory {
    pool: PgPool,
}

impl UserDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<DirectoryUser>, sqlx::Error> {
        let user = sqlx::query_as::<_, DirectoryUser>(
            "SELECT id, nom, prenom, email, role FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Check whether a user with the given ID exists
    pub async fn exists(&self, id: i32) -> Result<bool, sqlx::Error> {
        let exists: Option<bool> =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists.unwrap_or(false))
    }
}

/// Lookup interface over the hotels table
#[derive(Clone)]
pub struct HotelCatalog {
    pool: PgPool,
}

impl HotelCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a hotel by ID, returning its display name and nightly rate
    pub async fn find_by_id(&self, id: i32) -> Result<Option<CatalogHotel>, sqlx::Error> {
        let hotel = sqlx::query_as::<_, CatalogHotel>(
            "SELECT id, nom, prix_par_nuit FROM hotels WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(hotel)
    }
}
