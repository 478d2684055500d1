use crate::directory::{HotelCatalog, UserDirectory};
use crate::reservations::{
    CreateReservationRequest, PricingPolicy, Reservation, ReservationDetail, ReservationError,
    ReservationsRepository, UpdateReservationRequest,
};

/// Ownership guard: only the creating user may mutate a reservation.
/// Admins do not bypass this.
pub fn ensure_owner(
    owner_id: i32,
    requester_id: i32,
    message: &str,
) -> Result<(), ReservationError> {
    if owner_id != requester_id {
        return Err(ReservationError::Forbidden(message.to_string()));
    }
    Ok(())
}

/// Service for reservation business logic: validates input, resolves the
/// external collaborators, enforces ownership, derives prices, and persists
/// through the injected repository.
#[derive(Clone)]
pub struct ReservationService {
    reservations_repo: ReservationsRepository,
    user_directory: UserDirectory,
    hotel_catalog: HotelCatalog,
}

impl ReservationService {
    /// Create a new ReservationService
    pub fn new(
        reservations_repo: ReservationsRepository,
        user_directory: UserDirectory,
        hotel_catalog: HotelCatalog,
    ) -> Self {
        Self {
            reservations_repo,
            user_directory,
            hotel_catalog,
        }
    }

    /// Create a reservation on behalf of the authenticated requester
    ///
    /// Resolves the hotel and the requester (defensive; the access layer has
    /// already authenticated them, but the row must exist), validates the
    /// date range, derives the total price, and persists.
    pub async fn create(
        &self,
        requester_id: i32,
        request: CreateReservationRequest,
    ) -> Result<Reservation, ReservationError> {
        let hotel = self
            .hotel_catalog
            .find_by_id(request.hotel_id)
            .await?
            .ok_or(ReservationError::HotelNotFound(request.hotel_id))?;

        if !self.user_directory.exists(requester_id).await? {
            return Err(ReservationError::UserNotFound(requester_id));
        }

        let prix_total =
            PricingPolicy::total(request.date_debut, request.date_fin, hotel.prix_par_nuit)?;

        let reservation = self
            .reservations_repo
            .create(
                requester_id,
                request.hotel_id,
                request.date_debut,
                request.date_fin,
                prix_total,
            )
            .await?;

        tracing::info!(
            "Created reservation {} for user {} at hotel {} ({} total)",
            reservation.id,
            requester_id,
            request.hotel_id,
            prix_total
        );
        Ok(reservation)
    }

    /// Every reservation across all users, newest first (admin surface)
    pub async fn find_all(&self) -> Result<Vec<ReservationDetail>, ReservationError> {
        self.reservations_repo.find_all_with_details().await
    }

    /// The requester's own reservations, newest first
    pub async fn find_user_reservations(
        &self,
        requester_id: i32,
    ) -> Result<Vec<ReservationDetail>, ReservationError> {
        self.reservations_repo.find_by_user(requester_id).await
    }

    /// Fetch one reservation by id, joined with display data.
    /// Reads carry no ownership check: any authenticated principal may
    /// fetch any reservation by id.
    pub async fn find_one(&self, id: i32) -> Result<ReservationDetail, ReservationError> {
        self.reservations_repo
            .find_detail_by_id(id)
            .await?
            .ok_or(ReservationError::NotFound)
    }

    /// Apply a patch to an owned reservation.
    ///
    /// The price is recomputed whenever the hotel or either date changes, so
    /// the stored total always matches the pricing policy over the stored
    /// fields. A patch that changes nothing leaves the row untouched.
    pub async fn update(
        &self,
        id: i32,
        requester_id: i32,
        patch: UpdateReservationRequest,
    ) -> Result<Reservation, ReservationError> {
        let current = self
            .reservations_repo
            .find_by_id(id)
            .await?
            .ok_or(ReservationError::NotFound)?;

        ensure_owner(
            current.user_id,
            requester_id,
            "You can only update your own reservations",
        )?;

        let hotel_id = patch.hotel_id.unwrap_or(current.hotel_id);
        let date_debut = patch.date_debut.unwrap_or(current.date_debut);
        let date_fin = patch.date_fin.unwrap_or(current.date_fin);

        let unchanged = hotel_id == current.hotel_id
            && date_debut == current.date_debut
            && date_fin == current.date_fin;
        if unchanged {
            return Ok(current);
        }

        let hotel = self
            .hotel_catalog
            .find_by_id(hotel_id)
            .await?
            .ok_or(ReservationError::HotelNotFound(hotel_id))?;

        let prix_total = PricingPolicy::total(date_debut, date_fin, hotel.prix_par_nuit)?;

        let updated = self
            .reservations_repo
            .update(id, hotel_id, date_debut, date_fin, prix_total)
            .await?;

        tracing::info!(
            "Updated reservation {} for user {} (new total {})",
            id,
            requester_id,
            prix_total
        );
        Ok(updated)
    }

    /// Permanently delete an owned reservation
    pub async fn remove(&self, id: i32, requester_id: i32) -> Result<(), ReservationError> {
        let current = self
            .reservations_repo
            .find_by_id(id)
            .await?
            .ok_or(ReservationError::NotFound)?;

        ensure_owner(
            current.user_id,
            requester_id,
            "You can only delete your own reservations",
        )?;

        self.reservations_repo.delete(id).await?;

        tracing::info!("Deleted reservation {} for user {}", id, requester_id);
        Ok(())
    }

    /// Total reservation count (admin surface)
    pub async fn count(&self) -> Result<i64, ReservationError> {
        self.reservations_repo.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_passes_guard() {
        assert!(ensure_owner(7, 7, "nope").is_ok());
    }

    #[test]
    fn test_non_owner_is_forbidden() {
        let result = ensure_owner(7, 8, "You can only update your own reservations");
        match result.unwrap_err() {
            ReservationError::Forbidden(msg) => {
                assert_eq!(msg, "You can only update your own reservations");
            }
            other => panic!("Expected Forbidden, got {:?}", other),
        }
    }
}
