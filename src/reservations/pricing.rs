use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::reservations::error::ReservationError;

/// Pure pricing policy for reservations: total = nights * nightly rate.
///
/// Check-in and check-out are calendar dates, so a night is exactly one day
/// of difference. Ranges where check-out is not strictly after check-in are
/// rejected rather than priced at zero or below.
pub struct PricingPolicy;

impl PricingPolicy {
    /// Number of nights in a validated date range
    ///
    /// # Arguments
    /// * `date_debut` - check-in date
    /// * `date_fin` - check-out date
    ///
    /// # Returns
    /// Whole nights, or a validation error when `date_fin <= date_debut`
    pub fn nights(date_debut: NaiveDate, date_fin: NaiveDate) -> Result<i64, ReservationError> {
        let nights = (date_fin - date_debut).num_days();
        if nights <= 0 {
            return Err(ReservationError::ValidationError(
                "Check-out date must be after check-in date".to_string(),
            ));
        }
        Ok(nights)
    }

    /// Total price for a stay
    ///
    /// # Arguments
    /// * `date_debut` - check-in date
    /// * `date_fin` - check-out date
    /// * `nightly_rate` - hotel price per night
    ///
    /// # Returns
    /// `nights * nightly_rate` as Decimal, or a validation error for an
    /// invalid range
    pub fn total(
        date_debut: NaiveDate,
        date_fin: NaiveDate,
        nightly_rate: Decimal,
    ) -> Result<Decimal, ReservationError> {
        let nights = Self::nights(date_debut, date_fin)?;
        Ok(Decimal::from(nights) * nightly_rate)
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn base_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
    }

    proptest! {
        /// total = nights * rate for every valid range
        #[test]
        fn prop_total_is_nights_times_rate(
            start_offset in 0i64..3650,
            nights in 1i64..365,
            rate_cents in 0u32..=100000u32
        ) {
            let date_debut = base_date() + chrono::Duration::days(start_offset);
            let date_fin = date_debut + chrono::Duration::days(nights);
            let rate = Decimal::from(rate_cents) / Decimal::from(100);

            let total = PricingPolicy::total(date_debut, date_fin, rate).unwrap();
            prop_assert_eq!(total, Decimal::from(nights) * rate);
        }

        /// Valid inputs always price non-negative
        #[test]
        fn prop_total_is_non_negative(
            nights in 1i64..365,
            rate_cents in 0u32..=100000u32
        ) {
            let date_debut = base_date();
            let date_fin = date_debut + chrono::Duration::days(nights);
            let rate = Decimal::from(rate_cents) / Decimal::from(100);

            let total = PricingPolicy::total(date_debut, date_fin, rate).unwrap();
            prop_assert!(total >= Decimal::ZERO);
        }

        /// Pricing is deterministic
        #[test]
        fn prop_total_is_deterministic(
            nights in 1i64..365,
            rate_cents in 1u32..=100000u32
        ) {
            let date_debut = base_date();
            let date_fin = date_debut + chrono::Duration::days(nights);
            let rate = Decimal::from(rate_cents) / Decimal::from(100);

            let first = PricingPolicy::total(date_debut, date_fin, rate).unwrap();
            let second = PricingPolicy::total(date_debut, date_fin, rate).unwrap();
            prop_assert_eq!(first, second);
        }

        /// Non-positive ranges are always rejected
        #[test]
        fn prop_non_positive_ranges_rejected(
            backwards in 0i64..365,
            rate_cents in 0u32..=100000u32
        ) {
            let date_debut = base_date();
            let date_fin = date_debut - chrono::Duration::days(backwards);
            let rate = Decimal::from(rate_cents) / Decimal::from(100);

            prop_assert!(PricingPolicy::total(date_debut, date_fin, rate).is_err());
        }
    }
}
