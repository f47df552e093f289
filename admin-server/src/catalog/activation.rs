//! Activation window: whether a flyer is live right now
//!
//! Derived on every read, never stored on the flyer.

use shared::models::{Flyer, Status};

/// `now ∈ [start, end]` (both inclusive) and the status is enabled
pub fn is_within_window(start: i64, end: i64, status: Status, now: i64) -> bool {
    status.is_enabled() && now >= start && now <= end
}

/// Whether `flyer` is live at `now`
pub fn is_active(flyer: &Flyer, now: i64) -> bool {
    is_within_window(flyer.start_date, flyer.end_date, flyer.status, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> i64 {
        shared::util::date_to_millis(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn flyer(status: Status) -> Flyer {
        Flyer {
            id: "flyer-1".into(),
            name: "Back to school".into(),
            image: None,
            price: 10.0,
            discount_percentage: 0.0,
            final_price: 10.0,
            collection_id: "col-1".into(),
            store_id: "store-1".into(),
            start_date: day(2024, 8, 10),
            end_date: day(2024, 8, 24),
            status,
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn test_active_inside_window() {
        assert!(is_active(&flyer(Status::Enable), day(2024, 8, 15)));
    }

    #[test]
    fn test_inactive_outside_window() {
        let f = flyer(Status::Enable);
        assert!(!is_active(&f, day(2024, 8, 25)));
        assert!(!is_active(&f, day(2024, 8, 9)));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let f = flyer(Status::Enable);
        assert!(is_active(&f, f.start_date));
        assert!(is_active(&f, f.end_date));
        assert!(!is_active(&f, f.end_date + 1));
    }

    #[test]
    fn test_disabled_never_active() {
        let f = flyer(Status::Disable);
        for d in 8..=26 {
            assert!(!is_active(&f, day(2024, 8, d)));
        }
    }
}
