//! Eligibility window evaluation
//!
//! A user's most recent reading stays "current" for the duration of the
//! tier's window; no new reading is issued while one is current.
//!
//! - Premium: the window opens at the start of the current UTC calendar day,
//!   so a new reading becomes available at every midnight boundary.
//! - Free: a rolling 72 hours ending at `now`.

use chrono::{DateTime, Duration, NaiveTime, Utc};

use crate::domain::user::Tier;

/// Length of the free-tier rolling window
const FREE_WINDOW_HOURS: i64 = 72;

/// Lower bound of the eligibility window for `tier` at `now`.
///
/// A reading with `issued_at >= window_start` is still current; anything
/// older leaves the user eligible for a new one.
pub fn window_start(tier: Tier, now: DateTime<Utc>) -> DateTime<Utc> {
    match tier {
        Tier::Premium => now.date_naive().and_time(NaiveTime::MIN).and_utc(),
        Tier::Free => now - Duration::hours(FREE_WINDOW_HOURS),
    }
}

/// Whether a reading issued at `issued_at` is still current at `now`
pub fn is_current(tier: Tier, now: DateTime<Utc>, issued_at: DateTime<Utc>) -> bool {
    issued_at >= window_start(tier, now)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn test_premium_window_is_start_of_day() {
        let now = ts("2024-01-02T15:30:00Z");
        assert_eq!(window_start(Tier::Premium, now), ts("2024-01-02T00:00:00Z"));
    }

    #[test]
    fn test_premium_day_boundary() {
        // Issued just before midnight; two minutes later the day has
        // rolled over and the reading is no longer current.
        let issued = ts("2024-01-01T23:59:00Z");
        assert!(is_current(Tier::Premium, ts("2024-01-01T23:59:30Z"), issued));
        assert!(!is_current(Tier::Premium, ts("2024-01-02T00:01:00Z"), issued));
    }

    #[test]
    fn test_free_window_is_rolling_72h() {
        let now = ts("2024-03-10T12:00:00Z");
        assert_eq!(window_start(Tier::Free, now), ts("2024-03-07T12:00:00Z"));
    }

    #[test]
    fn test_free_reading_current_within_three_days() {
        let issued = ts("2024-03-01T09:00:00Z");

        // Two days later: still current.
        assert!(is_current(Tier::Free, ts("2024-03-03T09:00:00Z"), issued));
        // Four days later: eligible again.
        assert!(!is_current(Tier::Free, ts("2024-03-05T09:00:00Z"), issued));
    }

    #[test]
    fn test_free_window_exact_boundary() {
        let issued = ts("2024-03-01T09:00:00Z");
        // Exactly 72 hours later the reading sits on the window edge and
        // still counts as current.
        assert!(is_current(Tier::Free, ts("2024-03-04T09:00:00Z"), issued));
        assert!(!is_current(
            Tier::Free,
            ts("2024-03-04T09:00:01Z"),
            issued
        ));
    }

    #[test]
    fn test_premium_reading_same_day_is_current() {
        let issued = ts("2024-01-02T00:01:00Z");
        assert!(is_current(Tier::Premium, ts("2024-01-02T23:59:59Z"), issued));
    }
}
