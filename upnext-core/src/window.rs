//! Query window for upcoming events.

use chrono::{DateTime, Days, TimeZone, Utc};

use crate::error::{UpNextError, UpNextResult};

/// The `[start, end]` instant range events are queried against.
///
/// `start` is "now" at invocation; `end` is the last second of the day
/// `days - 1` days ahead, reckoned in the calendar the window was computed
/// with. Stored as UTC instants once computed.
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Window {
    /// Compute the window covering `days` days ahead of `now`, `1` meaning
    /// the rest of today.
    ///
    /// Day stepping is calendar arithmetic on `now`'s local date, so month
    /// and year rollovers follow the calendar rather than raw second
    /// counting. Callers enforce `days >= 1`; `0` is treated as `1`.
    pub fn ahead<Tz: TimeZone>(days: u32, now: DateTime<Tz>) -> UpNextResult<Window> {
        // Stepped on the date, not the instant: the target day may not
        // contain now's time-of-day at all (daylight-saving gaps), and only
        // the date is needed.
        let target_date = now
            .date_naive()
            .checked_add_days(Days::new(u64::from(days.saturating_sub(1))))
            .ok_or_else(|| {
                UpNextError::DateComputation(format!("{days} day(s) ahead is out of range"))
            })?;

        // 23:59:59 can be skipped or doubled by a timezone transition on the
        // target day; earliest() resolves the doubled case and leaves the
        // skipped one as a computation failure.
        let end = target_date
            .and_hms_opt(23, 59, 59)
            .unwrap()
            .and_local_timezone(now.timezone())
            .earliest()
            .ok_or_else(|| {
                UpNextError::DateComputation(format!("no valid 23:59:59 on {target_date}"))
            })?;

        Ok(Window {
            start: now.with_timezone(&Utc),
            end: end.with_timezone(&Utc),
        })
    }

    /// `start` as an RFC 3339 string for the wire.
    pub fn start_rfc3339(&self) -> String {
        self.start.to_rfc3339()
    }

    /// `end` as an RFC 3339 string for the wire.
    pub fn end_rfc3339(&self) -> String {
        self.end.to_rfc3339()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveTime, Timelike};

    fn tz() -> FixedOffset {
        FixedOffset::east_opt(2 * 3600).unwrap()
    }

    #[test]
    fn one_day_window_ends_today_at_2359() {
        let now = tz().with_ymd_and_hms(2025, 3, 20, 15, 30, 0).unwrap();
        let window = Window::ahead(1, now).unwrap();

        assert_eq!(window.start, now);

        let end = window.end.with_timezone(&tz());
        assert_eq!(end.date_naive(), now.date_naive());
        assert_eq!(end.time(), NaiveTime::from_hms_opt(23, 59, 59).unwrap());
    }

    #[test]
    fn local_day_wins_over_utc_day() {
        // 23:30 local on Mar 20 is already Mar 20 21:30 UTC; the window must
        // still close at the *local* end of Mar 20.
        let now = tz().with_ymd_and_hms(2025, 3, 20, 23, 30, 0).unwrap();
        let window = Window::ahead(1, now).unwrap();

        let end = window.end.with_timezone(&tz());
        assert_eq!(end.date_naive(), now.date_naive());
        assert!(window.end > window.start);
    }

    #[test]
    fn day_count_rolls_over_month_boundaries() {
        let now = tz().with_ymd_and_hms(2025, 1, 31, 9, 0, 0).unwrap();
        let window = Window::ahead(2, now).unwrap();

        let end = window.end.with_timezone(&tz());
        assert_eq!(end.date_naive().to_string(), "2025-02-01");
    }

    #[test]
    fn day_count_honours_leap_years() {
        let now = tz().with_ymd_and_hms(2024, 2, 28, 9, 0, 0).unwrap();
        let window = Window::ahead(2, now).unwrap();

        let end = window.end.with_timezone(&tz());
        assert_eq!(end.date_naive().to_string(), "2024-02-29");
    }

    #[test]
    fn end_is_monotonic_in_days() {
        let now = tz().with_ymd_and_hms(2025, 3, 20, 15, 30, 0).unwrap();

        let mut previous = Window::ahead(1, now).unwrap().end;
        for days in 2..=60 {
            let end = Window::ahead(days, now).unwrap().end;
            assert!(end >= previous, "end went backwards at days={days}");
            previous = end;
        }
    }

    #[test]
    fn day_stepping_survives_spring_forward_gaps() {
        use chrono_tz::America::New_York;

        // 02:30 does not exist on 2025-03-09 in New York; stepping onto that
        // day from an 02:30 start must not care.
        let now = New_York.with_ymd_and_hms(2025, 3, 8, 2, 30, 0).unwrap();

        let window = Window::ahead(2, now).unwrap();
        let end = window.end.with_timezone(&New_York);
        assert_eq!(end.date_naive().to_string(), "2025-03-09");
        assert_eq!(end.time(), NaiveTime::from_hms_opt(23, 59, 59).unwrap());

        let mut previous = Window::ahead(1, now).unwrap().end;
        for days in 2..=4 {
            let end = Window::ahead(days, now).unwrap().end;
            assert!(end >= previous, "end went backwards at days={days}");
            previous = end;
        }
    }

    #[test]
    fn day_stepping_survives_fall_back_repeats() {
        use chrono_tz::America::New_York;

        // 01:30 happens twice on 2025-11-02 in New York.
        let now = New_York.with_ymd_and_hms(2025, 11, 1, 1, 30, 0).unwrap();

        let window = Window::ahead(2, now).unwrap();
        let end = window.end.with_timezone(&New_York);
        assert_eq!(end.date_naive().to_string(), "2025-11-02");
        assert_eq!(end.time(), NaiveTime::from_hms_opt(23, 59, 59).unwrap());
    }

    #[test]
    fn zero_days_behaves_like_one() {
        let now = tz().with_ymd_and_hms(2025, 3, 20, 15, 30, 0).unwrap();

        assert_eq!(Window::ahead(0, now).unwrap(), Window::ahead(1, now).unwrap());
    }

    #[test]
    fn start_never_exceeds_end() {
        // Includes the last second of the day, where start == end.
        for (hour, minute, second) in [(0, 0, 0), (12, 30, 15), (23, 59, 59)] {
            let now = tz()
                .with_ymd_and_hms(2025, 6, 1, hour, minute, second)
                .unwrap();
            let window = Window::ahead(1, now).unwrap();
            assert!(window.start <= window.end, "violated at {hour}:{minute}:{second}");
        }
    }

    #[test]
    fn unrepresentable_target_day_reports_a_computation_error() {
        let now = tz().with_ymd_and_hms(2025, 3, 20, 15, 30, 0).unwrap();
        let err = Window::ahead(u32::MAX, now).unwrap_err();

        assert!(matches!(err, UpNextError::DateComputation(_)));
        assert!(err.to_string().starts_with("Failed to calculate end date"));
    }

    #[test]
    fn rfc3339_accessors_round_trip() {
        let now = tz().with_ymd_and_hms(2025, 3, 20, 15, 30, 0).unwrap();
        let window = Window::ahead(3, now).unwrap();

        let start: DateTime<Utc> = window.start_rfc3339().parse().unwrap();
        let end: DateTime<Utc> = window.end_rfc3339().parse().unwrap();
        assert_eq!(start, window.start);
        assert_eq!(end, window.end);
        assert_eq!(end.with_timezone(&tz()).second(), 59);
    }
}
