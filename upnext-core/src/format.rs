//! Single-line event rendering.

use std::fmt;

use chrono::TimeZone;

use crate::event::Event;

/// Placeholder for events with no title.
const NO_TITLE: &str = "(No Title)";

/// Render one event as `[yyyy-mm-dd ]HH:MM-HH:MM | title`.
///
/// Times are the event's start and end in `tz` on a 24-hour clock; the
/// date prefix, when enabled, is the start date. Everything is numeric and
/// therefore locale-independent, keeping output byte-stable across
/// environments.
pub fn line<Tz>(event: &Event, tz: &Tz, show_date: bool) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let start = event.start.with_timezone(tz);
    let end = event.end.with_timezone(tz);
    let title = normalize_title(event.title.as_deref());

    if show_date {
        format!(
            "{} {}-{} | {}",
            start.format("%Y-%m-%d"),
            start.format("%H:%M"),
            end.format("%H:%M"),
            title
        )
    } else {
        format!(
            "{}-{} | {}",
            start.format("%H:%M"),
            end.format("%H:%M"),
            title
        )
    }
}

/// Substitute the placeholder for missing titles and flatten the two
/// typographic characters calendar UIs like to insert: non-breaking space
/// (U+00A0) and en dash (U+2013). Everything else passes through.
fn normalize_title(title: Option<&str>) -> String {
    match title {
        Some(title) => title.replace('\u{00A0}', " ").replace('\u{2013}', "-"),
        None => NO_TITLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn event(title: Option<&str>) -> Event {
        Event {
            title: title.map(str::to_string),
            start: "2025-03-20T14:00:00Z".parse().unwrap(),
            end: "2025-03-20T15:30:00Z".parse().unwrap(),
            calendar: "Work".to_string(),
        }
    }

    #[test]
    fn renders_date_prefixed_line() {
        let line = line(&event(Some("Standup")), &Utc, true);
        assert_eq!(line, "2025-03-20 14:00-15:30 | Standup");
    }

    #[test]
    fn renders_time_only_line() {
        let line = line(&event(Some("Standup")), &Utc, false);
        assert_eq!(line, "14:00-15:30 | Standup");
    }

    #[test]
    fn converts_instants_into_the_given_timezone() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let line = line(&event(Some("Standup")), &tz, true);
        assert_eq!(line, "2025-03-20 16:00-17:30 | Standup");
    }

    #[test]
    fn missing_title_gets_placeholder() {
        let line = line(&event(None), &Utc, false);
        assert_eq!(line, "14:00-15:30 | (No Title)");
    }

    #[test]
    fn normalizes_nbsp_and_en_dash() {
        let line = line(
            &event(Some("Lunch\u{00A0}Meeting\u{2013}Review")),
            &Utc,
            false,
        );
        assert_eq!(line, "14:00-15:30 | Lunch Meeting-Review");
    }

    #[test]
    fn other_unicode_passes_through() {
        let line = line(&event(Some("Café ☕ — recap")), &Utc, false);
        assert_eq!(line, "14:00-15:30 | Café ☕ — recap");
    }
}
