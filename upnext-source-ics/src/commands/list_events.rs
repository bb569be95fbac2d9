//! List events overlapping a time range from the requested calendars.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use upnext_core::Event;
use upnext_core::source::protocol::{ListEvents, Response};

use crate::ics;
use crate::store;

pub fn handle(params: &serde_json::Value) -> String {
    let params: ListEvents = match serde_json::from_value(params.clone()) {
        Ok(p) => p,
        Err(e) => return Response::error(&format!("Invalid params: {}", e)),
    };

    match collect_events(&params) {
        Ok(events) => Response::success(events),
        Err(e) => Response::error(&format!("{:#}", e)),
    }
}

fn collect_events(params: &ListEvents) -> Result<Vec<Event>> {
    let from = parse_instant(&params.from)?;
    let to = parse_instant(&params.to)?;
    let root = store::root();

    let mut events = Vec::new();
    for name in &params.calendars {
        // Names the store doesn't have contribute nothing.
        let dir = root.join(name);
        if !dir.is_dir() {
            continue;
        }

        for path in store::ics_files(&dir)? {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            if let Some(event) = ics::parse_event(&content, name) {
                if event_in_range(&event, &from, &to) {
                    events.push(event);
                }
            }
        }
    }

    Ok(events)
}

fn parse_instant(raw: &str) -> Result<DateTime<Utc>> {
    let dt = DateTime::parse_from_rfc3339(raw)
        .with_context(|| format!("Invalid timestamp: {}", raw))?;
    Ok(dt.with_timezone(&Utc))
}

/// An event overlaps `[from, to]` iff it starts before `to` and has not
/// ended before `from`.
fn event_in_range(event: &Event, from: &DateTime<Utc>, to: &DateTime<Utc>) -> bool {
    event.start < *to && event.end >= *from
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn event(start: &str, end: &str) -> Event {
        Event {
            title: Some("Planning".to_string()),
            start: start.parse().unwrap(),
            end: end.parse().unwrap(),
            calendar: "Work".to_string(),
        }
    }

    #[test]
    fn overlap_keeps_spanning_and_contained_events() {
        let from = Utc.with_ymd_and_hms(2025, 3, 20, 8, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2025, 3, 20, 23, 59, 59).unwrap();

        let contained = event("2025-03-20T14:00:00Z", "2025-03-20T15:00:00Z");
        let spanning = event("2025-03-19T23:00:00Z", "2025-03-21T01:00:00Z");
        assert!(event_in_range(&contained, &from, &to));
        assert!(event_in_range(&spanning, &from, &to));
    }

    #[test]
    fn overlap_drops_past_and_future_events() {
        let from = Utc.with_ymd_and_hms(2025, 3, 20, 8, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2025, 3, 20, 23, 59, 59).unwrap();

        let finished = event("2025-03-20T06:00:00Z", "2025-03-20T07:00:00Z");
        let later = event("2025-03-21T09:00:00Z", "2025-03-21T10:00:00Z");
        assert!(!event_in_range(&finished, &from, &to));
        assert!(!event_in_range(&later, &from, &to));
    }

    #[test]
    fn instants_parse_from_rfc3339_only() {
        assert!(parse_instant("2025-03-20T08:00:00+01:00").is_ok());
        assert!(parse_instant("2025-03-20").is_err());
    }
}
