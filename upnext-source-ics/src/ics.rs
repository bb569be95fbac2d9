//! Minimal VEVENT extraction using the icalendar crate's parser.
//!
//! Only the fields the agenda needs survive: title, start, end. Recurring
//! events are expected to arrive as already-expanded instances (one VEVENT
//! per file); rule expansion is out of scope here.

use chrono::{DateTime, NaiveDateTime, NaiveTime, Utc};
use icalendar::{
    CalendarDateTime, DatePerhapsTime,
    parser::{read_calendar, unfold},
};
use upnext_core::Event;

/// Parse the first VEVENT in `content` into an event snapshot for
/// `calendar`. Returns `None` when there is no usable VEVENT; cancelled
/// events count as unusable.
pub fn parse_event(content: &str, calendar: &str) -> Option<Event> {
    let unfolded = unfold(content);
    let parsed = read_calendar(&unfolded).ok()?;
    let vevent = parsed.components.iter().find(|c| c.name == "VEVENT")?;

    if vevent
        .find_prop("STATUS")
        .is_some_and(|p| p.val.as_ref() == "CANCELLED")
    {
        return None;
    }

    let title = vevent.find_prop("SUMMARY").map(|p| p.val.to_string());

    let start = to_utc(
        DatePerhapsTime::try_from(vevent.find_prop("DTSTART")?).ok()?,
        NaiveTime::MIN,
    );
    // DTEND is optional in the wild; fall back to the start instant.
    let day_end = NaiveTime::from_hms_opt(23, 59, 59).unwrap();
    let end = match vevent.find_prop("DTEND") {
        Some(prop) => to_utc(DatePerhapsTime::try_from(prop).ok()?, day_end),
        None => start,
    };

    Some(Event {
        title,
        start,
        end,
        calendar: calendar.to_string(),
    })
}

/// Collapse the ICS date/time forms into a UTC instant. Whole-day values
/// take `all_day_time` on their date; floating times are read as UTC.
fn to_utc(dpt: DatePerhapsTime, all_day_time: NaiveTime) -> DateTime<Utc> {
    match dpt {
        DatePerhapsTime::Date(date) => date.and_time(all_day_time).and_utc(),
        DatePerhapsTime::DateTime(dt) => match dt {
            CalendarDateTime::Utc(dt) => dt,
            CalendarDateTime::Floating(naive) => naive.and_utc(),
            CalendarDateTime::WithTimezone { date_time, tzid } => zoned_to_utc(date_time, &tzid),
        },
    }
}

/// Resolve a TZID through the tz database. Unknown ids and local times the
/// zone skips fall back to the floating reading.
fn zoned_to_utc(naive: NaiveDateTime, tzid: &str) -> DateTime<Utc> {
    match tzid.parse::<chrono_tz::Tz>() {
        Ok(tz) => naive
            .and_local_timezone(tz)
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|| naive.and_utc()),
        Err(_) => naive.and_utc(),
    }
}
