pub mod list_calendars;
pub mod list_events;
pub mod request_access;
