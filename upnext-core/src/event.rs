//! Source-neutral calendar and event types.
//!
//! Sources convert whatever their backing store holds into these types;
//! the core reads them and never writes anything back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A calendar, identified by its display name.
///
/// The name is the matching key for allow-list resolution. Backing stores
/// do not guarantee uniqueness; two calendars with the same name are
/// indistinguishable here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calendar {
    pub name: String,
}

impl Calendar {
    pub fn new(name: impl Into<String>) -> Self {
        Calendar { name: name.into() }
    }
}

/// A calendar event, snapshotted for one queried window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Stays `None` for untitled events until formatting substitutes a
    /// placeholder.
    pub title: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Name of the calendar this event belongs to.
    pub calendar: String,
}
