//! The calendar source boundary.
//!
//! A source is whatever actually owns calendar data. [`SourceProcess`]
//! reaches one by spawning an `upnext-source-<name>` binary and speaking
//! the [`protocol`] over its stdin/stdout; tests inject in-process
//! implementations instead. The orchestrator only ever sees the trait.

pub mod process;
pub mod protocol;

use async_trait::async_trait;

pub use process::SourceProcess;
pub use protocol::AccessDecision;

use crate::error::UpNextResult;
use crate::event::{Calendar, Event};
use crate::window::Window;

/// The external collaborator: authorization, enumeration, querying.
#[async_trait]
pub trait CalendarSource {
    /// The single authorization round-trip of a run. A denial is a normal
    /// answer carried in the decision; only transport failures are errors.
    async fn request_access(&self) -> UpNextResult<AccessDecision>;

    /// Every calendar the source serves, in the source's own order.
    async fn list_calendars(&self) -> UpNextResult<Vec<Calendar>>;

    /// Events overlapping `window` in the given calendars, recurring
    /// instances already expanded. An empty result is "no events".
    async fn query_events(
        &self,
        window: &Window,
        calendars: &[Calendar],
    ) -> UpNextResult<Vec<Event>>;
}
