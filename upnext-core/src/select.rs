//! Event selection: drop elapsed events, order the rest chronologically.

use crate::event::Event;
use crate::window::Window;

/// Which boundary instant keeps an event in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionPolicy {
    /// `true`: keep events whose end is still ahead, so meetings currently
    /// under way are shown. `false`: keep only events that have not started.
    pub include_in_progress: bool,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        SelectionPolicy {
            include_in_progress: true,
        }
    }
}

/// Keep the events still relevant at `window.start` and sort them by start
/// time, ascending.
///
/// The source already filtered by calendar membership and window overlap;
/// this adds the endpoint test (an event can overlap the window yet be
/// fully elapsed). The sort is stable, so events with equal start times
/// keep their input order.
pub fn select(events: Vec<Event>, window: &Window, policy: SelectionPolicy) -> Vec<Event> {
    let now = window.start;

    let mut kept: Vec<Event> = events
        .into_iter()
        .filter(|event| {
            if policy.include_in_progress {
                event.end > now
            } else {
                event.start > now
            }
        })
        .collect();

    kept.sort_by(|a, b| a.start.cmp(&b.start));
    kept
}
