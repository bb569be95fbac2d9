//! Orchestrates one agenda run around a single source round-trip.

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, TimeZone};

use crate::allow_list::{self, AllowListOutcome, Resolution};
use crate::error::{UpNextError, UpNextResult};
use crate::format;
use crate::options::Options;
use crate::select;
use crate::source::CalendarSource;
use crate::window::Window;

/// Everything a run produced: the event lines for stdout and the
/// informational context the CLI renders as diagnostics.
#[derive(Debug)]
pub struct Report {
    /// Names of the calendars that were queried, in query order.
    pub calendars: Vec<String>,
    /// How the calendar set was arrived at.
    pub allow_list: AllowListOutcome,
    /// One formatted line per selected event, chronologically ordered.
    pub lines: Vec<String>,
}

/// One agenda run over an injected calendar source.
pub struct Agenda<S> {
    source: S,
    options: Options,
    /// Resolved allow-list location; `None` when the CLI could not work out
    /// where the executable lives.
    allow_list: Option<PathBuf>,
}

impl<S: CalendarSource> Agenda<S> {
    pub fn new(source: S, options: Options, allow_list: Option<PathBuf>) -> Self {
        Agenda {
            source,
            options,
            allow_list,
        }
    }

    /// Run the agenda: authorize, resolve calendars, window, query, select,
    /// format.
    ///
    /// Consumes `self`: a run holds exactly one authorization cycle, and a
    /// spent `Agenda` cannot be restarted. A denied decision ends the run
    /// as [`UpNextError::AccessDenied`] before anything else happens; an
    /// empty query result is a report with no lines, not an error.
    pub async fn run<Tz>(self, days: u32, now: DateTime<Tz>) -> UpNextResult<Report>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let decision = self.source.request_access().await?;
        if !decision.granted {
            return Err(UpNextError::AccessDenied {
                reason: decision.reason,
            });
        }

        let all_calendars = self.source.list_calendars().await?;
        if all_calendars.is_empty() {
            return Err(UpNextError::NoCalendars);
        }

        let resolution = match &self.allow_list {
            Some(path) => allow_list::resolve(path, all_calendars),
            None => Resolution {
                calendars: all_calendars,
                outcome: AllowListOutcome::FileUnavailable(
                    "executable location could not be resolved".to_string(),
                ),
            },
        };

        let window = Window::ahead(days, now.clone())?;
        let events = self
            .source
            .query_events(&window, &resolution.calendars)
            .await?;
        let selected = select::select(events, &window, self.options.selection_policy());

        let tz = now.timezone();
        let lines = selected
            .iter()
            .map(|event| format::line(event, &tz, self.options.show_date_prefix))
            .collect();

        Ok(Report {
            calendars: resolution.calendars.into_iter().map(|c| c.name).collect(),
            allow_list: resolution.outcome,
            lines,
        })
    }
}
