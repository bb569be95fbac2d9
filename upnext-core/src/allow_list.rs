//! Allow-list resolution: which calendars a run may query.
//!
//! The allow-list is plain text, one calendar name per line. Reading it can
//! fail for mundane reasons (no file next to the binary, permissions, bad
//! encoding) and none of them may abort a run: the worst case is always
//! "query every calendar".

use std::collections::HashSet;
use std::path::Path;

use crate::event::Calendar;

/// How the calendar set for a run was arrived at.
///
/// Informational only; the CLI renders it as a diagnostic. Anything other
/// than `Applied` means the full input set was kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowListOutcome {
    /// The allow-list was read and filtered the set.
    Applied,
    /// The file could not be read.
    FileUnavailable(String),
    /// The file named no calendar that actually exists (or named nothing).
    NoMatches,
}

/// The calendars a run will query, plus how they were chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub calendars: Vec<Calendar>,
    pub outcome: AllowListOutcome,
}

/// Filter `all` down to the calendars named in the file at `path`,
/// preserving the input ordering.
///
/// Names match case-sensitively after trimming surrounding whitespace;
/// blank lines are ignored. Falls back to `all` unchanged when the file is
/// unreadable or names nothing that exists.
pub fn resolve(path: &Path, all: Vec<Calendar>) -> Resolution {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            return Resolution {
                calendars: all,
                outcome: AllowListOutcome::FileUnavailable(e.to_string()),
            };
        }
    };

    let allowed: HashSet<&str> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let selected: Vec<Calendar> = all
        .iter()
        .filter(|cal| allowed.contains(cal.name.as_str()))
        .cloned()
        .collect();

    if selected.is_empty() {
        return Resolution {
            calendars: all,
            outcome: AllowListOutcome::NoMatches,
        };
    }

    Resolution {
        calendars: selected,
        outcome: AllowListOutcome::Applied,
    }
}
