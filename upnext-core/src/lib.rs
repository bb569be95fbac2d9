//! Core logic for the upnext agenda tool.
//!
//! This crate holds everything that decides *what* gets printed:
//! - `window` computes the query time range from a day count
//! - `allow_list` resolves which calendars a run may query
//! - `select` filters and orders the events a source returned
//! - `format` renders events as single-line records
//! - `agenda` sequences the above around one source round-trip
//! - `options` carries a run's configured policy: selection endpoint, output
//!   shape and which source serves it
//! - `source` defines the calendar source boundary: the [`source::CalendarSource`]
//!   trait, the JSON wire protocol, and the subprocess client for
//!   `upnext-source-<name>` binaries

pub mod agenda;
pub mod allow_list;
pub mod error;
pub mod event;
pub mod format;
pub mod options;
pub mod select;
pub mod source;
pub mod window;

pub use error::{UpNextError, UpNextResult};
pub use event::{Calendar, Event};
