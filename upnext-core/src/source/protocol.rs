//! Defines the JSON protocol used for communication between the CLI and
//! source binaries over stdin/stdout.

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::event::{Calendar, Event};

/// A typed request: each params struct knows its command tag and its
/// response type, so callers get compile-time agreement between the two.
pub trait SourceCommand: Serialize {
    type Response: DeserializeOwned;
    fn command() -> Command;
}

/// Commands that sources must implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    RequestAccess,
    ListCalendars,
    ListEvents,
}

/// Request sent from the CLI to a source.
#[derive(Debug, Serialize, Deserialize)]
pub struct Request {
    pub command: Command,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// Response sent from a source to the CLI.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Response<T> {
    Success { data: T },
    Error { error: String },
}

impl<T: Serialize> Response<T> {
    pub fn success(data: T) -> String {
        serde_json::to_string(&Response::Success { data }).unwrap()
    }
}

impl Response<()> {
    pub fn error(msg: &str) -> String {
        serde_json::to_string(&Response::<()>::Error {
            error: msg.to_string(),
        })
        .unwrap()
    }
}

/// Ask the source to authorize calendar reads.
///
/// Sources backed by an OS permission system surface the user's answer
/// here; a denial is data, not a protocol error.
#[derive(Debug, Serialize, Deserialize)]
pub struct RequestAccess {}

/// The source's answer to [`RequestAccess`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessDecision {
    pub granted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl SourceCommand for RequestAccess {
    type Response = AccessDecision;
    fn command() -> Command {
        Command::RequestAccess
    }
}

/// List every calendar the source serves.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListCalendars {}

impl SourceCommand for ListCalendars {
    type Response = Vec<Calendar>;
    fn command() -> Command {
        Command::ListCalendars
    }
}

/// List events overlapping `[from, to]` in the named calendars.
///
/// `from`/`to` are RFC 3339. The source owns membership and overlap
/// filtering; recurring events arrive already expanded.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListEvents {
    pub from: String,
    pub to: String,
    pub calendars: Vec<String>,
}

impl SourceCommand for ListEvents {
    type Response = Vec<Event>;
    fn command() -> Command {
        Command::ListEvents
    }
}
