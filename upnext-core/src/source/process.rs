//! Source subprocess client.
//!
//! Talks to external source binaries (e.g. `upnext-source-ics`) using JSON
//! over stdin/stdout. The protocol is language-agnostic: any executable
//! that speaks it can serve calendars.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tokio::io::AsyncWriteExt;
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;

use crate::error::{UpNextError, UpNextResult};
use crate::event::{Calendar, Event};
use crate::source::CalendarSource;
use crate::source::protocol::{
    AccessDecision, Command, ListCalendars, ListEvents, Request, RequestAccess, Response,
    SourceCommand,
};
use crate::window::Window;

const QUERY_TIMEOUT: Duration = Duration::from_secs(10);
/// Access requests may sit behind an interactive OS permission prompt.
const ACCESS_TIMEOUT: Duration = Duration::from_secs(300);

/// A calendar source reached by spawning its binary per request.
#[derive(Clone, Debug)]
pub struct SourceProcess(String);

impl SourceProcess {
    pub fn from_name(name: &str) -> Self {
        SourceProcess(name.to_string())
    }

    fn binary_path(&self) -> UpNextResult<std::path::PathBuf> {
        let binary_name = format!("upnext-source-{}", self.0);
        which::which(&binary_name)
            .map_err(|_| UpNextError::SourceNotInstalled(binary_name))
    }

    /// Call a typed source command under the given deadline.
    async fn call<C: SourceCommand>(&self, cmd: C, deadline: Duration) -> UpNextResult<C::Response> {
        timeout(deadline, self.call_raw(C::command(), cmd))
            .await
            .map_err(|_| UpNextError::SourceTimeout(deadline.as_secs()))?
    }

    /// Low-level call: send a command with params, collect the response line.
    async fn call_raw<P: Serialize, R: serde::de::DeserializeOwned>(
        &self,
        command: Command,
        params: P,
    ) -> UpNextResult<R> {
        let params = serde_json::to_value(params)
            .map_err(|e| UpNextError::Serialization(e.to_string()))?;
        let request = Request { command, params };
        let request_json = serde_json::to_string(&request)
            .map_err(|e| UpNextError::Serialization(e.to_string()))?;

        let binary_path = self.binary_path()?;

        let mut child = TokioCommand::new(&binary_path)
            .stdin(std::process::Stdio::piped())
            .stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::inherit())
            // A timeout drops this call mid-flight; the child goes with it.
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                UpNextError::Source(format!("Failed to spawn {}: {}", binary_path.display(), e))
            })?;

        // Write request to stdin (unwrap safe: we piped stdin above)
        let mut stdin = child.stdin.take().unwrap();
        stdin
            .write_all(format!("{request_json}\n").as_bytes())
            .await?;
        drop(stdin);

        let output = child.wait_with_output().await?;

        if !output.status.success() {
            return Err(UpNextError::Source(format!(
                "Source exited with status: {}",
                output.status.code().unwrap_or(-1)
            )));
        }

        let response_str = String::from_utf8_lossy(&output.stdout);
        if response_str.trim().is_empty() {
            return Err(UpNextError::Source("Source returned no response".into()));
        }

        let response: Response<R> = serde_json::from_str(response_str.trim())
            .map_err(|e| UpNextError::Source(format!("Failed to parse response: {e}")))?;

        match response {
            Response::Success { data } => Ok(data),
            Response::Error { error } => Err(UpNextError::Source(error)),
        }
    }
}

#[async_trait]
impl CalendarSource for SourceProcess {
    async fn request_access(&self) -> UpNextResult<AccessDecision> {
        self.call(RequestAccess {}, ACCESS_TIMEOUT).await
    }

    async fn list_calendars(&self) -> UpNextResult<Vec<Calendar>> {
        self.call(ListCalendars {}, QUERY_TIMEOUT).await
    }

    async fn query_events(
        &self,
        window: &Window,
        calendars: &[Calendar],
    ) -> UpNextResult<Vec<Event>> {
        self.call(
            ListEvents {
                from: window.start_rfc3339(),
                to: window.end_rfc3339(),
                calendars: calendars.iter().map(|c| c.name.clone()).collect(),
            },
            QUERY_TIMEOUT,
        )
        .await
    }
}
