//! upnext-source-ics - directory-backed calendar source for upnext
//!
//! This binary implements the upnext source protocol, communicating with
//! the CLI via JSON over stdin/stdout.
//!
//! The store is a plain directory tree: one subdirectory per calendar
//! (directory name = calendar name) with `.ics` files inside, rooted at
//! `$UPNEXT_ICS_DIR` (default `~/calendar`).

mod commands;
mod ics;
mod store;

use std::io::{self, BufRead, Write};

use upnext_core::source::protocol::{Command, Request, Response};

fn main() {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Failed to read stdin: {}", e);
                break;
            }
        };

        // Skip empty lines
        if line.trim().is_empty() {
            continue;
        }

        let request: Request = match serde_json::from_str(&line) {
            Ok(r) => r,
            Err(e) => {
                let response = Response::error(&format!("Failed to parse request: {}", e));
                writeln!(stdout, "{}", response).unwrap();
                stdout.flush().unwrap();
                continue;
            }
        };

        let response = handle_request(request);

        writeln!(stdout, "{}", response).unwrap();
        stdout.flush().unwrap();
    }
}

fn handle_request(request: Request) -> String {
    match request.command {
        Command::RequestAccess => commands::request_access::handle(),
        Command::ListCalendars => commands::list_calendars::handle(),
        Command::ListEvents => commands::list_events::handle(&request.params),
    }
}
