mod print;

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Local;
use clap::Parser;
use upnext_core::UpNextError;
use upnext_core::UpNextResult;
use upnext_core::agenda::Agenda;
use upnext_core::options::Options;
use upnext_core::source::SourceProcess;

/// Read from the executable's directory unless the options file points
/// somewhere else.
const ALLOW_LIST_FILENAME: &str = "calendars.txt";

#[derive(Parser)]
#[command(name = "upnext")]
#[command(about = "Print your upcoming calendar events")]
struct Cli {
    /// Days to include, counting today ("2" means today and tomorrow).
    /// Anything that is not a positive whole number means 1.
    #[arg(allow_hyphen_values = true)]
    days: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(parse_days(cli.days.as_deref())).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print::failure(&e);
            exit_code(&e)
        }
    }
}

async fn run(days: u32) -> UpNextResult<()> {
    let options = Options::load()?;
    let allow_list = options.allow_list_override().or_else(beside_executable);

    let source = SourceProcess::from_name(&options.source);
    let agenda = Agenda::new(source, options.clone(), allow_list);

    let spinner = print::spinner("Fetching events".to_string());
    let report = agenda.run(days, Local::now()).await;
    spinner.finish_and_clear();

    print::report(&report?, &options);
    Ok(())
}

/// Absent, empty, non-numeric and non-positive day counts all collapse
/// to one day.
fn parse_days(arg: Option<&str>) -> u32 {
    arg.and_then(|raw| raw.trim().parse::<u32>().ok())
        .filter(|days| *days >= 1)
        .unwrap_or(1)
}

/// `calendars.txt` next to the running binary, or `None` when the binary's
/// own location cannot be resolved.
fn beside_executable() -> Option<PathBuf> {
    let exe = env::current_exe().ok()?;
    Some(exe.parent()?.join(ALLOW_LIST_FILENAME))
}

fn exit_code(err: &UpNextError) -> ExitCode {
    match err {
        UpNextError::DateComputation(_) => ExitCode::from(2),
        UpNextError::NoCalendars => ExitCode::from(3),
        UpNextError::Config(_)
        | UpNextError::AccessDenied { .. }
        | UpNextError::Source(_)
        | UpNextError::SourceNotInstalled(_)
        | UpNextError::SourceTimeout(_)
        | UpNextError::Io(_)
        | UpNextError::Serialization(_) => ExitCode::from(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_day_count_means_one() {
        assert_eq!(parse_days(None), 1);
    }

    #[test]
    fn numeric_day_counts_pass_through() {
        assert_eq!(parse_days(Some("2")), 2);
        assert_eq!(parse_days(Some(" 14 ")), 14);
    }

    #[test]
    fn unusable_day_counts_collapse_to_one() {
        for raw in ["0", "-3", "abc", "2.5", "", "   ", "99999999999999999999"] {
            assert_eq!(parse_days(Some(raw)), 1, "raw={raw:?}");
        }
    }
}
