//! Terminal rendering. Event lines are the only thing written to stdout;
//! diagnostics, echoes and the spinner all go to stderr so the output stays
//! pipeable.

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use upnext_core::UpNextError;
use upnext_core::agenda::Report;
use upnext_core::allow_list::AllowListOutcome;
use upnext_core::options::Options;

pub fn spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["-", "\\", "|", "/"])
            .template("{msg} {spinner}")
            .unwrap(),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}

pub fn report(report: &Report, options: &Options) {
    match &report.allow_list {
        AllowListOutcome::Applied => {}
        AllowListOutcome::FileUnavailable(reason) => {
            eprintln!(
                "{}",
                format!("Allow-list not read ({reason}); using all calendars").yellow()
            );
        }
        AllowListOutcome::NoMatches => {
            eprintln!(
                "{}",
                "Allow-list matched no calendars; using all calendars".yellow()
            );
        }
    }

    if options.echo_selected_calendars {
        eprintln!("{} {}", "Calendars:".dimmed(), report.calendars.join(", "));
    }

    if report.lines.is_empty() {
        eprintln!("{}", "No upcoming events".dimmed());
        return;
    }

    for line in &report.lines {
        println!("{line}");
    }
}

pub fn failure(err: &UpNextError) {
    eprintln!("{}", err.to_string().red());
}
