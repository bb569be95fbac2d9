//! Run options from the user's config file.
//!
//! `~/.config/upnext/config.toml`, every key optional. Selection and
//! output-shape variants live here as toggles rather than as separate code
//! paths.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::Deserialize;

use crate::error::{UpNextError, UpNextResult};
use crate::select::SelectionPolicy;

static DEFAULT_SOURCE: &str = "ics";

fn default_true() -> bool {
    true
}

fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

/// Behavior toggles and source selection for one run.
#[derive(Debug, Clone, Deserialize)]
pub struct Options {
    /// Keep events already under way (end still ahead of now) rather than
    /// only events that have not started yet.
    #[serde(default = "default_true")]
    pub include_in_progress: bool,

    /// Echo the calendars a run will query as a diagnostic.
    #[serde(default = "default_true")]
    pub echo_selected_calendars: bool,

    /// Prefix each event line with its start date.
    #[serde(default = "default_true")]
    pub show_date_prefix: bool,

    /// Which `upnext-source-<name>` binary serves the calendars.
    #[serde(default = "default_source")]
    pub source: String,

    /// Allow-list location override. When unset, the CLI looks for
    /// `calendars.txt` beside the running executable.
    #[serde(default)]
    pub allow_list: Option<PathBuf>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            include_in_progress: true,
            echo_selected_calendars: true,
            show_date_prefix: true,
            source: default_source(),
            allow_list: None,
        }
    }
}

impl Options {
    /// Load options from the user config file, dropping a commented
    /// template there on first run so the knobs are discoverable.
    pub fn load() -> UpNextResult<Options> {
        let path = Options::config_path()?;

        if !path.exists() {
            Options::write_template(&path)?;
        }

        Options::from_file(&path)
    }

    /// Load options from a specific TOML file. A missing file yields the
    /// defaults; a present but invalid one is a configuration error.
    pub fn from_file(path: &Path) -> UpNextResult<Options> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .build()
            .map_err(|e| UpNextError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| UpNextError::Config(e.to_string()))
    }

    pub fn config_path() -> UpNextResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| UpNextError::Config("Could not determine config directory".into()))?
            .join("upnext");

        Ok(config_dir.join("config.toml"))
    }

    /// The selection policy these options describe.
    pub fn selection_policy(&self) -> SelectionPolicy {
        SelectionPolicy {
            include_in_progress: self.include_in_progress,
        }
    }

    /// The configured allow-list override with `~` expanded, if any.
    pub fn allow_list_override(&self) -> Option<PathBuf> {
        self.allow_list
            .as_ref()
            .map(|p| PathBuf::from(shellexpand::tilde(&p.to_string_lossy()).into_owned()))
    }

    /// Write a config file with all options commented out.
    fn write_template(path: &Path) -> UpNextResult<()> {
        let contents = format!(
            "\
# upnext configuration

# Keep events that are already under way (end still ahead of now):
# include_in_progress = true

# Echo the calendars a run will query (stderr):
# echo_selected_calendars = true

# Prefix each event line with its start date:
# show_date_prefix = true

# Which upnext-source-<name> binary serves your calendars:
# source = \"{DEFAULT_SOURCE}\"

# Where the calendar allow-list lives (default: calendars.txt next to
# the upnext executable):
# allow_list = \"~/.config/upnext/calendars.txt\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                UpNextError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| UpNextError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn missing_file_yields_defaults() {
        let options = Options::from_file(Path::new("/nonexistent/config.toml")).unwrap();

        assert!(options.include_in_progress);
        assert!(options.echo_selected_calendars);
        assert!(options.show_date_prefix);
        assert_eq!(options.source, "ics");
        assert!(options.allow_list.is_none());
    }

    #[test]
    fn partial_file_overrides_only_named_keys() {
        let mut file = NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(file, "include_in_progress = false").unwrap();
        writeln!(file, "source = \"caldav\"").unwrap();

        let options = Options::from_file(file.path()).unwrap();

        assert!(!options.include_in_progress);
        assert_eq!(options.source, "caldav");
        assert!(options.show_date_prefix);
        assert!(!options.selection_policy().include_in_progress);
    }

    #[test]
    fn allow_list_override_is_passed_through() {
        let mut file = NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(file, "allow_list = \"/etc/upnext/calendars.txt\"").unwrap();

        let options = Options::from_file(file.path()).unwrap();

        assert_eq!(
            options.allow_list_override(),
            Some(PathBuf::from("/etc/upnext/calendars.txt"))
        );
    }

    #[test]
    fn invalid_file_is_a_config_error() {
        let mut file = NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(file, "include_in_progress = \"sometimes\"").unwrap();

        let err = Options::from_file(file.path()).unwrap_err();
        assert!(matches!(err, UpNextError::Config(_)));
    }
}
