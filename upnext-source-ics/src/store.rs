//! Store layout: a root directory whose immediate subdirectories are the
//! calendars.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const ROOT_ENV: &str = "UPNEXT_ICS_DIR";
const DEFAULT_ROOT: &str = "~/calendar";

/// The store root, `~` expanded. `$UPNEXT_ICS_DIR` overrides the default.
pub fn root() -> PathBuf {
    let raw = std::env::var(ROOT_ENV).unwrap_or_else(|_| DEFAULT_ROOT.to_string());
    PathBuf::from(shellexpand::tilde(&raw).into_owned())
}

/// Calendar names: the root's subdirectories, sorted by name.
pub fn calendar_names(root: &Path) -> Result<Vec<String>> {
    let entries = std::fs::read_dir(root)
        .with_context(|| format!("Failed to read {}", root.display()))?;

    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .filter_map(|path| path.file_name().map(|n| n.to_string_lossy().into_owned()))
        .collect();

    names.sort();
    Ok(names)
}

/// The `.ics` files directly inside one calendar directory, sorted so
/// event ordering is stable across runs.
pub fn ics_files(calendar_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(calendar_dir)
        .with_context(|| format!("Failed to read {}", calendar_dir.display()))?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|e| e == "ics"))
        .collect();

    files.sort();
    Ok(files)
}
