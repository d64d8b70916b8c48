//! Storage location management.
//!
//! Resolves the default on-disk location of the JSON data file following the
//! XDG base directory convention: `$XDG_DATA_HOME/bientrack/biens.json`,
//! falling back to `~/.local/share/bientrack/biens.json`.

use std::path::PathBuf;

/// Returns the data directory for bientrack storage.
///
/// Honors `$XDG_DATA_HOME` when set and non-empty; otherwise uses
/// `$HOME/.local/share`. A missing `HOME` falls back to the current
/// directory, which keeps tests and containers working.
#[must_use]
pub fn data_dir() -> PathBuf {
    let base = std::env::var("XDG_DATA_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            std::env::var("HOME")
                .ok()
                .filter(|v| !v.is_empty())
                .map_or_else(|| PathBuf::from("."), |home| {
                    PathBuf::from(home).join(".local/share")
                })
        });

    base.join("bientrack")
}

/// Returns the default path of the JSON data file.
#[must_use]
pub fn default_data_file() -> PathBuf {
    data_dir().join("biens.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_file_lives_under_the_data_dir() {
        let file = default_data_file();
        assert!(file.starts_with(data_dir()));
        assert_eq!(file.file_name().unwrap(), "biens.json");
    }
}
