pub mod analyze;
pub mod init;
pub mod scenario;
pub mod sources;

use crate::cli;
use crate::io::output::OutputFormat;
use crate::store::{JsonFileStore, MemoryStore, Preferences, PreferenceStore};

/// Resolve the output format: explicit flag first, then the saved
/// preference, then terminal.
pub(crate) fn resolve_format(
    flag: Option<cli::OutputFormat>,
    preferences: &Preferences,
) -> OutputFormat {
    if let Some(format) = flag {
        return format.into();
    }
    match preferences.default_format.as_deref() {
        Some("json") => OutputFormat::Json,
        Some("markdown") => OutputFormat::Markdown,
        _ => OutputFormat::Terminal,
    }
}

/// Open the user preference store, falling back to a volatile store when
/// no config directory is available.
pub(crate) fn open_preference_store() -> Box<dyn PreferenceStore> {
    match JsonFileStore::default_path() {
        Some(path) => Box::new(JsonFileStore::open(path)),
        None => {
            log::warn!("No user config directory; preferences will not persist");
            Box::new(MemoryStore::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_flag_wins_over_preference() {
        let preferences = Preferences {
            default_format: Some("json".to_string()),
            ..Preferences::default()
        };
        assert_eq!(
            resolve_format(Some(cli::OutputFormat::Markdown), &preferences),
            OutputFormat::Markdown
        );
    }

    #[test]
    fn preference_fills_in_when_no_flag() {
        let preferences = Preferences {
            default_format: Some("json".to_string()),
            ..Preferences::default()
        };
        assert_eq!(resolve_format(None, &preferences), OutputFormat::Json);
        assert_eq!(
            resolve_format(None, &Preferences::default()),
            OutputFormat::Terminal
        );
    }

    #[test]
    fn unknown_preference_degrades_to_terminal() {
        let preferences = Preferences {
            default_format: Some("postscript".to_string()),
            ..Preferences::default()
        };
        assert_eq!(resolve_format(None, &preferences), OutputFormat::Terminal);
    }
}
