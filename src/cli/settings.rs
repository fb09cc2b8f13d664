//! The `settings` subcommands: where settings are read from and what they are.
use crate::settings::{Settings, get_settings_file_path};
use anyhow::{Context, Result};
use clap::Subcommand;
use std::path::Path;

/// Subcommands for settings
#[derive(Subcommand)]
pub enum SettingsSubcommands {
    /// Print the path of the settings file and whether it exists
    Path,
    /// Print the settings a run would use, after defaults are filled in
    Show,
    /// Print a commented-out `settings.toml` with every default value
    DumpDefault,
}

impl SettingsSubcommands {
    /// Execute the supplied settings subcommand
    pub fn execute(self) -> Result<()> {
        let output = match self {
            Self::Path => describe_settings_path(&get_settings_file_path()),
            Self::Show => effective_settings(&Settings::load()?)?,
            Self::DumpDefault => Settings::default_file_contents()?,
        };
        print!("{output}");

        Ok(())
    }
}

/// The settings file path, noting when defaults are used because it is missing
fn describe_settings_path(file_path: &Path) -> String {
    if file_path.is_file() {
        format!("{}\n", file_path.display())
    } else {
        format!("{} (not found, using defaults)\n", file_path.display())
    }
}

/// `settings` as TOML
fn effective_settings(settings: &Settings) -> Result<String> {
    toml::to_string(settings).context("Could not convert settings to TOML")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_describe_settings_path() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("settings.toml");
        assert!(describe_settings_path(&file_path).ends_with("(not found, using defaults)\n"));

        fs::write(&file_path, "overwrite = true").unwrap();
        assert_eq!(
            describe_settings_path(&file_path),
            format!("{}\n", file_path.display())
        );
    }

    #[test]
    fn test_effective_settings() {
        let settings = Settings {
            room_details: true,
            ..Settings::default()
        };
        let shown = effective_settings(&settings).unwrap();
        assert_eq!(toml::from_str::<Settings>(&shown).unwrap(), settings);
        assert!(shown.contains("room_details = true"));
    }
}
