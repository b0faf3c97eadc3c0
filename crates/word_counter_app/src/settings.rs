use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use counter_logging::counter_info;
use serde::{Deserialize, Serialize};
use word_counter_core::{SeparatorSet, DEFAULT_SEPARATORS};
use word_counter_engine::{ReportDir, ReportFormat, ReportOptions};

use crate::logging::LogDestination;

pub(crate) const SETTINGS_FILENAME: &str = "word_counter.ron";

/// User-tunable settings, stored as RON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    /// Every character of this string splits words.
    pub separators: String,
    pub format: String,
    pub output_filename: Option<String>,
    pub log_destination: LogDestination,
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            separators: DEFAULT_SEPARATORS.iter().collect(),
            format: ReportFormat::default().to_string(),
            output_filename: None,
            log_destination: LogDestination::default(),
            verbose: false,
        }
    }
}

impl Settings {
    /// Turns the stored strings into typed report options.
    pub fn report_options(&self) -> Result<ReportOptions> {
        let separators: SeparatorSet = self
            .separators
            .parse()
            .context("invalid `separators` setting")?;
        let format: ReportFormat = self.format.parse().context("invalid `format` setting")?;
        Ok(ReportOptions {
            separators,
            format,
            output_filename: self.output_filename.clone(),
            ..ReportOptions::default()
        })
    }
}

/// Outcome of reading the settings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LoadedSettings {
    pub settings: Settings,
    /// Set when a settings file existed but could not be used.
    pub problem: Option<String>,
    /// Set when the settings came from the file.
    pub source: Option<PathBuf>,
}

/// Loads settings from `path`, falling back to defaults when the file is
/// missing, unreadable or malformed.
///
/// Nothing is logged here: this runs before the logger is configured, so the
/// caller reports `problem` once logging is up.
pub(crate) fn load_settings(path: &Path) -> LoadedSettings {
    let fallback = |problem: Option<String>| LoadedSettings {
        settings: Settings::default(),
        problem,
        source: None,
    };

    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return fallback(None),
        Err(err) => {
            return fallback(Some(format!(
                "Failed to read settings from {}: {}; using defaults",
                path.display(),
                err
            )))
        }
    };

    match ron::from_str(&content) {
        Ok(settings) => LoadedSettings {
            settings,
            problem: None,
            source: Some(path.to_path_buf()),
        },
        Err(err) => fallback(Some(format!(
            "Failed to parse settings from {}: {}; using defaults",
            path.display(),
            err
        ))),
    }
}

pub(crate) fn save_settings(path: &Path, settings: &Settings) -> Result<PathBuf> {
    let pretty = ron::ser::PrettyConfig::new();
    let content =
        ron::ser::to_string_pretty(settings, pretty).context("failed to serialize settings")?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(SETTINGS_FILENAME);
    let written = ReportDir::prepare(dir)
        .and_then(|dir| dir.write(filename, &content))
        .with_context(|| format!("failed to write settings to {}", path.display()))?;
    counter_info!("Saved settings to {:?}", written);
    Ok(written)
}
