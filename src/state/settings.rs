//! Settings
//!
//! Persisted user settings: data source, default span, refresh cadence, locale.

use std::path::{Path, PathBuf};
use std::time::Duration;

use locale_config::Locale as SystemLocale;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::constants::{AUTO_REFRESH_SECS, DEFAULT_ENDPOINT, REQUEST_TIMEOUT_SECS};
use crate::domain::TimeSpan;
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use crate::i18n::Locale;

const SETTINGS_FILE: &str = "vind-gui.toml";

fn get_settings_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    let path = config_dir.join(SETTINGS_FILE);
    if !path.exists() {
        std::fs::write(&path, "")?;
    }
    Ok(path)
}

/// Persisted settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VindSettings {
    /// Wind data endpoint
    endpoint: String,
    /// Span selected at startup when no launch parameter overrides it
    default_time_span: TimeSpan,
    /// Periodic refresh interval in seconds (0 disables)
    auto_refresh_secs: u64,
    /// HTTP timeout in seconds
    request_timeout_secs: u64,
    /// UI language code
    locale: Option<String>,
}

impl Default for VindSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            default_time_span: TimeSpan::default(),
            auto_refresh_secs: AUTO_REFRESH_SECS,
            request_timeout_secs: REQUEST_TIMEOUT_SECS,
            locale: None,
        }
    }
}

impl VindSettings {
    /// Load settings from the config directory
    pub fn try_load() -> Result<Self> {
        let path = get_settings_path()?;
        Self::load_from(&path)
    }

    /// Load settings from a specific file; an empty file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        info!(path = ?path, "Loading settings file");
        let value = std::fs::read_to_string(path)?;

        let mut settings: Self = if value.trim().is_empty() {
            Self::default()
        } else {
            toml::from_str(&value).map_err(|e| {
                error!(error = %e, path = ?path, "Failed to parse settings file");
                e
            })?
        };

        // Detect system locale if not set
        if settings.locale.as_ref().is_none_or(|l| l.is_empty()) {
            settings.locale = Some(SystemLocale::current().to_string());
        }

        Ok(settings)
    }

    /// Save settings to the config directory
    pub fn save(&self) -> Result<()> {
        let path = get_settings_path()?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let value = toml::to_string(self)?;
        std::fs::write(path, value)?;
        Ok(())
    }

    // ==================== Getters ====================

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn default_time_span(&self) -> TimeSpan {
        self.default_time_span
    }

    /// `None` when periodic refresh is disabled
    pub fn auto_refresh(&self) -> Option<Duration> {
        (self.auto_refresh_secs > 0).then(|| Duration::from_secs(self.auto_refresh_secs))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    pub fn locale(&self) -> Locale {
        Locale::from_code(self.locale.as_deref().unwrap_or_default())
    }

    // ==================== Setters ====================

    pub fn set_default_time_span(&mut self, span: TimeSpan) {
        self.default_time_span = span;
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = Some(locale.code().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("vind-gui-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("temp dir");
        dir.join(name)
    }

    #[test]
    fn empty_file_yields_defaults() {
        let path = temp_file("empty.toml");
        std::fs::write(&path, "").expect("write");

        let settings = VindSettings::load_from(&path).expect("load");
        assert_eq!(settings.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(settings.default_time_span(), TimeSpan::TenMinutes);
        assert_eq!(settings.auto_refresh(), Some(Duration::from_secs(AUTO_REFRESH_SECS)));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let path = temp_file("partial.toml");
        std::fs::write(
            &path,
            "default_time_span = \"60\"\nauto_refresh_secs = 0\nlocale = \"en\"\n",
        )
        .expect("write");

        let settings = VindSettings::load_from(&path).expect("load");
        assert_eq!(settings.default_time_span(), TimeSpan::Hour);
        assert_eq!(settings.auto_refresh(), None);
        assert_eq!(settings.locale(), Locale::EnUS);
        assert_eq!(settings.request_timeout(), Duration::from_secs(REQUEST_TIMEOUT_SECS));
    }

    #[test]
    fn rejects_unknown_span() {
        let path = temp_file("bad-span.toml");
        std::fs::write(&path, "default_time_span = \"15\"\n").expect("write");
        assert!(VindSettings::load_from(&path).is_err());
    }

    #[test]
    fn save_then_load_keeps_changes() {
        let path = temp_file("saved.toml");
        let mut settings = VindSettings::default();
        settings.set_default_time_span(TimeSpan::Day);
        settings.set_locale(Locale::NbNO);
        settings.save_to(&path).expect("save");

        let loaded = VindSettings::load_from(&path).expect("load");
        assert_eq!(loaded, settings);
    }
}
