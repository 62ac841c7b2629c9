use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppSettings {
    #[serde(default)]
    pub window: WindowSettings,
    #[serde(default)]
    pub general: GeneralSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSettings {
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
}

fn default_width() -> f32 {
    1100.0
}

fn default_height() -> f32 {
    760.0
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Start with the bundled sample programmes instead of an empty list.
    #[serde(default = "default_true")]
    pub seed_sample_shows: bool,
    /// How long a notice stays in the status bar.
    #[serde(default = "default_notice_seconds")]
    pub notice_seconds: f32,
}

fn default_true() -> bool {
    true
}

fn default_notice_seconds() -> f32 {
    4.0
}

/// Shortest notice lifetime honoured.
const MIN_NOTICE_SECONDS: f32 = 0.5;

impl GeneralSettings {
    /// Notice lifetime, at least half a second. Values too large for a
    /// `Duration` fall back to the default.
    pub fn notice_lifetime(&self) -> Duration {
        let seconds = self.notice_seconds.max(MIN_NOTICE_SECONDS);
        Duration::try_from_secs_f32(seconds).unwrap_or_else(|e| {
            log::warn!("Ignoring notice_seconds = {}: {}", self.notice_seconds, e);
            Duration::from_secs_f32(default_notice_seconds())
        })
    }
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            seed_sample_shows: true,
            notice_seconds: default_notice_seconds(),
        }
    }
}

/// Returns `~/.config/showdesk/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("showdesk").join("settings.toml")
}

/// Load settings from the default location.
pub fn load_settings() -> AppSettings {
    load_settings_from(&settings_path())
}

/// Load settings from `path`, returning defaults if missing or corrupt.
pub fn load_settings_from(path: &Path) -> AppSettings {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
            log::warn!("Failed to parse settings at {}: {}", path.display(), e);
            AppSettings::default()
        }),
        Err(_) => AppSettings::default(),
    }
}

/// Save settings to the default location.
pub fn save_settings(settings: &AppSettings) -> std::io::Result<()> {
    save_settings_to(settings, &settings_path())
}

/// Save settings atomically (write to temp, then rename).
pub fn save_settings_to(settings: &AppSettings, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(settings).map_err(std::io::Error::other)?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, contents)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings_from(&dir.path().join("nope.toml"));
        assert_eq!(settings, AppSettings::default());
        assert!(settings.general.seed_sample_shows);
    }

    #[test]
    fn corrupt_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[window\nwidth = ").unwrap();
        assert_eq!(load_settings_from(&path), AppSettings::default());
    }

    #[test]
    fn partial_file_fills_missing_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[general]\nseed_sample_shows = false\n").unwrap();
        let settings = load_settings_from(&path);
        assert!(!settings.general.seed_sample_shows);
        assert_eq!(settings.general.notice_seconds, 4.0);
        assert_eq!(settings.window, WindowSettings::default());
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");
        let mut settings = AppSettings::default();
        settings.window.width = 1280.0;
        settings.general.notice_seconds = 2.5;

        save_settings_to(&settings, &path).unwrap();
        assert!(!path.with_extension("toml.tmp").exists());
        assert_eq!(load_settings_from(&path), settings);
    }

    #[test]
    fn oversized_notice_seconds_uses_default_lifetime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        for value in ["1e20", "inf"] {
            std::fs::write(&path, format!("[general]\nnotice_seconds = {}\n", value)).unwrap();
            let settings = load_settings_from(&path);
            assert_eq!(
                settings.general.notice_lifetime(),
                Duration::from_secs(4),
                "notice_seconds = {}",
                value
            );
        }
    }

    #[test]
    fn notice_lifetime_has_a_floor() {
        let mut general = GeneralSettings::default();
        general.notice_seconds = 0.0;
        assert_eq!(general.notice_lifetime(), Duration::from_millis(500));
        general.notice_seconds = 2.5;
        assert_eq!(general.notice_lifetime(), Duration::from_millis(2500));
    }
}
