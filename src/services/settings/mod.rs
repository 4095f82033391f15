// Settings service
// Loads and saves HeatmapSettings as TOML

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::HeatmapSettings;

const SETTINGS_FILE: &str = "heatmap.toml";

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service bound to the per-user config directory, falling back to the
    /// current directory when no home directory can be resolved.
    pub fn with_default_path() -> Self {
        Self::new(default_settings_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings; a missing file yields defaults
    pub fn get(&self) -> Result<HeatmapSettings> {
        if !self.path.exists() {
            log::info!(
                "No settings file at {}; using defaults",
                self.path.display()
            );
            return Ok(HeatmapSettings::default());
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read settings from {}", self.path.display()))?;
        let settings: HeatmapSettings = toml::from_str(&data)
            .with_context(|| format!("failed to parse settings from {}", self.path.display()))?;

        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {}: {}", self.path.display(), e))?;

        Ok(settings)
    }

    /// Save settings, creating parent directories as needed
    pub fn update(&self, settings: &HeatmapSettings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(settings).context("failed to serialize settings")?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed to write settings to {}", self.path.display()))?;
        Ok(())
    }
}

pub fn default_settings_path() -> PathBuf {
    if let Some(dirs) = ProjectDirs::from("com", "HeatmapCalendar", "heatmap-calendar") {
        dirs.config_dir().join(SETTINGS_FILE)
    } else {
        log::warn!("Unable to resolve project directory; using current dir for settings");
        PathBuf::from(SETTINGS_FILE)
    }
}
