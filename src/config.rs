// src/config.rs
//! Persisted defaults for the command-line driver

use crate::error::{NmeaError, Result};
use crate::export::ExportFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteConfig {
    pub export_format: ExportFormat,
    pub include_elevation: bool,
    pub track_name: String,
    pub skip_zero_positions: bool,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            export_format: ExportFormat::Gpx,
            include_elevation: true,
            track_name: "NMEA route".to_string(),
            skip_zero_positions: false,
        }
    }
}

impl RouteConfig {
    /// Load configuration from the user's config file, falling back to
    /// defaults when there is none.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    /// Save configuration to the user's config file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)
            .map_err(|e| NmeaError::Other(format!("Failed to read config file: {}", e)))?;

        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| NmeaError::Other(format!("Failed to parse config file: {}", e)))?;

        Ok(config)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| NmeaError::Other(format!("Failed to create config directory: {}", e)))?;
        }

        let contents = serde_json::to_string_pretty(self)?;

        std::fs::write(config_path, contents)
            .map_err(|e| NmeaError::Other(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// `$HOME/.config/nmea-route/config.json` (`%USERPROFILE%` on Windows)
    pub fn get_config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| NmeaError::Other("HOME environment variable not set".to_string()))?;

        Ok(PathBuf::from(home).join(".config").join("nmea-route").join("config.json"))
    }

    pub fn update_format(&mut self, format: ExportFormat) {
        self.export_format = format;
    }

    pub fn update_track_name(&mut self, name: String) {
        self.track_name = name;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RouteConfig::default();
        assert_eq!(config.export_format, ExportFormat::Gpx);
        assert!(config.include_elevation);
        assert!(!config.skip_zero_positions);
    }

    #[test]
    fn test_updates() {
        let mut config = RouteConfig::default();
        config.update_format(ExportFormat::Csv);
        config.update_track_name("Morning run".to_string());
        assert_eq!(config.export_format, ExportFormat::Csv);
        assert_eq!(config.track_name, "Morning run");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: RouteConfig = serde_json::from_str(r#"{"export_format": "geojson"}"#).unwrap();
        assert_eq!(config.export_format, ExportFormat::GeoJson);
        assert_eq!(config.track_name, "NMEA route");
    }

    #[test]
    fn test_save_and_load() {
        let dir = std::env::temp_dir().join(format!("nmea-route-config-{}", std::process::id()));
        let path = dir.join("config.json");

        assert_eq!(RouteConfig::load_from(&path).unwrap(), RouteConfig::default());

        let mut config = RouteConfig::default();
        config.include_elevation = false;
        config.save_to(&path).unwrap();
        let loaded = RouteConfig::load_from(&path).unwrap();
        std::fs::remove_dir_all(&dir).ok();

        assert_eq!(loaded, config);
    }
}
