//! Config persistence and path resolution for `Config`.
//!
//! Covers:
//! - `load` / `load_or_create` / `load_from_path` (YAML file read, fail-soft document loading)
//! - `save` / `save_to_path` (atomic write via temp file + rename)
//! - path helpers (`config_path`, `config_dir`)
//! - in-memory conversion (`from_yaml_str`, `to_yaml_string`)

use super::config_struct::Config;
use crate::error::{ConfigError, Diagnostics};
use crate::{reader, writer};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR_NAME: &str = "contour";
const CONFIG_FILE_NAME: &str = "contour.yml";

impl Config {
    /// Load configuration from the default path, or create it.
    pub fn load() -> Result<(Self, Diagnostics)> {
        let config_path = Self::config_path();
        log::info!("Config path: {:?}", config_path);
        Self::load_or_create(&config_path)
    }

    /// Load configuration from `path`, writing the defaults there first if
    /// the file does not exist yet.
    ///
    /// On first run the user gets a documented file to edit.
    pub fn load_or_create(path: &Path) -> Result<(Self, Diagnostics)> {
        if path.exists() {
            return Self::load_from_path(path);
        }

        log::info!("Config file not found, creating default at {:?}", path);
        let config = Self::default();
        if let Err(e) = config.save_to_path(path) {
            log::error!("Failed to save default config: {}", e);
            return Err(e);
        }
        log::info!("Default config created successfully");
        Ok((config, Diagnostics::new()))
    }

    /// Load configuration from `path`.
    ///
    /// A missing file yields the default configuration. Only I/O failures
    /// are errors; problems inside the document become diagnostics.
    pub fn load_from_path(path: &Path) -> Result<(Self, Diagnostics)> {
        if !path.exists() {
            log::info!("Config file {:?} does not exist, using defaults", path);
            return Ok((Self::default(), Diagnostics::new()));
        }

        log::info!("Loading config from {:?}", path);
        let contents = fs::read_to_string(path)
            .map_err(ConfigError::from)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let (config, diagnostics) = Self::from_yaml_str(&contents);
        if !diagnostics.is_empty() {
            log::warn!(
                "Config {:?} loaded with {} problem(s)",
                path,
                diagnostics.len()
            );
        }
        Ok((config, diagnostics))
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to_path(&Self::config_path())
    }

    /// Save configuration to `path`.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(ConfigError::from)?;
        }

        let yaml = self.to_yaml_string();

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = path.with_extension("yml.tmp");
        fs::write(&temp_path, &yaml).map_err(ConfigError::from)?;
        fs::rename(&temp_path, path).map_err(ConfigError::from)?;

        log::debug!("Config saved to {:?}", path);
        Ok(())
    }

    /// Build a configuration from document text.
    pub fn from_yaml_str(document: &str) -> (Self, Diagnostics) {
        reader::load(document)
    }

    /// Render the canonical, documented document text.
    pub fn to_yaml_string(&self) -> String {
        writer::serialize(self)
    }

    /// Get the configuration file path (using XDG convention)
    pub fn config_path() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE_NAME)
    }

    /// Get the configuration directory path (using XDG convention)
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join(CONFIG_DIR_NAME)
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            // ~/.config/contour on every platform, including macOS
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join(CONFIG_DIR_NAME)
            } else {
                PathBuf::from(".")
            }
        }
    }
}
