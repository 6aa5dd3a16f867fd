//! Settings parser for .ptk/config.toml

use std::path::{Path, PathBuf};

use ptk_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const PTK_DIR: &str = ".ptk";

/// Path of the settings file for a project directory
pub fn settings_path(project_path: &Path) -> PathBuf {
    project_path.join(PTK_DIR).join(CONFIG_FILENAME)
}

/// Read `.ptk/config.toml`, failing if it is missing or malformed
pub fn read_settings(project_path: &Path) -> Result<Settings> {
    let config_path = settings_path(project_path);

    if !config_path.exists() {
        return Err(Error::ConfigNotFound { path: config_path });
    }

    let content = std::fs::read_to_string(&config_path)
        .map_err(|e| Error::config(format!("failed to read {}: {}", config_path.display(), e)))?;
    toml::from_str(&content)
        .map_err(|e| Error::config(format!("failed to parse {}: {}", config_path.display(), e)))
}

/// Load settings from `.ptk/config.toml`.
///
/// A missing file yields defaults; an unreadable or malformed file is logged
/// and also yields defaults.
pub fn load_settings(project_path: &Path) -> Settings {
    match read_settings(project_path) {
        Ok(settings) => {
            debug!("Loaded settings from {:?}", settings_path(project_path));
            settings
        }
        Err(Error::ConfigNotFound { path }) => {
            debug!("No config file at {:?}, using defaults", path);
            Settings::default()
        }
        Err(e) => {
            warn!("{}, using defaults", e);
            Settings::default()
        }
    }
}

/// Catalog file location; relative paths are resolved against the project
pub fn resolve_catalog_path(project_path: &Path, settings: &Settings) -> PathBuf {
    if settings.catalog.path.is_absolute() {
        settings.catalog.path.clone()
    } else {
        project_path.join(&settings.catalog.path)
    }
}
