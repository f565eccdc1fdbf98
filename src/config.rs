//! Application configuration.

use crate::environment::Environment;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

/// Environment variable that overrides the configured API URL.
pub const API_URL_ENV_VAR: &str = "FRAUDWATCH_API_URL";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the prediction service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Seconds between statistics-only refreshes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats_refresh_secs: Option<u64>,
}

impl Config {
    /// Create Config with the given API URL.
    pub fn new(api_url: Option<String>) -> Self {
        Config {
            api_url,
            stats_refresh_secs: None,
        }
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Loads the configuration if the file exists, falling back to defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self, std::io::Error> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Removes the configuration file. A missing file is not an error.
    pub fn clear(path: &Path) -> Result<(), std::io::Error> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// Resolves the environment: explicit flag, then the environment variable,
    /// then the config file, then the local default.
    pub fn resolve_environment(
        &self,
        flag: Option<&str>,
        env_var: Option<&str>,
    ) -> Result<Environment, String> {
        match flag
            .or(env_var)
            .or(self.api_url.as_deref())
            .filter(|s| !s.trim().is_empty())
        {
            Some(url) => url.parse(),
            None => Ok(Environment::default()),
        }
    }
}

/// Path of the configuration file, `~/.fraudwatch/config.json`.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home = home::home_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine the home directory",
        )
    })?;
    Ok(home.join(".fraudwatch").join("config.json"))
}
