//! Configuration File Loading
//!
//! Finds and parses a configuration file from a list of search locations.
//! TOML and JSON are supported; the first file found wins. The loader never
//! writes files.

use super::Config;
use crate::error::{Error, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit configuration file
pub const CONFIG_ENV_VAR: &str = "DEVTOOLBOX_CONFIG";

/// Configuration file loader
pub struct ConfigLoader {
    /// Search paths for configuration files, without extension
    search_paths: Vec<PathBuf>,
    /// Supported configuration file formats, in preference order
    supported_formats: Vec<ConfigFormat>,
    /// Path of the file that was loaded, if any
    current_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigFormat {
    /// TOML format
    Toml,
    /// JSON format
    Json,
}

impl ConfigFormat {
    fn extension(self) -> &'static str {
        match self {
            ConfigFormat::Toml => "toml",
            ConfigFormat::Json => "json",
        }
    }

    /// Guess the format of a file from its extension. Defaults to TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => ConfigFormat::Json,
            _ => ConfigFormat::Toml,
        }
    }
}

impl ConfigLoader {
    /// Create a loader over the default search paths
    pub fn new() -> Self {
        Self {
            search_paths: Self::get_search_paths(),
            supported_formats: vec![ConfigFormat::Toml, ConfigFormat::Json],
            current_path: None,
        }
    }

    /// Load configuration.
    ///
    /// An explicit path (argument, then `DEVTOOLBOX_CONFIG`) must exist and
    /// parse. Otherwise the search paths are tried and defaults are used
    /// when nothing is found.
    pub fn load(explicit: Option<&Path>) -> Result<(Config, Option<PathBuf>)> {
        let mut loader = Self::new();

        let explicit = explicit
            .map(Path::to_path_buf)
            .or_else(|| env::var(CONFIG_ENV_VAR).ok().map(PathBuf::from));

        let config = match explicit {
            Some(path) => {
                let config = Self::load_file(&path)?;
                loader.current_path = Some(path);
                config
            }
            None => match loader.find_and_load_config() {
                Some((path, config)) => {
                    loader.current_path = Some(path);
                    config
                }
                None => Config::default(),
            },
        };

        config.validate()?;
        Ok((config, loader.current_path))
    }

    /// Load and parse one configuration file
    pub fn load_file(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| Error::ConfigLoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::parse(&content, ConfigFormat::from_path(path))
    }

    /// Parse configuration text
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Config> {
        match format {
            ConfigFormat::Toml => toml::from_str(content).map_err(|e| Error::ConfigParseFailed {
                format: "TOML".to_string(),
                reason: e.to_string(),
            }),
            ConfigFormat::Json => {
                serde_json::from_str(content).map_err(|e| Error::ConfigParseFailed {
                    format: "JSON".to_string(),
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Find and load configuration from search paths
    fn find_and_load_config(&self) -> Option<(PathBuf, Config)> {
        for path in &self.search_paths {
            for format in &self.supported_formats {
                let config_path = path.with_extension(format.extension());
                if !config_path.exists() {
                    continue;
                }

                match Self::load_file(&config_path) {
                    Ok(config) => return Some((config_path, config)),
                    Err(e) => {
                        // Keep searching; a broken file must not block start-up.
                        warn!("Skipping config {}: {}", config_path.display(), e);
                    }
                }
            }
        }
        None
    }

    /// Default search paths for configuration files
    fn get_search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("devtoolbox").join("config"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".devtoolbox").join("config"));
        }

        paths
    }

    /// Path of the loaded file, if any
    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    /// Current search paths
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Replace the search paths
    pub fn set_search_paths(&mut self, paths: Vec<PathBuf>) {
        self.search_paths = paths;
    }

    /// Search only the configured paths, without the explicit/env lookup
    pub fn discover(&mut self) -> Option<Config> {
        let (path, config) = self.find_and_load_config()?;
        self.current_path = Some(path);
        Some(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
