//! Configuration management module.
//!
//! This module handles loading and saving the application configuration:
//! where contact inquiries are delivered, how long the simulated delivery
//! takes, what a failed delivery does to the entered fields, and the theme.

mod error;

pub use error::ConfigError;

use crate::error::AppResult;
use crate::state::FailurePolicy;
use log::*;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/atelier-tui";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub submission_endpoint: Option<String>,
    pub submission_delay_ms: u64,
    pub failure_policy: FailurePolicy,
    pub theme_name: String,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct FileSpec {
    #[serde(default)]
    pub submission_endpoint: Option<String>,
    #[serde(default = "default_submission_delay_ms")]
    pub submission_delay_ms: u64,
    #[serde(default)]
    pub failure_policy: FailurePolicy,
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
}

fn default_submission_delay_ms() -> u64 {
    2000
}

fn default_theme_name() -> String {
    "atelier".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding the defaults.
    ///
    pub fn new() -> Config {
        Config {
            submission_endpoint: None,
            submission_delay_ms: default_submission_delay_ms(),
            failure_policy: FailurePolicy::default(),
            theme_name: default_theme_name(),
            file_path: None,
        }
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Load the configuration from the custom directory if provided, or the
    /// default one otherwise. A missing file leaves the defaults in place.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> AppResult<()> {
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        self.file_path = Some(dir_path.join(Path::new(FILE_NAME)));
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;

        if file_path.exists() {
            debug!("Loading configuration from {}...", file_path.display());
            let contents = fs::read_to_string(file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            if let Some(endpoint) = &data.submission_endpoint {
                if endpoint.trim().is_empty() {
                    return Err(ConfigError::InvalidValue {
                        key: "submission_endpoint",
                        message: "must not be blank, remove the key to simulate delivery"
                            .to_string(),
                    }
                    .into());
                }
            }
            self.submission_endpoint = data.submission_endpoint;
            self.submission_delay_ms = data.submission_delay_ms;
            self.failure_policy = data.failure_policy;
            self.theme_name = data.theme_name;
        } else {
            info!(
                "No configuration at {}, writing defaults.",
                file_path.display()
            );
            self.save()?;
        }

        Ok(())
    }

    /// Serialize the configuration and write it to the disk.
    ///
    pub fn save(&self) -> AppResult<()> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            submission_endpoint: self.submission_endpoint.clone(),
            submission_delay_ms: self.submission_delay_ms,
            failure_policy: self.failure_policy,
            theme_name: self.theme_name.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> AppResult<PathBuf> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(Path::new(DEFAULT_DIRECTORY_PATH))),
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}
