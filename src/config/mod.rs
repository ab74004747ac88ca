// envsource: environment-variable aggregation for CI build hosts
//
// SPDX-FileCopyrightText: 2026 envsource contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Host settings.
//!
//! ```text
//! [host]                      [log]
//! root_url = "http://ci/"     console_level = 3
//! home = "/var/lib/ci"        file_level = 5
//!                             file = "envsource.log"
//! ```
//!
//! A configured root URL is normalized to end with `/`; the URL
//! concatenation for `BUILD_URL`/`JOB_URL` depends on it.

mod loader;

pub use loader::SettingsLoader;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::logging::LogLevel;

/// Host-level settings consumed by the aggregation core.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostSettings {
    /// Host identity section.
    pub host: HostSection,
    /// Logging section.
    pub log: LogSection,
}

/// The `[host]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostSection {
    /// Externally visible root URL of the host; may be unset.
    pub root_url: Option<String>,
    /// Home directory of the host installation.
    pub home: PathBuf,
}

/// The `[log]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogSection {
    /// Console log level (0-5).
    pub console_level: LogLevel,
    /// File log level (0-5).
    pub file_level: LogLevel,
    /// Optional log file path.
    pub file: Option<String>,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            console_level: LogLevel::INFO,
            file_level: LogLevel::TRACE,
            file: None,
        }
    }
}

impl HostSettings {
    /// Creates settings programmatically with the given home directory.
    #[must_use]
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self {
            host: HostSection {
                root_url: None,
                home: home.into(),
            },
            log: LogSection::default(),
        }
    }

    /// Sets the root URL, normalizing it to end with `/`.
    #[must_use]
    pub fn with_root_url(mut self, url: impl Into<String>) -> Self {
        self.host.root_url = Some(normalize_root_url(&url.into()));
        self
    }

    /// Parses settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error on invalid TOML or failed validation.
    pub fn parse(toml: &str) -> Result<Self> {
        Self::builder().add_toml_str(toml).build()
    }

    /// Returns a layered settings loader.
    #[must_use]
    pub fn builder() -> SettingsLoader {
        SettingsLoader::new()
    }

    /// The configured root URL, guaranteed to end with `/` when present.
    #[must_use]
    pub fn root_url(&self) -> Option<&str> {
        self.host.root_url.as_deref()
    }

    #[must_use]
    pub fn home(&self) -> &Path {
        &self.host.home
    }

    #[must_use]
    pub const fn log(&self) -> &LogSection {
        &self.log
    }

    /// Normalizes and validates loaded settings.
    pub(crate) fn resolve_and_validate(&mut self) -> std::result::Result<(), ConfigError> {
        if let Some(url) = &self.host.root_url {
            if url.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    section: "host".to_string(),
                    key: "root_url".to_string(),
                    message: "must not be empty when set".to_string(),
                });
            }
            self.host.root_url = Some(normalize_root_url(url));
        }

        if self.host.home.as_os_str().is_empty() {
            return Err(ConfigError::MissingKey {
                section: "host".to_string(),
                key: "home".to_string(),
            });
        }

        Ok(())
    }
}

/// Ensures a root URL ends with a single trailing slash.
fn normalize_root_url(url: &str) -> String {
    let trimmed = url.trim_end_matches('/');
    format!("{trimmed}/")
}

#[cfg(test)]
mod tests;
