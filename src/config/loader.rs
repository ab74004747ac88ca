// envsource: environment-variable aggregation for CI build hosts
//
// SPDX-FileCopyrightText: 2026 envsource contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Settings loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! SettingsLoader::new()
//!   .add_toml_file(req)
//!   .add_toml_file_optional(opt)
//!   .add_toml_str()
//!   .with_env_prefix()
//!   .set()
//!        |
//!        v
//!    build() --> HostSettings
//! ```

use std::path::PathBuf;

use super::HostSettings;
use crate::error::Result;

/// Builder for loading host settings from multiple sources.
///
/// Later sources override earlier ones field by field.
pub struct SettingsLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    files: Vec<(String, PathBuf)>,
}

impl SettingsLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            files: Vec::new(),
        }
    }

    /// Adds a required TOML settings file.
    ///
    /// The file is read when `build()` is called; a missing file or invalid
    /// TOML makes `build()` fail.
    #[must_use]
    pub fn add_toml_file<P: AsRef<std::path::Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(true));
        self.files.push(("file".to_string(), p.to_path_buf()));
        self
    }

    /// Adds an optional TOML settings file; silently skipped when absent.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<std::path::Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(false));
        if p.exists() {
            self.files.push(("optional".to_string(), p.to_path_buf()));
        }
        self
    }

    /// Adds an inline TOML source.
    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.files
            .push(("string".to_string(), PathBuf::from("<string>")));
        self
    }

    /// Enables environment-variable overrides with the given prefix, using
    /// `__` as the section separator (e.g. `PREFIX_HOST__ROOT_URL`).
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Sets a single override value.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or the value cannot be
    /// converted to a settings value.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| anyhow::anyhow!("settings error: {e}"))?;
        Ok(self)
    }

    /// Builds the settings from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A required settings file is missing.
    /// - A source has invalid TOML syntax.
    /// - Environment overrides cannot be parsed.
    /// - The merged settings fail validation.
    pub fn build(self) -> Result<HostSettings> {
        let builder = match &self.env_prefix {
            Some(prefix) => self.builder.add_source(
                config::Environment::with_prefix(prefix)
                    .separator("__")
                    .try_parsing(true),
            ),
            None => self.builder,
        };
        let cfg = builder.build()?;
        let mut settings: HostSettings = cfg.try_deserialize()?;
        settings.resolve_and_validate()?;
        Ok(settings)
    }

    #[must_use]
    pub fn loaded_files(&self) -> Vec<(String, PathBuf)> {
        self.files.clone()
    }
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}
