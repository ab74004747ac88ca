// envsource: environment-variable aggregation for CI build hosts
//
// SPDX-FileCopyrightText: 2026 envsource contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error handling module.
//!
//! ```text
//!            EnvSourceError
//!                  |
//!     +--------+---+----+--------+
//!     |        |        |        |
//!     v        v        v        v
//! InvalidArg Inject   Config    Io
//!   Box<str>  Box      Box     Box
//!
//! Sub-errors (unboxed internally):
//!   Injection  Contributor, Toolchain, Interrupted, Io
//!   Config     ReadError, ParseError, InvalidValue, MissingKey
//!
//! All variants boxed => EnvSourceError stays small on the stack.
//! ```
//!
//! Denied environment-record access is deliberately *not* an error kind:
//! it is logged and downgraded to an empty sequence (see `inject`).

use thiserror::Error;

/// Convenience alias for `anyhow::Result`, used by setup plumbing
/// (configuration loading, logging initialization).
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`EnvSourceError`], used by the aggregation core.
pub type EnvResult<T> = std::result::Result<T, EnvSourceError>;

/// Top-level error type for the aggregation core.
///
/// All sub-errors are boxed to keep this enum small on the stack.
#[derive(Debug, Error)]
pub enum EnvSourceError {
    /// A required argument (typically the build reference) was missing.
    /// Fatal to the calling operation, never retried.
    #[error("invalid argument: {0}")]
    InvalidArgument(Box<str>),

    /// Variable injection failed while querying a collaborator.
    #[error("injection error: {0}")]
    Injection(#[from] Box<InjectionError>),

    /// Host settings error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

/// Create an [`EnvSourceError::InvalidArgument`] with the given message.
pub fn invalid_argument(message: impl Into<String>) -> EnvSourceError {
    EnvSourceError::InvalidArgument(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for EnvSourceError {
                fn from(err: $error) -> Self {
                    EnvSourceError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    InjectionError => Injection,
    ConfigError => Config,
    std::io::Error => Io,
}

// --- Injection Errors ---

/// Faults surfacing from contributor or toolchain invocation.
///
/// Wrapped and re-raised as a single error kind: the whole aggregation
/// aborts on the first such fault, no partial-result suppression.
#[derive(Debug, Error)]
pub enum InjectionError {
    /// An environment contributor failed while producing its variables.
    #[error("contributor '{name}' failed: {source}")]
    Contributor {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// Toolchain re-resolution for a specific node failed.
    #[error("toolchain '{name}' resolution on node '{node}' failed: {source}")]
    Toolchain {
        name: String,
        node: String,
        #[source]
        source: std::io::Error,
    },

    /// A nested lookup was interrupted.
    #[error("interrupted while {what}")]
    Interrupted { what: String },

    /// General I/O fault during a nested lookup.
    #[error("io fault during injection: {0}")]
    Io(#[from] std::io::Error),
}

// --- Config Errors ---

/// Host settings errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a settings file.
    #[error("failed to read settings file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a settings source.
    #[error("failed to parse settings '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Missing required settings key.
    #[error("missing required settings key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid settings value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}
