// envsource: environment-variable aggregation for CI build hosts
//
// SPDX-FileCopyrightText: 2026 envsource contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tests for the logging module.

use super::{LogConfig, LogLevel};
use crate::config::LogSection;

#[test]
fn test_log_level_bounds() {
    assert!(LogLevel::new(0).is_ok());
    assert!(LogLevel::new(5).is_ok());
    assert!(LogLevel::new(6).is_err());

    assert_eq!(LogLevel::from_u8(3), Some(LogLevel::INFO));
    assert_eq!(LogLevel::from_u8(9), None);
}

#[test]
fn test_log_level_filter_strings() {
    assert_eq!(LogLevel::SILENT.to_filter_string(), "off");
    assert_eq!(LogLevel::ERROR.to_filter_string(), "error");
    assert_eq!(LogLevel::WARN.to_filter_string(), "warn");
    assert_eq!(LogLevel::INFO.to_filter_string(), "info");
    assert_eq!(LogLevel::DEBUG.to_filter_string(), "debug");
    assert_eq!(LogLevel::TRACE.to_filter_string(), "trace");
}

#[test]
fn test_log_level_round_trip() {
    for raw in 0..=5u8 {
        let level = LogLevel::new(raw).unwrap();
        assert_eq!(u8::from(level), raw);
    }
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();

    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert_eq!(config.log_file(), None);
    assert!(!config.show_target());
}

#[test]
fn test_log_config_builder() {
    let config = LogConfig::builder()
        .with_console_level(LogLevel::DEBUG)
        .with_file_level(LogLevel::WARN)
        .with_log_file("envsource.log".to_string())
        .with_show_target(true)
        .build();

    assert_eq!(config.console_level(), LogLevel::DEBUG);
    assert_eq!(config.file_level(), LogLevel::WARN);
    assert_eq!(config.log_file(), Some("envsource.log"));
    assert!(config.show_target());
}

#[test]
fn test_log_config_from_section() {
    let section = LogSection {
        console_level: LogLevel::WARN,
        file_level: LogLevel::DEBUG,
        file: Some("out.log".to_string()),
    };

    let config = LogConfig::from(&section);
    assert_eq!(config.console_level(), LogLevel::WARN);
    assert_eq!(config.file_level(), LogLevel::DEBUG);
    assert_eq!(config.log_file(), Some("out.log"));
}
