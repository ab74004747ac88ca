// envsource: environment-variable aggregation for CI build hosts
//
// SPDX-FileCopyrightText: 2026 envsource contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tests for host settings loading and validation.

use super::HostSettings;
use crate::logging::LogLevel;
use std::io::Write;
use std::path::Path;

#[test]
fn test_parse_minimal() {
    let toml = r#"
[host]
home = "/var/lib/ci"
"#;
    let settings = HostSettings::parse(toml).unwrap();

    assert_eq!(settings.home(), Path::new("/var/lib/ci"));
    assert_eq!(settings.root_url(), None);
}

#[test]
fn test_root_url_gets_trailing_slash() {
    let toml = r#"
[host]
root_url = "http://ci.example"
home = "/var/lib/ci"
"#;
    let settings = HostSettings::parse(toml).unwrap();

    assert_eq!(settings.root_url(), Some("http://ci.example/"));
}

#[test]
fn test_root_url_existing_slash_kept_single() {
    let toml = r#"
[host]
root_url = "http://ci.example//"
home = "/var/lib/ci"
"#;
    let settings = HostSettings::parse(toml).unwrap();

    assert_eq!(settings.root_url(), Some("http://ci.example/"));
}

#[test]
fn test_empty_root_url_rejected() {
    let toml = r#"
[host]
root_url = ""
home = "/var/lib/ci"
"#;
    assert!(HostSettings::parse(toml).is_err());
}

#[test]
fn test_missing_home_rejected() {
    let toml = r#"
[host]
root_url = "http://ci.example/"
"#;
    assert!(HostSettings::parse(toml).is_err());
}

#[test]
fn test_log_section() {
    let toml = r#"
[host]
home = "/var/lib/ci"

[log]
console_level = 4
file = "envsource.log"
"#;
    let settings = HostSettings::parse(toml).unwrap();

    assert_eq!(settings.log().console_level, LogLevel::DEBUG);
    assert_eq!(settings.log().file.as_deref(), Some("envsource.log"));
}

#[test]
fn test_log_level_out_of_range_rejected() {
    let toml = r#"
[host]
home = "/var/lib/ci"

[log]
console_level = 9
"#;
    assert!(HostSettings::parse(toml).is_err());
}

#[test]
fn test_unknown_key_rejected() {
    let toml = r#"
[host]
home = "/var/lib/ci"
shoe_size = 43
"#;
    assert!(HostSettings::parse(toml).is_err());
}

#[test]
fn test_builder_layered_sources() {
    let settings = HostSettings::builder()
        .add_toml_str(
            r#"
[host]
root_url = "http://base.example/"
home = "/var/lib/ci"
"#,
        )
        .add_toml_str(
            r#"
[host]
root_url = "http://override.example/"
"#,
        )
        .build()
        .unwrap();

    assert_eq!(settings.root_url(), Some("http://override.example/"));
    assert_eq!(settings.home(), Path::new("/var/lib/ci"));
}

#[test]
fn test_builder_set_override() {
    let settings = HostSettings::builder()
        .add_toml_str(
            r#"
[host]
home = "/var/lib/ci"
"#,
        )
        .set("host.root_url", "http://set.example")
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(settings.root_url(), Some("http://set.example/"));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[host]
root_url = "http://file.example/"
home = "/srv/ci"
"#
    )
    .unwrap();

    let settings = HostSettings::builder()
        .add_toml_file(file.path())
        .build()
        .unwrap();

    assert_eq!(settings.root_url(), Some("http://file.example/"));
    assert_eq!(settings.home(), Path::new("/srv/ci"));
}

#[test]
fn test_missing_required_file_fails() {
    let result = HostSettings::builder()
        .add_toml_file("/nonexistent/envsource.toml")
        .build();
    assert!(result.is_err());
}

#[test]
fn test_optional_file_skipped_when_absent() {
    let settings = HostSettings::builder()
        .add_toml_str(
            r#"
[host]
home = "/var/lib/ci"
"#,
        )
        .add_toml_file_optional("/nonexistent/envsource.toml")
        .build()
        .unwrap();

    assert_eq!(settings.home(), Path::new("/var/lib/ci"));
}

#[test]
fn test_programmatic_settings() {
    let settings = HostSettings::new("/var/lib/ci").with_root_url("http://ci.example");

    assert_eq!(settings.root_url(), Some("http://ci.example/"));
    assert_eq!(settings.home(), Path::new("/var/lib/ci"));
}
