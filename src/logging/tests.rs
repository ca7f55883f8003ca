// envkit: Typed access to environment variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io::Write;

use tracing_subscriber::filter::LevelFilter;

use super::{LogLevel, LogSettings, init_logging, open_log_file};

#[test]
fn test_log_level_from_number() {
    assert_eq!(LogLevel::try_from(0_u8), Ok(LogLevel::Silent));
    assert_eq!(LogLevel::try_from(5_u8), Ok(LogLevel::Trace));
    assert_eq!(u8::from(LogLevel::Debug), 4);

    let err = LogLevel::try_from(9_u8).unwrap_err();
    insta::assert_snapshot!(err, @"log level must be 0-5, got 9");
}

#[test]
fn test_log_level_filters() {
    let filters: Vec<_> = (0_u8..=5)
        .map(|n| LevelFilter::from(LogLevel::try_from(n).unwrap()))
        .collect();
    assert_eq!(
        filters,
        [
            LevelFilter::OFF,
            LevelFilter::ERROR,
            LevelFilter::WARN,
            LevelFilter::INFO,
            LevelFilter::DEBUG,
            LevelFilter::TRACE,
        ]
    );
}

#[test]
fn test_log_level_is_a_number_in_config() {
    let level: LogLevel = serde_json::from_str("4").unwrap();
    assert_eq!(level, LogLevel::Debug);
    assert_eq!(serde_json::to_string(&LogLevel::Info).unwrap(), "3");
    assert!(serde_json::from_str::<LogLevel>("6").is_err());
}

#[test]
fn test_log_settings_default() {
    let settings = LogSettings::default();

    assert_eq!(settings.level, LogLevel::Warn);
    assert!(settings.file.is_none());
}

#[test]
fn test_open_log_file_creates_parents_and_appends() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("envkit.log");

    writeln!(open_log_file(&path).unwrap(), "first").unwrap();
    writeln!(open_log_file(&path).unwrap(), "second").unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
}

#[test]
fn test_init_logging_rejects_directory_as_file() {
    let dir = tempfile::tempdir().unwrap();
    let settings = LogSettings {
        level: LogLevel::Silent,
        file: Some(dir.path().to_path_buf()),
    };

    let err = init_logging(&settings).err().unwrap();
    assert!(err.to_string().starts_with("failed to open log file"), "{err}");
}

#[test]
fn test_init_logging_writes_json_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("envkit.log");
    let settings = LogSettings {
        level: LogLevel::Silent,
        file: Some(path.clone()),
    };

    let guard = init_logging(&settings).unwrap();
    tracing::info!("logging ready");
    drop(guard);

    let contents = std::fs::read_to_string(&path).unwrap();
    let line = contents
        .lines()
        .find(|l| l.contains("logging ready"))
        .unwrap();
    let event: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(event["level"], "INFO");
}
