use crate::LogLevel;

use std::str::FromStr;

use log::LevelFilter;

#[test]
fn test_log_level_from_str_known_values() {
    assert_eq!(LogLevel::from_str("off").unwrap().0, LevelFilter::Off);
    assert_eq!(LogLevel::from_str("error").unwrap().0, LevelFilter::Error);
    assert_eq!(LogLevel::from_str("WARN").unwrap().0, LevelFilter::Warn);
    assert_eq!(LogLevel::from_str("Info").unwrap().0, LevelFilter::Info);
    assert_eq!(LogLevel::from_str("debug").unwrap().0, LevelFilter::Debug);
    assert_eq!(LogLevel::from_str("trace").unwrap().0, LevelFilter::Trace);
}

#[test]
fn test_log_level_from_str_unknown_falls_back_to_warn() {
    assert_eq!(LogLevel::from_str("loud").unwrap().0, LevelFilter::Warn);
}

#[test]
fn test_log_level_deref_and_into() {
    let level = LogLevel(LevelFilter::Debug);
    assert_eq!(*level, LevelFilter::Debug);
    let filter: LevelFilter = level.into();
    assert_eq!(filter, LevelFilter::Debug);
}
