use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Api
// =========================================================================

#[test]
#[serial]
fn given_base_url_without_scheme_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _url = EnvGuard::set("UD_API_BASE_URL", "jsonplaceholder.typicode.com");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("api.base_url"));
}

#[test]
#[serial]
fn given_http_base_url_when_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();
    let _url = EnvGuard::set("UD_API_BASE_URL", "http://localhost:3000");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_timeout_zero_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _timeout = EnvGuard::set("UD_API_TIMEOUT_SECS", "0");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_timeout_over_max_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _timeout = EnvGuard::set("UD_API_TIMEOUT_SECS", "121");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_freshness_over_max_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _fresh = EnvGuard::set("UD_CACHE_FRESHNESS_SECS", "3601");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}
