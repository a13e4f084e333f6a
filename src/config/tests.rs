use super::*;
use serial_test::serial;
use std::env;

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_rankgate_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var("RANKGATE_MAX_CORRECTION_ATTEMPTS");
        env::remove_var("RANKGATE_MIN_WORD_COUNT");
        env::remove_var("RANKGATE_RANKING_THRESHOLD");
        env::remove_var("RANKGATE_INTERNAL_DOMAIN");
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.max_correction_attempts, 3);
    assert_eq!(config.min_word_count, 300);
    assert_eq!(config.ranking_threshold, 10.0);
    assert!(config.internal_domain.is_none());
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    clear_rankgate_env();

    let config = Config::from_env().expect("should parse with defaults");

    assert_eq!(config.max_correction_attempts, 3);
    assert_eq!(config.min_word_count, 300);
}

#[test]
#[serial]
fn test_from_env_custom_attempts() {
    clear_rankgate_env();

    with_env_vars(&[("RANKGATE_MAX_CORRECTION_ATTEMPTS", "5")], || {
        let config = Config::from_env().expect("should parse");
        assert_eq!(config.max_correction_attempts, 5);
    });
}

#[test]
#[serial]
fn test_from_env_custom_word_count() {
    clear_rankgate_env();

    with_env_vars(&[("RANKGATE_MIN_WORD_COUNT", "500")], || {
        let config = Config::from_env().expect("should parse");
        assert_eq!(config.min_word_count, 500);
    });
}

#[test]
#[serial]
fn test_from_env_internal_domain_trimmed() {
    clear_rankgate_env();

    with_env_vars(&[("RANKGATE_INTERNAL_DOMAIN", "  example.com  ")], || {
        let config = Config::from_env().expect("should parse");
        assert_eq!(config.internal_domain.as_deref(), Some("example.com"));
    });
}

#[test]
#[serial]
fn test_from_env_empty_internal_domain_ignored() {
    clear_rankgate_env();

    with_env_vars(&[("RANKGATE_INTERNAL_DOMAIN", "   ")], || {
        let config = Config::from_env().expect("should parse");
        assert!(config.internal_domain.is_none());
    });
}

#[test]
#[serial]
fn test_from_env_invalid_attempts_rejected() {
    clear_rankgate_env();

    with_env_vars(&[("RANKGATE_MAX_CORRECTION_ATTEMPTS", "zero")], || {
        let err = Config::from_env().expect_err("non-numeric should fail");
        assert!(matches!(err, ConfigError::ParseError { .. }));
    });
}

#[test]
#[serial]
fn test_from_env_zero_attempts_rejected() {
    clear_rankgate_env();

    with_env_vars(&[("RANKGATE_MAX_CORRECTION_ATTEMPTS", "0")], || {
        let err = Config::from_env().expect_err("zero attempts should fail");
        assert!(matches!(err, ConfigError::InvalidMaxAttempts { value: 0 }));
    });
}

#[test]
fn test_validate_zero_word_count() {
    let config = Config {
        min_word_count: 0,
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidMinWordCount { value: 0 })
    ));
}

#[test]
fn test_validate_bad_ranking_threshold() {
    let config = Config {
        ranking_threshold: 0.0,
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidRankingThreshold { .. })
    ));

    let config = Config {
        ranking_threshold: f64::NAN,
        ..Default::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_url_as_internal_domain() {
    let config = Config {
        internal_domain: Some("https://example.com".to_string()),
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidInternalDomain { .. })
    ));
}
