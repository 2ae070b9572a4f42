use anyhow::Result;
use prototypes::*;
use std::io::Write;

#[test]
fn defaults_skip_misses_and_reject_zero_denominators() {
    let config = TransformConfig::default();
    assert_eq!(config.missing_match, MissingMatch::Skip);
    assert_eq!(config.zero_divisor, ZeroDivisor::Error);
    assert_eq!(
        config.divide("cohort1806", 27.0, 0.0),
        Err(TransformError::DivisionByZero {
            key: "cohort1806".to_string()
        })
    );
    assert_eq!(config.divide("cohort1806", 27.0, 2.0), Ok(13.5));
}

#[test]
fn sentinel_replaces_zero_denominators_and_empty_means() -> Result<()> {
    let config =
        TransformConfig::new().with_zero_divisor(ZeroDivisor::Sentinel { value: -1.0 });
    assert_eq!(config.divide("mod1", 18.0, 0.0)?, -1.0);
    assert_eq!(config.resolve_mean("Jurassic Park", None)?, -1.0);
    assert_eq!(config.resolve_mean("Jurassic Park", Some(34.4))?, 34.4);
    Ok(())
}

#[test]
fn partial_json_falls_back_to_defaults() -> Result<()> {
    let config = TransformConfig::from_json_str(r#"{ "missing_match": "fail" }"#)?;
    assert_eq!(config.missing_match, MissingMatch::Fail);
    assert_eq!(config.zero_divisor, ZeroDivisor::Error);

    assert_eq!(TransformConfig::from_json_str("{}")?, TransformConfig::default());
    Ok(())
}

#[test]
fn unknown_policy_is_rejected() {
    let err = TransformConfig::from_json_str(r#"{ "missing_match": "guess" }"#).unwrap_err();
    assert!(err.to_string().contains("invalid transform config"));
}

#[test]
fn config_round_trips_through_a_file() -> Result<()> {
    let config = TransformConfig::new()
        .with_missing_match(MissingMatch::Fail)
        .with_zero_divisor(ZeroDivisor::Sentinel { value: 0.0 });

    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(serde_json::to_string(&config)?.as_bytes())?;
    file.flush()?;

    assert_eq!(TransformConfig::from_path(file.path())?, config);
    Ok(())
}

#[test]
fn missing_file_reports_its_path() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("absent.json");
    let err = TransformConfig::from_path(&path).unwrap_err();
    assert!(err.to_string().contains("absent.json"));
    Ok(())
}
