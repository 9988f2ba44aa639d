use anyhow::Result;
use chrono::NaiveDate;
use ladys_essence::domain::model::UserId;
use ladys_essence::domain::ports::FixedClock;
use ladys_essence::utils::validation::Validate;
use ladys_essence::{CyclePredictor, EssenceError, InMemoryHistory, TomlConfig};
use tempfile::TempDir;

#[tokio::test]
async fn test_configured_defaults_reach_the_predictor() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("essence.toml");
    tokio::fs::write(
        &config_path,
        r#"
[defaults]
cycle_length = 30
period_length = 4

[report]
line_budget = 120
"#,
    )
    .await?;

    let config = TomlConfig::from_file(&config_path)?;
    config.validate()?;

    let today = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
    let predictor = CyclePredictor::new(InMemoryHistory::new(), FixedClock(today), config.settings());
    assert_eq!(predictor.settings().line_budget, 120);

    let window = predictor.window(&UserId::from("no-profile")).await?;
    assert_eq!(window.cycle_length, 30);
    assert_eq!(window.period_length, 4);
    assert_eq!(window.period.end, NaiveDate::from_ymd_opt(2025, 9, 4).unwrap());
    assert_eq!(window.ovulation.start, NaiveDate::from_ymd_opt(2025, 9, 17).unwrap());
    Ok(())
}

#[test]
fn test_invalid_period_default_is_rejected() -> Result<()> {
    let config = TomlConfig::from_toml_str(
        r#"
[defaults]
cycle_length = 21
period_length = 21
"#,
    )?;

    match config.validate() {
        Err(EssenceError::InvalidConfigValueError { field, .. }) => {
            assert_eq!(field, "defaults.period_length");
        }
        other => panic!("expected invalid period default, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_missing_config_file() {
    let result = TomlConfig::from_file("/definitely/not/here/essence.toml");
    assert!(matches!(result, Err(EssenceError::IoError(_))));
}
