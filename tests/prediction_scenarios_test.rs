use anyhow::Result;
use chrono::NaiveDate;
use ladys_essence::domain::model::{CycleProfile, CycleRecord, UserId};
use ladys_essence::domain::ports::FixedClock;
use ladys_essence::{CsvCycleStore, CyclePredictor, InMemoryHistory, PredictorSettings};
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn phase_lines(screen: &str) -> Vec<&str> {
    screen.lines().skip(1).take(5).collect()
}

async fn store_with_july_cycle(temp_dir: &TempDir) -> Result<CsvCycleStore> {
    let cycles_path = temp_dir.path().join("cycles.csv");
    tokio::fs::write(
        &cycles_path,
        "user_id,start_date,end_date,cycle_length,period_length\n\
         amina,2025-06-09,2025-06-13,28,5\n\
         amina,2025-07-07,,28,5\n",
    )
    .await?;

    let profiles_path = temp_dir.path().join("profiles.csv");
    tokio::fs::write(
        &profiles_path,
        "user_id,personal_cycle_length,personal_period_length\namina,28,5\n",
    )
    .await?;

    Ok(CsvCycleStore::from_paths(
        cycles_path.as_path(),
        Some(profiles_path.as_path()),
    )?)
}

#[tokio::test]
async fn test_july_scenario_from_csv() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = store_with_july_cycle(&temp_dir).await?;
    let predictor = CyclePredictor::new(
        store,
        FixedClock(date(2025, 7, 20)),
        PredictorSettings::default(),
    );

    let screen = predictor.predict(&UserId::from("amina"), 0).await?;

    assert_eq!(
        phase_lines(&screen),
        vec![
            "Period: 07-11 Jul",
            "Follicular: 12-20 Jul",
            "Fertile window: 16-22 Jul",
            "Ovulation: 21 Jul",
            "Luteal: 22 Jul->",
        ]
    );
    assert!(screen.contains("n. Next month"));
    assert!(screen.ends_with("p. Current cycle info"));
    Ok(())
}

#[tokio::test]
async fn test_far_month_still_lists_every_phase() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = store_with_july_cycle(&temp_dir).await?;
    let predictor = CyclePredictor::new(
        store,
        FixedClock(date(2025, 7, 20)),
        PredictorSettings::default(),
    );

    let screen = predictor.predict(&UserId::from("amina"), 3).await?;

    assert!(screen.starts_with("Cycle Oct 2025"));
    assert_eq!(
        phase_lines(&screen),
        vec![
            "Period: 07-11 Jul",
            "Follicular: 12-20 Jul",
            "Fertile window: 16-22 Jul",
            "Ovulation: 21 Jul",
            "Luteal: 22 Jul-03 Aug",
        ]
    );
    assert!(!screen.contains("->") && !screen.contains("<-"));
    assert!(screen.ends_with("p. Previous month"));
    Ok(())
}

#[tokio::test]
async fn test_previous_month_label_for_every_nonzero_offset() -> Result<()> {
    let history = InMemoryHistory::new();
    let predictor = CyclePredictor::new(
        history,
        FixedClock(date(2025, 7, 20)),
        PredictorSettings::default(),
    );
    let user = UserId::from("new-user");

    for offset in [-12, -1, 1, 2, 400] {
        let screen = predictor.predict(&user, offset).await?;
        assert!(
            screen.ends_with("p. Previous month"),
            "offset {} rendered {}",
            offset,
            screen
        );
    }
    assert!(predictor
        .predict(&user, 0)
        .await?
        .ends_with("p. Current cycle info"));
    Ok(())
}

#[tokio::test]
async fn test_extreme_offsets_are_valid() -> Result<()> {
    let history = InMemoryHistory::new();
    let user = UserId::from("1");
    history
        .add_record(&user, CycleRecord::starting(date(2025, 7, 7)))
        .await;
    let predictor = CyclePredictor::new(
        history,
        FixedClock(date(2025, 7, 20)),
        PredictorSettings::default(),
    );

    for offset in [i32::MIN, i32::MAX] {
        let screen = predictor.predict(&user, offset).await?;
        assert_eq!(phase_lines(&screen).len(), 5);
        assert!(screen.contains("Luteal: 22 Jul-03 Aug"));
    }
    Ok(())
}

#[tokio::test]
async fn test_no_history_anchors_on_today() -> Result<()> {
    let history = InMemoryHistory::new();
    let predictor = CyclePredictor::new(
        history,
        FixedClock(date(2025, 3, 3)),
        PredictorSettings::default(),
    );

    let screen = predictor.predict(&UserId::from("fresh"), 0).await?;

    // 28-day cycle from 3 Mar: ovulation on 17 Mar, luteal through 30 Mar.
    assert_eq!(
        phase_lines(&screen),
        vec![
            "Period: 03-07 Mar",
            "Follicular: 08-16 Mar",
            "Fertile window: 12-18 Mar",
            "Ovulation: 17 Mar",
            "Luteal: 18-30 Mar",
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_profile_lengths_drive_prediction() -> Result<()> {
    let history = InMemoryHistory::new();
    let user = UserId::from("2");
    history
        .add_record(&user, CycleRecord::starting(date(2025, 7, 1)))
        .await;
    history.set_profile(&user, CycleProfile::new(35, 7)).await;
    let predictor = CyclePredictor::new(
        history,
        FixedClock(date(2025, 7, 20)),
        PredictorSettings::default(),
    );

    let window = predictor.window(&user).await?;

    assert_eq!(window.period.end, date(2025, 7, 7));
    assert_eq!(window.ovulation.start, date(2025, 7, 22));
    assert_eq!(window.luteal.end, date(2025, 8, 4));
    Ok(())
}

#[tokio::test]
async fn test_current_cycle_info_and_back() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = store_with_july_cycle(&temp_dir).await?;
    let predictor = CyclePredictor::new(
        store,
        FixedClock(date(2025, 7, 21)),
        PredictorSettings::default(),
    );
    let user = UserId::from("amina");

    let info = predictor.respond(&user, "p").await?;
    assert_eq!(
        info,
        "Day 15 of 28\nPhase: Ovulation\nNext period: 04 Aug\nn. This month"
    );

    let back = predictor.respond(&user, "p*n").await?;
    assert_eq!(back, predictor.predict(&user, 0).await?);
    Ok(())
}

#[tokio::test]
async fn test_missing_csv_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.csv");

    let result = CsvCycleStore::from_paths(missing.as_path(), None);

    assert!(matches!(
        result,
        Err(ladys_essence::EssenceError::IoError(_))
    ));
}
