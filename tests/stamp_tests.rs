use anyhow::Result;
use chrono::NaiveDate;
use datemark::{format_stamp, parse_stamp, ProductCatalog, ShelfLife, StampEngine, StampError};
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn write_catalog(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

const CATALOG_TOML: &str = r#"
[products]
"KFC 딸기쨈 (디스펜팩)" = 6
"Light Sugar 딸기쨈(조흥)" = 3
"LIGHT&JOY 당을 줄인 김천자두쨈" = 12
"단기 샘플 쨈" = "d120"
"표기 오류 쨈" = "expired?"
"무효 일수 쨈" = "d0"
"#;

#[test]
fn test_end_to_end_month_calculation_from_toml_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = write_catalog(&temp_dir, "catalog.toml", CATALOG_TOML);

    let catalog = ProductCatalog::from_path(&path)?;
    let engine = StampEngine::new(catalog);

    let report = engine.run("KFC 딸기쨈 (디스펜팩)", Some(date(2025, 12, 31)))?;
    assert_eq!(report.shelf_life, ShelfLife::Months(6));
    assert_eq!(report.target, date(2026, 6, 30));
    assert_eq!(format_stamp(report.target), "2026.06.30");

    Ok(())
}

#[test]
fn test_end_to_end_day_calculation() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = write_catalog(&temp_dir, "catalog.toml", CATALOG_TOML);

    let engine = StampEngine::new(ProductCatalog::from_path(&path)?);
    let report = engine.run("단기 샘플 쨈", Some(date(2025, 12, 31)))?;

    assert_eq!(report.shelf_life, ShelfLife::Days(120));
    assert_eq!(report.target, date(2026, 4, 29));
    Ok(())
}

#[test]
fn test_end_to_end_json_catalog() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = write_catalog(
        &temp_dir,
        "catalog.json",
        r#"{ "Strawberry Jam": 6, "Plum Jam": "d120" }"#,
    );

    let engine = StampEngine::new(ProductCatalog::from_path(&path)?);
    let report = engine.run("Plum Jam", Some(date(2025, 12, 31)))?;
    assert_eq!(report.target, date(2026, 4, 29));
    Ok(())
}

#[test]
fn test_unknown_product_is_rejected_before_arithmetic() {
    let engine = StampEngine::new(ProductCatalog::sample());
    let err = engine
        .run("그런 제품 없음", Some(date(2025, 1, 1)))
        .unwrap_err();
    assert!(matches!(err, StampError::UnknownProduct { .. }));
}

#[test]
fn test_missing_date_is_rejected() {
    let engine = StampEngine::new(ProductCatalog::sample());
    let err = engine.run("KFC 딸기쨈 (디스펜팩)", None).unwrap_err();
    assert!(matches!(err, StampError::MissingDate));
}

#[test]
fn test_malformed_catalog_entry_surfaces_as_format_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = write_catalog(&temp_dir, "catalog.toml", CATALOG_TOML);

    let engine = StampEngine::new(ProductCatalog::from_path(&path)?);
    let err = engine
        .run("표기 오류 쨈", Some(date(2025, 1, 1)))
        .unwrap_err();

    assert!(matches!(err, StampError::ShelfLifeFormat { .. }));
    assert!(err.is_catalog_defect());
    assert!(err.to_string().contains("expired?"));
    Ok(())
}

#[test]
fn test_zero_day_entry_surfaces_as_non_positive_duration() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = write_catalog(&temp_dir, "catalog.toml", CATALOG_TOML);

    let engine = StampEngine::new(ProductCatalog::from_path(&path)?);
    let err = engine
        .run("무효 일수 쨈", Some(date(2025, 1, 1)))
        .unwrap_err();

    assert!(matches!(err, StampError::NonPositiveDuration { days: 0 }));
    assert!(err.is_catalog_defect());
    Ok(())
}

#[test]
fn test_substring_search_matches_like_the_autocomplete() {
    let engine = StampEngine::new(ProductCatalog::sample());

    let matches = engine.matching_products("딸기");
    assert_eq!(matches.len(), 2);
    assert!(matches.iter().all(|name| name.contains("딸기")));

    assert!(engine.matching_products("   ").is_empty());
    assert!(engine.matching_products("파인애플").is_empty());
}

#[test]
fn test_repeated_runs_are_identical() -> Result<()> {
    let engine = StampEngine::new(ProductCatalog::sample());

    let first = engine.run("LIGHT&JOY 당을 줄인 김천자두쨈", Some(date(2024, 1, 31)))?;
    let second = engine.run("LIGHT&JOY 당을 줄인 김천자두쨈", Some(date(2024, 1, 31)))?;
    assert_eq!(first, second);

    // 12 months from 2024-01-31: day 31 > last day of January? No -- same
    // month next year, day minus one.
    assert_eq!(first.target, date(2025, 1, 30));
    Ok(())
}

#[test]
fn test_stamp_round_trip_through_the_report() -> Result<()> {
    let engine = StampEngine::new(ProductCatalog::sample());
    let report = engine.run("Light Sugar 딸기쨈(조흥)", Some(date(2025, 11, 30)))?;

    // 3 months from 2025-11-30 -> 2026-02; day 30 > 28 -> clamp.
    assert_eq!(report.target, date(2026, 2, 28));

    let stamped = format_stamp(report.target);
    assert_eq!(stamped, "2026.02.28");
    assert_eq!(parse_stamp(&stamped)?, report.target);
    Ok(())
}

#[test]
fn test_missing_catalog_file_is_an_io_error() {
    let err = ProductCatalog::from_path("/definitely/not/here.toml").unwrap_err();
    assert!(matches!(err, StampError::Io(_)));
}
