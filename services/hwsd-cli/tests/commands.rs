//! End-to-end subcommand behavior against temporary directories.

use std::fs;

use hwsd::layout::{item_path, COLLECTION_FILE};
use hwsd::{ConverterConfig, HwsdError};
use hwsd_cli::commands;
use test_utils::{temp_test_dir, write_fake_netcdf, write_fake_raster, write_fake_rasters, SAMPLE_VARIABLES};

fn root_cause_is_missing_path(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<HwsdError>(),
        Some(HwsdError::OutputPathMissing(_))
    )
}

#[test]
fn test_create_collection_writes_and_validates() {
    let dest = temp_test_dir();

    let path = commands::create_collection(dest.path()).unwrap();
    assert_eq!(path, dest.path().join(COLLECTION_FILE));

    let checked = commands::validate(&[path]).unwrap();
    assert_eq!(checked, 1);
}

#[test]
fn test_create_collection_missing_destination() {
    let dest = temp_test_dir();
    let err = commands::create_collection(&dest.path().join("nope")).unwrap_err();
    assert!(root_cause_is_missing_path(&err));
}

#[tokio::test]
async fn test_create_item_writes_file() {
    let dir = temp_test_dir();
    let raster = write_fake_raster(dir.path(), "REF_DEPTH", 512);
    let dest = dir.path().join("REF_DEPTH.json");

    let item = commands::create_item(raster.to_str().unwrap(), &dest)
        .await
        .unwrap();
    assert_eq!(item.id, "REF_DEPTH");
    assert!(dest.is_file());
    assert_eq!(commands::validate(&[dest]).unwrap(), 1);
}

#[tokio::test]
async fn test_create_item_unknown_variable() {
    let dir = temp_test_dir();
    let dest = dir.path().join("item.json");

    let err = commands::create_item("unknown_var.tif", &dest).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<HwsdError>(),
        Some(HwsdError::UnknownVariable(_))
    ));
    assert!(!dest.exists());
}

#[tokio::test]
async fn test_populate_collection_from_directory() {
    let source = temp_test_dir();
    let dest = temp_test_dir();
    write_fake_rasters(source.path(), SAMPLE_VARIABLES);
    write_fake_raster(source.path(), "not_a_variable", 16);

    let written = commands::populate_collection(source.path(), dest.path())
        .await
        .unwrap();

    assert_eq!(written.len(), SAMPLE_VARIABLES.len() + 1);
    for name in SAMPLE_VARIABLES {
        assert!(dest.path().join(item_path(name)).is_file());
    }
    assert!(!dest.path().join("not_a_variable").exists());

    let mut all = vec![dest.path().join(COLLECTION_FILE)];
    all.extend(SAMPLE_VARIABLES.iter().map(|n| dest.path().join(item_path(n))));
    assert_eq!(commands::validate(&all).unwrap(), all.len());
}

#[tokio::test]
async fn test_populate_collection_from_single_file() {
    let source = temp_test_dir();
    let dest = temp_test_dir();
    let raster = write_fake_raster(source.path(), "T_GRAVEL", 64);

    let written = commands::populate_collection(&raster, dest.path())
        .await
        .unwrap();
    assert_eq!(written.len(), 2);
    assert!(dest.path().join(item_path("T_GRAVEL")).is_file());
}

#[tokio::test]
async fn test_populate_collection_single_unknown_file_fails() {
    let source = temp_test_dir();
    let dest = temp_test_dir();
    let raster = write_fake_raster(source.path(), "mystery", 64);

    let err = commands::populate_collection(&raster, dest.path())
        .await
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<HwsdError>(),
        Some(HwsdError::UnknownVariable(_))
    ));
    assert!(!dest.path().join(COLLECTION_FILE).exists());
}

#[test]
fn test_create_cog_missing_destination() {
    let dir = temp_test_dir();
    let source = write_fake_netcdf(dir.path(), "T_SAND");

    let err = commands::create_cog(&source, &dir.path().join("cogs"), &ConverterConfig::default())
        .unwrap_err();
    assert!(root_cause_is_missing_path(&err));
}

#[cfg(unix)]
#[test]
fn test_create_cog_writes_into_destination() {
    let dir = temp_test_dir();
    let out = temp_test_dir();
    let converter = test_utils::write_fake_converter(dir.path(), 0);
    let source = write_fake_netcdf(dir.path(), "S_PH_H20");
    let config = ConverterConfig {
        binary: converter.to_string_lossy().into_owned(),
        ..Default::default()
    };

    let output = commands::create_cog(&source, out.path(), &config).unwrap();
    assert_eq!(output, out.path().join("S_PH_H20.tif"));
    assert!(output.is_file());
}

#[test]
fn test_validate_reports_errors() {
    let dir = temp_test_dir();
    let path = dir.path().join("broken.json");
    let mut collection = serde_json::to_value(hwsd::create_collection()).unwrap();
    collection["stac_extensions"] = serde_json::json!([]);
    fs::write(&path, serde_json::to_string(&collection).unwrap()).unwrap();

    let issues = commands::check_file(&path).unwrap();
    assert!(issues.iter().any(|i| i.is_error()));
    assert!(commands::validate(&[path]).is_err());
}

#[test]
fn test_validate_rejects_unknown_record_type() {
    let dir = temp_test_dir();
    let path = dir.path().join("catalog.json");
    fs::write(&path, r#"{"type": "Catalog", "id": "x"}"#).unwrap();

    assert!(commands::check_file(&path).is_err());
}
