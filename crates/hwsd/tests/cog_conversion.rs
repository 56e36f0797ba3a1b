//! COG conversion driven through a stand-in converter script.
#![cfg(unix)]

use hwsd::{create_cog, create_cogs, ConverterConfig, HwsdError};
use test_utils::{
    converter_invocations, temp_test_dir, write_fake_converter, write_fake_netcdf,
};

fn config_for(binary: &std::path::Path) -> ConverterConfig {
    ConverterConfig {
        binary: binary.to_string_lossy().into_owned(),
        ..Default::default()
    }
}

#[test]
fn test_create_cog_invokes_converter() {
    let dir = temp_test_dir();
    let converter = write_fake_converter(dir.path(), 0);
    let input = write_fake_netcdf(dir.path(), "ROOTS");
    let output = dir.path().join("ROOTS.tif");

    create_cog(&input, &output, &config_for(&converter)).unwrap();

    assert!(output.is_file());
    let calls = converter_invocations(dir.path());
    assert_eq!(calls.len(), 1);
    assert!(calls[0].starts_with("-ot Int16 -of COG -co NUM_THREADS=ALL_CPUS"));
    assert!(calls[0].contains("-a_nodata -1"));
}

#[test]
fn test_create_cog_failure_carries_output() {
    let dir = temp_test_dir();
    let converter = write_fake_converter(dir.path(), 2);
    let input = write_fake_netcdf(dir.path(), "T_SAND");
    let output = dir.path().join("T_SAND.tif");

    match create_cog(&input, &output, &config_for(&converter)) {
        Err(HwsdError::ConversionFailure { log, output: out, .. }) => {
            assert!(log.contains("Input file size is 7200, 3600"));
            assert!(log.contains("ERROR 4: cannot open input"));
            assert_eq!(out, output);
        }
        other => panic!("expected conversion failure, got {:?}", other),
    }
    assert!(!output.exists());
}

#[test]
fn test_create_cogs_converts_directory() {
    let work = temp_test_dir();
    let input = temp_test_dir();
    let output = temp_test_dir();
    let converter = write_fake_converter(work.path(), 0);

    for name in ["T_SAND", "AWC_CLASS", "HWSD_SOIL_CLM_RES"] {
        write_fake_netcdf(input.path(), name);
    }

    let written = create_cogs(input.path(), output.path(), &config_for(&converter)).unwrap();

    assert_eq!(
        written,
        vec![
            output.path().join("AWC_CLASS.tif"),
            output.path().join("T_SAND.tif"),
        ]
    );
    assert!(written.iter().all(|p| p.is_file()));
    assert_eq!(converter_invocations(work.path()).len(), 2);
}

#[test]
fn test_create_cogs_stops_on_unknown_variable() {
    let work = temp_test_dir();
    let input = temp_test_dir();
    let output = temp_test_dir();
    let converter = write_fake_converter(work.path(), 0);

    write_fake_netcdf(input.path(), "AWC_CLASS");
    write_fake_netcdf(input.path(), "MYSTERY");

    let result = create_cogs(input.path(), output.path(), &config_for(&converter));
    assert!(matches!(result, Err(HwsdError::UnknownVariable(name)) if name == "MYSTERY"));
    assert_eq!(converter_invocations(work.path()).len(), 1);
}

#[test]
fn test_create_cogs_requires_output_dir() {
    let input = temp_test_dir();
    let missing = input.path().join("cogs");

    let result = create_cogs(input.path(), &missing, &ConverterConfig::default());
    assert!(matches!(result, Err(HwsdError::OutputPathMissing(_))));
}
