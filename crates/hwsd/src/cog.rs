//! NetCDF to Cloud-Optimized GeoTIFF conversion via `gdal_translate`.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, error, info, instrument};

use crate::config::ConverterConfig;
use crate::constants::{CLIMATE_RESOLUTION_FILE, NO_DATA};
use crate::error::{HwsdError, Result};
use crate::href::asset_name_from_href;
use crate::variables;

/// Build the `gdal_translate` argument list (without the binary itself).
///
/// The output data type is taken from the catalog entry matching the output
/// file's variable name.
pub fn converter_args(input: &Path, output: &Path, config: &ConverterConfig) -> Result<Vec<String>> {
    let name = asset_name_from_href(&output.to_string_lossy());
    let variable = variables::lookup(&name)?;

    let creation_options = [
        format!("NUM_THREADS={}", config.num_threads),
        format!("BLOCKSIZE={}", config.block_size),
        format!("COMPRESS={}", config.compression),
        format!("LEVEL={}", config.level),
        format!("PREDICTOR={}", config.predictor),
        "OVERVIEWS=IGNORE_EXISTING".to_string(),
    ];

    let mut args = vec![
        "-ot".to_string(),
        variable.data_type.gdal_name().to_string(),
        "-of".to_string(),
        "COG".to_string(),
    ];
    for option in creation_options {
        args.push("-co".to_string());
        args.push(option);
    }
    args.push("-a_nodata".to_string());
    args.push(NO_DATA.to_string());
    args.push(input.to_string_lossy().into_owned());
    args.push(output.to_string_lossy().into_owned());

    Ok(args)
}

/// Where the COG for `input` is written inside `output_dir`.
pub fn cog_output_path(input: &Path, output_dir: &Path) -> PathBuf {
    let name = asset_name_from_href(&input.to_string_lossy());
    output_dir.join(format!("{}.tif", name))
}

/// Convert one NetCDF file to a COG at `output`.
///
/// The converter's captured output is logged at info level whether or not it
/// succeeds.
#[instrument(skip(config), fields(binary = %config.binary))]
pub fn create_cog(input: &Path, output: &Path, config: &ConverterConfig) -> Result<()> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.is_dir() {
            return Err(HwsdError::OutputPathMissing(parent.to_path_buf()));
        }
    }

    let args = converter_args(input, output, config)?;
    info!("Converting NetCDF to COG");
    debug!(args = ?args, "gdal_translate arguments");

    let result = Command::new(&config.binary).args(&args).output();

    let (status, log) = match result {
        Ok(out) => {
            let log = format!(
                "{}{}",
                String::from_utf8_lossy(&out.stdout),
                String::from_utf8_lossy(&out.stderr)
            );
            info!(output = %log.trim_end(), "gdal_translate finished");

            if out.status.success() {
                return Ok(());
            }
            (out.status.to_string(), log)
        }
        Err(e) => (format!("could not run {}", config.binary), e.to_string()),
    };

    error!(output = ?output, status = %status, "Failed to process {:?}", output);
    Err(HwsdError::ConversionFailure {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        status,
        log,
    })
}

/// NetCDF sources in `input_dir`, sorted by file name. The climate
/// resolution file is skipped.
pub fn list_sources(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut sources = Vec::new();

    for entry in fs::read_dir(input_dir)? {
        let path = entry?.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("nc4") {
            continue;
        }
        if path.file_name().and_then(|n| n.to_str()) == Some(CLIMATE_RESOLUTION_FILE) {
            debug!(path = ?path, "Skipping climate resolution file");
            continue;
        }
        sources.push(path);
    }

    sources.sort();
    Ok(sources)
}

/// Convert every NetCDF source in `input_dir` into `output_dir`.
///
/// Stops at the first failure. Returns the written COG paths.
pub fn create_cogs(input_dir: &Path, output_dir: &Path, config: &ConverterConfig) -> Result<Vec<PathBuf>> {
    if !output_dir.is_dir() {
        return Err(HwsdError::OutputPathMissing(output_dir.to_path_buf()));
    }

    let sources = list_sources(input_dir)?;
    info!(count = sources.len(), input_dir = ?input_dir, "Converting NetCDF directory");

    let mut written = Vec::with_capacity(sources.len());
    for source in sources {
        let output = cog_output_path(&source, output_dir);
        create_cog(&source, &output, config)?;
        written.push(output);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converter_args_match_documented_command() {
        let args = converter_args(
            Path::new("in/AWC_CLASS.nc4"),
            Path::new("out/AWC_CLASS.tif"),
            &ConverterConfig::default(),
        )
        .unwrap();

        let expected = [
            "-ot",
            "Int16",
            "-of",
            "COG",
            "-co",
            "NUM_THREADS=ALL_CPUS",
            "-co",
            "BLOCKSIZE=512",
            "-co",
            "COMPRESS=DEFLATE",
            "-co",
            "LEVEL=9",
            "-co",
            "PREDICTOR=YES",
            "-co",
            "OVERVIEWS=IGNORE_EXISTING",
            "-a_nodata",
            "-1",
            "in/AWC_CLASS.nc4",
            "out/AWC_CLASS.tif",
        ];
        assert_eq!(args, expected);
    }

    #[test]
    fn test_converter_args_data_type_follows_output_name() {
        let config = ConverterConfig::default();
        let args = converter_args(Path::new("a.nc4"), Path::new("T_SAND.tif"), &config).unwrap();
        assert_eq!(args[1], "Float64");

        let args = converter_args(Path::new("a.nc4"), Path::new("MU_GLOBAL.tif"), &config).unwrap();
        assert_eq!(args[1], "Int32");
    }

    #[test]
    fn test_converter_args_unknown_variable() {
        let result = converter_args(
            Path::new("x.nc4"),
            Path::new("unknown_var.tif"),
            &ConverterConfig::default(),
        );
        assert!(matches!(result, Err(HwsdError::UnknownVariable(_))));
    }

    #[test]
    fn test_cog_output_path() {
        assert_eq!(
            cog_output_path(Path::new("/data/T_OC.nc4"), Path::new("/cogs")),
            PathBuf::from("/cogs/T_OC.tif")
        );
    }

    #[test]
    fn test_create_cog_missing_output_dir() {
        let result = create_cog(
            Path::new("T_SAND.nc4"),
            Path::new("/no/such/dir/T_SAND.tif"),
            &ConverterConfig::default(),
        );
        assert!(matches!(result, Err(HwsdError::OutputPathMissing(_))));
    }

    #[test]
    fn test_create_cog_binary_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConverterConfig {
            binary: "/no/such/gdal_translate".to_string(),
            ..Default::default()
        };

        let result = create_cog(
            Path::new("T_SAND.nc4"),
            &dir.path().join("T_SAND.tif"),
            &config,
        );
        assert!(matches!(result, Err(HwsdError::ConversionFailure { .. })));
    }

    #[test]
    fn test_list_sources_skips_auxiliary_files() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["T_SAND.nc4", "AWC_CLASS.nc4", "HWSD_SOIL_CLM_RES.nc4", "README.txt"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }

        let sources = list_sources(dir.path()).unwrap();
        let names: Vec<_> = sources
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["AWC_CLASS.nc4", "T_SAND.nc4"]);
    }
}
