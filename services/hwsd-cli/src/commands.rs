//! Subcommand implementations.

use anyhow::{bail, Context, Result};
use futures::future::try_join_all;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use hwsd::href::is_remote;
use hwsd::layout::COLLECTION_FILE;
use hwsd::{ConverterConfig, HwsdError};
use stac_types::validate::{validate_collection, validate_item};
use stac_types::{Collection, Item, ValidationIssue};

fn require_dir(path: &Path) -> Result<()> {
    if !path.is_dir() {
        return Err(HwsdError::OutputPathMissing(path.to_path_buf()).into());
    }
    Ok(())
}

/// Build the collection and write it to `<destination>/collection.json`.
pub fn create_collection(destination: &Path) -> Result<PathBuf> {
    require_dir(destination)?;

    let collection = hwsd::create_collection();
    hwsd::save_collection(&collection, &[], destination)
        .with_context(|| format!("Failed to write collection to {:?}", destination))?;

    let path = destination.join(COLLECTION_FILE);
    hwsd::ensure_valid_collection(&hwsd::read_collection(&path)?)?;

    info!(path = ?path, "Created collection");
    Ok(path)
}

/// Build the item for `source` and write it to `destination`.
pub async fn create_item(source: &str, destination: &Path) -> Result<Item> {
    if let Some(dir) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        require_dir(dir)?;
    }

    if !is_remote(source) && !Path::new(source).is_file() {
        warn!(source = %source, "Source is not a local file, file:size will be omitted");
    }

    let item = hwsd::create_item(source, None)
        .await
        .with_context(|| format!("Failed to create item for {}", source))?;
    hwsd::save_item(&item, destination)?;
    hwsd::ensure_valid_item(&item)?;

    Ok(item)
}

/// Build the collection plus one item per raster under `source` and write
/// the tree to `destination`.
///
/// `source` may be a directory (every registered raster in it) or a single
/// raster file.
pub async fn populate_collection(source: &Path, destination: &Path) -> Result<Vec<PathBuf>> {
    require_dir(destination)?;

    let assets = if source.is_dir() {
        hwsd::discover_assets(source)
            .with_context(|| format!("Failed to list rasters in {:?}", source))?
    } else {
        vec![source.to_path_buf()]
    };
    if assets.is_empty() {
        warn!(source = ?source, "No rasters found, writing an empty collection");
    }

    let hrefs: Vec<String> = assets
        .iter()
        .map(|p| p.to_string_lossy().into_owned())
        .collect();
    let items = try_join_all(hrefs.iter().map(|href| hwsd::create_item(href, None)))
        .await
        .context("Failed to create items")?;

    let collection = hwsd::create_collection();
    let written = hwsd::save_collection(&collection, &items, destination)?;

    // Validate what was written so the checks see the final links.
    hwsd::ensure_valid_collection(&hwsd::read_collection(&destination.join(COLLECTION_FILE))?)?;
    for path in written.iter().skip(1) {
        hwsd::ensure_valid_item(&hwsd::read_item(path)?)?;
    }

    info!(items = items.len(), destination = ?destination, "Populated collection");
    Ok(written)
}

/// Convert one NetCDF file into `<destination>/<NAME>.tif`.
pub fn create_cog(source: &Path, destination: &Path, config: &ConverterConfig) -> Result<PathBuf> {
    require_dir(destination)?;

    let output = hwsd::cog_output_path(source, destination);
    hwsd::create_cog(source, &output, config)
        .with_context(|| format!("Failed to convert {:?}", source))?;
    Ok(output)
}

/// Convert every NetCDF file in `source` into `destination`.
pub fn create_cogs(source: &Path, destination: &Path, config: &ConverterConfig) -> Result<Vec<PathBuf>> {
    require_dir(destination)?;

    let written = hwsd::create_cogs(source, destination, config)
        .with_context(|| format!("Failed to convert NetCDF files in {:?}", source))?;
    info!(count = written.len(), "Created COGs");
    Ok(written)
}

/// Check one record file, dispatching on its `type` field.
pub fn check_file(path: &Path) -> Result<Vec<ValidationIssue>> {
    let contents = fs::read_to_string(path).with_context(|| format!("Cannot read {:?}", path))?;
    let value: Value =
        serde_json::from_str(&contents).with_context(|| format!("Invalid JSON in {:?}", path))?;

    let record_type = value.get("type").and_then(Value::as_str).map(str::to_string);

    match record_type.as_deref() {
        Some("Collection") => {
            let collection: Collection = serde_json::from_value(value)
                .with_context(|| format!("{:?} is not a valid collection", path))?;
            Ok(validate_collection(&collection))
        }
        Some("Feature") => {
            let item: Item = serde_json::from_value(value)
                .with_context(|| format!("{:?} is not a valid item", path))?;
            Ok(validate_item(&item))
        }
        other => bail!("{:?} has unsupported type {:?}", path, other),
    }
}

/// Check every file, logging each issue. Fails if any file has errors.
pub fn validate(paths: &[PathBuf]) -> Result<usize> {
    let mut error_count = 0;

    for path in paths {
        let issues = check_file(path)?;
        for issue in &issues {
            if issue.is_error() {
                error_count += 1;
                warn!(path = ?path, "{}", issue);
            } else {
                info!(path = ?path, "{}", issue);
            }
        }
        if issues.is_empty() {
            info!(path = ?path, "Valid");
        }
    }

    if error_count > 0 {
        bail!("{} validation error(s) across {} file(s)", error_count, paths.len());
    }
    Ok(paths.len())
}
