//! On-disk catalog layout.
//!
//! A collection is written as `<dest>/collection.json` with each item at
//! `<dest>/<id>/<id>.json`. All hierarchy links are relative, so the tree
//! can be moved or uploaded as a unit.

use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use stac_types::validate::{validate_collection, validate_item};
use stac_types::{media_types, rel, Collection, Item, Link, ValidationIssue};

use crate::error::{HwsdError, Result};
use crate::variables;

/// File name of the collection document.
pub const COLLECTION_FILE: &str = "collection.json";

/// Relative path of an item document inside the collection directory.
pub fn item_path(id: &str) -> PathBuf {
    PathBuf::from(id).join(format!("{}.json", id))
}

fn item_href(id: &str) -> String {
    format!("./{}/{}.json", id, id)
}

fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    debug!(path = ?path, "Wrote STAC record");
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

fn ensure_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(HwsdError::OutputPathMissing(path.to_path_buf()))
    }
}

/// Write `collection` and `items` under `destination`.
///
/// Existing hierarchy links are replaced. `destination` must exist; item
/// directories are created as needed. Returns the written file paths,
/// collection first.
pub fn save_collection(
    collection: &Collection,
    items: &[Item],
    destination: &Path,
) -> Result<Vec<PathBuf>> {
    ensure_dir(destination)?;

    let collection_href = format!("./{}", COLLECTION_FILE);
    let parent_href = format!("../{}", COLLECTION_FILE);

    let mut collection = collection.clone();
    collection.clear_hierarchy_links();
    collection.add_link(Link::new(&collection_href, rel::ROOT).with_type(media_types::JSON));
    collection.add_link(Link::new(&collection_href, rel::SELF).with_type(media_types::JSON));
    for item in items {
        collection.add_link(Link::new(item_href(&item.id), rel::ITEM).with_type(media_types::GEO_JSON));
    }

    let collection_path = destination.join(COLLECTION_FILE);
    write_json(&collection, &collection_path)?;
    let mut written = vec![collection_path];

    for item in items {
        let mut item = item.clone();
        item.clear_hierarchy_links();
        item.collection = Some(collection.id.clone());
        item.add_link(Link::new(&parent_href, rel::ROOT).with_type(media_types::JSON));
        item.add_link(Link::new(&parent_href, rel::PARENT).with_type(media_types::JSON));
        item.add_link(Link::new(&parent_href, rel::COLLECTION).with_type(media_types::JSON));

        let path = destination.join(item_path(&item.id));
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        write_json(&item, &path)?;
        written.push(path);
    }

    info!(
        destination = ?destination,
        items = items.len(),
        "Saved collection"
    );
    Ok(written)
}

/// Write a standalone item to `destination_file`.
///
/// The parent directory must exist.
pub fn save_item(item: &Item, destination_file: &Path) -> Result<()> {
    if let Some(dir) = destination_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(dir)?;
    }
    write_json(item, destination_file)?;
    info!(id = %item.id, path = ?destination_file, "Saved item");
    Ok(())
}

pub fn read_collection(path: &Path) -> Result<Collection> {
    read_json(path)
}

pub fn read_item(path: &Path) -> Result<Item> {
    read_json(path)
}

/// Raster files in `source_dir` named after a catalog variable, in catalog
/// order.
pub fn discover_assets(source_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut found: Vec<(usize, PathBuf)> = Vec::new();
    let order = variables::all_names();

    for entry in fs::read_dir(source_dir)? {
        let path = entry?.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("tif") {
            continue;
        }
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
        if !variables::contains(stem) {
            debug!(path = ?path, "Skipping raster with no matching variable");
            continue;
        }
        if let Some(index) = order.iter().position(|name| *name == stem) {
            found.push((index, path));
        }
    }

    found.sort_by_key(|(index, _)| *index);
    Ok(found.into_iter().map(|(_, path)| path).collect())
}

/// Turn error-severity issues into a [`HwsdError::Validation`]. Warnings are
/// logged and otherwise ignored.
pub fn ensure_valid(record: &str, issues: Vec<ValidationIssue>) -> Result<()> {
    for issue in issues.iter().filter(|i| !i.is_error()) {
        warn!(record = %record, "{}", issue);
    }

    let errors: Vec<ValidationIssue> = issues.into_iter().filter(|i| i.is_error()).collect();
    if errors.is_empty() {
        debug!(record = %record, "Record passed validation");
        Ok(())
    } else {
        Err(HwsdError::Validation {
            record: record.to_string(),
            issues: errors,
        })
    }
}

pub fn ensure_valid_collection(collection: &Collection) -> Result<()> {
    ensure_valid(&collection.id, validate_collection(collection))
}

pub fn ensure_valid_item(item: &Item) -> Result<()> {
    ensure_valid(&item.id, validate_item(item))
}
