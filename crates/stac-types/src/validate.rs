//! Structural validation of STAC records.
//!
//! These checks cover required core fields and extension declarations. They
//! do not replace validation against the published JSON schemas.

use serde::Serialize;
use std::fmt;

use crate::asset::Asset;
use crate::collection::Collection;
use crate::extensions::schema_for_field;
use crate::item::Item;
use crate::link::Link;
use crate::STAC_VERSION;

/// How serious a validation finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// One validation finding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue {
    /// Id of the record the issue was found in.
    pub record_id: String,
    pub severity: Severity,
    pub message: String,
}

impl ValidationIssue {
    fn error(record_id: &str, message: impl Into<String>) -> Self {
        Self {
            record_id: record_id.to_string(),
            severity: Severity::Error,
            message: message.into(),
        }
    }

    fn warning(record_id: &str, message: impl Into<String>) -> Self {
        Self {
            record_id: record_id.to_string(),
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "[{}] {}: {}", level, self.record_id, self.message)
    }
}

/// Validate a collection.
pub fn validate_collection(collection: &Collection) -> Vec<ValidationIssue> {
    let id = collection.id.as_str();
    let mut issues = Vec::new();

    if collection.type_ != "Collection" {
        issues.push(ValidationIssue::error(
            id,
            format!("type must be \"Collection\", found \"{}\"", collection.type_),
        ));
    }
    check_common(id, &collection.stac_version, &collection.links, &mut issues);

    if collection.description.trim().is_empty() {
        issues.push(ValidationIssue::error(id, "description is empty"));
    }
    if collection.license.trim().is_empty() {
        issues.push(ValidationIssue::error(id, "license is empty"));
    }

    if collection.extent.spatial.bbox.is_empty() {
        issues.push(ValidationIssue::error(id, "spatial extent has no bounding box"));
    }
    for bbox in &collection.extent.spatial.bbox {
        check_bbox(id, bbox, &mut issues);
    }
    if collection.extent.temporal.interval.is_empty() {
        issues.push(ValidationIssue::error(id, "temporal extent has no interval"));
    }
    for interval in &collection.extent.temporal.interval {
        if interval.len() != 2 {
            issues.push(ValidationIssue::error(
                id,
                format!("temporal interval must have 2 entries, found {}", interval.len()),
            ));
        }
    }

    check_assets(id, collection.assets.values(), &mut issues);

    let mut fields: Vec<&str> = collection.extra_fields.keys().map(String::as_str).collect();
    fields.extend(collection.summaries.keys().map(String::as_str));
    for asset in collection.assets.values() {
        fields.extend(asset.extra_fields.keys().map(String::as_str));
    }
    for definition in collection.item_assets.values() {
        fields.extend(definition.extra_fields.keys().map(String::as_str));
    }
    if !collection.item_assets.is_empty() {
        fields.push("item_assets");
    }
    check_declared(id, &collection.stac_extensions, fields, &mut issues);

    issues
}

/// Validate an item.
pub fn validate_item(item: &Item) -> Vec<ValidationIssue> {
    let id = item.id.as_str();
    let mut issues = Vec::new();

    if item.type_ != "Feature" {
        issues.push(ValidationIssue::error(
            id,
            format!("type must be \"Feature\", found \"{}\"", item.type_),
        ));
    }
    check_common(id, &item.stac_version, &item.links, &mut issues);

    check_bbox(id, &item.bbox, &mut issues);
    if !item.geometry.is_closed() {
        issues.push(ValidationIssue::error(id, "geometry ring is not closed"));
    }
    if !item.geometry.is_ccw() {
        issues.push(ValidationIssue::warning(
            id,
            "exterior ring is not counter-clockwise",
        ));
    }

    let has_datetime = item
        .properties
        .get("datetime")
        .map(|v| v.is_string())
        .unwrap_or(false);
    let has_range = item.properties.contains_key("start_datetime")
        && item.properties.contains_key("end_datetime");
    if !item.properties.contains_key("datetime") {
        issues.push(ValidationIssue::error(id, "properties.datetime is missing"));
    } else if !has_datetime && !has_range {
        issues.push(ValidationIssue::error(
            id,
            "datetime is null but start_datetime/end_datetime are not both set",
        ));
    }

    if item.assets.is_empty() {
        issues.push(ValidationIssue::warning(id, "item has no assets"));
    }
    check_assets(id, item.assets.values(), &mut issues);

    let mut fields: Vec<&str> = item.properties.keys().map(String::as_str).collect();
    for asset in item.assets.values() {
        fields.extend(asset.extra_fields.keys().map(String::as_str));
    }
    check_declared(id, &item.stac_extensions, fields, &mut issues);

    issues
}

fn check_common(id: &str, stac_version: &str, links: &[Link], issues: &mut Vec<ValidationIssue>) {
    if id.trim().is_empty() {
        issues.push(ValidationIssue::error(id, "id is empty"));
    }
    if stac_version != STAC_VERSION {
        issues.push(ValidationIssue::warning(
            id,
            format!("STAC version is {}, expected {}", stac_version, STAC_VERSION),
        ));
    }
    for link in links {
        if link.href.trim().is_empty() || link.rel.trim().is_empty() {
            issues.push(ValidationIssue::error(
                id,
                format!("link with rel \"{}\" has an empty href or rel", link.rel),
            ));
        }
    }
}

fn check_bbox(id: &str, bbox: &[f64], issues: &mut Vec<ValidationIssue>) {
    if bbox.len() != 4 && bbox.len() != 6 {
        issues.push(ValidationIssue::error(
            id,
            format!("bbox must have 4 or 6 numbers, found {}", bbox.len()),
        ));
    }
}

fn check_assets<'a>(
    id: &str,
    assets: impl Iterator<Item = &'a Asset>,
    issues: &mut Vec<ValidationIssue>,
) {
    for asset in assets {
        if asset.href.trim().is_empty() {
            issues.push(ValidationIssue::error(id, "asset has an empty href"));
        }
    }
}

fn check_declared<'a>(
    id: &str,
    declared: &[String],
    fields: impl IntoIterator<Item = &'a str>,
    issues: &mut Vec<ValidationIssue>,
) {
    let mut reported: Vec<&'static str> = Vec::new();
    for field in fields {
        if let Some(uri) = schema_for_field(field) {
            if !declared.iter().any(|d| d == uri) && !reported.contains(&uri) {
                reported.push(uri);
                issues.push(ValidationIssue::error(
                    id,
                    format!("field \"{}\" used but {} is not in stac_extensions", field, uri),
                ));
            }
        }
    }
}
