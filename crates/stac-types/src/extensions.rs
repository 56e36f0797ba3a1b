//! Typed field blocks for STAC extensions.
//!
//! Each block serializes to the prefixed field names defined by its
//! extension and is merged into the `properties` / `extra_fields` map of the
//! record it is applied to. The record then declares the schema URI in its
//! `stac_extensions` list.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::geometry::Geometry;
use crate::schemas;

/// A block of extension fields with a known schema.
pub trait Extension: Serialize {
    /// The JSON schema URI declared in `stac_extensions`.
    const SCHEMA_URI: &'static str;

    /// Serialize the block into its prefixed fields.
    fn to_fields(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(fields)) => fields,
            _ => Map::new(),
        }
    }
}

/// Map a field name to the schema URI of the extension that defines it.
///
/// Returns `None` for core STAC fields.
pub fn schema_for_field(field: &str) -> Option<&'static str> {
    let prefix = field.split_once(':').map(|(p, _)| p).unwrap_or(field);
    match prefix {
        "sci" => Some(schemas::SCIENTIFIC),
        "proj" => Some(schemas::PROJECTION),
        "raster" => Some(schemas::RASTER),
        "label" => Some(schemas::LABEL),
        "file" => Some(schemas::FILE),
        "item_assets" => Some(schemas::ITEM_ASSETS),
        _ => None,
    }
}

// ============================================================================
// Scientific Citation
// ============================================================================

/// Scientific Citation extension fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Scientific {
    #[serde(rename = "sci:doi", skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,

    #[serde(rename = "sci:citation", skip_serializing_if = "Option::is_none")]
    pub citation: Option<String>,
}

impl Scientific {
    pub fn new(doi: impl Into<String>, citation: impl Into<String>) -> Self {
        Self {
            doi: Some(doi.into()),
            citation: Some(citation.into()),
        }
    }
}

impl Extension for Scientific {
    const SCHEMA_URI: &'static str = schemas::SCIENTIFIC;
}

// ============================================================================
// Projection
// ============================================================================

/// Projection extension fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Projection {
    #[serde(rename = "proj:epsg", skip_serializing_if = "Option::is_none")]
    pub epsg: Option<u32>,

    #[serde(rename = "proj:wkt2", skip_serializing_if = "Option::is_none")]
    pub wkt2: Option<String>,

    #[serde(rename = "proj:bbox", skip_serializing_if = "Option::is_none")]
    pub bbox: Option<Vec<f64>>,

    #[serde(rename = "proj:geometry", skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,

    /// Raster grid size as [rows, columns].
    #[serde(rename = "proj:shape", skip_serializing_if = "Option::is_none")]
    pub shape: Option<[u32; 2]>,

    /// Affine transform coefficients in GDAL order with the 3x3 row dropped:
    /// [a, b, c, d, e, f].
    #[serde(rename = "proj:transform", skip_serializing_if = "Option::is_none")]
    pub transform: Option<Vec<f64>>,
}

impl Extension for Projection {
    const SCHEMA_URI: &'static str = schemas::PROJECTION;
}

// ============================================================================
// Raster
// ============================================================================

/// Pixel storage type of a raster band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RasterDataType {
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
}

impl RasterDataType {
    /// The STAC name of the type (e.g. "int16").
    pub fn as_str(&self) -> &'static str {
        match self {
            RasterDataType::Int8 => "int8",
            RasterDataType::Int16 => "int16",
            RasterDataType::Int32 => "int32",
            RasterDataType::Int64 => "int64",
            RasterDataType::UInt8 => "uint8",
            RasterDataType::UInt16 => "uint16",
            RasterDataType::UInt32 => "uint32",
            RasterDataType::UInt64 => "uint64",
            RasterDataType::Float32 => "float32",
            RasterDataType::Float64 => "float64",
        }
    }

    /// The GDAL output type name, as accepted by `gdal_translate -ot`.
    pub fn gdal_name(&self) -> &'static str {
        match self {
            RasterDataType::Int8 => "Int8",
            RasterDataType::Int16 => "Int16",
            RasterDataType::Int32 => "Int32",
            RasterDataType::Int64 => "Int64",
            RasterDataType::UInt8 => "Byte",
            RasterDataType::UInt16 => "UInt16",
            RasterDataType::UInt32 => "UInt32",
            RasterDataType::UInt64 => "UInt64",
            RasterDataType::Float32 => "Float32",
            RasterDataType::Float64 => "Float64",
        }
    }

    /// Whether values of this type are integers.
    pub fn is_integer(&self) -> bool {
        !matches!(self, RasterDataType::Float32 | RasterDataType::Float64)
    }
}

/// How a pixel value relates to the area it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sampling {
    Area,
    Point,
}

/// One band of a raster asset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RasterBand {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodata: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sampling: Option<Sampling>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<RasterDataType>,
}

impl RasterBand {
    pub fn new(nodata: f64, sampling: Sampling, data_type: RasterDataType) -> Self {
        Self {
            nodata: Some(nodata),
            sampling: Some(sampling),
            data_type: Some(data_type),
        }
    }
}

/// Raster extension fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Raster {
    #[serde(rename = "raster:bands")]
    pub bands: Vec<RasterBand>,
}

impl Raster {
    pub fn single_band(band: RasterBand) -> Self {
        Self { bands: vec![band] }
    }
}

impl Extension for Raster {
    const SCHEMA_URI: &'static str = schemas::RASTER;
}

// ============================================================================
// Label
// ============================================================================

/// Whether labels are vector features or raster pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelType {
    Vector,
    Raster,
}

/// One set of class values. `name` is null for raster labels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabelClasses {
    pub name: Option<String>,
    pub classes: Vec<String>,
}

/// Label extension fields (applied to Item properties).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Label {
    #[serde(rename = "label:description")]
    pub description: String,

    #[serde(rename = "label:type")]
    pub label_type: LabelType,

    /// Feature property names holding labels. Always null for raster labels.
    #[serde(rename = "label:properties")]
    pub properties: Option<Vec<String>>,

    #[serde(rename = "label:classes", default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<LabelClasses>,

    #[serde(rename = "label:tasks", default, skip_serializing_if = "Vec::is_empty")]
    pub tasks: Vec<String>,
}

impl Label {
    /// A raster classification label with one unnamed class set.
    pub fn raster_classification(description: impl Into<String>, classes: Vec<String>) -> Self {
        Self {
            description: description.into(),
            label_type: LabelType::Raster,
            properties: None,
            classes: vec![LabelClasses {
                name: None,
                classes,
            }],
            tasks: vec!["classification".to_string()],
        }
    }
}

impl Extension for Label {
    const SCHEMA_URI: &'static str = schemas::LABEL;
}

// ============================================================================
// File
// ============================================================================

/// Pairs pixel values with a human-readable summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MappingObject {
    pub values: Vec<i64>,
    pub summary: String,
}

/// File Info extension fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct File {
    #[serde(rename = "file:size", skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    #[serde(rename = "file:values", skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<MappingObject>>,
}

impl File {
    /// Whether the block carries no fields.
    pub fn is_empty(&self) -> bool {
        self.size.is_none() && self.values.is_none()
    }
}

impl Extension for File {
    const SCHEMA_URI: &'static str = schemas::FILE;
}
