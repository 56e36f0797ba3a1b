//! SpatioTemporal Asset Catalog (STAC) record types.
//!
//! This crate provides serde-serializable types for STAC Collections and
//! Items, together with typed field blocks for the extensions used by the
//! HWSD catalog generator. It targets STAC v1.0.0.
//!
//! # Extensions
//!
//! Extension fields live in flattened `extra_fields` maps on the records.
//! Each supported extension has a typed block implementing [`Extension`]
//! which knows its schema URI and serializes to prefixed fields:
//!
//! - Scientific Citation (`sci:`)
//! - Projection (`proj:`)
//! - Raster (`raster:`)
//! - Label (`label:`)
//! - File (`file:`)
//! - Item Assets (`item_assets`)
//!
//! # Example
//!
//! ```rust
//! use stac_types::{Item, Geometry, Scientific};
//!
//! let geometry = Geometry::from_bbox(&[-180.0, -90.0, 180.0, 90.0]);
//! let mut item = Item::new("T_SAND", geometry, vec![-180.0, -90.0, 180.0, 90.0]);
//! item.apply_extension(&Scientific::new("10.3334/ORNLDAAC/1247", "Citation"));
//! assert!(item.properties.contains_key("sci:doi"));
//! ```

pub mod asset;
pub mod collection;
pub mod extensions;
pub mod extent;
pub mod geometry;
pub mod item;
pub mod link;
pub mod provider;
pub mod validate;

// Re-export commonly used types
pub use asset::{Asset, AssetDefinition};
pub use collection::Collection;
pub use extensions::{
    Extension, File, Label, LabelClasses, MappingObject, Projection, Raster, RasterBand,
    RasterDataType, Sampling, Scientific,
};
pub use extent::{Extent, SpatialExtent, TemporalExtent};
pub use geometry::Geometry;
pub use item::Item;
pub use link::Link;
pub use provider::{Provider, ProviderRole};
pub use validate::{Severity, ValidationIssue};

/// STAC specification version written into every record.
pub const STAC_VERSION: &str = "1.0.0";

/// Extension schema URIs.
pub mod schemas {
    /// Scientific Citation extension
    pub const SCIENTIFIC: &str = "https://stac-extensions.github.io/scientific/v1.0.0/schema.json";
    /// Projection extension
    pub const PROJECTION: &str = "https://stac-extensions.github.io/projection/v1.1.0/schema.json";
    /// Raster extension
    pub const RASTER: &str = "https://stac-extensions.github.io/raster/v1.1.0/schema.json";
    /// Label extension
    pub const LABEL: &str = "https://stac-extensions.github.io/label/v1.0.1/schema.json";
    /// File Info extension
    pub const FILE: &str = "https://stac-extensions.github.io/file/v2.1.0/schema.json";
    /// Item Assets definition extension
    pub const ITEM_ASSETS: &str = "https://stac-extensions.github.io/item-assets/v1.0.0/schema.json";
}

/// Media types used for STAC records and assets.
pub mod media_types {
    /// Cloud-Optimized GeoTIFF
    pub const COG: &str = "image/tiff; application=geotiff; profile=cloud-optimized";
    /// PDF documents
    pub const PDF: &str = "application/pdf";
    /// PNG images
    pub const PNG: &str = "image/png";
    /// Plain JSON
    pub const JSON: &str = "application/json";
    /// GeoJSON (STAC Items)
    pub const GEO_JSON: &str = "application/geo+json";
    /// HTML pages
    pub const HTML: &str = "text/html";
}

/// Standard link relation types.
pub mod rel {
    pub const SELF: &str = "self";
    pub const ROOT: &str = "root";
    pub const PARENT: &str = "parent";
    pub const COLLECTION: &str = "collection";
    pub const ITEM: &str = "item";
    pub const LICENSE: &str = "license";
    pub const VIA: &str = "via";
    pub const DESCRIBED_BY: &str = "describedby";
}
