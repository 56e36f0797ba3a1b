//! STAC metadata for the Harmonized World Soil Database.
//!
//! Builds a STAC Collection and one Item per soil variable for the
//! regridded HWSD v1.2, and converts the source NetCDF files into
//! Cloud-Optimized GeoTIFFs.
//!
//! # Architecture
//!
//! - [`variables`]: the fixed catalog of 27 soil variables
//! - [`constants`]: dataset-wide extent, projection, providers and links
//! - [`stac`]: `create_collection` / `create_item` record builders
//! - [`cog`]: `gdal_translate` wrapper
//! - [`layout`]: writing and reading the on-disk catalog, validation
//!
//! Only the file size probe touches the referenced raster; everything else
//! is derived from static tables.

pub mod cog;
pub mod config;
pub mod constants;
pub mod error;
pub mod href;
pub mod layout;
mod size;
pub mod stac;
pub mod variables;

// Re-exports
pub use cog::{cog_output_path, converter_args, create_cog, create_cogs, list_sources};
pub use config::{ConverterConfig, HwsdConfig};
pub use error::{HwsdError, Result};
pub use href::{asset_name_from_href, ReadHrefModifier};
pub use layout::{
    discover_assets, ensure_valid, ensure_valid_collection, ensure_valid_item, read_collection,
    read_item, save_collection, save_item,
};
pub use size::probe_file_size;
pub use stac::{create_collection, create_item, get_geometry};
pub use variables::VariableDescriptor;
