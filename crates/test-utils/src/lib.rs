//! Shared test utilities for the hwsd workspace.
//!
//! Provides temporary output directories and fixture writers for fake
//! rasters, NetCDF sources and converters.
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{temp_test_dir, write_fake_raster};
//! ```

pub mod fixtures;
pub mod paths;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use paths::*;
