//! Command line driver for HWSD STAC generation.
//!
//! The binary (`hwsd`) parses [`Cli`], installs logging and dispatches to
//! the functions in [`commands`], which tests call directly.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hwsd")]
#[command(about = "STAC metadata and COG conversion for the Harmonized World Soil Database")]
pub struct Cli {
    /// YAML configuration file (converter settings)
    #[arg(long, global = true, env = "HWSD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level
    #[arg(long, global = true, env = "HWSD_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Json)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Create the STAC collection
    CreateCollection {
        /// Output directory for the collection
        #[arg(short, long)]
        destination: PathBuf,
    },

    /// Create a STAC item for one raster
    CreateItem {
        /// Href of the raster asset
        #[arg(short, long)]
        source: String,

        /// Output file for the item JSON
        #[arg(short, long)]
        destination: PathBuf,
    },

    /// Create the collection with an item for every raster found
    PopulateCollection {
        /// Directory of COGs, or a single COG
        #[arg(short, long)]
        source: PathBuf,

        /// Output directory for the populated collection
        #[arg(short, long)]
        destination: PathBuf,
    },

    /// Convert one NetCDF file to a COG
    CreateCog {
        /// NetCDF file to convert
        #[arg(short, long)]
        source: PathBuf,

        /// Output directory for the COG
        #[arg(short, long)]
        destination: PathBuf,
    },

    /// Convert every NetCDF file in a directory to COGs
    CreateCogs {
        /// Directory of NetCDF files
        #[arg(short, long)]
        source: PathBuf,

        /// Output directory for the COGs
        #[arg(short, long)]
        destination: PathBuf,
    },

    /// Run structural checks on collection and item JSON files
    Validate {
        /// Files to check
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
}
