//! Dataset-wide constants for the regridded HWSD v1.2.
//!
//! Every raster shares one global 0.05 degree grid, so the spatial,
//! temporal and projection metadata is fixed rather than read from files.

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use stac_types::{Link, Provider, ProviderRole};

pub const ID: &str = "hwsd";
pub const TITLE: &str = "Harmonized World Soil Database";
pub const DESCRIPTION: &str = "This data set describes select global soil parameters from the \
Harmonized World Soil Database (HWSD) v1.2, including additional calculated parameters such as \
area weighted soil organic carbon (kg C per m2), as high resolution NetCDF files. These data were \
regridded and upscaled from the Harmonized World Soil Database v1.2.";

pub const KEYWORDS: &[&str] = &[
    "HWSD",
    "Soil",
    "Soils",
    "Harmonized World Soil Database",
    "regridded",
];

pub const EPSG: u32 = 4326;

/// WKT2 (2019) definition of EPSG:4326.
pub const WKT2: &str = concat!(
    r#"GEOGCRS["WGS 84","#,
    r#"ENSEMBLE["World Geodetic System 1984 ensemble","#,
    r#"MEMBER["World Geodetic System 1984 (Transit)"],"#,
    r#"MEMBER["World Geodetic System 1984 (G730)"],"#,
    r#"MEMBER["World Geodetic System 1984 (G873)"],"#,
    r#"MEMBER["World Geodetic System 1984 (G1150)"],"#,
    r#"MEMBER["World Geodetic System 1984 (G1674)"],"#,
    r#"MEMBER["World Geodetic System 1984 (G1762)"],"#,
    r#"MEMBER["World Geodetic System 1984 (G2139)"],"#,
    r#"ELLIPSOID["WGS 84",6378137,298.257223563,LENGTHUNIT["metre",1]],"#,
    r#"ENSEMBLEACCURACY[2.0]],"#,
    r#"PRIMEM["Greenwich",0,ANGLEUNIT["degree",0.0174532925199433]],"#,
    r#"CS[ellipsoidal,2],"#,
    r#"AXIS["geodetic latitude (Lat)",north,ORDER[1],ANGLEUNIT["degree",0.0174532925199433]],"#,
    r#"AXIS["geodetic longitude (Lon)",east,ORDER[2],ANGLEUNIT["degree",0.0174532925199433]],"#,
    r#"USAGE[SCOPE["Horizontal component of 3D system."],AREA["World."],BBOX[-90,-180,90,180]],"#,
    r#"ID["EPSG",4326]]"#,
);

/// Whole-globe extent as published by the source, north latitude first.
pub const SPATIAL_EXTENT: [f64; 4] = [-180.0, 90.0, 180.0, -90.0];

/// Grid size as [rows, columns].
pub const SHAPE: [u32; 2] = [3600, 7200];

/// Affine transform of the 0.05 degree grid anchored at the north-west corner.
pub const TRANSFORM: [f64; 6] = [0.05, 0.0, -180.0, 0.0, -0.05, 90.0];

/// Pixel value marking cells without a measurement.
pub const NO_DATA: i32 = -1;

pub const LICENSE: &str = "proprietary";
pub const LICENSE_HREF: &str = "https://earthdata.nasa.gov/earth-observation-data/data-use-policy";
pub const LICENSE_TITLE: &str = "EOSDIS Data Use Policy";

pub const HOMEPAGE_1: &str =
    "https://www.fao.org/soils-portal/data-hub/soil-maps-and-databases/harmonized-world-soil-database-v12";
pub const HOMEPAGE_2: &str = "http://webarchive.iiasa.ac.at/Research/LUC/External-World-soil-database/HTML/SoilQualityData.html?sb=11";
pub const HOMEPAGE_REGRIDDED: &str = "https://daac.ornl.gov/SOILS/guides/HWSD.html";
pub const DOCUMENTATION: &str =
    "http://daac.ornl.gov/daacdata/global_soil/HWSD/comp/HWSD1.2_documentation.pdf";
pub const THUMBNAIL: &str = "https://daac.ornl.gov/SOILS/guides/HWSD_Fig1.png";

pub const CITATION: &str = "Wieder, W.R., J. Boehnert, G.B. Bonan, and M. Langseth. 2014. \
Regridded Harmonized World Soil Database v1.2. Data set. Available on-line [http://daac.ornl.gov] \
from Oak Ridge National Laboratory Distributed Active Archive Center, Oak Ridge, Tennessee, USA. \
http://dx.doi.org/10.3334/ORNLDAAC/1247 .";
pub const DOI: &str = "10.3334/ORNLDAAC/1247";

/// Auxiliary NetCDF shipped with the dataset that is not a soil variable.
pub const CLIMATE_RESOLUTION_FILE: &str = "HWSD_SOIL_CLM_RES.nc4";

/// Start and end of the single temporal interval covered by the dataset.
pub fn temporal_extent() -> (DateTime<Utc>, DateTime<Utc>) {
    (
        Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).single().unwrap_or_default(),
        Utc.with_ymd_and_hms(2000, 12, 31, 23, 59, 59)
            .single()
            .unwrap_or_default(),
    )
}

/// The temporal extent formatted as RFC 3339 strings with a `Z` suffix.
pub fn temporal_extent_strings() -> (String, String) {
    let (start, end) = temporal_extent();
    (
        start.to_rfc3339_opts(SecondsFormat::Secs, true),
        end.to_rfc3339_opts(SecondsFormat::Secs, true),
    )
}

/// Organizations that produced, processed and host the data.
pub fn providers() -> Vec<Provider> {
    use ProviderRole::*;

    vec![
        Provider::new(
            "FAO",
            &[Host, Licensor, Processor, Producer],
            "https://www.fao.org/",
        ),
        Provider::new("IIASA", &[Licensor, Producer], "https://iiasa.ac.at/"),
        Provider::new("ISRIC", &[Licensor, Producer], "https://www.isric.org/"),
        Provider::new("ISS-CAS", &[Licensor, Producer], "http://english.issas.cas.cn/"),
        Provider::new("JRC", &[Licensor, Producer], "https://esdac.jrc.ec.europa.eu/"),
        Provider::new("ORNL", &[Host, Processor], "https://www.ornl.gov/"),
        Provider::new("NCAR", &[Producer, Processor], "https://ncar.ucar.edu/"),
        Provider::new(
            "Microsoft",
            &[Host, Processor],
            "https://planetarycomputer.microsoft.com",
        ),
    ]
}

/// The license link attached to the collection.
pub fn license_link() -> Link {
    Link::new(LICENSE_HREF, stac_types::rel::LICENSE).with_title(LICENSE_TITLE)
}

/// Homepage mirrors, shared by the collection and every item.
pub fn homepage_links() -> Vec<Link> {
    use stac_types::{media_types::HTML, rel::VIA};

    vec![
        Link::new(HOMEPAGE_1, VIA)
            .with_type(HTML)
            .with_title("Homepage"),
        Link::new(HOMEPAGE_2, VIA)
            .with_type(HTML)
            .with_title("Homepage, Alternate"),
        Link::new(HOMEPAGE_REGRIDDED, VIA)
            .with_type(HTML)
            .with_title("Homepage, Regridded"),
    ]
}
