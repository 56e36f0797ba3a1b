//! Collection and Item builders.
//!
//! Every field except `file:size` comes from the dataset constants and the
//! variable catalog, so the same inputs always produce the same records.

use serde_json::json;
use tracing::{debug, info, instrument};

use stac_types::{
    media_types, rel, Asset, AssetDefinition, Collection, Extent, File, Geometry, Item, Label,
    Link, MappingObject, Projection, Raster, RasterBand, Sampling, Scientific,
};

use crate::constants::{self, DOCUMENTATION, EPSG, NO_DATA, SHAPE, SPATIAL_EXTENT, TRANSFORM, WKT2};
use crate::error::Result;
use crate::href::{asset_name_from_href, resolve_read_href, ReadHrefModifier};
use crate::size::probe_file_size;
use crate::variables::{self, VariableDescriptor};

/// Asset key of the raster in every item.
pub const DATA_ASSET: &str = "data";
/// Asset key of the dataset documentation.
pub const DOCUMENTATION_ASSET: &str = "documentation";
/// Asset key of the collection thumbnail.
pub const THUMBNAIL_ASSET: &str = "thumbnail";

/// Whole-globe footprint shared by the collection and all items.
pub fn get_geometry() -> Geometry {
    Geometry::from_bbox(&SPATIAL_EXTENT)
}

fn projection() -> Projection {
    Projection {
        epsg: Some(EPSG),
        wkt2: Some(WKT2.to_string()),
        bbox: Some(SPATIAL_EXTENT.to_vec()),
        geometry: Some(get_geometry()),
        shape: Some(SHAPE),
        transform: Some(TRANSFORM.to_vec()),
    }
}

fn raster(variable: &VariableDescriptor) -> Raster {
    Raster::single_band(RasterBand::new(
        NO_DATA as f64,
        Sampling::Area,
        variable.data_type,
    ))
}

fn scientific() -> Scientific {
    Scientific::new(constants::DOI, constants::CITATION)
}

fn extent() -> Extent {
    let (start, end) = constants::temporal_extent_strings();
    Extent::new(&SPATIAL_EXTENT, Some(start), Some(end))
}

/// Build the HWSD collection.
pub fn create_collection() -> Collection {
    let mut collection = Collection::new(
        constants::ID,
        constants::DESCRIPTION,
        constants::LICENSE,
        extent(),
    )
    .with_title(constants::TITLE)
    .with_keywords(constants::KEYWORDS)
    .with_providers(constants::providers());

    collection.add_link(constants::license_link());
    for link in constants::homepage_links() {
        collection.add_link(link);
    }
    collection.add_link(
        Link::new(DOCUMENTATION, rel::DESCRIBED_BY)
            .with_type(media_types::PDF)
            .with_title("Documentation"),
    );

    collection.set_summary("proj:epsg", json!([EPSG]));
    collection.apply_extension(&scientific());

    collection.add_asset(
        DOCUMENTATION_ASSET,
        Asset::new(DOCUMENTATION)
            .with_media_type(media_types::PDF)
            .with_roles(&["metadata"])
            .with_title("Documentation"),
    );
    collection.add_asset(
        THUMBNAIL_ASSET,
        Asset::new(constants::THUMBNAIL)
            .with_media_type(media_types::PNG)
            .with_roles(&["thumbnail"])
            .with_title("Thumbnail"),
    );

    let projection = projection();
    for variable in variables::iter() {
        let mut definition = AssetDefinition::new(media_types::COG, &data_roles(variable))
            .with_title(variable.name)
            .with_description(variable.description);
        definition.apply(&projection);
        definition.apply(&raster(variable));
        collection.add_item_asset(variable.name, definition);
    }
    collection.add_item_asset(
        DOCUMENTATION_ASSET,
        AssetDefinition::new(media_types::PDF, &["metadata"]).with_title("Documentation"),
    );

    debug!(
        item_assets = collection.item_assets.len(),
        "Built HWSD collection"
    );
    collection
}

fn data_roles(variable: &VariableDescriptor) -> Vec<&'static str> {
    if variable.is_categorical() {
        vec!["data", "labels", "labels-raster"]
    } else {
        vec!["data"]
    }
}

fn label(variable: &VariableDescriptor, labels: &[(i64, &str)]) -> Label {
    Label::raster_classification(
        variable.description,
        labels.iter().map(|(_, label)| label.to_string()).collect(),
    )
}

fn file_values(labels: &[(i64, &str)]) -> Vec<MappingObject> {
    labels
        .iter()
        .map(|(code, label)| MappingObject {
            values: vec![*code],
            summary: label.to_string(),
        })
        .collect()
}

fn data_asset(href: &str, variable: &VariableDescriptor, size: Option<u64>) -> Asset {
    let mut asset = Asset::new(href)
        .with_media_type(media_types::COG)
        .with_roles(&data_roles(variable))
        .with_title(variable.name)
        .with_description(variable.description)
        .with_field("unit", variable.unit);

    if let Some(notes) = variable.notes {
        asset = asset.with_field("notes", notes);
    }

    asset.apply(&projection());
    asset.apply(&raster(variable));

    let file = File {
        size,
        values: variable.class_labels.map(file_values),
    };
    if !file.is_empty() {
        asset.apply(&file);
    }

    asset
}

/// Build the item for the raster at `asset_href`.
///
/// The variable is identified by the href basename. The optional modifier
/// rewrites the href used to read the file; the stored href is unchanged.
#[instrument(skip(read_href_modifier), fields(variable))]
pub async fn create_item(
    asset_href: &str,
    read_href_modifier: Option<&ReadHrefModifier>,
) -> Result<Item> {
    let name = asset_name_from_href(asset_href);
    let variable = variables::lookup(&name)?;
    tracing::Span::current().record("variable", variable.name);

    let geometry = get_geometry();
    let mut item = Item::new(variable.name, geometry, SPATIAL_EXTENT.to_vec());

    let (start, end) = constants::temporal_extent_strings();
    item.set_datetime_range(&start, &end);
    item.set_property("title", constants::TITLE);
    item.set_property("description", constants::DESCRIPTION);

    for link in constants::homepage_links() {
        item.add_link(link);
    }

    item.apply_extension(&scientific());
    item.apply_extension(&projection());

    if let Some(labels) = variable.class_labels {
        item.apply_extension(&label(variable, labels));
    }

    item.add_asset(
        DOCUMENTATION_ASSET,
        Asset::new(DOCUMENTATION)
            .with_media_type(media_types::PDF)
            .with_roles(&["metadata"])
            .with_title("HWSD Documentation"),
    );

    let read_href = resolve_read_href(asset_href, read_href_modifier);
    let size = probe_file_size(&read_href).await;

    item.add_asset(DATA_ASSET, data_asset(asset_href, variable, size));

    info!(
        id = %item.id,
        categorical = variable.is_categorical(),
        file_size = ?size,
        "Created HWSD item"
    );
    Ok(item)
}
