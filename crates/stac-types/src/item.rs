//! STAC Items: GeoJSON features describing one set of assets.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::asset::Asset;
use crate::extensions::{schema_for_field, Extension};
use crate::geometry::Geometry;
use crate::link::Link;
use crate::STAC_VERSION;

/// A STAC Item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    /// Type identifier (always "Feature").
    #[serde(rename = "type")]
    pub type_: String,

    pub stac_version: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stac_extensions: Vec<String>,

    pub id: String,

    pub geometry: Geometry,

    pub bbox: Vec<f64>,

    /// Core and extension properties, including `datetime`.
    pub properties: Map<String, Value>,

    pub links: Vec<Link>,

    pub assets: BTreeMap<String, Asset>,

    /// Id of the parent collection, set when the item joins one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
}

impl Item {
    /// Create an item with a null `datetime`.
    pub fn new(id: impl Into<String>, geometry: Geometry, bbox: Vec<f64>) -> Self {
        let mut properties = Map::new();
        properties.insert("datetime".to_string(), Value::Null);

        Self {
            type_: "Feature".to_string(),
            stac_version: STAC_VERSION.to_string(),
            stac_extensions: Vec::new(),
            id: id.into(),
            geometry,
            bbox,
            properties,
            links: Vec::new(),
            assets: BTreeMap::new(),
            collection: None,
        }
    }

    /// Describe the item as covering `[start, end]`. `datetime` is set to the
    /// start of the range.
    pub fn set_datetime_range(&mut self, start: &str, end: &str) {
        self.properties
            .insert("datetime".to_string(), Value::from(start));
        self.properties
            .insert("start_datetime".to_string(), Value::from(start));
        self.properties
            .insert("end_datetime".to_string(), Value::from(end));
    }

    /// Set a core or custom property.
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        self.declare_schema_for(&key);
        self.properties.insert(key, value.into());
    }

    pub fn add_link(&mut self, link: Link) {
        self.links.push(link);
    }

    /// Add an asset, declaring the schemas of any extension fields it carries.
    pub fn add_asset(&mut self, key: impl Into<String>, asset: Asset) {
        let keys: Vec<String> = asset.extra_fields.keys().cloned().collect();
        for field in &keys {
            self.declare_schema_for(field);
        }
        self.assets.insert(key.into(), asset);
    }

    /// Merge an extension block into the item properties.
    pub fn apply_extension<E: Extension>(&mut self, extension: &E) {
        self.properties.extend(extension.to_fields());
        self.declare_schema(E::SCHEMA_URI);
    }

    /// Add a schema URI to `stac_extensions` if not already present.
    pub fn declare_schema(&mut self, uri: &str) {
        if !self.stac_extensions.iter().any(|s| s == uri) {
            self.stac_extensions.push(uri.to_string());
        }
    }

    fn declare_schema_for(&mut self, field: &str) {
        if let Some(uri) = schema_for_field(field) {
            self.declare_schema(uri);
        }
    }

    /// Drop all hierarchical links (self, root, parent, collection).
    pub fn clear_hierarchy_links(&mut self) {
        self.links.retain(|l| !l.is_hierarchical());
    }

    pub fn links_with_rel<'a>(&'a self, rel: &'a str) -> impl Iterator<Item = &'a Link> + 'a {
        self.links.iter().filter(move |l| l.rel == rel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extensions::{Projection, Raster, RasterBand, RasterDataType, Sampling};
    use crate::schemas;

    fn sample_item() -> Item {
        let bbox = vec![-180.0, -90.0, 180.0, 90.0];
        Item::new("T_SAND", Geometry::from_bbox(&bbox), bbox)
    }

    #[test]
    fn test_new_item_has_null_datetime() {
        let item = sample_item();
        assert_eq!(item.type_, "Feature");
        assert_eq!(item.stac_version, STAC_VERSION);
        assert!(item.properties["datetime"].is_null());
        assert!(item.stac_extensions.is_empty());
    }

    #[test]
    fn test_datetime_range() {
        let mut item = sample_item();
        item.set_datetime_range("2000-01-01T00:00:00Z", "2000-12-31T23:59:59Z");
        assert_eq!(item.properties["datetime"], "2000-01-01T00:00:00Z");
        assert_eq!(item.properties["end_datetime"], "2000-12-31T23:59:59Z");
    }

    #[test]
    fn test_apply_extension_declares_schema_once() {
        let mut item = sample_item();
        let proj = Projection {
            epsg: Some(4326),
            ..Default::default()
        };
        item.apply_extension(&proj);
        item.apply_extension(&proj);

        assert_eq!(item.properties["proj:epsg"], 4326);
        assert_eq!(item.stac_extensions, vec![schemas::PROJECTION.to_string()]);
    }

    #[test]
    fn test_add_asset_declares_asset_schemas() {
        let mut item = sample_item();
        let mut asset = Asset::new("T_SAND.tif");
        asset.apply(&Raster::single_band(RasterBand::new(
            -1.0,
            Sampling::Area,
            RasterDataType::Float64,
        )));
        item.add_asset("data", asset);

        assert!(item.stac_extensions.contains(&schemas::RASTER.to_string()));
        assert!(item.assets.contains_key("data"));
    }

    #[test]
    fn test_clear_hierarchy_links_keeps_via() {
        let mut item = sample_item();
        item.add_link(Link::new("https://example.com", "via"));
        item.add_link(Link::new("../collection.json", "parent"));
        item.clear_hierarchy_links();
        assert_eq!(item.links.len(), 1);
        assert_eq!(item.links_with_rel("via").count(), 1);
    }

    #[test]
    fn test_item_json_roundtrip() {
        let mut item = sample_item();
        item.set_datetime_range("2000-01-01T00:00:00Z", "2000-12-31T23:59:59Z");
        item.add_asset("data", Asset::new("T_SAND.tif").with_roles(&["data"]));

        let json = serde_json::to_string_pretty(&item).unwrap();
        let parsed: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, item);
    }
}
