//! STAC Collections: dataset-level metadata.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::asset::{Asset, AssetDefinition};
use crate::extensions::{schema_for_field, Extension};
use crate::extent::Extent;
use crate::link::Link;
use crate::provider::Provider;
use crate::{schemas, STAC_VERSION};

/// A STAC Collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Collection {
    /// Type identifier (always "Collection").
    #[serde(rename = "type")]
    pub type_: String,

    pub stac_version: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stac_extensions: Vec<String>,

    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    pub description: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,

    pub license: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub providers: Vec<Provider>,

    pub extent: Extent,

    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub summaries: Map<String, Value>,

    pub links: Vec<Link>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub assets: BTreeMap<String, Asset>,

    /// Templates for the assets every member Item carries.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub item_assets: BTreeMap<String, AssetDefinition>,

    /// Top-level extension fields (e.g. `sci:doi`).
    #[serde(flatten)]
    pub extra_fields: Map<String, Value>,
}

impl Collection {
    /// Create a collection with required fields.
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        license: impl Into<String>,
        extent: Extent,
    ) -> Self {
        Self {
            type_: "Collection".to_string(),
            stac_version: STAC_VERSION.to_string(),
            stac_extensions: Vec::new(),
            id: id.into(),
            title: None,
            description: description.into(),
            keywords: Vec::new(),
            license: license.into(),
            providers: Vec::new(),
            extent,
            summaries: Map::new(),
            links: Vec::new(),
            assets: BTreeMap::new(),
            item_assets: BTreeMap::new(),
            extra_fields: Map::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords = keywords.iter().map(|k| k.to_string()).collect();
        self
    }

    pub fn with_providers(mut self, providers: Vec<Provider>) -> Self {
        self.providers = providers;
        self
    }

    pub fn add_link(&mut self, link: Link) {
        self.links.push(link);
    }

    /// Add a collection-level asset, declaring the schemas of its fields.
    pub fn add_asset(&mut self, key: impl Into<String>, asset: Asset) {
        let keys: Vec<String> = asset.extra_fields.keys().cloned().collect();
        for field in &keys {
            self.declare_schema_for(field);
        }
        self.assets.insert(key.into(), asset);
    }

    /// Register an item asset template.
    pub fn add_item_asset(&mut self, key: impl Into<String>, definition: AssetDefinition) {
        let keys: Vec<String> = definition.extra_fields.keys().cloned().collect();
        for field in &keys {
            self.declare_schema_for(field);
        }
        self.declare_schema(schemas::ITEM_ASSETS);
        self.item_assets.insert(key.into(), definition);
    }

    /// Set a summary (e.g. `proj:epsg` → `[4326]`).
    pub fn set_summary(&mut self, key: impl Into<String>, values: Value) {
        let key = key.into();
        self.declare_schema_for(&key);
        self.summaries.insert(key, values);
    }

    /// Merge an extension block into the top-level fields.
    pub fn apply_extension<E: Extension>(&mut self, extension: &E) {
        self.extra_fields.extend(extension.to_fields());
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

    /// Drop all hierarchical links (self, root, parent, item).
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
    use crate::extensions::Scientific;
    use crate::provider::ProviderRole;

    fn sample_collection() -> Collection {
        Collection::new(
            "hwsd",
            "Harmonized World Soil Database",
            "proprietary",
            Extent::new(&[-180.0, 90.0, 180.0, -90.0], None, None),
        )
    }

    #[test]
    fn test_new_collection_defaults() {
        let collection = sample_collection();
        assert_eq!(collection.type_, "Collection");
        assert_eq!(collection.stac_version, STAC_VERSION);
        assert!(collection.item_assets.is_empty());

        let json = serde_json::to_value(&collection).unwrap();
        assert!(json.get("item_assets").is_none());
        assert!(json.get("summaries").is_none());
    }

    #[test]
    fn test_scientific_fields_are_top_level() {
        let mut collection = sample_collection();
        collection.apply_extension(&Scientific::new("10.3334/ORNLDAAC/1247", "Wieder"));

        let json = serde_json::to_value(&collection).unwrap();
        assert_eq!(json["sci:doi"], "10.3334/ORNLDAAC/1247");
        assert_eq!(collection.extra_fields["sci:citation"], "Wieder");
        assert!(collection
            .stac_extensions
            .contains(&schemas::SCIENTIFIC.to_string()));
    }

    #[test]
    fn test_item_asset_declares_schema() {
        let mut collection = sample_collection();
        collection.add_item_asset(
            "documentation",
            AssetDefinition::new("application/pdf", &["metadata"]).with_title("Documentation"),
        );
        assert_eq!(collection.item_assets.len(), 1);
        assert!(collection
            .stac_extensions
            .contains(&schemas::ITEM_ASSETS.to_string()));
    }

    #[test]
    fn test_summary_declares_schema() {
        let mut collection = sample_collection();
        collection.set_summary("proj:epsg", serde_json::json!([4326]));
        assert_eq!(collection.summaries["proj:epsg"], serde_json::json!([4326]));
        assert!(collection
            .stac_extensions
            .contains(&schemas::PROJECTION.to_string()));
    }

    #[test]
    fn test_collection_roundtrip() {
        let mut collection = sample_collection()
            .with_title("HWSD")
            .with_keywords(&["Soil"])
            .with_providers(vec![Provider::new(
                "FAO",
                &[ProviderRole::Host],
                "https://www.fao.org/",
            )]);
        collection.apply_extension(&Scientific::new("doi", "citation"));

        let json = serde_json::to_string(&collection).unwrap();
        let parsed: Collection = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, collection);
    }
}
