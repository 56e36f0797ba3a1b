//! Assets and item-asset definitions.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::extensions::Extension;

/// A file referenced by a STAC record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Asset {
    pub href: String,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,

    /// Extension and custom fields.
    #[serde(flatten)]
    pub extra_fields: Map<String, Value>,
}

impl Asset {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            media_type: None,
            title: None,
            description: None,
            roles: Vec::new(),
            extra_fields: Map::new(),
        }
    }

    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_roles(mut self, roles: &[&str]) -> Self {
        self.roles = roles.iter().map(|r| r.to_string()).collect();
        self
    }

    /// Set a custom (non-extension) field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra_fields.insert(key.into(), value.into());
        self
    }

    /// Merge an extension block into this asset's fields.
    ///
    /// The owning record declares the schema when the asset is added to it.
    pub fn apply<E: Extension>(&mut self, extension: &E) {
        self.extra_fields.extend(extension.to_fields());
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

/// Template describing an asset that every Item of a collection carries,
/// without binding to a specific file (Item Assets extension).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetDefinition {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,

    #[serde(flatten)]
    pub extra_fields: Map<String, Value>,
}

impl AssetDefinition {
    pub fn new(media_type: impl Into<String>, roles: &[&str]) -> Self {
        Self {
            media_type: Some(media_type.into()),
            title: None,
            description: None,
            roles: roles.iter().map(|r| r.to_string()).collect(),
            extra_fields: Map::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Merge an extension block into this definition's fields.
    pub fn apply<E: Extension>(&mut self, extension: &E) {
        self.extra_fields.extend(extension.to_fields());
    }
}
