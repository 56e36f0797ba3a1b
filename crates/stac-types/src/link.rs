//! Link objects connecting STAC records to each other and to external pages.

use serde::{Deserialize, Serialize};

/// A hyperlink to a related resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Link {
    /// The URI of the linked resource.
    pub href: String,

    /// The relationship type (e.g., "self", "root", "via", "license").
    pub rel: String,

    /// The media type of the linked resource.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,

    /// A human-readable title for the link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Link {
    /// Create a new link with required fields.
    pub fn new(href: impl Into<String>, rel: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            rel: rel.into(),
            type_: None,
            title: None,
        }
    }

    /// Set the media type.
    pub fn with_type(mut self, type_: impl Into<String>) -> Self {
        self.type_ = Some(type_.into());
        self
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Whether this link describes the record's position in a catalog tree
    /// (and is therefore rewritten when hrefs are normalized).
    pub fn is_hierarchical(&self) -> bool {
        matches!(
            self.rel.as_str(),
            crate::rel::SELF
                | crate::rel::ROOT
                | crate::rel::PARENT
                | crate::rel::COLLECTION
                | crate::rel::ITEM
        )
    }
}
