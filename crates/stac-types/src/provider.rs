//! Data provider descriptions for collections.

use serde::{Deserialize, Serialize};

/// The role an organization played for a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderRole {
    Licensor,
    Producer,
    Processor,
    Host,
}

/// An organization that captured, processed or hosts the data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Provider {
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<ProviderRole>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Provider {
    /// Create a provider with a name, role set and homepage.
    pub fn new(name: impl Into<String>, roles: &[ProviderRole], url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            roles: roles.to_vec(),
            url: Some(url.into()),
        }
    }
}
