//! Characters and the relationships between them.

use serde::{Deserialize, Serialize};

/// A character sheet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Character {
    pub id: String,

    /// Display name
    pub name: String,

    /// Narrative role (protagonist, mentor, antagonist, ...)
    #[serde(default)]
    pub role: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personality: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appearance: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub traits: Vec<String>,
}

/// A directed relationship between two characters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Relationship {
    pub id: String,

    pub source_id: String,

    pub target_id: String,

    /// Kind of bond ("mentor", "rival", "sibling", ...)
    pub relation_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Relationship {
    /// Whether both endpoints are in `ids`.
    pub fn is_within(&self, ids: &[String]) -> bool {
        ids.contains(&self.source_id) && ids.contains(&self.target_id)
    }
}
