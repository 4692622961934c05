//! Plot structure: story arcs, foreshadowing, and chapter-end hooks.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A story arc, optionally divided into sections with their own progress.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoryArc {
    pub id: String,

    pub name: String,

    /// Arc category ("main", "side", "character", ...)
    #[serde(default)]
    pub arc_type: String,

    #[serde(default)]
    pub status: ArcStatus,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<ArcSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArcSection {
    pub name: String,

    #[serde(default)]
    pub status: ArcStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArcStatus {
    #[default]
    Planned,
    InProgress,
    Completed,
}

impl fmt::Display for ArcStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Planned => "planned",
            Self::InProgress => "in progress",
            Self::Completed => "completed",
        };
        f.write_str(s)
    }
}

/// A planted clue waiting to be paid off.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Foreshadowing {
    pub id: String,

    pub content: String,

    #[serde(default)]
    pub status: ForeshadowingStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForeshadowingStatus {
    /// Planned but not yet planted in the text
    #[default]
    Pending,
    /// Planted and still open
    Active,
    Resolved,
    Abandoned,
}

impl fmt::Display for ForeshadowingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Resolved => "resolved",
            Self::Abandoned => "abandoned",
        };
        f.write_str(s)
    }
}

/// A reader hook attached to the end of a chapter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hook {
    pub id: String,

    pub chapter_id: String,

    pub content: String,

    #[serde(default)]
    pub strength: HookStrength,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HookStrength {
    Weak,
    #[default]
    Medium,
    Strong,
}

impl fmt::Display for HookStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
        };
        f.write_str(s)
    }
}
