//! Content items: the uniform unit every layer produces and the
//! truncator selects from.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::token::estimate_tokens;

/// Importance tier. Higher survives truncation first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Priority(pub u32);

impl Priority {
    /// The chapter itself, its outline, and the continuity excerpt.
    pub const REQUIRED: Self = Self(1000);
    /// Entities the chapter references directly.
    pub const FK_EXPANSION: Self = Self(800);
    /// Open foreshadowing and hooks.
    pub const PLOT_AWARENESS: Self = Self(600);
    /// Power system and social rules.
    pub const WORLD_RULES: Self = Self(400);
    /// Caller-supplied items without their own priority.
    pub const USER_SELECTED: Self = Self(200);
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Semantic category of a content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    ChapterContent,
    ChapterOutline,
    ContinuityExcerpt,
    CharacterProfile,
    Relationship,
    Location,
    Arc,
    Foreshadowing,
    Hook,
    PowerSystem,
    SocialRules,
    UserSelected,
    /// Any tag this engine does not know
    #[serde(other)]
    Other,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ChapterContent => "chapter_content",
            Self::ChapterOutline => "chapter_outline",
            Self::ContinuityExcerpt => "continuity_excerpt",
            Self::CharacterProfile => "character_profile",
            Self::Relationship => "relationship",
            Self::Location => "location",
            Self::Arc => "arc",
            Self::Foreshadowing => "foreshadowing",
            Self::Hook => "hook",
            Self::PowerSystem => "power_system",
            Self::SocialRules => "social_rules",
            Self::UserSelected => "user_selected",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One atomic fact rendered as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    #[serde(rename = "type")]
    pub kind: ContentType,

    /// Source entity id, used for de-duplication
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub content: String,

    pub priority: Priority,

    /// Estimated size. Filled in by the truncator when not already known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
}

impl ContentItem {
    pub fn new(kind: ContentType, content: impl Into<String>, priority: Priority) -> Self {
        Self {
            kind,
            id: None,
            content: content.into(),
            priority,
            size: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// The known size, or a fresh estimate of the content.
    pub fn size(&self) -> usize {
        self.size.unwrap_or_else(|| estimate_tokens(&self.content))
    }
}

/// A caller-supplied item. `priority` is optional; when absent the item
/// lands in the User-Selected tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectedItem {
    #[serde(rename = "type", default = "default_selected_kind")]
    pub kind: ContentType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub content: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

fn default_selected_kind() -> ContentType {
    ContentType::UserSelected
}

impl SelectedItem {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            kind: ContentType::UserSelected,
            id: None,
            content: content.into(),
            priority: None,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }
}

impl From<SelectedItem> for ContentItem {
    fn from(item: SelectedItem) -> Self {
        Self {
            kind: item.kind,
            id: item.id,
            content: item.content,
            priority: item.priority.unwrap_or(Priority::USER_SELECTED),
            size: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_strictly_ordered() {
        let tiers = [
            Priority::REQUIRED,
            Priority::FK_EXPANSION,
            Priority::PLOT_AWARENESS,
            Priority::WORLD_RULES,
            Priority::USER_SELECTED,
        ];
        assert!(tiers.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn selected_item_without_priority_gets_lowest_tier() {
        let item: ContentItem = SelectedItem::new("Remember the jade token.").into();
        assert_eq!(item.priority, Priority::USER_SELECTED);
        assert_eq!(item.kind, ContentType::UserSelected);
    }

    #[test]
    fn selected_item_keeps_explicit_priority() {
        let item: ContentItem = SelectedItem::new("Must stay")
            .with_priority(Priority::REQUIRED)
            .into();
        assert_eq!(item.priority, Priority::REQUIRED);
    }

    #[test]
    fn size_is_estimated_until_known() {
        let mut item = ContentItem::new(ContentType::Hook, "hello world", Priority::REQUIRED);
        assert_eq!(item.size(), 2);
        item.size = Some(40);
        assert_eq!(item.size(), 40);
    }

    #[test]
    fn selected_items_parse_from_json() {
        let json = r#"[
            {"content": "plain note"},
            {"type": "character_profile", "id": "c-9", "content": "cameo", "priority": 800},
            {"type": "mood_board", "content": "rain, neon"}
        ]"#;
        let items: Vec<SelectedItem> = serde_json::from_str(json).unwrap();
        assert_eq!(items[0].kind, ContentType::UserSelected);
        assert!(items[0].priority.is_none());
        assert_eq!(items[1].priority, Some(Priority::FK_EXPANSION));
        assert_eq!(items[2].kind, ContentType::Other);
    }

    #[test]
    fn content_item_serializes_type_tag() {
        let item = ContentItem::new(ContentType::ContinuityExcerpt, "...", Priority::REQUIRED)
            .with_id("ch-1");
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains(r#""type":"continuity_excerpt""#));
        assert!(json.contains(r#""priority":1000"#));
        assert!(!json.contains("size"));
    }
}
