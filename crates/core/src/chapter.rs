//! Chapters and volumes: the root entities a chapter-scoped context is built for.

use serde::{Deserialize, Serialize};

/// A volume groups chapters into their own ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Volume {
    pub id: String,

    pub title: String,

    /// Position of this volume in the whole story
    #[serde(default)]
    pub order: u32,
}

/// A single chapter with its foreign-key references into the story bible.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Chapter {
    /// Unique ID for this chapter
    pub id: String,

    /// Chapter title
    #[serde(default)]
    pub title: String,

    /// Owning volume, if the story is split into volumes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_id: Option<String>,

    /// Position of the chapter within its volume (or the whole story)
    #[serde(default)]
    pub number: u32,

    /// Full chapter text. Only populated when requested with content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Planning outline for the chapter
    #[serde(default)]
    pub outline: ChapterOutline,

    /// Characters appearing in the chapter, in reference order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub character_ids: Vec<String>,

    /// Locations used by the chapter, in reference order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub location_ids: Vec<String>,

    /// Foreshadowing touched by the chapter and what the chapter does with it
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub foreshadowing: Vec<ForeshadowingRef>,

    /// Story arc the chapter belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arc_id: Option<String>,
}

impl Chapter {
    /// Ids of foreshadowing explicitly hinted in this chapter, in reference order.
    pub fn hinted_foreshadowing_ids(&self) -> Vec<String> {
        self.foreshadowing
            .iter()
            .filter(|f| f.action == ForeshadowingAction::Hint)
            .map(|f| f.id.clone())
            .collect()
    }

    /// The chapter text, treating whitespace-only text as absent.
    pub fn text(&self) -> Option<&str> {
        self.content.as_deref().filter(|c| !c.trim().is_empty())
    }

    /// Drop the full text, as returned by listing lookups.
    pub fn without_content(mut self) -> Self {
        self.content = None;
        self
    }
}

/// Outline sub-fields. Each is optional; an outline with none set is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterOutline {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scenes: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ending_hook: Option<String>,
}

impl ChapterOutline {
    pub fn is_empty(&self) -> bool {
        self.goal.as_deref().is_none_or(|g| g.trim().is_empty())
            && self.scenes.iter().all(|s| s.trim().is_empty())
            && self.ending_hook.as_deref().is_none_or(|h| h.trim().is_empty())
    }
}

/// A chapter's reference to a foreshadowing entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeshadowingRef {
    pub id: String,
    pub action: ForeshadowingAction,
}

/// What a chapter does with a piece of foreshadowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForeshadowingAction {
    /// First introduced here
    Plant,
    /// Referenced again without paying off
    Hint,
    /// Paid off here
    Resolve,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hinted_ids_keep_reference_order() {
        let chapter = Chapter {
            id: "ch-3".into(),
            foreshadowing: vec![
                ForeshadowingRef { id: "f-2".into(), action: ForeshadowingAction::Hint },
                ForeshadowingRef { id: "f-1".into(), action: ForeshadowingAction::Plant },
                ForeshadowingRef { id: "f-0".into(), action: ForeshadowingAction::Hint },
            ],
            ..Default::default()
        };
        assert_eq!(chapter.hinted_foreshadowing_ids(), vec!["f-2", "f-0"]);
    }

    #[test]
    fn blank_text_is_absent() {
        let chapter = Chapter {
            id: "ch-1".into(),
            content: Some("  \n ".into()),
            ..Default::default()
        };
        assert!(chapter.text().is_none());
    }

    #[test]
    fn outline_with_blank_fields_is_empty() {
        let outline = ChapterOutline {
            goal: Some(" ".into()),
            scenes: vec![String::new()],
            ending_hook: None,
        };
        assert!(outline.is_empty());
        assert!(ChapterOutline::default().is_empty());
    }

    #[test]
    fn chapter_deserializes_with_defaults() {
        let json = r#"{"id": "ch-1", "foreshadowing": [{"id": "f-1", "action": "hint"}]}"#;
        let chapter: Chapter = serde_json::from_str(json).unwrap();
        assert_eq!(chapter.id, "ch-1");
        assert!(chapter.volume_id.is_none());
        assert!(chapter.outline.is_empty());
        assert_eq!(chapter.foreshadowing[0].action, ForeshadowingAction::Hint);
    }
}
