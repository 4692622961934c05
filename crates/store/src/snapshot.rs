//! JSON story snapshots: the on-disk form of a whole story bible.
//!
//! One pretty-printed JSON document holds every entity collection plus the
//! optional world record. Human-inspectable and diff-friendly.
//!
//! Default location: `~/.storyloom/story.json`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use storyloom_core::{
    Chapter, Character, Foreshadowing, Hook, Location, Relationship, StoreError, StoryArc,
    Volume, World,
};
use tracing::debug;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorySnapshot {
    /// When the snapshot was last written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub volumes: Vec<Volume>,

    #[serde(default)]
    pub chapters: Vec<Chapter>,

    #[serde(default)]
    pub characters: Vec<Character>,

    #[serde(default)]
    pub relationships: Vec<Relationship>,

    #[serde(default)]
    pub locations: Vec<Location>,

    #[serde(default)]
    pub arcs: Vec<StoryArc>,

    #[serde(default)]
    pub foreshadowing: Vec<Foreshadowing>,

    #[serde(default)]
    pub hooks: Vec<Hook>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub world: Option<World>,
}

impl StorySnapshot {
    /// Read and parse a snapshot file.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let content = std::fs::read_to_string(path).map_err(|e| StoreError::Snapshot {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let snapshot: Self = serde_json::from_str(&content).map_err(|e| StoreError::Snapshot {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        debug!(
            path = %path.display(),
            chapters = snapshot.chapters.len(),
            characters = snapshot.characters.len(),
            "Story snapshot loaded"
        );
        Ok(snapshot)
    }

    /// Write the snapshot as pretty JSON, stamping `saved_at`.
    pub fn save(&mut self, path: &Path) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                StoreError::Storage(format!("Failed to create snapshot directory: {e}"))
            })?;
        }

        self.saved_at = Some(Utc::now());
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| StoreError::Storage(format!("Failed to write snapshot: {e}")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load_preserves_entities() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("story.json");

        let mut snapshot = StorySnapshot {
            chapters: vec![Chapter {
                id: "ch-1".into(),
                title: "Arrival".into(),
                content: Some("The gate was open.".into()),
                ..Default::default()
            }],
            characters: vec![Character {
                id: "c-1".into(),
                name: "Lin Yue".into(),
                ..Default::default()
            }],
            ..Default::default()
        };
        snapshot.save(&path).unwrap();
        assert!(snapshot.saved_at.is_some());

        let loaded = StorySnapshot::load(&path).unwrap();
        assert_eq!(loaded.chapters[0].title, "Arrival");
        assert_eq!(loaded.characters[0].name, "Lin Yue");
        assert!(loaded.world.is_none());
    }

    #[test]
    fn missing_file_is_snapshot_error() {
        let err = StorySnapshot::load(Path::new("/nonexistent/story.json")).unwrap_err();
        assert!(matches!(err, StoreError::Snapshot { .. }));
    }

    #[test]
    fn empty_document_is_an_empty_story() {
        let snapshot: StorySnapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.chapters.is_empty());
        assert!(snapshot.hooks.is_empty());
    }
}
