//! In-memory story store: backs the CLI and every builder test.
//!
//! Holds one [`StorySnapshot`] behind a lock and answers every collaborator
//! trait from it. Reads clone out of the snapshot, so results never alias
//! stored data.

use async_trait::async_trait;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use storyloom_core::{
    ArcSource, Chapter, ChapterSource, Character, CharacterSource, Foreshadowing,
    ForeshadowingSource, ForeshadowingStatus, Hook, HookSource, Location, LocationSource,
    Relationship, RelationshipSource, StoreError, StoryArc, World, WorldSource,
};
use tokio::sync::RwLock;

use crate::snapshot::StorySnapshot;

pub struct InMemoryStore {
    data: Arc<RwLock<StorySnapshot>>,
}

impl InMemoryStore {
    pub fn new(snapshot: StorySnapshot) -> Self {
        Self {
            data: Arc::new(RwLock::new(snapshot)),
        }
    }

    /// Load a store from a JSON snapshot file.
    pub fn from_path(path: &Path) -> Result<Self, StoreError> {
        Ok(Self::new(StorySnapshot::load(path)?))
    }

    /// Write the current story data as a JSON snapshot.
    pub async fn save_to(&self, path: &Path) -> Result<(), StoreError> {
        let mut data = self.data.write().await;
        data.save(path)
    }

    /// A copy of the current story data.
    pub async fn snapshot(&self) -> StorySnapshot {
        self.data.read().await.clone()
    }

    /// Mutate the story data in place.
    pub async fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut StorySnapshot),
    {
        let mut data = self.data.write().await;
        f(&mut data);
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new(StorySnapshot::default())
    }
}

/// Pick entities in the order of `ids`, skipping unknown and repeated ids.
fn pick_in_order<T: Clone>(all: &[T], ids: &[String], id_of: impl Fn(&T) -> &str) -> Vec<T> {
    let mut seen = HashSet::new();
    ids.iter()
        .filter(|id| seen.insert(id.as_str()))
        .filter_map(|id| all.iter().find(|e| id_of(e) == id.as_str()).cloned())
        .collect()
}

/// Chapters in reading order.
///
/// Scoped to a volume: by `(number, id)`. Story-wide: by the owning volume's
/// `order` first (chapters outside any known volume lead), then `(number, id)`.
fn reading_order(snapshot: &StorySnapshot, volume_id: Option<&str>) -> Vec<Chapter> {
    let volume_order = |vid: Option<&str>| -> Option<u32> {
        let vid = vid?;
        snapshot.volumes.iter().find(|v| v.id == vid).map(|v| v.order)
    };

    let mut chapters: Vec<&Chapter> = snapshot
        .chapters
        .iter()
        .filter(|c| volume_id.is_none_or(|v| c.volume_id.as_deref() == Some(v)))
        .collect();

    chapters.sort_by(|a, b| {
        volume_order(a.volume_id.as_deref())
            .cmp(&volume_order(b.volume_id.as_deref()))
            .then(a.number.cmp(&b.number))
            .then_with(|| a.id.cmp(&b.id))
    });

    chapters
        .into_iter()
        .map(|c| c.clone().without_content())
        .collect()
}

#[async_trait]
impl ChapterSource for InMemoryStore {
    async fn get_chapter(&self, id: &str, with_content: bool) -> Result<Option<Chapter>, StoreError> {
        let data = self.data.read().await;
        let chapter = data.chapters.iter().find(|c| c.id == id).cloned();
        Ok(if with_content {
            chapter
        } else {
            chapter.map(Chapter::without_content)
        })
    }

    async fn list_chapters(&self, volume_id: Option<&str>) -> Result<Vec<Chapter>, StoreError> {
        let data = self.data.read().await;
        Ok(reading_order(&data, volume_id))
    }
}

#[async_trait]
impl CharacterSource for InMemoryStore {
    async fn get_characters(&self, ids: &[String]) -> Result<Vec<Character>, StoreError> {
        let data = self.data.read().await;
        Ok(pick_in_order(&data.characters, ids, |c| c.id.as_str()))
    }

    async fn list_characters(&self) -> Result<Vec<Character>, StoreError> {
        Ok(self.data.read().await.characters.clone())
    }
}

#[async_trait]
impl RelationshipSource for InMemoryStore {
    async fn relationships_among(
        &self,
        character_ids: &[String],
    ) -> Result<Vec<Relationship>, StoreError> {
        let data = self.data.read().await;
        Ok(data
            .relationships
            .iter()
            .filter(|r| r.is_within(character_ids))
            .cloned()
            .collect())
    }

    async fn list_relationships(&self) -> Result<Vec<Relationship>, StoreError> {
        Ok(self.data.read().await.relationships.clone())
    }
}

#[async_trait]
impl LocationSource for InMemoryStore {
    async fn get_locations(&self, ids: &[String]) -> Result<Vec<Location>, StoreError> {
        let data = self.data.read().await;
        Ok(pick_in_order(&data.locations, ids, |l| l.id.as_str()))
    }

    async fn list_locations(&self) -> Result<Vec<Location>, StoreError> {
        Ok(self.data.read().await.locations.clone())
    }
}

#[async_trait]
impl ArcSource for InMemoryStore {
    async fn get_arc(&self, id: &str) -> Result<Option<StoryArc>, StoreError> {
        let data = self.data.read().await;
        Ok(data.arcs.iter().find(|a| a.id == id).cloned())
    }

    async fn list_arcs(&self) -> Result<Vec<StoryArc>, StoreError> {
        Ok(self.data.read().await.arcs.clone())
    }
}

#[async_trait]
impl ForeshadowingSource for InMemoryStore {
    async fn get_foreshadowing(&self, ids: &[String]) -> Result<Vec<Foreshadowing>, StoreError> {
        let data = self.data.read().await;
        Ok(pick_in_order(&data.foreshadowing, ids, |f| f.id.as_str()))
    }

    async fn list_active_foreshadowing(&self) -> Result<Vec<Foreshadowing>, StoreError> {
        let data = self.data.read().await;
        Ok(data
            .foreshadowing
            .iter()
            .filter(|f| f.status == ForeshadowingStatus::Active)
            .cloned()
            .collect())
    }

    async fn list_foreshadowing(&self) -> Result<Vec<Foreshadowing>, StoreError> {
        Ok(self.data.read().await.foreshadowing.clone())
    }
}

#[async_trait]
impl HookSource for InMemoryStore {
    async fn hooks_for_chapter(&self, chapter_id: &str) -> Result<Vec<Hook>, StoreError> {
        let data = self.data.read().await;
        Ok(data
            .hooks
            .iter()
            .filter(|h| h.chapter_id == chapter_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl WorldSource for InMemoryStore {
    async fn get_world(&self) -> Result<Option<World>, StoreError> {
        Ok(self.data.read().await.world.clone())
    }
}
