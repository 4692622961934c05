//! Read-only collaborator traits: one per entity kind.
//!
//! The context builders never mutate story data. Each trait exposes only
//! the reads a builder needs, so a builder depends on exactly the
//! capabilities it uses.
//!
//! Contract shared by every batch lookup: results come back in the order of
//! the requested ids, unknown ids are silently omitted, and duplicate ids
//! yield one entity.
//!
//! Implementations: in-memory / JSON snapshot (`storyloom-store`).

use async_trait::async_trait;

use crate::chapter::Chapter;
use crate::character::{Character, Relationship};
use crate::error::StoreError;
use crate::location::Location;
use crate::plot::{Foreshadowing, Hook, StoryArc};
use crate::world::World;

#[async_trait]
pub trait ChapterSource: Send + Sync {
    /// Look up a chapter. `with_content` controls whether the full text is loaded.
    async fn get_chapter(
        &self,
        id: &str,
        with_content: bool,
    ) -> std::result::Result<Option<Chapter>, StoreError>;

    /// Chapters in reading order, without content. `Some(volume)` scopes the
    /// listing to one volume; `None` lists the whole story.
    async fn list_chapters(
        &self,
        volume_id: Option<&str>,
    ) -> std::result::Result<Vec<Chapter>, StoreError>;
}

#[async_trait]
pub trait CharacterSource: Send + Sync {
    /// Batch lookup in one round trip.
    async fn get_characters(
        &self,
        ids: &[String],
    ) -> std::result::Result<Vec<Character>, StoreError>;

    async fn list_characters(&self) -> std::result::Result<Vec<Character>, StoreError>;
}

#[async_trait]
pub trait RelationshipSource: Send + Sync {
    /// Relationships whose source and target are both in `character_ids`.
    async fn relationships_among(
        &self,
        character_ids: &[String],
    ) -> std::result::Result<Vec<Relationship>, StoreError>;

    async fn list_relationships(&self) -> std::result::Result<Vec<Relationship>, StoreError>;
}

#[async_trait]
pub trait LocationSource: Send + Sync {
    async fn get_locations(&self, ids: &[String])
    -> std::result::Result<Vec<Location>, StoreError>;

    async fn list_locations(&self) -> std::result::Result<Vec<Location>, StoreError>;
}

#[async_trait]
pub trait ArcSource: Send + Sync {
    async fn get_arc(&self, id: &str) -> std::result::Result<Option<StoryArc>, StoreError>;

    async fn list_arcs(&self) -> std::result::Result<Vec<StoryArc>, StoreError>;
}

#[async_trait]
pub trait ForeshadowingSource: Send + Sync {
    async fn get_foreshadowing(
        &self,
        ids: &[String],
    ) -> std::result::Result<Vec<Foreshadowing>, StoreError>;

    /// Every foreshadowing entity whose status is active, story-wide.
    async fn list_active_foreshadowing(
        &self,
    ) -> std::result::Result<Vec<Foreshadowing>, StoreError>;

    async fn list_foreshadowing(&self) -> std::result::Result<Vec<Foreshadowing>, StoreError>;
}

#[async_trait]
pub trait HookSource: Send + Sync {
    async fn hooks_for_chapter(
        &self,
        chapter_id: &str,
    ) -> std::result::Result<Vec<Hook>, StoreError>;
}

#[async_trait]
pub trait WorldSource: Send + Sync {
    /// The singleton world record, if one exists.
    async fn get_world(&self) -> std::result::Result<Option<World>, StoreError>;
}
