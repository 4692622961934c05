//! The bundle of read-only collaborators handed to the builders.

use std::sync::Arc;
use storyloom_core::{
    ArcSource, ChapterSource, CharacterSource, ForeshadowingSource, HookSource, LocationSource,
    RelationshipSource, StoreError, WorldSource,
};
use tracing::warn;

/// One handle per entity kind. Cheap to clone.
#[derive(Clone)]
pub struct StorySources {
    pub chapters: Arc<dyn ChapterSource>,
    pub characters: Arc<dyn CharacterSource>,
    pub relationships: Arc<dyn RelationshipSource>,
    pub locations: Arc<dyn LocationSource>,
    pub arcs: Arc<dyn ArcSource>,
    pub foreshadowing: Arc<dyn ForeshadowingSource>,
    pub hooks: Arc<dyn HookSource>,
    pub world: Arc<dyn WorldSource>,
}

impl StorySources {
    /// Use a single store for every capability.
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: ChapterSource
            + CharacterSource
            + RelationshipSource
            + LocationSource
            + ArcSource
            + ForeshadowingSource
            + HookSource
            + WorldSource
            + 'static,
    {
        Self {
            chapters: store.clone(),
            characters: store.clone(),
            relationships: store.clone(),
            locations: store.clone(),
            arcs: store.clone(),
            foreshadowing: store.clone(),
            hooks: store.clone(),
            world: store,
        }
    }
}

/// Unwrap a best-effort lookup: a store failure is logged and read as "nothing found".
pub(crate) fn best_effort<T: Default>(lookup: &'static str, result: Result<T, StoreError>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            warn!(lookup, error = %e, "Story lookup failed, omitting its items");
            T::default()
        }
    }
}
