//! # Storyloom Core
//!
//! Story entity types, read-only collaborator traits, and error definitions
//! for the Storyloom context engine. This crate has no storage backend and no
//! async runtime (only `async-trait` for the trait signatures): it defines the
//! domain model that the context builders consume and that storage backends
//! implement.
//!
//! ## Design Philosophy
//!
//! Every entity kind is reached through its own narrow trait in [`source`].
//! Builders take only the capabilities they read from, so tests can stand
//! up a single in-memory store and storage backends stay swappable.

pub mod chapter;
pub mod character;
pub mod error;
pub mod location;
pub mod plot;
pub mod source;
pub mod world;

// Re-export key types at crate root for ergonomics
pub use chapter::{Chapter, ChapterOutline, ForeshadowingAction, ForeshadowingRef, Volume};
pub use character::{Character, Relationship};
pub use error::StoreError;
pub use location::Location;
pub use plot::{
    ArcSection, ArcStatus, Foreshadowing, ForeshadowingStatus, Hook, HookStrength, StoryArc,
};
pub use source::{
    ArcSource, ChapterSource, CharacterSource, ForeshadowingSource, HookSource, LocationSource,
    RelationshipSource, WorldSource,
};
pub use world::{PowerSystem, World};
