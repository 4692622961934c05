//! Story storage implementations for Storyloom.
//!
//! Every collaborator trait from `storyloom-core` is implemented by
//! [`InMemoryStore`], which can be seeded in code or loaded from a JSON
//! [`StorySnapshot`] on disk.

pub mod in_memory;
pub mod snapshot;

pub use in_memory::InMemoryStore;
pub use snapshot::StorySnapshot;
