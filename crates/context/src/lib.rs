//! Context assembly for story generation.
//!
//! Builders gather story facts from read-only collaborators, wrap each fact
//! as a [`ContentItem`] with a priority tier, and hand the full candidate
//! list to [`truncate`], which keeps the highest-priority subset that fits
//! the token budget. [`format_context`] renders the survivors as one
//! sectioned prompt block.
//!
//! # Priority tiers
//!
//! | Tier | Priority | Contents |
//! |------|----------|----------|
//! | Required | 1000 | Chapter text, outline, continuity excerpt |
//! | FK expansion | 800 | Referenced characters, relationships, locations, arc |
//! | Plot awareness | 600 | Hinted and open foreshadowing, hooks |
//! | World rules | 400 | Power system, social rules |
//! | User selected | 200 | Caller-supplied items without a priority |

pub mod budget;
pub mod chapter;
pub mod error;
pub mod format;
pub mod global;
pub mod item;
pub mod render;
pub mod sources;
pub mod token;

#[cfg(test)]
mod test_helpers;

pub use budget::{BudgetedResult, DroppedItem, TokenBudget, truncate};
pub use chapter::{ChapterContextBuilder, DEFAULT_CONTINUITY_CHARS};
pub use error::ContextError;
pub use format::{CONTEXT_END, CONTEXT_START, format_context};
pub use global::GlobalContextBuilder;
pub use item::{ContentItem, ContentType, Priority, SelectedItem};
pub use sources::StorySources;
pub use token::estimate_tokens;
