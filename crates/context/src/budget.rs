//! Token budget and priority-ordered truncation.
//!
//! # Algorithm
//!
//! 1. Stable-sort candidates by priority, highest first. Equal priorities keep
//!    the order their layer produced them in.
//! 2. Walk the sorted list with a running total. An item is included whole
//!    if it still fits, otherwise it is skipped and the walk continues, so a
//!    smaller item further down may still fit.
//! 3. `truncated` is set iff anything was skipped.
//!
//! There is no backtracking and no content slicing.

use serde::{Deserialize, Serialize};
use storyloom_config::BudgetConfig;
use tracing::debug;

use crate::item::{ContentItem, ContentType, Priority};

/// Total ceiling and the reserves carved out of it. The config type is
/// used directly so there is one `available()` computation.
pub type TokenBudget = BudgetConfig;

/// The surviving items of one build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetedResult {
    /// Included items in (priority, insertion) order, each with its size set
    pub items: Vec<ContentItem>,
    /// Sum of `items` sizes; never exceeds `budget`
    pub total_size: usize,
    /// Whether any candidate was skipped
    pub truncated: bool,
    /// Budget the items were selected against
    pub budget: usize,
    /// Skipped candidates, in walk order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dropped: Vec<DroppedItem>,
}

impl BudgetedResult {
    /// Budget utilization percentage (0.0–100.0).
    pub fn utilization_pct(&self) -> f32 {
        if self.budget == 0 {
            return 0.0;
        }
        (self.total_size as f32 / self.budget as f32) * 100.0
    }

    /// Number of included items of the given type.
    pub fn count_of(&self, kind: ContentType) -> usize {
        self.items.iter().filter(|i| i.kind == kind).count()
    }
}

/// A candidate the truncator skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroppedItem {
    #[serde(rename = "type")]
    pub kind: ContentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub priority: Priority,
    pub size: usize,
}

/// Select the priority-respecting subset of `items` that fits in `budget`.
pub fn truncate(mut items: Vec<ContentItem>, budget: usize) -> BudgetedResult {
    // `sort_by` is stable: ties keep insertion order.
    items.sort_by(|a, b| b.priority.cmp(&a.priority));

    let mut included = Vec::with_capacity(items.len());
    let mut dropped = Vec::new();
    let mut used = 0usize;

    for mut item in items {
        let size = item.size();
        item.size = Some(size);

        // `used <= budget` holds throughout, so this cannot underflow.
        if size <= budget - used {
            used += size;
            included.push(item);
        } else {
            debug!(kind = %item.kind, size, used, budget, "Item does not fit, skipping");
            dropped.push(DroppedItem {
                kind: item.kind,
                id: item.id,
                priority: item.priority,
                size,
            });
        }
    }

    BudgetedResult {
        items: included,
        total_size: used,
        truncated: !dropped.is_empty(),
        budget,
        dropped,
    }
}
