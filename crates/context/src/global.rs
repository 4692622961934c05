//! Story-wide context assembly, without chapter scoping.
//!
//! [`GlobalContextBuilder::build_full`] emits one multi-line item per
//! non-empty entity category. [`GlobalContextBuilder::build_summary`] emits
//! at most three compact one-line items. Both feed the same truncator as
//! the chapter builder.

use std::collections::HashMap;
use std::sync::Arc;
use storyloom_core::{
    ArcSource, CharacterSource, ForeshadowingSource, LocationSource, RelationshipSource,
    WorldSource,
};
use tracing::{debug, info};

use crate::budget::{BudgetedResult, TokenBudget, truncate};
use crate::item::{ContentItem, ContentType, Priority};
use crate::render;
use crate::sources::{StorySources, best_effort};

pub struct GlobalContextBuilder {
    characters: Arc<dyn CharacterSource>,
    relationships: Arc<dyn RelationshipSource>,
    arcs: Arc<dyn ArcSource>,
    locations: Arc<dyn LocationSource>,
    foreshadowing: Arc<dyn ForeshadowingSource>,
    world: Arc<dyn WorldSource>,
    budget: TokenBudget,
}

impl GlobalContextBuilder {
    pub fn new(sources: &StorySources, budget: TokenBudget) -> Self {
        Self {
            characters: sources.characters.clone(),
            relationships: sources.relationships.clone(),
            arcs: sources.arcs.clone(),
            locations: sources.locations.clone(),
            foreshadowing: sources.foreshadowing.clone(),
            world: sources.world.clone(),
            budget,
        }
    }

    /// Every category, fully enumerated.
    ///
    /// Order: characters, relationships, arcs, locations (800), foreshadowing
    /// (600), power system, social rules (400).
    pub async fn build_full(&self) -> BudgetedResult {
        let mut items = Vec::new();

        let characters = best_effort("characters", self.characters.list_characters().await);
        if !characters.is_empty() {
            let lines: Vec<String> = characters.iter().map(render::character_line).collect();
            items.push(section(
                ContentType::CharacterProfile,
                "Characters",
                &lines,
                Priority::FK_EXPANSION,
            ));
        }

        let names: HashMap<&str, &str> = characters
            .iter()
            .map(|c| (c.id.as_str(), c.name.as_str()))
            .collect();
        let relationships =
            best_effort("relationships", self.relationships.list_relationships().await);
        let lines: Vec<String> = relationships
            .iter()
            .filter_map(|r| {
                let source = names.get(r.source_id.as_str())?;
                let target = names.get(r.target_id.as_str())?;
                Some(format!(
                    "- {}",
                    render::relationship_line(
                        source,
                        target,
                        &r.relation_type,
                        r.description.as_deref()
                    )
                ))
            })
            .collect();
        if !lines.is_empty() {
            items.push(section(
                ContentType::Relationship,
                "Relationships",
                &lines,
                Priority::FK_EXPANSION,
            ));
        }

        let arcs = best_effort("arcs", self.arcs.list_arcs().await);
        if !arcs.is_empty() {
            let lines: Vec<String> = arcs.iter().map(render::arc_line).collect();
            items.push(section(
                ContentType::Arc,
                "Story arcs",
                &lines,
                Priority::FK_EXPANSION,
            ));
        }

        let locations = best_effort("locations", self.locations.list_locations().await);
        if !locations.is_empty() {
            let lines: Vec<String> = locations
                .iter()
                .map(|l| format!("- {}", render::location_line(l)))
                .collect();
            items.push(section(
                ContentType::Location,
                "Locations",
                &lines,
                Priority::FK_EXPANSION,
            ));
        }

        let foreshadowing =
            best_effort("foreshadowing", self.foreshadowing.list_foreshadowing().await);
        if !foreshadowing.is_empty() {
            let lines: Vec<String> = foreshadowing.iter().map(render::foreshadowing_line).collect();
            items.push(section(
                ContentType::Foreshadowing,
                "Foreshadowing",
                &lines,
                Priority::PLOT_AWARENESS,
            ));
        }

        if let Some(world) = best_effort("world", self.world.get_world().await) {
            if let Some(ps) = world.ruled_power_system() {
                items.push(ContentItem::new(
                    ContentType::PowerSystem,
                    render::power_system(ps),
                    Priority::WORLD_RULES,
                ));
            }
            if !world.social_rules.is_empty() {
                items.push(ContentItem::new(
                    ContentType::SocialRules,
                    render::social_rules(&world.social_rules),
                    Priority::WORLD_RULES,
                ));
            }
        }

        self.finish("full", items)
    }

    /// One line each for characters, arcs and open foreshadowing.
    pub async fn build_summary(&self) -> BudgetedResult {
        let mut items = Vec::new();

        let characters = best_effort("characters", self.characters.list_characters().await);
        if !characters.is_empty() {
            let joined: Vec<String> = characters
                .iter()
                .map(|c| format!("{}({})", c.name, c.role))
                .collect();
            items.push(ContentItem::new(
                ContentType::CharacterProfile,
                format!("Characters: {}", joined.join(", ")),
                Priority::FK_EXPANSION,
            ));
        }

        let arcs = best_effort("arcs", self.arcs.list_arcs().await);
        if !arcs.is_empty() {
            let joined: Vec<String> = arcs
                .iter()
                .map(|a| format!("{}({})", a.name, a.status))
                .collect();
            items.push(ContentItem::new(
                ContentType::Arc,
                format!("Arcs: {}", joined.join(", ")),
                Priority::FK_EXPANSION,
            ));
        }

        let active = best_effort(
            "active foreshadowing",
            self.foreshadowing.list_active_foreshadowing().await,
        );
        if !active.is_empty() {
            let joined: Vec<&str> = active.iter().map(|f| f.content.as_str()).collect();
            items.push(ContentItem::new(
                ContentType::Foreshadowing,
                format!("Open foreshadowing: {}", joined.join("; ")),
                Priority::PLOT_AWARENESS,
            ));
        }

        self.finish("summary", items)
    }

    fn finish(&self, mode: &'static str, items: Vec<ContentItem>) -> BudgetedResult {
        debug!(mode, candidates = items.len(), "Global context items gathered");
        let result = truncate(items, self.budget.available());
        info!(
            mode,
            included = result.items.len(),
            total_size = result.total_size,
            truncated = result.truncated,
            "Global context assembled"
        );
        result
    }
}

fn section(kind: ContentType, title: &str, lines: &[String], priority: Priority) -> ContentItem {
    ContentItem::new(kind, format!("{title}:\n{}", lines.join("\n")), priority)
}
