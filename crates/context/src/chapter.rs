//! Chapter-scoped context assembly.
//!
//! Five layers, concatenated in this order and then truncated together:
//!
//! | Layer | Priority | Items (sub-order) |
//! |-------|----------|-------------------|
//! | 1. Required | 1000 | chapter text, outline, continuity excerpt |
//! | 2. FK expansion | 800 | characters, scoped relationships, locations, arc |
//! | 3. Plot awareness | 600 | hinted foreshadowing, other active foreshadowing, previous chapter's hooks |
//! | 4. World rules | 400 | power system, social rules |
//! | 5. User-selected | 200 unless set | caller items, in caller order |
//!
//! Only the root chapter must exist. Every other lookup is best-effort: a
//! missing entity or a failed read drops that item and nothing else.
//!
//! # Determinism
//!
//! Identical story data always yields identical items in identical order.
//! Nothing is cached across builds.

use std::collections::{HashMap, HashSet};
use storyloom_core::Chapter;
use tracing::{debug, info, warn};

use crate::budget::{BudgetedResult, TokenBudget, truncate};
use crate::error::ContextError;
use crate::item::{ContentItem, ContentType, Priority, SelectedItem};
use crate::render;
use crate::sources::{StorySources, best_effort};

/// Default length of the continuity excerpt, in characters.
pub const DEFAULT_CONTINUITY_CHARS: usize = 500;

/// Builds the context for writing one chapter. Stateless; reuse freely.
pub struct ChapterContextBuilder {
    sources: StorySources,
    budget: TokenBudget,
    continuity_chars: usize,
}

impl ChapterContextBuilder {
    pub fn new(sources: StorySources, budget: TokenBudget) -> Self {
        Self {
            sources,
            budget,
            continuity_chars: DEFAULT_CONTINUITY_CHARS,
        }
    }

    /// Override how much of the previous chapter's ending is carried over.
    pub fn with_continuity_chars(mut self, chars: usize) -> Self {
        self.continuity_chars = chars;
        self
    }

    /// Assemble and truncate the context for `chapter_id`.
    ///
    /// `additional` items are appended as the User-Selected layer.
    pub async fn build(
        &self,
        chapter_id: &str,
        additional: Vec<SelectedItem>,
    ) -> Result<BudgetedResult, ContextError> {
        let chapter = self
            .sources
            .chapters
            .get_chapter(chapter_id, true)
            .await?
            .ok_or_else(|| ContextError::ChapterNotFound(chapter_id.to_string()))?;

        // Read once, used by the required and plot layers.
        let previous = self.previous_chapter(&chapter).await;

        let mut items = Vec::new();

        let required = self.required_layer(&chapter, previous.as_ref());
        debug!(layer = "required", items = required.len());
        items.extend(required);

        let expanded = self.fk_expansion_layer(&chapter).await;
        debug!(layer = "fk_expansion", items = expanded.len());
        items.extend(expanded);

        let plot = self.plot_awareness_layer(&chapter, previous.as_ref()).await;
        debug!(layer = "plot_awareness", items = plot.len());
        items.extend(plot);

        let world = self.world_rules_layer().await;
        debug!(layer = "world_rules", items = world.len());
        items.extend(world);

        debug!(layer = "user_selected", items = additional.len());
        items.extend(additional.into_iter().map(ContentItem::from));

        let candidates = items.len();
        let result = truncate(items, self.budget.available());

        info!(
            chapter = chapter_id,
            candidates,
            included = result.items.len(),
            total_size = result.total_size,
            budget = result.budget,
            "Chapter context assembled"
        );
        if result.truncated {
            warn!(
                chapter = chapter_id,
                dropped = result.dropped.len(),
                "Chapter context truncated to fit budget"
            );
        }

        Ok(result)
    }

    /// The chapter immediately before `chapter`: within its volume when it
    /// has one, otherwise in the story-wide ordering. Loaded with content.
    async fn previous_chapter(&self, chapter: &Chapter) -> Option<Chapter> {
        let listing = best_effort(
            "chapter listing",
            self.sources
                .chapters
                .list_chapters(chapter.volume_id.as_deref())
                .await,
        );

        let position = listing.iter().position(|c| c.id == chapter.id)?;
        let prev = listing.get(position.checked_sub(1)?)?;

        best_effort(
            "previous chapter",
            self.sources.chapters.get_chapter(&prev.id, true).await,
        )
    }

    // ── Layer 1: Required ───────────────────────────────────────────────

    fn required_layer(&self, chapter: &Chapter, previous: Option<&Chapter>) -> Vec<ContentItem> {
        let mut items = Vec::new();

        if let Some(text) = chapter.text() {
            items.push(
                ContentItem::new(ContentType::ChapterContent, text, Priority::REQUIRED)
                    .with_id(&chapter.id),
            );
        }

        if let Some(outline) = render::outline(chapter) {
            items.push(
                ContentItem::new(ContentType::ChapterOutline, outline, Priority::REQUIRED)
                    .with_id(&chapter.id),
            );
        }

        if let Some(prev) = previous
            && let Some(text) = prev.text()
        {
            let tail = render::tail_chars(text, self.continuity_chars);
            if !tail.is_empty() {
                let excerpt = format!(
                    "[Continuity: end of previous chapter \"{}\"]\n{tail}",
                    prev.title
                );
                items.push(
                    ContentItem::new(ContentType::ContinuityExcerpt, excerpt, Priority::REQUIRED)
                        .with_id(&prev.id),
                );
            }
        }

        items
    }

    // ── Layer 2: FK expansion ───────────────────────────────────────────

    async fn fk_expansion_layer(&self, chapter: &Chapter) -> Vec<ContentItem> {
        let mut items = Vec::new();

        if !chapter.character_ids.is_empty() {
            let characters = best_effort(
                "characters",
                self.sources
                    .characters
                    .get_characters(&chapter.character_ids)
                    .await,
            );
            for c in &characters {
                items.push(
                    ContentItem::new(
                        ContentType::CharacterProfile,
                        render::character_profile(c),
                        Priority::FK_EXPANSION,
                    )
                    .with_id(&c.id),
                );
            }

            let names: HashMap<&str, &str> = characters
                .iter()
                .map(|c| (c.id.as_str(), c.name.as_str()))
                .collect();
            let relationships = best_effort(
                "relationships",
                self.sources
                    .relationships
                    .relationships_among(&chapter.character_ids)
                    .await,
            );
            for rel in &relationships {
                let (Some(source), Some(target)) = (
                    names.get(rel.source_id.as_str()),
                    names.get(rel.target_id.as_str()),
                ) else {
                    debug!(relationship = %rel.id, "Relationship endpoint unresolved, skipping");
                    continue;
                };
                let line = render::relationship_line(
                    source,
                    target,
                    &rel.relation_type,
                    rel.description.as_deref(),
                );
                items.push(
                    ContentItem::new(ContentType::Relationship, line, Priority::FK_EXPANSION)
                        .with_id(&rel.id),
                );
            }
        }

        if !chapter.location_ids.is_empty() {
            let locations = best_effort(
                "locations",
                self.sources
                    .locations
                    .get_locations(&chapter.location_ids)
                    .await,
            );
            for l in &locations {
                items.push(
                    ContentItem::new(
                        ContentType::Location,
                        render::location_line(l),
                        Priority::FK_EXPANSION,
                    )
                    .with_id(&l.id),
                );
            }
        }

        if let Some(arc_id) = &chapter.arc_id
            && let Some(arc) = best_effort("arc", self.sources.arcs.get_arc(arc_id).await)
        {
            items.push(
                ContentItem::new(
                    ContentType::Arc,
                    render::arc_profile(&arc),
                    Priority::FK_EXPANSION,
                )
                .with_id(&arc.id),
            );
        }

        items
    }

    // ── Layer 3: Plot awareness ─────────────────────────────────────────

    async fn plot_awareness_layer(
        &self,
        chapter: &Chapter,
        previous: Option<&Chapter>,
    ) -> Vec<ContentItem> {
        let mut items = Vec::new();

        // Every foreshadowing id is emitted at most once per build, and a
        // hinted id is never repeated as merely active.
        let hinted_ids = chapter.hinted_foreshadowing_ids();
        let hinted_set: HashSet<&str> = hinted_ids.iter().map(String::as_str).collect();
        let mut seen: HashSet<String> = HashSet::new();

        if !hinted_ids.is_empty() {
            let hinted = best_effort(
                "hinted foreshadowing",
                self.sources.foreshadowing.get_foreshadowing(&hinted_ids).await,
            );
            for f in &hinted {
                if !seen.insert(f.id.clone()) {
                    continue;
                }
                items.push(
                    ContentItem::new(
                        ContentType::Foreshadowing,
                        format!("[Hinted in this chapter] {}", f.content),
                        Priority::PLOT_AWARENESS,
                    )
                    .with_id(&f.id),
                );
            }
        }

        let active = best_effort(
            "active foreshadowing",
            self.sources.foreshadowing.list_active_foreshadowing().await,
        );
        for f in &active {
            if hinted_set.contains(f.id.as_str()) || !seen.insert(f.id.clone()) {
                continue;
            }
            items.push(
                ContentItem::new(
                    ContentType::Foreshadowing,
                    format!("[Open foreshadowing] {}", f.content),
                    Priority::PLOT_AWARENESS,
                )
                .with_id(&f.id),
            );
        }

        if let Some(prev) = previous {
            let hooks = best_effort(
                "hooks",
                self.sources.hooks.hooks_for_chapter(&prev.id).await,
            );
            for h in &hooks {
                items.push(
                    ContentItem::new(ContentType::Hook, render::hook_line(h), Priority::PLOT_AWARENESS)
                        .with_id(&h.id),
                );
            }
        }

        items
    }

    // ── Layer 4: World rules ────────────────────────────────────────────

    async fn world_rules_layer(&self) -> Vec<ContentItem> {
        let Some(world) = best_effort("world", self.sources.world.get_world().await) else {
            return Vec::new();
        };

        let mut items = Vec::new();
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
        items
    }
}
