//! Shared story fixture for builder tests.

use std::collections::BTreeMap;
use std::sync::Arc;
use storyloom_core::{
    ArcSection, ArcStatus, Chapter, ChapterOutline, Character, Foreshadowing, ForeshadowingAction,
    ForeshadowingRef, ForeshadowingStatus, Hook, HookStrength, Location, PowerSystem,
    Relationship, StoryArc, Volume, World,
};
use storyloom_store::{InMemoryStore, StorySnapshot};

use crate::sources::StorySources;

pub const CH1_TEXT: &str = "林月推开山门。The gate creaked open onto the courtyard.";

/// Two chapters in each of volumes v-1 and v-2 plus two volume-less chapters.
///
/// ch-2 references c-1, c-2 and a missing c-ghost; l-1 and a missing
/// l-ghost; hints f-1 (also active) and plants f-3; belongs to arc a-1.
pub fn sample_story() -> StorySnapshot {
    StorySnapshot {
        saved_at: None,
        volumes: vec![
            Volume {
                id: "v-1".into(),
                title: "Ascent".into(),
                order: 1,
            },
            Volume {
                id: "v-2".into(),
                title: "Descent".into(),
                order: 2,
            },
        ],
        chapters: vec![
            Chapter {
                id: "ch-2".into(),
                title: "The Bell".into(),
                volume_id: Some("v-1".into()),
                number: 2,
                content: Some("Master Qiu waited under the bell tower.".into()),
                outline: ChapterOutline {
                    goal: Some("Lin Yue is accepted as a disciple".into()),
                    scenes: vec!["Bell tower".into(), "Entrance trial".into()],
                    ending_hook: Some("The jade token cracks".into()),
                },
                character_ids: vec!["c-1".into(), "c-2".into(), "c-ghost".into()],
                location_ids: vec!["l-1".into(), "l-ghost".into()],
                foreshadowing: vec![
                    ForeshadowingRef {
                        id: "f-1".into(),
                        action: ForeshadowingAction::Hint,
                    },
                    ForeshadowingRef {
                        id: "f-3".into(),
                        action: ForeshadowingAction::Plant,
                    },
                ],
                arc_id: Some("a-1".into()),
            },
            Chapter {
                id: "ch-1".into(),
                title: "Arrival".into(),
                volume_id: Some("v-1".into()),
                number: 1,
                content: Some(CH1_TEXT.into()),
                character_ids: vec!["c-1".into()],
                ..Default::default()
            },
            Chapter {
                id: "v2-2".into(),
                title: "Ashes".into(),
                volume_id: Some("v-2".into()),
                number: 2,
                content: Some("Smoke rose over the ruined gate.".into()),
                ..Default::default()
            },
            Chapter {
                id: "v2-1".into(),
                title: "Exile".into(),
                volume_id: Some("v-2".into()),
                number: 1,
                content: Some("She left the sect at dawn.".into()),
                ..Default::default()
            },
            Chapter {
                id: "solo-1".into(),
                title: "Prologue".into(),
                number: 1,
                content: Some("Long before the sect, there was the well.".into()),
                ..Default::default()
            },
            Chapter {
                id: "solo-2".into(),
                title: "Interlude".into(),
                number: 2,
                content: Some("Rain.".into()),
                ..Default::default()
            },
        ],
        characters: vec![
            Character {
                id: "c-1".into(),
                name: "Lin Yue".into(),
                role: "protagonist".into(),
                personality: Some("stubborn, curious".into()),
                ..Default::default()
            },
            Character {
                id: "c-2".into(),
                name: "Master Qiu".into(),
                role: "mentor".into(),
                background: Some("Former sect leader".into()),
                ..Default::default()
            },
            Character {
                id: "c-3".into(),
                name: "Zhao Heng".into(),
                role: "rival".into(),
                ..Default::default()
            },
        ],
        relationships: vec![
            Relationship {
                id: "r-1".into(),
                source_id: "c-2".into(),
                target_id: "c-1".into(),
                relation_type: "mentor".into(),
                description: Some("Sees his younger self in her".into()),
            },
            Relationship {
                id: "r-2".into(),
                source_id: "c-1".into(),
                target_id: "c-3".into(),
                relation_type: "rival".into(),
                description: None,
            },
            Relationship {
                id: "r-3".into(),
                source_id: "c-1".into(),
                target_id: "c-ghost".into(),
                relation_type: "debtor".into(),
                description: None,
            },
        ],
        locations: vec![Location {
            id: "l-1".into(),
            name: "Azure Peak".into(),
            kind: Some("sect".into()),
            description: Some("Nine hundred steps above the clouds".into()),
        }],
        arcs: vec![StoryArc {
            id: "a-1".into(),
            name: "Exile".into(),
            arc_type: "main".into(),
            status: ArcStatus::InProgress,
            sections: vec![
                ArcSection {
                    name: "Flight".into(),
                    status: ArcStatus::Completed,
                    summary: None,
                },
                ArcSection {
                    name: "Return".into(),
                    status: ArcStatus::Planned,
                    summary: Some("She comes back stronger".into()),
                },
            ],
        }],
        foreshadowing: vec![
            Foreshadowing {
                id: "f-1".into(),
                content: "The jade token is warm to the touch".into(),
                status: ForeshadowingStatus::Active,
            },
            Foreshadowing {
                id: "f-2".into(),
                content: "Something lives in the sealed well".into(),
                status: ForeshadowingStatus::Active,
            },
            Foreshadowing {
                id: "f-3".into(),
                content: "Qiu's scar".into(),
                status: ForeshadowingStatus::Pending,
            },
            Foreshadowing {
                id: "f-4".into(),
                content: "The missing ledger".into(),
                status: ForeshadowingStatus::Resolved,
            },
        ],
        hooks: vec![
            Hook {
                id: "h-1".into(),
                chapter_id: "ch-1".into(),
                content: "Who rang the bell at midnight?".into(),
                strength: HookStrength::Strong,
            },
            Hook {
                id: "h-2".into(),
                chapter_id: "ch-2".into(),
                content: "The token's crack is spreading".into(),
                strength: HookStrength::Medium,
            },
        ],
        world: Some(World {
            name: "Nine Provinces".into(),
            power_system: Some(PowerSystem {
                name: "Qi Cultivation".into(),
                levels: vec!["Foundation".into(), "Core".into(), "Nascent Soul".into()],
                core_rules: vec!["Qi must be refined before it is stored".into()],
                constraints: vec!["No breakthrough without a mentor".into()],
            }),
            social_rules: BTreeMap::from([(
                "sect hierarchy".to_string(),
                "Elders outrank disciples regardless of age".to_string(),
            )]),
        }),
    }
}

pub fn sample_store() -> Arc<InMemoryStore> {
    Arc::new(InMemoryStore::new(sample_story()))
}

pub fn sample_sources() -> StorySources {
    StorySources::from_store(sample_store())
}
