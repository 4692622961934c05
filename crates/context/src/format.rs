//! Render a list of content items into one sectioned text block.

use crate::budget::BudgetedResult;
use crate::item::{ContentItem, ContentType};

pub const CONTEXT_START: &str = "<story_context>";
pub const CONTEXT_END: &str = "</story_context>";

const CATCH_ALL: &str = "Additional Context";

/// Fixed section order. Types not listed here go to the catch-all section.
const SECTIONS: &[(&str, &[ContentType])] = &[
    (
        "World Rules",
        &[ContentType::PowerSystem, ContentType::SocialRules],
    ),
    ("Story Arc", &[ContentType::Arc]),
    ("Characters", &[ContentType::CharacterProfile]),
    ("Relationships", &[ContentType::Relationship]),
    ("Locations", &[ContentType::Location]),
    ("Foreshadowing", &[ContentType::Foreshadowing]),
    ("Hooks to Follow Up", &[ContentType::Hook]),
    ("Previously", &[ContentType::ContinuityExcerpt]),
    ("Chapter Outline", &[ContentType::ChapterOutline]),
    ("Current Chapter", &[ContentType::ChapterContent]),
];

fn section_of(kind: ContentType) -> Option<usize> {
    SECTIONS.iter().position(|(_, kinds)| kinds.contains(&kind))
}

/// Group `items` by type into named sections, keeping input order inside
/// each section. Sections without members are left out.
pub fn format_context(items: &[ContentItem]) -> String {
    let mut buckets: Vec<Vec<&str>> = vec![Vec::new(); SECTIONS.len() + 1];
    for item in items {
        let idx = section_of(item.kind).unwrap_or(SECTIONS.len());
        buckets[idx].push(item.content.as_str());
    }

    let titles = SECTIONS
        .iter()
        .map(|(title, _)| *title)
        .chain(std::iter::once(CATCH_ALL));

    let mut out = String::from(CONTEXT_START);
    out.push('\n');
    for (title, contents) in titles.zip(&buckets) {
        if contents.is_empty() {
            continue;
        }
        out.push_str(&format!("\n## {title}\n\n{}\n", contents.join("\n\n")));
    }
    out.push('\n');
    out.push_str(CONTEXT_END);
    out
}

impl BudgetedResult {
    /// Formatted text of the included items.
    pub fn render(&self) -> String {
        format_context(&self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Priority;

    fn item(kind: ContentType, content: &str) -> ContentItem {
        ContentItem::new(kind, content, Priority::REQUIRED)
    }

    #[test]
    fn empty_input_is_just_delimiters() {
        let out = format_context(&[]);
        assert_eq!(out, "<story_context>\n\n</story_context>");
        assert!(!out.contains("##"));
    }

    #[test]
    fn sections_follow_fixed_order() {
        let items = vec![
            item(ContentType::ChapterContent, "The gate opened."),
            item(ContentType::CharacterProfile, "Lin Yue"),
            item(ContentType::SocialRules, "Elders first"),
            item(ContentType::PowerSystem, "Qi"),
        ];
        let out = format_context(&items);

        let world = out.find("## World Rules").unwrap();
        let chars = out.find("## Characters").unwrap();
        let chapter = out.find("## Current Chapter").unwrap();
        assert!(world < chars && chars < chapter);
        // input order is kept inside a section
        assert!(out.find("Elders first").unwrap() < out.find("Qi").unwrap());
        assert!(out.starts_with(CONTEXT_START));
        assert!(out.ends_with(CONTEXT_END));
    }

    #[test]
    fn no_heading_without_members() {
        let out = format_context(&[item(ContentType::Hook, "[strong hook] Who rang?")]);
        assert_eq!(out.matches("## ").count(), 1);
        assert!(out.contains("## Hooks to Follow Up\n\n[strong hook] Who rang?\n"));
        assert!(!out.contains("## Characters"));
    }

    #[test]
    fn user_and_unknown_types_go_last() {
        let items = vec![
            item(ContentType::Other, "mystery"),
            item(ContentType::UserSelected, "pinned note"),
            item(ContentType::ChapterContent, "text"),
        ];
        let out = format_context(&items);
        let chapter = out.find("## Current Chapter").unwrap();
        let extra = out.find("## Additional Context").unwrap();
        assert!(chapter < extra);
        assert!(out.contains("mystery\n\npinned note"));
    }

    #[test]
    fn multiple_items_are_separated_by_blank_lines() {
        let items = vec![
            item(ContentType::Location, "Azure Peak"),
            item(ContentType::Location, "Sealed Well"),
        ];
        assert!(format_context(&items).contains("## Locations\n\nAzure Peak\n\nSealed Well\n"));
    }
}
