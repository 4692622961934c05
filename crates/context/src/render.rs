//! Text rendering for story entities, shared by both builders.
//!
//! `*_profile` functions render one entity as a multi-line block (chapter
//! scope); `*_line` functions render one compact line (story-wide listings).

use std::collections::BTreeMap;
use storyloom_core::{
    Chapter, ChapterOutline, Character, Foreshadowing, Hook, Location, PowerSystem, StoryArc,
};

pub fn character_profile(c: &Character) -> String {
    let mut lines = vec![name_with_role(&c.name, &c.role)];
    push_field(&mut lines, "Personality", c.personality.as_deref());
    push_field(&mut lines, "Background", c.background.as_deref());
    push_field(&mut lines, "Appearance", c.appearance.as_deref());
    if !c.traits.is_empty() {
        lines.push(format!("Traits: {}", c.traits.join(", ")));
    }
    lines.join("\n")
}

pub fn character_line(c: &Character) -> String {
    match non_blank(c.personality.as_deref()) {
        Some(p) => format!("- {}: {}", name_with_role(&c.name, &c.role), p),
        None => format!("- {}", name_with_role(&c.name, &c.role)),
    }
}

pub fn relationship_line(
    source: &str,
    target: &str,
    relation_type: &str,
    description: Option<&str>,
) -> String {
    match non_blank(description) {
        Some(d) => format!("{source} -> {target} ({relation_type}): {d}"),
        None => format!("{source} -> {target} ({relation_type})"),
    }
}

pub fn location_line(l: &Location) -> String {
    let mut line = l.name.clone();
    if let Some(kind) = non_blank(l.kind.as_deref()) {
        line.push_str(&format!(" [{kind}]"));
    }
    if let Some(desc) = non_blank(l.description.as_deref()) {
        line.push_str(&format!(": {desc}"));
    }
    line
}

pub fn arc_profile(arc: &StoryArc) -> String {
    let mut lines = vec![format!("Arc: {}", arc_heading(arc))];
    for section in &arc.sections {
        match non_blank(section.summary.as_deref()) {
            Some(s) => lines.push(format!("- {} [{}]: {}", section.name, section.status, s)),
            None => lines.push(format!("- {} [{}]", section.name, section.status)),
        }
    }
    lines.join("\n")
}

pub fn arc_line(arc: &StoryArc) -> String {
    let mut line = format!("- {}", arc_heading(arc));
    if !arc.sections.is_empty() {
        let sections: Vec<String> = arc
            .sections
            .iter()
            .map(|s| format!("{} ({})", s.name, s.status))
            .collect();
        line.push_str(&format!("; sections: {}", sections.join(", ")));
    }
    line
}

fn arc_heading(arc: &StoryArc) -> String {
    if arc.arc_type.trim().is_empty() {
        format!("{} ({})", arc.name, arc.status)
    } else {
        format!("{} ({}, {})", arc.name, arc.arc_type, arc.status)
    }
}

pub fn foreshadowing_line(f: &Foreshadowing) -> String {
    format!("- [{}] {}", f.status, f.content)
}

pub fn hook_line(h: &Hook) -> String {
    format!("[{} hook] {}", h.strength, h.content)
}

/// Goal, scenes and ending hook, labeled; `None` when the outline is empty.
pub fn outline(chapter: &Chapter) -> Option<String> {
    if chapter.outline.is_empty() {
        return None;
    }
    let ChapterOutline {
        goal,
        scenes,
        ending_hook,
    } = &chapter.outline;

    let mut parts = Vec::new();
    if let Some(goal) = non_blank(goal.as_deref()) {
        parts.push(format!("Goal: {goal}"));
    }
    let scenes: Vec<&str> = scenes
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    if !scenes.is_empty() {
        let numbered: Vec<String> = scenes
            .iter()
            .enumerate()
            .map(|(i, s)| format!("{}. {}", i + 1, s))
            .collect();
        parts.push(format!("Scenes:\n{}", numbered.join("\n")));
    }
    if let Some(hook) = non_blank(ending_hook.as_deref()) {
        parts.push(format!("Ending hook: {hook}"));
    }

    Some(format!("Outline for \"{}\"\n{}", chapter.title, parts.join("\n")))
}

pub fn power_system(ps: &PowerSystem) -> String {
    let mut lines = vec![format!("Power system: {}", ps.name)];
    if !ps.levels.is_empty() {
        lines.push(format!("Levels: {}", ps.levels.join(" > ")));
    }
    lines.push("Core rules:".to_string());
    lines.extend(ps.core_rules.iter().map(|r| format!("- {r}")));
    if !ps.constraints.is_empty() {
        lines.push("Constraints:".to_string());
        lines.extend(ps.constraints.iter().map(|c| format!("- {c}")));
    }
    lines.join("\n")
}

pub fn social_rules(rules: &BTreeMap<String, String>) -> String {
    let mut lines = vec!["Social rules:".to_string()];
    lines.extend(rules.iter().map(|(k, v)| format!("- {k}: {v}")));
    lines.join("\n")
}

/// Trailing `max_chars` characters of `text`, on a char boundary.
pub fn tail_chars(text: &str, max_chars: usize) -> &str {
    if max_chars == 0 {
        return "";
    }
    let count = text.chars().count();
    if count <= max_chars {
        return text;
    }
    match text.char_indices().nth(count - max_chars) {
        Some((idx, _)) => &text[idx..],
        None => text,
    }
}

fn name_with_role(name: &str, role: &str) -> String {
    if role.trim().is_empty() {
        name.to_string()
    } else {
        format!("{name} ({role})")
    }
}

fn push_field(lines: &mut Vec<String>, label: &str, value: Option<&str>) {
    if let Some(v) = non_blank(value) {
        lines.push(format!("{label}: {v}"));
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
