//! `storyloom chapter`: Build the context for one chapter.

use std::path::{Path, PathBuf};
use storyloom_config::AppConfig;
use storyloom_context::{ChapterContextBuilder, SelectedItem, StorySources};

pub async fn run(
    chapter_id: &str,
    story: Option<PathBuf>,
    select: Option<PathBuf>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let store = super::open_store(&config, story)?;

    let additional = match select {
        Some(path) => read_selection(&path)?,
        None => Vec::new(),
    };

    let builder = ChapterContextBuilder::new(
        StorySources::from_store(store),
        config.budget,
    )
    .with_continuity_chars(config.context.continuity_chars);

    let result = builder.build(chapter_id, additional).await?;
    super::emit(&result, json)
}

fn read_selection(path: &Path) -> Result<Vec<SelectedItem>, Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let items: Vec<SelectedItem> = serde_json::from_str(&raw)
        .map_err(|e| format!("Invalid selection file {}: {e}", path.display()))?;
    Ok(items)
}
