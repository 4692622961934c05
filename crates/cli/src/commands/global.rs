//! `storyloom global`: Build the story-wide context.

use std::path::PathBuf;
use storyloom_config::AppConfig;
use storyloom_context::{GlobalContextBuilder, StorySources};

pub async fn run(
    summary: bool,
    story: Option<PathBuf>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let store = super::open_store(&config, story)?;

    let builder = GlobalContextBuilder::new(
        &StorySources::from_store(store),
        config.budget,
    );
    let result = if summary {
        builder.build_summary().await
    } else {
        builder.build_full().await
    };

    super::emit(&result, json)
}
