pub mod chapter;
pub mod config_cmd;
pub mod estimate;
pub mod global;

use std::path::PathBuf;
use std::sync::Arc;
use storyloom_config::AppConfig;
use storyloom_context::BudgetedResult;
use storyloom_store::InMemoryStore;

/// Open the story snapshot given on the command line, or the configured one.
pub(crate) fn open_store(
    config: &AppConfig,
    story: Option<PathBuf>,
) -> Result<Arc<InMemoryStore>, Box<dyn std::error::Error>> {
    let path = story.unwrap_or_else(|| config.snapshot_path());
    tracing::debug!("Loading story snapshot from {}", path.display());
    let store = InMemoryStore::from_path(&path)?;
    Ok(Arc::new(store))
}

/// Print a result as formatted context or JSON, with a truncation notice on stderr.
pub(crate) fn emit(result: &BudgetedResult, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        println!("{}", result.render());
    }

    if result.truncated {
        eprintln!(
            "⚠️  Context truncated: {} item(s) dropped, {}/{} tokens used ({:.1}%)",
            result.dropped.len(),
            result.total_size,
            result.budget,
            result.utilization_pct()
        );
    }
    Ok(())
}
