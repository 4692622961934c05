//! `storyloom config`: Show or initialize configuration.

use storyloom_config::AppConfig;

pub fn run(init: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config_path = AppConfig::config_dir().join("config.toml");

    if init {
        if config_path.exists() {
            println!("⚠️  Config already exists at {}", config_path.display());
        } else {
            std::fs::create_dir_all(AppConfig::config_dir())?;
            std::fs::write(&config_path, AppConfig::default_toml())?;
            println!("✅ Wrote default config to {}", config_path.display());
        }
        return Ok(());
    }

    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    println!("📖 Storyloom Config");
    println!("===================");
    println!("  Config file:     {}", config_path.display());
    println!("  Story snapshot:  {}", config.snapshot_path().display());
    println!("  Budget total:    {}", config.budget.total);
    println!("  Output reserve:  {}", config.budget.output_reserve);
    println!("  Prompt reserve:  {}", config.budget.prompt_reserve);
    println!("  Available:       {}", config.budget.available());
    println!("  Continuity:      {} chars", config.context.continuity_chars);
    println!();
    println!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}
