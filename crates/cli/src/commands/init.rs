use anyhow::{Context, Result};
use isolgen_core::{Config, config::CONFIG_FILE_NAMES};
use tracing::info;

use crate::utils::resolve_root;

pub fn init_command(root: Option<&str>, force: bool) -> Result<()> {
    let project_root = resolve_root(root)?;
    let config_path = project_root.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        println!("❌ Config already exists at: {}", config_path.display());
        println!("   Use --force to overwrite");
        return Ok(());
    }

    let mut config = Config::default();
    if !project_root.join(&config.source_dir).is_dir() && project_root.join("src").is_dir() {
        info!("No contracts/ directory, using src/");
        config.source_dir = "src".into();
    }

    config
        .save_to_file(&config_path)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!("✅ Created config: {}", config_path.display());
    Ok(())
}
