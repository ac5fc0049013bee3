use anyhow::{Context, Result};
use isolgen_core::{Config, Driver, RunOptions};
use tracing::debug;

use crate::display::print_report;
use crate::utils::resolve_root;

pub fn generate_command(root: Option<&str>, force: bool, quiet: bool, clear: bool) -> Result<()> {
    let project_root = resolve_root(root)?;
    debug!("Generating interfaces in {}", project_root.display());

    let config = Config::load_or_default(&project_root).context("Failed to load configuration")?;
    let driver = Driver::new(&project_root, config);

    let report = driver
        .run(RunOptions { force, clear })
        .with_context(|| format!("Failed to generate interfaces in {}", project_root.display()))?;

    print_report(&report, quiet);
    Ok(())
}
