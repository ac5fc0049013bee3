use anyhow::{Context, Result};
use isolgen_core::{Config, Driver};
use tracing::debug;

use crate::display::print_types;
use crate::utils::{relative_to_root, resolve_root};

pub fn show_command(file: &str, root: Option<&str>, types: bool) -> Result<()> {
    let project_root = resolve_root(root)?;
    let relative = relative_to_root(&project_root, file)?;
    debug!("Showing interface for {}", relative.display());

    let config = Config::load_or_default(&project_root).context("Failed to load configuration")?;
    let driver = Driver::new(&project_root, config);
    let mut session = driver
        .session_for(&relative)
        .context("Failed to process the files generated before it")?;

    let interface = session
        .generate_file(&relative)
        .with_context(|| format!("Failed to generate interface for {}", relative.display()))?;

    if types {
        print_types(session.registry());
        return Ok(());
    }
    match interface {
        Some(interface) => print!("{interface}"),
        None => eprintln!("{} needs no interface", relative.display()),
    }
    Ok(())
}
