//! `deporder init`: write a starter configuration.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use deporder::config::STARTER_CONFIG;
use deporder::paths::CONFIG_FILE;
use deporder::ui;

pub fn cmd_init(force: bool) -> Result<()> {
    init_at(Path::new(CONFIG_FILE), force)
}

fn init_at(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite it.",
            path.display()
        );
    }

    std::fs::write(path, STARTER_CONFIG)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), force, "Wrote starter config");

    if !ui::is_quiet() {
        println!(
            "{} Created {}",
            "✓".green(),
            ui::colors::identifier(&path.display().to_string())
        );
        println!("  Edit the rules, then run: deporder check");
    }

    Ok(())
}
