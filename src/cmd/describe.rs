//! `deporder describe`: show how the configured rules will be applied.

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

use deporder::ui::{colors, format};
use deporder::Mode;

pub fn cmd_describe(config_path: Option<&PathBuf>, mode: Option<Mode>) -> Result<()> {
    let config = super::load_config(config_path)?;
    let mode = mode.unwrap_or(config.mode);
    let engine = config.engine_with_mode(mode)?;

    println!("{} {}", colors::heading("Mode:"), mode);
    println!(
        "{} {}",
        colors::heading("Rules:"),
        format::count(config.rules.len(), "rule", "rules")
    );
    for (i, rule) in config.rules.iter().enumerate() {
        let mut line = format!("  {}. {}", i + 1, rule.name());
        if mode == Mode::Hierarchical && !rule.group_order.is_empty() {
            line.push_str(&format!(" (group order: {})", rule.group_order.join(", ")));
        }
        println!("{}", line);
    }

    println!();
    for narration in engine.describe() {
        println!("{} {}", "→".cyan(), narration);
    }

    if config.check_dependency_management {
        println!(
            "{}",
            colors::secondary("dependencyManagement is checked when present")
        );
    }

    Ok(())
}
