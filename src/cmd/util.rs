//! Utility commands (version, man page generation, completion).

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;

use crate::cli::Cli;

const BIN_NAME: &str = "deporder";

/// Show version information
pub fn cmd_version(verbose: bool) -> Result<()> {
    println!("{} {}", BIN_NAME, env!("CARGO_PKG_VERSION"));

    if verbose {
        println!("commit: {}", env!("GIT_SHA"));
        println!("built: {}", env!("BUILD_DATE"));
    }

    Ok(())
}

/// Generate man page
pub fn cmd_man(out_dir: Option<&PathBuf>) -> Result<()> {
    let man = clap_mangen::Man::new(Cli::command());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    let output_dir = out_dir.cloned().unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    let man_path = output_dir.join(format!("{}.1", BIN_NAME));
    std::fs::write(&man_path, buffer)
        .with_context(|| format!("Failed to write {}", man_path.display()))?;

    println!("Man page written to: {}", man_path.display());
    Ok(())
}

/// Generate shell completion script
pub fn cmd_completion(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, BIN_NAME, &mut io::stdout());
    Ok(())
}
