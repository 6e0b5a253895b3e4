//! CLI argument definitions for deporder.

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

use deporder::Mode;

#[derive(Parser)]
#[command(name = "deporder")]
#[command(version)]
#[command(about = "Check the ordering of declared build dependencies", long_about = None)]
#[command(
    after_help = "GETTING STARTED:\n    deporder init               Write a starter deporder.yaml\n    deporder describe           Show the rules that will be applied\n    deporder check              Check deps.yaml (or --manifest) against the rules"
)]
pub struct Cli {
    /// Suppress all non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log rule narration (same as DEPORDER_LOG=info)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check dependency order in one or more project models
    Check {
        /// Config file to use instead of deporder.yaml (global config is not merged)
        #[arg(long, short)]
        config: Option<PathBuf>,
        /// Project model to check (YAML or JSON). Globs are expanded.
        /// Can be specified multiple times
        #[arg(long, short, value_name = "PATH|GLOB")]
        manifest: Vec<String>,
        /// Override the configured mode
        #[arg(long, value_parser = parse_mode)]
        mode: Option<Mode>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Do not check the dependencyManagement list
        #[arg(long)]
        skip_dependency_management: bool,
    },
    /// Show the configured rules and how they will be applied
    Describe {
        /// Config file to use instead of deporder.yaml
        #[arg(long, short)]
        config: Option<PathBuf>,
        /// Override the configured mode
        #[arg(long, value_parser = parse_mode)]
        mode: Option<Mode>,
    },
    /// Write a starter deporder.yaml in the current directory
    Init {
        /// Overwrite an existing deporder.yaml
        #[arg(long)]
        force: bool,
    },
    /// Show version information (with --verbose, build information too)
    Version,
    /// Generate shell completion script
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Generate man page
    #[command(hide = true)]
    Man {
        /// Output directory for the man page (defaults to current directory)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn parse_mode(value: &str) -> Result<Mode, String> {
    value.parse()
}
