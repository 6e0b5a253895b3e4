//! CLI entry point for deporder.

mod cli;
mod cmd;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Run on a thread with an explicit stack size. Deeply nested rule trees
    // recurse once per level, and Windows defaults to a 1MB main stack.
    const STACK_SIZE: usize = 8 * 1024 * 1024; // 8 MB

    let thread = std::thread::Builder::new()
        .stack_size(STACK_SIZE)
        .spawn(run)?;

    match thread.join() {
        Ok(result) => result,
        Err(payload) => std::panic::resume_unwind(payload),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env("DEPORDER_LOG").unwrap_or_else(|_| default.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.quiet {
        std::env::set_var("DEPORDER_QUIET", "1");
    }
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Check {
            config,
            manifest,
            mode,
            format,
            skip_dependency_management,
        } => cmd::check::cmd_check(cmd::check::CheckOptions {
            config,
            manifests: manifest,
            mode,
            format,
            skip_dependency_management,
        }),
        Commands::Describe { config, mode } => cmd::describe::cmd_describe(config.as_ref(), mode),
        Commands::Init { force } => cmd::init::cmd_init(force),
        Commands::Version => cmd::util::cmd_version(cli.verbose),
        Commands::Completion { shell } => cmd::util::cmd_completion(shell),
        Commands::Man { out_dir } => cmd::util::cmd_man(out_dir.as_ref()),
    }
}
