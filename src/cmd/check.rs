//! `deporder check`: validate dependency order in project models.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::path::{Path, PathBuf};

use deporder::engine::{Engine, Report, Section};
use deporder::project::ProjectModel;
use deporder::ui::{self, colors, format};
use deporder::Mode;

use crate::cli::OutputFormat;

pub struct CheckOptions {
    pub config: Option<PathBuf>,
    pub manifests: Vec<String>,
    pub mode: Option<Mode>,
    pub format: OutputFormat,
    pub skip_dependency_management: bool,
}

/// Result for one project model, as emitted with `--format json`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ManifestResult {
    manifest: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    clean: bool,
    violations: usize,
    sections: Vec<Section>,
}

pub fn cmd_check(options: CheckOptions) -> Result<()> {
    let config = super::load_config(options.config.as_ref())?;
    let mode = options.mode.unwrap_or(config.mode);
    let engine = config.engine_with_mode(mode)?;
    let check_management = config.check_dependency_management && !options.skip_dependency_management;

    let manifests = if options.manifests.is_empty() {
        resolve_manifests(std::slice::from_ref(&config.manifest))?
    } else {
        resolve_manifests(&options.manifests)?
    };

    narrate(&engine);

    let mut results = Vec::with_capacity(manifests.len());
    for path in &manifests {
        let project = ProjectModel::load_from(path)?;
        let report = check_project(&engine, &project, check_management);
        results.push((path.as_path(), project.name.clone(), report));
    }

    let total_violations: usize = results.iter().map(|(_, _, r)| r.violation_count()).sum();

    match options.format {
        OutputFormat::Json => print_json(&results)?,
        OutputFormat::Text => print_text(&results, total_violations),
    }

    if total_violations > 0 {
        std::process::exit(1);
    }

    Ok(())
}

fn narrate(engine: &Engine) {
    match engine.mode() {
        Mode::Hierarchical => tracing::info!("Using group sorting mode"),
        Mode::Simple => tracing::info!("Using simple sorting mode"),
    }
    for line in engine.describe() {
        tracing::info!("{}", line);
    }
}

fn check_project(engine: &Engine, project: &ProjectModel, check_management: bool) -> Report {
    if project.dependencies.len() <= 1 {
        tracing::info!("Not enough dependencies to order");
    }
    if check_management {
        if let Some(managed) = &project.dependency_management {
            if managed.len() <= 1 {
                tracing::info!("Not enough managed dependencies to order");
            }
        }
    }

    let report = engine.check(project, check_management);
    tracing::debug!(
        violations = report.violation_count(),
        lists = report.sections.len(),
        "Checked project model"
    );
    report
}

/// Expand `~` and environment variables, then glob patterns. Plain paths
/// are passed through so a missing file surfaces as a read error.
pub fn resolve_manifests(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for pattern in patterns {
        let expanded = shellexpand::full(pattern)
            .with_context(|| format!("Failed to expand manifest path '{}'", pattern))?;

        if !is_glob(&expanded) {
            paths.push(PathBuf::from(expanded.as_ref()));
            continue;
        }

        let mut matched: Vec<PathBuf> = glob::glob(&expanded)
            .with_context(|| format!("Invalid manifest pattern '{}'", pattern))?
            .collect::<Result<_, _>>()
            .with_context(|| format!("Failed to read matches for '{}'", pattern))?;

        if matched.is_empty() {
            anyhow::bail!("No manifest matches '{}'", pattern);
        }

        matched.sort();
        tracing::debug!(pattern = %pattern, matches = matched.len(), "Expanded manifest pattern");
        paths.extend(matched);
    }

    Ok(paths)
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

fn print_json(results: &[(&Path, Option<String>, Report)]) -> Result<()> {
    let output: Vec<ManifestResult> = results
        .iter()
        .map(|(path, name, report)| ManifestResult {
            manifest: path.display().to_string(),
            name: name.clone(),
            clean: report.is_clean(),
            violations: report.violation_count(),
            sections: report.sections.clone(),
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_text(results: &[(&Path, Option<String>, Report)], total_violations: usize) {
    let quiet = ui::is_quiet();

    for (path, name, report) in results {
        let path = path.display().to_string();
        let label = match name {
            Some(name) => format!("{} ({})", colors::identifier(&path), name),
            None => colors::identifier(&path).to_string(),
        };

        if report.is_clean() {
            if !quiet {
                println!("{} {}: {}", "✓".green(), label, report);
            }
            continue;
        }

        println!(
            "{} {}: {}",
            "✗".red(),
            label,
            colors::error("Dependencies are not in correct order")
        );
        for section in &report.sections {
            println!("  {} {}:", ui::section_icon(section), section.list);
            if section.is_clean() {
                println!("    {}", colors::secondary("(no violations)"));
            }
            for violation in &section.violations {
                println!("    {} {}", ui::violation_symbol(), violation);
            }
        }
    }

    if total_violations > 0 {
        let failing = results.iter().filter(|(_, _, r)| !r.is_clean()).count();
        println!(
            "\nFound {} in {}.",
            format::count(total_violations, "violation", "violations"),
            format::count(failing, "manifest", "manifests")
        );
    } else if !quiet {
        println!(
            "\nAll {} in correct order.",
            format::count(results.len(), "manifest", "manifests")
        );
    }
}
