//! Configuration management for deporder.
//!
//! The project configuration lives in `deporder.yaml`. An optional global
//! configuration in the user's config directory supplies fallbacks; project
//! values always win.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::engine::{Engine, Mode};
use crate::paths::{CONFIG_FILE, GLOBAL_CONFIG_FILE};
use crate::tree::TreeLevel;

pub mod defaults;
pub mod rules;

pub use defaults::STARTER_CONFIG;
pub use rules::{RuleConfig, RuleKind};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    #[serde(default)]
    pub mode: Mode,
    #[serde(default = "defaults::default_true")]
    pub check_dependency_management: bool,
    #[serde(default = "defaults::default_manifest")]
    pub manifest: String,
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

impl Config {
    /// Load configuration with merge semantics.
    /// Merge order (later overrides earlier):
    /// 1. Global config (`<config dir>/deporder/config.yaml`)
    /// 2. Project config (`deporder.yaml`)
    pub fn load() -> Result<Self> {
        Self::load_merged_from(global_config_path().as_deref(), Path::new(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(content).context("Failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load merged configuration from specified global and project config paths.
    pub fn load_merged_from(global_path: Option<&Path>, project_path: &Path) -> Result<Self> {
        // Load global config if it exists
        let global_config = global_path
            .filter(|p| p.exists())
            .map(PartialConfig::load_from)
            .transpose()?
            .unwrap_or_default();

        // Project config is required
        let project_config = PartialConfig::load_from(project_path)?;

        let config = global_config.merge_with(project_config);
        config.validate()?;
        Ok(config)
    }

    /// Check that there is at least one rule and that every rule maps onto a
    /// valid rule object.
    pub fn validate(&self) -> Result<()> {
        if self.rules.is_empty() {
            anyhow::bail!("No ordering rules configured. Add at least one entry under 'rules'.");
        }

        for (i, rule) in self.rules.iter().enumerate() {
            rule.to_rule()
                .with_context(|| format!("Invalid {} rule (rules[{}])", rule.name(), i))?;
        }

        Ok(())
    }

    /// Rule levels for `mode`. Settings that will have no effect are logged
    /// here, once per engine.
    pub fn levels(&self, mode: Mode) -> Result<Vec<TreeLevel>> {
        let last = self.rules.len().saturating_sub(1);
        self.rules
            .iter()
            .enumerate()
            .map(|(i, rule)| {
                warn_ineffective(rule, i, mode == Mode::Simple || i == last);
                rule.to_level()
                    .with_context(|| format!("Invalid {} rule (rules[{}])", rule.name(), i))
            })
            .collect()
    }

    /// Build an engine in the configured mode.
    pub fn engine(&self) -> Result<Engine> {
        self.engine_with_mode(self.mode)
    }

    pub fn engine_with_mode(&self, mode: Mode) -> Result<Engine> {
        let levels = self.levels(mode)?;
        Engine::new(levels, mode).context("Failed to build validation rules")
    }
}

/// `is_leaf` is true in simple mode and for the last rule in hierarchical
/// mode.
fn warn_ineffective(rule: &RuleConfig, index: usize, is_leaf: bool) {
    let name = rule.name();

    for scope in rule.unknown_scopes() {
        tracing::warn!(rule = name, index, scope = %scope, "Unknown scope, treating it as compile");
    }
    if rule.has_mixed_scope_forms() {
        tracing::warn!(
            rule = name,
            index,
            "Scope rule sets both 'scopes' and 'first'/'then'; using 'scopes'"
        );
    }
    if !is_leaf {
        return;
    }
    if !rule.group_order.is_empty() {
        tracing::warn!(
            rule = name,
            index,
            "group-order is ignored where the rule does not group"
        );
    }
    if rule.is_grouping_only() {
        tracing::warn!(
            rule = name,
            index,
            "group-id only groups and checks nothing where it does not group"
        );
    }
}

/// Returns the path to the global config file, e.g.
/// `~/.config/deporder/config.yaml` on Linux.
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(GLOBAL_CONFIG_FILE))
}

/// Partial config for merging - all fields optional
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
struct PartialConfig {
    pub mode: Option<Mode>,
    pub check_dependency_management: Option<bool>,
    pub manifest: Option<String>,
    pub rules: Option<Vec<RuleConfig>>,
}

impl PartialConfig {
    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).context("Failed to parse config")
    }

    /// Merge this global config with a project config, returning the merged result.
    /// Values from the project config take precedence over global.
    fn merge_with(self, project: PartialConfig) -> Config {
        Config {
            // Project value > global value > default
            mode: project.mode.or(self.mode).unwrap_or_default(),
            check_dependency_management: project
                .check_dependency_management
                .or(self.check_dependency_management)
                .unwrap_or_else(defaults::default_true),
            manifest: project
                .manifest
                .or(self.manifest)
                .unwrap_or_else(defaults::default_manifest),
            // Rules are replaced as a whole, never concatenated
            rules: project.rules.or(self.rules).unwrap_or_default(),
        }
    }
}
