//! Validation entry point.
//!
//! In [`Mode::Simple`] every configured rule runs on its own over the whole
//! list, in configuration order, and the violations are concatenated. In
//! [`Mode::Hierarchical`] the rules are composed into one tree by
//! [`TreeBuilder`] and the tree runs once.
//!
//! The engine never prints or logs. [`Engine::describe`] returns narration
//! lines for the caller to log.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::dependency::Dependency;
use crate::error::ConfigError;
use crate::node::ValidationNode;
use crate::project::ProjectModel;
use crate::tree::{TreeBuilder, TreeLevel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Simple,
    Hierarchical,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Simple => write!(f, "simple"),
            Mode::Hierarchical => write!(f, "hierarchical"),
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simple" => Ok(Mode::Simple),
            "hierarchical" | "group" | "grouped" => Ok(Mode::Hierarchical),
            other => Err(format!(
                "Invalid mode '{}'. Use 'simple' or 'hierarchical'.",
                other
            )),
        }
    }
}

#[derive(Debug)]
enum Plan {
    /// One independent leaf per configured rule.
    Simple(Vec<ValidationNode>),
    Tree(ValidationNode),
}

#[derive(Debug)]
pub struct Engine {
    mode: Mode,
    plan: Plan,
}

impl Engine {
    pub fn new(levels: Vec<TreeLevel>, mode: Mode) -> Result<Self, ConfigError> {
        if levels.is_empty() {
            return Err(ConfigError::NoRules);
        }

        let plan = match mode {
            Mode::Simple => Plan::Simple(
                levels
                    .into_iter()
                    .map(|level| ValidationNode::leaf(level.rule))
                    .collect(),
            ),
            Mode::Hierarchical => Plan::Tree(TreeBuilder::from_levels(levels).build()?),
        };

        Ok(Self { mode, plan })
    }

    /// Wrap an already built tree.
    pub fn from_tree(tree: ValidationNode) -> Self {
        Self {
            mode: Mode::Hierarchical,
            plan: Plan::Tree(tree),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn validate(&self, deps: &[Dependency]) -> Vec<String> {
        if deps.len() <= 1 {
            return Vec::new();
        }

        match &self.plan {
            Plan::Simple(leaves) => leaves.iter().flat_map(|leaf| leaf.validate(deps)).collect(),
            Plan::Tree(tree) => tree.validate(deps),
        }
    }

    /// Check the dependency list and, when present and requested, the
    /// dependency-management list.
    pub fn check(&self, project: &ProjectModel, check_management: bool) -> Report {
        let mut sections = vec![Section {
            list: ListKind::Dependencies,
            checked: project.dependencies.len(),
            violations: self.validate(&project.dependencies),
        }];

        if check_management {
            if let Some(managed) = &project.dependency_management {
                sections.push(Section {
                    list: ListKind::DependencyManagement,
                    checked: managed.len(),
                    violations: self.validate(managed),
                });
            }
        }

        Report { sections }
    }

    /// One line per rule in simple mode, one line for the whole tree in
    /// hierarchical mode.
    pub fn describe(&self) -> Vec<String> {
        match &self.plan {
            Plan::Simple(leaves) => leaves.iter().map(ValidationNode::describe).collect(),
            Plan::Tree(tree) => vec![tree.describe()],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ListKind {
    Dependencies,
    DependencyManagement,
}

impl ListKind {
    pub fn label(&self) -> &'static str {
        match self {
            ListKind::Dependencies => "dependencies",
            ListKind::DependencyManagement => "dependencyManagement",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub list: ListKind,
    /// Number of dependencies in the checked list.
    pub checked: usize,
    pub violations: Vec<String>,
}

impl Section {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Report {
    pub sections: Vec<Section>,
}

impl Report {
    pub fn is_clean(&self) -> bool {
        self.sections.iter().all(Section::is_clean)
    }

    pub fn violation_count(&self) -> usize {
        self.sections.iter().map(|s| s.violations.len()).sum()
    }

    pub fn section(&self, list: ListKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.list == list)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            return write!(f, "Dependencies are in correct order");
        }

        write!(f, "Dependencies are not in correct order")?;
        for section in &self.sections {
            write!(f, "\n{}:", section.list)?;
            if section.is_clean() {
                write!(f, "\n  (no violations)")?;
            }
            for violation in &section.violations {
                write!(f, "\n  {}", violation)?;
            }
        }
        Ok(())
    }
}
