//! Project model loading.
//!
//! A project model is the dependency list of one build module, written as
//! YAML or JSON:
//!
//! ```yaml
//! name: my-service
//! dependencies:
//!   - groupId: com.google.guava
//!     artifactId: guava
//!   - groupId: junit
//!     artifactId: junit
//!     scope: test
//! dependencyManagement:
//!   - groupId: org.slf4j
//!     artifactId: slf4j-api
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::dependency::Dependency;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectModel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
    /// `None` when the model has no dependency-management section at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependency_management: Option<Vec<Dependency>>,
}

impl ProjectModel {
    pub fn new(dependencies: Vec<Dependency>) -> Self {
        Self {
            dependencies,
            ..Default::default()
        }
    }

    pub fn with_dependency_management(mut self, managed: Vec<Dependency>) -> Self {
        self.dependency_management = Some(managed);
        self
    }

    /// Load a model, choosing JSON or YAML by file extension.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read project model from {}", path.display()))?;

        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        if is_json {
            Self::parse_json(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))
        } else {
            Self::parse_yaml(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))
        }
    }

    pub fn parse_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).context("Invalid project model YAML")
    }

    pub fn parse_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Invalid project model JSON")
    }

    /// Display name: the declared name or a fallback such as the file name.
    pub fn display_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.name.as_deref().unwrap_or(fallback)
    }
}
