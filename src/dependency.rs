//! Dependency records as supplied by the host build tool.
//!
//! A [`Dependency`] is read-only input. Absent scope and optional values are
//! never written back; the accessors below compute the effective value on
//! demand so the caller's records stay untouched.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Scope assumed when a dependency does not declare one.
pub const DEFAULT_SCOPE: &str = "compile";

/// A single build dependency declaration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    pub group_id: String,
    pub artifact_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// Raw optional flag. Manifests may spell it as a boolean or a string.
    #[serde(
        default,
        deserialize_with = "deserialize_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub optional: Option<String>,
}

impl Dependency {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            ..Default::default()
        }
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    pub fn with_optional(mut self, optional: impl Into<String>) -> Self {
        self.optional = Some(optional.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// `groupId:artifactId`
    pub fn coordinates(&self) -> String {
        format!("{}:{}", self.group_id, self.artifact_id)
    }

    /// The declared scope, or `compile` when none is declared.
    pub fn effective_scope(&self) -> &str {
        self.scope.as_deref().unwrap_or(DEFAULT_SCOPE)
    }

    /// `"true"` only when the optional flag reads `true` (any case).
    pub fn optional_key(&self) -> &'static str {
        match self.optional.as_deref() {
            Some(value) if value.trim().eq_ignore_ascii_case("true") => "true",
            _ => "false",
        }
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)
    }
}

/// A YAML/JSON scalar that may be written as a boolean or as text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum Flag {
    Bool(bool),
    Text(String),
}

impl Flag {
    pub(crate) fn into_string(self) -> String {
        match self {
            Flag::Bool(b) => b.to_string(),
            Flag::Text(s) => s,
        }
    }
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let flag: Option<Flag> = Option::deserialize(deserializer)?;
    Ok(flag.map(Flag::into_string))
}

/// Standard Maven-style dependency scopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    #[default]
    Compile,
    Provided,
    Runtime,
    Test,
    System,
    Import,
}

impl Scope {
    pub const ALL: [Scope; 6] = [
        Scope::Compile,
        Scope::Provided,
        Scope::Runtime,
        Scope::Test,
        Scope::System,
        Scope::Import,
    ];

    /// Strict, case-insensitive lookup.
    pub fn parse(value: &str) -> Option<Scope> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|scope| scope.as_str().eq_ignore_ascii_case(value))
    }

    /// Lenient lookup: unknown values fall back to [`Scope::Compile`].
    pub fn from_value(value: &str) -> Scope {
        Self::parse(value).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Compile => "compile",
            Scope::Provided => "provided",
            Scope::Runtime => "runtime",
            Scope::Test => "test",
            Scope::System => "system",
            Scope::Import => "import",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
