//! Mapping rule configuration onto rule objects.

use serde::{Deserialize, Deserializer};

use super::defaults::default_group_id_depth;
use crate::dependency::{Flag, Scope};
use crate::error::ConfigError;
use crate::order::{AlphabeticalOrder, GroupIdOrder, OptionalOrder, OrderingRule, ScopeOrder};
use crate::tree::TreeLevel;

/// One entry of the `rules:` list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RuleConfig {
    #[serde(flatten)]
    pub kind: RuleKind,
    /// Expected order of the groups this rule produces in hierarchical mode.
    #[serde(default, deserialize_with = "deserialize_scalars")]
    pub group_order: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum RuleKind {
    Alphabetical {
        #[serde(default)]
        inversed: bool,
    },
    /// Either `scopes: [a, b, c]` or `first: a` with `then: b` / `then: [b, c]`.
    Scope {
        #[serde(default)]
        scopes: Vec<String>,
        #[serde(default)]
        first: Option<String>,
        #[serde(default, deserialize_with = "deserialize_one_or_many")]
        then: Vec<String>,
    },
    Optional {
        #[serde(deserialize_with = "deserialize_scalar")]
        first: String,
        #[serde(deserialize_with = "deserialize_scalar")]
        then: String,
    },
    GroupId {
        #[serde(default = "default_group_id_depth")]
        depth: usize,
    },
}

impl RuleConfig {
    pub fn new(kind: RuleKind) -> Self {
        Self {
            kind,
            group_order: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self.kind {
            RuleKind::Alphabetical { .. } => "alphabetical",
            RuleKind::Scope { .. } => "scope",
            RuleKind::Optional { .. } => "optional",
            RuleKind::GroupId { .. } => "group-id",
        }
    }

    pub fn to_rule(&self) -> Result<OrderingRule, ConfigError> {
        match &self.kind {
            RuleKind::Alphabetical { inversed } => Ok(AlphabeticalOrder::new(*inversed).into()),
            RuleKind::Scope {
                scopes,
                first,
                then,
            } => {
                let chain: Vec<Scope> = scope_names(scopes, first.as_deref(), then)
                    .into_iter()
                    .map(Scope::from_value)
                    .collect();
                Ok(ScopeOrder::new(chain)?.into())
            }
            RuleKind::Optional { first, then } => Ok(OptionalOrder::new(first, then)?.into()),
            RuleKind::GroupId { depth } => Ok(GroupIdOrder::new(*depth)?.into()),
        }
    }

    pub fn to_level(&self) -> Result<TreeLevel, ConfigError> {
        Ok(TreeLevel::new(self.to_rule()?).with_group_order(self.group_order.iter().cloned()))
    }

    /// Scope names that are not recognised and will be treated as compile.
    pub fn unknown_scopes(&self) -> Vec<&str> {
        match &self.kind {
            RuleKind::Scope {
                scopes,
                first,
                then,
            } => scope_names(scopes, first.as_deref(), then)
                .into_iter()
                .filter(|name| Scope::parse(name).is_none())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// True when a scope rule sets both `scopes` and `first`/`then`.
    pub fn has_mixed_scope_forms(&self) -> bool {
        matches!(
            &self.kind,
            RuleKind::Scope { scopes, first, then }
                if !scopes.is_empty() && (first.is_some() || !then.is_empty())
        )
    }

    /// Rules that partition but never report a violation themselves.
    pub fn is_grouping_only(&self) -> bool {
        matches!(self.kind, RuleKind::GroupId { .. })
    }
}

/// `scopes` wins over `first`/`then` when both are given.
fn scope_names<'a>(scopes: &'a [String], first: Option<&'a str>, then: &'a [String]) -> Vec<&'a str> {
    if !scopes.is_empty() {
        return scopes.iter().map(String::as_str).collect();
    }

    first
        .into_iter()
        .chain(then.iter().map(String::as_str))
        .collect()
}

fn deserialize_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Flag::deserialize(deserializer).map(Flag::into_string)
}

fn deserialize_scalars<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values: Vec<Flag> = Vec::deserialize(deserializer)?;
    Ok(values.into_iter().map(Flag::into_string).collect())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn deserialize_one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(value) => vec![value],
        OneOrMany::Many(values) => values,
    })
}
