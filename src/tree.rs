//! Builds a [`ValidationNode`] tree from a flat list of rules.
//!
//! The first rule groups, the next rule groups within each of those groups,
//! and so on; the last rule becomes the leaf. A single rule builds a lone
//! leaf.

use crate::error::ConfigError;
use crate::node::ValidationNode;
use crate::order::OrderingRule;

/// One rule plus the group order expected when it acts as a grouping level.
#[derive(Debug)]
pub struct TreeLevel {
    pub rule: OrderingRule,
    pub group_order: Vec<String>,
}

impl TreeLevel {
    pub fn new(rule: impl Into<OrderingRule>) -> Self {
        Self {
            rule: rule.into(),
            group_order: Vec::new(),
        }
    }

    pub fn with_group_order<I, S>(mut self, order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.group_order = order.into_iter().map(Into::into).collect();
        self
    }
}

#[derive(Debug, Default)]
pub struct TreeBuilder {
    levels: Vec<TreeLevel>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_levels(levels: Vec<TreeLevel>) -> Self {
        Self { levels }
    }

    pub fn rule(mut self, rule: impl Into<OrderingRule>) -> Self {
        self.levels.push(TreeLevel::new(rule));
        self
    }

    pub fn grouped_rule<I, S>(mut self, rule: impl Into<OrderingRule>, group_order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.levels
            .push(TreeLevel::new(rule).with_group_order(group_order));
        self
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// The group order of the last level is dropped, since a leaf never
    /// groups.
    pub fn build(self) -> Result<ValidationNode, ConfigError> {
        let mut levels = self.levels.into_iter().rev();
        let last = levels.next().ok_or(ConfigError::NoRules)?;

        let tree = levels.fold(ValidationNode::leaf(last.rule), |child, level| {
            ValidationNode::group(level.rule, child, level.group_order)
        });
        Ok(tree)
    }
}
