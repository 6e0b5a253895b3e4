//! Ordering rules for dependency lists.
//!
//! Every rule answers four questions about a dependency:
//!
//! - which key it sorts or groups by ([`OrderingRule::extract_key`])
//! - whether the rule cares about it at all ([`OrderingRule::is_applicable`])
//! - whether two applicable neighbours are in the wrong order
//!   ([`OrderingRule::validate_adjacent`])
//! - how to describe itself for log narration ([`OrderingRule::describe`])
//!
//! The built-in rules are closed enum variants. Anything else plugs in through
//! [`CustomOrder`].

mod alphabetical;
mod group_id;
mod optional;
mod scope;

pub use alphabetical::AlphabeticalOrder;
pub use group_id::GroupIdOrder;
pub use optional::OptionalOrder;
pub use scope::ScopeOrder;

use std::fmt;

use crate::dependency::Dependency;

/// Extension point for rules that are not built in.
pub trait CustomOrder: fmt::Debug + Send + Sync {
    fn extract_key(&self, dep: &Dependency) -> String;

    fn is_applicable(&self, _dep: &Dependency) -> bool {
        true
    }

    fn describe(&self) -> String;

    fn validate_adjacent(&self, _prev: &Dependency, _curr: &Dependency) -> Option<String> {
        None
    }
}

#[derive(Debug)]
pub enum OrderingRule {
    Alphabetical(AlphabeticalOrder),
    Scope(ScopeOrder),
    Optional(OptionalOrder),
    Custom(Box<dyn CustomOrder>),
}

impl OrderingRule {
    pub fn custom(rule: impl CustomOrder + 'static) -> Self {
        OrderingRule::Custom(Box::new(rule))
    }

    pub fn extract_key(&self, dep: &Dependency) -> String {
        match self {
            OrderingRule::Alphabetical(rule) => rule.extract_key(dep),
            OrderingRule::Scope(rule) => rule.extract_key(dep),
            OrderingRule::Optional(rule) => rule.extract_key(dep).to_string(),
            OrderingRule::Custom(rule) => rule.extract_key(dep),
        }
    }

    pub fn is_applicable(&self, dep: &Dependency) -> bool {
        match self {
            OrderingRule::Alphabetical(_) => true,
            OrderingRule::Scope(rule) => rule.is_applicable(dep),
            OrderingRule::Optional(rule) => rule.is_applicable(dep),
            OrderingRule::Custom(rule) => rule.is_applicable(dep),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            OrderingRule::Alphabetical(rule) => rule.describe(),
            OrderingRule::Scope(rule) => rule.describe(),
            OrderingRule::Optional(rule) => rule.describe(),
            OrderingRule::Custom(rule) => rule.describe(),
        }
    }

    /// Check one pair of applicable neighbours, `prev` listed before `curr`.
    pub fn validate_adjacent(&self, prev: &Dependency, curr: &Dependency) -> Option<String> {
        match self {
            OrderingRule::Alphabetical(rule) => rule.validate_adjacent(prev, curr),
            OrderingRule::Scope(rule) => rule.validate_adjacent(prev, curr),
            OrderingRule::Optional(rule) => rule.validate_adjacent(prev, curr),
            OrderingRule::Custom(rule) => rule.validate_adjacent(prev, curr),
        }
    }
}

impl fmt::Display for OrderingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

impl From<AlphabeticalOrder> for OrderingRule {
    fn from(rule: AlphabeticalOrder) -> Self {
        OrderingRule::Alphabetical(rule)
    }
}

impl From<ScopeOrder> for OrderingRule {
    fn from(rule: ScopeOrder) -> Self {
        OrderingRule::Scope(rule)
    }
}

impl From<OptionalOrder> for OrderingRule {
    fn from(rule: OptionalOrder) -> Self {
        OrderingRule::Optional(rule)
    }
}

impl From<GroupIdOrder> for OrderingRule {
    fn from(rule: GroupIdOrder) -> Self {
        OrderingRule::custom(rule)
    }
}
