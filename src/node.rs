//! Hierarchical validation tree.
//!
//! A [`ValidationNode::Leaf`] applies one rule to a list. A
//! [`ValidationNode::Group`] partitions the list by a grouping rule's key,
//! optionally checks that the groups appear in an expected order, and then
//! validates every partition with its child node.
//!
//! Only neighbouring applicable dependencies are compared. A fully reversed
//! list of three entries therefore yields two violations, not three.

use std::collections::HashMap;

use crate::dependency::Dependency;
use crate::order::OrderingRule;

#[derive(Debug)]
pub enum ValidationNode {
    Leaf {
        rule: OrderingRule,
    },
    Group {
        grouping_rule: OrderingRule,
        child: Box<ValidationNode>,
        /// Keys in their required order. Empty means any group order is fine.
        expected_group_order: Vec<String>,
    },
}

impl ValidationNode {
    pub fn leaf(rule: impl Into<OrderingRule>) -> Self {
        ValidationNode::Leaf { rule: rule.into() }
    }

    pub fn group(
        grouping_rule: impl Into<OrderingRule>,
        child: ValidationNode,
        expected_group_order: Vec<String>,
    ) -> Self {
        ValidationNode::Group {
            grouping_rule: grouping_rule.into(),
            child: Box::new(child),
            expected_group_order,
        }
    }

    /// Validate `deps` in their declared order and return every violation
    /// found, left to right.
    pub fn validate(&self, deps: &[Dependency]) -> Vec<String> {
        let refs: Vec<&Dependency> = deps.iter().collect();
        self.validate_refs(&refs)
    }

    pub fn describe(&self) -> String {
        match self {
            ValidationNode::Leaf { rule } => rule.describe(),
            ValidationNode::Group {
                grouping_rule,
                child,
                ..
            } => format!(
                "Grouping by {}, then {}",
                grouping_rule.describe(),
                child.describe()
            ),
        }
    }

    /// Number of rule levels from this node down to its leaf.
    pub fn depth(&self) -> usize {
        match self {
            ValidationNode::Leaf { .. } => 1,
            ValidationNode::Group { child, .. } => 1 + child.depth(),
        }
    }

    fn validate_refs(&self, deps: &[&Dependency]) -> Vec<String> {
        if deps.len() <= 1 {
            return Vec::new();
        }

        match self {
            ValidationNode::Leaf { rule } => validate_leaf(rule, deps),
            ValidationNode::Group {
                grouping_rule,
                child,
                expected_group_order,
            } => {
                let buckets = partition(grouping_rule, deps);
                let mut violations = check_group_order(&buckets, expected_group_order);
                for bucket in &buckets {
                    violations.extend(child.validate_refs(&bucket.members));
                }
                violations
            }
        }
    }
}

fn validate_leaf(rule: &OrderingRule, deps: &[&Dependency]) -> Vec<String> {
    let applicable: Vec<&Dependency> = deps
        .iter()
        .copied()
        .filter(|dep| rule.is_applicable(dep))
        .collect();

    applicable
        .windows(2)
        .filter_map(|pair| rule.validate_adjacent(pair[0], pair[1]))
        .collect()
}

struct Bucket<'a> {
    key: String,
    members: Vec<&'a Dependency>,
}

/// Buckets come out in order of first occurrence. Inapplicable dependencies
/// are dropped.
fn partition<'a>(rule: &OrderingRule, deps: &[&'a Dependency]) -> Vec<Bucket<'a>> {
    let mut buckets: Vec<Bucket<'a>> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for dep in deps.iter().copied().filter(|dep| rule.is_applicable(dep)) {
        let key = rule.extract_key(dep);
        match index.get(&key) {
            Some(&i) => buckets[i].members.push(dep),
            None => {
                index.insert(key.clone(), buckets.len());
                buckets.push(Bucket {
                    key,
                    members: vec![dep],
                });
            }
        }
    }

    buckets
}

fn check_group_order(buckets: &[Bucket<'_>], expected: &[String]) -> Vec<String> {
    let mut violations = Vec::new();
    if expected.is_empty() {
        return violations;
    }

    let mut previous: Option<(&str, usize)> = None;
    for bucket in buckets {
        let Some(position) = expected
            .iter()
            .position(|key| key.eq_ignore_ascii_case(&bucket.key))
        else {
            continue;
        };

        if let Some((prev_key, prev_position)) = previous {
            if prev_position > position {
                violations.push(format!(
                    "Group '{}' should come before group '{}'",
                    bucket.key, prev_key
                ));
            }
        }
        previous = Some((bucket.key.as_str(), position));
    }

    violations
}
