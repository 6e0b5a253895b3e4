//! Grouping trees: scope groups, nested groupId groups, expected group order.

use crate::support::builders::{mixed_scopes, scoped, unscoped};
use deporder::dependency::{Dependency, Scope};
use deporder::node::ValidationNode;
use deporder::order::{AlphabeticalOrder, CustomOrder, GroupIdOrder, OrderingRule, ScopeOrder};
use deporder::tree::TreeBuilder;

fn compile_then_test() -> ScopeOrder {
    ScopeOrder::first_then(Scope::Compile, Scope::Test).unwrap()
}

fn scope_then_alphabetical() -> ValidationNode {
    TreeBuilder::new()
        .grouped_rule(compile_then_test(), ["compile", "test"])
        .rule(AlphabeticalOrder::default())
        .build()
        .unwrap()
}

#[test]
fn test_leaf_alphabetical() {
    let leaf = ValidationNode::leaf(AlphabeticalOrder::default());
    let wrong = vec![
        unscoped("org.apache.commons", "commons-lang3"),
        unscoped("com.google.guava", "guava"),
    ];

    let errors = leaf.validate(&wrong);
    assert_eq!(errors.len(), 1);
    assert!(errors[0]
        .contains("com.google.guava:guava must be before org.apache.commons:commons-lang3"));

    let right: Vec<Dependency> = wrong.into_iter().rev().collect();
    assert!(leaf.validate(&right).is_empty());
}

#[test]
fn test_scope_grouping_with_alphabetical_sorting() {
    assert!(scope_then_alphabetical().validate(&mixed_scopes()).is_empty());
}

#[test]
fn test_wrong_alphabetical_order_within_group() {
    let deps = vec![
        scoped("org.apache.commons", "commons-lang3", "compile"),
        scoped("com.google.guava", "guava", "compile"),
        scoped("junit", "junit", "test"),
    ];

    let errors = scope_then_alphabetical().validate(&deps);
    assert_eq!(
        errors,
        vec![
            "Dependency com.google.guava:guava must be before org.apache.commons:commons-lang3"
                .to_string()
        ]
    );
}

#[test]
fn test_alphabetical_order_resets_between_groups() {
    // `org.mockito` then `junit` would fail a flat alphabetical check, but
    // they sit in different scope groups.
    let deps = vec![
        scoped("org.mockito", "mockito-core", "compile"),
        scoped("junit", "junit", "test"),
    ];
    assert!(scope_then_alphabetical().validate(&deps).is_empty());
}

#[test]
fn test_group_order_violation() {
    let deps = vec![
        scoped("junit", "junit", "test"),
        scoped("com.google.guava", "guava", "compile"),
    ];

    let errors = scope_then_alphabetical().validate(&deps);
    assert_eq!(
        errors,
        vec!["Group 'compile' should come before group 'test'".to_string()]
    );
}

#[test]
fn test_group_order_reported_before_children() {
    let deps = vec![
        scoped("org.mockito", "mockito-core", "test"),
        scoped("junit", "junit", "test"),
        scoped("com.google.guava", "guava", "compile"),
    ];

    let errors = scope_then_alphabetical().validate(&deps);
    assert_eq!(
        errors,
        vec![
            "Group 'compile' should come before group 'test'".to_string(),
            "Dependency junit:junit must be before org.mockito:mockito-core".to_string(),
        ]
    );
}

#[test]
fn test_unlisted_groups_are_not_ordered() {
    let tree = TreeBuilder::new()
        .grouped_rule(
            ScopeOrder::new(vec![Scope::Compile, Scope::Provided, Scope::Test]).unwrap(),
            ["compile", "test"],
        )
        .rule(AlphabeticalOrder::default())
        .build()
        .unwrap();

    let deps = vec![
        scoped("javax.servlet", "servlet-api", "provided"),
        scoped("com.google.guava", "guava", "compile"),
        scoped("junit", "junit", "test"),
    ];
    assert!(tree.validate(&deps).is_empty());
}

#[test]
fn test_nested_grouping_by_scope_then_group_id() {
    let tree = TreeBuilder::new()
        .grouped_rule(compile_then_test(), ["compile", "test"])
        .rule(GroupIdOrder::new(1).unwrap())
        .rule(AlphabeticalOrder::default())
        .build()
        .unwrap();

    let deps = vec![
        scoped("com.google.guava", "guava", "compile"),
        scoped("org.apache.commons", "commons-lang3", "compile"),
        scoped("junit", "junit", "test"),
    ];

    assert!(tree.validate(&deps).is_empty());
    assert_eq!(tree.depth(), 3);
    assert_eq!(
        tree.describe(),
        "Grouping by Checking for compile before test, then Grouping by Grouping by first segment of groupId, then Checking for alphabetical order"
    );
}

#[test]
fn test_nested_groups_check_within_innermost_bucket() {
    let tree = TreeBuilder::new()
        .rule(GroupIdOrder::new(1).unwrap())
        .rule(AlphabeticalOrder::default())
        .build()
        .unwrap();

    // com.* bucket is [com.z, com.a], org.* bucket is [org.b]
    let deps = vec![
        unscoped("com.z", "z"),
        unscoped("org.b", "b"),
        unscoped("com.a", "a"),
    ];
    assert_eq!(
        tree.validate(&deps),
        vec!["Dependency com.a:a must be before com.z:z".to_string()]
    );
}

#[derive(Debug)]
struct VendorFirst;

impl CustomOrder for VendorFirst {
    fn extract_key(&self, dep: &Dependency) -> String {
        if dep.group_id.starts_with("com.acme") {
            "vendor".to_string()
        } else {
            "other".to_string()
        }
    }

    fn describe(&self) -> String {
        "Grouping by vendor".to_string()
    }
}

#[test]
fn test_custom_grouping_rule_with_expected_order() {
    let tree = TreeBuilder::new()
        .grouped_rule(OrderingRule::custom(VendorFirst), ["vendor", "other"])
        .rule(AlphabeticalOrder::default())
        .build()
        .unwrap();

    let good = vec![
        unscoped("com.acme", "core"),
        unscoped("com.acme", "web"),
        unscoped("com.google.guava", "guava"),
    ];
    assert!(tree.validate(&good).is_empty());

    let bad = vec![unscoped("org.slf4j", "slf4j-api"), unscoped("com.acme", "core")];
    assert_eq!(
        tree.validate(&bad),
        vec!["Group 'vendor' should come before group 'other'".to_string()]
    );
}

#[test]
fn test_hierarchical_description() {
    assert_eq!(
        scope_then_alphabetical().describe(),
        "Grouping by Checking for compile before test, then Checking for alphabetical order"
    );
}
