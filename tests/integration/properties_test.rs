//! Behavioural properties that hold for every rule and node shape.

use crate::support::builders::{scoped, unscoped};
use deporder::dependency::{Dependency, Scope};
use deporder::engine::{Engine, Mode};
use deporder::node::ValidationNode;
use deporder::order::{AlphabeticalOrder, GroupIdOrder, OptionalOrder, OrderingRule, ScopeOrder};
use deporder::tree::{TreeBuilder, TreeLevel};

fn all_rules() -> Vec<OrderingRule> {
    vec![
        AlphabeticalOrder::default().into(),
        AlphabeticalOrder::new(true).into(),
        ScopeOrder::new(vec![Scope::Compile, Scope::Provided, Scope::Test])
            .unwrap()
            .into(),
        OptionalOrder::required_first().into(),
        GroupIdOrder::new(2).unwrap().into(),
    ]
}

#[test]
fn test_short_lists_never_violate() {
    let single = vec![scoped("org.z", "z", "test").with_optional("true")];

    for rule in all_rules() {
        let leaf = ValidationNode::leaf(rule);
        assert!(leaf.validate(&[]).is_empty());
        assert!(leaf.validate(&single).is_empty());
    }

    let tree = TreeBuilder::new()
        .grouped_rule(
            ScopeOrder::first_then(Scope::Compile, Scope::Test).unwrap(),
            ["compile", "test"],
        )
        .rule(AlphabeticalOrder::default())
        .build()
        .unwrap();
    assert!(tree.validate(&[]).is_empty());
    assert!(tree.validate(&single).is_empty());
}

#[test]
fn test_alphabetical_pairs() {
    let rule = AlphabeticalOrder::default();
    let inversed = AlphabeticalOrder::new(true);
    let a = unscoped("Com.Example", "alpha");
    let b = unscoped("com.example", "Beta");

    assert!(rule.validate_adjacent(&a, &b).is_none());
    assert_eq!(
        rule.validate_adjacent(&b, &a),
        Some("Dependency Com.Example:alpha must be before com.example:Beta".to_string())
    );

    assert!(inversed.validate_adjacent(&b, &a).is_none());
    assert!(inversed.validate_adjacent(&a, &b).is_some());

    // Equal keys ignoring case are never a violation either way
    let upper = unscoped("COM.EXAMPLE", "ALPHA");
    assert!(rule.validate_adjacent(&a, &upper).is_none());
    assert!(inversed.validate_adjacent(&upper, &a).is_none());
}

#[test]
fn test_scope_chain_compares_adjacent_only() {
    let leaf = ValidationNode::leaf(
        ScopeOrder::new(vec![Scope::Compile, Scope::Provided, Scope::Test]).unwrap(),
    );
    let deps = vec![
        scoped("a", "compile-dep", "compile"),
        scoped("b", "test-dep", "test"),
        scoped("c", "provided-dep", "provided"),
    ];

    assert_eq!(
        leaf.validate(&deps),
        vec![
            "Dependency c:provided-dep scope:provided must be before b:test-dep scope:test"
                .to_string()
        ]
    );
}

#[test]
fn test_reversed_list_reports_each_adjacent_inversion() {
    let leaf = ValidationNode::leaf(AlphabeticalOrder::default());
    let deps = vec![unscoped("c", "c"), unscoped("b", "b"), unscoped("a", "a")];
    assert_eq!(leaf.validate(&deps).len(), 2);

    // a, c, b: only the c/b pair is adjacent and inverted
    let deps = vec![unscoped("a", "a"), unscoped("c", "c"), unscoped("b", "b")];
    assert_eq!(leaf.validate(&deps).len(), 1);
}

#[test]
fn test_validation_is_idempotent() {
    let engine = Engine::new(
        vec![
            TreeLevel::new(ScopeOrder::first_then(Scope::Compile, Scope::Test).unwrap())
                .with_group_order(["compile", "test"]),
            TreeLevel::new(AlphabeticalOrder::default()),
        ],
        Mode::Hierarchical,
    )
    .unwrap();

    let deps = vec![
        scoped("junit", "junit", "test"),
        scoped("org.b", "y", "compile"),
        scoped("com.a", "x", "compile"),
    ];
    let snapshot = deps.clone();

    let first = engine.validate(&deps);
    let second = engine.validate(&deps);
    assert!(!first.is_empty());
    assert_eq!(first, second);
    assert_eq!(deps, snapshot);
}

#[test]
fn test_hierarchical_round_trip() {
    let tree = ValidationNode::group(
        ScopeOrder::first_then(Scope::Compile, Scope::Test).unwrap(),
        ValidationNode::leaf(AlphabeticalOrder::default()),
        Vec::new(),
    );

    let sorted = vec![
        scoped("com.a", "x", "compile"),
        scoped("org.b", "y", "compile"),
        scoped("com.c", "z", "test"),
    ];
    assert!(tree.validate(&sorted).is_empty());

    let swapped = vec![
        scoped("org.b", "y", "compile"),
        scoped("com.a", "x", "compile"),
        scoped("com.c", "z", "test"),
    ];
    assert_eq!(
        tree.validate(&swapped),
        vec!["Dependency com.a:x must be before org.b:y".to_string()]
    );
}

#[test]
fn test_inapplicable_dependencies_never_reported() {
    let leaf = ValidationNode::leaf(ScopeOrder::first_then(Scope::Compile, Scope::Test).unwrap());
    let deps = vec![
        scoped("t", "first-test", "test"),
        scoped("r", "runtime-dep", "runtime"),
        scoped("c", "compile-dep", "compile"),
        scoped("s", "system-dep", "system"),
    ];

    let violations = leaf.validate(&deps);
    assert_eq!(violations.len(), 1);
    for violation in &violations {
        assert!(!violation.contains("runtime-dep"));
        assert!(!violation.contains("system-dep"));
    }
}

#[test]
fn test_missing_scope_groups_as_compile() {
    let tree = ValidationNode::group(
        ScopeOrder::first_then(Scope::Compile, Scope::Test).unwrap(),
        ValidationNode::leaf(AlphabeticalOrder::default()),
        vec!["compile".to_string(), "test".to_string()],
    );

    // The unscoped and the compile dependency share one bucket
    let deps: Vec<Dependency> = vec![
        unscoped("org.b", "y"),
        scoped("junit", "junit", "test"),
        scoped("com.a", "x", "compile"),
    ];
    assert_eq!(
        tree.validate(&deps),
        vec!["Dependency com.a:x must be before org.b:y".to_string()]
    );
}

#[test]
fn test_simple_mode_rules_do_not_interact() {
    let engine = Engine::new(
        vec![
            TreeLevel::new(ScopeOrder::first_then(Scope::Compile, Scope::Test).unwrap()),
            TreeLevel::new(AlphabeticalOrder::default()),
        ],
        Mode::Simple,
    )
    .unwrap();

    // The runtime dependency is skipped by the scope rule but still checked
    // alphabetically.
    let deps = vec![
        scoped("com.a", "a", "compile"),
        scoped("org.z", "z", "runtime"),
        scoped("com.b", "b", "test"),
    ];
    assert_eq!(
        engine.validate(&deps),
        vec!["Dependency com.b:b must be before org.z:z".to_string()]
    );
}
