//! # deporder - dependency ordering checks
//!
//! deporder validates that a build's dependency declarations follow one or
//! more ordering rules, and composes those rules into hierarchical groupings
//! ("group by scope, then require alphabetical order inside each scope").
//!
//! ## Overview
//!
//! The host build tool supplies the declared dependencies in order. The
//! engine returns human-readable violations; the host decides whether they
//! fail the build. Nothing is reordered, fetched or resolved.
//!
//! Only neighbouring applicable dependencies are compared. This is a local
//! ordering check, not a proof that the whole list is sorted.
//!
//! ## Modules
//!
//! - [`dependency`] - Dependency records and scopes
//! - [`order`] - Ordering rules (alphabetical, scope, optional, custom)
//! - [`node`] - Leaf/group validation tree
//! - [`tree`] - Building a tree from a flat rule list
//! - [`engine`] - Simple and hierarchical validation, reports
//! - [`config`] - `deporder.yaml` loading and rule mapping
//! - [`project`] - Project model (dependency list) loading
//!
//! ## Example
//!
//! ```
//! use deporder::dependency::{Dependency, Scope};
//! use deporder::order::{AlphabeticalOrder, ScopeOrder};
//! use deporder::tree::TreeBuilder;
//!
//! let tree = TreeBuilder::new()
//!     .grouped_rule(
//!         ScopeOrder::first_then(Scope::Compile, Scope::Test).unwrap(),
//!         ["compile", "test"],
//!     )
//!     .rule(AlphabeticalOrder::default())
//!     .build()
//!     .unwrap();
//!
//! let deps = vec![
//!     Dependency::new("org.b", "y"),
//!     Dependency::new("com.a", "x"),
//!     Dependency::new("com.c", "z").with_scope("test"),
//! ];
//!
//! let violations = tree.validate(&deps);
//! assert_eq!(violations, vec!["Dependency com.a:x must be before org.b:y"]);
//! ```

pub mod config;
pub mod dependency;
pub mod engine;
pub mod error;
pub mod node;
pub mod order;
pub mod project;
pub mod tree;
pub mod ui;

pub use dependency::{Dependency, Scope};
pub use engine::{Engine, Mode, Report};
pub use error::ConfigError;
pub use node::ValidationNode;
pub use order::{CustomOrder, OrderingRule};
pub use tree::{TreeBuilder, TreeLevel};

/// Default file names.
pub mod paths {
    /// Project configuration: `deporder.yaml`
    pub const CONFIG_FILE: &str = "deporder.yaml";
    /// Project model checked when no manifest is given: `deps.yaml`
    pub const MANIFEST_FILE: &str = "deps.yaml";
    /// Global configuration, relative to the user's config directory
    pub const GLOBAL_CONFIG_FILE: &str = "deporder/config.yaml";
}
