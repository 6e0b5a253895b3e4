//! Default values for configuration fields.

use crate::paths::MANIFEST_FILE;

/// Macro to generate default functions for serde attributes
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

default_fn!(default_true, bool, true);
default_fn!(default_manifest, String, MANIFEST_FILE.to_string());
default_fn!(default_group_id_depth, usize, 1);

/// Starter configuration written by `deporder init`.
pub const STARTER_CONFIG: &str = r#"# deporder configuration
#
# mode: simple runs every rule on its own over the whole list.
# mode: hierarchical groups by each rule in turn; the last rule checks
#       order inside the innermost groups.
mode: hierarchical

# Also check the dependencyManagement list when the project model has one.
check-dependency-management: true

# Project model checked when no --manifest is given.
manifest: deps.yaml

rules:
  - type: scope
    scopes: [compile, provided, runtime, test]
    group-order: [compile, provided, runtime, test]
  - type: alphabetical
    inversed: false
"#;
