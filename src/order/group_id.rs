use super::CustomOrder;
use crate::dependency::Dependency;
use crate::error::ConfigError;

/// Groups dependencies by the leading segments of their groupId.
///
/// With `depth = 1`, `org.apache.commons` and `org.slf4j` share the key
/// `org`. The rule only partitions; it never reports an ordering violation on
/// its own, so it is meant as a grouping level in a hierarchical tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupIdOrder {
    depth: usize,
}

impl GroupIdOrder {
    pub fn new(depth: usize) -> Result<Self, ConfigError> {
        if depth == 0 {
            return Err(ConfigError::InvalidGroupIdDepth);
        }
        Ok(Self { depth })
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl CustomOrder for GroupIdOrder {
    fn extract_key(&self, dep: &Dependency) -> String {
        dep.group_id
            .split('.')
            .take(self.depth)
            .collect::<Vec<_>>()
            .join(".")
    }

    fn describe(&self) -> String {
        if self.depth == 1 {
            "Grouping by first segment of groupId".to_string()
        } else {
            format!("Grouping by first {} segments of groupId", self.depth)
        }
    }
}
