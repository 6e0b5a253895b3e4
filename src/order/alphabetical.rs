use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::dependency::Dependency;

/// Alphabetical order on `groupId:artifactId`, ignoring case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AlphabeticalOrder {
    #[serde(default)]
    pub inversed: bool,
}

impl AlphabeticalOrder {
    pub fn new(inversed: bool) -> Self {
        Self { inversed }
    }

    pub fn extract_key(&self, dep: &Dependency) -> String {
        dep.coordinates()
    }

    pub fn describe(&self) -> String {
        if self.inversed {
            "Checking for inversed alphabetical order".to_string()
        } else {
            "Checking for alphabetical order".to_string()
        }
    }

    pub fn validate_adjacent(&self, prev: &Dependency, curr: &Dependency) -> Option<String> {
        let prev_key = self.extract_key(prev);
        let curr_key = self.extract_key(curr);
        let wrong = match compare_ignore_case(&prev_key, &curr_key) {
            Ordering::Greater => !self.inversed,
            Ordering::Less => self.inversed,
            Ordering::Equal => false,
        };

        wrong.then(|| format!("Dependency {} must be before {}", curr_key, prev_key))
    }
}

/// Character-wise comparison after lowercasing both sides.
pub(crate) fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}
