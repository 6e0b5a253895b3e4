use crate::dependency::{Dependency, Scope};
use crate::error::ConfigError;

/// Scope chain order, e.g. `compile -> provided -> test`.
///
/// Only dependencies whose effective scope is part of the chain are checked.
/// A two-scope chain is the classic "first, then" rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeOrder {
    scopes: Vec<Scope>,
}

impl ScopeOrder {
    pub fn new(scopes: Vec<Scope>) -> Result<Self, ConfigError> {
        if scopes.len() < 2 {
            return Err(ConfigError::ScopeChainTooShort(scopes.len()));
        }
        for (i, scope) in scopes.iter().enumerate() {
            if scopes[..i].contains(scope) {
                return Err(ConfigError::DuplicateScope(scope.to_string()));
            }
        }
        Ok(Self { scopes })
    }

    /// Two-scope form: `first` must come before `then`.
    pub fn first_then(first: Scope, then: Scope) -> Result<Self, ConfigError> {
        Self::new(vec![first, then])
    }

    pub fn scopes(&self) -> &[Scope] {
        &self.scopes
    }

    pub fn first(&self) -> Scope {
        self.scopes[0]
    }

    /// Every scope after the first.
    pub fn then(&self) -> &[Scope] {
        &self.scopes[1..]
    }

    /// Lowercased effective scope.
    pub fn extract_key(&self, dep: &Dependency) -> String {
        dep.effective_scope().trim().to_ascii_lowercase()
    }

    pub fn is_applicable(&self, dep: &Dependency) -> bool {
        self.position(dep).is_some()
    }

    pub fn describe(&self) -> String {
        if self.scopes.len() == 2 {
            format!("Checking for {} before {}", self.scopes[0], self.scopes[1])
        } else {
            let chain: Vec<&str> = self.scopes.iter().map(Scope::as_str).collect();
            format!("Checking scope order: {}", chain.join(" -> "))
        }
    }

    pub fn validate_adjacent(&self, prev: &Dependency, curr: &Dependency) -> Option<String> {
        let prev_pos = self.position(prev)?;
        let curr_pos = self.position(curr)?;

        (prev_pos > curr_pos).then(|| {
            format!(
                "Dependency {} must be before {}",
                format_dependency(curr),
                format_dependency(prev)
            )
        })
    }

    fn position(&self, dep: &Dependency) -> Option<usize> {
        let key = dep.effective_scope().trim();
        self.scopes
            .iter()
            .position(|scope| scope.as_str().eq_ignore_ascii_case(key))
    }
}

fn format_dependency(dep: &Dependency) -> String {
    format!("{} scope:{}", dep.coordinates(), dep.effective_scope())
}
