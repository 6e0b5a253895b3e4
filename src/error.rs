//! Errors raised while turning configuration into rules.
//!
//! Ordering violations are not errors; they are collected as plain strings by
//! the validation nodes.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("at least one ordering rule must be configured")]
    NoRules,

    #[error("scope order needs at least two scopes, got {0}")]
    ScopeChainTooShort(usize),

    #[error("scope '{0}' appears more than once in the scope order")]
    DuplicateScope(String),

    #[error("optional order value must be 'true' or 'false', got '{0}'")]
    InvalidOptionalValue(String),

    #[error("optional order needs two different values, got '{0}' twice")]
    IdenticalOptionalValues(String),

    #[error("groupId depth must be at least 1")]
    InvalidGroupIdDepth,
}
