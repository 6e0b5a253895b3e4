use crate::dependency::Dependency;
use crate::error::ConfigError;

/// Orders optional and non-optional dependencies relative to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionalOrder {
    first: bool,
    then: bool,
}

impl OptionalOrder {
    /// Both values must read `true` or `false` (any case) and must differ.
    pub fn new(first: &str, then: &str) -> Result<Self, ConfigError> {
        let first_value = parse_flag(first)?;
        let then_value = parse_flag(then)?;
        if first_value == then_value {
            return Err(ConfigError::IdenticalOptionalValues(
                first_value.to_string(),
            ));
        }
        Ok(Self {
            first: first_value,
            then: then_value,
        })
    }

    /// Non-optional dependencies before optional ones.
    pub fn required_first() -> Self {
        Self {
            first: false,
            then: true,
        }
    }

    pub fn first(&self) -> bool {
        self.first
    }

    pub fn then(&self) -> bool {
        self.then
    }

    pub fn extract_key(&self, dep: &Dependency) -> &'static str {
        dep.optional_key()
    }

    pub fn is_applicable(&self, dep: &Dependency) -> bool {
        let key = self.extract_key(dep);
        key == bool_key(self.first) || key == bool_key(self.then)
    }

    pub fn describe(&self) -> String {
        format!(
            "Checking for optional={} before optional={}",
            self.first, self.then
        )
    }

    pub fn validate_adjacent(&self, prev: &Dependency, curr: &Dependency) -> Option<String> {
        let wrong = self.extract_key(prev) == bool_key(self.then)
            && self.extract_key(curr) == bool_key(self.first);

        wrong.then(|| {
            format!(
                "Dependency {} must be before {}",
                format_dependency(curr),
                format_dependency(prev)
            )
        })
    }
}

fn parse_flag(value: &str) -> Result<bool, ConfigError> {
    match value.trim() {
        v if v.eq_ignore_ascii_case("true") => Ok(true),
        v if v.eq_ignore_ascii_case("false") => Ok(false),
        _ => Err(ConfigError::InvalidOptionalValue(value.to_string())),
    }
}

fn bool_key(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

fn format_dependency(dep: &Dependency) -> String {
    format!("{} optional:{}", dep.coordinates(), dep.optional_key())
}
