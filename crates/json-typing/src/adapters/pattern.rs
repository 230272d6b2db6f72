use std::ops::Deref;

use regex::Regex;

use super::expect_string;
use crate::error::AdapterError;
use crate::registry::Adapter;
use crate::value::Value;

/// Compiled regular expression, compared by its source pattern.
///
/// Flags travel inline in the pattern (`(?i)`, `(?m)`, ...).
#[derive(Debug, Clone)]
pub struct Pattern(Regex);

impl Pattern {
    pub fn new(pattern: &str) -> Result<Self, AdapterError> {
        Ok(Pattern(Regex::new(pattern)?))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Pattern {}

impl Deref for Pattern {
    type Target = Regex;

    fn deref(&self) -> &Regex {
        &self.0
    }
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Pattern(regex)
    }
}

/// [`Pattern`] as `pattern`, carried as its source string.
pub fn patterns() -> Adapter {
    Adapter::new(
        "pattern",
        |p: &Pattern| Ok(Value::from(p.as_str())),
        |payload| Pattern::new(&expect_string(payload)?),
    )
}
