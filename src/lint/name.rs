#![forbid(unsafe_code)]

//! Validated rule names

use crate::error::LintError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated internal rule name of the form `<category>::<aip>::<slug>`
///
/// Names have exactly three non-empty segments separated by `::`, and each
/// segment contains only lowercase letters, digits, and hyphens. The numeric
/// shape of the middle segment is enforced later, when the spec is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RuleName(String);

impl RuleName {
    /// Creates a new RuleName, validating shape and charset
    pub fn new(name: impl Into<String>) -> Result<Self, LintError> {
        let name = name.into();
        if !Self::is_valid(&name) {
            return Err(LintError::InvalidRuleName(name));
        }
        Ok(RuleName(name))
    }

    fn is_valid(name: &str) -> bool {
        let segments: Vec<&str> = name.split("::").collect();
        if segments.len() != 3 {
            return false;
        }
        segments.iter().all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        })
    }

    /// Returns the rule name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for RuleName {
    type Error = LintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        RuleName::new(value)
    }
}

impl From<RuleName> for String {
    fn from(name: RuleName) -> Self {
        name.0
    }
}
