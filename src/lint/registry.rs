#![forbid(unsafe_code)]

//! Rule registry
//!
//! The registry maps rule names to rule implementations. It is populated
//! once (either with every builtin rule at spec-build time, or with a
//! single rule inside a handler) and read-only afterwards. A `BTreeMap`
//! keeps iteration order deterministic, so the built specification lists
//! rules in a stable order.

use crate::error::LintError;
use crate::lint::name::RuleName;
use crate::lint::rule::ProtoRule;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Registry of lint rules keyed by their unique name
#[derive(Default)]
pub struct RuleRegistry {
    rules: BTreeMap<RuleName, Arc<dyn ProtoRule>>,
}

impl RuleRegistry {
    /// Creates a new empty registry
    pub fn new() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Registers a rule
    ///
    /// # Errors
    ///
    /// Returns `LintError::DuplicateRule` if a rule with the same name is
    /// already registered.
    pub fn register(&mut self, rule: Arc<dyn ProtoRule>) -> Result<(), LintError> {
        let name = rule.name().clone();
        if self.rules.contains_key(&name) {
            return Err(LintError::DuplicateRule(name.as_str().to_string()));
        }
        self.rules.insert(name, rule);
        Ok(())
    }

    /// Gets a rule by name
    pub fn get(&self, name: &RuleName) -> Option<&Arc<dyn ProtoRule>> {
        self.rules.get(name)
    }

    /// Iterates over all rules in name order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn ProtoRule>> {
        self.rules.values()
    }

    /// Number of registered rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True if no rules are registered
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
