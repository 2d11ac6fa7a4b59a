#![forbid(unsafe_code)]

//! Assembles the full check specification at startup

use crate::adapter::config_store::ConfigStore;
use crate::adapter::handler::AipRuleHandler;
use crate::adapter::{filter, naming};
use crate::check::spec::{CategorySpec, RuleSpec, RuleType, Spec};
use crate::error::SpecError;
use crate::lint::registry::RuleRegistry;
use crate::lint::rule::ProtoRule;
use crate::rules;
use std::sync::Arc;

/// Builds the specification over every builtin rule
///
/// # Errors
///
/// Any malformed rule name aborts the whole build; the process must not
/// serve requests with a partial specification.
pub fn build_spec() -> Result<Spec, SpecError> {
    let mut registry = RuleRegistry::new();
    rules::add(&mut registry)?;
    build_spec_from_registry(&registry)
}

/// Builds a specification from an already-populated registry
pub fn build_spec_from_registry(registry: &RuleRegistry) -> Result<Spec, SpecError> {
    let config_store = Arc::new(ConfigStore::new());

    let mut rule_specs = Vec::with_capacity(registry.len());
    for rule in registry.iter() {
        rule_specs.push(new_rule_spec(Arc::clone(rule), Arc::clone(&config_store))?);
    }

    Ok(Spec {
        rules: rule_specs,
        categories: categories(),
        before: Box::new(filter::prepare_context),
        // the configuration store and the rule engine share unsynchronized
        // state across handlers
        parallelism: 1,
    })
}

fn new_rule_spec(
    rule: Arc<dyn ProtoRule>,
    config_store: Arc<ConfigStore>,
) -> Result<RuleSpec, SpecError> {
    let name = rule.name().clone();
    let parts = naming::parse(&name)?;
    Ok(RuleSpec {
        id: naming::rule_id(&name),
        category_ids: parts.category_ids,
        default: true,
        purpose: format!("Checks AIP rule {}.", name),
        rule_type: RuleType::Lint,
        handler: Box::new(AipRuleHandler::new(rule, config_store)),
    })
}

/// The three fixed category declarations
pub fn categories() -> Vec<CategorySpec> {
    vec![
        CategorySpec {
            id: naming::AIP_CATEGORY_ID.to_string(),
            purpose: "Checks all API Enhancement proposals as specified at https://aip.dev."
                .to_string(),
        },
        CategorySpec {
            id: naming::AIP_CORE_CATEGORY_ID.to_string(),
            purpose: "Checks all core API Enhancement proposals as specified at https://aip.dev."
                .to_string(),
        },
        CategorySpec {
            id: naming::AIP_CLIENT_LIBRARIES_CATEGORY_ID.to_string(),
            purpose:
                "Checks all client library API Enhancement proposals as specified at https://aip.dev."
                    .to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LintError;
    use crate::lint::name::RuleName;
    use crate::lint::problem::Problem;
    use crate::lint::proto_file::ProtoFile;
    use std::collections::HashSet;

    #[test]
    fn test_build_spec_covers_all_builtin_rules() {
        let spec = build_spec().unwrap();
        assert_eq!(spec.rules.len(), 6);
        assert_eq!(spec.parallelism, 1);

        let ids: Vec<&str> = spec.rules.iter().map(|rule| rule.id.as_str()).collect();
        assert!(ids.contains(&"AIP_132_REQUEST_PARENT_REQUIRED"));
        assert!(ids.contains(&"AIP_4232_METHOD_SIGNATURE"));
    }

    #[test]
    fn test_rule_ids_are_unique() {
        let spec = build_spec().unwrap();
        let ids: HashSet<&str> = spec.rules.iter().map(|rule| rule.id.as_str()).collect();
        assert_eq!(ids.len(), spec.rules.len());
    }

    #[test]
    fn test_every_rule_is_default_enabled_lint() {
        let spec = build_spec().unwrap();
        for rule in &spec.rules {
            assert!(rule.default);
            assert_eq!(rule.rule_type, RuleType::Lint);
            assert!(rule.category_ids.contains(&"AIP".to_string()));
            assert_eq!(rule.category_ids.len(), 2);
        }
    }

    #[test]
    fn test_categories_are_fixed() {
        let categories = categories();
        let ids: Vec<&str> = categories.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["AIP", "AIP_CORE", "AIP_CLIENT_LIBRARIES"]);
    }

    struct BadCategoryRule {
        name: RuleName,
    }

    impl ProtoRule for BadCategoryRule {
        fn name(&self) -> &RuleName {
            &self.name
        }

        fn lint(&self, _file: &ProtoFile) -> Result<Vec<Problem>, LintError> {
            Ok(vec![])
        }
    }

    #[test]
    fn test_unknown_category_aborts_build() {
        let mut registry = RuleRegistry::new();
        registry
            .register(Arc::new(BadCategoryRule {
                name: RuleName::new("future::1::something").unwrap(),
            }))
            .unwrap();
        let result = build_spec_from_registry(&registry);
        assert!(matches!(result, Err(SpecError::UnknownCategory { .. })));
    }

    #[test]
    fn test_non_numeric_aip_aborts_build() {
        let mut registry = RuleRegistry::new();
        registry
            .register(Arc::new(BadCategoryRule {
                name: RuleName::new("core::abc::something").unwrap(),
            }))
            .unwrap();
        let result = build_spec_from_registry(&registry);
        assert!(matches!(result, Err(SpecError::InvalidAipNumber { .. })));
    }
}
