#![forbid(unsafe_code)]

//! The per-rule handler bound into each rule declaration

use crate::adapter::annotate;
use crate::adapter::config_store::ConfigStore;
use crate::check::annotation::ResponseWriter;
use crate::check::request::Request;
use crate::check::spec::{CheckContext, RuleHandler};
use crate::error::CheckError;
use crate::lint::linter::Linter;
use crate::lint::registry::RuleRegistry;
use crate::lint::rule::ProtoRule;
use std::sync::Arc;

/// Request option naming the engine configuration file
pub const CONFIG_FILE_OPTION: &str = "config_file";

/// Executes one rule per invocation
///
/// One handler is bound per rule at spec-build time, closing over the
/// rule implementation and the shared configuration store. Each
/// invocation builds a single-rule registry and a fresh linter, so the
/// host can select and run rules independently.
pub struct AipRuleHandler {
    rule: Arc<dyn ProtoRule>,
    config_store: Arc<ConfigStore>,
}

impl AipRuleHandler {
    /// Binds a handler to a rule and the shared configuration store
    pub fn new(rule: Arc<dyn ProtoRule>, config_store: Arc<ConfigStore>) -> Self {
        Self { rule, config_store }
    }
}

impl RuleHandler for AipRuleHandler {
    fn handle(
        &self,
        ctx: &CheckContext,
        request: &Request,
        response: &mut dyn ResponseWriter,
    ) -> Result<(), CheckError> {
        // Absent option means "no configuration path"
        let config_path = request.options.get(CONFIG_FILE_OPTION).unwrap_or_default();
        let configs = self.config_store.get(config_path)?;

        let mut registry = RuleRegistry::new();
        registry.register(Arc::clone(&self.rule))?;
        let linter = Linter::new(registry, configs);

        // Zero targets is a valid request: zero findings
        let responses = linter.lint_files(ctx.targets())?;
        for file_response in responses {
            for problem in &file_response.problems {
                annotate::add_problem(response, problem)?;
            }
        }
        Ok(())
    }
}
