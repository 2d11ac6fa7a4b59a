#![forbid(unsafe_code)]

//! The lint pass: runs registered rules over resolved files
//!
//! The linter owns a registry and a shared configuration. Execution is
//! strictly sequential; the engine's registry and the shared configuration
//! are not guarded for concurrent use, which is why the surrounding
//! runtime pins parallelism to one worker.

use crate::error::LintError;
use crate::lint::config::Configs;
use crate::lint::problem::Problem;
use crate::lint::proto_file::ProtoFile;
use crate::lint::registry::RuleRegistry;
use std::sync::Arc;

/// Problems found in one file
#[derive(Debug, Clone, PartialEq)]
pub struct FileResponse {
    /// Name of the linted file
    pub file_name: String,

    /// Problems found; empty if the file is clean
    pub problems: Vec<Problem>,
}

/// A configured rule-execution engine
pub struct Linter {
    registry: RuleRegistry,
    configs: Arc<Configs>,
}

impl Linter {
    /// Creates a linter from a registry and a shared configuration
    pub fn new(registry: RuleRegistry, configs: Arc<Configs>) -> Self {
        Self { registry, configs }
    }

    /// Lints every file, producing one response per file
    ///
    /// Rules disabled by the configuration for a given file are skipped.
    ///
    /// # Errors
    ///
    /// The first rule-execution error aborts the pass.
    pub fn lint_files(&self, files: &[ProtoFile]) -> Result<Vec<FileResponse>, LintError> {
        files.iter().map(|file| self.lint_file(file)).collect()
    }

    fn lint_file(&self, file: &ProtoFile) -> Result<FileResponse, LintError> {
        let mut problems = Vec::new();
        for rule in self.registry.iter() {
            if !self.configs.rule_enabled(rule.name(), file.name()) {
                continue;
            }
            problems.extend(rule.lint(file)?);
        }
        Ok(FileResponse {
            file_name: file.name().to_string(),
            problems,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{FileDescriptor, MessageDescriptor};
    use crate::lint::config::ConfigEntry;
    use crate::lint::name::RuleName;
    use crate::lint::problem::ProblemDescriptor;
    use crate::lint::rule::ProtoRule;

    // Flags every message in the file
    struct FlagEveryMessage {
        name: RuleName,
    }

    impl FlagEveryMessage {
        fn new() -> Arc<dyn ProtoRule> {
            Arc::new(Self {
                name: RuleName::new("core::1::flag-every-message").unwrap(),
            })
        }
    }

    impl ProtoRule for FlagEveryMessage {
        fn name(&self) -> &RuleName {
            &self.name
        }

        fn lint(&self, file: &ProtoFile) -> Result<Vec<Problem>, LintError> {
            Ok(file
                .descriptor()
                .messages
                .iter()
                .map(|message| Problem {
                    rule_id: self.name.clone(),
                    message: format!("flagged {}", message.name),
                    suggestion: None,
                    location: None,
                    descriptor: Some(ProblemDescriptor::for_message(file.descriptor(), message)),
                })
                .collect())
        }
    }

    struct FailingRule {
        name: RuleName,
    }

    impl ProtoRule for FailingRule {
        fn name(&self) -> &RuleName {
            &self.name
        }

        fn lint(&self, _file: &ProtoFile) -> Result<Vec<Problem>, LintError> {
            Err(LintError::Execution {
                rule: self.name.as_str().to_string(),
                message: "boom".to_string(),
            })
        }
    }

    fn one_message_file(file_name: &str) -> ProtoFile {
        let file = FileDescriptor {
            name: file_name.to_string(),
            package: "library.v1".to_string(),
            messages: vec![MessageDescriptor {
                name: "Book".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        ProtoFile::resolve(&file, std::slice::from_ref(&file)).unwrap()
    }

    #[test]
    fn test_lint_empty_input() {
        let linter = Linter::new(RuleRegistry::new(), Arc::new(Configs::default()));
        let responses = linter.lint_files(&[]).unwrap();
        assert!(responses.is_empty());
    }

    #[test]
    fn test_lint_reports_problems_per_file() {
        let mut registry = RuleRegistry::new();
        registry.register(FlagEveryMessage::new()).unwrap();
        let linter = Linter::new(registry, Arc::new(Configs::default()));

        let files = vec![one_message_file("a.proto"), one_message_file("b.proto")];
        let responses = linter.lint_files(&files).unwrap();
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0].file_name, "a.proto");
        assert_eq!(responses[0].problems.len(), 1);
        assert_eq!(responses[1].problems.len(), 1);
    }

    #[test]
    fn test_disabled_rule_is_skipped() {
        let mut registry = RuleRegistry::new();
        registry.register(FlagEveryMessage::new()).unwrap();
        let configs = Configs::new(vec![ConfigEntry {
            disabled_rules: vec!["core::1::flag-every-message".to_string()],
            ..Default::default()
        }]);
        let linter = Linter::new(registry, Arc::new(configs));

        let responses = linter.lint_files(&[one_message_file("a.proto")]).unwrap();
        assert_eq!(responses[0].problems.len(), 0);
    }

    #[test]
    fn test_rule_disabled_for_one_path_only() {
        let mut registry = RuleRegistry::new();
        registry.register(FlagEveryMessage::new()).unwrap();
        let configs = Configs::new(vec![ConfigEntry {
            included_paths: vec!["legacy/**".to_string()],
            disabled_rules: vec!["core".to_string()],
            ..Default::default()
        }]);
        let linter = Linter::new(registry, Arc::new(configs));

        let files = vec![
            one_message_file("legacy/old.proto"),
            one_message_file("library/new.proto"),
        ];
        let responses = linter.lint_files(&files).unwrap();
        assert_eq!(responses[0].problems.len(), 0);
        assert_eq!(responses[1].problems.len(), 1);
    }

    #[test]
    fn test_execution_error_propagates() {
        let mut registry = RuleRegistry::new();
        registry
            .register(Arc::new(FailingRule {
                name: RuleName::new("core::2::failing").unwrap(),
            }))
            .unwrap();
        let linter = Linter::new(registry, Arc::new(Configs::default()));

        let result = linter.lint_files(&[one_message_file("a.proto")]);
        assert!(matches!(result, Err(LintError::Execution { .. })));
    }
}
