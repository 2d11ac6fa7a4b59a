#![forbid(unsafe_code)]

//! Engine configuration: per-file, per-rule enablement
//!
//! A configuration is an ordered list of entries. Each entry selects files
//! with include/exclude glob patterns and disables or re-enables rules by
//! name pattern (exact name, or a leading segment such as `core` or
//! `core::132`). Rules are enabled by default; later entries override
//! earlier ones.

use crate::error::ConfigError;
use crate::lint::name::RuleName;
use globset::Glob;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One configuration entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigEntry {
    /// Glob patterns of file names this entry applies to; empty means all
    pub included_paths: Vec<String>,

    /// Glob patterns of file names this entry never applies to
    pub excluded_paths: Vec<String>,

    /// Rule-name patterns to disable
    pub disabled_rules: Vec<String>,

    /// Rule-name patterns to re-enable
    pub enabled_rules: Vec<String>,
}

impl ConfigEntry {
    /// Returns true if this entry applies to the given file name
    fn matches_path(&self, file_name: &str) -> bool {
        if matches_any_glob(&self.excluded_paths, file_name) {
            return false;
        }
        self.included_paths.is_empty() || matches_any_glob(&self.included_paths, file_name)
    }
}

/// The engine's external configuration
///
/// Serialized as a top-level list of entries (YAML/JSON), or under a
/// `configs` key for TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configs {
    entries: Vec<ConfigEntry>,
}

/// TOML cannot represent a top-level array, so TOML files nest under `configs`
#[derive(Debug, Deserialize)]
struct TomlConfigs {
    #[serde(default)]
    configs: Vec<ConfigEntry>,
}

impl Configs {
    /// Creates a configuration from a list of entries
    pub fn new(entries: Vec<ConfigEntry>) -> Self {
        Configs { entries }
    }

    /// Returns the configuration entries
    pub fn entries(&self) -> &[ConfigEntry] {
        &self.entries
    }

    /// Reads a configuration from a file
    ///
    /// The format is chosen by extension: `.json` parses as JSON, `.toml`
    /// as TOML (under a `configs` key), anything else as YAML. Glob
    /// patterns are validated here so matching never fails later.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Read` if the file cannot be read and
    /// `ConfigError::Parse` if it cannot be parsed or a glob is invalid.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let parse_error = |message: String| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        };

        let configs = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                serde_json::from_str(&raw).map_err(|e| parse_error(e.to_string()))?
            }
            Some("toml") => {
                let toml_configs: TomlConfigs =
                    toml::from_str(&raw).map_err(|e| parse_error(e.to_string()))?;
                Configs::new(toml_configs.configs)
            }
            _ => serde_yaml::from_str(&raw).map_err(|e| parse_error(e.to_string()))?,
        };

        configs.validate_globs(path)?;
        Ok(configs)
    }

    fn validate_globs(&self, path: &Path) -> Result<(), ConfigError> {
        for entry in &self.entries {
            for pattern in entry.included_paths.iter().chain(&entry.excluded_paths) {
                Glob::new(pattern).map_err(|e| ConfigError::Parse {
                    path: path.to_path_buf(),
                    message: format!("invalid path pattern {:?}: {}", pattern, e),
                })?;
            }
        }
        Ok(())
    }

    /// Returns true if the rule is enabled for the given file
    ///
    /// Rules not mentioned anywhere are enabled. Within a matching entry,
    /// `enabled_rules` overrides `disabled_rules`; across entries, later
    /// entries override earlier ones.
    pub fn rule_enabled(&self, rule: &RuleName, file_name: &str) -> bool {
        let mut enabled = true;
        for entry in &self.entries {
            if !entry.matches_path(file_name) {
                continue;
            }
            if matches_any_rule(&entry.disabled_rules, rule) {
                enabled = false;
            }
            if matches_any_rule(&entry.enabled_rules, rule) {
                enabled = true;
            }
        }
        enabled
    }
}

fn matches_any_glob(patterns: &[String], file_name: &str) -> bool {
    patterns.iter().any(|pattern| {
        Glob::new(pattern)
            .map(|glob| glob.compile_matcher().is_match(file_name))
            .unwrap_or(false)
    })
}

fn matches_any_rule(patterns: &[String], rule: &RuleName) -> bool {
    patterns.iter().any(|pattern| {
        rule.as_str() == pattern
            || rule
                .as_str()
                .strip_prefix(pattern.as_str())
                .is_some_and(|rest| rest.starts_with("::"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn rule(name: &str) -> RuleName {
        RuleName::new(name).unwrap()
    }

    fn write_temp(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_is_all_enabled() {
        let configs = Configs::default();
        assert!(configs.rule_enabled(&rule("core::132::request-parent-required"), "a.proto"));
    }

    #[test]
    fn test_disable_exact_rule() {
        let configs = Configs::new(vec![ConfigEntry {
            disabled_rules: vec!["core::132::request-parent-required".to_string()],
            ..Default::default()
        }]);
        assert!(!configs.rule_enabled(&rule("core::132::request-parent-required"), "a.proto"));
        assert!(configs.rule_enabled(&rule("core::131::request-name-required"), "a.proto"));
    }

    #[test]
    fn test_disable_by_segment_prefix() {
        let configs = Configs::new(vec![ConfigEntry {
            disabled_rules: vec!["core".to_string()],
            ..Default::default()
        }]);
        assert!(!configs.rule_enabled(&rule("core::132::request-parent-required"), "a.proto"));
        assert!(configs.rule_enabled(&rule("client-libraries::4232::method-signature"), "a.proto"));
    }

    #[test]
    fn test_prefix_must_align_with_segments() {
        // "core::13" is not a prefix of "core::132::..." at a segment boundary
        let configs = Configs::new(vec![ConfigEntry {
            disabled_rules: vec!["core::13".to_string()],
            ..Default::default()
        }]);
        assert!(configs.rule_enabled(&rule("core::132::request-parent-required"), "a.proto"));
    }

    #[test]
    fn test_enabled_overrides_disabled_within_entry() {
        let configs = Configs::new(vec![ConfigEntry {
            disabled_rules: vec!["core".to_string()],
            enabled_rules: vec!["core::132::request-parent-required".to_string()],
            ..Default::default()
        }]);
        assert!(configs.rule_enabled(&rule("core::132::request-parent-required"), "a.proto"));
        assert!(!configs.rule_enabled(&rule("core::131::request-name-required"), "a.proto"));
    }

    #[test]
    fn test_later_entries_override_earlier() {
        let configs = Configs::new(vec![
            ConfigEntry {
                disabled_rules: vec!["core".to_string()],
                ..Default::default()
            },
            ConfigEntry {
                enabled_rules: vec!["core".to_string()],
                ..Default::default()
            },
        ]);
        assert!(configs.rule_enabled(&rule("core::131::request-name-required"), "a.proto"));
    }

    #[test]
    fn test_included_paths_scope_entry() {
        let configs = Configs::new(vec![ConfigEntry {
            included_paths: vec!["legacy/**".to_string()],
            disabled_rules: vec!["core".to_string()],
            ..Default::default()
        }]);
        let name = rule("core::132::request-parent-required");
        assert!(!configs.rule_enabled(&name, "legacy/v1/library.proto"));
        assert!(configs.rule_enabled(&name, "library/v1/library.proto"));
    }

    #[test]
    fn test_excluded_paths_override_included() {
        let configs = Configs::new(vec![ConfigEntry {
            included_paths: vec!["**/*.proto".to_string()],
            excluded_paths: vec!["library/**".to_string()],
            disabled_rules: vec!["core".to_string()],
            ..Default::default()
        }]);
        let name = rule("core::132::request-parent-required");
        assert!(!configs.rule_enabled(&name, "legacy/v1/library.proto"));
        assert!(configs.rule_enabled(&name, "library/v1/library.proto"));
    }

    #[test]
    fn test_from_yaml_file() {
        let file = write_temp(
            ".yaml",
            r#"
- disabled_rules:
    - core::132::request-parent-required
"#,
        );
        let configs = Configs::from_file(file.path()).unwrap();
        assert!(!configs.rule_enabled(&rule("core::132::request-parent-required"), "a.proto"));
    }

    #[test]
    fn test_from_json_file() {
        let file = write_temp(
            ".json",
            r#"[{"disabled_rules": ["client-libraries"]}]"#,
        );
        let configs = Configs::from_file(file.path()).unwrap();
        assert!(!configs.rule_enabled(&rule("client-libraries::4232::method-signature"), "a.proto"));
        assert!(configs.rule_enabled(&rule("core::131::request-name-required"), "a.proto"));
    }

    #[test]
    fn test_from_toml_file() {
        let file = write_temp(
            ".toml",
            r#"
[[configs]]
disabled_rules = ["core::191::proto-package"]
"#,
        );
        let configs = Configs::from_file(file.path()).unwrap();
        assert!(!configs.rule_enabled(&rule("core::191::proto-package"), "a.proto"));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let result = Configs::from_file(Path::new("/nonexistent/aip.yaml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let file = write_temp(".yaml", ": : not yaml : :");
        let result = Configs::from_file(file.path());
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_invalid_glob_is_parse_error() {
        let file = write_temp(
            ".yaml",
            r#"
- included_paths:
    - "lib[rary/**"
"#,
        );
        let result = Configs::from_file(file.path());
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
