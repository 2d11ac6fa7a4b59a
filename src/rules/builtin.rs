#![forbid(unsafe_code)]

//! The builtin rules and their registration entry point

use crate::error::LintError;
use crate::lint::name::RuleName;
use crate::lint::problem::{Problem, ProblemDescriptor};
use crate::lint::proto_file::ProtoFile;
use crate::lint::registry::RuleRegistry;
use crate::lint::rule::ProtoRule;
use regex::Regex;
use std::sync::Arc;

/// Registers every builtin rule
///
/// # Errors
///
/// Returns `LintError` if a rule name is invalid or registered twice; both
/// indicate a defect in this module, and spec construction must abort.
pub fn add(registry: &mut RuleRegistry) -> Result<(), LintError> {
    registry.register(Arc::new(RequestNameRequired::new()?))?;
    registry.register(Arc::new(RequestParentRequired::new()?))?;
    registry.register(Arc::new(LowerSnakeCaseFields::new()?))?;
    registry.register(Arc::new(RequestPageSizeField::new()?))?;
    registry.register(Arc::new(ProtoPackage::new()?))?;
    registry.register(Arc::new(MethodSignature::new()?))?;
    Ok(())
}

/// True for message names like `<Prefix><Resource>Request`
fn is_request_message(prefix: &str, message_name: &str) -> bool {
    message_name
        .strip_prefix(prefix)
        .is_some_and(|rest| rest.len() > "Request".len() && rest.ends_with("Request"))
}

fn simple_name(full_name: &str) -> &str {
    full_name.rsplit('.').next().unwrap_or(full_name)
}

/// AIP-131: `Get*Request` messages must have a singular `string name` field
pub struct RequestNameRequired {
    name: RuleName,
}

impl RequestNameRequired {
    pub fn new() -> Result<Self, LintError> {
        Ok(Self {
            name: RuleName::new("core::131::request-name-required")?,
        })
    }
}

impl ProtoRule for RequestNameRequired {
    fn name(&self) -> &RuleName {
        &self.name
    }

    fn lint(&self, file: &ProtoFile) -> Result<Vec<Problem>, LintError> {
        let mut problems = Vec::new();
        for message in &file.descriptor().messages {
            if !is_request_message("Get", &message.name) {
                continue;
            }
            match message.fields.iter().find(|field| field.name == "name") {
                None => problems.push(Problem {
                    rule_id: self.name.clone(),
                    message: format!("Message {} has no `name` field.", message.name),
                    suggestion: Some("string name = 1;".to_string()),
                    location: None,
                    descriptor: Some(ProblemDescriptor::for_message(file.descriptor(), message)),
                }),
                Some(field) if field.type_name != "string" || field.repeated => {
                    problems.push(Problem {
                        rule_id: self.name.clone(),
                        message: format!(
                            "Field `name` of message {} must be a singular string.",
                            message.name
                        ),
                        suggestion: None,
                        location: None,
                        descriptor: Some(ProblemDescriptor::for_field(
                            file.descriptor(),
                            message,
                            field,
                        )),
                    });
                }
                Some(_) => {}
            }
        }
        Ok(problems)
    }
}

/// AIP-132: `List*Request` messages must have a `parent` field
pub struct RequestParentRequired {
    name: RuleName,
}

impl RequestParentRequired {
    pub fn new() -> Result<Self, LintError> {
        Ok(Self {
            name: RuleName::new("core::132::request-parent-required")?,
        })
    }
}

impl ProtoRule for RequestParentRequired {
    fn name(&self) -> &RuleName {
        &self.name
    }

    fn lint(&self, file: &ProtoFile) -> Result<Vec<Problem>, LintError> {
        let mut problems = Vec::new();
        for message in &file.descriptor().messages {
            if !is_request_message("List", &message.name) {
                continue;
            }
            if !message.fields.iter().any(|field| field.name == "parent") {
                problems.push(Problem {
                    rule_id: self.name.clone(),
                    message: format!("Message {} has no `parent` field.", message.name),
                    suggestion: Some("string parent = 1;".to_string()),
                    location: None,
                    descriptor: Some(ProblemDescriptor::for_message(file.descriptor(), message)),
                });
            }
        }
        Ok(problems)
    }
}

/// AIP-140: field names must be lower_snake_case
pub struct LowerSnakeCaseFields {
    name: RuleName,
    pattern: Regex,
}

impl LowerSnakeCaseFields {
    pub fn new() -> Result<Self, LintError> {
        let name = RuleName::new("core::140::lower-snake-case-fields")?;
        let pattern = Regex::new(r"^[a-z][a-z0-9_]*$").map_err(|e| LintError::Execution {
            rule: name.as_str().to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { name, pattern })
    }
}

impl ProtoRule for LowerSnakeCaseFields {
    fn name(&self) -> &RuleName {
        &self.name
    }

    fn lint(&self, file: &ProtoFile) -> Result<Vec<Problem>, LintError> {
        let mut problems = Vec::new();
        for message in &file.descriptor().messages {
            for field in &message.fields {
                if self.pattern.is_match(&field.name) {
                    continue;
                }
                problems.push(Problem {
                    rule_id: self.name.clone(),
                    message: format!(
                        "Field `{}` of message {} is not lower_snake_case.",
                        field.name, message.name
                    ),
                    suggestion: Some(to_lower_snake_case(&field.name)),
                    // the field declaration itself is the precise location
                    location: field.source_info.clone(),
                    descriptor: Some(ProblemDescriptor::for_field(
                        file.descriptor(),
                        message,
                        field,
                    )),
                });
            }
        }
        Ok(problems)
    }
}

fn to_lower_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 && !out.ends_with('_') {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else if c == '-' || c == ' ' {
            if !out.ends_with('_') {
                out.push('_');
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// AIP-158: `List*Request` messages must have a singular `int32 page_size`
pub struct RequestPageSizeField {
    name: RuleName,
}

impl RequestPageSizeField {
    pub fn new() -> Result<Self, LintError> {
        Ok(Self {
            name: RuleName::new("core::158::request-page-size-field")?,
        })
    }
}

impl ProtoRule for RequestPageSizeField {
    fn name(&self) -> &RuleName {
        &self.name
    }

    fn lint(&self, file: &ProtoFile) -> Result<Vec<Problem>, LintError> {
        let mut problems = Vec::new();
        for message in &file.descriptor().messages {
            if !is_request_message("List", &message.name) {
                continue;
            }
            match message.fields.iter().find(|field| field.name == "page_size") {
                None => problems.push(Problem {
                    rule_id: self.name.clone(),
                    message: format!("Message {} has no `page_size` field.", message.name),
                    suggestion: Some("int32 page_size = 2;".to_string()),
                    location: None,
                    descriptor: Some(ProblemDescriptor::for_message(file.descriptor(), message)),
                }),
                Some(field) if field.type_name != "int32" || field.repeated => {
                    problems.push(Problem {
                        rule_id: self.name.clone(),
                        message: format!(
                            "Field `page_size` of message {} must be a singular int32.",
                            message.name
                        ),
                        suggestion: None,
                        location: None,
                        descriptor: Some(ProblemDescriptor::for_field(
                            file.descriptor(),
                            message,
                            field,
                        )),
                    });
                }
                Some(_) => {}
            }
        }
        Ok(problems)
    }
}

/// AIP-191: every proto file must declare a package
pub struct ProtoPackage {
    name: RuleName,
}

impl ProtoPackage {
    pub fn new() -> Result<Self, LintError> {
        Ok(Self {
            name: RuleName::new("core::191::proto-package")?,
        })
    }
}

impl ProtoRule for ProtoPackage {
    fn name(&self) -> &RuleName {
        &self.name
    }

    fn lint(&self, file: &ProtoFile) -> Result<Vec<Problem>, LintError> {
        if !file.descriptor().package.is_empty() {
            return Ok(vec![]);
        }
        Ok(vec![Problem {
            rule_id: self.name.clone(),
            message: format!("File {} has no package declaration.", file.name()),
            suggestion: None,
            location: None,
            descriptor: Some(ProblemDescriptor::for_file(file.descriptor())),
        }])
    }
}

/// AIP-4232: standard-verb methods must take `<MethodName>Request`
pub struct MethodSignature {
    name: RuleName,
}

impl MethodSignature {
    pub fn new() -> Result<Self, LintError> {
        Ok(Self {
            name: RuleName::new("client-libraries::4232::method-signature")?,
        })
    }
}

impl ProtoRule for MethodSignature {
    fn name(&self) -> &RuleName {
        &self.name
    }

    fn lint(&self, file: &ProtoFile) -> Result<Vec<Problem>, LintError> {
        let mut problems = Vec::new();
        for service in &file.descriptor().services {
            for method in &service.methods {
                if !method.name.starts_with("Get") && !method.name.starts_with("List") {
                    continue;
                }
                let expected = format!("{}Request", method.name);
                if simple_name(&method.input_type) != expected {
                    problems.push(Problem {
                        rule_id: self.name.clone(),
                        message: format!(
                            "Method {} must take a `{}` message, not `{}`.",
                            method.name, expected, method.input_type
                        ),
                        suggestion: Some(expected),
                        location: None,
                        descriptor: Some(ProblemDescriptor::for_method(
                            file.descriptor(),
                            &service.name,
                            method,
                        )),
                    });
                }
            }
        }
        Ok(problems)
    }
}
