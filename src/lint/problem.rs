#![forbid(unsafe_code)]

//! Rule findings
//!
//! A `Problem` is one reported rule violation. Problems serialize to YAML
//! for the annotation message body; the descriptor reference is an internal
//! pointer and is excluded from serialization.

use crate::descriptor::{
    FieldDescriptor, FileDescriptor, MessageDescriptor, MethodDescriptor, SourcePath,
    qualified_name,
};
use crate::lint::name::RuleName;
use serde::Serialize;
use std::fmt;

/// The kind of descriptor a problem concerns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorKind {
    File,
    Message,
    Field,
    Service,
    Method,
}

impl fmt::Display for DescriptorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            DescriptorKind::File => "file",
            DescriptorKind::Message => "message",
            DescriptorKind::Field => "field",
            DescriptorKind::Service => "service",
            DescriptorKind::Method => "method",
        };
        write!(f, "{}", kind)
    }
}

/// Reference to the descriptor a problem concerns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemDescriptor {
    /// What kind of descriptor this is
    pub kind: DescriptorKind,

    /// Fully-qualified name of the descriptor
    pub full_name: String,

    /// Name of the owning file; a well-formed problem always has one
    pub file_name: Option<String>,

    /// Recorded source position of the descriptor, if any
    pub source_info: Option<SourcePath>,
}

impl ProblemDescriptor {
    /// Builds a reference to the file itself
    pub fn for_file(file: &FileDescriptor) -> Self {
        ProblemDescriptor {
            kind: DescriptorKind::File,
            full_name: file.name.clone(),
            file_name: Some(file.name.clone()),
            source_info: file.source_info.clone(),
        }
    }

    /// Builds a reference to a message in the given file
    pub fn for_message(file: &FileDescriptor, message: &MessageDescriptor) -> Self {
        ProblemDescriptor {
            kind: DescriptorKind::Message,
            full_name: qualified_name(&file.package, &message.name),
            file_name: Some(file.name.clone()),
            source_info: message.source_info.clone(),
        }
    }

    /// Builds a reference to a field of a message in the given file
    pub fn for_field(
        file: &FileDescriptor,
        message: &MessageDescriptor,
        field: &FieldDescriptor,
    ) -> Self {
        let message_name = qualified_name(&file.package, &message.name);
        ProblemDescriptor {
            kind: DescriptorKind::Field,
            full_name: format!("{}.{}", message_name, field.name),
            file_name: Some(file.name.clone()),
            source_info: field.source_info.clone(),
        }
    }

    /// Builds a reference to a service method in the given file
    pub fn for_method(file: &FileDescriptor, service_name: &str, method: &MethodDescriptor) -> Self {
        let service = qualified_name(&file.package, service_name);
        ProblemDescriptor {
            kind: DescriptorKind::Method,
            full_name: format!("{}.{}", service, method.name),
            file_name: Some(file.name.clone()),
            source_info: method.source_info.clone(),
        }
    }
}

/// One rule violation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Problem {
    /// Name of the rule that reported this problem
    pub rule_id: RuleName,

    /// Human-readable description of the violation
    pub message: String,

    /// Suggested replacement, if the rule has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// Explicit source location; when present it takes priority over the
    /// descriptor's recorded position
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<SourcePath>,

    /// The descriptor this problem concerns; never serialized
    #[serde(skip)]
    pub descriptor: Option<ProblemDescriptor>,
}
