#![forbid(unsafe_code)]

//! Protocol-buffer descriptor model supplied by the host with each request
//!
//! Descriptors are a structural description of proto files, messages, and
//! services, used for static analysis without compiling anything. Each file
//! carries an `is_import` flag: import-only files are present so cross-file
//! references resolve, but they are not direct analysis targets.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A path into a descriptor's structure, protobuf `SourceCodeInfo` style
///
/// Paths are sequences of field/index numbers, e.g. `[4, 0, 2, 1]` for the
/// second field of the first message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourcePath(Vec<i32>);

impl SourcePath {
    /// Creates a new SourcePath from path components
    pub fn new(path: impl Into<Vec<i32>>) -> Self {
        SourcePath(path.into())
    }

    /// Returns the path components
    pub fn as_slice(&self) -> &[i32] {
        &self.0
    }
}

impl fmt::Display for SourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for component in &self.0 {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{}", component)?;
            first = false;
        }
        Ok(())
    }
}

impl From<Vec<i32>> for SourcePath {
    fn from(path: Vec<i32>) -> Self {
        SourcePath(path)
    }
}

/// One proto file in a request's descriptor set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    /// File name, e.g. `library/v1/library.proto`
    pub name: String,

    /// Proto package, e.g. `library.v1`; may be empty
    #[serde(default)]
    pub package: String,

    /// True if this file is present only as a transitive import
    #[serde(default)]
    pub is_import: bool,

    /// Top-level messages declared in this file
    #[serde(default)]
    pub messages: Vec<MessageDescriptor>,

    /// Services declared in this file
    #[serde(default)]
    pub services: Vec<ServiceDescriptor>,

    /// Recorded source position of the file-level declaration, if any
    #[serde(default)]
    pub source_info: Option<SourcePath>,
}

/// A message declaration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDescriptor {
    /// Simple (unqualified) message name
    pub name: String,

    /// Fields declared in this message
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,

    /// Recorded source position, if any
    #[serde(default)]
    pub source_info: Option<SourcePath>,
}

/// A field declaration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name as declared
    pub name: String,

    /// Field number
    #[serde(default)]
    pub number: i32,

    /// Scalar type keyword (`string`, `int32`, ...) or fully-qualified
    /// message name
    #[serde(default)]
    pub type_name: String,

    /// True for `repeated` fields
    #[serde(default)]
    pub repeated: bool,

    /// Recorded source position, if any
    #[serde(default)]
    pub source_info: Option<SourcePath>,
}

/// A service declaration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    /// Simple service name
    pub name: String,

    /// Methods declared in this service
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,

    /// Recorded source position, if any
    #[serde(default)]
    pub source_info: Option<SourcePath>,
}

/// A service method declaration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    /// Simple method name
    pub name: String,

    /// Fully-qualified input message type
    pub input_type: String,

    /// Fully-qualified output message type
    pub output_type: String,

    /// Recorded source position, if any
    #[serde(default)]
    pub source_info: Option<SourcePath>,
}

/// Joins a package and a simple name into a fully-qualified name
pub fn qualified_name(package: &str, name: &str) -> String {
    if package.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", package, name)
    }
}
