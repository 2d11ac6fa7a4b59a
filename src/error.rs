//! Error types for the AIP check adapter
//!
//! This module defines the error types used throughout the crate, following
//! a hierarchical structure: build-time errors (`SpecError`), engine errors
//! (`LintError`), and the request-time `CheckError` that wraps everything a
//! handler can surface to the host runtime.

use std::path::PathBuf;

/// Errors raised while constructing the check specification
///
/// The rule set is defined at build time, so all of these abort spec
/// construction; the process must not serve requests with a partial spec.
#[derive(Debug, thiserror::Error)]
pub enum SpecError {
    /// Rule name does not have exactly three `::`-separated segments
    #[error("unknown rule name format, expected three parts split by '::': {name:?}")]
    MalformedRuleName { name: String },

    /// Rule name's first segment is not a known category
    #[error("unknown rule name format, unknown category {category:?}: {name:?}")]
    UnknownCategory { category: String, name: String },

    /// Rule name's middle segment is not a non-negative integer
    #[error("unknown rule name format, unknown aip {number:?}: {name:?}")]
    InvalidAipNumber { number: String, name: String },

    /// Rule registry could not be populated
    #[error("rule registry error: {0}")]
    Registry(#[from] LintError),
}

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("failed to read configuration {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed
    #[error("failed to parse configuration {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Errors reconstructing the filtered descriptor set
#[derive(Debug, thiserror::Error)]
pub enum DescriptorError {
    /// A method references a message type absent from the request's pool
    #[error("file {file}: method {method} references unresolved type {type_name}")]
    UnresolvedType {
        file: String,
        method: String,
        type_name: String,
    },
}

/// Errors from the lint engine
#[derive(Debug, thiserror::Error)]
pub enum LintError {
    /// Rule name failed shape/charset validation
    #[error("invalid rule name: {0:?}")]
    InvalidRuleName(String),

    /// Two rules registered under the same name
    #[error("duplicate rule name: {0:?}")]
    DuplicateRule(String),

    /// A rule failed while executing
    #[error("rule {rule} failed: {message}")]
    Execution { rule: String, message: String },
}

/// Top-level request-time error returned by rule handlers
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Descriptor-conversion error
    #[error("descriptor error: {0}")]
    Descriptor(#[from] DescriptorError),

    /// Rule-execution error
    #[error("lint error: {0}")]
    Lint(#[from] LintError),

    /// A problem could not be serialized into an annotation message
    #[error("failed to serialize problem: {0}")]
    Serialize(#[from] serde_yaml::Error),

    /// A rule emitted a problem with no descriptor reference
    #[error("rule {rule} produced a problem with no descriptor")]
    MissingDescriptor { rule: String },

    /// A problem's descriptor has no resolvable owning file
    #[error("rule {rule} produced a problem on {descriptor} with no owning file")]
    MissingOwningFile { rule: String, descriptor: String },
}
