#![forbid(unsafe_code)]

//! aip-check: AIP API-design lint rules behind a generic check runner
//!
//! The crate adapts a registry of AIP lint rules onto a host-driven
//! "check" protocol: each rule becomes an independently addressable
//! check, requests carry protobuf file descriptors plus options, and
//! every finding is translated into a normalized annotation.
//!
//! The runtime executes handlers strictly sequentially (parallelism is
//! pinned to 1): the shared configuration store and the rule engine's
//! registry are not safe for concurrent use.

pub mod adapter;
pub mod check;
pub mod cli;
pub mod descriptor;
pub mod error;
pub mod lint;
pub mod output;
pub mod rules;

// Re-export error types for convenient access
pub use error::{CheckError, ConfigError, DescriptorError, LintError, SpecError};

// Re-export the two entry points the host glue needs
pub use adapter::spec_builder::build_spec;
pub use check::runtime::run_request;
