//! The rule engine: names, registry, configuration, and linting
//!
//! The engine owns the internal `seg::number::slug` naming scheme, the
//! rule registry queried at spec-build time, and the per-request lint pass
//! over resolved proto files.

pub mod config;
pub mod linter;
pub mod name;
pub mod problem;
pub mod proto_file;
pub mod registry;
pub mod rule;

pub use config::{ConfigEntry, Configs};
pub use linter::{FileResponse, Linter};
pub use name::RuleName;
pub use problem::{DescriptorKind, Problem, ProblemDescriptor};
pub use proto_file::ProtoFile;
pub use registry::RuleRegistry;
pub use rule::ProtoRule;
