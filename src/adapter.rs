//! The adapter core: maps the rule engine onto the check protocol
//!
//! This layer translates the engine's `seg::number::slug` naming scheme
//! into host-facing identifiers, shares one lazily-loaded configuration
//! across every handler, filters import-only descriptors out of each
//! request, and turns engine problems into host annotations.

pub mod annotate;
pub mod config_store;
pub mod filter;
pub mod handler;
pub mod naming;
pub mod spec_builder;

pub use config_store::ConfigStore;
pub use handler::{AipRuleHandler, CONFIG_FILE_OPTION};
pub use spec_builder::build_spec;
