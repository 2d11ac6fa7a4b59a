//! Builtin AIP rule implementations
//!
//! A representative set of checks from the published AIP conventions
//! (https://aip.dev). The adapter itself is rule-agnostic; new rules only
//! need to implement `ProtoRule` and be registered in [`add`].

pub mod builtin;

pub use builtin::add;
