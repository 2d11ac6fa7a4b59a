#![forbid(unsafe_code)]

//! Check requests as supplied by the host

use crate::descriptor::FileDescriptor;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Named string options attached to a request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options(BTreeMap<String, String>);

impl Options {
    /// Creates an empty option set
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up an option by key; absence is not an error
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Sets an option, returning self for chaining
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }
}

/// One check request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Request {
    /// Host-supplied options, e.g. `config_file`
    pub options: Options,

    /// The full descriptor set, imports included
    pub file_descriptors: Vec<FileDescriptor>,

    /// Rule or category identifiers to run; empty means every
    /// default-enabled rule
    pub rule_ids: Vec<String>,
}
