#![forbid(unsafe_code)]

//! Resolved proto files, the form the rule engine lints
//!
//! A `ProtoFile` pairs one analysis-target file with a message table built
//! from the whole request pool (imports included), so rules can follow
//! method input/output references across files. Resolution fails if the
//! graph cannot be reconstructed.

use crate::descriptor::{FileDescriptor, MessageDescriptor, MethodDescriptor, qualified_name};
use crate::error::DescriptorError;
use std::collections::BTreeMap;

/// One file ready for linting
#[derive(Debug, Clone)]
pub struct ProtoFile {
    file: FileDescriptor,
    // fully-qualified name -> message, across the whole request pool
    messages: BTreeMap<String, MessageDescriptor>,
}

impl ProtoFile {
    /// Resolves a file against the request's full descriptor pool
    ///
    /// # Errors
    ///
    /// Returns `DescriptorError::UnresolvedType` if a service method in
    /// `file` references an input or output type that no file in the pool
    /// declares.
    pub fn resolve(
        file: &FileDescriptor,
        pool: &[FileDescriptor],
    ) -> Result<Self, DescriptorError> {
        let mut messages = BTreeMap::new();
        for pool_file in pool {
            for message in &pool_file.messages {
                messages.insert(
                    qualified_name(&pool_file.package, &message.name),
                    message.clone(),
                );
            }
        }

        for service in &file.services {
            for method in &service.methods {
                for type_name in [&method.input_type, &method.output_type] {
                    if !messages.contains_key(type_name) {
                        return Err(DescriptorError::UnresolvedType {
                            file: file.name.clone(),
                            method: method.name.clone(),
                            type_name: type_name.clone(),
                        });
                    }
                }
            }
        }

        Ok(ProtoFile {
            file: file.clone(),
            messages,
        })
    }

    /// Returns the underlying file descriptor
    pub fn descriptor(&self) -> &FileDescriptor {
        &self.file
    }

    /// Returns the file name
    pub fn name(&self) -> &str {
        &self.file.name
    }

    /// Looks up a message by fully-qualified name anywhere in the pool
    pub fn message(&self, full_name: &str) -> Option<&MessageDescriptor> {
        self.messages.get(full_name)
    }

    /// Resolves a method's input message
    pub fn input_message(&self, method: &MethodDescriptor) -> Option<&MessageDescriptor> {
        self.messages.get(&method.input_type)
    }

    /// Resolves a method's output message
    pub fn output_message(&self, method: &MethodDescriptor) -> Option<&MessageDescriptor> {
        self.messages.get(&method.output_type)
    }
}
