//! Shared helpers for integration tests

#![allow(dead_code)]

use aip_check::check::request::{Options, Request};
use aip_check::descriptor::{
    FieldDescriptor, FileDescriptor, MessageDescriptor, SourcePath,
};

/// A `ListBooksRequest` that satisfies every builtin rule except AIP-132:
/// it has a valid `page_size` but no `parent` field.
pub fn list_books_request_missing_parent(file_name: &str, is_import: bool) -> FileDescriptor {
    FileDescriptor {
        name: file_name.to_string(),
        package: "library.v1".to_string(),
        is_import,
        messages: vec![MessageDescriptor {
            name: "ListBooksRequest".to_string(),
            fields: vec![FieldDescriptor {
                name: "page_size".to_string(),
                number: 1,
                type_name: "int32".to_string(),
                ..Default::default()
            }],
            source_info: Some(SourcePath::new(vec![4, 0])),
        }],
        ..Default::default()
    }
}

/// A file that satisfies every builtin rule.
pub fn clean_file(file_name: &str) -> FileDescriptor {
    FileDescriptor {
        name: file_name.to_string(),
        package: "library.v1".to_string(),
        messages: vec![MessageDescriptor {
            name: "Book".to_string(),
            fields: vec![FieldDescriptor {
                name: "name".to_string(),
                number: 1,
                type_name: "string".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        }],
        ..Default::default()
    }
}

/// Builds a request around the given descriptors, with no options.
pub fn request_for(file_descriptors: Vec<FileDescriptor>) -> Request {
    Request {
        file_descriptors,
        ..Default::default()
    }
}

/// Builds a request with a `config_file` option.
pub fn request_with_config(file_descriptors: Vec<FileDescriptor>, config_path: &str) -> Request {
    Request {
        options: Options::new().with("config_file", config_path),
        file_descriptors,
        ..Default::default()
    }
}
