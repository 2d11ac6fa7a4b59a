#![forbid(unsafe_code)]

//! Descriptor filtering, the spec's before hook
//!
//! A request's descriptor set includes files pulled in only as imports;
//! those resolve cross-file references but are not analysis targets.
//! This hook keeps the non-import files, resolves each against the full
//! pool, and returns the request-scoped context the handlers read.

use crate::check::request::Request;
use crate::check::spec::CheckContext;
use crate::descriptor::FileDescriptor;
use crate::error::{CheckError, DescriptorError};
use crate::lint::proto_file::ProtoFile;

/// Prepares the request-scoped context
///
/// # Errors
///
/// A descriptor-conversion failure aborts the request before any rule
/// runs.
pub fn prepare_context(request: &Request) -> Result<CheckContext, CheckError> {
    let targets = lint_targets(&request.file_descriptors)?;
    Ok(CheckContext::new(targets))
}

/// Resolves the non-import subset of a descriptor set, order preserved
///
/// Returns an empty set, without error, when the input is empty or
/// contains only imports. Import-only files stay in the resolution pool
/// so references into them still resolve.
pub fn lint_targets(files: &[FileDescriptor]) -> Result<Vec<ProtoFile>, DescriptorError> {
    if files.is_empty() {
        return Ok(Vec::new());
    }
    files
        .iter()
        .filter(|file| !file.is_import)
        .map(|file| ProtoFile::resolve(file, files))
        .collect()
}
