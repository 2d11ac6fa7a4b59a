#![forbid(unsafe_code)]

//! The rule trait implemented by every AIP check

use crate::error::LintError;
use crate::lint::name::RuleName;
use crate::lint::problem::Problem;
use crate::lint::proto_file::ProtoFile;

/// A single lint rule over proto files
///
/// Rules are pure: they read one resolved file and report problems. The
/// trait is `Send + Sync` so rules can be shared behind `Arc`, but the
/// engine never runs them concurrently (see the runtime's single-worker
/// constraint).
pub trait ProtoRule: Send + Sync {
    /// Returns this rule's internal name
    fn name(&self) -> &RuleName;

    /// Lints one file, returning all problems found
    ///
    /// An empty vector means the file is clean. An error aborts this
    /// rule's contribution to the current request.
    fn lint(&self, file: &ProtoFile) -> Result<Vec<Problem>, LintError>;
}
