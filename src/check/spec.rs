#![forbid(unsafe_code)]

//! Check specifications: rule and category declarations, the before hook,
//! and the request-scoped context threaded into handlers

use crate::check::annotation::ResponseWriter;
use crate::check::request::Request;
use crate::error::CheckError;
use crate::lint::proto_file::ProtoFile;

/// Marker for the kind of check a rule performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleType {
    Lint,
}

/// A category declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySpec {
    /// Unique uppercase category identifier
    pub id: String,

    /// Human-readable purpose
    pub purpose: String,
}

/// Request-scoped state prepared by the before hook
///
/// Carries the filtered, resolved descriptor set so every handler lints
/// exactly the files intended for analysis, not the raw request set
/// (which may include import-only files). Prepared once per request,
/// read-only afterwards, discarded with the request.
#[derive(Debug, Default)]
pub struct CheckContext {
    targets: Vec<ProtoFile>,
}

impl CheckContext {
    /// Creates a context from resolved lint targets
    pub fn new(targets: Vec<ProtoFile>) -> Self {
        Self { targets }
    }

    /// The files to lint; empty when the request had no non-import files
    pub fn targets(&self) -> &[ProtoFile] {
        &self.targets
    }
}

/// Per-rule execution unit bound into a `RuleSpec`
pub trait RuleHandler: Send + Sync {
    /// Runs this rule against the context's targets, writing annotations
    /// to the response sink
    fn handle(
        &self,
        ctx: &CheckContext,
        request: &Request,
        response: &mut dyn ResponseWriter,
    ) -> Result<(), CheckError>;
}

/// One rule declaration handed to the host runtime
pub struct RuleSpec {
    /// Unique uppercase identifier, e.g. `AIP_132_REQUEST_PARENT_REQUIRED`
    pub id: String,

    /// Categories this rule belongs to
    pub category_ids: Vec<String>,

    /// Whether the rule runs when the request selects no rules explicitly
    pub default: bool,

    /// Human-readable purpose
    pub purpose: String,

    /// Kind of check
    pub rule_type: RuleType,

    /// Bound execution unit
    pub handler: Box<dyn RuleHandler>,
}

/// Hook run once per request, before any rule handler
pub type BeforeHook = Box<dyn Fn(&Request) -> Result<CheckContext, CheckError> + Send + Sync>;

/// The full specification handed to the host runtime at startup
pub struct Spec {
    /// One declaration per rule
    pub rules: Vec<RuleSpec>,

    /// Category declarations
    pub categories: Vec<CategorySpec>,

    /// Per-request preparation hook
    pub before: BeforeHook,

    /// Maximum concurrent handlers the runtime may use; always 1: the
    /// configuration store's first initialization and the rule engine's
    /// shared state are not safe for concurrent use
    pub parallelism: usize,
}
