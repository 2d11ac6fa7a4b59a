#![forbid(unsafe_code)]

//! The in-process check runtime
//!
//! Drives one request through a spec: the before hook prepares the
//! request-scoped context, then every selected rule handler runs in turn.
//! Handlers are invoked independently: one handler's error is recorded
//! and does not stop its siblings. Execution is strictly sequential,
//! honoring `Spec::parallelism == 1`.

use crate::check::annotation::{Annotation, AnnotationSink, ResponseWriter};
use crate::check::request::Request;
use crate::check::spec::{RuleSpec, Spec};
use crate::error::CheckError;

/// One rule handler's failure within an otherwise-completed request
#[derive(Debug)]
pub struct RuleFailure {
    /// Host-facing identifier of the failing rule
    pub rule_id: String,

    /// The error the handler returned
    pub error: CheckError,
}

/// The outcome of one request
#[derive(Debug, Default)]
pub struct CheckResponse {
    /// Annotations emitted by all handlers, in execution order
    pub annotations: Vec<Annotation>,

    /// Per-rule handler failures
    pub failures: Vec<RuleFailure>,
}

impl CheckResponse {
    /// True if the request produced no annotations and no failures
    pub fn is_clean(&self) -> bool {
        self.annotations.is_empty() && self.failures.is_empty()
    }
}

/// Runs one request against a spec
///
/// # Errors
///
/// Returns an error only if the before hook fails; the request is then
/// aborted before any rule runs. Handler errors are collected into the
/// response's `failures` instead.
pub fn run_request(spec: &Spec, request: &Request) -> Result<CheckResponse, CheckError> {
    let ctx = (spec.before)(request)?;

    let mut sink = AnnotationSink::new();
    let mut failures = Vec::new();
    // one handler at a time; see Spec::parallelism
    for rule in &spec.rules {
        if !rule_selected(rule, &request.rule_ids) {
            continue;
        }
        if let Err(error) = rule.handler.handle(&ctx, request, &mut sink) {
            failures.push(RuleFailure {
                rule_id: rule.id.clone(),
                error,
            });
        }
    }

    Ok(CheckResponse {
        annotations: sink.into_annotations(),
        failures,
    })
}

fn rule_selected(rule: &RuleSpec, selected: &[String]) -> bool {
    if selected.is_empty() {
        return rule.default;
    }
    selected
        .iter()
        .any(|id| id == &rule.id || rule.category_ids.iter().any(|category| category == id))
}
