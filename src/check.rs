//! The host-facing check protocol: specs, requests, annotations, runtime
//!
//! This is the in-process rendition of the generic "check" contract: the
//! host hands the runtime a request (options + descriptors), the runtime
//! runs the spec's before hook and then each selected rule handler, and
//! handlers emit annotations to a response sink.

pub mod annotation;
pub mod request;
pub mod runtime;
pub mod spec;

pub use annotation::{Annotation, AnnotationSink, ResponseWriter};
pub use request::{Options, Request};
pub use runtime::{CheckResponse, RuleFailure, run_request};
pub use spec::{BeforeHook, CategorySpec, CheckContext, RuleHandler, RuleSpec, RuleType, Spec};
