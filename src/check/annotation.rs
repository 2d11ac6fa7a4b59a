#![forbid(unsafe_code)]

//! Annotations, the host-visible output unit

use crate::descriptor::SourcePath;
use serde::Serialize;

/// One diagnostic reported back to the host
///
/// An annotation either carries both a file name and a source path, or
/// neither; a message-only annotation is a file-less diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    /// Diagnostic text; begins with the host-facing rule identifier
    pub message: String,

    /// Name of the file the diagnostic concerns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    /// Path into the file's descriptor structure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_path: Option<SourcePath>,
}

/// Sink that rule handlers write annotations into
pub trait ResponseWriter {
    /// Records one annotation; ownership passes to the sink
    fn add_annotation(&mut self, annotation: Annotation);
}

/// A collecting `ResponseWriter`
#[derive(Debug, Default)]
pub struct AnnotationSink {
    annotations: Vec<Annotation>,
}

impl AnnotationSink {
    /// Creates an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the collected annotations
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Consumes the sink, returning the collected annotations
    pub fn into_annotations(self) -> Vec<Annotation> {
        self.annotations
    }
}

impl ResponseWriter for AnnotationSink {
    fn add_annotation(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }
}
