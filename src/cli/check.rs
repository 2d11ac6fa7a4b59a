//! Check command implementation
//!
//! Loads a serialized request, builds the specification, runs the
//! sequential check runtime, and renders the resulting annotations.

use crate::adapter::spec_builder::build_spec;
use crate::check::request::Request;
use crate::check::runtime::run_request;
use crate::cli::args::{ColorChoice, OutputFormat};
use crate::cli::{EXIT_ANNOTATIONS, EXIT_ERROR, EXIT_SUCCESS};
use crate::output;
use std::path::{Path, PathBuf};

/// Error type specific to the check command
#[derive(Debug, thiserror::Error)]
pub(crate) enum CommandError {
    #[error("specification error: {0}")]
    Spec(#[from] crate::error::SpecError),

    #[error("check error: {0}")]
    Check(#[from] crate::error::CheckError),

    #[error("failed to read request {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse request {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Run the check command
///
/// # Returns
///
/// Exit code:
/// - 0: no annotations, no failures
/// - 1: annotations emitted
/// - 2: build/request error, or at least one rule handler failed
pub fn run_check(
    request_path: &Path,
    rules: &[String],
    format: OutputFormat,
    color: ColorChoice,
) -> i32 {
    match run_check_inner(request_path, rules, format, color) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

fn run_check_inner(
    request_path: &Path,
    rules: &[String],
    format: OutputFormat,
    color: ColorChoice,
) -> Result<i32, CommandError> {
    let mut request = load_request(request_path)?;
    if !rules.is_empty() {
        request.rule_ids = rules.to_vec();
    }

    let spec = build_spec()?;
    let response = run_request(&spec, &request)?;

    for failure in &response.failures {
        eprintln!("rule {} failed: {}", failure.rule_id, failure.error);
    }

    match format {
        OutputFormat::Text => output::write_text(&response, color.to_termcolor())?,
        OutputFormat::Json => output::write_json(&response)?,
    }

    if !response.failures.is_empty() {
        Ok(EXIT_ERROR)
    } else if response.annotations.is_empty() {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_ANNOTATIONS)
    }
}

/// Loads a request file, choosing the parser by extension
fn load_request(path: &Path) -> Result<Request, CommandError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CommandError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let parse_error = |message: String| CommandError::Parse {
        path: path.to_path_buf(),
        message,
    };

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&raw).map_err(|e| parse_error(e.to_string())),
        _ => serde_yaml::from_str(&raw).map_err(|e| parse_error(e.to_string())),
    }
}
