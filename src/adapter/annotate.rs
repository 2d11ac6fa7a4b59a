#![forbid(unsafe_code)]

//! Translation of engine problems into host annotations

use crate::adapter::naming;
use crate::check::annotation::{Annotation, ResponseWriter};
use crate::error::CheckError;
use crate::lint::problem::Problem;

/// Translates one problem into one annotation and writes it to the sink
///
/// The message is the problem serialized to YAML, prefixed with the
/// host-facing rule identifier, so the identifier is always visible
/// alongside full diagnostic context. The location is resolved through
/// exactly one of three branches, in priority order: the problem's
/// explicit location, then the descriptor's recorded source info, then
/// no location at all.
///
/// # Errors
///
/// A problem with no descriptor, or a descriptor with no owning file,
/// indicates a defect in the rule engine and is reported as a fatal
/// translation error; an annotation is never fabricated from a guessed
/// location.
pub fn add_problem(
    response: &mut dyn ResponseWriter,
    problem: &Problem,
) -> Result<(), CheckError> {
    let body = serde_yaml::to_string(problem)?;
    let message = format!("{}: {}", naming::rule_id(&problem.rule_id), body);

    let descriptor = problem
        .descriptor
        .as_ref()
        .ok_or_else(|| CheckError::MissingDescriptor {
            rule: problem.rule_id.as_str().to_string(),
        })?;
    let file_name =
        descriptor
            .file_name
            .as_deref()
            .ok_or_else(|| CheckError::MissingOwningFile {
                rule: problem.rule_id.as_str().to_string(),
                descriptor: descriptor.full_name.clone(),
            })?;

    let (file_name, source_path) = if let Some(location) = &problem.location {
        (Some(file_name.to_string()), Some(location.clone()))
    } else if let Some(source_info) = &descriptor.source_info {
        (Some(file_name.to_string()), Some(source_info.clone()))
    } else {
        (None, None)
    };

    response.add_annotation(Annotation {
        message,
        file_name,
        source_path,
    });
    Ok(())
}
