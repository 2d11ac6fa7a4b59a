#![forbid(unsafe_code)]

//! Rule-name translation
//!
//! Derives the host-facing identifier and category memberships from an
//! internal rule name. Both functions are pure and deterministic: the
//! derived identifier is referenced by suppression comments and downstream
//! tooling, so it must never vary for a given name.

use crate::error::SpecError;
use crate::lint::name::RuleName;

/// Top-level category every rule belongs to
pub const AIP_CATEGORY_ID: &str = "AIP";

/// Category for `core` rules
pub const AIP_CORE_CATEGORY_ID: &str = "AIP_CORE";

/// Category for `client-libraries` rules
pub const AIP_CLIENT_LIBRARIES_CATEGORY_ID: &str = "AIP_CLIENT_LIBRARIES";

/// The parsed pieces of a rule name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleNameParts {
    /// The AIP number from the middle segment
    pub aip: u32,

    /// The trailing slug segment
    pub slug: String,

    /// Host-facing categories: the top-level category plus one derived
    /// from the first segment
    pub category_ids: Vec<String>,
}

/// Parses a rule name into its host-facing parts
///
/// # Errors
///
/// Returns a `SpecError` for a wrong segment count, an unknown category
/// segment, or a non-numeric AIP number. All of these are spec-build
/// failures: the rule set is fixed at build time, so a malformed name is
/// a defect, not a runtime condition.
pub fn parse(name: &RuleName) -> Result<RuleNameParts, SpecError> {
    let segments: Vec<&str> = name.as_str().split("::").collect();
    if segments.len() != 3 {
        return Err(SpecError::MalformedRuleName {
            name: name.as_str().to_string(),
        });
    }

    let mut category_ids = vec![AIP_CATEGORY_ID.to_string()];
    match segments[0] {
        "core" => category_ids.push(AIP_CORE_CATEGORY_ID.to_string()),
        "client-libraries" => category_ids.push(AIP_CLIENT_LIBRARIES_CATEGORY_ID.to_string()),
        other => {
            return Err(SpecError::UnknownCategory {
                category: other.to_string(),
                name: name.as_str().to_string(),
            });
        }
    }

    let aip = segments[1]
        .parse::<u32>()
        .map_err(|_| SpecError::InvalidAipNumber {
            number: segments[1].to_string(),
            name: name.as_str().to_string(),
        })?;

    Ok(RuleNameParts {
        aip,
        slug: segments[2].to_string(),
        category_ids,
    })
}

/// Derives the host-facing rule identifier
///
/// Joins the number and slug segments with underscores under the `AIP_`
/// prefix, upper-cased, hyphens replaced with underscores. The result
/// uses only the characters the host's identifier grammar allows.
pub fn rule_id(name: &RuleName) -> String {
    let tail: Vec<&str> = name.as_str().split("::").skip(1).collect();
    format!("AIP_{}", tail.join("_"))
        .replace('-', "_")
        .to_uppercase()
}
