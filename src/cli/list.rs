//! List command implementation

use crate::adapter::spec_builder::build_spec;
use crate::check::spec::Spec;
use crate::cli::args::OutputFormat;
use crate::cli::{EXIT_ERROR, EXIT_SUCCESS};
use serde::Serialize;

/// JSON shape for one listed rule
#[derive(Debug, Serialize)]
struct ListedRule<'a> {
    id: &'a str,
    category_ids: &'a [String],
    default: bool,
    purpose: &'a str,
}

/// Run the list-rules command
pub fn run_list(format: OutputFormat) -> i32 {
    let spec = match build_spec() {
        Ok(spec) => spec,
        Err(e) => {
            eprintln!("Error: {}", e);
            return EXIT_ERROR;
        }
    };

    match format {
        OutputFormat::Text => print_text(&spec),
        OutputFormat::Json => print_json(&spec),
    }
    EXIT_SUCCESS
}

fn print_text(spec: &Spec) {
    println!("Categories:");
    for category in &spec.categories {
        println!("  {}: {}", category.id, category.purpose);
    }
    println!();
    println!("Rules:");
    for rule in &spec.rules {
        println!(
            "  {} [{}]: {}",
            rule.id,
            rule.category_ids.join(", "),
            rule.purpose
        );
    }
}

fn print_json(spec: &Spec) {
    for rule in &spec.rules {
        let listed = ListedRule {
            id: &rule.id,
            category_ids: &rule.category_ids,
            default: rule.default,
            purpose: &rule.purpose,
        };
        if let Ok(json) = serde_json::to_string(&listed) {
            println!("{}", json);
        }
    }
}
