#![forbid(unsafe_code)]

//! Rendering of check responses for the CLI

use crate::check::runtime::CheckResponse;
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Writes annotations as human-readable text to stdout
///
/// Each annotation prints its location (when it has one) in color,
/// followed by the message, followed by a blank line. A summary line
/// closes the report.
pub fn write_text(response: &CheckResponse, color: ColorChoice) -> std::io::Result<()> {
    let mut stdout = StandardStream::stdout(color);

    for annotation in &response.annotations {
        if let Some(file_name) = &annotation.file_name {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
            write!(stdout, "{}", file_name)?;
            if let Some(source_path) = &annotation.source_path {
                write!(stdout, ":{}", source_path)?;
            }
            stdout.reset()?;
            writeln!(stdout)?;
        }
        writeln!(stdout, "{}", annotation.message.trim_end())?;
        writeln!(stdout)?;
    }

    writeln!(stdout, "{} annotation(s).", response.annotations.len())?;
    Ok(())
}

/// Writes annotations as JSON to stdout, one object per line
pub fn write_json(response: &CheckResponse) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    for annotation in &response.annotations {
        let json = serde_json::to_string(annotation).map_err(std::io::Error::other)?;
        writeln!(stdout, "{}", json)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::annotation::Annotation;

    #[test]
    fn test_write_text_handles_empty_response() {
        let response = CheckResponse::default();
        write_text(&response, ColorChoice::Never).unwrap();
    }

    #[test]
    fn test_write_json_handles_annotations() {
        let response = CheckResponse {
            annotations: vec![Annotation {
                message: "AIP_191_PROTO_PACKAGE: ...".to_string(),
                file_name: Some("a.proto".to_string()),
                source_path: None,
            }],
            failures: vec![],
        };
        write_json(&response).unwrap();
    }
}
