//! CLI argument parsing using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for aip-check commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Text,
    /// One JSON object per line
    Json,
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Automatically detect if the terminal supports color
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

impl ColorChoice {
    /// Maps to termcolor's choice, honoring non-tty stdout for `auto`
    pub fn to_termcolor(self) -> termcolor::ColorChoice {
        match self {
            ColorChoice::Auto => {
                if std::io::IsTerminal::is_terminal(&std::io::stdout()) {
                    termcolor::ColorChoice::Auto
                } else {
                    termcolor::ColorChoice::Never
                }
            }
            ColorChoice::Always => termcolor::ColorChoice::Always,
            ColorChoice::Never => termcolor::ColorChoice::Never,
        }
    }
}

/// aip-check CLI entry point
#[derive(Parser, Debug)]
#[command(name = "aip-check")]
#[command(about = "AIP API design lint rules behind a generic check runner")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Output coloring
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the checks against a request file
    Check {
        /// Request file (YAML, or JSON with a .json extension)
        request: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Rule or category identifiers to run (defaults to all rules)
        #[arg(long = "rule")]
        rules: Vec<String>,
    },

    /// List every rule and category declaration
    ListRules {
        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}
