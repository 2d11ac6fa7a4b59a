//! aip-check CLI entry point
//!
//! External glue only: builds the specification and drives the check
//! runtime through the subcommands.

use aip_check::cli::{Command, args::Cli};
use clap::Parser;
use std::process;

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Command::Check {
            request,
            format,
            rules,
        } => aip_check::cli::check::run_check(&request, &rules, format, cli.color),
        Command::ListRules { format } => aip_check::cli::list::run_list(format),
    };

    process::exit(exit_code);
}
