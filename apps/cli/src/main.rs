//! `tabsplit` binary entry point.

use clap::Parser;
use std::process::ExitCode;
use tabsplit_cli::{execute, init_tracing, Cli};

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    match execute(cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
