//! todo-cli entry point.
//!
//! Interactive in-memory todo list manager. Takes no arguments — the
//! whole interface is the menu loop.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use todo_cli::ui;

/// Interactive in-memory todo list manager for the terminal.
#[derive(Parser)]
#[command(name = "todo-cli")]
#[command(about = "Manage a todo list for one session via an interactive menu")]
#[command(version)]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();

    // Diagnostics go to stderr so they never interleave with prompts.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match ui::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
