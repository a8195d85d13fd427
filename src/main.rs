use anyhow::Result;

use review_category_ranking::cli::Command;
use review_category_ranking::{handle_analyze, handle_fetch, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Fetch => handle_fetch(),
        Command::Analyze { smoothed } => handle_analyze(*smoothed),
    }
}
