use std::io;
use std::process::ExitCode;

use campus_records::cli::{self, Cli, CliError};
use campus_records::logging::init_tracing;
use campus_records::Campus;
use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: &Cli) -> Result<(), CliError> {
    let config = cli.global.config()?;
    if let Err(e) = init_tracing(config.debug) {
        eprintln!("warning: logging unavailable: {}", e);
    }

    let campus = Campus::open(&config)?;
    let stdout = io::stdout();
    cli::run(&cli.command, &campus, &mut stdout.lock())
}
