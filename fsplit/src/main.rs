mod application;

mod presentation {
    pub mod cli;
}

use clap::Parser;
use presentation::cli::Cli;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match application::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, "command failed");
            // reported on stdout, like the progress lines
            println!("{e}");
            ExitCode::FAILURE
        }
    }
}
