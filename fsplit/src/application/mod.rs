pub mod handlers;

use crate::presentation::cli::{Cli, Commands};
use fsplit_core::error::Result;

pub fn run(cli: Cli) -> Result<()> {
    let cfg = handlers::load_config(cli.config.as_deref())?;
    match cli.command {
        Commands::Split {
            file,
            chunk,
            base64,
            dryrun,
        } => handlers::handle_split(&cfg, file, chunk, base64, dryrun),
        Commands::Join {
            file,
            outfile,
            base64_decode,
        } => handlers::handle_join(&cfg, file, outfile, base64_decode),
    }
}
