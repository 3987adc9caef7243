use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Split a file into numbered parts and join them back", long_about = None)]
pub struct Cli {
    /// TOML file overriding chunk size, join limit and fragment naming
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split file into parts
    Split {
        /// File to split
        #[arg(short, long = "file")]
        file: String,

        /// Size of split files in kb (default 20)
        #[arg(short, long = "chunk", value_parser = clap::value_parser!(u64).range(1..))]
        chunk: Option<u64>,

        /// Base64 encode split files
        #[arg(short, long = "base64")]
        base64: bool,

        /// Perform a dry run without creating any real files
        #[arg(short, long = "dryrun")]
        dryrun: bool,
    },

    /// Join file parts to one file (at most 99 parts by default)
    Join {
        /// First file part in series
        #[arg(short, long = "file")]
        file: String,

        /// Override filename of joined file
        #[arg(short, long = "outfile")]
        outfile: Option<String>,

        /// Base64 decode joined file
        #[arg(short = 'b', long = "base64Decode")]
        base64_decode: bool,
    },
}
