use std::path::Path;

use fsplit_core::config::{Config, KB};
use fsplit_core::error::{FsplitError, Result};
use fsplit_core::store::FragmentStore;
use fsplit_core::store_factory::{Backend, open_store};
use fsplit_core::{JoinOptions, SplitOptions, join, split};
use tracing::debug;

pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(p) => {
            debug!("loading config from {}", p.display());
            Config::load(p)
        }
        None => Ok(Config::default()),
    }
}

fn cwd_store() -> Result<Box<dyn FragmentStore>> {
    let root = std::env::current_dir()?;
    Ok(open_store(Backend::Fs { root }))
}

pub fn handle_split(
    cfg: &Config,
    file: String,
    chunk_kb: Option<u64>,
    base64: bool,
    dryrun: bool,
) -> Result<()> {
    let kb = match chunk_kb {
        Some(kb) => usize::try_from(kb)
            .map_err(|_| FsplitError::InvalidArgument(format!("chunk size {kb} kb too large")))?,
        None => cfg.chunk_kb,
    };
    let chunk_size = kb
        .checked_mul(KB)
        .ok_or_else(|| FsplitError::InvalidArgument(format!("chunk size {kb} kb too large")))?;

    println!("Splitting file {file} into chunks of {kb} kb");

    let store = cwd_store()?;
    let opts = SplitOptions {
        chunk_size,
        encode: base64,
        dry_run: dryrun,
    };
    let report = split(store.as_ref(), &file, &opts, cfg)?;
    if report.dry_run {
        for f in &report.fragments {
            println!("Dry wrote file: {}", f.name);
        }
    }
    Ok(())
}

pub fn handle_join(
    cfg: &Config,
    file: String,
    outfile: Option<String>,
    base64_decode: bool,
) -> Result<()> {
    let store = cwd_store()?;
    let opts = JoinOptions {
        out_name: outfile.filter(|o| !o.is_empty()),
        decode: base64_decode,
    };
    let report = join(store.as_ref(), &file, &opts, cfg)?;
    debug!(
        "joined {} fragments into {} ({} bytes)",
        report.fragments.len(),
        report.output,
        report.bytes_written
    );
    Ok(())
}
