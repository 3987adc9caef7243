use crate::codec::codec_for;
use crate::config::{Config, KB};
use crate::domain::{FragmentInfo, SplitReport};
use crate::error::{FsplitError, Result};
use crate::naming::Series;
use crate::store::FragmentStore;
use tracing::{debug, info, warn};

#[derive(Clone, Debug)]
pub struct SplitOptions {
    /// Fragment size in bytes. Must be positive.
    pub chunk_size: usize,
    /// Base64-encode the whole source before cutting.
    pub encode: bool,
    /// Compute fragment names without writing anything.
    pub dry_run: bool,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl SplitOptions {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            chunk_size: cfg.chunk_bytes(),
            encode: false,
            dry_run: false,
        }
    }

    pub fn with_chunk_kb(kb: usize) -> Self {
        Self {
            chunk_size: kb.saturating_mul(KB),
            ..Self::default()
        }
    }
}

/// Cut `source` into `<source>.<tag><seq>` fragments.
///
/// Nothing is written when the source is missing or the chunk size is zero.
/// A write failure part way through leaves the earlier fragments in place.
pub fn split(
    store: &dyn FragmentStore,
    source: &str,
    opts: &SplitOptions,
    cfg: &Config,
) -> Result<SplitReport> {
    if opts.chunk_size == 0 {
        return Err(FsplitError::InvalidArgument(
            "chunk size must be positive".into(),
        ));
    }
    if !store.exists(source)? {
        return Err(FsplitError::SourceNotFound(source.to_string()));
    }

    let raw = store.read(source)?;
    let payload = codec_for(opts.encode).encode(&raw);
    let series = Series::new(source, opts.encode);

    let count = payload.len().div_ceil(opts.chunk_size);
    info!(
        source = source,
        source_len = raw.len(),
        payload_len = payload.len(),
        chunk_size = opts.chunk_size,
        fragments = count,
        "splitting"
    );
    if count > cfg.max_fragments as usize {
        warn!(
            "{} fragments exceeds the join limit of {}; join will stop at {}",
            count,
            cfg.max_fragments,
            series.fragment_name(cfg.max_fragments, cfg)
        );
    }

    let mut fragments = Vec::with_capacity(count);
    for (i, chunk) in payload.chunks(opts.chunk_size).enumerate() {
        let seq = u32::try_from(i + 1)
            .map_err(|_| FsplitError::InvalidArgument("too many fragments".into()))?;
        let name = series.fragment_name(seq, cfg);
        if opts.dry_run {
            debug!("dry run, skipping {}", name);
        } else {
            store.write(&name, chunk)?;
        }
        fragments.push(FragmentInfo {
            seq,
            name,
            len: chunk.len() as u64,
        });
    }

    Ok(SplitReport {
        source: source.to_string(),
        source_len: raw.len() as u64,
        payload_len: payload.len() as u64,
        chunk_size: opts.chunk_size,
        encoded: opts.encode,
        dry_run: opts.dry_run,
        fragments,
    })
}
