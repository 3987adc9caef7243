use crate::codec::codec_for;
use crate::config::Config;
use crate::domain::{FragmentInfo, JoinReport};
use crate::error::{FsplitError, Result};
use crate::naming::Series;
use crate::store::FragmentStore;
use tracing::{debug, info, warn};

#[derive(Clone, Debug, Default)]
pub struct JoinOptions {
    /// Output name; defaults to the series stem.
    pub out_name: Option<String>,
    /// Base64-decode the joined payload before writing.
    pub decode: bool,
}

/// Names of the contiguous fragments `1..=max_fragments` present in `store`.
/// Probing stops at the first gap.
pub fn discover_fragments(
    store: &dyn FragmentStore,
    series: &Series,
    cfg: &Config,
) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for seq in 1..=cfg.max_fragments {
        let name = series.fragment_name(seq, cfg);
        if !store.exists(&name)? {
            debug!("probe stopped at {}", name);
            break;
        }
        names.push(name);
    }
    Ok(names)
}

/// Reassemble the series that `name` points at (`f`, `f.001` or `f.b64.001`).
///
/// The output is written only after every fragment was read and, with
/// `decode`, successfully decoded. An existing output file is overwritten.
pub fn join(
    store: &dyn FragmentStore,
    name: &str,
    opts: &JoinOptions,
    cfg: &Config,
) -> Result<JoinReport> {
    let series = Series::from_name(name, cfg);
    let first = series.fragment_name(1, cfg);
    if !store.exists(&first)? {
        return Err(FsplitError::SourceNotFound(first));
    }

    let names = discover_fragments(store, &series, cfg)?;

    let past_cap = series.fragment_name(cfg.max_fragments.saturating_add(1), cfg);
    let hit_cap = names.len() == cfg.max_fragments as usize && store.exists(&past_cap)?;
    if hit_cap {
        warn!(
            "{} exists but only {} fragments are joined; output is truncated",
            past_cap, cfg.max_fragments
        );
    }

    let mut joined = Vec::new();
    let mut fragments = Vec::with_capacity(names.len());
    for (seq, frag) in (1u32..).zip(names) {
        let data = store.read(&frag)?;
        joined.extend_from_slice(&data);
        fragments.push(FragmentInfo {
            seq,
            name: frag,
            len: data.len() as u64,
        });
    }

    if series.encoded && !opts.decode {
        debug!("{} looks encoded but decode was not requested", first);
    }
    let out = if opts.decode {
        codec_for(true).decode(&joined)?
    } else {
        joined
    };

    let output = opts
        .out_name
        .clone()
        .unwrap_or_else(|| series.output_name().to_string());
    store.write(&output, &out)?;
    info!(
        output = output.as_str(),
        fragments = fragments.len(),
        bytes = out.len(),
        "joined"
    );

    Ok(JoinReport {
        stem: series.stem,
        output,
        fragments,
        bytes_written: out.len() as u64,
        decoded: opts.decode,
        hit_cap,
    })
}
