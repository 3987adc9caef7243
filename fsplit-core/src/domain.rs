// fsplit_core/src/domain.rs
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FragmentInfo {
    pub seq: u32,
    pub name: String,
    pub len: u64,
}

#[derive(Clone, Debug)]
pub struct SplitReport {
    pub source: String,
    pub source_len: u64,
    /// Length after encoding; equals `source_len` for raw splits.
    pub payload_len: u64,
    pub chunk_size: usize,
    pub encoded: bool,
    pub dry_run: bool,
    pub fragments: Vec<FragmentInfo>,
}

#[derive(Clone, Debug)]
pub struct JoinReport {
    pub stem: String,
    pub output: String,
    pub fragments: Vec<FragmentInfo>,
    pub bytes_written: u64,
    pub decoded: bool,
    /// Fragments past the probe limit exist and were left out.
    pub hit_cap: bool,
}
