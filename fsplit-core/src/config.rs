use crate::error::{FsplitError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Bytes per kilobyte of `chunk_kb`.
pub const KB: usize = 1024;
pub const DEFAULT_CHUNK_KB: usize = 20;
/// Highest sequence number the joiner probes for.
pub const DEFAULT_MAX_FRAGMENTS: u32 = 99;
/// Digits in the zero-padded sequence suffix.
pub const DEFAULT_SEQ_WIDTH: usize = 3;
/// Marker inserted before the sequence number of Base64-encoded fragments.
pub const DEFAULT_ENCODING_TAG: &str = "b64.";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub chunk_kb: usize,
    pub max_fragments: u32,
    pub seq_width: usize,
    /// Must end with `.` so that `<base>.<tag><seq>` stays dot-separated.
    pub encoding_tag: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chunk_kb: DEFAULT_CHUNK_KB,
            max_fragments: DEFAULT_MAX_FRAGMENTS,
            seq_width: DEFAULT_SEQ_WIDTH,
            encoding_tag: DEFAULT_ENCODING_TAG.to_string(),
        }
    }
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let cfg: Config =
            toml::from_str(s).map_err(|e| FsplitError::Config(format!("toml decode: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if self.chunk_kb == 0 {
            return Err(FsplitError::Config("chunk_kb must be positive".into()));
        }
        if self.max_fragments == 0 {
            return Err(FsplitError::Config("max_fragments must be positive".into()));
        }
        if self.seq_width == 0 {
            return Err(FsplitError::Config("seq_width must be positive".into()));
        }
        if !self.encoding_tag.ends_with('.') || self.encoding_tag.len() < 2 {
            return Err(FsplitError::Config(format!(
                "encoding_tag must look like \"name.\", got {:?}",
                self.encoding_tag
            )));
        }
        Ok(())
    }

    /// Default chunk size in bytes.
    pub fn chunk_bytes(&self) -> usize {
        self.chunk_kb * KB
    }
}
