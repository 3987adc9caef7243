//! Fragment naming: `<stem>.<tag><seq>`, e.g. `photo.jpg.001` or
//! `photo.jpg.b64.001`. The name is the only metadata a fragment carries.

use crate::config::Config;

/// A group of fragments sharing a stem and an encoding flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Series {
    pub stem: String,
    pub encoded: bool,
}

impl Series {
    pub fn new(stem: impl Into<String>, encoded: bool) -> Self {
        Self {
            stem: stem.into(),
            encoded,
        }
    }

    /// Resolve a user-supplied name (a base name or the first fragment's name).
    ///
    /// A trailing `.001` is dropped, then a trailing `.b64` marks the series
    /// as encoded: `f.b64.001` -> (`f`, encoded), `f.001` -> (`f`, raw),
    /// `f` -> (`f`, raw).
    pub fn from_name(name: &str, cfg: &Config) -> Self {
        let first = format!(".{}", seq_suffix(1, cfg));
        let base = name.strip_suffix(first.as_str()).unwrap_or(name);
        let marker = encoding_marker(cfg);
        match base.strip_suffix(marker.as_str()) {
            Some(stem) if !stem.is_empty() => Self::new(stem, true),
            _ => Self::new(base, false),
        }
    }

    /// Name of fragment `seq` (1-based).
    pub fn fragment_name(&self, seq: u32, cfg: &Config) -> String {
        let tag = if self.encoded {
            cfg.encoding_tag.as_str()
        } else {
            ""
        };
        format!("{}.{}{}", self.stem, tag, seq_suffix(seq, cfg))
    }

    /// Default output name for a join: the stem without the encoding marker.
    pub fn output_name(&self) -> &str {
        &self.stem
    }
}

/// Zero-padded sequence number. Numbers wider than `seq_width` are not truncated.
pub fn seq_suffix(seq: u32, cfg: &Config) -> String {
    format!("{:0width$}", seq, width = cfg.seq_width)
}

/// `b64.` -> `.b64`
fn encoding_marker(cfg: &Config) -> String {
    format!(".{}", cfg.encoding_tag.trim_end_matches('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_padded_names() {
        let cfg = Config::default();
        let raw = Series::new("f", false);
        assert_eq!(raw.fragment_name(1, &cfg), "f.001");
        assert_eq!(raw.fragment_name(42, &cfg), "f.042");
        assert_eq!(raw.fragment_name(99, &cfg), "f.099");
        assert_eq!(raw.fragment_name(1000, &cfg), "f.1000");

        let enc = Series::new("data.bin", true);
        assert_eq!(enc.fragment_name(3, &cfg), "data.bin.b64.003");
    }

    #[test]
    fn resolves_first_fragment_name() {
        let cfg = Config::default();
        assert_eq!(Series::from_name("f.001", &cfg), Series::new("f", false));
        assert_eq!(Series::from_name("f", &cfg), Series::new("f", false));
        assert_eq!(
            Series::from_name("a.tar.gz.b64.001", &cfg),
            Series::new("a.tar.gz", true)
        );
        assert_eq!(Series::from_name("a.b64", &cfg), Series::new("a", true));
    }

    #[test]
    fn only_trailing_suffix_is_stripped() {
        let cfg = Config::default();
        assert_eq!(
            Series::from_name("v.001.txt", &cfg),
            Series::new("v.001.txt", false)
        );
        assert_eq!(
            Series::from_name("x.b64.tar", &cfg),
            Series::new("x.b64.tar", false)
        );
        // later fragments are not a valid starting point
        assert_eq!(Series::from_name("f.002", &cfg), Series::new("f.002", false));
    }

    #[test]
    fn bare_marker_is_not_a_stem() {
        let cfg = Config::default();
        assert_eq!(Series::from_name(".b64.001", &cfg), Series::new(".b64", false));
    }

    #[test]
    fn output_name_drops_marker() {
        let cfg = Config::default();
        let s = Series::from_name("report.pdf.b64.001", &cfg);
        assert_eq!(s.output_name(), "report.pdf");
    }

    #[test]
    fn honours_configured_width_and_tag() {
        let cfg = Config {
            seq_width: 5,
            encoding_tag: "enc.".into(),
            ..Config::default()
        };
        let s = Series::new("f", true);
        assert_eq!(s.fragment_name(7, &cfg), "f.enc.00007");
        assert_eq!(Series::from_name("f.enc.00001", &cfg), s);
    }
}
