use crate::error::Result;

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CodecId {
    Raw = 0,
    Base64 = 1,
}

/// Reversible byte transform applied to a whole payload before splitting
/// and after joining.
pub trait TextCodec: Send + Sync {
    fn id(&self) -> CodecId;
    fn encode(&self, src: &[u8]) -> Vec<u8>;
    fn decode(&self, src: &[u8]) -> Result<Vec<u8>>;
}

pub fn codec_for(encoded: bool) -> Box<dyn TextCodec> {
    if encoded {
        Box::new(b64::Base64Codec)
    } else {
        Box::new(raw::Raw)
    }
}

pub mod b64;
pub mod raw;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_codec_by_flag() {
        assert_eq!(codec_for(false).id(), CodecId::Raw);
        assert_eq!(codec_for(true).id(), CodecId::Base64);
    }
}
