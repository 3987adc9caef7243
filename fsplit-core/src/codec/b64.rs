use super::{CodecId, TextCodec};
use crate::error::{FsplitError, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Standard alphabet, `=` padded.
pub struct Base64Codec;

impl TextCodec for Base64Codec {
    fn id(&self) -> CodecId {
        CodecId::Base64
    }

    fn encode(&self, src: &[u8]) -> Vec<u8> {
        STANDARD.encode(src).into_bytes()
    }

    fn decode(&self, src: &[u8]) -> Result<Vec<u8>> {
        // Line breaks and stray blanks are tolerated; everything else must be alphabet.
        let compact: Vec<u8> = src
            .iter()
            .copied()
            .filter(|b| !b.is_ascii_whitespace())
            .collect();
        STANDARD
            .decode(&compact)
            .map_err(|e| FsplitError::MalformedEncoding(format!("base64 decode: {e}")))
    }
}
