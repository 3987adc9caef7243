use super::{CodecId, TextCodec};
use crate::error::Result;

pub struct Raw;

impl TextCodec for Raw {
    fn id(&self) -> CodecId {
        CodecId::Raw
    }

    fn encode(&self, src: &[u8]) -> Vec<u8> {
        src.to_vec()
    }

    fn decode(&self, src: &[u8]) -> Result<Vec<u8>> {
        Ok(src.to_vec())
    }
}
