use crate::chunk::{read_tag, read_u32, ChunkTag};
use serde::Serialize;

/// Size of the `data` sub-chunk header on the wire.
pub const DATA_LEN: usize = 8;

/// Struct representing the header of the `data` section of a WAV file
///
/// Only the tag and length are decoded, the samples that follow are left
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DataChunk {
    /// `data`
    pub subchunk2_id: ChunkTag,
    /// number of sample bytes following the header
    pub subchunk2_size: u32,
}

impl DataChunk {
    /// Header for `len` bytes of sample data.
    pub fn new(len: u32) -> Self {
        DataChunk {
            subchunk2_id: ChunkTag::Data,
            subchunk2_size: len,
        }
    }

    pub(crate) fn from_bytes(bytes: &[u8; DATA_LEN]) -> Self {
        DataChunk {
            subchunk2_id: ChunkTag::from_bytes(&read_tag(bytes, 0)),
            subchunk2_size: read_u32(bytes, 4),
        }
    }

    pub(crate) fn to_bytes(&self) -> [u8; DATA_LEN] {
        let id = self.subchunk2_id.to_bytes();
        let sz = self.subchunk2_size.to_le_bytes();

        [
            id[0], id[1], id[2], id[3], // data
            sz[0], sz[1], sz[2], sz[3], // chunk size
        ]
    }
}
