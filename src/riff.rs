use crate::chunk::{read_tag, read_u32, ChunkTag};
use serde::Serialize;

/// Size of the RIFF chunk descriptor on the wire.
pub const RIFF_LEN: usize = 12;

/// Struct representing the `RIFF` descriptor at the start of a WAV file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiffChunk {
    /// `RIFF`
    pub chunk_id: ChunkTag,
    /// size of the file minus the 8 bytes of `chunk_id` and `chunk_size`
    pub chunk_size: u32,
    /// `WAVE`
    pub format: ChunkTag,
}

impl RiffChunk {
    /// Descriptor for a canonical header followed by `data_len` bytes of samples.
    pub fn wave(data_len: u32) -> Self {
        RiffChunk {
            chunk_id: ChunkTag::Riff,
            chunk_size: data_len.saturating_add(36),
            format: ChunkTag::Wave,
        }
    }

    pub(crate) fn from_bytes(bytes: &[u8; RIFF_LEN]) -> Self {
        RiffChunk {
            chunk_id: ChunkTag::from_bytes(&read_tag(bytes, 0)),
            chunk_size: read_u32(bytes, 4),
            format: ChunkTag::from_bytes(&read_tag(bytes, 8)),
        }
    }

    pub(crate) fn to_bytes(&self) -> [u8; RIFF_LEN] {
        let id = self.chunk_id.to_bytes();
        let cs = self.chunk_size.to_le_bytes();
        let fm = self.format.to_bytes();

        [
            id[0], id[1], id[2], id[3], // RIFF
            cs[0], cs[1], cs[2], cs[3], // chunk size
            fm[0], fm[1], fm[2], fm[3], // WAVE
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bytes() {
        let bytes: [u8; 12] = [
            0x52, 0x49, 0x46, 0x46, // RIFF
            0x34, 0x00, 0x00, 0x00, // chunk size
            0x57, 0x41, 0x56, 0x45, // WAVE
        ];

        let riff = RiffChunk::from_bytes(&bytes);

        assert_eq!(riff.chunk_id, ChunkTag::Riff);
        assert_eq!(riff.chunk_size, 52);
        assert_eq!(riff.format, ChunkTag::Wave);
        assert_eq!(riff.to_bytes(), bytes);
    }

    #[test]
    fn keeps_foreign_tags_verbatim() {
        let bytes: [u8; 12] = [
            0x52, 0x49, 0x46, 0x58, // RIFX
            0x00, 0x00, 0x00, 0x34, // chunk size
            0x41, 0x56, 0x49, 0x20, // AVI_
        ];

        let riff = RiffChunk::from_bytes(&bytes);

        assert_eq!(riff.chunk_id, ChunkTag::Unknown(*b"RIFX"));
        assert_eq!(riff.chunk_size, 0x3400_0000);
        assert_eq!(riff.format, ChunkTag::Unknown(*b"AVI "));
    }

    #[test]
    fn wave_descriptor_counts_header_bytes() {
        assert_eq!(RiffChunk::wave(176_400).chunk_size, 176_436);
        assert_eq!(RiffChunk::wave(u32::MAX).chunk_size, u32::MAX);
    }
}
