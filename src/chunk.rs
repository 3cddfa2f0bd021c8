use core::fmt;
use serde::{Serialize, Serializer};

/// RIFF chunks are tagged with 4 byte identifiers.
///
/// Tags are raw bytes, not strings: two tags are equal only when all four
/// bytes match.
#[derive(Debug, Clone, Copy)]
pub enum ChunkTag {
    /// Root level "chunk"
    Riff,
    /// File identifier, located right after the RIFF tag and chunk size
    Wave,
    /// Mandatory chunk for WAV files, contains data such as the sample rate, bit depth, and number of channels.
    Fmt,
    /// Mandatory chunk for WAV files, precedes the (interleaved) samples.
    Data,
    /// Any other 4 byte sequence.
    Unknown([u8; 4]),
}

impl ChunkTag {
    /// Classify 4 raw bytes.
    pub fn from_bytes(bytes: &[u8; 4]) -> Self {
        match bytes {
            [b'R', b'I', b'F', b'F'] => ChunkTag::Riff,
            [b'W', b'A', b'V', b'E'] => ChunkTag::Wave,
            [b'f', b'm', b't', b' '] => ChunkTag::Fmt,
            [b'd', b'a', b't', b'a'] => ChunkTag::Data,
            _ => ChunkTag::Unknown(*bytes),
        }
    }

    /// The 4 bytes as they appear on the wire.
    pub fn to_bytes(self) -> [u8; 4] {
        match self {
            ChunkTag::Riff => *b"RIFF",
            ChunkTag::Wave => *b"WAVE",
            ChunkTag::Fmt => *b"fmt ",
            ChunkTag::Data => *b"data",
            ChunkTag::Unknown(bytes) => bytes,
        }
    }
}

impl PartialEq for ChunkTag {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for ChunkTag {}

impl fmt::Display for ChunkTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.to_bytes().iter() {
            write!(f, "{}", core::ascii::escape_default(*byte))?;
        }
        Ok(())
    }
}

impl Serialize for ChunkTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The four tag positions of the canonical header.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TagField {
    /// `RIFF` at offset 0
    ChunkId,
    /// `WAVE` at offset 8
    Format,
    /// `fmt ` at offset 12
    Subchunk1Id,
    /// `data` at offset 36
    Subchunk2Id,
}

impl TagField {
    /// All tag fields in wire order.
    pub const ALL: [TagField; 4] = [
        TagField::ChunkId,
        TagField::Format,
        TagField::Subchunk1Id,
        TagField::Subchunk2Id,
    ];

    /// The tag a canonical header carries in this position.
    pub fn expected(self) -> ChunkTag {
        match self {
            TagField::ChunkId => ChunkTag::Riff,
            TagField::Format => ChunkTag::Wave,
            TagField::Subchunk1Id => ChunkTag::Fmt,
            TagField::Subchunk2Id => ChunkTag::Data,
        }
    }

    /// Absolute byte offset of the tag within the 44 byte header.
    pub fn offset(self) -> usize {
        match self {
            TagField::ChunkId => 0,
            TagField::Format => 8,
            TagField::Subchunk1Id => 12,
            TagField::Subchunk2Id => 36,
        }
    }

    /// Conventional field label, e.g. `SubChunk1ID`.
    pub fn label(self) -> &'static str {
        match self {
            TagField::ChunkId => "ChunkID",
            TagField::Format => "Format",
            TagField::Subchunk1Id => "SubChunk1ID",
            TagField::Subchunk2Id => "SubChunk2ID",
        }
    }
}

impl fmt::Display for TagField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Offsets passed to these readers are constants of the fixed layout, always
// in range for the buffers they are used on.

pub(crate) fn read_tag(bytes: &[u8], offset: usize) -> [u8; 4] {
    [
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ]
}

pub(crate) fn read_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

pub(crate) fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes(read_tag(bytes, offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_classify_known_tags() {
        assert_eq!(ChunkTag::from_bytes(b"RIFF"), ChunkTag::Riff);
        assert_eq!(ChunkTag::from_bytes(b"WAVE"), ChunkTag::Wave);
        assert_eq!(ChunkTag::from_bytes(b"fmt "), ChunkTag::Fmt);
        assert_eq!(ChunkTag::from_bytes(b"data"), ChunkTag::Data);
    }

    #[test]
    fn should_not_match_loosely() {
        // no trailing space, and case matters
        assert_eq!(ChunkTag::from_bytes(b"fmt\0"), ChunkTag::Unknown(*b"fmt\0"));
        assert_eq!(ChunkTag::from_bytes(b"riff"), ChunkTag::Unknown(*b"riff"));
        assert_eq!(ChunkTag::from_bytes(b"LIST").to_bytes(), *b"LIST");
        assert_eq!(ChunkTag::Unknown(*b"data"), ChunkTag::Data);
    }

    #[test]
    fn should_escape_non_printable_bytes() {
        assert_eq!(ChunkTag::Fmt.to_string(), "fmt ");
        assert_eq!(
            ChunkTag::Unknown([0x89, b'P', b'N', b'G']).to_string(),
            "\\x89PNG"
        );
    }

    #[test]
    fn tag_offsets_point_at_expected_tags() {
        let bytes: [u8; 44] = [
            0x52, 0x49, 0x46, 0x46, // RIFF
            0x24, 0x00, 0x00, 0x00, // chunk size
            0x57, 0x41, 0x56, 0x45, // WAVE
            0x66, 0x6d, 0x74, 0x20, // fmt_
            0x10, 0x00, 0x00, 0x00, // chunk size
            0x01, 0x00, // audio format
            0x01, 0x00, // num channels
            0x44, 0xac, 0x00, 0x00, // sample rate
            0x88, 0x58, 0x01, 0x00, // byte rate
            0x02, 0x00, // block align
            0x10, 0x00, // bits per sample
            0x64, 0x61, 0x74, 0x61, // data
            0x00, 0x00, 0x00, 0x00, // chunk size
        ];

        for field in TagField::ALL.iter() {
            let tag = read_tag(&bytes, field.offset());
            assert_eq!(ChunkTag::from_bytes(&tag), field.expected());
        }
    }

    #[test]
    fn should_read_little_endian() {
        let bytes = [0x44, 0xac, 0x00, 0x00, 0x02, 0x01];

        assert_eq!(read_u32(&bytes, 0), 44_100);
        assert_ne!(read_u32(&bytes, 0), 1_152_073_728);
        assert_eq!(read_u16(&bytes, 4), 0x0102);
    }
}
