use crate::chunk::{ChunkTag, TagField};
use crate::data::{DataChunk, DATA_LEN};
use crate::error::{DecodeError, Result};
use crate::fmt::{FmtChunk, FMT_LEN};
use crate::riff::{RiffChunk, RIFF_LEN};
use serde::Serialize;
use std::io::{ErrorKind, Read};
use std::time::Duration;

/// Size of the canonical header: RIFF descriptor, `fmt ` and `data` sub-chunk headers.
pub const HEADER_LEN: usize = RIFF_LEN + FMT_LEN + DATA_LEN;

/// Decoded 44 byte WAV header
///
/// [`decode`] and [`WavHeader::from_bytes`] only return headers whose four
/// tags are valid. [`WavHeader::new`] and [`WavHeader::pcm`] skip that
/// validation, `new` accepts any tags including [`ChunkTag::Unknown`].
/// Fields cannot be changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WavHeader {
    #[serde(flatten)]
    riff: RiffChunk,
    #[serde(flatten)]
    fmt: FmtChunk,
    #[serde(flatten)]
    data: DataChunk,
}

/// Decode a header from the first 44 bytes of `source`.
///
/// Reads at most [`HEADER_LEN`] bytes and never seeks, whatever the size
/// fields claim. The source stays owned by the caller.
///
/// ```
/// use std::io::Cursor;
/// use wavhead::{decode, WavHeader};
///
/// let bytes = WavHeader::pcm(2, 48_000, 16, 0).unwrap().to_bytes();
/// let header = decode(Cursor::new(&bytes[..])).unwrap();
///
/// assert_eq!(header.num_channels(), 2);
/// assert_eq!(header.sample_rate(), 48_000);
/// ```
pub fn decode<R: Read>(mut source: R) -> Result<WavHeader> {
    let mut bytes = [0u8; HEADER_LEN];
    let mut bytes_read = 0;

    while bytes_read < HEADER_LEN {
        match source.read(&mut bytes[bytes_read..]) {
            Ok(0) => return Err(DecodeError::Truncated { bytes_read }),
            Ok(n) => bytes_read += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(DecodeError::Io(e)),
        }
    }

    WavHeader::parse(&bytes)
}

fn expect_tag(field: TagField, found: ChunkTag) -> Result<()> {
    let expected = field.expected();

    if found != expected {
        return Err(DecodeError::UnexpectedTag {
            field,
            expected,
            found,
        });
    }

    Ok(())
}

impl WavHeader {
    /// Assemble a header from its chunks, no validation is done.
    pub fn new(riff: RiffChunk, fmt: FmtChunk, data: DataChunk) -> Self {
        WavHeader { riff, fmt, data }
    }

    /// Canonical PCM header for `data_len` bytes of samples.
    ///
    /// `None` under the same conditions as [`FmtChunk::pcm`].
    ///
    /// ```
    /// use wavhead::WavHeader;
    ///
    /// let header = WavHeader::pcm(1, 44_100, 16, 176_400).unwrap();
    ///
    /// assert_eq!(header.chunk_size(), 176_436);
    /// assert_eq!(header.byte_rate(), 88_200);
    /// assert!(header.check().is_empty());
    /// ```
    pub fn pcm(
        num_channels: u16,
        sample_rate: u32,
        bits_per_sample: u16,
        data_len: u32,
    ) -> Option<Self> {
        Some(WavHeader {
            riff: RiffChunk::wave(data_len),
            fmt: FmtChunk::pcm(num_channels, sample_rate, bits_per_sample)?,
            data: DataChunk::new(data_len),
        })
    }

    /// Decode a header from an in-memory buffer, bytes after the first 44 are ignored.
    ///
    /// ```
    /// use wavhead::{DecodeError, WavHeader};
    ///
    /// let err = WavHeader::from_bytes(b"RIFF").unwrap_err();
    ///
    /// assert!(matches!(err, DecodeError::Truncated { bytes_read: 4 }));
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        decode(bytes)
    }

    fn parse(bytes: &[u8; HEADER_LEN]) -> Result<Self> {
        let mut riff = [0u8; RIFF_LEN];
        let mut fmt = [0u8; FMT_LEN];
        let mut data = [0u8; DATA_LEN];

        riff.copy_from_slice(&bytes[..RIFF_LEN]);
        fmt.copy_from_slice(&bytes[RIFF_LEN..RIFF_LEN + FMT_LEN]);
        data.copy_from_slice(&bytes[RIFF_LEN + FMT_LEN..]);

        let header = WavHeader {
            riff: RiffChunk::from_bytes(&riff),
            fmt: FmtChunk::from_bytes(&fmt),
            data: DataChunk::from_bytes(&data),
        };

        expect_tag(TagField::ChunkId, header.riff.chunk_id)?;
        expect_tag(TagField::Format, header.riff.format)?;
        expect_tag(TagField::Subchunk1Id, header.fmt.subchunk1_id)?;
        expect_tag(TagField::Subchunk2Id, header.data.subchunk2_id)?;

        Ok(header)
    }

    /// Encode the header into its 44 wire bytes.
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut bytes = [0u8; HEADER_LEN];

        bytes[..RIFF_LEN].copy_from_slice(&self.riff.to_bytes());
        bytes[RIFF_LEN..RIFF_LEN + FMT_LEN].copy_from_slice(&self.fmt.to_bytes());
        bytes[RIFF_LEN + FMT_LEN..].copy_from_slice(&self.data.to_bytes());

        bytes
    }

    /// RIFF descriptor
    pub fn riff(&self) -> &RiffChunk {
        &self.riff
    }

    /// `fmt ` sub-chunk
    pub fn fmt(&self) -> &FmtChunk {
        &self.fmt
    }

    /// `data` sub-chunk header
    pub fn data(&self) -> &DataChunk {
        &self.data
    }

    /// `RIFF` tag
    pub fn chunk_id(&self) -> ChunkTag {
        self.riff.chunk_id
    }

    /// File size minus 8
    pub fn chunk_size(&self) -> u32 {
        self.riff.chunk_size
    }

    /// `WAVE` tag
    pub fn format(&self) -> ChunkTag {
        self.riff.format
    }

    /// `fmt ` tag
    pub fn subchunk1_id(&self) -> ChunkTag {
        self.fmt.subchunk1_id
    }

    /// Size of the `fmt ` payload
    pub fn subchunk1_size(&self) -> u32 {
        self.fmt.subchunk1_size
    }

    /// Raw codec code, see [`FmtChunk::format_tag`]
    pub fn audio_format(&self) -> u16 {
        self.fmt.audio_format
    }

    /// Interleaved channel count
    pub fn num_channels(&self) -> u16 {
        self.fmt.num_channels
    }

    /// Frames per second
    pub fn sample_rate(&self) -> u32 {
        self.fmt.sample_rate
    }

    /// Declared bytes per second
    pub fn byte_rate(&self) -> u32 {
        self.fmt.byte_rate
    }

    /// Declared bytes per frame
    pub fn block_align(&self) -> u16 {
        self.fmt.block_align
    }

    /// Bit depth of one sample
    pub fn bits_per_sample(&self) -> u16 {
        self.fmt.bits_per_sample
    }

    /// `data` tag
    pub fn subchunk2_id(&self) -> ChunkTag {
        self.data.subchunk2_id
    }

    /// Byte length of the sample data
    pub fn subchunk2_size(&self) -> u32 {
        self.data.subchunk2_size
    }

    /// Number of whole sample frames in the data chunk, `None` when `block_align` is zero.
    pub fn num_frames(&self) -> Option<u32> {
        match self.fmt.block_align {
            0 => None,
            align => Some(self.data.subchunk2_size / align as u32),
        }
    }

    /// Playback length of the data chunk.
    pub fn duration(&self) -> Option<Duration> {
        let frames = self.num_frames()? as u64;
        let rate = self.fmt.sample_rate as u64;

        if rate == 0 {
            return None;
        }

        let secs = Duration::from_secs(frames / rate);
        let nanos = Duration::from_nanos((frames % rate) * 1_000_000_000 / rate);

        Some(secs + nanos)
    }
}
