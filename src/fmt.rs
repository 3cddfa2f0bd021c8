use crate::chunk::{read_tag, read_u16, read_u32, ChunkTag};
use core::convert::TryFrom;
use serde::Serialize;

/// Size of the canonical `fmt ` sub-chunk on the wire, tag and size included.
pub const FMT_LEN: usize = 24;

/// Payload size of a PCM `fmt ` sub-chunk.
pub const PCM_FMT_SIZE: u32 = 16;

/// Codec identifier stored in the `audio_format` field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatTag {
    /// Linear PCM
    Pcm,
    /// IEEE floating point
    IeeeFloat,
    /// A-law companded
    ALaw,
    /// Mu-law companded
    MuLaw,
    /// `WAVE_FORMAT_EXTENSIBLE`, actual format lives in the extended fmt chunk
    Extensible,
    /// Any other code
    Unknown(u16),
}

impl From<u16> for FormatTag {
    fn from(code: u16) -> Self {
        match code {
            0x0001 => FormatTag::Pcm,
            0x0003 => FormatTag::IeeeFloat,
            0x0006 => FormatTag::ALaw,
            0x0007 => FormatTag::MuLaw,
            0xfffe => FormatTag::Extensible,
            other => FormatTag::Unknown(other),
        }
    }
}

impl From<FormatTag> for u16 {
    fn from(tag: FormatTag) -> Self {
        match tag {
            FormatTag::Pcm => 0x0001,
            FormatTag::IeeeFloat => 0x0003,
            FormatTag::ALaw => 0x0006,
            FormatTag::MuLaw => 0x0007,
            FormatTag::Extensible => 0xfffe,
            FormatTag::Unknown(code) => code,
        }
    }
}

/// Struct representing the `fmt ` section of a WAV file
///
/// for more information see [`here`]
///
/// [`here`]: http://soundfile.sapp.org/doc/WaveFormat/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FmtChunk {
    /// `fmt `
    pub subchunk1_id: ChunkTag,
    /// size of the rest of the sub-chunk, `16` for PCM
    pub subchunk1_size: u32,
    /// codec code, `1` for PCM
    pub audio_format: u16,
    /// number of audio channels in the sample data, channels are interleaved
    pub num_channels: u16,
    /// sample rate, typical values are `44_100`, `48_000` or `96_000`
    pub sample_rate: u32,
    /// `sample_rate * num_channels * bits_per_sample / 8`
    pub byte_rate: u32,
    /// bytes per frame across all channels
    pub block_align: u16,
    /// bit depth for each sample, typical values are `16` or `24`
    pub bits_per_sample: u16,
}

impl FmtChunk {
    /// Canonical PCM format chunk, `byte_rate` and `block_align` derived from
    /// the other fields.
    ///
    /// Returns `None` when the derived byte rate does not fit in a `u32` or
    /// the block align does not fit in a `u16`.
    ///
    /// ```
    /// use wavhead::FmtChunk;
    ///
    /// let fmt = FmtChunk::pcm(2, 48_000, 24).unwrap();
    ///
    /// assert_eq!(fmt.block_align, 6);
    /// assert_eq!(fmt.byte_rate, 288_000);
    /// assert!(FmtChunk::pcm(u16::MAX, 48_000, 16).is_none());
    /// ```
    pub fn pcm(num_channels: u16, sample_rate: u32, bits_per_sample: u16) -> Option<Self> {
        let frame_bits = num_channels as u64 * bits_per_sample as u64;
        let byte_rate = u32::try_from(sample_rate as u64 * frame_bits / 8).ok()?;
        let block_align = u16::try_from(frame_bits / 8).ok()?;

        Some(FmtChunk {
            subchunk1_id: ChunkTag::Fmt,
            subchunk1_size: PCM_FMT_SIZE,
            audio_format: FormatTag::Pcm.into(),
            num_channels,
            sample_rate,
            byte_rate,
            block_align,
            bits_per_sample,
        })
    }

    /// Codec named by `audio_format`.
    pub fn format_tag(&self) -> FormatTag {
        FormatTag::from(self.audio_format)
    }

    pub(crate) fn from_bytes(bytes: &[u8; FMT_LEN]) -> Self {
        FmtChunk {
            subchunk1_id: ChunkTag::from_bytes(&read_tag(bytes, 0)),
            subchunk1_size: read_u32(bytes, 4),
            audio_format: read_u16(bytes, 8),
            num_channels: read_u16(bytes, 10),
            sample_rate: read_u32(bytes, 12),
            byte_rate: read_u32(bytes, 16),
            block_align: read_u16(bytes, 20),
            bits_per_sample: read_u16(bytes, 22),
        }
    }

    pub(crate) fn to_bytes(&self) -> [u8; FMT_LEN] {
        let id = self.subchunk1_id.to_bytes();
        let cs = self.subchunk1_size.to_le_bytes();
        let af = self.audio_format.to_le_bytes();
        let nc = self.num_channels.to_le_bytes();
        let sr = self.sample_rate.to_le_bytes();
        let br = self.byte_rate.to_le_bytes();
        let ba = self.block_align.to_le_bytes();
        let bd = self.bits_per_sample.to_le_bytes();

        [
            id[0], id[1], id[2], id[3], // fmt_
            cs[0], cs[1], cs[2], cs[3], // chunk size
            af[0], af[1], // audio format
            nc[0], nc[1], // num channels
            sr[0], sr[1], sr[2], sr[3], // sample rate
            br[0], br[1], br[2], br[3], // byte rate
            ba[0], ba[1], // block align
            bd[0], bd[1], // bits per sample
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bytes_16_bit_stereo() {
        let bytes: [u8; 24] = [
            0x66, 0x6d, 0x74, 0x20, // fmt_
            0x10, 0x00, 0x00, 0x00, // chunk size
            0x01, 0x00, // audio format
            0x02, 0x00, // num channels
            0x22, 0x56, 0x00, 0x00, // sample rate
            0x88, 0x58, 0x01, 0x00, // byte rate
            0x04, 0x00, // block align
            0x10, 0x00, // bits per sample
        ];

        let fmt = FmtChunk::from_bytes(&bytes);

        assert_eq!(Some(fmt), FmtChunk::pcm(2, 22_050, 16));
        assert_eq!(fmt.byte_rate, 88_200);
        assert_eq!(fmt.to_bytes(), bytes);
    }

    #[test]
    fn from_bytes_keeps_non_pcm_codes() {
        let bytes: [u8; 24] = [
            0x66, 0x6d, 0x74, 0x20, // fmt_
            0x10, 0x00, 0x00, 0x00, // chunk size
            0x03, 0x00, // audio format
            0x01, 0x00, // num channels
            0x80, 0xbb, 0x00, 0x00, // sample rate
            0x00, 0xee, 0x02, 0x00, // byte rate
            0x04, 0x00, // block align
            0x20, 0x00, // bits per sample
        ];

        let fmt = FmtChunk::from_bytes(&bytes);

        assert_eq!(fmt.format_tag(), FormatTag::IeeeFloat);
        assert_eq!(fmt.sample_rate, 48_000);
        assert_eq!(fmt.bits_per_sample, 32);
    }

    #[test]
    fn format_tag_codes() {
        assert_eq!(FormatTag::from(1), FormatTag::Pcm);
        assert_eq!(FormatTag::from(0xfffe), FormatTag::Extensible);
        assert_eq!(FormatTag::from(0x55), FormatTag::Unknown(0x55));
        assert_eq!(u16::from(FormatTag::MuLaw), 7);
    }

    #[test]
    fn pcm_derives_rates() {
        let fmt = FmtChunk::pcm(1, 44_100, 16).unwrap();

        assert_eq!(fmt.byte_rate, 88_200);
        assert_eq!(fmt.block_align, 2);
        assert_eq!(fmt.subchunk1_size, 16);
        assert_eq!(fmt.audio_format, 1);
    }

    #[test]
    fn pcm_rejects_rates_that_do_not_fit() {
        // 65535 channels of 16 bit: block align 131_070
        assert_eq!(FmtChunk::pcm(u16::MAX, 48_000, 16), None);
        // block align 65_535 fits, byte rate 65_535 * 65_538 does not
        assert_eq!(FmtChunk::pcm(u16::MAX, 65_538, 8), None);

        // 65_535 * 65_537 == u32::MAX
        let widest = FmtChunk::pcm(u16::MAX, 65_537, 8).unwrap();
        assert_eq!(widest.block_align, u16::MAX);
        assert_eq!(widest.byte_rate, u32::MAX);
    }
}
