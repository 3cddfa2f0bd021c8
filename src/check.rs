use crate::fmt::{FormatTag, PCM_FMT_SIZE};
use crate::header::WavHeader;
use thiserror::Error;

/// A field that disagrees with the rest of an otherwise decodable header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Inconsistency {
    /// `audio_format` is not PCM
    #[error("audio format {audio_format} is not PCM")]
    NotPcm {
        /// Declared codec code
        audio_format: u16,
    },
    /// `subchunk1_size` is not the canonical 16
    #[error("fmt chunk size is {size}, expected 16")]
    FmtSize {
        /// Declared size
        size: u32,
    },
    /// `num_channels` is zero
    #[error("channel count is 0")]
    NoChannels,
    /// `byte_rate` does not follow from rate, channels and bit depth
    #[error("byte rate is {declared}, expected {expected}")]
    ByteRate {
        /// Declared byte rate
        declared: u32,
        /// `sample_rate * num_channels * bits_per_sample / 8`
        expected: u64,
    },
    /// `block_align` does not follow from channels and bit depth
    #[error("block align is {declared}, expected {expected}")]
    BlockAlign {
        /// Declared block align
        declared: u16,
        /// `num_channels * bits_per_sample / 8`
        expected: u32,
    },
    /// The data chunk does not hold a whole number of frames
    #[error("data size {data_size} is not a multiple of block align {block_align}")]
    PartialFrame {
        /// Declared data size
        data_size: u32,
        /// Declared block align
        block_align: u16,
    },
    /// `chunk_size` does not cover exactly the header and the data
    #[error("riff chunk size is {declared}, expected {expected}")]
    ChunkSize {
        /// Declared RIFF chunk size
        declared: u32,
        /// `36 + subchunk2_size`
        expected: u32,
    },
}

impl WavHeader {
    /// Compare the numeric fields against each other.
    ///
    /// Decoding only validates tags, a header whose rates or sizes disagree
    /// still decodes. An empty result means the header is canonical PCM.
    ///
    /// ```
    /// use wavhead::{FmtChunk, Inconsistency, WavHeader};
    /// use wavhead::{DataChunk, RiffChunk};
    ///
    /// let mut fmt = FmtChunk::pcm(2, 44_100, 16).unwrap();
    /// fmt.byte_rate = 44_100;
    /// let header = WavHeader::new(RiffChunk::wave(400), fmt, DataChunk::new(400));
    ///
    /// assert_eq!(
    ///     header.check(),
    ///     vec![Inconsistency::ByteRate { declared: 44_100, expected: 176_400 }]
    /// );
    /// ```
    pub fn check(&self) -> Vec<Inconsistency> {
        let mut found = vec![];
        let fmt = self.fmt();

        if fmt.format_tag() != FormatTag::Pcm {
            found.push(Inconsistency::NotPcm {
                audio_format: fmt.audio_format,
            });
        }

        if fmt.subchunk1_size != PCM_FMT_SIZE {
            found.push(Inconsistency::FmtSize {
                size: fmt.subchunk1_size,
            });
        }

        if fmt.num_channels == 0 {
            found.push(Inconsistency::NoChannels);
        }

        let frame_bits = fmt.num_channels as u64 * fmt.bits_per_sample as u64;

        let byte_rate = fmt.sample_rate as u64 * frame_bits / 8;
        if fmt.byte_rate as u64 != byte_rate {
            found.push(Inconsistency::ByteRate {
                declared: fmt.byte_rate,
                expected: byte_rate,
            });
        }

        // u16 * u16 / 8 always fits in u32
        let block_align = (frame_bits / 8) as u32;
        if fmt.block_align as u32 != block_align {
            found.push(Inconsistency::BlockAlign {
                declared: fmt.block_align,
                expected: block_align,
            });
        }

        let data_size = self.subchunk2_size();
        if fmt.block_align > 0 && data_size % fmt.block_align as u32 != 0 {
            found.push(Inconsistency::PartialFrame {
                data_size,
                block_align: fmt.block_align,
            });
        }

        let chunk_size = data_size.saturating_add(36);
        if self.chunk_size() != chunk_size {
            found.push(Inconsistency::ChunkSize {
                declared: self.chunk_size(),
                expected: chunk_size,
            });
        }

        found
    }
}
