//! Decoder for the canonical 44 byte WAV header.
//!
//! Only the minimal layout is understood: a `RIFF`/`WAVE` descriptor, a 16
//! byte PCM `fmt ` chunk and the `data` chunk header, in that order. Every
//! integer is decoded little-endian by byte position, every tag is checked
//! byte for byte.
//!
//! ```rust
//! use std::io::Cursor;
//! use wavhead::{decode, DecodeError, WavHeader};
//!
//! fn main() -> Result<(), DecodeError> {
//! #   let bytes = WavHeader::pcm(1, 48_000, 16, 0).unwrap().to_bytes();
//!     // any `std::io::Read` works, e.g. a `std::fs::File`
//!     let header = decode(Cursor::new(&bytes[..]))?;
//!
//!     println!(
//!         "sample rate: {}, channels: {}, bit depth: {}",
//!         header.sample_rate(),
//!         header.num_channels(),
//!         header.bits_per_sample()
//!     );
//!
//!     for problem in header.check() {
//!         println!("{}", problem);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

mod check;
mod chunk;
mod data;
mod error;
mod fmt;
mod header;
mod riff;

pub use check::Inconsistency;
pub use chunk::{ChunkTag, TagField};
pub use data::DataChunk;
pub use error::{DecodeError, Result};
pub use fmt::{FmtChunk, FormatTag};
pub use header::{decode, WavHeader, HEADER_LEN};
pub use riff::RiffChunk;
