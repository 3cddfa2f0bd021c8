use crate::chunk::{ChunkTag, TagField};
use thiserror::Error;

/// Error type for header decoding failures
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The byte source reported an I/O failure
    #[error("failed to read wav header: {0}")]
    Io(#[from] std::io::Error),
    /// The source ended before a full 44 byte header was read
    #[error("truncated wav header: got {bytes_read} of 44 bytes")]
    Truncated {
        /// Number of bytes available before the end of the source
        bytes_read: usize,
    },
    /// A 4 byte tag does not match its canonical value
    #[error("unexpected {field} tag: expected \"{expected}\", found \"{found}\"")]
    UnexpectedTag {
        /// Position of the offending tag
        field: TagField,
        /// Canonical tag for that position
        expected: ChunkTag,
        /// Tag actually present
        found: ChunkTag,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DecodeError>;
