//! Error types for Huffman compression and decompression.

use thiserror::Error;

/// Error variants for codec operations.
///
/// The container format carries no redundancy or checksums, so none of
/// these are recoverable; callers should treat any of them as "this input
/// could not be processed".
#[derive(Debug, Error)]
pub enum Error {
    /// The container does not start with the expected format tag.
    #[error("malformed header: unexpected format tag {0:#010x}")]
    MalformedHeader(u32),

    /// The serialized tree is structurally invalid.
    #[error("corrupt tree header: {0}")]
    CorruptHeader(&'static str),

    /// The bit source ran out where the format requires more data.
    #[error("truncated stream while reading {0}")]
    TruncatedStream(&'static str),

    /// An I/O error occurred in the stream wrappers.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for codec operations.
pub type Result<T> = std::result::Result<T, Error>;
