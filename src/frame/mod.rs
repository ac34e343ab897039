//! One-shot framed compression.
//!
//! A frame packages a buffer with enough metadata to be decompressed later
//! with no external context: a 4-byte little-endian original-length header
//! followed by one raw LZ4 block.
//!
//! ```text
//! offset 0        4
//!        ┌────────┬──────────────────────────┐
//!        │ len LE │ compressed payload …     │
//!        └────────┴──────────────────────────┘
//! ```
//!
//! Every call is a pure single-shot transformation; no state is carried
//! between calls and frames are never mutated once built.
//!
//! ```
//! let frame = lz4pack::compress(b"hello world");
//! assert_eq!(&frame[..4], &11u32.to_le_bytes());
//! assert_eq!(lz4pack::decompress(&frame).unwrap(), b"hello world");
//! ```

pub mod compress;
pub mod decompress;
pub mod types;

pub use compress::compress_with;
pub use decompress::decompress;
pub use types::{CompressMode, FrameError, HDR_SIZE, MAX_CONTENT_LEN};

/// Compress `src` into a frame with the fast default strategy.
pub fn compress(src: &[u8]) -> Vec<u8> {
    compress_with(src, CompressMode::Fast)
}

/// Compress `src` into a frame with the high-ratio strategy.
pub fn compress_hc(src: &[u8]) -> Vec<u8> {
    compress_with(src, CompressMode::HighRatio)
}
