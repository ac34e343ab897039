//! Frame-format types, constants, and error handling.
//!
//! A frame is a single self-describing compressed unit: a 4-byte
//! little-endian original-length header followed by one raw LZ4 block.
//! Exactly one header layout exists; there is no versioning and no support
//! for multiple frames in one buffer.

use core::fmt;

use lz4_flex::block::DecompressError;

// ─────────────────────────────────────────────────────────────────────────────
// Frame layout constants
// ─────────────────────────────────────────────────────────────────────────────

/// Size in bytes of the original-length header at the start of every frame.
pub const HDR_SIZE: usize = 4;

/// Largest original length a frame header may declare.
///
/// Header values above this are rejected before any allocation: they cannot
/// have been produced by the compressor, whose input sizes are bounded by a
/// signed 32-bit quantity.
pub const MAX_CONTENT_LEN: u32 = i32::MAX as u32;

// ─────────────────────────────────────────────────────────────────────────────
// Compression strategy
// ─────────────────────────────────────────────────────────────────────────────

/// Selects the block-compression strategy for [`compress_with`].
///
/// [`compress_with`]: crate::frame::compress_with
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompressMode {
    /// The fast default encoder.
    Fast,
    /// The slower, higher-ratio encoder. The current backend ships a single
    /// block encoder, so this dispatches to the same routine as [`Fast`];
    /// the mode is kept at the API seam so a dedicated high-compression
    /// backend can slot in without an interface change.
    ///
    /// [`Fast`]: CompressMode::Fast
    HighRatio,
}

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

/// Decompression failure for a single frame.
///
/// A partially filled destination buffer is never exposed: every variant
/// means the caller receives no output at all.
#[derive(Debug)]
pub enum FrameError {
    /// The input is shorter than the 4-byte header.
    InputTooShort { len: usize },
    /// The header declares a length above [`MAX_CONTENT_LEN`].
    OversizedHeader { size: u32 },
    /// The destination buffer for the declared length could not be allocated.
    Alloc { bytes: usize },
    /// The block decoder rejected the payload.
    Corrupt(DecompressError),
    /// The payload decoded cleanly but produced a different number of bytes
    /// than the header declared.
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::InputTooShort { len } => {
                write!(f, "input too short: {} bytes, header needs {}", len, HDR_SIZE)
            }
            FrameError::OversizedHeader { size } => {
                write!(f, "invalid size in header: {:#x}", size)
            }
            FrameError::Alloc { bytes } => {
                write!(f, "cannot allocate {} bytes for decompressed output", bytes)
            }
            FrameError::Corrupt(e) => write!(f, "corrupt input: {}", e),
            FrameError::LengthMismatch { expected, actual } => write!(
                f,
                "corrupt input: header declared {} bytes but payload decoded to {}",
                expected, actual
            ),
        }
    }
}

impl std::error::Error for FrameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FrameError::Corrupt(e) => Some(e),
            _ => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
