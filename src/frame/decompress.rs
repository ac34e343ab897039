//! Frame consumption: header parse, bounds checks, block decode.

use lz4_flex::block::decompress_into;

use crate::frame::types::{FrameError, HDR_SIZE, MAX_CONTENT_LEN};

/// Decompress a single frame produced by
/// [`compress_with`](crate::frame::compress_with).
///
/// On success the returned buffer is exactly as long as the header declared
/// and is a byte-exact reconstruction of the original source. On any
/// failure no output is returned; a partially filled destination is always
/// discarded.
///
/// The header is validated before anything is allocated, so a frame whose
/// header declares an absurd length fails cheaply with
/// [`FrameError::OversizedHeader`].
pub fn decompress(frame: &[u8]) -> Result<Vec<u8>, FrameError> {
    if frame.len() < HDR_SIZE {
        return Err(FrameError::InputTooShort { len: frame.len() });
    }

    let mut hdr = [0u8; HDR_SIZE];
    hdr.copy_from_slice(&frame[..HDR_SIZE]);
    let declared = u32::from_le_bytes(hdr);
    if declared > MAX_CONTENT_LEN {
        return Err(FrameError::OversizedHeader { size: declared });
    }

    let expected = declared as usize;
    if expected == 0 {
        return Ok(Vec::new());
    }

    // The length came from an untrusted header; a failed reservation is a
    // reportable error, not a process abort.
    let mut dst: Vec<u8> = Vec::new();
    dst.try_reserve_exact(expected)
        .map_err(|_| FrameError::Alloc { bytes: expected })?;
    dst.resize(expected, 0);

    let written = decompress_into(&frame[HDR_SIZE..], &mut dst).map_err(FrameError::Corrupt)?;
    if written != expected {
        return Err(FrameError::LengthMismatch {
            expected,
            actual: written,
        });
    }
    Ok(dst)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
