//! Frame construction: header write, block encode, buffer right-sizing.

use lz4_flex::block::{compress_into, get_maximum_output_size};

use crate::frame::types::{CompressMode, HDR_SIZE, MAX_CONTENT_LEN};

// ─────────────────────────────────────────────────────────────────────────────
// Right-sizing policy
// ─────────────────────────────────────────────────────────────────────────────

/// Whether a finished frame of `actual` bytes warrants reallocating the
/// `allocated`-byte destination buffer down to size.
///
/// Reallocation is only worth it when the frame occupies less than 75% of
/// the allocation; within that slop the oversized buffer is kept and only
/// the logical length is reported.
#[inline]
pub(crate) fn should_shrink(actual: usize, allocated: usize) -> bool {
    actual < (allocated / 4) * 3
}

// ─────────────────────────────────────────────────────────────────────────────
// Block-encoder dispatch
// ─────────────────────────────────────────────────────────────────────────────

/// Compress `src` into `dst`, returning the compressed size.
///
/// `dst` must be at least `get_maximum_output_size(src.len())` bytes, which
/// the caller guarantees; under that invariant the encoder cannot fail.
fn encode_block(mode: CompressMode, src: &[u8], dst: &mut [u8]) -> usize {
    match mode {
        CompressMode::Fast | CompressMode::HighRatio => {
            compress_into(src, dst).expect("destination sized with get_maximum_output_size")
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Public API
// ─────────────────────────────────────────────────────────────────────────────

/// Compress `src` into a self-describing frame using the given strategy.
///
/// The frame starts with `src.len()` encoded as a little-endian `u32`,
/// immediately followed by one LZ4 block. An empty source produces exactly
/// the 4 zero header bytes and never invokes the block encoder.
///
/// The returned frame is independently decompressible by
/// [`decompress`](crate::frame::decompress) with no external context.
///
/// # Panics
///
/// Panics if `src` is longer than [`MAX_CONTENT_LEN`] bytes, which the
/// 32-bit header cannot represent.
pub fn compress_with(src: &[u8], mode: CompressMode) -> Vec<u8> {
    assert!(
        src.len() <= MAX_CONTENT_LEN as usize,
        "source of {} bytes does not fit a 32-bit frame header",
        src.len()
    );

    let allocated = HDR_SIZE + get_maximum_output_size(src.len());
    let mut dst = vec![0u8; allocated];
    dst[..HDR_SIZE].copy_from_slice(&(src.len() as u32).to_le_bytes());

    if src.is_empty() {
        dst.truncate(HDR_SIZE);
        return dst;
    }

    let compressed = encode_block(mode, src, &mut dst[HDR_SIZE..]);
    let actual = HDR_SIZE + compressed;
    dst.truncate(actual);
    if should_shrink(actual, allocated) {
        dst.shrink_to_fit();
    }
    dst
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
