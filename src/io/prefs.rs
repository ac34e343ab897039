//! Validated pipeline preferences and the global notification level.
//!
//! `Prefs` is the typed, already-validated option set handed to the file
//! codec; it is produced from the raw caller-facing
//! [`FileOptions`](crate::io::FileOptions) and lives only for one call.
//! The notification level is the single piece of process-wide state,
//! matching the underlying codec's own verbosity model.

use std::sync::atomic::{AtomicI32, Ordering};

// ---------------------------------------------------------------------------
// Numeric constants
// ---------------------------------------------------------------------------
pub const KB: usize = 1 << 10;
pub const MB: usize = 1 << 20;

/// Valid block-size class identifiers, inclusive.
pub const BLOCKSIZEID_MIN: u32 = 4;
pub const BLOCKSIZEID_MAX: u32 = 7;

/// Valid notification levels, inclusive.
pub const VERBOSITY_MAX: i32 = 4;

// ---------------------------------------------------------------------------
// Display / notification globals
// ---------------------------------------------------------------------------

/// Global notification level. 0 = silent, 1 = errors only, 2 = results +
/// warnings, 3 = progress, 4 = verbose.
pub static DISPLAY_LEVEL: AtomicI32 = AtomicI32::new(0);

/// Write `msg` to stderr if the current notification level is ≥ `level`.
#[inline]
pub fn display_level(level: i32, msg: &str) {
    if DISPLAY_LEVEL.load(Ordering::Relaxed) >= level {
        eprint!("{}", msg);
    }
}

/// Sets the global notification level. Returns the value stored.
pub fn set_notification_level(level: i32) -> i32 {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
    level
}

// ---------------------------------------------------------------------------
// Block mode
// ---------------------------------------------------------------------------

/// Whether blocks within a file frame are linked (each block may reference
/// the previous one) or independent (self-contained).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockMode {
    /// Blocks share a dictionary window with their predecessor.
    Linked = 0,
    /// Each block is compressed independently.
    Independent = 1,
}

// ---------------------------------------------------------------------------
// Block-size table
// ---------------------------------------------------------------------------

/// Maximum block size in bytes for a block-size class, or `None` when the
/// id is outside 4–7.
///
/// Table: 4 → 64 KB, 5 → 256 KB, 6 → 1 MB, 7 → 4 MB.
pub fn block_size_bytes(id: u32) -> Option<usize> {
    const BLOCK_SIZE_TABLE: [usize; 4] = [64 * KB, 256 * KB, MB, 4 * MB];
    if !(BLOCKSIZEID_MIN..=BLOCKSIZEID_MAX).contains(&id) {
        return None;
    }
    Some(BLOCK_SIZE_TABLE[(id - BLOCKSIZEID_MIN) as usize])
}

// ---------------------------------------------------------------------------
// Preferences
// ---------------------------------------------------------------------------

/// Fully validated parameters for one file-compression run.
///
/// Built fresh per invocation, passed to the codec as an explicit parameter
/// object, and discarded when the call returns. There is no process-wide
/// codec configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prefs {
    /// Compression level. 0 selects the fast path, >0 the high-ratio path.
    /// Default: 0.
    pub level: i32,
    /// Overwrite an existing destination file. Default: false.
    pub overwrite: bool,
    /// Block-size class (4–7); `None` leaves the codec default. Default: `None`.
    pub block_size_id: Option<u32>,
    /// Block linking mode. Default: independent.
    pub block_mode: BlockMode,
    /// Append a per-block checksum. Default: false.
    pub block_checksum: bool,
    /// Append a whole-stream content checksum. Default: true.
    pub stream_checksum: bool,
}

impl Default for Prefs {
    fn default() -> Self {
        Prefs {
            level: 0,
            overwrite: false,
            block_size_id: None,
            block_mode: BlockMode::Independent,
            block_checksum: false,
            stream_checksum: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
