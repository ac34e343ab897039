// lz4pack — length-prefixed LZ4 framing and a validated file-compression pipeline.

pub mod frame;
pub mod io;

// ── Version constants ─────────────────────────────────────────────────────────
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the runtime version string of this crate.
pub fn version_string() -> &'static str {
    VERSION
}

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use frame::{compress, compress_hc, compress_with, decompress, CompressMode, FrameError};
pub use io::{compress_file, compress_file_default, decompress_file, FileOptions, PipelineError};
