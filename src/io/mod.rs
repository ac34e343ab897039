//! Validated file-compression pipeline.
//!
//! Entry points translate a set of named, optionally omitted parameters
//! ([`FileOptions`]) into a validated [`Prefs`] value, derive the output
//! path when absent, then delegate to a [`FileCodec`] collaborator. The
//! default collaborator is [`Lz4FileCodec`]; the `_with` variants accept
//! any implementation, which is how the validation tests observe that an
//! invalid option set never reaches the codec.
//!
//! ```no_run
//! use lz4pack::io::{compress_file, decompress_file, FileOptions};
//!
//! let opts = FileOptions { block_size_id: 5, ..FileOptions::default() };
//! let packed = compress_file("data.txt", &opts)?;        // data.txt.lz4
//! # std::fs::remove_file("data.txt")?;
//! let restored = decompress_file(&packed)?;              // data.txt
//! # Ok::<(), lz4pack::PipelineError>(())
//! ```

pub mod codec;
pub mod error;
pub mod file_io;
pub mod options;
pub mod prefs;

use std::path::{Path, PathBuf};

pub use codec::{FileCodec, Lz4FileCodec};
pub use error::{OptionField, PipelineError};
pub use file_io::{strip_lz4_suffix, with_lz4_suffix, LZ4_SUFFIX};
pub use options::FileOptions;
pub use prefs::{set_notification_level, BlockMode, Prefs};

// ─────────────────────────────────────────────────────────────────────────────
// Compression
// ─────────────────────────────────────────────────────────────────────────────

/// Validates `options`, then compresses `input` through the default codec.
///
/// Returns the resolved output path (`options.output`, or `input` with the
/// `.lz4` suffix appended). The first invalid option aborts the call before
/// any file is touched.
pub fn compress_file(
    input: impl AsRef<Path>,
    options: &FileOptions,
) -> Result<PathBuf, PipelineError> {
    compress_file_with(&Lz4FileCodec, input, options)
}

/// [`compress_file`] with an explicit collaborator.
pub fn compress_file_with<C: FileCodec>(
    codec: &C,
    input: impl AsRef<Path>,
    options: &FileOptions,
) -> Result<PathBuf, PipelineError> {
    let input = input.as_ref();
    let prefs = options.validate()?;
    if let Some(v) = options.verbosity {
        set_notification_level(v);
    }
    let output = match &options.output {
        Some(p) => p.clone(),
        None => with_lz4_suffix(input),
    };
    codec.compress_file(input, &output, &prefs)?;
    Ok(output)
}

/// Compresses `input` with only a compression level, every other option at
/// its default, writing to `input + ".lz4"`.
pub fn compress_file_default(
    input: impl AsRef<Path>,
    level: i32,
) -> Result<PathBuf, PipelineError> {
    let options = FileOptions {
        level,
        ..FileOptions::default()
    };
    compress_file(input, &options)
}

// ─────────────────────────────────────────────────────────────────────────────
// Decompression
// ─────────────────────────────────────────────────────────────────────────────

/// Decompresses `input` through the default codec.
///
/// The output path is `input` with its `.lz4` suffix removed; inputs
/// without the suffix fail with [`PipelineError::MissingSuffix`]. This
/// entry point takes no options.
pub fn decompress_file(input: impl AsRef<Path>) -> Result<PathBuf, PipelineError> {
    decompress_file_with(&Lz4FileCodec, input)
}

/// [`decompress_file`] with an explicit collaborator.
pub fn decompress_file_with<C: FileCodec>(
    codec: &C,
    input: impl AsRef<Path>,
) -> Result<PathBuf, PipelineError> {
    let input = input.as_ref();
    let output = strip_lz4_suffix(input)?;
    codec.decompress_file(input, &output)?;
    Ok(output)
}
