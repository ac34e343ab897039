//! Path derivation and file opening for the pipeline.
//!
//! - [`with_lz4_suffix`] / [`strip_lz4_suffix`] — deterministic output-path
//!   derivation around the fixed `.lz4` suffix.
//! - [`open_src_file`] / [`open_dst_file`] — buffered file handles, with the
//!   overwrite policy enforced at open time.
//!
//! Verbosity-gated diagnostics go to stderr via the global
//! [`DISPLAY_LEVEL`](crate::io::prefs::DISPLAY_LEVEL).

use std::ffi::OsString;
use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};

use crate::io::error::PipelineError;
use crate::io::prefs::display_level;

/// Suffix appended to compressed files and required of decompression inputs.
pub const LZ4_SUFFIX: &str = ".lz4";

// ---------------------------------------------------------------------------
// Suffix handling
// ---------------------------------------------------------------------------

/// Appends the `.lz4` suffix to `input`, preserving its existing extension.
pub fn with_lz4_suffix(input: &Path) -> PathBuf {
    let mut name: OsString = input.as_os_str().to_os_string();
    name.push(LZ4_SUFFIX);
    PathBuf::from(name)
}

/// Derives the decompression output path by removing the `.lz4` suffix.
///
/// Inputs that do not end in `.lz4` fail with
/// [`PipelineError::MissingSuffix`]; blindly truncating a fixed number of
/// characters would mangle short or unsuffixed names.
pub fn strip_lz4_suffix(input: &Path) -> Result<PathBuf, PipelineError> {
    match input.extension() {
        Some(ext) if ext == "lz4" => Ok(input.with_extension("")),
        _ => Err(PipelineError::MissingSuffix(input.to_path_buf())),
    }
}

// ---------------------------------------------------------------------------
// File opening
// ---------------------------------------------------------------------------

/// Opens a source file for buffered sequential reading.
pub(crate) fn open_src_file(path: &Path) -> io::Result<BufReader<File>> {
    display_level(4, &format!("opening {} for reading\n", path.display()));
    Ok(BufReader::new(File::open(path)?))
}

/// Opens a destination file for buffered writing.
///
/// With `overwrite` off the open uses `create_new`, so an existing
/// destination fails with [`PipelineError::DestinationExists`] before a
/// single byte is written.
pub(crate) fn open_dst_file(path: &Path, overwrite: bool) -> Result<BufWriter<File>, PipelineError> {
    display_level(4, &format!("opening {} for writing\n", path.display()));
    let file = if overwrite {
        File::create(path)?
    } else {
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| {
                if e.kind() == io::ErrorKind::AlreadyExists {
                    PipelineError::DestinationExists(path.to_path_buf())
                } else {
                    PipelineError::Io(e)
                }
            })?
    };
    Ok(BufWriter::new(file))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
