//! Pipeline error taxonomy.
//!
//! Callers can tell bad configuration ([`PipelineError::InvalidOption`])
//! apart from corrupt or unreadable data surfaced by the collaborator
//! ([`PipelineError::Io`], [`PipelineError::Frame`]) and from local policy
//! failures ([`PipelineError::DestinationExists`],
//! [`PipelineError::MissingSuffix`]). Collaborator errors are passed
//! through unmodified, never reinterpreted.

use core::fmt;
use std::io;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Option fields
// ─────────────────────────────────────────────────────────────────────────────

/// Names the option that failed validation, using the pipeline's external
/// parameter names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionField {
    BlockSizeId,
    BlockMode,
    BlockCheck,
    StreamCheck,
    Verbosity,
}

impl OptionField {
    pub fn as_str(self) -> &'static str {
        match self {
            OptionField::BlockSizeId => "blockSizeID",
            OptionField::BlockMode => "blockMode",
            OptionField::BlockCheck => "blockCheck",
            OptionField::StreamCheck => "streamCheck",
            OptionField::Verbosity => "verbosity",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Pipeline errors
// ─────────────────────────────────────────────────────────────────────────────

/// Failure of a file-pipeline call.
#[derive(Debug)]
pub enum PipelineError {
    /// A named option failed its range check; nothing was forwarded to the
    /// collaborator.
    InvalidOption(OptionField),
    /// The destination exists and overwriting was not requested.
    DestinationExists(PathBuf),
    /// The decompression input does not carry the `.lz4` suffix, so no
    /// output path can be derived from it.
    MissingSuffix(PathBuf),
    /// An I/O failure from the file layer, passed through as-is.
    Io(io::Error),
    /// A frame-format failure from the codec, passed through as-is.
    Frame(lz4_flex::frame::Error),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::InvalidOption(field) => {
                write!(f, "invalid input for {}", field.as_str())
            }
            PipelineError::DestinationExists(p) => {
                write!(f, "destination {} already exists", p.display())
            }
            PipelineError::MissingSuffix(p) => write!(
                f,
                "cannot derive output name: {} does not end in {}",
                p.display(),
                crate::io::file_io::LZ4_SUFFIX
            ),
            PipelineError::Io(e) => write!(f, "io error: {}", e),
            PipelineError::Frame(e) => write!(f, "frame error: {}", e),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PipelineError::Io(e) => Some(e),
            PipelineError::Frame(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for PipelineError {
    fn from(e: io::Error) -> Self {
        PipelineError::Io(e)
    }
}

impl From<lz4_flex::frame::Error> for PipelineError {
    fn from(e: lz4_flex::frame::Error) -> Self {
        PipelineError::Frame(e)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
