//! Raw caller-facing options and their validation gates.
//!
//! `FileOptions` mirrors the pipeline's named parameters one-to-one,
//! keeping the numeric fields as plain integers so that out-of-range values
//! are expressible and rejected here rather than made unrepresentable.
//! `validate()` turns them into a typed [`Prefs`] value; nothing reaches
//! the collaborator until every gate has passed.

use std::path::PathBuf;

use crate::io::error::{OptionField, PipelineError};
use crate::io::prefs::{BlockMode, Prefs, BLOCKSIZEID_MAX, BLOCKSIZEID_MIN, VERBOSITY_MAX};

/// Named parameters for a file-compression run, with the same defaults as
/// the pipeline's external interface.
#[derive(Clone, Debug)]
pub struct FileOptions {
    /// Compression level; 0 = fast path (default), >0 = high-ratio path.
    pub level: i32,
    /// Destination path; `None` derives `input + ".lz4"`.
    pub output: Option<PathBuf>,
    /// Overwrite an existing destination. Applied unconditionally, never
    /// validated. Default: false.
    pub overwrite: bool,
    /// Block-size class. 0 means unset (codec default); any other value
    /// must lie in 4–7. Default: 0.
    pub block_size_id: i32,
    /// Block mode: 1 = independent (default), 0 = chained.
    pub block_mode: i32,
    /// Per-block checksum: 0 = off (default), 1 = on.
    pub block_checksum: i32,
    /// Whole-stream checksum: 1 = on (default), 0 = off.
    pub stream_checksum: i32,
    /// Notification level 0–4; `None` leaves the global level untouched.
    pub verbosity: Option<i32>,
}

impl Default for FileOptions {
    fn default() -> Self {
        FileOptions {
            level: 0,
            output: None,
            overwrite: false,
            block_size_id: 0,
            block_mode: 1,
            block_checksum: 0,
            stream_checksum: 1,
            verbosity: None,
        }
    }
}

impl FileOptions {
    /// Runs the validation gates in their fixed order and produces the
    /// typed preference set.
    ///
    /// The first failing gate aborts the whole call with
    /// [`PipelineError::InvalidOption`] naming the offending field; later
    /// gates are not evaluated. Since validation happens before any
    /// collaborator call, a failure never leaves options partially applied.
    pub fn validate(&self) -> Result<Prefs, PipelineError> {
        let mut prefs = Prefs {
            level: self.level,
            overwrite: self.overwrite,
            ..Prefs::default()
        };

        if self.block_size_id != 0 {
            let id = self.block_size_id;
            if (BLOCKSIZEID_MIN as i32..=BLOCKSIZEID_MAX as i32).contains(&id) {
                prefs.block_size_id = Some(id as u32);
            } else {
                return Err(PipelineError::InvalidOption(OptionField::BlockSizeId));
            }
        }

        match self.block_mode {
            // Independent is the codec default; nothing to change.
            1 => {}
            0 => prefs.block_mode = BlockMode::Linked,
            _ => return Err(PipelineError::InvalidOption(OptionField::BlockMode)),
        }

        match self.block_checksum {
            0 => {}
            1 => prefs.block_checksum = true,
            _ => return Err(PipelineError::InvalidOption(OptionField::BlockCheck)),
        }

        match self.stream_checksum {
            1 => {}
            0 => prefs.stream_checksum = false,
            _ => return Err(PipelineError::InvalidOption(OptionField::StreamCheck)),
        }

        if let Some(v) = self.verbosity {
            if !(0..=VERBOSITY_MAX).contains(&v) {
                return Err(PipelineError::InvalidOption(OptionField::Verbosity));
            }
        }

        Ok(prefs)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
