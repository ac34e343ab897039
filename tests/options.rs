// Pipeline option validation through the public entry points, using a
// recording collaborator to observe whether the codec was ever invoked.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use lz4pack::io::{
    compress_file_with, decompress_file_with, BlockMode, FileCodec, FileOptions, OptionField,
    PipelineError, Prefs,
};

// ─────────────────────────────────────────────────────────────────────────────
// Spy collaborator
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
struct SpyCodec {
    compress_calls: RefCell<Vec<(PathBuf, PathBuf, Prefs)>>,
    decompress_calls: RefCell<Vec<(PathBuf, PathBuf)>>,
}

impl FileCodec for SpyCodec {
    fn compress_file(
        &self,
        input: &Path,
        output: &Path,
        prefs: &Prefs,
    ) -> Result<u64, PipelineError> {
        self.compress_calls
            .borrow_mut()
            .push((input.to_path_buf(), output.to_path_buf(), prefs.clone()));
        Ok(0)
    }

    fn decompress_file(&self, input: &Path, output: &Path) -> Result<u64, PipelineError> {
        self.decompress_calls
            .borrow_mut()
            .push((input.to_path_buf(), output.to_path_buf()));
        Ok(0)
    }
}

fn expect_invalid(result: Result<PathBuf, PipelineError>, field: OptionField) {
    match result {
        Err(PipelineError::InvalidOption(f)) => assert_eq!(f, field),
        other => panic!("expected InvalidOption({:?}), got {:?}", field, other),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Abort-before-delegation
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn invalid_block_mode_never_reaches_the_codec() {
    let spy = SpyCodec::default();
    let opts = FileOptions {
        block_mode: 2,
        ..FileOptions::default()
    };
    expect_invalid(
        compress_file_with(&spy, "in.bin", &opts),
        OptionField::BlockMode,
    );
    assert!(spy.compress_calls.borrow().is_empty());
}

#[test]
fn invalid_block_size_id_never_reaches_the_codec() {
    for id in [3, 8, 10] {
        let spy = SpyCodec::default();
        let opts = FileOptions {
            block_size_id: id,
            ..FileOptions::default()
        };
        expect_invalid(
            compress_file_with(&spy, "in.bin", &opts),
            OptionField::BlockSizeId,
        );
        assert!(spy.compress_calls.borrow().is_empty());
    }
}

#[test]
fn invalid_verbosity_aborts_before_the_codec() {
    let spy = SpyCodec::default();
    let opts = FileOptions {
        verbosity: Some(9),
        ..FileOptions::default()
    };
    expect_invalid(
        compress_file_with(&spy, "in.bin", &opts),
        OptionField::Verbosity,
    );
    assert!(spy.compress_calls.borrow().is_empty());
}

#[test]
fn invalid_checksum_flags_abort_before_the_codec() {
    let spy = SpyCodec::default();
    let opts = FileOptions {
        block_checksum: 3,
        ..FileOptions::default()
    };
    expect_invalid(
        compress_file_with(&spy, "in.bin", &opts),
        OptionField::BlockCheck,
    );

    let opts = FileOptions {
        stream_checksum: -2,
        ..FileOptions::default()
    };
    expect_invalid(
        compress_file_with(&spy, "in.bin", &opts),
        OptionField::StreamCheck,
    );
    assert!(spy.compress_calls.borrow().is_empty());
}

// ─────────────────────────────────────────────────────────────────────────────
// Delegation with validated prefs
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn valid_options_delegate_once_with_typed_prefs() {
    let spy = SpyCodec::default();
    let opts = FileOptions::default();
    let out = compress_file_with(&spy, "in.bin", &opts).unwrap();
    assert_eq!(out, PathBuf::from("in.bin.lz4"));

    let calls = spy.compress_calls.borrow();
    assert_eq!(calls.len(), 1);
    let (input, output, prefs) = &calls[0];
    assert_eq!(input, &PathBuf::from("in.bin"));
    assert_eq!(output, &PathBuf::from("in.bin.lz4"));
    assert_eq!(prefs, &Prefs::default());
}

#[test]
fn every_valid_block_size_id_is_forwarded() {
    for id in 4..=7 {
        let spy = SpyCodec::default();
        let opts = FileOptions {
            block_size_id: id,
            ..FileOptions::default()
        };
        compress_file_with(&spy, "in.bin", &opts).unwrap();
        let calls = spy.compress_calls.borrow();
        assert_eq!(calls[0].2.block_size_id, Some(id as u32));
    }
}

#[test]
fn chained_mode_and_checksum_toggles_are_forwarded() {
    let spy = SpyCodec::default();
    let opts = FileOptions {
        block_mode: 0,
        block_checksum: 1,
        stream_checksum: 0,
        overwrite: true,
        level: 9,
        ..FileOptions::default()
    };
    compress_file_with(&spy, "in.bin", &opts).unwrap();
    let calls = spy.compress_calls.borrow();
    let prefs = &calls[0].2;
    assert_eq!(prefs.block_mode, BlockMode::Linked);
    assert!(prefs.block_checksum);
    assert!(!prefs.stream_checksum);
    assert!(prefs.overwrite);
    assert_eq!(prefs.level, 9);
}

#[test]
fn explicit_output_path_wins_over_derivation() {
    let spy = SpyCodec::default();
    let opts = FileOptions {
        output: Some(PathBuf::from("elsewhere/packed.lz4")),
        ..FileOptions::default()
    };
    let out = compress_file_with(&spy, "in.bin", &opts).unwrap();
    assert_eq!(out, PathBuf::from("elsewhere/packed.lz4"));
    assert_eq!(
        spy.compress_calls.borrow()[0].1,
        PathBuf::from("elsewhere/packed.lz4")
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Decompression path derivation
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn decompress_strips_the_suffix_before_delegating() {
    let spy = SpyCodec::default();
    let out = decompress_file_with(&spy, "dir/data.txt.lz4").unwrap();
    assert_eq!(out, PathBuf::from("dir/data.txt"));
    let calls = spy.decompress_calls.borrow();
    assert_eq!(calls[0], (PathBuf::from("dir/data.txt.lz4"), PathBuf::from("dir/data.txt")));
}

#[test]
fn decompress_without_suffix_never_reaches_the_codec() {
    let spy = SpyCodec::default();
    match decompress_file_with(&spy, "dir/data.txt") {
        Err(PipelineError::MissingSuffix(p)) => assert_eq!(p, PathBuf::from("dir/data.txt")),
        other => panic!("expected MissingSuffix, got {:?}", other),
    }
    assert!(spy.decompress_calls.borrow().is_empty());
}
