//! Test utilities & fixtures.
//! Provides access to the catalog fixtures under `tests/test-data-int` and
//! node directories for door32.sys tests.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Return the path to the static catalog fixture directory.
#[allow(dead_code)]
pub fn fixture_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("test-data-int")
}

/// A fresh node directory whose full path is lowercase, since the dropfile
/// lookup lowercases the whole constructed path.
#[allow(dead_code)]
pub fn node_dir(tag: &str) -> TempDir {
    let dir = tempfile::Builder::new()
        .prefix(&format!("spacejunk-{}-{}-", tag, std::process::id()))
        .rand_bytes(0)
        .tempdir()
        .expect("tempdir");
    let path = dir.path().to_str().expect("utf-8 temp path");
    assert_eq!(path, path.to_lowercase(), "temp dir must be lowercase");
    dir
}

/// Write `lines` joined with `sep` as door32.sys inside `dir`.
#[allow(dead_code)]
pub fn write_dropfile(dir: &Path, lines: &[&str], sep: &str) -> PathBuf {
    let path = dir.join("door32.sys");
    std::fs::write(&path, lines.join(sep)).expect("write door32.sys");
    path
}

#[allow(dead_code)]
pub const TRADER_JANE: [&str; 11] = [
    "sock", "1", "38400", "DOOR", "", "BBS", "Trader_Jane", "", "45", "0", "3",
];
