// Shared test helpers for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// The two-message raw stream from the log format documentation.
pub const SAMPLE_RAW_LOG: &str = "I, [2011-10-19T15:02:36.011520 #1065]: starting\nmore detail\nE, [2011-10-19T15:02:37.000000 #1065]: boom\n";

/// Creates a sparse regular file standing in for a block device.
pub fn setup_target_file(dir: &TempDir, len: u64) -> PathBuf {
    let path = dir.path().join("target.img");
    let file = fs::File::create(&path).expect("Failed to create target file");
    file.set_len(len).expect("Failed to size target file");
    path
}

/// Writes a profile pointing at `device`, with output under `<dir>/results`.
pub fn write_profile(dir: &TempDir, device: &PathBuf) -> PathBuf {
    let profile_path = dir.path().join("Blockharness.toml");
    let content = format!(
        "language = \"en\"\noutput_dir = \"{}\"\n\n[target]\ndevice = \"{}\"\n",
        dir.path().join("results").display(),
        device.display()
    );
    fs::write(&profile_path, content).expect("Failed to write profile");
    profile_path
}
