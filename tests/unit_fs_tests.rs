//! # File System Layout Unit Tests / 文件系统布局单元测试

use blockharness::infra::fs::{RunDirs, sanitize_component};

#[test]
fn sanitize_keeps_safe_alphabet_unchanged() {
    assert_eq!(sanitize_component("writes_data-42"), "writes_data-42");
    assert_eq!(sanitize_component("SuiteFoo"), "SuiteFoo");
}

#[test]
fn sanitize_escapes_unsafe_characters() {
    assert_eq!(sanitize_component("a/b"), "a%2Fb");
    assert_eq!(sanitize_component("a.b"), "a%2Eb");
    assert_eq!(sanitize_component("with space"), "with%20space");
    // The escape character itself is escaped.
    assert_eq!(sanitize_component("50%"), "50%25");
}

#[test]
fn sanitize_is_injective_across_separator_ambiguity() {
    // ("a.b", "c") and ("a", "b.c") must not collide when joined with ".".
    let left = format!("{}.{}", sanitize_component("a.b"), sanitize_component("c"));
    let right = format!("{}.{}", sanitize_component("a"), sanitize_component("b.c"));
    assert_ne!(left, right);
}

#[test]
fn run_dirs_create_and_deterministic_paths() {
    let dir = tempfile::tempdir().unwrap();
    let dirs = RunDirs::create(dir.path()).unwrap();

    assert!(dirs.logs.is_dir());
    assert!(dirs.outcomes.is_dir());

    let log = dirs.log_path("SuiteFoo", "writes_data");
    let outcome = dirs.outcome_path("SuiteFoo", "writes_data");
    assert_eq!(log, dirs.logs.join("SuiteFoo.writes_data.log"));
    assert_eq!(outcome, dirs.outcomes.join("SuiteFoo.writes_data.json"));

    // The same sanitization rule names both files.
    assert_eq!(
        log.file_stem().unwrap().to_str(),
        outcome.file_stem().unwrap().to_str()
    );
}

#[test]
fn run_dirs_create_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    RunDirs::create(dir.path()).unwrap();
    RunDirs::create(dir.path()).unwrap();
}
