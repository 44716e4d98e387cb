//! # Models Module Unit Tests / Models 模块单元测试
//!
//! Tests for identifier decomposition, fault display, status
//! classification, and outcome record persistence.
//!
//! 标识符分解、故障显示、状态分类和结果记录持久化的测试。

use blockharness::core::models::{
    ANONYMOUS_SUITE, Fault, FaultKind, OutcomeRecord, TestId, TestStatus,
};
use std::path::PathBuf;

#[test]
fn test_id_decomposes_documented_form() {
    let id = TestId::parse("test_writes_data(SuiteFoo)");
    assert_eq!(id.suite, "SuiteFoo");
    assert_eq!(id.name, "writes_data");
}

#[test]
fn test_id_falls_back_to_anonymous_suite() {
    let id = TestId::parse("something else entirely");
    assert_eq!(id.suite, ANONYMOUS_SUITE);
    assert_eq!(id.name, "something else entirely");
}

#[test]
fn test_id_encode_round_trips_through_parse() {
    let raw = TestId::encode("basic_io", "sequential_write_read");
    assert_eq!(raw, "test_sequential_write_read(basic_io)");
    let id = TestId::parse(&raw);
    assert_eq!(id.suite, "basic_io");
    assert_eq!(id.name, "sequential_write_read");
}

#[test]
fn fault_display_characters() {
    let failure = Fault::failure("test_a(S)", "expected 1, got 2");
    let error = Fault::error("test_b(S)", "io exploded", None);
    assert_eq!(failure.single_character_display(), 'F');
    assert_eq!(error.single_character_display(), 'E');
}

#[test]
fn fault_long_display_carries_full_detail() {
    let fault = Fault::error(
        "test_b(S)",
        "io exploded",
        Some("caused by: device gone".to_string()),
    );
    let display = fault.long_display();
    assert!(display.starts_with("Error:\n"));
    assert!(display.contains("test_b(S)"));
    assert!(display.contains("io exploded"));
    assert!(display.contains("caused by: device gone"));
}

#[test]
fn record_starts_as_pass_and_reclassifies_on_faults() {
    let mut record = OutcomeRecord::new(
        "SuiteFoo".to_string(),
        "writes_data".to_string(),
        PathBuf::from("logs/SuiteFoo.writes_data.log"),
    );
    assert!(record.is_pass());
    assert_eq!(record.status, TestStatus::Passed);

    record.record_fault(Fault::failure("test_writes_data(SuiteFoo)", "mismatch"));
    assert_eq!(record.status, TestStatus::Failed);
    assert!(!record.is_pass());

    // Error dominates an earlier Failure.
    record.record_fault(Fault::error("test_writes_data(SuiteFoo)", "boom", None));
    assert_eq!(record.status, TestStatus::Errored);
    assert_eq!(record.faults.len(), 2);

    // A later Failure does not downgrade an Errored record.
    record.record_fault(Fault::failure("test_writes_data(SuiteFoo)", "again"));
    assert_eq!(record.status, TestStatus::Errored);
    assert_eq!(record.faults.len(), 3);
}

#[test]
fn record_persist_then_reload_is_identity() {
    let dir = tempfile::tempdir().unwrap();
    let mut record = OutcomeRecord::new(
        "SuiteFoo".to_string(),
        "writes_data".to_string(),
        PathBuf::from("logs/SuiteFoo.writes_data.log"),
    );
    record.record_fault(Fault::error(
        "test_writes_data(SuiteFoo)",
        "boom",
        Some("caused by: short read".to_string()),
    ));

    let path = dir.path().join("SuiteFoo.writes_data.json");
    record.save(&path).unwrap();
    let reloaded = OutcomeRecord::load(&path).unwrap();
    assert_eq!(reloaded, record);

    // Save-after-load reproduces an equivalent record too.
    let path2 = dir.path().join("again.json");
    reloaded.save(&path2).unwrap();
    assert_eq!(OutcomeRecord::load(&path2).unwrap(), record);
}

#[test]
fn load_reports_missing_file() {
    let err = OutcomeRecord::load(std::path::Path::new("/nonexistent/record.json")).unwrap_err();
    assert!(err.to_string().contains("Failed to read outcome record"));
}
