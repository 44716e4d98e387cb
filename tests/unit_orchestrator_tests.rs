//! # Run Orchestrator Unit Tests / 运行协调器单元测试
//!
//! End-to-end checks of the orchestrator against a temporary output tree:
//! outcome persistence, per-test log capture, sink restoration on both the
//! normal and the abnormal path, and run-level fault accumulation.
//!
//! 在临时输出目录上对协调器做端到端检查：结果持久化、每测试日志
//! 捕获、正常与异常路径下的输出恢复，以及运行级故障累计。

use anyhow::Result;
use blockharness::core::execution::{ExecutionEngine, HarnessEngine, RunListener};
use blockharness::core::logparse::{MessageLevel, messages};
use blockharness::core::models::{OutcomeRecord, TestFailure, TestStatus};
use blockharness::core::orchestrator::RunOrchestrator;
use blockharness::core::suite::TestCase;
use blockharness::infra::fs::RunDirs;
use blockharness::infra::logging;
use blockharness::reporting::console::{ConsoleOutput, OutputLevel};
use std::time::Duration;
use tempfile::TempDir;

fn quiet_console() -> ConsoleOutput {
    ConsoleOutput::new(OutputLevel::Quiet)
}

fn orchestrator_in(dir: &TempDir) -> (RunOrchestrator, RunDirs, logging::LogHandle) {
    let dirs = RunDirs::create(dir.path()).unwrap();
    let log = logging::new_handle();
    let orch = RunOrchestrator::new(quiet_console(), dirs.clone(), log.clone());
    (orch, dirs, log)
}

fn passes(ctx: &mut blockharness::core::suite::TestContext) -> Result<()> {
    ctx.info("all good");
    Ok(())
}

fn fails(ctx: &mut blockharness::core::suite::TestContext) -> Result<()> {
    ctx.error("mismatch seen");
    Err(TestFailure::err("read-back mismatch at offset 0"))
}

#[test]
fn clean_run_persists_one_record_and_one_log_per_test() {
    let dir = tempfile::tempdir().unwrap();
    let (mut orch, dirs, log) = orchestrator_in(&dir);

    let cases = vec![
        TestCase::new("basic_io", "one", passes),
        TestCase::new("basic_io", "two", passes),
        TestCase::new("integrity", "three", passes),
    ];
    let mut engine = HarnessEngine::new(dir.path().join("unused"), log);
    engine.execute(&cases, &mut orch).unwrap();

    let totals = orch.totals();
    assert_eq!((totals.run, totals.passed, totals.failed), (3, 3, 0));
    assert!(orch.run_faults().is_empty());

    for (suite, name) in [
        ("basic_io", "one"),
        ("basic_io", "two"),
        ("integrity", "three"),
    ] {
        assert!(dirs.log_path(suite, name).is_file());
        let record = OutcomeRecord::load(&dirs.outcome_path(suite, name)).unwrap();
        assert_eq!(record.status, TestStatus::Passed);
        assert_eq!(record.log_path, dirs.log_path(suite, name));
    }
}

#[test]
fn faulted_test_is_recorded_and_does_not_disturb_the_next() {
    let dir = tempfile::tempdir().unwrap();
    let (mut orch, dirs, log) = orchestrator_in(&dir);

    let cases = vec![
        TestCase::new("S", "bad", fails),
        TestCase::new("S", "good", passes),
    ];
    let mut engine = HarnessEngine::new(dir.path().join("unused"), log);
    engine.execute(&cases, &mut orch).unwrap();

    let totals = orch.totals();
    assert_eq!((totals.run, totals.passed, totals.failed), (2, 1, 1));
    assert_eq!(orch.run_faults().len(), 1);
    assert_eq!(orch.run_faults()[0].test_id, "test_bad(S)");

    let bad = OutcomeRecord::load(&dirs.outcome_path("S", "bad")).unwrap();
    assert_eq!(bad.status, TestStatus::Failed);
    assert_eq!(bad.faults.len(), 1);
    assert!(bad.faults[0].message.contains("read-back mismatch"));

    let good = OutcomeRecord::load(&dirs.outcome_path("S", "good")).unwrap();
    assert!(good.is_pass());
    assert!(good.faults.is_empty());
}

#[test]
fn captured_log_reconstructs_into_the_messages_written() {
    let dir = tempfile::tempdir().unwrap();
    let (mut orch, dirs, log) = orchestrator_in(&dir);

    orch.run_started(1);
    orch.test_started("test_capture(S)").unwrap();
    assert!(log.borrow().is_redirected());
    log.borrow_mut()
        .write_message(MessageLevel::Info, "hello\nsecond line")
        .unwrap();
    log.borrow_mut()
        .write_message(MessageLevel::Warn, "careful")
        .unwrap();
    orch.test_finished("test_capture(S)").unwrap();
    assert!(!log.borrow().is_redirected());
    orch.run_finished(Duration::from_millis(5));

    let raw = std::fs::read_to_string(dirs.log_path("S", "capture")).unwrap();
    let parsed: Vec<_> = messages(&raw).collect::<Result<_>>().unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0].level, MessageLevel::Info);
    assert_eq!(parsed[0].text, "hello\nsecond line\n");
    assert_eq!(parsed[1].level, MessageLevel::Warn);
    assert_eq!(parsed[1].text, "careful\n");
}

#[test]
fn sink_is_restored_even_when_the_engine_errors_mid_test() {
    struct BrokenEngine;
    impl ExecutionEngine for BrokenEngine {
        fn execute(
            &mut self,
            cases: &[TestCase],
            listener: &mut dyn RunListener,
        ) -> Result<()> {
            listener.run_started(cases.len());
            listener.test_started(&cases[0].id)?;
            anyhow::bail!("engine fell over")
        }
    }

    let dir = tempfile::tempdir().unwrap();
    let (mut orch, _dirs, log) = orchestrator_in(&dir);
    let cases = vec![TestCase::new("S", "stuck", passes)];

    let err = BrokenEngine.execute(&cases, &mut orch).unwrap_err();
    assert!(err.to_string().contains("engine fell over"));

    // The per-test redirection is still live while the orchestrator holds
    // the abandoned test; dropping it releases the guard.
    assert!(log.borrow().is_redirected());
    drop(orch);
    assert!(!log.borrow().is_redirected());
}

#[test]
fn test_finished_without_a_running_test_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let (mut orch, _dirs, _log) = orchestrator_in(&dir);

    let err = orch.test_finished("test_ghost(S)").unwrap_err();
    assert!(err.to_string().contains("no test running"));
}
