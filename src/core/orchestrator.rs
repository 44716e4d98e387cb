//! # Run Orchestrator Module / 运行协调器模块
//!
//! The event-driven mediator of a harness run. It listens for the engine's
//! lifecycle events and, per test: decomposes the raw identifier, opens a
//! dedicated raw-log sink and routes the logging subsystem to it, creates
//! the outcome record, attaches observed faults, then on completion
//! restores the previous sink, persists the record, and emits progress
//! output. At the end of the run it prints the elapsed time, the numbered
//! fault list, and the pass/fail tally.
//!
//! 一次运行的事件驱动中介。它监听引擎的生命周期事件，并对每个
//! 测试：分解原始标识符，打开专用的原始日志输出并将日志子系统
//! 路由到它，创建结果记录，附加观察到的故障；测试完成时恢复
//! 之前的输出、持久化记录并输出进度。运行结束时打印耗时、
//! 带编号的故障列表和通过/失败统计。

use anyhow::{Context, Result, bail};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::Duration;

use crate::core::execution::RunListener;
use crate::core::models::{Fault, OutcomeRecord, RunTotals, TestId};
use crate::infra::fs::RunDirs;
use crate::infra::logging::LogHandle;
use crate::reporting::console::{ConsoleOutput, OutputLevel};

/// Holds the sink displaced by a per-test redirection and puts it back on
/// release. The `Drop` arm covers the abnormal path: if the engine never
/// delivers the test-finished event, the guard still restores the previous
/// sink when the orchestrator unwinds.
struct SinkGuard {
    log: LogHandle,
    previous: Option<Box<dyn Write>>,
}

impl SinkGuard {
    fn redirect(log: &LogHandle, sink: Box<dyn Write>) -> Self {
        let previous = log.borrow_mut().redirect(sink);
        Self {
            log: log.clone(),
            previous: Some(previous),
        }
    }

    /// Restores the previous sink and flushes the per-test sink, so write
    /// errors surface before the outcome record is persisted.
    fn release(mut self) -> Result<()> {
        if let Some(previous) = self.previous.take() {
            let mut test_sink = self.log.borrow_mut().restore(previous);
            test_sink
                .flush()
                .context("Failed to flush per-test log sink")?;
        }
        Ok(())
    }
}

impl Drop for SinkGuard {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            let mut test_sink = self.log.borrow_mut().restore(previous);
            // Flush errors have nowhere to go from a destructor.
            let _ = test_sink.flush();
        }
    }
}

/// State carried between a test's start and end events.
struct ActiveTest {
    record: OutcomeRecord,
    guard: SinkGuard,
    fault_echoed: bool,
}

/// Drives console output, per-test log capture, and outcome persistence for
/// one run. Single-threaded by contract: all events arrive on the same
/// logical thread of control, so no locking protects this state.
///
/// 负责一次运行的控制台输出、每测试日志捕获和结果持久化。
/// 按契约为单线程：所有事件都在同一逻辑控制线程上送达，
/// 因此这些状态无需加锁。
pub struct RunOrchestrator {
    console: ConsoleOutput,
    dirs: RunDirs,
    log: LogHandle,
    active: Option<ActiveTest>,
    run_faults: Vec<Fault>,
    outcomes: BTreeMap<String, Vec<OutcomeRecord>>,
}

impl RunOrchestrator {
    pub fn new(console: ConsoleOutput, dirs: RunDirs, log: LogHandle) -> Self {
        Self {
            console,
            dirs,
            log,
            active: None,
            run_faults: Vec::new(),
            outcomes: BTreeMap::new(),
        }
    }

    /// Aggregate counts over every finalized record. Passed is exactly the
    /// records whose status is Pass; failed is the complement.
    pub fn totals(&self) -> RunTotals {
        let mut totals = RunTotals::default();
        for records in self.outcomes.values() {
            for record in records {
                totals.run += 1;
                if record.is_pass() {
                    totals.passed += 1;
                } else {
                    totals.failed += 1;
                }
            }
        }
        totals
    }

    /// Finalized records grouped by suite, in execution order per suite.
    pub fn outcomes(&self) -> &BTreeMap<String, Vec<OutcomeRecord>> {
        &self.outcomes
    }

    /// Every fault observed during the run, in arrival order.
    pub fn run_faults(&self) -> &[Fault] {
        &self.run_faults
    }
}

impl RunListener for RunOrchestrator {
    fn run_started(&mut self, planned: usize) {
        self.console.line(OutputLevel::Normal, "Started");
        self.console
            .line(OutputLevel::Verbose, format!("{planned} test case(s) selected"));
    }

    fn test_started(&mut self, id: &str) -> Result<()> {
        let TestId { suite, name } = TestId::parse(id);
        self.console.line(OutputLevel::Verbose, id);

        let log_path = self.dirs.log_path(&suite, &name);
        let file = File::create(&log_path).with_context(|| {
            format!("Failed to open per-test log file: {}", log_path.display())
        })?;
        let guard = SinkGuard::redirect(&self.log, Box::new(BufWriter::new(file)));

        let record = OutcomeRecord::new(suite, name, log_path);
        self.active = Some(ActiveTest {
            record,
            guard,
            fault_echoed: false,
        });
        Ok(())
    }

    fn fault_observed(&mut self, fault: &Fault) {
        if let Some(active) = self.active.as_mut() {
            active.record.record_fault(fault.clone());
            if !active.fault_echoed {
                // The fault's indicator doubles as this test's progress mark.
                self.console.progress(fault.single_character_display());
                active.fault_echoed = true;
            }
        }
        self.run_faults.push(fault.clone());
    }

    fn test_finished(&mut self, id: &str) -> Result<()> {
        let Some(active) = self.active.take() else {
            bail!("test-finished event for {id} with no test running");
        };
        let ActiveTest {
            record,
            guard,
            fault_echoed,
        } = active;

        guard.release()?;

        let outcome_path = self
            .dirs
            .outcome_path(&record.suite_name, &record.test_name);
        record.save(&outcome_path)?;

        if !fault_echoed {
            self.console.progress('.');
        }
        self.outcomes
            .entry(record.suite_name.clone())
            .or_default()
            .push(record);
        Ok(())
    }

    fn run_finished(&mut self, elapsed: Duration) {
        // Terminate the progress line before the summary.
        self.console.line(OutputLevel::Normal, "");
        self.console.line(
            OutputLevel::Normal,
            format!("Finished in {:.3} seconds.", elapsed.as_secs_f64()),
        );
        self.console.fault_list(&self.run_faults);
        self.console.tally(self.totals());
    }
}
