//! # Test Execution Engine Module / 测试执行引擎模块
//!
//! This module defines the contract between the execution engine and the
//! run orchestrator, and provides the built-in engine that drives test
//! bodies synchronously. The engine delivers five lifecycle events to a
//! registered listener, all on the same logical thread of control: run
//! started, test started, fault observed, test finished, run finished.
//!
//! 此模块定义执行引擎与运行协调器之间的契约，并提供同步驱动
//! 测试体的内置引擎。引擎向注册的监听器投递五种生命周期事件，
//! 全部在同一逻辑控制线程上：运行开始、测试开始、观察到故障、
//! 测试结束、运行结束。

use anyhow::Result;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::core::models::{Fault, TestFailure};
use crate::core::suite::{TestCase, TestContext};
use crate::infra::logging::LogHandle;

/// The five lifecycle listeners an engine calls back into.
///
/// Test-started and test-finished may fail (opening the per-test log file,
/// persisting the outcome record); such errors propagate through the engine
/// to the top-level caller and end the run.
pub trait RunListener {
    /// Delivered once before any test executes, with the planned case count.
    fn run_started(&mut self, planned: usize);

    /// Delivered when a test body is about to run. `id` has the documented
    /// form `test_<name>(<suite>)`.
    fn test_started(&mut self, id: &str) -> Result<()>;

    /// Delivered zero or more times per test; never transitions state.
    fn fault_observed(&mut self, fault: &Fault);

    /// Delivered when the test body has returned, regardless of fault count.
    fn test_finished(&mut self, id: &str) -> Result<()>;

    /// Delivered once after the last test, with the elapsed wall time.
    fn run_finished(&mut self, elapsed: Duration);
}

/// Drives a collection of test cases to completion, strictly sequentially.
pub trait ExecutionEngine {
    fn execute(&mut self, cases: &[TestCase], listener: &mut dyn RunListener) -> Result<()>;
}

/// The built-in engine: runs each body on the calling thread, converts
/// panics and returned errors into faults, and always delivers the
/// test-finished event for a body that ran.
///
/// 内置引擎：在调用线程上运行每个用例体，将 panic 和返回的错误
/// 转换为故障，并且对已运行的用例体总会投递测试结束事件。
pub struct HarnessEngine {
    device: PathBuf,
    log: LogHandle,
}

impl HarnessEngine {
    pub fn new(device: PathBuf, log: LogHandle) -> Self {
        Self { device, log }
    }

    /// Runs one body, mapping its outcome to at most one fault.
    fn run_body(&self, case: &TestCase) -> Option<Fault> {
        let mut ctx = TestContext::new(self.device.clone(), self.log.clone());
        let body = case.body;
        match panic::catch_unwind(AssertUnwindSafe(move || body(&mut ctx))) {
            Ok(Ok(())) => None,
            Ok(Err(err)) => Some(classify(&case.id, err)),
            Err(payload) => Some(Fault::failure(&case.id, panic_message(payload))),
        }
    }
}

impl ExecutionEngine for HarnessEngine {
    // No timeout or cancellation exists at this layer: a body that never
    // returns blocks the whole run.
    fn execute(&mut self, cases: &[TestCase], listener: &mut dyn RunListener) -> Result<()> {
        let started = Instant::now();
        listener.run_started(cases.len());
        for case in cases {
            listener.test_started(&case.id)?;
            if let Some(fault) = self.run_body(case) {
                listener.fault_observed(&fault);
            }
            listener.test_finished(&case.id)?;
        }
        listener.run_finished(started.elapsed());
        Ok(())
    }
}

/// An assertion-style [`TestFailure`] becomes a Failure fault; any other
/// error becomes an Error fault carrying its cause chain.
fn classify(test_id: &str, err: anyhow::Error) -> Fault {
    if err.downcast_ref::<TestFailure>().is_some() {
        return Fault::failure(test_id, err.to_string());
    }
    let chain: Vec<String> = err.chain().skip(1).map(|cause| cause.to_string()).collect();
    let backtrace = if chain.is_empty() {
        None
    } else {
        Some(chain.join("\n"))
    };
    Fault::error(test_id, err.to_string(), backtrace)
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "test body panicked".to_string()
    }
}
