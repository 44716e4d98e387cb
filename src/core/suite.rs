//! # Test Suite Module / 测试套件模块
//!
//! Defines the test-case collection the orchestrator consumes: suites of
//! named cases whose bodies are plain functions run against the target
//! device, plus the per-test context handed to each body.
//!
//! 定义协调器消费的测试用例集合：由具名用例组成的套件，
//! 用例体是针对目标设备运行的普通函数，另有传递给每个用例体的
//! 测试上下文。

use anyhow::Result;
use std::path::PathBuf;

use crate::core::logparse::MessageLevel;
use crate::core::models::TestId;
use crate::infra::logging::LogHandle;

/// A test body: synchronous, run to completion on the calling thread.
pub type TestBody = fn(&mut TestContext) -> Result<()>;

/// One runnable test case. `id` carries the encoded `test_<name>(<suite>)`
/// identifier the engine reports in its lifecycle events.
#[derive(Debug)]
pub struct TestCase {
    pub id: String,
    pub body: TestBody,
}

impl TestCase {
    pub fn new(suite: &str, name: &str, body: TestBody) -> Self {
        Self {
            id: TestId::encode(suite, name),
            body,
        }
    }
}

/// A named, ordered collection of test cases.
/// 具名且有序的测试用例集合。
pub struct TestSuite {
    pub name: String,
    pub cases: Vec<TestCase>,
}

impl TestSuite {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            cases: Vec::new(),
        }
    }

    /// Appends a case, keeping registration order.
    pub fn case(mut self, name: &str, body: TestBody) -> Self {
        let suite = self.name.clone();
        self.cases.push(TestCase::new(&suite, name, body));
        self
    }
}

/// Execution context handed to a test body: the target device under test
/// and leveled logging into whatever sink is currently routed for this test.
///
/// 传递给测试体的执行上下文：被测目标设备，以及写入当前路由
/// 输出的分级日志方法。
pub struct TestContext {
    /// Path to the block device (or an ordinary file standing in for one).
    pub device: PathBuf,
    log: LogHandle,
}

impl TestContext {
    pub fn new(device: PathBuf, log: LogHandle) -> Self {
        Self { device, log }
    }

    pub fn debug(&self, text: &str) {
        self.log(MessageLevel::Debug, text);
    }

    pub fn info(&self, text: &str) {
        self.log(MessageLevel::Info, text);
    }

    pub fn warn(&self, text: &str) {
        self.log(MessageLevel::Warn, text);
    }

    pub fn error(&self, text: &str) {
        self.log(MessageLevel::Error, text);
    }

    fn log(&self, level: MessageLevel, text: &str) {
        // A broken sink must not decide a test's fate mid-body; write errors
        // surface when the orchestrator flushes and closes the log file.
        let _ = self.log.borrow_mut().write_message(level, text);
    }
}
