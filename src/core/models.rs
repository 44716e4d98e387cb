//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures of the harness: the
//! decomposed test identifier, the fault raised by a test body, and the
//! durable outcome record persisted for every executed test.
//!
//! 此模块定义了 harness 的核心数据结构：分解后的测试标识符、
//! 测试体抛出的故障，以及为每个执行的测试持久化的结果记录。

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// The documented identifier form reported by the execution engine.
static TEST_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^test_(.+)\((.+)\)$").expect("test id pattern"));

/// Suite assigned to identifiers that do not match the documented form.
pub const ANONYMOUS_SUITE: &str = "anonymous";

/// A test identifier decomposed into its suite and bare test name.
///
/// The execution engine reports identifiers of the form
/// `test_<name>(<suite>)`. Anything else falls back to the whole string as
/// an anonymous test name under the suite `"anonymous"`.
///
/// 将测试标识符分解为套件名和测试名。
/// 执行引擎报告的标识符形如 `test_<name>(<suite>)`；
/// 其他形式退化为 `"anonymous"` 套件下的匿名测试名。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestId {
    pub suite: String,
    pub name: String,
}

impl TestId {
    pub fn parse(raw: &str) -> Self {
        match TEST_ID_RE.captures(raw) {
            Some(caps) => Self {
                suite: caps[2].to_string(),
                name: caps[1].to_string(),
            },
            None => Self {
                suite: ANONYMOUS_SUITE.to_string(),
                name: raw.to_string(),
            },
        }
    }

    /// Builds the encoded identifier from its components.
    pub fn encode(suite: &str, name: &str) -> String {
        format!("test_{name}({suite})")
    }
}

/// Distinguishes a test that checked something and found it wrong from a
/// test that blew up before it could finish checking.
/// 区分“检查到结果不符”的测试与“尚未完成检查就崩溃”的测试。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaultKind {
    /// An assertion-style failure raised by the test body.
    Failure,
    /// Any other error or panic escaping the test body.
    Error,
}

impl FaultKind {
    pub fn single_character(self) -> char {
        match self {
            FaultKind::Failure => 'F',
            FaultKind::Error => 'E',
        }
    }
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FaultKind::Failure => write!(f, "Failure"),
            FaultKind::Error => write!(f, "Error"),
        }
    }
}

/// A failure or error observed while a test body ran. Faults are recorded,
/// never fatal to the run; a single test can accumulate several of them.
///
/// 测试体运行期间观察到的失败或错误。故障只被记录，
/// 不会终止整次运行；单个测试可以累积多个故障。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fault {
    pub kind: FaultKind,
    /// Raw identifier of the test the fault was observed in.
    pub test_id: String,
    pub message: String,
    /// Cause chain or backtrace detail, when available.
    #[serde(default)]
    pub backtrace: Option<String>,
}

impl Fault {
    pub fn failure(test_id: &str, message: impl Into<String>) -> Self {
        Self {
            kind: FaultKind::Failure,
            test_id: test_id.to_string(),
            message: message.into(),
            backtrace: None,
        }
    }

    pub fn error(test_id: &str, message: impl Into<String>, backtrace: Option<String>) -> Self {
        Self {
            kind: FaultKind::Error,
            test_id: test_id.to_string(),
            message: message.into(),
            backtrace,
        }
    }

    /// The one-character progress indicator echoed while a run is in flight.
    pub fn single_character_display(&self) -> char {
        self.kind.single_character()
    }

    /// Full multi-line rendering used in the end-of-run fault list.
    pub fn long_display(&self) -> String {
        let mut out = format!("{}:\n{}\n{}", self.kind, self.test_id, self.message);
        if let Some(backtrace) = &self.backtrace {
            out.push('\n');
            out.push_str(backtrace);
        }
        out
    }
}

/// The error type a test body returns to report an assertion-style failure.
/// Any other error escaping a body is classified as [`FaultKind::Error`].
#[derive(Debug)]
pub struct TestFailure(pub String);

impl TestFailure {
    /// Convenience constructor for use in `return Err(...)` positions.
    pub fn err(message: impl Into<String>) -> anyhow::Error {
        anyhow::Error::new(Self(message.into()))
    }
}

impl fmt::Display for TestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for TestFailure {}

/// Final classification of one executed test.
/// 单个已执行测试的最终状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestStatus {
    Passed,
    Failed,
    Errored,
}

impl TestStatus {
    pub fn is_pass(self) -> bool {
        matches!(self, TestStatus::Passed)
    }
}

/// The durable result of one executed test.
///
/// Created when the orchestrator observes the test-start event, finalized
/// and persisted on the matching test-end event, never mutated thereafter.
/// Exactly one record and one raw log file exist per executed test, both
/// named deterministically from `(suite_name, test_name)`.
///
/// 单个已执行测试的持久化结果。
/// 在协调器观察到测试开始事件时创建，在对应的测试结束事件时定稿并
/// 持久化，此后不再修改。每个已执行测试恰好对应一条记录和一份原始
/// 日志文件，两者都根据 `(suite_name, test_name)` 确定性命名。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeRecord {
    pub suite_name: String,
    pub test_name: String,
    pub status: TestStatus,
    /// Every fault observed for this test, in arrival order.
    #[serde(default)]
    pub faults: Vec<Fault>,
    /// Location of the raw captured log for this test run.
    pub log_path: PathBuf,
}

impl OutcomeRecord {
    pub fn new(suite_name: String, test_name: String, log_path: PathBuf) -> Self {
        Self {
            suite_name,
            test_name,
            status: TestStatus::Passed,
            faults: Vec::new(),
            log_path,
        }
    }

    /// Attaches a fault and reclassifies the record. `Errored` dominates
    /// `Failed` when a test accumulates faults of both kinds.
    pub fn record_fault(&mut self, fault: Fault) {
        self.status = match (self.status, fault.kind) {
            (TestStatus::Errored, _) | (_, FaultKind::Error) => TestStatus::Errored,
            _ => TestStatus::Failed,
        };
        self.faults.push(fault);
    }

    pub fn is_pass(&self) -> bool {
        self.status.is_pass()
    }

    /// Persists the record as one JSON document.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize outcome record")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write outcome record: {}", path.display()))
    }

    /// Loads a previously persisted record. Load-then-save reproduces an
    /// equivalent record.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read outcome record: {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse outcome record: {}", path.display()))
    }
}

/// Aggregate pass/fail counts over one run. Computed from the per-suite
/// outcome lists, not persisted as a distinct entity.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunTotals {
    pub run: usize,
    pub passed: usize,
    pub failed: usize,
}
