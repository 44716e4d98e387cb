//! # Console Reporting Module / 控制台报告模块
//!
//! Verbosity-gated console output for a harness run: the progress line of
//! one character per test, the numbered end-of-run fault list, and the
//! final tally, with color coding for different statuses.
//!
//! 一次运行的受详细级别控制的控制台输出：每个测试一个字符的
//! 进度行、运行结束时带编号的故障列表，以及最终统计，
//! 并使用颜色区分不同状态。

use colored::*;
use std::io::{self, Write};

use crate::core::models::{Fault, FaultKind, RunTotals};

/// Configured output level; a write is emitted only if its own required
/// level is at or below this.
/// 配置的输出级别；仅当写操作所需级别不高于此级别时才输出。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum OutputLevel {
    Quiet,
    Normal,
    Verbose,
}

/// Console writer for one run.
pub struct ConsoleOutput {
    level: OutputLevel,
}

impl ConsoleOutput {
    pub fn new(level: OutputLevel) -> Self {
        Self { level }
    }

    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        let level = if quiet {
            OutputLevel::Quiet
        } else if verbose {
            OutputLevel::Verbose
        } else {
            OutputLevel::Normal
        };
        Self { level }
    }

    pub fn level(&self) -> OutputLevel {
        self.level
    }

    /// Prints a line if the configured level admits it.
    pub fn line(&self, required: OutputLevel, text: impl AsRef<str>) {
        if self.level >= required {
            println!("{}", text.as_ref());
        }
    }

    /// One-character progress output, flushed immediately so a long-running
    /// suite shows live progress. Suppressed in verbose mode, where test
    /// names are echoed instead of dots.
    pub fn progress(&self, c: char) {
        if self.level == OutputLevel::Normal {
            print!("{c}");
            let _ = io::stdout().flush();
        }
    }

    /// Numbered list of every fault accumulated over the run, full detail.
    pub fn fault_list(&self, faults: &[Fault]) {
        if self.level < OutputLevel::Normal || faults.is_empty() {
            return;
        }
        for (i, fault) in faults.iter().enumerate() {
            let display = fault.long_display();
            let display = match fault.kind {
                FaultKind::Failure => display.red(),
                FaultKind::Error => display.red().bold(),
            };
            println!("\n{:>3}) {}", i + 1, display);
        }
    }

    /// Final tally line: total run, total passed, total failed.
    pub fn tally(&self, totals: RunTotals) {
        if self.level < OutputLevel::Normal {
            return;
        }
        let passed = format!("{} passed", totals.passed).green();
        let failed = format!("{} failed", totals.failed);
        let failed = if totals.failed == 0 {
            failed.green()
        } else {
            failed.red().bold()
        };
        println!("\n{} tests, {}, {}", totals.run, passed, failed);
    }
}
