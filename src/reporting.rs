//! # Reporting Module / 报告模块
//!
//! This module handles console output for a harness run: verbosity-gated
//! progress characters, the numbered fault list, and the final tally.
//! Persisted outcome records are the input of external report generators
//! and are not rendered here.
//!
//! 此模块处理一次运行的控制台输出：受详细级别控制的进度字符、
//! 带编号的故障列表以及最终统计。持久化的结果记录由外部报告
//! 生成器消费，不在此处渲染。

pub mod console;

// Re-export common reporting types
pub use console::{ConsoleOutput, OutputLevel};
