//! # Show-Log Command Module / 日志查看命令模块
//!
//! Renders a captured raw per-test log as its reconstructed structured
//! messages, color-coded by level.
//!
//! 将捕获的测试原始日志渲染为重建后的结构化消息，按级别着色。

use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::path::Path;

use crate::core::logparse::{self, MessageLevel};

pub fn execute(path: &Path) -> Result<()> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read log file: {}", path.display()))?;

    for message in logparse::messages(&raw) {
        let message = message?;
        let label = format!("{:5}", message.level.to_string());
        let label = match message.level {
            MessageLevel::Debug => label.dimmed(),
            MessageLevel::Info => label.green(),
            MessageLevel::Warn => label.yellow(),
            MessageLevel::Error => label.red().bold(),
        };
        // The body keeps its trailing newline; print! avoids doubling it.
        print!("[{}] {} {}", message.time.cyan(), label, message.text);
    }
    Ok(())
}
