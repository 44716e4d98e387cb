//! # File System Layout Module / 文件系统布局模块
//!
//! This module owns the on-disk layout of a harness run: the directories
//! that hold per-test raw logs and outcome records, and the sanitization
//! rule that turns suite/test names into filesystem-safe path components.
//!
//! 此模块负责一次运行在磁盘上的布局：存放每个测试的原始日志和
//! 结果记录的目录，以及将套件/测试名转换为文件系统安全路径段的
//! 转义规则。

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Escapes a suite or test name into a filesystem-safe path component.
///
/// Characters outside `[A-Za-z0-9_-]` are written as `%XX` hex escapes and
/// `%` itself is escaped, so the mapping is injective: two distinct
/// identifiers can never collide on disk. The same rule names both the raw
/// log file and the outcome record, which is how the two are correlated.
pub fn sanitize_component(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for byte in name.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'_' | b'-' => out.push(byte as char),
            _ => {
                out.push('%');
                out.push_str(&format!("{byte:02X}"));
            }
        }
    }
    out
}

/// On-disk layout for one harness run.
/// 一次运行在磁盘上的目录布局。
#[derive(Debug, Clone)]
pub struct RunDirs {
    pub root: PathBuf,
    /// Raw per-test log files.
    pub logs: PathBuf,
    /// Persisted outcome records, one JSON document per test.
    pub outcomes: PathBuf,
}

impl RunDirs {
    /// Bootstraps the run directories, creating them as needed.
    pub fn create(root: &Path) -> Result<Self> {
        let logs = root.join("logs");
        let outcomes = root.join("outcomes");
        fs::create_dir_all(&logs)
            .with_context(|| format!("Failed to create log directory: {}", logs.display()))?;
        fs::create_dir_all(&outcomes).with_context(|| {
            format!("Failed to create outcome directory: {}", outcomes.display())
        })?;
        Ok(Self {
            root: root.to_path_buf(),
            logs,
            outcomes,
        })
    }

    /// Deterministic location of the raw log for `(suite, test)`.
    pub fn log_path(&self, suite: &str, test: &str) -> PathBuf {
        self.logs.join(format!(
            "{}.{}.log",
            sanitize_component(suite),
            sanitize_component(test)
        ))
    }

    /// Deterministic location of the outcome record for `(suite, test)`.
    pub fn outcome_path(&self, suite: &str, test: &str) -> PathBuf {
        self.outcomes.join(format!(
            "{}.{}.json",
            sanitize_component(suite),
            sanitize_component(test)
        ))
    }
}
