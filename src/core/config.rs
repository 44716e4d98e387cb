//! # Profile Configuration Module / 配置文件模块
//!
//! Loads the harness profile: which block-storage target to run against
//! and where to put captured logs and outcome records.
//!
//! 加载 harness 配置：针对哪个块存储目标运行，以及捕获的日志和
//! 结果记录放在何处。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// The block-storage target a run executes against.
/// 一次运行所针对的块存储目标。
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TargetProfile {
    /// Path to the device, or an ordinary file standing in for one.
    /// 设备路径，也可以用普通文件代替。
    pub device: PathBuf,
}

/// The harness profile, loaded from a TOML file.
/// 从 TOML 文件加载的 harness 配置。
#[derive(Debug, Deserialize, Serialize)]
pub struct Profile {
    /// The language for the harness's informational messages (e.g. "en",
    /// "zh-CN"). Defaults to "en" if not specified.
    ///
    /// harness 提示消息的语言（例如 "en"、"zh-CN"）。
    /// 未指定时默认为 "en"。
    #[serde(default = "default_language")]
    pub language: String,

    /// Root directory for per-test logs and outcome records.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    pub target: TargetProfile,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("harness-results")
}

/// Reads and parses a profile, expanding `~` in its paths.
pub fn load_profile(path: &Path) -> Result<Profile> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile: {}", path.display()))?;
    let mut profile: Profile = toml::from_str(&raw)
        .with_context(|| format!("Failed to parse profile: {}", path.display()))?;
    profile.target.device = expand(&profile.target.device);
    profile.output_dir = expand(&profile.output_dir);
    Ok(profile)
}

fn expand(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}
