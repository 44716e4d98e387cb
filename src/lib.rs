//! # Blockharness Library / Blockharness 库
//!
//! This library provides the core functionality for the blockharness tool,
//! a harness that runs suites of integration tests against block-storage
//! device targets, capturing one raw log and one durable outcome record
//! per executed test.
//!
//! 此库为 blockharness 工具提供核心功能，
//! 这是一个针对块存储设备目标运行集成测试套件的工具，
//! 为每个执行的测试捕获一份原始日志和一条持久化的结果记录。
//!
//! ## Modules / 模块
//!
//! - `core` - Data models, log reconstruction, and the run orchestrator
//! - `infra` - Infrastructure services like file system layout and log routing
//! - `reporting` - Console progress and summary output
//! - `suites` - Built-in test suites for block-storage targets
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 数据模型、日志重建和运行协调器
//! - `infra` - 基础设施服务，如文件系统布局和日志路由
//! - `reporting` - 控制台进度和摘要输出
//! - `suites` - 针对块存储目标的内置测试套件
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;
pub mod suites;

// Re-export commonly used items
pub use core::logparse;
pub use core::models;
pub use core::orchestrator;

rust_i18n::i18n!("locales", fallback = "en");

/// Initializes the application's internationalization (i18n) based on the system locale.
///
/// This function detects the user's system locale and sets the appropriate
/// language for the application's user interface. It attempts to match the full
/// locale (e.g., "zh-CN"), then just the language code (e.g., "en"), and
/// finally falls back to the default language ("en").
pub fn init() {
    // Detect system locale and set it for i18n.
    // Fallback to "en" if detection fails.
    let locale = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    let supported = rust_i18n::available_locales!();

    if supported.iter().any(|l| *l == locale) {
        rust_i18n::set_locale(&locale);
        return;
    }

    if let Some(language) = locale.split('-').next() {
        if supported.iter().any(|l| *l == language) {
            rust_i18n::set_locale(language);
            return;
        }
    }

    rust_i18n::set_locale("en");
}
