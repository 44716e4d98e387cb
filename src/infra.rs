//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for blockharness,
//! including the on-disk run layout, name sanitization, the routed
//! log sink, and i18n support.
//!
//! 此模块为 blockharness 提供基础设施服务，
//! 包括磁盘上的运行目录布局、名称转义、可路由的日志输出和国际化支持。

pub mod fs;
pub mod logging;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
