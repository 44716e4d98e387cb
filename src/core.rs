//! # Core Module / 核心模块
//!
//! This module contains the core functionality of blockharness,
//! including the outcome data model, log reconstruction, test selection,
//! and the event-driven run orchestrator.
//!
//! 此模块包含 blockharness 的核心功能，
//! 包括结果数据模型、日志重建、测试选择和事件驱动的运行协调器。

pub mod config;
pub mod execution;
pub mod logparse;
pub mod models;
pub mod orchestrator;
pub mod selector;
pub mod suite;

// Re-exports
pub use execution::{ExecutionEngine, HarnessEngine, RunListener};
pub use models::OutcomeRecord;
pub use orchestrator::RunOrchestrator;
