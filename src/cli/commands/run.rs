//! # Run Command Module / 运行命令模块
//!
//! This module implements the `run` command: it loads the profile, selects
//! test cases from the built-in suites, and hands them to the orchestrated
//! engine. Test faults are absorbed into outcome records and never fail
//! this command; only harness errors propagate to the top level.
//!
//! 此模块实现 `run` 命令：加载配置、从内置套件中选择测试用例，
//! 并交给带协调器的引擎执行。测试故障被吸收进结果记录，
//! 不会使本命令失败；只有 harness 自身的错误才会上抛到顶层。

use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::path::PathBuf;

use crate::{
    core::{
        config,
        execution::{ExecutionEngine, HarnessEngine},
        orchestrator::RunOrchestrator,
        selector::{self, NameFilter},
    },
    infra::{fs::RunDirs, logging, t},
    reporting::console::ConsoleOutput,
    suites,
};

/// Executes the run command with the provided arguments.
///
/// # Arguments
/// * `profile_path` - Path to the harness profile file
/// * `output_dir` - Optional override for the profile's output directory
/// * `suite_names` - Names of the suites to run
/// * `test_names` - Exact-name filters over test names
/// * `patterns` - Regular-expression filters over test names
/// * `quiet` / `verbose` - Console output level flags
pub fn execute(
    profile_path: PathBuf,
    output_dir: Option<PathBuf>,
    suite_names: Vec<String>,
    test_names: Vec<String>,
    patterns: Vec<String>,
    quiet: bool,
    verbose: bool,
) -> Result<()> {
    let profile_path = fs::canonicalize(&profile_path).with_context(|| {
        t!("profile_read_failed", path = profile_path.display()).to_string()
    })?;
    let profile = config::load_profile(&profile_path)?;
    rust_i18n::set_locale(&profile.language);
    let locale: &str = &profile.language;

    if !quiet {
        println!(
            "{}",
            t!("run_profile_loaded", locale = locale, path = profile_path.display())
        );
        println!(
            "{}",
            t!(
                "run_target_device",
                locale = locale,
                device = profile.target.device.display().to_string().yellow()
            )
        );
    }

    let mut filters: Vec<NameFilter> = test_names.into_iter().map(NameFilter::ExactMatch).collect();
    for raw in &patterns {
        filters.push(NameFilter::pattern(raw)?);
    }

    let cases = selector::select_cases(suites::builtin_suites(), &suite_names, &filters)?;
    if cases.is_empty() {
        println!("{}", t!("run_no_cases", locale = locale).green());
        return Ok(());
    }

    let output_root = output_dir.unwrap_or_else(|| profile.output_dir.clone());
    let dirs = RunDirs::create(&output_root)?;
    if !quiet {
        println!(
            "{}",
            t!("run_output_dir", locale = locale, path = dirs.root.display())
        );
    }

    let log = logging::new_handle();
    let console = ConsoleOutput::from_flags(quiet, verbose);
    let mut orchestrator = RunOrchestrator::new(console, dirs, log.clone());
    let mut engine = HarnessEngine::new(profile.target.device.clone(), log);
    engine.execute(&cases, &mut orchestrator)?;
    Ok(())
}
