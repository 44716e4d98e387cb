//! # Test Selector Module / 测试选择模块
//!
//! Thin filter composition in front of the orchestrator: resolves the
//! suites named by the operator and applies zero or more name filters to
//! their cases. The filtered, ordered case collection is the orchestrator's
//! only input.
//!
//! 协调器前的轻量过滤组合：解析操作者指定的套件，并对其用例
//! 应用零个或多个名称过滤器。过滤后的有序用例集合是协调器的
//! 唯一输入。

use anyhow::{Context, Result, bail};
use regex::Regex;
use std::collections::BTreeMap;

use crate::core::models::TestId;
use crate::core::suite::{TestCase, TestSuite};

/// A single user-configured selection predicate over the bare test name.
#[derive(Debug)]
pub enum NameFilter {
    ExactMatch(String),
    PatternMatch(Regex),
}

impl NameFilter {
    /// Compiles a pattern filter, reporting bad patterns before the run.
    pub fn pattern(raw: &str) -> Result<Self> {
        let re = Regex::new(raw)
            .with_context(|| format!("Invalid test filter pattern: {raw}"))?;
        Ok(Self::PatternMatch(re))
    }

    fn accepts(&self, id: &TestId) -> bool {
        match self {
            NameFilter::ExactMatch(name) => name == &id.name,
            NameFilter::PatternMatch(re) => re.is_match(&id.name),
        }
    }
}

/// Resolves the named suites and applies the configured filters.
///
/// With no filters, every case of the named suites is kept. With any filter
/// configured, a case matching none of them falls through to an implicit
/// trailing reject. Case order within and across suites is preserved.
///
/// Errors when no suite is named at all, or when a name resolves to no
/// registered suite; both are reported before any test runs.
pub fn select_cases(
    suites: Vec<TestSuite>,
    suite_names: &[String],
    filters: &[NameFilter],
) -> Result<Vec<TestCase>> {
    if suite_names.is_empty() {
        bail!("No suite specified; pass at least one --suite");
    }

    let mut by_name: BTreeMap<String, TestSuite> = suites
        .into_iter()
        .map(|suite| (suite.name.clone(), suite))
        .collect();

    let mut selected = Vec::new();
    for wanted in suite_names {
        let Some(suite) = by_name.remove(wanted) else {
            bail!("Unknown suite: {wanted}");
        };
        for case in suite.cases {
            let id = TestId::parse(&case.id);
            if filters.is_empty() || filters.iter().any(|filter| filter.accepts(&id)) {
                selected.push(case);
            }
        }
    }
    Ok(selected)
}
