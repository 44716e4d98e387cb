//! # Test Selector Unit Tests / 测试选择单元测试

use blockharness::core::selector::{NameFilter, select_cases};
use blockharness::core::suite::{TestContext, TestSuite};

fn noop(_ctx: &mut TestContext) -> anyhow::Result<()> {
    Ok(())
}

fn sample_suites() -> Vec<TestSuite> {
    vec![
        TestSuite::new("basic_io")
            .case("sequential_write_read", noop)
            .case("scattered_offsets", noop)
            .case("rewrite_stability", noop),
        TestSuite::new("integrity")
            .case("boundary_straddle", noop)
            .case("high_offset_roundtrip", noop),
    ]
}

fn names(cases: &[blockharness::core::suite::TestCase]) -> Vec<&str> {
    cases.iter().map(|c| c.id.as_str()).collect()
}

#[test]
fn no_filters_keeps_all_cases_in_order() {
    let cases = select_cases(sample_suites(), &["basic_io".to_string()], &[]).unwrap();
    assert_eq!(
        names(&cases),
        vec![
            "test_sequential_write_read(basic_io)",
            "test_scattered_offsets(basic_io)",
            "test_rewrite_stability(basic_io)"
        ]
    );
}

#[test]
fn suites_are_selected_in_requested_order() {
    let wanted = vec!["integrity".to_string(), "basic_io".to_string()];
    let cases = select_cases(sample_suites(), &wanted, &[]).unwrap();
    assert_eq!(cases.len(), 5);
    assert!(cases[0].id.ends_with("(integrity)"));
    assert!(cases[2].id.ends_with("(basic_io)"));
}

#[test]
fn exact_filter_keeps_only_matching_case() {
    let filters = vec![NameFilter::ExactMatch("scattered_offsets".to_string())];
    let cases = select_cases(sample_suites(), &["basic_io".to_string()], &filters).unwrap();
    assert_eq!(names(&cases), vec!["test_scattered_offsets(basic_io)"]);
}

#[test]
fn pattern_filter_matches_by_regex() {
    let filters = vec![NameFilter::pattern("^re").unwrap()];
    let cases = select_cases(sample_suites(), &["basic_io".to_string()], &filters).unwrap();
    assert_eq!(names(&cases), vec!["test_rewrite_stability(basic_io)"]);
}

#[test]
fn any_matching_filter_accepts_the_case() {
    // Union of an exact filter and a pattern filter; everything else is
    // rejected by the implicit trailing reject.
    let filters = vec![
        NameFilter::ExactMatch("boundary_straddle".to_string()),
        NameFilter::pattern("sequential").unwrap(),
    ];
    let wanted = vec!["basic_io".to_string(), "integrity".to_string()];
    let cases = select_cases(sample_suites(), &wanted, &filters).unwrap();
    assert_eq!(
        names(&cases),
        vec![
            "test_sequential_write_read(basic_io)",
            "test_boundary_straddle(integrity)"
        ]
    );
}

#[test]
fn no_suite_specified_is_an_error() {
    let err = select_cases(sample_suites(), &[], &[]).unwrap_err();
    assert!(err.to_string().contains("No suite specified"));
}

#[test]
fn unknown_suite_is_an_error() {
    let err = select_cases(sample_suites(), &["thin_pool".to_string()], &[]).unwrap_err();
    assert!(err.to_string().contains("Unknown suite: thin_pool"));
}

#[test]
fn invalid_pattern_is_reported_before_the_run() {
    let err = NameFilter::pattern("(unclosed").unwrap_err();
    assert!(err.to_string().contains("Invalid test filter pattern"));
}
