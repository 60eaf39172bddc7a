//! Custom Test Assertions
//!
//! Provides assertion helpers for field errors that name the failing path
//! and the full error set in their panic messages.

use domain_party::{FieldErrors, Rule, ValidationReport};

/// Asserts that `path` failed with `rule`
///
/// # Panics
///
/// Panics if the path has no error or failed with a different rule
pub fn assert_field_error(errors: &FieldErrors, path: &str, rule: Rule) {
    match errors.get(path) {
        Some(error) => assert_eq!(
            error.rule, rule,
            "Expected {path} to fail with {rule:?}, got {:?} ({})",
            error.rule, error.message
        ),
        None => panic!("Expected {path} to fail with {rule:?}, but it passed; errors: {errors}"),
    }
}

/// Asserts that `path` has no error
pub fn assert_no_field_error(errors: &FieldErrors, path: &str) {
    if let Some(error) = errors.get(path) {
        panic!("Expected {path} to pass, got {:?} ({})", error.rule, error.message);
    }
}

/// Asserts that a report is valid
pub fn assert_report_valid(report: &ValidationReport) {
    assert!(
        report.valid && report.errors.is_empty(),
        "Expected a valid report, got errors: {:?}",
        report.errors
    );
}

/// Asserts that a report carries `message` at `path`
pub fn assert_report_message(report: &ValidationReport, path: &str, message: &str) {
    assert!(!report.valid, "Expected an invalid report");
    assert_eq!(
        report.message(path),
        Some(message),
        "Unexpected message at {path}; errors: {:?}",
        report.errors
    );
}
