//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! enrollment validation test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built people and raw values that pass or fail validation
//! - `builders`: Builder patterns for raw forms and enrollment pairs
//! - `assertions`: Assertion helpers for field errors and reports
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
