//! Enrollment Validation CLI
//!
//! Reads an enrollment submission as JSON, validates every pair, classifies
//! the application workflow, and reports the result as JSON.
//!
//! # Input
//!
//! ```json
//! {
//!   "applicant": { "lastName": "田中", "firstName": "太郎", "birthDate": "1985-03-15" },
//!   "pairs": [{ "insured": { ... }, "beneficiary": { ... },
//!               "isInsuredSameAsApplicant": true, "isBeneficiarySameAsApplicant": false }]
//! }
//! ```

pub mod config;
pub mod error;
pub mod submission;

pub use config::CliConfig;
pub use error::CliError;
pub use submission::{
    PairReport, PairSummary, PersonSummary, Submission, SubmissionReport, SubmissionValidator,
};
