//! Enrollment Party Domain
//!
//! This crate validates and normalizes the people named on an insurance
//! application: the insured person and the beneficiary of each enrollment
//! pair, plus the applicant whose identity decides the application flow.
//!
//! # Validation Model
//!
//! Validation runs in three layers:
//!
//! - **Field schemas**: one ordered rule chain per field. The first failing
//!   rule decides the field's error message.
//! - **Record schemas**: an insured record uses every field; a beneficiary
//!   record omits gender, phone number, and email.
//! - **Cross-record rules**: within a pair, the insured and the beneficiary
//!   cannot both be the applicant.
//!
//! Error messages are user-facing Japanese text rendered from a Fluent
//! catalog compiled into the crate.
//!
//! # Examples
//!
//! ```rust
//! use domain_party::{classify_workflow, ApplicantIdentity, EnrollmentPairForm, Workflow};
//!
//! let applicant = ApplicantIdentity {
//!     last_name: "田中".to_string(),
//!     first_name: "太郎".to_string(),
//!     birth_date: "1985-03-15".to_string(),
//! };
//!
//! let mut pair = EnrollmentPairForm::new();
//! pair.insured.last_name = "田中".to_string();
//! pair.insured.first_name = "太郎".to_string();
//! pair.insured.birth_date = "1985-03-15".to_string();
//!
//! assert_eq!(classify_workflow(&[pair], &applicant), Workflow::SkipDisclosure);
//! ```

pub mod address;
pub mod config;
pub mod documents;
pub mod enrollment;
pub mod error;
pub mod field;
pub mod messages;
pub mod person;
pub mod validation;

pub use address::Address;
pub use config::RuleConfig;
pub use documents::{IdentityDocument, UploadSlots};
pub use enrollment::{
    check_same_as_applicant, classify_workflow, enrollment_pair_report, validate_enrollment_pair,
    EnrollmentPair, EnrollmentPairForm, EnrollmentValidator, Workflow,
    BENEFICIARY_PATH, BENEFICIARY_SAME_AS_APPLICANT_PATH, INSURED_PATH,
};
pub use error::EnrollmentError;
pub use field::{validate_field, ErrorKind, Field, FieldError, FieldReport, FieldRules, Rule};
pub use messages::MessageCatalog;
pub use person::{
    ApplicantIdentity, Beneficiary, BeneficiaryForm, Gender, Identity, Insured, InsuredForm,
    Person, PersonForm, PersonName, PersonVariant, Relationship,
};
pub use validation::{
    validate_person_fields, validate_person_record, FieldErrors, PersonValidator, ValidationReport,
};
