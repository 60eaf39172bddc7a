//! Enrollment pairs and cross-record rules
//!
//! An enrollment pair is one submission unit: an insured person, their
//! beneficiary, and two flags saying whether either of them is the applicant.
//!
//! # Business Rules
//!
//! - The insured and the beneficiary cannot both be the applicant. The
//!   failure is attached to `isBeneficiarySameAsApplicant`, the flag the user
//!   toggles last in the form flow.
//! - If the applicant already appears as an insured or beneficiary in any
//!   submitted pair, the health disclosure step is skipped.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::config::RuleConfig;
use crate::error::EnrollmentError;
use crate::field::{FieldError, Rule};
use crate::person::{Beneficiary, BeneficiaryForm, Identity, Insured, InsuredForm};
use crate::validation::{FieldErrors, PersonValidator, ValidationReport};

/// Path of the insured record inside a pair
pub const INSURED_PATH: &str = "insured";
/// Path of the beneficiary record inside a pair
pub const BENEFICIARY_PATH: &str = "beneficiary";
/// Path of the flag that carries the sameness conflict
pub const BENEFICIARY_SAME_AS_APPLICANT_PATH: &str = "isBeneficiarySameAsApplicant";

/// Raw enrollment pair as held by the multi-step form
///
/// `Default` is the empty pair a new application starts from: blank
/// records and both flags off.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnrollmentPairForm {
    pub insured: InsuredForm,
    pub beneficiary: BeneficiaryForm,
    pub is_insured_same_as_applicant: bool,
    pub is_beneficiary_same_as_applicant: bool,
}

impl EnrollmentPairForm {
    /// Creates an empty pair for a new application
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `person` is the insured or the beneficiary of this pair
    pub fn involves<I: Identity + ?Sized>(&self, person: &I) -> bool {
        person.is_same_person(&self.insured) || person.is_same_person(&self.beneficiary)
    }
}

/// A fully validated enrollment pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentPair {
    pub insured: Insured,
    pub beneficiary: Beneficiary,
    pub is_insured_same_as_applicant: bool,
    pub is_beneficiary_same_as_applicant: bool,
}

/// Checks that at most one of the two "same as applicant" flags is set
pub fn check_same_as_applicant(
    is_insured_same_as_applicant: bool,
    is_beneficiary_same_as_applicant: bool,
) -> Result<(), FieldError> {
    if is_insured_same_as_applicant && is_beneficiary_same_as_applicant {
        return Err(FieldError::with_args("", Rule::SameAsApplicantConflict, &[]));
    }
    Ok(())
}

/// Validator for whole enrollment pairs
#[derive(Debug, Clone, Default)]
pub struct EnrollmentValidator {
    persons: PersonValidator,
}

impl EnrollmentValidator {
    pub fn new(config: &RuleConfig) -> Result<Self, EnrollmentError> {
        Ok(Self {
            persons: PersonValidator::new(config)?,
        })
    }

    /// Validates both records and the cross-record rule
    ///
    /// Every failure is collected: errors in the insured record do not hide
    /// errors in the beneficiary record or the flag conflict.
    #[instrument(skip_all)]
    pub fn validate(&self, pair: &EnrollmentPairForm) -> Result<EnrollmentPair, FieldErrors> {
        let insured = self.persons.validate_insured(&pair.insured);
        let beneficiary = self.persons.validate_beneficiary(&pair.beneficiary);
        let flags = check_same_as_applicant(
            pair.is_insured_same_as_applicant,
            pair.is_beneficiary_same_as_applicant,
        );

        let mut errors = FieldErrors::new();
        let insured = match insured {
            Ok(insured) => Some(insured),
            Err(e) => {
                errors.extend(e.nested(INSURED_PATH));
                None
            }
        };
        let beneficiary = match beneficiary {
            Ok(beneficiary) => Some(beneficiary),
            Err(e) => {
                errors.extend(e.nested(BENEFICIARY_PATH));
                None
            }
        };
        if let Err(conflict) = flags {
            debug!("insured and beneficiary both marked as the applicant");
            errors.insert(BENEFICIARY_SAME_AS_APPLICANT_PATH, conflict);
        }

        match (insured, beneficiary) {
            (Some(insured), Some(beneficiary)) if errors.is_empty() => Ok(EnrollmentPair {
                insured,
                beneficiary,
                is_insured_same_as_applicant: pair.is_insured_same_as_applicant,
                is_beneficiary_same_as_applicant: pair.is_beneficiary_same_as_applicant,
            }),
            _ => {
                debug!(failed = errors.len(), "enrollment pair rejected");
                Err(errors)
            }
        }
    }
}

/// Validates a pair with the default rules
pub fn validate_enrollment_pair(
    pair: &EnrollmentPairForm,
) -> Result<EnrollmentPair, FieldErrors> {
    EnrollmentValidator::default().validate(pair)
}

/// Validates a pair into the `{ valid, errors }` report shape
pub fn enrollment_pair_report(pair: &EnrollmentPairForm) -> ValidationReport {
    ValidationReport::from(&validate_enrollment_pair(pair))
}

/// Which screens the application flow goes through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Workflow {
    /// The applicant must complete the health disclosure step
    WithDisclosure,
    /// The applicant is already a party to a pair; disclosure is skipped
    SkipDisclosure,
}

/// Classifies the workflow for `applicant` given the submitted pairs
///
/// Any pair whose insured or beneficiary matches the applicant's last name,
/// first name, and birth date exactly is enough to skip disclosure.
pub fn classify_workflow<A: Identity + ?Sized>(
    pairs: &[EnrollmentPairForm],
    applicant: &A,
) -> Workflow {
    if pairs.iter().any(|pair| pair.involves(applicant)) {
        Workflow::SkipDisclosure
    } else {
        Workflow::WithDisclosure
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::ApplicantIdentity;

    #[test]
    fn test_new_pair_is_empty() {
        let pair = EnrollmentPairForm::new();
        assert!(!pair.is_insured_same_as_applicant);
        assert!(!pair.is_beneficiary_same_as_applicant);
        assert_eq!(pair.insured, InsuredForm::default());
    }

    #[test]
    fn test_flag_combinations() {
        assert!(check_same_as_applicant(false, false).is_ok());
        assert!(check_same_as_applicant(true, false).is_ok());
        assert!(check_same_as_applicant(false, true).is_ok());

        let error = check_same_as_applicant(true, true).unwrap_err();
        assert_eq!(error.rule, Rule::SameAsApplicantConflict);
        assert_eq!(error.kind, crate::field::ErrorKind::CrossField);
    }

    #[test]
    fn test_empty_pair_collects_both_records() {
        let errors = validate_enrollment_pair(&EnrollmentPairForm::new()).unwrap_err();
        assert!(errors.contains("insured.lastName"));
        assert!(errors.contains("beneficiary.lastName"));
        assert!(!errors.contains("beneficiary.gender"));
        assert!(!errors.contains(BENEFICIARY_SAME_AS_APPLICANT_PATH));
    }

    #[test]
    fn test_classify_empty_list() {
        let applicant = ApplicantIdentity::default();
        assert_eq!(classify_workflow(&[], &applicant), Workflow::WithDisclosure);
    }

    #[test]
    fn test_workflow_serializes_kebab_case() {
        let json = serde_json::to_string(&Workflow::SkipDisclosure).unwrap();
        assert_eq!(json, "\"skip-disclosure\"");
    }
}
