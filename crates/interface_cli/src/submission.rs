//! Enrollment submissions and their reports

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use core_kernel::{format_for_display, format_wareki, normalize_half_width};
use domain_party::{
    classify_workflow, Address, ApplicantIdentity, EnrollmentPair, EnrollmentPairForm,
    EnrollmentValidator, PersonName, RuleConfig, ValidationReport, Workflow,
};

use crate::error::CliError;

/// What the form layer submits at the end of the application
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Submission {
    pub applicant: ApplicantIdentity,
    pub pairs: Vec<EnrollmentPairForm>,
}

impl Submission {
    /// Parses a submission from JSON text
    pub fn from_json(input: &str) -> Result<Self, CliError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Converts full-width digits and symbols in the half-width-only fields
    pub fn normalize_half_width(&mut self) {
        for pair in &mut self.pairs {
            let insured = &mut pair.insured;
            insured.phone_number = normalize_half_width(&insured.phone_number);
            insured.email = normalize_half_width(&insured.email);
            insured.postal_code = normalize_half_width(&insured.postal_code);

            let beneficiary = &mut pair.beneficiary;
            beneficiary.postal_code = normalize_half_width(&beneficiary.postal_code);
        }
    }
}

/// A validated person as shown on the confirmation screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonSummary {
    pub name: String,
    pub name_kana: String,
    pub birth_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date_wareki: Option<String>,
    pub address: String,
}

impl PersonSummary {
    fn new(
        name: &PersonName,
        birth_date: NaiveDate,
        address: &Address,
        placeholder: &str,
    ) -> Self {
        Self {
            name: name.full_name(),
            name_kana: name.full_name_kana(),
            birth_date: format_for_display(Some(birth_date), placeholder),
            birth_date_wareki: format_wareki(birth_date),
            address: address.format(),
        }
    }
}

/// Confirmation-screen view of a valid pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairSummary {
    pub insured: PersonSummary,
    pub beneficiary: PersonSummary,
}

impl PairSummary {
    fn new(pair: &EnrollmentPair, placeholder: &str) -> Self {
        Self {
            insured: PersonSummary::new(
                &pair.insured.name,
                pair.insured.birth_date,
                &pair.insured.address,
                placeholder,
            ),
            beneficiary: PersonSummary::new(
                &pair.beneficiary.name,
                pair.beneficiary.birth_date,
                &pair.beneficiary.address,
                placeholder,
            ),
        }
    }
}

/// Outcome for one pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairReport {
    pub index: usize,
    #[serde(flatten)]
    pub report: ValidationReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<PairSummary>,
}

/// Outcome for a whole submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReport {
    pub valid: bool,
    pub workflow: Workflow,
    pub pairs: Vec<PairReport>,
}

/// Validates submissions against one rule configuration
#[derive(Debug, Clone)]
pub struct SubmissionValidator {
    pairs: EnrollmentValidator,
    date_placeholder: String,
}

impl Default for SubmissionValidator {
    fn default() -> Self {
        Self {
            pairs: EnrollmentValidator::default(),
            date_placeholder: RuleConfig::default().date_placeholder,
        }
    }
}

impl SubmissionValidator {
    pub fn new(config: &RuleConfig) -> Result<Self, CliError> {
        Ok(Self {
            pairs: EnrollmentValidator::new(config)?,
            date_placeholder: config.date_placeholder.clone(),
        })
    }

    /// Validates every pair and classifies the workflow
    ///
    /// The workflow is classified from the raw pairs, whether or not they
    /// validate.
    pub fn validate(&self, submission: &Submission) -> SubmissionReport {
        let pairs: Vec<PairReport> = submission
            .pairs
            .iter()
            .enumerate()
            .map(|(index, form)| {
                let result = self.pairs.validate(form);
                let summary = result
                    .as_ref()
                    .ok()
                    .map(|pair| PairSummary::new(pair, &self.date_placeholder));
                PairReport {
                    index,
                    report: ValidationReport::from(&result),
                    summary,
                }
            })
            .collect();

        let valid = pairs.iter().all(|pair| pair.report.valid);
        let workflow = classify_workflow(&submission.pairs, &submission.applicant);

        for pair in pairs.iter().filter(|pair| !pair.report.valid) {
            debug!(
                index = pair.index,
                failed = pair.report.errors.len(),
                "pair failed validation"
            );
        }
        info!(pairs = pairs.len(), valid, ?workflow, "submission validated");

        SubmissionReport {
            valid,
            workflow,
            pairs,
        }
    }
}
