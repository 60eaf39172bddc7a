//! Tests for submission validation

use domain_party::{RuleConfig, Workflow};
use interface_cli::{CliError, Submission, SubmissionValidator};
use test_utils::{EnrollmentPairBuilder, InsuredFormBuilder, JsonFixtures, PersonFixtures};

mod parsing_tests {
    use super::*;

    #[test]
    fn test_parse_fixture() {
        let submission = Submission::from_json(&JsonFixtures::submission().to_string()).unwrap();
        assert_eq!(submission.applicant, PersonFixtures::applicant());
        assert_eq!(submission.pairs.len(), 1);
        assert_eq!(submission.pairs[0].insured.first_name, "一郎");
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(Submission::from_json("{ not json"), Err(CliError::Json(_))));
    }

    #[test]
    fn test_missing_keys_default_to_empty() {
        let submission = Submission::from_json("{}").unwrap();
        assert!(submission.pairs.is_empty());
    }
}

mod report_tests {
    use super::*;

    #[test]
    fn test_valid_submission_with_disclosure() {
        let submission = Submission::from_json(&JsonFixtures::submission().to_string()).unwrap();
        let report = SubmissionValidator::default().validate(&submission);

        assert!(report.valid);
        assert_eq!(report.workflow, Workflow::WithDisclosure);

        let summary = report.pairs[0].summary.as_ref().unwrap();
        assert_eq!(summary.insured.name, "田中 一郎");
        assert_eq!(summary.insured.birth_date, "2012年4月2日");
        assert_eq!(summary.insured.birth_date_wareki.as_deref(), Some("平成24年4月2日"));
        assert_eq!(summary.beneficiary.address, "〒100-0001 東京都千代田区");
    }

    #[test]
    fn test_invalid_pair_reports_errors_and_still_classifies() {
        let submission = Submission {
            applicant: PersonFixtures::applicant(),
            pairs: vec![EnrollmentPairBuilder::new().with_flags(true, true).build()],
        };
        let report = SubmissionValidator::default().validate(&submission);

        assert!(!report.valid);
        assert_eq!(report.workflow, Workflow::SkipDisclosure);
        assert!(report.pairs[0].summary.is_none());
        assert!(report.pairs[0]
            .report
            .errors
            .contains_key("isBeneficiarySameAsApplicant"));
    }

    #[test]
    fn test_report_json_shape() {
        let submission = Submission {
            applicant: PersonFixtures::applicant(),
            pairs: vec![EnrollmentPairBuilder::new().build()],
        };
        let report = SubmissionValidator::default().validate(&submission);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["valid"], true);
        assert_eq!(json["workflow"], "skip-disclosure");
        assert_eq!(json["pairs"][0]["index"], 0);
        assert_eq!(json["pairs"][0]["valid"], true);
        assert_eq!(json["pairs"][0]["summary"]["insured"]["nameKana"], "タナカ タロウ");
    }

    #[test]
    fn test_normalize_half_width_before_validating() {
        let insured = InsuredFormBuilder::new()
            .with_phone_number("０９０１２３４５６７８")
            .with_postal_code("１０００００１")
            .build();
        let mut submission = Submission {
            applicant: PersonFixtures::applicant(),
            pairs: vec![EnrollmentPairBuilder::new().with_insured(insured).build()],
        };

        assert!(!SubmissionValidator::default().validate(&submission).valid);

        submission.normalize_half_width();
        assert_eq!(submission.pairs[0].insured.phone_number, "09012345678");
        assert!(SubmissionValidator::default().validate(&submission).valid);
    }

    #[test]
    fn test_configured_birth_range() {
        let submission = Submission::from_json(&JsonFixtures::submission().to_string()).unwrap();
        let rules = RuleConfig::new(1925, 2010).unwrap();
        let report = SubmissionValidator::new(&rules).unwrap().validate(&submission);

        assert!(!report.valid);
        assert_eq!(
            report.pairs[0].report.message("insured.birthDate"),
            Some("生年月日は1925年から2010年の間で入力してください")
        );
    }
}
