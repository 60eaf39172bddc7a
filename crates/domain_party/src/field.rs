//! Field schemas
//!
//! Each form field owns an ordered chain of rules. The chain stops at the
//! first failing rule, so a field reports at most one message; different
//! fields are checked independently of each other.
//!
//! | Field | Rules |
//! |---|---|
//! | lastName / firstName / prefecture / city | required |
//! | lastNameKana / firstNameKana | required, katakana |
//! | gender | one of `male`, `female` |
//! | birthDate | 10 characters, `YYYY-MM-DD`, year in range, calendar date |
//! | phoneNumber | required, half-width, 10 or 11 digits |
//! | email | required, half-width, address format |
//! | postalCode | required, half-width, 7 digits |
//! | relationship | member of the kinship set |
//! | address / building | optional |

use std::fmt;
use std::str::FromStr;

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use core_kernel::temporal::{has_iso_shape, parse_iso, DateRange, ISO_DATE_LEN};
use core_kernel::text::{
    has_full_width, is_valid_email, is_valid_katakana, is_valid_phone_number,
    is_valid_postal_code,
};

use crate::config::RuleConfig;
use crate::error::EnrollmentError;
use crate::messages;
use crate::person::{Gender, PersonVariant, Relationship};

/// A person record field, named as the form layer names it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    LastName,
    FirstName,
    LastNameKana,
    FirstNameKana,
    Gender,
    BirthDate,
    Relationship,
    PostalCode,
    Prefecture,
    City,
    Address,
    Building,
    PhoneNumber,
    Email,
}

impl Field {
    /// Every field, in form order
    pub const ALL: [Field; 14] = [
        Field::LastName,
        Field::FirstName,
        Field::LastNameKana,
        Field::FirstNameKana,
        Field::Gender,
        Field::BirthDate,
        Field::Relationship,
        Field::PostalCode,
        Field::Prefecture,
        Field::City,
        Field::Address,
        Field::Building,
        Field::PhoneNumber,
        Field::Email,
    ];

    /// Form field name
    pub fn name(&self) -> &'static str {
        match self {
            Field::LastName => "lastName",
            Field::FirstName => "firstName",
            Field::LastNameKana => "lastNameKana",
            Field::FirstNameKana => "firstNameKana",
            Field::Gender => "gender",
            Field::BirthDate => "birthDate",
            Field::Relationship => "relationship",
            Field::PostalCode => "postalCode",
            Field::Prefecture => "prefecture",
            Field::City => "city",
            Field::Address => "address",
            Field::Building => "building",
            Field::PhoneNumber => "phoneNumber",
            Field::Email => "email",
        }
    }

    /// Japanese label used in messages
    pub fn label(&self) -> &'static str {
        match self {
            Field::LastName => "姓",
            Field::FirstName => "名",
            Field::LastNameKana => "セイ",
            Field::FirstNameKana => "メイ",
            Field::Gender => "性別",
            Field::BirthDate => "生年月日",
            Field::Relationship => "続柄",
            Field::PostalCode => "郵便番号",
            Field::Prefecture => "都道府県",
            Field::City => "市区町村",
            Field::Address => "番地",
            Field::Building => "建物名",
            Field::PhoneNumber => "電話番号",
            Field::Email => "メールアドレス",
        }
    }

    /// Returns true if the field exists on records of `variant`
    ///
    /// Beneficiary records have no gender, phone number, or email.
    pub fn applies_to(&self, variant: PersonVariant) -> bool {
        match variant {
            PersonVariant::Insured => true,
            PersonVariant::Beneficiary => {
                !matches!(self, Field::Gender | Field::PhoneNumber | Field::Email)
            }
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = EnrollmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| EnrollmentError::UnknownField(s.to_string()))
    }
}

/// Broad class of a validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The value does not have the required shape
    Format,
    /// The value is well-formed but outside the accepted domain
    Range,
    /// A combination of values breaks a business rule
    CrossField,
}

/// The specific rule that rejected a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    Required,
    Choice,
    Katakana,
    FullWidth,
    Length,
    DateFormat,
    YearRange,
    CalendarDate,
    PhoneFormat,
    EmailFormat,
    PostalCodeFormat,
    SameAsApplicantConflict,
}

impl Rule {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Rule::YearRange => ErrorKind::Range,
            Rule::SameAsApplicantConflict => ErrorKind::CrossField,
            _ => ErrorKind::Format,
        }
    }

    /// Message id in the validation catalog
    pub fn message_id(&self) -> &'static str {
        match self {
            Rule::Required => "required",
            Rule::Choice => "choice",
            Rule::Katakana => "katakana",
            Rule::FullWidth => "full-width",
            Rule::Length => "length",
            Rule::DateFormat => "date-format",
            Rule::YearRange => "year-range",
            Rule::CalendarDate => "calendar-date",
            Rule::PhoneFormat => "phone-format",
            Rule::EmailFormat => "email-format",
            Rule::PostalCodeFormat => "postal-code-format",
            Rule::SameAsApplicantConflict => "same-as-applicant-conflict",
        }
    }
}

/// A single rule failure with its user-facing message
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct FieldError {
    pub kind: ErrorKind,
    pub rule: Rule,
    pub message: String,
}

impl FieldError {
    /// Creates an error for `rule` on `field` with the catalog message
    pub fn new(field: Field, rule: Rule) -> Self {
        Self::with_args(field.label(), rule, &[])
    }

    /// Creates an error whose message needs extra arguments
    pub fn with_args(label: &str, rule: Rule, args: &[(&'static str, String)]) -> Self {
        Self {
            kind: rule.kind(),
            rule,
            message: messages::render(rule.message_id(), label, args),
        }
    }
}

/// Outcome of a single-field check in the `{ valid, message }` shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldReport {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<Result<(), FieldError>> for FieldReport {
    fn from(result: Result<(), FieldError>) -> Self {
        match result {
            Ok(()) => Self { valid: true, message: None },
            Err(error) => Self { valid: false, message: Some(error.message) },
        }
    }
}

/// The field rule chains, parameterised by `RuleConfig`
#[derive(Debug, Clone)]
pub struct FieldRules {
    birth_dates: DateRange,
}

impl Default for FieldRules {
    fn default() -> Self {
        Self::new(&RuleConfig::default()).expect("default birth years are representable")
    }
}

impl FieldRules {
    /// # Errors
    ///
    /// Fails when the configured birth years do not form a date range.
    pub fn new(config: &RuleConfig) -> Result<Self, EnrollmentError> {
        Ok(Self {
            birth_dates: config.birth_range()?,
        })
    }

    /// Runs the rule chain of `field` against a raw form value
    pub fn check(&self, field: Field, raw: &str) -> Result<(), FieldError> {
        match field {
            Field::LastName | Field::FirstName | Field::Prefecture | Field::City => {
                required(field, raw)
            }
            Field::LastNameKana | Field::FirstNameKana => {
                required(field, raw)?;
                ensure(is_valid_katakana(raw), field, Rule::Katakana)
            }
            Field::Gender => ensure(raw.parse::<Gender>().is_ok(), field, Rule::Choice),
            Field::Relationship => {
                ensure(raw.parse::<Relationship>().is_ok(), field, Rule::Choice)
            }
            Field::BirthDate => self.check_birth_date(raw),
            Field::PhoneNumber => {
                half_width_required(field, raw)?;
                ensure(is_valid_phone_number(raw), field, Rule::PhoneFormat)
            }
            Field::Email => {
                half_width_required(field, raw)?;
                ensure(is_valid_email(raw), field, Rule::EmailFormat)
            }
            Field::PostalCode => {
                half_width_required(field, raw)?;
                ensure(is_valid_postal_code(raw), field, Rule::PostalCodeFormat)
            }
            Field::Address | Field::Building => Ok(()),
        }
    }

    fn check_birth_date(&self, raw: &str) -> Result<(), FieldError> {
        let field = Field::BirthDate;

        if raw.chars().count() != ISO_DATE_LEN {
            return Err(FieldError::with_args(
                field.label(),
                Rule::Length,
                &[("length", ISO_DATE_LEN.to_string())],
            ));
        }
        ensure(has_iso_shape(raw), field, Rule::DateFormat)?;

        // Shape is ASCII digits, so the slice and parse cannot fail
        let year: i32 = raw[..4].parse().unwrap_or_default();
        let (min, max) = (self.birth_dates.start.year(), self.birth_dates.end.year());
        if !(min..=max).contains(&year) {
            return Err(FieldError::with_args(
                field.label(),
                Rule::YearRange,
                &[("min", min.to_string()), ("max", max.to_string())],
            ));
        }

        ensure(parse_iso(raw).is_some(), field, Rule::CalendarDate)
    }
}

/// Checks one field with the default rules
pub fn validate_field(field: Field, raw: &str) -> Result<(), FieldError> {
    FieldRules::default().check(field, raw)
}

fn ensure(condition: bool, field: Field, rule: Rule) -> Result<(), FieldError> {
    if condition {
        Ok(())
    } else {
        Err(FieldError::new(field, rule))
    }
}

fn required(field: Field, raw: &str) -> Result<(), FieldError> {
    ensure(!raw.trim().is_empty(), field, Rule::Required)
}

/// Required, then the full-width guard, ahead of any format rule
fn half_width_required(field: Field, raw: &str) -> Result<(), FieldError> {
    required(field, raw)?;
    ensure(!has_full_width(raw), field, Rule::FullWidth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_name_round_trip() {
        for field in Field::ALL {
            assert_eq!(field.name().parse::<Field>().unwrap(), field);
        }
    }

    #[test]
    fn test_unknown_field_name() {
        assert!(matches!("nickname".parse::<Field>(), Err(EnrollmentError::UnknownField(_))));
    }

    #[test]
    fn test_beneficiary_subset() {
        let beneficiary: Vec<_> = Field::ALL
            .into_iter()
            .filter(|f| f.applies_to(PersonVariant::Beneficiary))
            .collect();
        assert_eq!(beneficiary.len(), 11);
        assert!(!beneficiary.contains(&Field::Gender));
    }

    #[test]
    fn test_full_width_before_format() {
        let error = validate_field(Field::PostalCode, "１２３４５６７").unwrap_err();
        assert_eq!(error.rule, Rule::FullWidth);
        assert_eq!(error.message, "郵便番号は半角で入力してください");
    }

    #[test]
    fn test_required_before_full_width() {
        let error = validate_field(Field::Email, "").unwrap_err();
        assert_eq!(error.rule, Rule::Required);
    }

    #[test]
    fn test_birth_date_chain_order() {
        let rule = |raw| validate_field(Field::BirthDate, raw).unwrap_err().rule;
        assert_eq!(rule("1985-3-15"), Rule::Length);
        assert_eq!(rule("1985/03/15"), Rule::DateFormat);
        assert_eq!(rule("1924-12-31"), Rule::YearRange);
        assert_eq!(rule("2023-02-31"), Rule::CalendarDate);
    }

    #[test]
    fn test_range_error_kind() {
        let error = validate_field(Field::BirthDate, "2026-01-01").unwrap_err();
        assert_eq!(error.kind, ErrorKind::Range);
    }

    #[test]
    fn test_field_report() {
        let report = FieldReport::from(validate_field(Field::LastName, ""));
        assert!(!report.valid);
        assert_eq!(report.message.as_deref(), Some("姓を入力してください"));
        assert!(FieldReport::from(validate_field(Field::Building, "")).valid);
    }

    #[test]
    fn test_rules_take_bounds_from_birth_range() {
        let config = RuleConfig {
            birth_year_min: 1960,
            birth_year_max: 1970,
            ..RuleConfig::default()
        };
        let rules = FieldRules::new(&config).unwrap();
        let error = rules.check(Field::BirthDate, "1971-01-01").unwrap_err();
        assert_eq!(error.rule, Rule::YearRange);
        assert_eq!(error.message, "生年月日は1960年から1970年の間で入力してください");

        let inverted = RuleConfig {
            birth_year_min: 2000,
            birth_year_max: 1990,
            ..RuleConfig::default()
        };
        assert!(matches!(FieldRules::new(&inverted), Err(EnrollmentError::Temporal(_))));
    }
}
