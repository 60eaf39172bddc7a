//! Record validation
//!
//! Composes the field schemas into whole-record validators. A record is
//! valid only if every field's rule chain succeeds; every failing field is
//! reported, not just the first, so a form can mark all problems at once.
//!
//! # Validation Rules
//!
//! ## Insured
//! - Name, reading, birth date, gender, relationship, address, phone, email
//!
//! ## Beneficiary
//! - The insured rules without gender, phone number, and email. Those fields
//!   are not part of the beneficiary schema at all, so they can never produce
//!   an error, whatever the input holds.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::temporal::parse_iso;

use crate::address::Address;
use crate::config::RuleConfig;
use crate::error::EnrollmentError;
use crate::field::{Field, FieldError, FieldRules};
use crate::person::{
    Beneficiary, BeneficiaryForm, Insured, InsuredForm, Person, PersonForm, PersonName,
    PersonVariant,
};

/// Failures keyed by field path
///
/// Paths are field names (`birthDate`) or, inside a pair, prefixed with the
/// record they belong to (`insured.birthDate`). A path holds one error: the
/// first rule that failed for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors {
    errors: BTreeMap<String, FieldError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `error` at `path` unless the path already failed
    pub fn insert(&mut self, path: impl Into<String>, error: FieldError) {
        self.errors.entry(path.into()).or_insert(error);
    }

    pub fn get(&self, path: &str) -> Option<&FieldError> {
        self.errors.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.errors.contains_key(path)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldError)> {
        self.errors.iter().map(|(path, error)| (path.as_str(), error))
    }

    /// Prefixes every path with `prefix.`
    pub fn nested(self, prefix: &str) -> Self {
        let errors = self
            .errors
            .into_iter()
            .map(|(path, error)| (format!("{prefix}.{path}"), error))
            .collect();
        Self { errors }
    }

    /// Adds all of `other`, keeping existing entries on conflict
    pub fn extend(&mut self, other: FieldErrors) {
        for (path, error) in other.errors {
            self.insert(path, error);
        }
    }

    /// Path to message map
    pub fn messages(&self) -> BTreeMap<String, String> {
        self.errors
            .iter()
            .map(|(path, error)| (path.clone(), error.message.clone()))
            .collect()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} field(s) failed validation", self.errors.len())?;
        for (path, error) in &self.errors {
            write!(f, "; {path}: {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

/// Validation outcome in the `{ valid, errors }` shape the form layer reads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Whether everything validated
    pub valid: bool,
    /// Message per failing path
    pub errors: BTreeMap<String, String>,
}

impl ValidationReport {
    /// Creates a successful report
    pub fn ok() -> Self {
        Self {
            valid: true,
            errors: BTreeMap::new(),
        }
    }

    /// Creates a failed report from field errors
    pub fn fail(errors: &FieldErrors) -> Self {
        Self {
            valid: false,
            errors: errors.messages(),
        }
    }

    /// Adds an error to the report
    pub fn add_error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.entry(path.into()).or_insert_with(|| message.into());
        self.valid = false;
    }

    /// Merges another report into this one
    pub fn merge(&mut self, other: ValidationReport) {
        if !other.valid {
            self.valid = false;
        }
        for (path, message) in other.errors {
            self.errors.entry(path).or_insert(message);
        }
    }

    /// Message attached to `path`, if any
    pub fn message(&self, path: &str) -> Option<&str> {
        self.errors.get(path).map(String::as_str)
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::ok()
    }
}

impl<T> From<&Result<T, FieldErrors>> for ValidationReport {
    fn from(result: &Result<T, FieldErrors>) -> Self {
        match result {
            Ok(_) => Self::ok(),
            Err(errors) => Self::fail(errors),
        }
    }
}

/// Runs field checks and collects their failures
struct Checker<'a> {
    rules: &'a FieldRules,
    errors: FieldErrors,
}

impl<'a> Checker<'a> {
    fn new(rules: &'a FieldRules) -> Self {
        Self {
            rules,
            errors: FieldErrors::new(),
        }
    }

    fn text(&mut self, field: Field, raw: &str) -> Option<String> {
        match self.rules.check(field, raw) {
            Ok(()) => Some(raw.to_string()),
            Err(error) => {
                self.errors.insert(field.name(), error);
                None
            }
        }
    }

    fn parsed<T: FromStr>(&mut self, field: Field, raw: &str) -> Option<T> {
        self.text(field, raw)?;
        raw.parse().ok()
    }

    fn birth_date(&mut self, raw: &str) -> Option<NaiveDate> {
        self.text(Field::BirthDate, raw)?;
        parse_iso(raw)
    }

    fn name(
        &mut self,
        last: &str,
        first: &str,
        last_kana: &str,
        first_kana: &str,
    ) -> Option<PersonName> {
        let last_name = self.text(Field::LastName, last);
        let first_name = self.text(Field::FirstName, first);
        let last_name_kana = self.text(Field::LastNameKana, last_kana);
        let first_name_kana = self.text(Field::FirstNameKana, first_kana);

        Some(PersonName {
            last_name: last_name?,
            first_name: first_name?,
            last_name_kana: last_name_kana?,
            first_name_kana: first_name_kana?,
        })
    }

    fn address(
        &mut self,
        postal_code: &str,
        prefecture: &str,
        city: &str,
        street: Option<&str>,
        building: Option<&str>,
    ) -> Option<Address> {
        let postal_code = self.text(Field::PostalCode, postal_code);
        let prefecture = self.text(Field::Prefecture, prefecture);
        let city = self.text(Field::City, city);

        Some(Address {
            postal_code: postal_code?,
            prefecture: prefecture?,
            city: city?,
            street: non_blank(street),
            building: non_blank(building),
        })
    }

    fn finish<T>(self, record: Option<T>, variant: PersonVariant) -> Result<T, FieldErrors> {
        match record {
            Some(record) if self.errors.is_empty() => Ok(record),
            _ => {
                debug!(%variant, failed = self.errors.len(), "person record rejected");
                Err(self.errors)
            }
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty()).map(str::to_string)
}

/// Validator for person records
///
/// # Examples
///
/// ```rust
/// use domain_party::person::InsuredForm;
/// use domain_party::validation::PersonValidator;
///
/// let result = PersonValidator::default().validate_insured(&InsuredForm::default());
///
/// let errors = result.unwrap_err();
/// assert_eq!(errors.get("lastName").unwrap().message, "姓を入力してください");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PersonValidator {
    rules: FieldRules,
}

impl PersonValidator {
    pub fn new(config: &RuleConfig) -> Result<Self, EnrollmentError> {
        Ok(Self {
            rules: FieldRules::new(config)?,
        })
    }

    pub fn rules(&self) -> &FieldRules {
        &self.rules
    }

    /// Validates an insured-person form into a typed record
    pub fn validate_insured(&self, form: &InsuredForm) -> Result<Insured, FieldErrors> {
        let mut checker = Checker::new(&self.rules);

        let name = checker.name(
            &form.last_name,
            &form.first_name,
            &form.last_name_kana,
            &form.first_name_kana,
        );
        let birth_date = checker.birth_date(&form.birth_date);
        let gender = checker.parsed(Field::Gender, &form.gender);
        let relationship = checker.parsed(Field::Relationship, &form.relationship);
        let address = checker.address(
            &form.postal_code,
            &form.prefecture,
            &form.city,
            form.address.as_deref(),
            form.building.as_deref(),
        );
        let phone_number = checker.text(Field::PhoneNumber, &form.phone_number);
        let email = checker.text(Field::Email, &form.email);

        let record = match (name, birth_date, gender, relationship, address, phone_number, email) {
            (
                Some(name),
                Some(birth_date),
                Some(gender),
                Some(relationship),
                Some(address),
                Some(phone_number),
                Some(email),
            ) => Some(Insured {
                name,
                birth_date,
                gender,
                relationship,
                address,
                phone_number,
                email,
            }),
            _ => None,
        };

        checker.finish(record, PersonVariant::Insured)
    }

    /// Validates a beneficiary form into a typed record
    pub fn validate_beneficiary(&self, form: &BeneficiaryForm) -> Result<Beneficiary, FieldErrors> {
        let mut checker = Checker::new(&self.rules);

        let name = checker.name(
            &form.last_name,
            &form.first_name,
            &form.last_name_kana,
            &form.first_name_kana,
        );
        let birth_date = checker.birth_date(&form.birth_date);
        let relationship = checker.parsed(Field::Relationship, &form.relationship);
        let address = checker.address(
            &form.postal_code,
            &form.prefecture,
            &form.city,
            form.address.as_deref(),
            form.building.as_deref(),
        );

        let record = match (name, birth_date, relationship, address) {
            (Some(name), Some(birth_date), Some(relationship), Some(address)) => Some(Beneficiary {
                name,
                birth_date,
                relationship,
                address,
            }),
            _ => None,
        };

        checker.finish(record, PersonVariant::Beneficiary)
    }

    /// Validates a form of either variant
    pub fn validate(&self, form: &PersonForm) -> Result<Person, FieldErrors> {
        match form {
            PersonForm::Insured(form) => self.validate_insured(form).map(Person::Insured),
            PersonForm::Beneficiary(form) => {
                self.validate_beneficiary(form).map(Person::Beneficiary)
            }
        }
    }
}

/// Validates a person record with the default rules
pub fn validate_person_record(form: &PersonForm) -> ValidationReport {
    ValidationReport::from(&PersonValidator::default().validate(form))
}

/// Validates raw `(field name, value)` pairs as a record of `variant`
///
/// # Errors
///
/// Returns `UnknownField` when a name matches no field; bad values are
/// reported in the `ValidationReport`, not as an error.
pub fn validate_person_fields<'a>(
    variant: PersonVariant,
    fields: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> Result<ValidationReport, EnrollmentError> {
    let form = PersonForm::from_fields(variant, fields)?;
    Ok(validate_person_record(&form))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Rule;

    fn valid_beneficiary() -> BeneficiaryForm {
        BeneficiaryForm {
            last_name: "田中".to_string(),
            first_name: "花子".to_string(),
            last_name_kana: "タナカ".to_string(),
            first_name_kana: "ハナコ".to_string(),
            birth_date: "1987-07-01".to_string(),
            relationship: "配偶者".to_string(),
            postal_code: "1000001".to_string(),
            prefecture: "東京都".to_string(),
            city: "千代田区".to_string(),
            address: Some("千代田1-1".to_string()),
            building: None,
        }
    }

    #[test]
    fn test_valid_beneficiary() {
        let result = PersonValidator::default().validate_beneficiary(&valid_beneficiary());
        let beneficiary = result.unwrap();
        assert_eq!(beneficiary.name.full_name(), "田中 花子");
        assert_eq!(beneficiary.address.street.as_deref(), Some("千代田1-1"));
    }

    #[test]
    fn test_empty_insured_reports_every_required_field() {
        let errors = PersonValidator::default()
            .validate_insured(&InsuredForm::default())
            .unwrap_err();

        for field in [Field::LastName, Field::Gender, Field::BirthDate, Field::Email] {
            assert!(errors.contains(field.name()), "missing error for {field}");
        }
        assert!(!errors.contains("address"));
        assert!(!errors.contains("building"));
    }

    #[test]
    fn test_one_error_per_field() {
        let mut form = valid_beneficiary();
        form.last_name_kana = String::new();
        let errors = PersonValidator::default().validate_beneficiary(&form).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("lastNameKana").unwrap().rule, Rule::Required);
    }

    #[test]
    fn test_nested_paths() {
        let mut errors = FieldErrors::new();
        errors.insert("birthDate", FieldError::new(Field::BirthDate, Rule::Length));
        let nested = errors.nested("insured");
        assert!(nested.contains("insured.birthDate"));
        assert!(!nested.contains("birthDate"));
    }

    #[test]
    fn test_report_merge() {
        let mut report = ValidationReport::ok();
        let mut other = ValidationReport::ok();
        other.add_error("email", "メールアドレスを入力してください");
        report.merge(other);
        assert!(!report.valid);
        assert_eq!(report.message("email"), Some("メールアドレスを入力してください"));
    }

    #[test]
    fn test_fail_is_never_valid() {
        let report = ValidationReport::fail(&FieldErrors::new());
        assert!(!report.valid);
        assert!(report.errors.is_empty());

        let result: Result<(), FieldErrors> = Ok(());
        assert!(ValidationReport::from(&result).valid);
    }

    #[test]
    fn test_display_lists_paths() {
        let mut errors = FieldErrors::new();
        errors.insert("city", FieldError::new(Field::City, Rule::Required));
        assert_eq!(
            errors.to_string(),
            "1 field(s) failed validation; city: 市区町村を入力してください"
        );
    }
}
