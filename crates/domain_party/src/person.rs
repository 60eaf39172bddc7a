//! Person records
//!
//! A person appears in a submission either as the insured or as the
//! beneficiary. The two variants are distinct types: a beneficiary has no
//! gender, phone number, or email, so code handling a beneficiary cannot read
//! them by construction.
//!
//! Each variant exists twice:
//! - `InsuredForm` / `BeneficiaryForm` hold raw form input, every value a
//!   string exactly as typed. They start empty and are filled field by field.
//! - `Insured` / `Beneficiary` are the typed records produced by a successful
//!   validation (see `crate::validation`).

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::error::EnrollmentError;
use crate::field::Field;

/// Record variant discriminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonVariant {
    Insured,
    Beneficiary,
}

impl PersonVariant {
    pub fn name(&self) -> &'static str {
        match self {
            PersonVariant::Insured => "insured",
            PersonVariant::Beneficiary => "beneficiary",
        }
    }
}

impl fmt::Display for PersonVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Gender as collected on the insured record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "男性",
            Gender::Female => "女性",
        }
    }
}

impl FromStr for Gender {
    type Err = EnrollmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(EnrollmentError::unknown_choice("gender", other)),
        }
    }
}

/// Kinship of a person to the applicant
///
/// The closed set offered by the relationship selector. Values travel as
/// their Japanese labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relationship {
    #[serde(rename = "本人")]
    Oneself,
    #[serde(rename = "配偶者")]
    Spouse,
    #[serde(rename = "子")]
    Child,
    #[serde(rename = "父母")]
    Parent,
    #[serde(rename = "孫")]
    Grandchild,
    #[serde(rename = "祖父母")]
    Grandparent,
    #[serde(rename = "兄弟姉妹")]
    Sibling,
    #[serde(rename = "その他親族")]
    OtherRelative,
}

impl Relationship {
    /// Every term, in selector order
    pub const ALL: [Relationship; 8] = [
        Relationship::Oneself,
        Relationship::Spouse,
        Relationship::Child,
        Relationship::Parent,
        Relationship::Grandchild,
        Relationship::Grandparent,
        Relationship::Sibling,
        Relationship::OtherRelative,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Relationship::Oneself => "本人",
            Relationship::Spouse => "配偶者",
            Relationship::Child => "子",
            Relationship::Parent => "父母",
            Relationship::Grandchild => "孫",
            Relationship::Grandparent => "祖父母",
            Relationship::Sibling => "兄弟姉妹",
            Relationship::OtherRelative => "その他親族",
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Relationship {
    type Err = EnrollmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|relationship| relationship.label() == s)
            .ok_or_else(|| EnrollmentError::unknown_choice("relationship", s))
    }
}

/// The three values used to recognise the same person across records
///
/// Compared by exact string equality, so a birth date must be in canonical
/// `YYYY-MM-DD` form on both sides to match.
pub trait Identity {
    fn last_name(&self) -> &str;
    fn first_name(&self) -> &str;
    fn birth_date(&self) -> &str;

    fn is_same_person<O: Identity + ?Sized>(&self, other: &O) -> bool {
        self.last_name() == other.last_name()
            && self.first_name() == other.first_name()
            && self.birth_date() == other.birth_date()
    }
}

/// The applicant's own identifying data
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApplicantIdentity {
    pub last_name: String,
    pub first_name: String,
    pub birth_date: String,
}

impl Identity for ApplicantIdentity {
    fn last_name(&self) -> &str {
        &self.last_name
    }

    fn first_name(&self) -> &str {
        &self.first_name
    }

    fn birth_date(&self) -> &str {
        &self.birth_date
    }
}

/// Raw insured-person input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InsuredForm {
    pub last_name: String,
    pub first_name: String,
    pub last_name_kana: String,
    pub first_name_kana: String,
    pub birth_date: String,
    pub gender: String,
    pub relationship: String,
    pub postal_code: String,
    pub prefecture: String,
    pub city: String,
    pub address: Option<String>,
    pub building: Option<String>,
    pub phone_number: String,
    pub email: String,
}

/// Raw beneficiary input; gender, phone number, and email do not exist here
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BeneficiaryForm {
    pub last_name: String,
    pub first_name: String,
    pub last_name_kana: String,
    pub first_name_kana: String,
    pub birth_date: String,
    pub relationship: String,
    pub postal_code: String,
    pub prefecture: String,
    pub city: String,
    pub address: Option<String>,
    pub building: Option<String>,
}

fn optional(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn not_in_variant(field: Field, variant: PersonVariant) -> EnrollmentError {
    EnrollmentError::FieldNotInVariant {
        field: field.name().to_string(),
        variant: variant.name().to_string(),
    }
}

impl InsuredForm {
    /// Current raw value of `field`; optional fields read as `""` when unset
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::LastName => &self.last_name,
            Field::FirstName => &self.first_name,
            Field::LastNameKana => &self.last_name_kana,
            Field::FirstNameKana => &self.first_name_kana,
            Field::Gender => &self.gender,
            Field::BirthDate => &self.birth_date,
            Field::Relationship => &self.relationship,
            Field::PostalCode => &self.postal_code,
            Field::Prefecture => &self.prefecture,
            Field::City => &self.city,
            Field::Address => self.address.as_deref().unwrap_or_default(),
            Field::Building => self.building.as_deref().unwrap_or_default(),
            Field::PhoneNumber => &self.phone_number,
            Field::Email => &self.email,
        }
    }

    /// Overwrites `field` with a raw value
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::LastName => self.last_name = value,
            Field::FirstName => self.first_name = value,
            Field::LastNameKana => self.last_name_kana = value,
            Field::FirstNameKana => self.first_name_kana = value,
            Field::Gender => self.gender = value,
            Field::BirthDate => self.birth_date = value,
            Field::Relationship => self.relationship = value,
            Field::PostalCode => self.postal_code = value,
            Field::Prefecture => self.prefecture = value,
            Field::City => self.city = value,
            Field::Address => self.address = optional(value),
            Field::Building => self.building = optional(value),
            Field::PhoneNumber => self.phone_number = value,
            Field::Email => self.email = value,
        }
    }
}

impl BeneficiaryForm {
    /// Current raw value of `field`, or `None` for fields a beneficiary lacks
    pub fn get(&self, field: Field) -> Option<&str> {
        let value: &str = match field {
            Field::LastName => &self.last_name,
            Field::FirstName => &self.first_name,
            Field::LastNameKana => &self.last_name_kana,
            Field::FirstNameKana => &self.first_name_kana,
            Field::BirthDate => &self.birth_date,
            Field::Relationship => &self.relationship,
            Field::PostalCode => &self.postal_code,
            Field::Prefecture => &self.prefecture,
            Field::City => &self.city,
            Field::Address => self.address.as_deref().unwrap_or_default(),
            Field::Building => self.building.as_deref().unwrap_or_default(),
            Field::Gender | Field::PhoneNumber | Field::Email => return None,
        };
        Some(value)
    }

    /// Overwrites `field` with a raw value
    ///
    /// # Errors
    ///
    /// Returns `FieldNotInVariant` for gender, phone number, and email.
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> Result<(), EnrollmentError> {
        let value = value.into();
        match field {
            Field::LastName => self.last_name = value,
            Field::FirstName => self.first_name = value,
            Field::LastNameKana => self.last_name_kana = value,
            Field::FirstNameKana => self.first_name_kana = value,
            Field::BirthDate => self.birth_date = value,
            Field::Relationship => self.relationship = value,
            Field::PostalCode => self.postal_code = value,
            Field::Prefecture => self.prefecture = value,
            Field::City => self.city = value,
            Field::Address => self.address = optional(value),
            Field::Building => self.building = optional(value),
            Field::Gender | Field::PhoneNumber | Field::Email => {
                return Err(not_in_variant(field, PersonVariant::Beneficiary));
            }
        }
        Ok(())
    }
}

impl Identity for InsuredForm {
    fn last_name(&self) -> &str {
        &self.last_name
    }

    fn first_name(&self) -> &str {
        &self.first_name
    }

    fn birth_date(&self) -> &str {
        &self.birth_date
    }
}

impl Identity for BeneficiaryForm {
    fn last_name(&self) -> &str {
        &self.last_name
    }

    fn first_name(&self) -> &str {
        &self.first_name
    }

    fn birth_date(&self) -> &str {
        &self.birth_date
    }
}

/// Raw input for either variant, tagged by `variant`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "lowercase")]
pub enum PersonForm {
    Insured(InsuredForm),
    Beneficiary(BeneficiaryForm),
}

impl PersonForm {
    /// An empty form of the given variant
    pub fn empty(variant: PersonVariant) -> Self {
        match variant {
            PersonVariant::Insured => PersonForm::Insured(InsuredForm::default()),
            PersonVariant::Beneficiary => PersonForm::Beneficiary(BeneficiaryForm::default()),
        }
    }

    /// Builds a form from `(field name, raw value)` pairs
    ///
    /// Fields that are not supplied stay blank. Names of fields the variant
    /// does not have are ignored, so a beneficiary built from an insured
    /// person's full field set simply drops gender, phone number, and email.
    ///
    /// # Errors
    ///
    /// Returns `UnknownField` for a name no record schema knows.
    pub fn from_fields<'a>(
        variant: PersonVariant,
        fields: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, EnrollmentError> {
        let mut form = Self::empty(variant);
        for (name, value) in fields {
            let field: Field = name.parse()?;
            if field.applies_to(variant) {
                form.set(field, value)?;
            }
        }
        Ok(form)
    }

    pub fn variant(&self) -> PersonVariant {
        match self {
            PersonForm::Insured(_) => PersonVariant::Insured,
            PersonForm::Beneficiary(_) => PersonVariant::Beneficiary,
        }
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match self {
            PersonForm::Insured(form) => Some(form.get(field)),
            PersonForm::Beneficiary(form) => form.get(field),
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) -> Result<(), EnrollmentError> {
        match self {
            PersonForm::Insured(form) => {
                form.set(field, value);
                Ok(())
            }
            PersonForm::Beneficiary(form) => form.set(field, value),
        }
    }
}

impl Identity for PersonForm {
    fn last_name(&self) -> &str {
        match self {
            PersonForm::Insured(form) => form.last_name(),
            PersonForm::Beneficiary(form) => form.last_name(),
        }
    }

    fn first_name(&self) -> &str {
        match self {
            PersonForm::Insured(form) => form.first_name(),
            PersonForm::Beneficiary(form) => form.first_name(),
        }
    }

    fn birth_date(&self) -> &str {
        match self {
            PersonForm::Insured(form) => form.birth_date(),
            PersonForm::Beneficiary(form) => form.birth_date(),
        }
    }
}

/// Validated name in kanji and katakana reading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonName {
    pub last_name: String,
    pub first_name: String,
    pub last_name_kana: String,
    pub first_name_kana: String,
}

impl PersonName {
    /// Full name, family name first, e.g. `田中 太郎`
    pub fn full_name(&self) -> String {
        format!("{} {}", self.last_name, self.first_name)
    }

    /// Full reading, e.g. `タナカ タロウ`
    pub fn full_name_kana(&self) -> String {
        format!("{} {}", self.last_name_kana, self.first_name_kana)
    }
}

/// A validated insured person
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insured {
    #[serde(flatten)]
    pub name: PersonName,
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub relationship: Relationship,
    #[serde(flatten)]
    pub address: Address,
    pub phone_number: String,
    pub email: String,
}

/// A validated beneficiary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Beneficiary {
    #[serde(flatten)]
    pub name: PersonName,
    pub birth_date: NaiveDate,
    pub relationship: Relationship,
    #[serde(flatten)]
    pub address: Address,
}

/// A validated person of either variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "lowercase")]
pub enum Person {
    Insured(Insured),
    Beneficiary(Beneficiary),
}

impl Person {
    pub fn variant(&self) -> PersonVariant {
        match self {
            Person::Insured(_) => PersonVariant::Insured,
            Person::Beneficiary(_) => PersonVariant::Beneficiary,
        }
    }

    pub fn name(&self) -> &PersonName {
        match self {
            Person::Insured(insured) => &insured.name,
            Person::Beneficiary(beneficiary) => &beneficiary.name,
        }
    }

    pub fn birth_date(&self) -> NaiveDate {
        match self {
            Person::Insured(insured) => insured.birth_date,
            Person::Beneficiary(beneficiary) => beneficiary.birth_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relationship_labels_parse() {
        for relationship in Relationship::ALL {
            assert_eq!(relationship.label().parse::<Relationship>().unwrap(), relationship);
        }
        assert!("友人".parse::<Relationship>().is_err());
    }

    #[test]
    fn test_gender_literals() {
        assert_eq!("male".parse::<Gender>().unwrap(), Gender::Male);
        assert!("Male".parse::<Gender>().is_err());
        assert!("".parse::<Gender>().is_err());
    }

    #[test]
    fn test_beneficiary_rejects_contact_fields() {
        let mut form = BeneficiaryForm::default();
        assert!(form.set(Field::LastName, "田中").is_ok());
        assert!(matches!(
            form.set(Field::Email, "a@b.jp"),
            Err(EnrollmentError::FieldNotInVariant { .. })
        ));
        assert_eq!(form.get(Field::PhoneNumber), None);
    }

    #[test]
    fn test_optional_fields_blank_to_none() {
        let mut form = InsuredForm::default();
        form.set(Field::Building, "");
        assert_eq!(form.building, None);
        form.set(Field::Building, "パークハイツ101");
        assert_eq!(form.get(Field::Building), "パークハイツ101");
    }

    #[test]
    fn test_from_fields_drops_fields_outside_variant() {
        let form = PersonForm::from_fields(
            PersonVariant::Beneficiary,
            [("lastName", "田中"), ("gender", "male")],
        )
        .unwrap();
        assert_eq!(form.get(Field::LastName), Some("田中"));
        assert_eq!(form.get(Field::Gender), None);
    }

    #[test]
    fn test_person_form_json_tag() {
        let json = serde_json::json!({ "variant": "beneficiary", "lastName": "田中" });
        let form: PersonForm = serde_json::from_value(json).unwrap();
        assert_eq!(form.variant(), PersonVariant::Beneficiary);
    }

    #[test]
    fn test_identity_comparison_is_exact() {
        let applicant = ApplicantIdentity {
            last_name: "田中".into(),
            first_name: "太郎".into(),
            birth_date: "1985-03-15".into(),
        };
        let mut insured = InsuredForm {
            last_name: "田中".into(),
            first_name: "太郎".into(),
            birth_date: "1985-03-15".into(),
            ..InsuredForm::default()
        };
        assert!(applicant.is_same_person(&insured));
        insured.first_name = "太郎 ".into();
        assert!(!applicant.is_same_person(&insured));
    }
}
