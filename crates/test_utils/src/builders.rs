//! Test Data Builders
//!
//! Provides builder patterns for constructing raw forms with sensible
//! defaults. Tests set only the fields they care about; everything else
//! starts from a valid fixture.

use domain_party::{BeneficiaryForm, EnrollmentPairForm, Field, InsuredForm};

use crate::fixtures::PersonFixtures;

/// Builder for raw insured-person forms
pub struct InsuredFormBuilder {
    form: InsuredForm,
}

impl Default for InsuredFormBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InsuredFormBuilder {
    /// Creates a new builder from the valid applicant fixture
    pub fn new() -> Self {
        Self {
            form: PersonFixtures::insured_applicant(),
        }
    }

    /// Creates a builder with every field blank
    pub fn blank() -> Self {
        Self {
            form: InsuredForm::default(),
        }
    }

    /// Sets any field by its schema identity
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.form.set(field, value);
        self
    }

    /// Sets the name in kanji
    pub fn with_name(mut self, last_name: &str, first_name: &str) -> Self {
        self.form.last_name = last_name.to_string();
        self.form.first_name = first_name.to_string();
        self
    }

    /// Sets the birth date
    pub fn with_birth_date(mut self, birth_date: impl Into<String>) -> Self {
        self.form.birth_date = birth_date.into();
        self
    }

    /// Sets the phone number
    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.form.phone_number = phone_number.into();
        self
    }

    /// Sets the email address
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.form.email = email.into();
        self
    }

    /// Sets the postal code
    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.form.postal_code = postal_code.into();
        self
    }

    /// Builds the form
    pub fn build(self) -> InsuredForm {
        self.form
    }
}

/// Builder for raw beneficiary forms
pub struct BeneficiaryFormBuilder {
    form: BeneficiaryForm,
}

impl Default for BeneficiaryFormBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BeneficiaryFormBuilder {
    /// Creates a new builder from the valid spouse fixture
    pub fn new() -> Self {
        Self {
            form: PersonFixtures::beneficiary_spouse(),
        }
    }

    /// Creates a builder with every field blank
    pub fn blank() -> Self {
        Self {
            form: BeneficiaryForm::default(),
        }
    }

    /// Sets any beneficiary field by its schema identity
    ///
    /// # Panics
    ///
    /// Panics for fields a beneficiary does not have.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.form
            .set(field, value)
            .unwrap_or_else(|e| panic!("cannot set {field} on a beneficiary: {e}"));
        self
    }

    /// Sets the name in kanji
    pub fn with_name(mut self, last_name: &str, first_name: &str) -> Self {
        self.form.last_name = last_name.to_string();
        self.form.first_name = first_name.to_string();
        self
    }

    /// Sets the birth date
    pub fn with_birth_date(mut self, birth_date: impl Into<String>) -> Self {
        self.form.birth_date = birth_date.into();
        self
    }

    /// Builds the form
    pub fn build(self) -> BeneficiaryForm {
        self.form
    }
}

/// Builder for enrollment pairs
pub struct EnrollmentPairBuilder {
    pair: EnrollmentPairForm,
}

impl Default for EnrollmentPairBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EnrollmentPairBuilder {
    /// Creates a valid pair: the applicant insured, the spouse as beneficiary
    pub fn new() -> Self {
        Self {
            pair: EnrollmentPairForm {
                insured: PersonFixtures::insured_applicant(),
                beneficiary: PersonFixtures::beneficiary_spouse(),
                is_insured_same_as_applicant: true,
                is_beneficiary_same_as_applicant: false,
            },
        }
    }

    /// Sets the insured person
    pub fn with_insured(mut self, insured: InsuredForm) -> Self {
        self.pair.insured = insured;
        self
    }

    /// Sets the beneficiary
    pub fn with_beneficiary(mut self, beneficiary: BeneficiaryForm) -> Self {
        self.pair.beneficiary = beneficiary;
        self
    }

    /// Sets both "same as applicant" flags
    pub fn with_flags(mut self, insured: bool, beneficiary: bool) -> Self {
        self.pair.is_insured_same_as_applicant = insured;
        self.pair.is_beneficiary_same_as_applicant = beneficiary;
        self
    }

    /// Builds the pair
    pub fn build(self) -> EnrollmentPairForm {
        self.pair
    }
}
