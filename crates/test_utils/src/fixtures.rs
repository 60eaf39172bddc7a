//! Pre-built Test Fixtures
//!
//! Provides ready-to-use people and raw field values. Everything returned by
//! `PersonFixtures` passes validation with the default rules.

use chrono::NaiveDate;
use domain_party::{ApplicantIdentity, BeneficiaryForm, InsuredForm};
use serde_json::{json, Value};

/// Fixture for the people on a typical application
pub struct PersonFixtures;

impl PersonFixtures {
    /// The applicant, 田中太郎 born 1985-03-15
    pub fn applicant() -> ApplicantIdentity {
        ApplicantIdentity {
            last_name: "田中".to_string(),
            first_name: "太郎".to_string(),
            birth_date: "1985-03-15".to_string(),
        }
    }

    /// The applicant entered as their own insured person
    pub fn insured_applicant() -> InsuredForm {
        InsuredForm {
            last_name: "田中".to_string(),
            first_name: "太郎".to_string(),
            last_name_kana: "タナカ".to_string(),
            first_name_kana: "タロウ".to_string(),
            birth_date: "1985-03-15".to_string(),
            gender: "male".to_string(),
            relationship: "本人".to_string(),
            postal_code: "1000001".to_string(),
            prefecture: "東京都".to_string(),
            city: "千代田区".to_string(),
            address: Some("千代田1-1".to_string()),
            building: None,
            phone_number: "09012345678".to_string(),
            email: "taro.tanaka@example.co.jp".to_string(),
        }
    }

    /// The applicant's child as insured person
    pub fn insured_child() -> InsuredForm {
        InsuredForm {
            first_name: "一郎".to_string(),
            first_name_kana: "イチロウ".to_string(),
            birth_date: "2012-04-02".to_string(),
            relationship: "子".to_string(),
            email: "ichiro.tanaka@example.jp".to_string(),
            ..Self::insured_applicant()
        }
    }

    /// The applicant's spouse as beneficiary
    pub fn beneficiary_spouse() -> BeneficiaryForm {
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
            building: Some("皇居ビル3F".to_string()),
        }
    }

    /// The applicant entered as beneficiary
    pub fn beneficiary_applicant() -> BeneficiaryForm {
        BeneficiaryForm {
            first_name: "太郎".to_string(),
            first_name_kana: "タロウ".to_string(),
            birth_date: "1985-03-15".to_string(),
            relationship: "本人".to_string(),
            building: None,
            ..Self::beneficiary_spouse()
        }
    }
}

/// Fixture for JSON documents as the form layer sends them
pub struct JsonFixtures;

impl JsonFixtures {
    /// A beneficiary sent with the insured-only fields still attached
    pub fn beneficiary_with_contact_fields() -> Value {
        json!({
            "lastName": "田中",
            "firstName": "花子",
            "lastNameKana": "タナカ",
            "firstNameKana": "ハナコ",
            "birthDate": "1987-07-01",
            "relationship": "配偶者",
            "postalCode": "1000001",
            "prefecture": "東京都",
            "city": "千代田区",
            "gender": "",
            "phoneNumber": "not a number",
            "email": "not an email"
        })
    }

    /// A submission of one valid pair for the applicant
    pub fn submission() -> Value {
        json!({
            "applicant": {
                "lastName": "田中",
                "firstName": "太郎",
                "birthDate": "1985-03-15"
            },
            "pairs": [{
                "insured": {
                    "lastName": "田中",
                    "firstName": "一郎",
                    "lastNameKana": "タナカ",
                    "firstNameKana": "イチロウ",
                    "birthDate": "2012-04-02",
                    "gender": "male",
                    "relationship": "子",
                    "postalCode": "1000001",
                    "prefecture": "東京都",
                    "city": "千代田区",
                    "phoneNumber": "09012345678",
                    "email": "ichiro.tanaka@example.jp"
                },
                "beneficiary": {
                    "lastName": "田中",
                    "firstName": "花子",
                    "lastNameKana": "タナカ",
                    "firstNameKana": "ハナコ",
                    "birthDate": "1987-07-01",
                    "relationship": "配偶者",
                    "postalCode": "1000001",
                    "prefecture": "東京都",
                    "city": "千代田区"
                },
                "isInsuredSameAsApplicant": false,
                "isBeneficiarySameAsApplicant": false
            }]
        })
    }
}

/// Fixture for raw field values
pub struct ValueFixtures;

impl ValueFixtures {
    /// Phone numbers that pass the phone schema
    pub fn valid_phone_numbers() -> Vec<&'static str> {
        vec!["0312345678", "09012345678"]
    }

    /// Phone numbers that fail the phone schema
    pub fn invalid_phone_numbers() -> Vec<&'static str> {
        vec!["03-1234-5678", "031234567", "090123456789", "０９０１２３４５６７８"]
    }

    /// Email addresses that pass the email schema
    pub fn valid_emails() -> Vec<&'static str> {
        vec!["taro@example.com", "taro.tanaka@example.co.jp"]
    }

    /// Email addresses that fail the email schema
    pub fn invalid_emails() -> Vec<&'static str> {
        vec!["taro", "taro@", "@example.com", "taro@example", "taro@@example.com"]
    }

    /// The applicant's birth date as a calendar date
    pub fn applicant_birth_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(1985, 3, 15).expect("valid fixture date")
    }
}
