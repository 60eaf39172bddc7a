//! Property-Based Test Generators
//!
//! Provides proptest strategies for raw field values on both sides of each
//! field schema.

use chrono::NaiveDate;
use proptest::prelude::*;

/// Strategy for non-empty full-width katakana readings
pub fn katakana_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            9 => (0x30A1u32..=0x30F6).prop_filter_map("katakana", char::from_u32),
            1 => Just('ー'),
        ],
        1..12,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

/// Strategy for names mixing hiragana and kanji, never valid katakana
pub fn non_katakana_name_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            (0x3041u32..=0x3096).prop_filter_map("hiragana", char::from_u32),
            (0x4E00u32..=0x9FA5).prop_filter_map("kanji", char::from_u32),
        ],
        1..8,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

/// Strategy for 10 or 11 digit phone numbers
pub fn phone_number_strategy() -> impl Strategy<Value = String> {
    "[0-9]{10,11}"
}

/// Strategy for digit strings of a length the phone schema rejects
pub fn wrong_length_phone_strategy() -> impl Strategy<Value = String> {
    prop_oneof!["[0-9]{1,9}", "[0-9]{12,15}"]
}

/// Strategy for 7 digit postal codes
pub fn postal_code_strategy() -> impl Strategy<Value = String> {
    "[0-9]{7}"
}

/// Strategy for calendar dates within the given years
pub fn date_strategy(min_year: i32, max_year: i32) -> impl Strategy<Value = NaiveDate> {
    (min_year..=max_year, 1u32..=12, 1u32..=31)
        .prop_filter_map("calendar date", |(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
}

/// Strategy for birth dates in canonical `YYYY-MM-DD` form within the years
pub fn birth_date_strategy(min_year: i32, max_year: i32) -> impl Strategy<Value = String> {
    date_strategy(min_year, max_year).prop_map(|date| date.format("%Y-%m-%d").to_string())
}

/// Strategy for the two "same as applicant" flags
pub fn flags_strategy() -> impl Strategy<Value = (bool, bool)> {
    (any::<bool>(), any::<bool>())
}
