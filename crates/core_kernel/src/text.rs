//! Text classifiers for Japanese form input
//!
//! Pure predicates and normalizers that the field schemas build on. None of
//! them panic.
//!
//! Full-width detection is separate from the format checks: a phone number
//! typed with IME full-width digits and one that is too short get different
//! messages upstream.

use validator::ValidateEmail;

/// First katakana syllable accepted in name readings (ァ)
const KATAKANA_START: char = '\u{30A1}';
/// Last katakana syllable accepted in name readings (ヶ)
const KATAKANA_END: char = '\u{30F6}';
/// Prolonged sound mark (ー)
const PROLONGED_SOUND_MARK: char = '\u{30FC}';

/// Half-width katakana block, which is single-byte in Shift_JIS
const HALF_WIDTH_KATAKANA: std::ops::RangeInclusive<char> = '\u{FF61}'..='\u{FF9F}';

/// Full-width forms of the printable ASCII range (！ .. ～)
const FULL_WIDTH_ASCII: std::ops::RangeInclusive<char> = '\u{FF01}'..='\u{FF5E}';
const IDEOGRAPHIC_SPACE: char = '\u{3000}';
const FULL_WIDTH_OFFSET: u32 = 0xFEE0;

/// Returns true if every character is katakana
///
/// Accepts ァ through ヶ plus the prolonged sound mark. The empty string is
/// not katakana; emptiness is reported by the required rule before this runs.
pub fn is_valid_katakana(s: &str) -> bool {
    !s.is_empty()
        && s.chars().all(|c| {
            (KATAKANA_START..=KATAKANA_END).contains(&c) || c == PROLONGED_SOUND_MARK
        })
}

/// Returns true if `s` is exactly 10 or 11 ASCII digits
pub fn is_valid_phone_number(s: &str) -> bool {
    matches!(s.len(), 10 | 11) && s.bytes().all(|b| b.is_ascii_digit())
}

/// Returns true if `s` is exactly 7 ASCII digits
pub fn is_valid_postal_code(s: &str) -> bool {
    s.len() == 7 && s.bytes().all(|b| b.is_ascii_digit())
}

/// Returns true if `s` looks like a deliverable address
///
/// Requires a single `@`, a non-empty local part, and a domain with at least
/// one dot between non-empty labels, on top of the HTML5 address grammar.
pub fn is_valid_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let dotted = domain.contains('.') && domain.split('.').all(|label| !label.is_empty());

    dotted && s.validate_email()
}

/// Returns true if `c` is a double-byte character
///
/// Single-byte means ASCII or half-width katakana; everything else counts as
/// full-width for the purpose of half-width-only fields.
pub fn is_full_width_char(c: char) -> bool {
    !c.is_ascii() && !HALF_WIDTH_KATAKANA.contains(&c)
}

/// Returns true if any character in `s` is full-width
///
/// Used as a rejecting guard on phone numbers, postal codes, and email
/// addresses, checked before the format predicate.
pub fn has_full_width(s: &str) -> bool {
    s.chars().any(is_full_width_char)
}

/// Folds full-width ASCII variants and the ideographic space to half-width
///
/// Characters without a half-width counterpart are left unchanged.
pub fn normalize_half_width(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c == IDEOGRAPHIC_SPACE {
                ' '
            } else if FULL_WIDTH_ASCII.contains(&c) {
                char::from_u32(c as u32 - FULL_WIDTH_OFFSET).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Renders a 7-digit postal code as `123-4567`
///
/// Returns the input unchanged when it is not a valid postal code.
pub fn format_postal_code(s: &str) -> String {
    if is_valid_postal_code(s) {
        format!("{}-{}", &s[..3], &s[3..])
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_katakana() {
        assert!(is_valid_katakana("タナカ"));
        assert!(is_valid_katakana("ヴィーナス"));
        assert!(!is_valid_katakana("たなか"));
        assert!(!is_valid_katakana("田中"));
        assert!(!is_valid_katakana("ﾀﾅｶ"));
        assert!(!is_valid_katakana(""));
    }

    #[test]
    fn test_phone_number() {
        assert!(is_valid_phone_number("09012345678"));
        assert!(is_valid_phone_number("0312345678"));
        assert!(!is_valid_phone_number("123"));
        assert!(!is_valid_phone_number("090-1234-5678"));
        assert!(!is_valid_phone_number("０９０１２３４５６７８"));
    }

    #[test]
    fn test_postal_code() {
        assert!(is_valid_postal_code("1000001"));
        assert!(!is_valid_postal_code("100-0001"));
        assert!(!is_valid_postal_code("１２３４５６７"));
    }

    #[test]
    fn test_email() {
        assert!(is_valid_email("taro.tanaka@example.co.jp"));
        assert!(!is_valid_email("taro@localhost"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("taro@@example.com"));
        assert!(!is_valid_email("taro@example..com"));
        assert!(!is_valid_email("taro example.com"));
    }

    #[test]
    fn test_full_width_detection() {
        assert!(has_full_width("１２３"));
        assert!(has_full_width("abc＠example.com"));
        assert!(has_full_width("090\u{3000}1234"));
        assert!(!has_full_width("090-1234-5678"));
        assert!(!has_full_width("ｱｲｳ"));
    }

    #[test]
    fn test_normalize_half_width() {
        assert_eq!(normalize_half_width("０９０－１２３４"), "090-1234");
        assert_eq!(normalize_half_width("ｔａｒｏ＠ｅｘ．ｊｐ"), "taro@ex.jp");
        assert_eq!(normalize_half_width("田中\u{3000}太郎"), "田中 太郎");
    }

    #[test]
    fn test_format_postal_code() {
        assert_eq!(format_postal_code("1000001"), "100-0001");
        assert_eq!(format_postal_code("12345"), "12345");
    }
}
