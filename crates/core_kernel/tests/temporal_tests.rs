//! Comprehensive tests for the date codec
//!
//! Tests cover compact/ISO conversion, sentinel handling, display
//! formatting, era rendering, and DateRange.

use chrono::NaiveDate;
use core_kernel::temporal::{
    compact_to_date, compact_to_iso, date_to_compact, format_for_display, format_wareki,
    has_iso_shape, is_compact_in_range, iso_to_compact, parse_iso, DateRange, Era,
    TemporalError,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

mod compact {
    use super::*;

    #[test]
    fn test_date_to_compact_pads_month_and_day() {
        assert_eq!(date_to_compact(Some(date(2024, 1, 5))), 20240105);
        assert_eq!(date_to_compact(Some(date(1999, 12, 31))), 19991231);
    }

    #[test]
    fn test_date_to_compact_none_is_zero() {
        assert_eq!(date_to_compact(None), 0);
    }

    #[test]
    fn test_date_to_compact_rejects_short_years() {
        assert_eq!(date_to_compact(Some(date(999, 12, 31))), 0);
        assert_eq!(date_to_compact(Some(date(10000, 1, 1))), 0);
    }

    #[test]
    fn test_compact_to_date_valid() {
        assert_eq!(compact_to_date(19850315), Some(date(1985, 3, 15)));
    }

    #[test]
    fn test_compact_to_date_zero() {
        assert_eq!(compact_to_date(0), None);
    }

    #[test]
    fn test_compact_to_date_wrong_width() {
        assert_eq!(compact_to_date(9991231), None);
        assert_eq!(compact_to_date(202401051), None);
    }

    #[test]
    fn test_compact_to_date_february_31() {
        assert_eq!(compact_to_date(20230231), None);
    }

    #[test]
    fn test_compact_to_date_leap_day() {
        assert_eq!(compact_to_date(20240229), Some(date(2024, 2, 29)));
        assert_eq!(compact_to_date(20230229), None);
        assert_eq!(compact_to_date(19000229), None);
        assert_eq!(compact_to_date(20000229), Some(date(2000, 2, 29)));
    }

    #[test]
    fn test_compact_to_date_month_zero() {
        assert_eq!(compact_to_date(20240001), None);
        assert_eq!(compact_to_date(20240100), None);
    }
}

mod iso {
    use super::*;

    #[test]
    fn test_iso_to_compact_valid() {
        assert_eq!(iso_to_compact("1985-03-15"), 19850315);
    }

    #[test]
    fn test_iso_to_compact_malformed() {
        assert_eq!(iso_to_compact(""), 0);
        assert_eq!(iso_to_compact("1985/03/15"), 0);
        assert_eq!(iso_to_compact("19850315"), 0);
        assert_eq!(iso_to_compact("1985-3-15"), 0);
    }

    #[test]
    fn test_iso_to_compact_impossible_date() {
        assert_eq!(iso_to_compact("2023-02-31"), 0);
    }

    #[test]
    fn test_compact_to_iso_valid() {
        assert_eq!(compact_to_iso(20240105), "2024-01-05");
    }

    #[test]
    fn test_compact_to_iso_rejected_is_empty() {
        assert_eq!(compact_to_iso(0), "");
        assert_eq!(compact_to_iso(20230231), "");
        assert_eq!(compact_to_iso(123), "");
    }

    #[test]
    fn test_iso_shape_without_calendar() {
        assert!(has_iso_shape("2023-02-31"));
        assert!(parse_iso("2023-02-31").is_none());
        assert!(!has_iso_shape("２０２３-02-01"));
    }
}

mod display {
    use super::*;

    #[test]
    fn test_format_for_display() {
        assert_eq!(format_for_display(Some(date(1985, 3, 15)), "-"), "1985年3月15日");
    }

    #[test]
    fn test_format_for_display_placeholder() {
        assert_eq!(format_for_display(None, "未選択"), "未選択");
    }

    #[test]
    fn test_format_wareki_showa() {
        assert_eq!(format_wareki(date(1985, 3, 15)).as_deref(), Some("昭和60年3月15日"));
    }

    #[test]
    fn test_format_wareki_first_year() {
        assert_eq!(format_wareki(date(2019, 5, 1)).as_deref(), Some("令和元年5月1日"));
        assert_eq!(format_wareki(date(1989, 1, 8)).as_deref(), Some("平成元年1月8日"));
    }

    #[test]
    fn test_format_wareki_last_day_of_era() {
        assert_eq!(format_wareki(date(2019, 4, 30)).as_deref(), Some("平成31年4月30日"));
    }

    #[test]
    fn test_format_wareki_before_meiji() {
        assert_eq!(format_wareki(date(1850, 1, 1)), None);
    }

    #[test]
    fn test_era_year_of() {
        assert_eq!(Era::Taisho.year_of(date(1925, 1, 1)), 14);
    }
}

mod range {
    use super::*;

    #[test]
    fn test_is_compact_in_range_inclusive() {
        assert!(is_compact_in_range(19250101, 19250101, 20251231));
        assert!(is_compact_in_range(20251231, 19250101, 20251231));
        assert!(!is_compact_in_range(19241231, 19250101, 20251231));
        assert!(!is_compact_in_range(20260101, 19250101, 20251231));
    }

    #[test]
    fn test_is_compact_in_range_zero_never_matches() {
        assert!(!is_compact_in_range(0, 0, 20251231));
    }

    #[test]
    fn test_date_range_from_years() {
        let range = DateRange::from_years(1925, 2025).unwrap();
        assert_eq!(range.start, date(1925, 1, 1));
        assert_eq!(range.end, date(2025, 12, 31));
    }

    #[test]
    fn test_date_range_from_years_inverted() {
        let result = DateRange::from_years(2025, 1925);
        assert!(matches!(result, Err(TemporalError::InvalidRange { .. })));
    }

    #[test]
    fn test_date_range_contains_compact() {
        let range = DateRange::from_years(1925, 2025).unwrap();
        assert!(range.contains_compact(19850315));
        assert!(!range.contains_compact(20230231));
        assert!(!range.contains_compact(0));
    }
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn calendar_date() -> impl Strategy<Value = NaiveDate> {
        (1000i32..=9999, 1u32..=12, 1u32..=31)
            .prop_filter_map("not a calendar date", |(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
    }

    proptest! {
        #[test]
        fn compact_round_trip_preserves_date(d in calendar_date()) {
            prop_assert_eq!(compact_to_date(date_to_compact(Some(d))), Some(d));
        }

        #[test]
        fn iso_round_trip_preserves_compact(d in calendar_date()) {
            let n = date_to_compact(Some(d));
            prop_assert_eq!(iso_to_compact(&compact_to_iso(n)), n);
        }

        #[test]
        fn compact_order_matches_calendar_order(a in calendar_date(), b in calendar_date()) {
            let (ca, cb) = (date_to_compact(Some(a)), date_to_compact(Some(b)));
            prop_assert_eq!(a.cmp(&b), ca.cmp(&cb));
        }

        #[test]
        fn compact_to_date_never_panics(n in any::<u32>()) {
            let _ = compact_to_date(n);
            let _ = compact_to_iso(n);
        }

        #[test]
        fn accepted_compact_round_trips(n in 10_000_000u32..=99_999_999u32) {
            if compact_to_date(n).is_some() {
                prop_assert_eq!(iso_to_compact(&compact_to_iso(n)), n);
            }
        }
    }
}
