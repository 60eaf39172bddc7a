//! Core Kernel - Foundational building blocks for enrollment validation
//!
//! This crate provides the leaf components every form step relies on:
//! - Text classifiers for Japanese input (katakana, full-width detection,
//!   phone numbers, postal codes, email addresses)
//! - The canonical date codec converting between calendar dates, compact
//!   `YYYYMMDD` numbers, ISO strings, and display strings
//!
//! Everything here is pure and total: invalid input yields `false` or a
//! sentinel value, never a panic.

pub mod text;
pub mod temporal;

pub use text::{
    is_valid_katakana, is_valid_phone_number, is_valid_postal_code, is_valid_email,
    has_full_width, is_full_width_char, normalize_half_width, format_postal_code,
};
pub use temporal::{
    date_to_compact, compact_to_date, iso_to_compact, compact_to_iso,
    format_for_display, format_wareki, is_compact_in_range, parse_iso, has_iso_shape,
    DateRange, Era, TemporalError,
};
