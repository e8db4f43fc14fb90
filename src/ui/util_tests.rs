#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::util::*;

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate("groceries", 20), "groceries");
}

#[test]
fn test_truncate_exact_length() {
    assert_eq!(truncate("Utilities", 9), "Utilities");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("Entertainment", 6), "Enter…");
}

#[test]
fn test_truncate_zero_max() {
    assert_eq!(truncate("Food", 0), "");
}

#[test]
fn test_truncate_unicode() {
    assert_eq!(truncate("café résumé", 5), "café…");
}

#[test]
fn test_truncate_one_char() {
    assert_eq!(truncate("dinner", 1), "…");
}

// ── format_amount ──────────────────────────────────────────

#[test]
fn test_format_amount_basic() {
    assert_eq!(format_amount(dec!(1234.56)), "$1,234.56");
}

#[test]
fn test_format_amount_zero() {
    assert_eq!(format_amount(dec!(0)), "$0.00");
}

#[test]
fn test_format_amount_negative_remaining() {
    assert_eq!(format_amount(dec!(-10)), "-$10.00");
}

#[test]
fn test_format_amount_large() {
    assert_eq!(format_amount(dec!(1234567.89)), "$1,234,567.89");
}

#[test]
fn test_format_amount_pads_decimals() {
    assert_eq!(format_amount(dec!(1.5)), "$1.50");
}

#[test]
fn test_format_amount_rounds_split_share() {
    // 100 / 3
    assert_eq!(format_amount(dec!(33.333333333)), "$33.33");
}

// ── clamp_scroll ──────────────────────────────────────────

#[test]
fn test_clamp_scroll_within_range() {
    assert_eq!(clamp_scroll(2, 10, 5), 2);
}

#[test]
fn test_clamp_scroll_past_end() {
    assert_eq!(clamp_scroll(9, 10, 5), 5);
}

#[test]
fn test_clamp_scroll_short_list() {
    assert_eq!(clamp_scroll(3, 2, 5), 0);
}

// ── spend_ratio / progress_bar ─────────────────────────────

#[test]
fn test_spend_ratio_partial() {
    assert!((spend_ratio(dec!(25), dec!(100)) - 0.25).abs() < f64::EPSILON);
}

#[test]
fn test_spend_ratio_capped() {
    assert!((spend_ratio(dec!(110), dec!(100)) - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_spend_ratio_zero_budget() {
    assert!((spend_ratio(dec!(5), dec!(0)) - 1.0).abs() < f64::EPSILON);
    assert!(spend_ratio(dec!(0), dec!(0)).abs() < f64::EPSILON);
}

#[test]
fn test_spend_ratio_huge_spend_on_tiny_budget() {
    let spent = dec!(1000000000000000000000000000);
    assert!((spend_ratio(spent, dec!(0.01)) - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_progress_bar_half() {
    assert_eq!(progress_bar(0.5, 4), "[██░░]");
}

#[test]
fn test_progress_bar_full() {
    assert_eq!(progress_bar(1.0, 3), "[███]");
}
