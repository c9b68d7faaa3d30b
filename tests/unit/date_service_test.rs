//! Unit tests for the DateService public API.
//!
//! These tests exercise day-key derivation from date-input values and the
//! "set to today" behavior over the page form model.

use rstest::rstest;

use histoday::services::date_service::{DateService, DateServiceTrait};
use histoday::types::page::FormState;

/// Day keys are "MM-DD" with both parts zero-padded to width 2, whatever
/// the padding of the input.
#[rstest]
#[case("2024-03-07", "03-07")]
#[case("2024-3-7", "03-07")]
#[case("1999-12-31", "12-31")]
#[case("2024-1-01", "01-01")]
fn day_key_is_zero_padded(#[case] input: &str, #[case] expected: &str) {
    let service = DateService::new();
    assert_eq!(service.to_compact_day_key(input), Some(expected.to_string()));
}

/// Empty input and inputs with fewer than three '-'-separated parts yield
/// no day key, without panicking.
#[rstest]
#[case("")]
#[case("2024")]
#[case("2024-03")]
#[case("03-07")]
#[case("not a date")]
fn malformed_input_yields_none(#[case] input: &str) {
    let service = DateService::new();
    assert_eq!(service.to_compact_day_key(input), None);
}

/// Trailing parts beyond the day are ignored.
#[test]
fn test_extra_parts_are_ignored() {
    let service = DateService::new();
    assert_eq!(
        service.to_compact_day_key("2024-3-7-extra"),
        Some("03-07".to_string())
    );
}

/// Today's value has the "YYYY-MM-DD" shape and round-trips through the
/// day-key conversion.
#[test]
fn test_today_value_round_trips_to_day_key() {
    let service = DateService::new();
    let today = service.today_value();

    assert_eq!(today.len(), 10);
    let key = service.to_compact_day_key(&today).unwrap();
    assert_eq!(key.len(), 5);
    assert_eq!(&today[5..], key.as_str());
}

/// apply_today writes today's date into a registered field.
#[test]
fn test_apply_today_sets_registered_field() {
    let service = DateService::new();
    let mut form = FormState::new();
    form.register("#quiz-date");

    assert!(service.apply_today(&mut form, "#quiz-date"));
    assert_eq!(form.value("#quiz-date"), Some(service.today_value().as_str()));
}

/// apply_today on an unregistered selector is a silent no-op.
#[test]
fn test_apply_today_missing_field_is_noop() {
    let service = DateService::new();
    let mut form = FormState::new();
    form.register("#quiz-date");

    assert!(!service.apply_today(&mut form, "#other-input"));
    assert_eq!(form.value("#other-input"), None);
    assert_eq!(form.value("#quiz-date"), Some(""));
}
