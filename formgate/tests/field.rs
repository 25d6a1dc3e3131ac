//! Tests for field state and indicators.

use formgate::check::Check;
use formgate::field::{Field, FieldOptions, Indicator, Validity};

#[test]
fn test_indicator_starts_empty() {
    let field = Field::new("price");
    assert_eq!(field.indicator(), Indicator::None);
}

#[test]
fn test_mark_valid_uses_the_valid_message() {
    let field = Field::new("price").with_options(FieldOptions {
        valid_message: "ok".to_string(),
        blur_wait: None,
    });
    field.mark_valid();
    assert_eq!(field.indicator(), Indicator::Valid("ok".to_string()));
}

#[test]
fn test_set_value_resets_indicator() {
    let field = Field::new("price");
    field.mark_invalid("\u{2716}");
    field.set_value("$10.00");
    assert_eq!(field.indicator(), Indicator::None);
}

#[test]
fn test_checks_short_circuit_in_declaration_order() {
    let field = Field::new("price");
    field.add_check(Check::presence("missing"));
    field.add_check(Check::format(r"^[$]?[0-9]+([.]\d{2})?$", "bad format").unwrap());
    assert_eq!(field.run_checks(), Err("missing".to_string()));

    field.set_value("ten dollars");
    assert_eq!(field.run_checks(), Err("bad format".to_string()));

    field.set_value("$10.00");
    assert_eq!(field.run_checks(), Ok(()));
}

#[test]
fn test_clones_share_state() {
    let field = Field::new("price");
    let handle = field.clone();
    handle.set_value("10");
    assert_eq!(field.value(), "10");
    assert!(!field.is_empty());
}

#[test]
fn test_validity_only_valid_counts() {
    assert!(!Validity::Untouched.is_valid());
    assert!(!Validity::Invalid.is_valid());
    assert!(Validity::Valid.is_valid());
}

#[test]
fn test_dirty_flag_tracks_changes() {
    let field = Field::new("price");
    assert!(!field.is_dirty());
    field.set_value("10");
    assert!(field.is_dirty());
    field.clear_dirty();
    assert!(!field.is_dirty());
}

#[test]
fn test_clear_empties_value_and_indicator() {
    let field = Field::with_value("location", "NYC");
    field.mark_valid();
    field.clear();
    assert!(field.is_empty());
    assert_eq!(field.indicator(), Indicator::None);
}
