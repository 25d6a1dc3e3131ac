//! Tests for check predicates.

use formgate::check::Check;

const PRICE_PATTERN: &str = r"^[$]?[0-9]+([.]\d{2})?$";
const DATE_PATTERN: &str = "^(0[1-9]|1[0-2])/(0[1-9]|[1-2][0-9]|3[0-1])/[0-9]{4}$";

#[test]
fn test_presence_rejects_empty_and_whitespace() {
    let check = Check::presence("\u{2716}");
    assert!(check.run("").is_err());
    assert!(check.run("   ").is_err());
    assert!(check.run("NYC").is_ok());
}

#[test]
fn test_failed_check_reports_its_message() {
    let check = Check::presence("required");
    assert_eq!(check.run(""), Err("required"));
}

#[test]
fn test_price_accepts_whole_dollars_and_cents() {
    let check = Check::format(PRICE_PATTERN, "\u{2716}").unwrap();
    assert!(check.run("10").is_ok());
    assert!(check.run("$10.00").is_ok());
    assert!(check.run("10.50").is_ok());
}

#[test]
fn test_price_requires_exactly_two_decimal_digits() {
    let check = Check::format(PRICE_PATTERN, "\u{2716}").unwrap();
    assert!(check.run("10.5").is_err());
    assert!(check.run("10.").is_err());
    assert!(check.run("ten").is_err());
}

#[test]
fn test_date_bounds_month_and_day() {
    let check = Check::format(DATE_PATTERN, "\u{2716}").unwrap();
    assert!(check.run("01/15/2020").is_ok());
    assert!(check.run("12/31/2020").is_ok());
    assert!(check.run("13/40/2020").is_err());
    assert!(check.run("00/15/2020").is_err());
    assert!(check.run("1/5/2020").is_err());
}

#[test]
fn test_format_rejects_bad_pattern() {
    assert!(Check::format("(", "\u{2716}").is_err());
}

#[test]
fn test_email_leaves_emptiness_to_presence() {
    let check = Check::email("\u{2716}");
    assert!(check.run("").is_ok());
    assert!(check.run("alice@example.com").is_ok());
    assert!(check.run("not-an-email").is_err());
}

#[test]
fn test_failure_message_accessor() {
    let check = Check::presence("required");
    assert_eq!(check.failure_message(), "required");
}
