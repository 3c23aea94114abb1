use super::*;

// =============================================================
// strip
// =============================================================

#[test]
fn strip_removes_spaces() {
    assert_eq!(strip("1234 5678 9012"), "123456789012");
}

#[test]
fn strip_removes_arbitrary_separators() {
    assert_eq!(strip("1234-5678-9012"), "123456789012");
    assert_eq!(strip(" 12a34b "), "1234");
}

#[test]
fn strip_of_empty_is_empty() {
    assert_eq!(strip(""), "");
}

// =============================================================
// is_canonical
// =============================================================

#[test]
fn canonical_accepts_twelve_digits() {
    assert!(is_canonical("123456789012"));
}

#[test]
fn canonical_rejects_wrong_length() {
    assert!(!is_canonical("12345678901"));
    assert!(!is_canonical("1234567890123"));
}

#[test]
fn canonical_rejects_formatted_form() {
    assert!(!is_canonical("1234 5678 9012"));
}

// =============================================================
// format_display / format_input
// =============================================================

#[test]
fn display_groups_in_fours() {
    assert_eq!(format_display("123456789012"), "1234 5678 9012");
}

#[test]
fn display_handles_partial_input() {
    assert_eq!(format_display("12345"), "1234 5");
    assert_eq!(format_display(""), "");
}

#[test]
fn input_formatting_caps_at_twelve_digits() {
    assert_eq!(format_input("12345678901299999"), "1234 5678 9012");
}

#[test]
fn input_formatting_drops_non_digits_then_groups() {
    assert_eq!(format_input("12ab34 5678-9012"), "1234 5678 9012");
}

#[test]
fn display_and_strip_round_trip() {
    let canonical = "123456789012";
    assert_eq!(strip(&format_display(canonical)), canonical);
}
