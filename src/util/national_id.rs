//! Canonical and display forms of the national ID.
//!
//! The canonical form is exactly 12 digits and is the only form that may
//! cross the client boundary. The display form groups digits in runs of
//! four separated by spaces. Input fields hold the display form while the
//! user types; it is stripped back to canonical before submission.

#[cfg(test)]
#[path = "national_id_test.rs"]
mod national_id_test;

/// Number of digits in a canonical national ID.
pub const CANONICAL_LEN: usize = 12;

/// Strip every non-digit character, leaving the canonical digit run.
pub fn strip(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Whether `value` is already in canonical form: exactly 12 digits.
pub fn is_canonical(value: &str) -> bool {
    value.len() == CANONICAL_LEN && value.chars().all(|c| c.is_ascii_digit())
}

/// Format a canonical ID for display: `"123456789012"` → `"1234 5678 9012"`.
///
/// Inputs shorter than canonical are grouped as far as they go, so this is
/// also usable for partially-typed values.
pub fn format_display(canonical: &str) -> String {
    let mut out = String::with_capacity(canonical.len() + canonical.len() / 4);
    for (i, c) in canonical.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// Normalize raw keyboard input into the display form: drop non-digits,
/// cap at 12 digits, and regroup in runs of four.
pub fn format_input(raw: &str) -> String {
    let digits: String = strip(raw).chars().take(CANONICAL_LEN).collect();
    format_display(&digits)
}
