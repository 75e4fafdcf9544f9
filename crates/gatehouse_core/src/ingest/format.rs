//! Column value formatters applied during ingestion.

/// Canonicalizes a 10-digit phone number as `(AAA) BBB-CCCC`.
///
/// Strips every non-digit character first; when anything other than
/// exactly 10 digits remains, the input is returned unmodified with its
/// original punctuation intact.
///
/// # Invariants
/// - Idempotent: formatting punctuation contributes no digits, so applying
///   the function to its own output is a no-op.
pub fn format_phone_number(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() != 10 {
        return raw.to_string();
    }
    format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
}
