//! Phone number normalization.

/// Strip everything except ASCII digits from a raw phone number.
///
/// Total and idempotent: `"+1 (555) 123-4567"` becomes `"15551234567"`, and
/// input with no digits becomes the empty string.
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}
