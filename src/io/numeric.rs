// src/io/numeric.rs
//
// Default-to-zero conversions for dataset fields.
//
// A field whose first character is not a digit converts to 0. This covers
// empty cells and placeholders, but it also means an absent value and a
// literal zero cannot be told apart, and negative numbers read as 0.
// Callers that want to report defaulting use the `*_checked` variants.

/// Integer value of `field`, or 0 if it does not start with a digit.
pub fn safe_int(field: &str) -> u32 {
    safe_int_checked(field).unwrap_or(0)
}

/// Float value of `field`, or 0.0 if it does not start with a digit.
pub fn safe_float(field: &str) -> f64 {
    safe_float_checked(field).unwrap_or(0.0)
}

/// Like [`safe_int`], but `None` where the plain conversion would default.
///
/// Only the leading run of digits is read (`"12abc"` is 12).
/// A value too large for `u32` is treated as unreadable.
pub fn safe_int_checked(field: &str) -> Option<u32> {
    if !starts_with_digit(field) {
        return None;
    }
    let end = field
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(field.len());
    field[..end].parse().ok()
}

/// Like [`safe_float`], but `None` where the plain conversion would default.
///
/// Reads the longest prefix of the form `digits[.digits][(e|E)[+|-]digits]`,
/// so `"1.5e2x"` is 150 and `"72 pm"` is 72.
pub fn safe_float_checked(field: &str) -> Option<f64> {
    if !starts_with_digit(field) {
        return None;
    }
    field[..float_prefix_len(field.as_bytes())].parse().ok()
}

fn starts_with_digit(field: &str) -> bool {
    field.as_bytes().first().is_some_and(u8::is_ascii_digit)
}

fn float_prefix_len(bytes: &[u8]) -> usize {
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = digits_from(0);
    if bytes.get(end) == Some(&b'.') {
        end = digits_from(end + 1);
    }

    // Exponent only counts when at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    end
}
