use std::borrow::Cow;

/// Removes magnitude separators (`_` and `,`) from numeric-looking fields.
///
/// A field is numeric-looking when, after an optional sign, it starts with a
/// digit or with a `.` followed by a digit. Other fields are returned
/// untouched so that names containing `_` and the `,` operator survive.
///
/// # Example
/// ```
/// use hd::util::text::strip_magnitude_separators;
///
/// assert_eq!(strip_magnitude_separators("0b0001_0000"), "0b00010000");
/// assert_eq!(strip_magnitude_separators("1,000,000"), "1000000");
/// assert_eq!(strip_magnitude_separators(","), ",");
/// assert_eq!(strip_magnitude_separators("my_name"), "my_name");
/// ```
#[must_use]
pub fn strip_magnitude_separators(field: &str) -> Cow<'_, str> {
    if !looks_numeric(field) || !field.contains(['_', ',']) {
        return Cow::Borrowed(field);
    }
    Cow::Owned(field.chars().filter(|c| !matches!(c, '_' | ',')).collect())
}

fn looks_numeric(field: &str) -> bool {
    let unsigned = field.strip_prefix(['+', '-']).unwrap_or(field);
    let mut chars = unsigned.chars();
    match chars.next() {
        Some(c) if c.is_ascii_digit() => true,
        Some('.') => chars.next().is_some_and(|c| c.is_ascii_digit()),
        _ => false,
    }
}
