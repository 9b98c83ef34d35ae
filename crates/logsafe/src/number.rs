/// Canonical decimal text for an f64.
/// - shortest ryu form, with a trailing `.0` trimmed
/// - `-0` normalized to `0`
/// - non-finite values render as their text names
pub(crate) fn canonical_f64(value: f64) -> String {
    if !value.is_finite() {
        return String::from(nonfinite_name(value));
    }
    if value == 0.0 {
        return String::from("0");
    }
    let mut buf = ryu::Buffer::new();
    let raw = buf.format_finite(value);
    String::from(raw.strip_suffix(".0").unwrap_or(raw))
}

/// Text name for a non-finite f64. JSON numbers cannot carry these, so the
/// serializer emits them as strings of this name.
pub(crate) fn nonfinite_name(value: f64) -> &'static str {
    if value.is_nan() {
        "NaN"
    } else if value.is_sign_positive() {
        "Infinity"
    } else {
        "-Infinity"
    }
}
