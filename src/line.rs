//! Line extraction (§4.1): reduces arbitrary input to the final line.

/// Everything strictly after the last newline. Empty if `input` ends with
/// a newline; the whole input if it contains no newline at all.
pub(crate) fn last_line(input: &str) -> &str {
    match input.rfind('\n') {
        Some(idx) => &input[idx + 1..],
        None => input,
    }
}
