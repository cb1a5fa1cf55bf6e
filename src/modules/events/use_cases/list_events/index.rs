/// Parses the `{index}` path segment as a zero-based event position.
///
/// Only plain decimal digits are accepted. Signs, whitespace, fractions and
/// values that overflow `usize` yield `None`, which callers report as a
/// missing event.
pub fn parse_index(raw: &str) -> Option<usize> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
