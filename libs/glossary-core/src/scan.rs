//! Brace-balanced scanning over LaTeX source.

/// Find the `}` matching the `{` at byte index `open`.
///
/// Returns `None` when `open` does not point at an opening brace (including
/// out-of-range indices) or the buffer ends before the brace closes. Handles
/// arbitrary nesting: `{a{b}c}` matches the outer pair. Braces are ASCII, so
/// scanning bytes never lands inside a multi-byte UTF-8 sequence.
pub fn find_matching_brace(text: &str, open: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes.get(open) != Some(&b'{') {
        return None;
    }

    let mut depth = 1usize;
    for (i, &b) in bytes.iter().enumerate().skip(open + 1) {
        match b {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Byte index of the first `{` at or after `from`.
pub fn find_open_brace(text: &str, from: usize) -> Option<usize> {
    let tail = text.as_bytes().get(from..)?;
    tail.iter().position(|&b| b == b'{').map(|i| from + i)
}
