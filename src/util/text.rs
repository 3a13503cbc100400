// src/util/text.rs

/// Marker appended when a manual note is cut down to its first line
pub const ELLIPSIS: &str = "...";

/// Reduce manually entered text to a one-line summary.
///
/// The input is trimmed, then only its first line is kept; `...` is
/// appended when anything followed it.
///
/// # Examples
///
/// ```
/// use noteclip::util::text::first_line_summary;
///
/// assert_eq!(first_line_summary("hello\nworld"), "hello...");
/// assert_eq!(first_line_summary("  hello  "), "hello");
/// ```
pub fn first_line_summary(text: &str) -> String {
    let trimmed = text.trim();
    match trimmed.split_once('\n') {
        Some((first, _)) => format!("{first}{ELLIPSIS}"),
        None => trimmed.to_string(),
    }
}

/// First line of a body for single-line display
pub fn display_line(body: &str) -> &str {
    body.lines().next().unwrap_or("")
}
