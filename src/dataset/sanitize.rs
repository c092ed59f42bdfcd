//! Free-text sanitization for comma-delimited storage

/// Flatten free text into a single CSV-safe line.
///
/// Commas and line breaks become spaces, runs of whitespace collapse to
/// a single space and both ends are trimmed. Applying the function twice
/// yields the same result as applying it once.
pub fn sanitize_for_csv(text: &str) -> String {
    text.replace(',', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
