//! Line classifier — prefix tests only, no look-ahead.

/// Doc-comment marker.
pub const DOC_MARKER: &str = "///";

/// Availability-attribute marker.
pub const AVAILABILITY_MARKER: &str = "@available";

/// Category of one trimmed physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// `///` line; text after the marker with leading whitespace removed.
    Doc(&'a str),
    /// `@available(...)` line, kept whole.
    Availability(&'a str),
    /// Anything else; handed to the declaration matcher.
    Candidate(&'a str),
}

/// Classify a line. The input is trimmed here so callers may pass raw lines.
pub fn classify(line: &str) -> LineClass<'_> {
    let line = line.trim();
    if let Some(rest) = line.strip_prefix(DOC_MARKER) {
        return LineClass::Doc(rest.trim_start());
    }
    if line.starts_with(AVAILABILITY_MARKER) {
        return LineClass::Availability(line);
    }
    LineClass::Candidate(line)
}

/// Plain `//` comments (including `///` that slipped past classification).
pub fn is_comment(line: &str) -> bool {
    line.starts_with("//")
}

/// Attribute-only lines (`@MainActor`, `@frozen`, …) extend pending context
/// instead of invalidating it.
pub fn is_attribute(line: &str) -> bool {
    line.starts_with('@')
}
