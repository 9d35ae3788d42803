//! Citation identifiers as path segments.

/// Characters `encodeURIComponent` leaves alone beyond RFC 3986 unreserved.
const KEPT_MARKS: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
];

/// Percent-encodes a citation identifier for use as a single path segment.
///
/// Matches browser `encodeURIComponent`: ASCII alphanumerics and
/// `- _ . ~ ! * ' ( )` pass through, everything else (including `/`) is
/// UTF-8 percent-encoded with upper-case hex. Pure; no network access.
pub fn get_citation_file_path(citation: &str) -> String {
    let encoded = urlencoding::encode(citation);
    // `%` itself encodes to `%25`, so these sequences only come from the marks.
    KEPT_MARKS
        .iter()
        .fold(encoded.into_owned(), |acc, (esc, raw)| acc.replace(esc, raw))
}
