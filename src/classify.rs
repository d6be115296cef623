//! Line classification
//!
//! Every line of a document is exactly one of [`LineKind::Comment`],
//! [`LineKind::Import`] or [`LineKind::Other`]. Classification looks at the
//! trimmed text only; callers always keep the original line for output.

/// Marker that opens a line comment.
pub const COMMENT_MARKER: &str = "//";

/// Keyword that opens an import statement.
///
/// The test is a plain prefix test, so `important();` is an import too.
pub const IMPORT_KEYWORD: &str = "import";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Comment,
    Import,
    Other,
}

/// Strip surrounding whitespace, including a byte-order mark.
pub fn trimmed(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

pub fn classify(line: &str) -> LineKind {
    let text = trimmed(line);
    if text.starts_with(COMMENT_MARKER) {
        LineKind::Comment
    } else if text.starts_with(IMPORT_KEYWORD) {
        LineKind::Import
    } else {
        LineKind::Other
    }
}

pub fn is_blank(line: &str) -> bool {
    trimmed(line).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_basic() {
        assert_eq!(classify("// header"), LineKind::Comment);
        assert_eq!(classify("import fs from 'fs';"), LineKind::Import);
        assert_eq!(classify("console.log('hi');"), LineKind::Other);
        assert_eq!(classify(""), LineKind::Other);
    }

    #[test]
    fn test_classify_uses_trimmed_text() {
        assert_eq!(classify("    // indented comment"), LineKind::Comment);
        assert_eq!(classify("\timport a;\r"), LineKind::Import);
        assert_eq!(classify("\u{feff}import a;"), LineKind::Import);
    }

    #[test]
    fn test_comment_wins_over_import() {
        assert_eq!(classify("// import a;"), LineKind::Comment);
    }

    #[test]
    fn test_prefix_is_literal() {
        assert_eq!(classify("important();"), LineKind::Import);
        assert_eq!(classify("/ not a comment"), LineKind::Other);
        assert_eq!(classify("Import a;"), LineKind::Other);
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("  \t\r"));
        assert!(!is_blank(" x "));
    }
}
