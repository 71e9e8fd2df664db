use std::io::{BufRead, ErrorKind, Write};

use regex::Regex;
use thiserror::Error;

use crate::emit::write_entry;
use crate::symbol::Symbol;

/// Errors produced while scanning a definitions header.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Read or write failure on the underlying streams.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Input bytes are not valid UTF-8.
    #[error("input is not valid UTF-8 at line {line}")]
    Encoding {
        line: usize,
        source: std::io::Error,
    },
}

/// Counts accumulated over one scan pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Input lines consumed.
    pub lines: usize,
    /// Symbol entries written.
    pub symbols: usize,
}

/// Matches macro-definition lines and captures their symbol names.
///
/// A line matches when, after trimming surrounding whitespace, it contains
/// the `#define` token, whitespace, and a `UC_`-prefixed identifier followed
/// by at least one more whitespace character. Anything may precede the token
/// (a commented-out definition still matches) and trailing content is
/// ignored. Because trimming happens first, a definition with no value after
/// the identifier never matches.
pub struct Extractor {
    pattern: Regex,
}

impl Extractor {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"#define\s+(UC_\w+)\s+").expect("definition pattern is valid"),
        }
    }

    /// Test one line, returning the captured identifier on a match.
    pub fn match_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.pattern
            .captures(line.trim())
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Extract every symbol from in-memory content, in input order.
    ///
    /// Line numbers are 1-based. Duplicate names are kept: each matching
    /// line yields its own [`Symbol`].
    pub fn extract_str(&self, content: &str) -> Vec<Symbol> {
        content
            .lines()
            .enumerate()
            .filter_map(|(idx, line)| {
                self.match_line(line)
                    .map(|name| Symbol::new(name, idx + 1))
            })
            .collect()
    }

    /// Single-pass scan: read lines from `reader`, write one table entry to
    /// `writer` per matching line, preserving input order.
    ///
    /// No line is retained after its own processing step. The writer is
    /// flushed before returning. Non-matching lines are skipped silently.
    pub fn scan<R: BufRead, W: Write>(
        &self,
        reader: R,
        writer: &mut W,
    ) -> Result<ScanReport, ExtractError> {
        let mut report = ScanReport::default();

        for line in reader.lines() {
            report.lines += 1;
            let line = line.map_err(|e| match e.kind() {
                ErrorKind::InvalidData => ExtractError::Encoding {
                    line: report.lines,
                    source: e,
                },
                _ => ExtractError::Io(e),
            })?;

            if let Some(name) = self.match_line(&line) {
                write_entry(writer, name)?;
                report.symbols += 1;
            }
        }

        writer.flush()?;
        Ok(report)
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_line_captures_prefixed_identifier() {
        let extractor = Extractor::new();
        assert_eq!(
            extractor.match_line("#define UC_FOO 0x01"),
            Some("UC_FOO")
        );
    }

    #[test]
    fn match_line_ignores_trailing_content() {
        let extractor = Extractor::new();
        assert_eq!(
            extractor.match_line("#define UC_BAR_BAZ   0x1234  // comment"),
            Some("UC_BAR_BAZ")
        );
    }

    #[test]
    fn match_line_trims_surrounding_whitespace() {
        let extractor = Extractor::new();
        assert_eq!(
            extractor.match_line("   #define UC_SPACED 0x20\t"),
            Some("UC_SPACED")
        );
    }

    #[test]
    fn commented_out_definition_still_matches() {
        // The token may appear anywhere in the trimmed line, comments included.
        let extractor = Extractor::new();
        assert_eq!(
            extractor.match_line("// #define UC_IGNORED 1"),
            Some("UC_IGNORED")
        );
    }

    #[test]
    fn definition_without_value_does_not_match() {
        // Trimming removes trailing whitespace before the search, so the
        // required whitespace after the identifier is never present.
        let extractor = Extractor::new();
        assert_eq!(extractor.match_line("#define UC_FOO"), None);
        assert_eq!(extractor.match_line("#define UC_FOO   "), None);
    }

    #[test]
    fn prefix_must_follow_the_define_token() {
        let extractor = Extractor::new();
        assert_eq!(extractor.match_line("#define XUC_FOO 1"), None);
        assert_eq!(extractor.match_line("#define FOO_UC_BAR 1"), None);
    }

    #[test]
    fn unrelated_lines_do_not_match() {
        let extractor = Extractor::new();
        assert_eq!(extractor.match_line(""), None);
        assert_eq!(extractor.match_line("int x = UC_FOO;"), None);
        assert_eq!(extractor.match_line("#include \"unicode.h\""), None);
    }

    #[test]
    fn extract_str_preserves_order_and_duplicates() {
        let extractor = Extractor::new();
        let content = "\
#define UC_ALPHA 1
not a definition
#define UC_BETA 2
#define UC_ALPHA 3
";
        let symbols = extractor.extract_str(content);
        assert_eq!(
            symbols,
            vec![
                Symbol::new("UC_ALPHA", 1),
                Symbol::new("UC_BETA", 3),
                Symbol::new("UC_ALPHA", 4),
            ]
        );
    }

    #[test]
    fn scan_writes_one_entry_per_match() {
        let extractor = Extractor::new();
        let input = "\
// Unicode characters
#define UC_FOO 0x01
#define UC_BAR_BAZ   0x1234  // comment
plain text
";
        let mut output = Vec::new();
        let report = extractor.scan(input.as_bytes(), &mut output).unwrap();

        assert_eq!(report.lines, 4);
        assert_eq!(report.symbols, 2);
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "    SYM(UC_FOO),\n    SYM(UC_BAR_BAZ),\n"
        );
    }

    #[test]
    fn scan_of_empty_input_writes_nothing() {
        let extractor = Extractor::new();
        let mut output = Vec::new();
        let report = extractor.scan("".as_bytes(), &mut output).unwrap();

        assert_eq!(report, ScanReport::default());
        assert!(output.is_empty());
    }

    #[test]
    fn scan_reports_invalid_utf8_with_line_number() {
        let extractor = Extractor::new();
        let input: &[u8] = b"#define UC_OK 1\n\xff\xfe bad bytes\n";
        let mut output = Vec::new();

        let err = extractor.scan(input, &mut output).unwrap_err();
        match err {
            ExtractError::Encoding { line, .. } => assert_eq!(line, 2),
            other => panic!("expected encoding error, got {other:?}"),
        }
    }
}
