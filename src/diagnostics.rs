/*
MIT License

Copyright (c) 2026 Raja Lehtihet and Wael El Oraiby

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

//! Parse diagnostics with source snippets and caret pointers.

use crate::ast::{SourceSpan, Span};
use nom::error::{VerboseError, VerboseErrorKind};
use std::fmt;
use thiserror::Error;

/// Source label used when the caller does not name its input.
pub(crate) const INLINE_SOURCE: &str = "<inline>";

/// Source-mapped description of one parse failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Human-readable error message.
    pub message: String,
    /// Source file/path label (`""` when unavailable).
    pub file: String,
    /// 1-based line number (`0` when unavailable).
    pub line: usize,
    /// 1-based column number (`0` when unavailable).
    pub column: usize,
    /// Byte range of the offending fragment.
    pub span: SourceSpan,
    /// Source line snippet where the error occurred.
    pub snippet: String,
    /// Caret pointer aligned to `snippet`.
    pub pointer: String,
}

impl Diagnostic {
    /// Creates a diagnostic with no location information.
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            file: String::new(),
            line: 0,
            column: 0,
            span: SourceSpan::default(),
            snippet: String::new(),
            pointer: String::new(),
        }
    }

    /// Creates a source-mapped diagnostic from a [`SourceSpan`] and source label.
    ///
    /// Line and column are computed against `source`, the text exactly as the
    /// caller supplied it (before newline folding).
    pub fn from_span_in_source(
        message: impl Into<String>,
        file: impl Into<String>,
        source: &str,
        span: SourceSpan,
    ) -> Self {
        let start = span.start.min(source.len());
        let before = source.get(..start).unwrap_or("");
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |idx| idx + 1);
        let column = before.get(line_start..).unwrap_or("").chars().count() + 1;

        let snippet = source.lines().nth(line - 1).unwrap_or("").to_string();
        // Clamp the caret to the snippet: spans may run past the line end.
        let line_len = snippet.chars().count();
        let pointer_column = (column - 1).min(line_len);
        let requested_len = source
            .get(start..span.end.min(source.len()))
            .map_or(0, |text| text.chars().count())
            .max(1);
        let max_len = line_len.saturating_sub(pointer_column).max(1);
        let pointer_len = requested_len.min(max_len);
        let pointer = format!("{}{}", " ".repeat(pointer_column), "^".repeat(pointer_len));

        Self {
            message: message.into(),
            file: file.into(),
            line,
            column,
            span,
            snippet,
            pointer,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line == 0 || self.column == 0 {
            if self.file.is_empty() {
                return write!(f, "{}", self.message);
            }
            return write!(f, "{} ({})", self.message, self.file);
        }

        let location = if self.file.is_empty() {
            format!("line {}, column {}", self.line, self.column)
        } else {
            format!("{}:{}:{}", self.file, self.line, self.column)
        };

        write!(
            f,
            "{}\n --> {}\n  |\n{:>3} | {}\n  | {}",
            self.message, location, self.line, self.snippet, self.pointer
        )
    }
}

impl std::error::Error for Diagnostic {}

/// Failure categories of the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A required separator is missing or repeated.
    StructuralMismatch,
    /// Pieces disagree on their variable lists.
    Inconsistent,
}

/// Errors returned by the parsing entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A required unique separator (`" -> "`, `" : "`, `": "`, `" = "`) is
    /// missing or appears more than once.
    #[error("{0}")]
    StructuralMismatch(Diagnostic),
    /// Two pieces declare different variable lists.
    #[error("{0}")]
    Inconsistent(Diagnostic),
}

impl ParseError {
    /// Returns the failure category.
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            ParseError::StructuralMismatch(_) => ParseErrorKind::StructuralMismatch,
            ParseError::Inconsistent(_) => ParseErrorKind::Inconsistent,
        }
    }

    /// Returns the source-mapped diagnostic.
    pub fn diagnostic(&self) -> &Diagnostic {
        match self {
            ParseError::StructuralMismatch(diagnostic) | ParseError::Inconsistent(diagnostic) => {
                diagnostic
            }
        }
    }
}

/// Location-only error raised inside the grammar.
///
/// Converted to [`ParseError`] once the caller's original text is at hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GrammarError {
    pub(crate) kind: ParseErrorKind,
    pub(crate) message: String,
    pub(crate) span: SourceSpan,
}

impl GrammarError {
    pub(crate) fn structural(message: impl Into<String>, fragment: Span<'_>) -> Self {
        Self {
            kind: ParseErrorKind::StructuralMismatch,
            message: message.into(),
            span: SourceSpan::of(fragment),
        }
    }

    pub(crate) fn inconsistent(message: impl Into<String>, fragment: Span<'_>) -> Self {
        Self {
            kind: ParseErrorKind::Inconsistent,
            message: message.into(),
            span: SourceSpan::of(fragment),
        }
    }

    /// Converts a `nom` verbose error into a structural error over `fragment`.
    pub(crate) fn from_nom(err: nom::Err<VerboseError<Span<'_>>>, fragment: Span<'_>) -> Self {
        let message = match err {
            nom::Err::Incomplete(_) => "Incomplete input".to_string(),
            nom::Err::Error(e) | nom::Err::Failure(e) => match e.errors.last() {
                // The outermost context names what the rule was looking for.
                Some((_, VerboseErrorKind::Context(ctx))) => format!("Syntax error: expected {ctx}"),
                Some((_, VerboseErrorKind::Char(c))) => format!("Syntax error: expected '{c}'"),
                Some((_, VerboseErrorKind::Nom(kind))) => format!("Syntax error near {kind:?}"),
                None => "Syntax error".to_string(),
            },
        };
        Self::structural(message, fragment)
    }

    pub(crate) fn into_parse_error(self, file: &str, source: &str) -> ParseError {
        let diagnostic = Diagnostic::from_span_in_source(self.message, file, source, self.span);
        match self.kind {
            ParseErrorKind::StructuralMismatch => ParseError::StructuralMismatch(diagnostic),
            ParseErrorKind::Inconsistent => ParseError::Inconsistent(diagnostic),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locates_offsets_on_later_lines() {
        let source = "{ [s] -> 1 : s = 0;\n[s] 1 : s >= 1 }";
        let start = source.find("[s] 1").expect("fragment present");
        let span = SourceSpan {
            start,
            end: start + "[s] 1".len(),
        };
        let diagnostic = Diagnostic::from_span_in_source("boom", "f.qpoly", source, span);
        assert_eq!(diagnostic.line, 2);
        assert_eq!(diagnostic.column, 1);
        assert_eq!(diagnostic.snippet, "[s] 1 : s >= 1 }");
        assert_eq!(diagnostic.pointer, "^^^^^");
        assert!(diagnostic.to_string().contains("f.qpoly:2:1"));
    }

    #[test]
    fn caret_is_clamped_to_the_snippet_line() {
        let source = "ab\ncd";
        let span = SourceSpan { start: 1, end: 5 };
        let diagnostic = Diagnostic::from_span_in_source("x", "", source, span);
        assert_eq!(diagnostic.line, 1);
        assert_eq!(diagnostic.column, 2);
        assert_eq!(diagnostic.pointer, " ^");
        assert!(diagnostic.to_string().contains("line 1, column 2"));
    }

    #[test]
    fn message_only_renders_bare_message() {
        let diagnostic = Diagnostic::message_only("nothing here");
        assert_eq!(diagnostic.to_string(), "nothing here");
    }
}
