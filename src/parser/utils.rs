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

//! Span trimming, delimiter stripping and literal separator splitting.
//!
//! Every helper works on located spans so that fragments keep their offsets
//! into the original input for diagnostics.

use crate::ast::Span;
use crate::diagnostics::GrammarError;
use nom::Parser;
use nom::Slice;
use nom::{
    bytes::complete::{tag, take_until},
    error::context,
    sequence::terminated,
};

use super::PResult;

/// Trims leading/trailing whitespace while keeping the span offset exact.
pub(super) fn trim(input: Span<'_>) -> Span<'_> {
    let text = *input.fragment();
    let start = text.len() - text.trim_start().len();
    let end = start + text[start..].trim_end().len();
    input.slice(start..end)
}

/// Removes one `prefix`/`suffix` pair when the trimmed input has both.
///
/// The check is positional only: the first prefix and the last suffix need
/// not match each other, so `(1, 2) vs (3, 4)` becomes `1, 2) vs (3, 4`.
/// Input without the pair comes back trimmed.
pub(super) fn strip_delimited<'a>(input: Span<'a>, prefix: &str, suffix: &str) -> Span<'a> {
    let input = trim(input);
    let text = *input.fragment();
    if text.len() >= prefix.len() + suffix.len()
        && text.starts_with(prefix)
        && text.ends_with(suffix)
    {
        trim(input.slice(prefix.len()..text.len() - suffix.len()))
    } else {
        input
    }
}

/// Splits on every occurrence of `separator`, left to right.
///
/// Always yields at least one fragment; an empty input yields one empty span.
pub(super) fn split_list<'a>(input: Span<'a>, separator: &str) -> Vec<Span<'a>> {
    let text = *input.fragment();
    let mut fragments = Vec::new();
    let mut start = 0;
    for (idx, _) in text.match_indices(separator) {
        fragments.push(input.slice(start..idx));
        start = idx + separator.len();
    }
    fragments.push(input.slice(start..));
    fragments
}

/// Splits around the first occurrence of `separator`.
///
/// `expected` names the separator in the error message when it is absent.
pub(super) fn split_first<'a>(
    input: Span<'a>,
    separator: &'static str,
    expected: &'static str,
) -> Result<(Span<'a>, Span<'a>), GrammarError> {
    let parsed: PResult<'a, Span<'a>> =
        context(expected, terminated(take_until(separator), tag(separator))).parse(input);
    // The unconsumed remainder is everything after the separator.
    parsed
        .map(|(tail, head)| (head, tail))
        .map_err(|err| GrammarError::from_nom(err, input))
}

/// Splits around a separator that must occur exactly once.
pub(super) fn split_unique<'a>(
    input: Span<'a>,
    separator: &'static str,
    expected: &'static str,
) -> Result<(Span<'a>, Span<'a>), GrammarError> {
    let (head, tail) = split_first(input, separator, expected)?;
    if let Some(idx) = tail.fragment().find(separator) {
        let repeated = tail.slice(idx..idx + separator.len());
        return Err(GrammarError::structural(
            format!("Syntax error: {expected} must appear only once"),
            repeated,
        ));
    }
    Ok((head, tail))
}
