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

//! Parser for Barvinok piecewise quasipolynomials.
//!
//! The grammar is a fixed hierarchy of literal separators:
//!
//! ```text
//! function      { PIECE; PIECE; ... }                    separator "; "
//! piece         QUASIPOLYNOMIAL : DOMAIN                 first " : " only
//! quasipoly     [v1, v2, ...] -> FORMULA                 exactly one " -> "
//! domain        SUB or SUB or ...                        separator " or "
//! subdomain     exists (QUANTIFIERS: CONDITIONS)         first ": " only
//!               | CONDITIONS
//! quantifiers   e0 = floor(...), e1 = floor(...)         ", " and one " = " each
//! conditions    COND and COND and ...                    separator " and "
//! ```
//!
//! Formulas are not parsed; they are kept as opaque strings.
//!
//! Newlines are folded into spaces before parsing, so separators broken over
//! lines still match. Everything else about whitespace is significant inside
//! separators.

mod conditions;
mod domain;
mod function;
mod utils;

use crate::ast::{Function, ParsedPiece, Quasipolynomial, Span, Subdomain};
use crate::diagnostics::{ParseError, INLINE_SOURCE};
use indexmap::IndexMap;
use nom::{error::VerboseError, IResult};

pub use self::conditions::{insert_mult, normalize_condition};

type PResult<'a, O> = IResult<Span<'a>, O, VerboseError<Span<'a>>>;

/// Removes one `prefix`/`suffix` pair from the trimmed input when both are
/// present; otherwise returns the input trimmed.
///
/// Only the first prefix and the last suffix are checked, never their
/// pairing:
///
/// ```
/// use barvinok_qpoly::strip_delimiters;
///
/// assert_eq!(strip_delimiters("  [s, b1] ", "[", "]"), "s, b1");
/// assert_eq!(strip_delimiters("(1, 2) vs (3, 4)", "(", ")"), "1, 2) vs (3, 4");
/// assert_eq!(strip_delimiters("s >= 1", "(", ")"), "s >= 1");
/// ```
pub fn strip_delimiters<'a>(input: &'a str, prefix: &str, suffix: &str) -> &'a str {
    *utils::strip_delimited(Span::new(input), prefix, suffix).fragment()
}

/// [`strip_delimiters`] with `(` and `)`.
pub fn strip_parens(input: &str) -> &str {
    strip_delimiters(input, "(", ")")
}

/// Splits `c1 and c2 and ...` and normalizes every condition.
pub fn parse_conditions(input: &str) -> Vec<String> {
    conditions::condition_list(Span::new(input))
}

/// Parses the quantifier block of an `exists` subdomain.
///
/// `None` stands for a subdomain without `exists` and yields an empty map.
pub fn parse_quantifiers(input: Option<&str>) -> Result<IndexMap<String, String>, ParseError> {
    conditions::quantifier_map(input.map(Span::new))
        .map_err(|err| err.into_parse_error(INLINE_SOURCE, input.unwrap_or_default()))
}

/// Parses one subdomain.
pub fn parse_subdomain(input: &str) -> Result<Subdomain, ParseError> {
    domain::subdomain(Span::new(input)).map_err(|err| err.into_parse_error(INLINE_SOURCE, input))
}

/// Parses a domain (union of subdomains).
pub fn parse_domain(input: &str) -> Result<Vec<Subdomain>, ParseError> {
    domain::domain(Span::new(input)).map_err(|err| err.into_parse_error(INLINE_SOURCE, input))
}

/// Parses `[vars] -> formula`.
pub fn parse_quasipolynomial(input: &str) -> Result<Quasipolynomial, ParseError> {
    function::quasipolynomial(Span::new(input))
        .map(|(quasipolynomial, _)| quasipolynomial)
        .map_err(|err| err.into_parse_error(INLINE_SOURCE, input))
}

/// Parses one piece, `[vars] -> formula : domain`.
pub fn parse_piece(input: &str) -> Result<ParsedPiece, ParseError> {
    function::piece(Span::new(input))
        .map(|located| located.piece)
        .map_err(|err| err.into_parse_error(INLINE_SOURCE, input))
}

/// Parses a complete piecewise function.
pub fn parse_function(source: &str) -> Result<Function, ParseError> {
    parse_function_in_source(source, INLINE_SOURCE)
}

/// Parses a complete piecewise function while tagging diagnostics with a
/// source name/path.
pub fn parse_function_in_source(source: &str, source_name: &str) -> Result<Function, ParseError> {
    // One byte for one byte: offsets stay valid for `source`.
    let folded = source.replace('\n', " ");
    function::function(Span::new(&folded))
        .map_err(|err| err.into_parse_error(source_name, source))
}
