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

//! Parsed records for piecewise quasipolynomials, plus source spans.
//!
//! The records serialize to the same JSON layout the conversion scripts have
//! always produced: `variables` and `pieces` at the top level, and
//! `"extra variables"` / `"linear conditions"` inside each subdomain.

use indexmap::IndexMap;
use nom_locate::LocatedSpan;
use serde::{Deserialize, Serialize};

/// Parser input span type carrying byte offsets.
pub type Span<'a> = LocatedSpan<&'a str>;

/// Byte range of a fragment inside the parsed input.
///
/// Offsets are valid for the caller's original text: newline folding replaces
/// one byte with one byte, so positions never shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceSpan {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl SourceSpan {
    /// Creates a source span covering exactly one fragment.
    pub fn of(fragment: Span<'_>) -> Self {
        let start = fragment.location_offset();
        Self {
            start,
            end: start + fragment.fragment().len(),
        }
    }

    /// Returns span length in bytes.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns whether the span covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A piecewise quasipolynomial function.
///
/// All pieces share the same ordered variable list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    /// Declared variables, in source order.
    pub variables: Vec<String>,
    /// Pieces, in source order.
    pub pieces: Vec<Piece>,
}

/// One quasipolynomial together with its domain of validity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    /// Closed-form formula, kept verbatim (may contain `floor(...)`, `^`).
    pub formula: String,
    /// Disjoint subdomains whose union is the domain of the formula.
    pub subdomains: Vec<Subdomain>,
}

/// One region of a domain: floor-division variables plus linear conditions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Subdomain {
    /// Existentially quantified variables (`e0 -> floor((-1 + s)/5)`).
    ///
    /// Names are scoped to this subdomain.
    #[serde(rename = "extra variables")]
    pub extra_variables: IndexMap<String, String>,
    /// Normalized conditions (`5 * e0 == -1 + s`, `s >= 1`).
    #[serde(rename = "linear conditions")]
    pub linear_conditions: Vec<String>,
}

/// Left-hand side of a piece: `[vars] -> formula`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quasipolynomial {
    pub variables: Vec<String>,
    pub formula: String,
}

/// A piece before assembly into a [`Function`], still carrying its own
/// variable list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedPiece {
    pub variables: Vec<String>,
    pub formula: String,
    pub subdomains: Vec<Subdomain>,
}

impl From<ParsedPiece> for Piece {
    fn from(value: ParsedPiece) -> Self {
        Piece {
            formula: value.formula,
            subdomains: value.subdomains,
        }
    }
}

impl Function {
    /// Returns the total number of subdomains across all pieces.
    pub fn subdomain_count(&self) -> usize {
        self.pieces.iter().map(|piece| piece.subdomains.len()).sum()
    }
}
