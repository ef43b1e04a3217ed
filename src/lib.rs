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

//! Parser for the piecewise quasipolynomials printed by Barvinok.
//!
//! This crate provides:
//! - A parser from Barvinok's textual output to typed records
//!   ([`Function`], [`Piece`], [`Subdomain`]).
//! - Normalization of linear conditions (`5e0 = s` becomes `5 * e0 == s`).
//! - Rich parse diagnostics with line/column/caret output.
//! - A batch driver converting a directory of `.qpoly` files to JSON.
//!
//! # Pipeline
//!
//! 1. Fold newlines into spaces.
//! 2. Split the function into pieces, each piece into a quasipolynomial and a
//!    domain, each domain into subdomains.
//! 3. Parse quantifier blocks and normalize linear conditions.
//! 4. Check that every piece declares the same variables.
//!
//! # Example
//!
//! ```
//! let function = barvinok_qpoly::parse_function("{ [s] -> 1 : s = 0 }").unwrap();
//! assert_eq!(function.variables, vec!["s"]);
//! assert_eq!(function.pieces[0].formula, "1");
//! assert_eq!(function.pieces[0].subdomains[0].linear_conditions, vec!["s == 0"]);
//! ```
//!
//! # JSON layout
//!
//! Records serialize as
//! `{"variables": [...], "pieces": [{"formula": "...", "subdomains":
//! [{"extra variables": {...}, "linear conditions": [...]}]}]}`.

mod ast;
mod batch;
mod diagnostics;
mod parser;

pub use ast::{Function, ParsedPiece, Piece, Quasipolynomial, SourceSpan, Subdomain};
pub use batch::{
    convert_directory, convert_file, output_file_name, render_json, BatchError, BatchOptions,
    BatchReport, ConvertedFile,
};
pub use diagnostics::{Diagnostic, ParseError, ParseErrorKind};
pub use parser::{
    insert_mult, normalize_condition, parse_conditions, parse_domain, parse_function,
    parse_function_in_source, parse_piece, parse_quantifiers, parse_quasipolynomial,
    parse_subdomain, strip_delimiters, strip_parens,
};

impl std::str::FromStr for Function {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_function(s)
    }
}
