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

//! Quasipolynomial, piece and whole-function parsers.

use crate::ast::{Function, ParsedPiece, Piece, Quasipolynomial, Span};
use crate::diagnostics::GrammarError;
use tracing::debug;

use super::domain::domain;
use super::utils::{split_first, split_list, split_unique, strip_delimited};

/// A parsed piece plus the fragment holding its variable list.
pub(super) struct LocatedPiece<'a> {
    pub(super) piece: ParsedPiece,
    pub(super) variables: Span<'a>,
}

/// Parses `[v1, v2, ...] -> FORMULA`.
///
/// Returns the variable-list fragment alongside for later diagnostics.
pub(super) fn quasipolynomial(
    input: Span<'_>,
) -> Result<(Quasipolynomial, Span<'_>), GrammarError> {
    let (variables, formula) =
        split_unique(input, " -> ", "' -> ' between variables and formula")?;
    let names = split_list(strip_delimited(variables, "[", "]"), ", ")
        .into_iter()
        .map(|name| name.fragment().to_string())
        .collect();
    Ok((
        Quasipolynomial {
            variables: names,
            formula: formula.fragment().to_string(),
        },
        variables,
    ))
}

/// Parses `QUASIPOLYNOMIAL : DOMAIN`, cutting at the first ` : `.
pub(super) fn piece(input: Span<'_>) -> Result<LocatedPiece<'_>, GrammarError> {
    let (head, tail) = split_first(input, " : ", "' : ' between formula and domain")?;
    let (quasipolynomial, variables) = quasipolynomial(head)?;
    let subdomains = domain(tail)?;
    Ok(LocatedPiece {
        piece: ParsedPiece {
            variables: quasipolynomial.variables,
            formula: quasipolynomial.formula,
            subdomains,
        },
        variables,
    })
}

/// Parses `{ PIECE; PIECE; ... }` and checks that all pieces agree on their
/// variables.
///
/// `input` must already have its newlines folded into spaces.
pub(super) fn function(input: Span<'_>) -> Result<Function, GrammarError> {
    let body = strip_delimited(input, "{", "}");
    let located = split_list(body, "; ")
        .into_iter()
        .map(piece)
        .collect::<Result<Vec<_>, _>>()?;

    let variables = located
        .first()
        .map(|first| first.piece.variables.clone())
        .unwrap_or_default();
    for (index, item) in located.iter().enumerate() {
        if item.piece.variables != variables {
            return Err(GrammarError::inconsistent(
                format!(
                    "inconsistent variable lists: piece {} declares [{}] but piece 1 declares [{}]",
                    index + 1,
                    item.piece.variables.join(", "),
                    variables.join(", ")
                ),
                item.variables,
            ));
        }
    }

    let pieces: Vec<Piece> = located.into_iter().map(|item| item.piece.into()).collect();
    debug!(
        variables = ?variables,
        pieces = pieces.len(),
        "parsed piecewise function"
    );
    Ok(Function { variables, pieces })
}
