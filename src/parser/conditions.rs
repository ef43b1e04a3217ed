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

//! Linear conditions and quantifier (extra variable) clauses.

use crate::ast::Span;
use crate::diagnostics::GrammarError;
use indexmap::IndexMap;

use super::utils::{split_list, split_unique, strip_delimited};

/// Separator between conditions of one subdomain.
const CONDITION_SEPARATOR: &str = " and ";
/// Separator between quantifier clauses.
const CLAUSE_SEPARATOR: &str = ", ";

fn should_insert_mul(current: char, next: char) -> bool {
    current.is_ascii_digit() && next.is_ascii_alphabetic()
}

/// Inserts ` * ` between every digit immediately followed by a letter.
///
/// Barvinok writes coefficients glued to variables (`5e0`, `3b1`). The rule
/// is context-free, so a digit inside a name is split too when a letter
/// follows it (`x2y` becomes `x2 * y`).
pub fn insert_mult(input: &str) -> String {
    let needs_insertion = input
        .chars()
        .zip(input.chars().skip(1))
        .any(|(current, next)| should_insert_mul(current, next));
    if !needs_insertion {
        return input.to_string();
    }

    let mut result = String::with_capacity(input.len() + 8);
    let mut it = input.chars().peekable();
    while let Some(current) = it.next() {
        result.push(current);
        if let Some(&next) = it.peek() {
            if should_insert_mul(current, next) {
                result.push_str(" * ");
            }
        }
    }
    result
}

/// Normalizes one linear condition.
///
/// Drops an optional enclosing parenthesis pair, makes coefficient products
/// explicit and rewrites equality ` = ` to ` == `. Multiplication is inserted
/// first so the equality token is never touched by it.
pub fn normalize_condition(condition: &str) -> String {
    let condition = strip_delimited(Span::new(condition), "(", ")");
    insert_mult(condition.fragment()).replace(" = ", " == ")
}

/// Parses a conjunction `c1 and c2 and ...` into normalized conditions.
pub(super) fn condition_list(input: Span<'_>) -> Vec<String> {
    split_list(input, CONDITION_SEPARATOR)
        .into_iter()
        .map(|fragment| normalize_condition(fragment.fragment()))
        .collect()
}

/// Parses `name = expr, name = expr, ...` into an ordered map.
///
/// `None` means the subdomain has no `exists` block. A repeated name keeps
/// its last definition.
pub(super) fn quantifier_map(
    input: Option<Span<'_>>,
) -> Result<IndexMap<String, String>, GrammarError> {
    let mut quantifiers = IndexMap::new();
    let Some(input) = input else {
        return Ok(quantifiers);
    };

    for clause in split_list(input, CLAUSE_SEPARATOR) {
        let (name, value) = split_unique(clause, " = ", "' = ' in quantifier clause")?;
        quantifiers.insert(name.fragment().to_string(), value.fragment().to_string());
    }
    Ok(quantifiers)
}
