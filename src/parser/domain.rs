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

//! Domain and subdomain parsers.
//!
//! Grammar:
//! - domain: `SUB or SUB or ...`, each `SUB` optionally parenthesized
//! - subdomain: `exists (QUANTIFIERS: CONDITIONS)` or bare `CONDITIONS`

use crate::ast::{Span, Subdomain};
use crate::diagnostics::GrammarError;
use tracing::trace;

use super::conditions::{condition_list, quantifier_map};
use super::utils::{split_first, split_list, strip_delimited};

/// Parses one subdomain, with or without an `exists` block.
pub(super) fn subdomain(input: Span<'_>) -> Result<Subdomain, GrammarError> {
    let (quantifiers, conditions) = if input.fragment().contains("exists") {
        let body = strip_delimited(input, "exists (", ")");
        let (quantifiers, conditions) =
            split_first(body, ": ", "': ' after the quantifiers of an exists block")?;
        (Some(quantifiers), conditions)
    } else {
        (None, input)
    };

    let subdomain = Subdomain {
        extra_variables: quantifier_map(quantifiers)?,
        linear_conditions: condition_list(conditions),
    };
    trace!(
        offset = input.location_offset(),
        extra_variables = subdomain.extra_variables.len(),
        linear_conditions = subdomain.linear_conditions.len(),
        "parsed subdomain"
    );
    Ok(subdomain)
}

/// Parses a union of subdomains separated by ` or `.
pub(super) fn domain(input: Span<'_>) -> Result<Vec<Subdomain>, GrammarError> {
    split_list(input, " or ")
        .into_iter()
        .map(|fragment| subdomain(strip_delimited(fragment, "(", ")")))
        .collect()
}
