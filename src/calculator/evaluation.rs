//! Expression evaluation pipeline.
//!
//! Takes the raw payload of a bracket expression through nested-expression
//! resolution, sanitization, tokenizing, infix-to-postfix conversion, and
//! stack evaluation, then formats the result for splicing back into text.
//! Every failure along the way degrades to the literal `ERROR` sentinel;
//! nothing here aborts processing of sibling expressions.

use tracing::trace;

use super::detection::find_expressions;
use super::postfix::{evaluate, to_postfix};
use super::sanitize::sanitize;
use super::tokens::tokenize;

/// Replacement text used whenever an expression cannot produce a finite
/// number.
pub const ERROR_SENTINEL: &str = "ERROR";

/// Default ceiling for nested-expression recursion.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Evaluate one bracket-expression payload to its replacement text.
///
/// Returns either a formatted number or [`ERROR_SENTINEL`]. `max_depth`
/// bounds nested `=(...)` resolution; at the ceiling the expression
/// degrades to the sentinel instead of recursing further.
pub fn evaluate_expression(payload: &str, max_depth: usize) -> String {
    evaluate_at_depth(payload, 0, max_depth)
}

fn evaluate_at_depth(payload: &str, depth: usize, max_depth: usize) -> String {
    if depth >= max_depth {
        return ERROR_SENTINEL.to_string();
    }

    let resolved = resolve_nested(payload, depth, max_depth);
    let sanitized = sanitize(&resolved);
    let tokens = tokenize(&sanitized);
    match evaluate(&to_postfix(&tokens)) {
        Ok(value) => format_result(value),
        Err(fault) => {
            trace!(payload, %fault, "expression faulted");
            ERROR_SENTINEL.to_string()
        }
    }
}

/// Replace every nested `=(...)` occurrence in `payload` with its evaluated
/// value before the payload itself is evaluated.
///
/// Each nested match is strictly shorter than its enclosing payload, so the
/// recursion terminates; `max_depth` additionally bounds it on adversarial
/// input. A nested failure splices in the sentinel text, which then fails
/// sanitization of the outer expression rather than aborting anything.
fn resolve_nested(payload: &str, depth: usize, max_depth: usize) -> String {
    let mut out = String::with_capacity(payload.len());
    let mut consumed = 0;

    for nested in find_expressions(payload) {
        out.push_str(&payload[consumed..nested.start]);
        out.push_str(&evaluate_at_depth(nested.payload, depth + 1, max_depth));
        consumed = nested.end;
    }

    if consumed == 0 {
        return payload.to_string();
    }
    out.push_str(&payload[consumed..]);
    out
}

/// Canonical display form of an evaluation result.
///
/// Non-finite values have no display form and yield the sentinel. Whole
/// numbers render without a fractional part; everything else renders with
/// two fractional digits, then trailing zeros and a bare trailing point are
/// trimmed (`2.50` -> `2.5`, `2.00` -> `2`).
pub fn format_result(value: f64) -> String {
    if !value.is_finite() {
        return ERROR_SENTINEL.to_string();
    }
    if value == 0.0 {
        // Covers -0.0 as well.
        return "0".to_string();
    }
    if value.fract() == 0.0 {
        return format!("{}", value);
    }

    let fixed = format!("{:.2}", value);
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
