//! Calculator module for evaluating inline arithmetic expressions.
//!
//! This module provides functionality to:
//! - Detect `=(...)` bracket expressions inside a text buffer
//! - Evaluate their payloads (sanitize, tokenize, convert to postfix, run)
//! - Format results for splicing back into text
//! - Copy results to the clipboard

mod clipboard;
mod detection;
mod evaluation;
mod postfix;
mod sanitize;
mod tokens;

pub use clipboard::copy_result;
pub use detection::{BracketMatch, BracketMatches, contains_expression, find_expressions};
pub use evaluation::{DEFAULT_MAX_DEPTH, ERROR_SENTINEL, evaluate_expression, format_result};
pub use postfix::{EvalError, evaluate, to_postfix};
pub use sanitize::sanitize;
pub use tokens::{Token, precedence, tokenize};
