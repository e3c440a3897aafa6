//! # instacalc
//!
//! Inline calculator for plain text: scans a buffer for `=(...)` bracket
//! expressions, evaluates them with standard operator precedence and
//! nested-expression resolution, and splices the results back in while
//! keeping a caret/selection range valid against the edits.
//!
//! The [`engine::CalcEngine`] is the whole public surface for embedding:
//! hand it a text snapshot and a selection, get back the rewritten text and
//! the remapped selection. The hosts in [`host`] wire that engine to
//! concrete regions (pipes, files, watched files).

pub mod calculator;
pub mod config;
pub mod engine;
pub mod host;

pub use engine::{CalcEngine, EngineConfig, ProcessOutcome, Selection};
