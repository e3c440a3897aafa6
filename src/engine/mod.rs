//! The buffer-processing engine.
//!
//! One explicit engine value is constructed by the host process and invoked
//! once per change event with a buffer snapshot and selection. It holds
//! nothing but configuration: every call is a pure function of its
//! arguments, so the engine is trivially reusable and safe to share.

mod patch;

pub use patch::Selection;

use tracing::debug;

use crate::calculator::{contains_expression, evaluate_expression, find_expressions};

/// Engine tunables.
#[derive(Clone, Copy, Debug)]
pub struct EngineConfig {
    /// Ceiling for nested-expression recursion; at the ceiling the
    /// expression degrades to the error sentinel.
    pub max_depth: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: crate::calculator::DEFAULT_MAX_DEPTH,
        }
    }
}

/// Result of processing one buffer snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessOutcome {
    /// The rewritten buffer (identical to the input when nothing matched).
    pub text: String,
    /// The selection remapped against every applied edit.
    pub selection: Selection,
    /// Whether the buffer differs from the input. Hosts must only write
    /// back when this is set, which is what keeps watch-style hosts from
    /// re-triggering themselves.
    pub changed: bool,
}

/// The inline-calculator engine.
#[derive(Clone, Debug, Default)]
pub struct CalcEngine {
    config: EngineConfig,
}

impl CalcEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Evaluate a single payload directly, without bracket scanning.
    ///
    /// Returns the formatted number or the error sentinel.
    pub fn evaluate_expression(&self, payload: &str) -> String {
        evaluate_expression(payload, self.config.max_depth)
    }

    /// Scan `text` for bracket expressions, evaluate each, and splice the
    /// results in, remapping `selection` across the edits.
    ///
    /// Matches are scanned against the input snapshot and applied rightmost
    /// first, so earlier matches' offsets stay valid while later (further
    /// right) ones have already been replaced. Evaluation failures splice
    /// in the error sentinel; they never abort the other matches.
    pub fn process(&self, text: &str, selection: Selection) -> ProcessOutcome {
        if !contains_expression(text) {
            return ProcessOutcome {
                text: text.to_string(),
                selection,
                changed: false,
            };
        }

        let matches: Vec<_> = find_expressions(text).collect();
        debug!(count = matches.len(), "bracket expressions found");

        let mut buf = text.to_string();
        let mut sel = selection;
        for m in matches.iter().rev() {
            let replacement = self.evaluate_expression(m.payload);
            sel = patch::splice(&mut buf, m.start, m.end, &replacement, sel);
        }

        let changed = buf != text;
        ProcessOutcome {
            text: buf,
            selection: sel,
            changed,
        }
    }
}
