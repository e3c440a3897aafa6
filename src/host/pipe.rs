//! One-shot stdin -> stdout filter host.

use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use tracing::debug;

use crate::engine::{CalcEngine, Selection};

/// Read stdin to EOF, process it once, and write the result to stdout.
///
/// There is no caret on a pipe, so the selection degrades to the origin.
/// The output is written unconditionally (a pipe has nothing to leave
/// untouched), but unchanged input passes through byte-identical.
pub fn run_pipe(engine: &CalcEngine) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let outcome = engine.process(&input, Selection::origin());
    debug!(changed = outcome.changed, "pipe buffer processed");

    io::stdout()
        .write_all(outcome.text.as_bytes())
        .context("failed to write stdout")
}
