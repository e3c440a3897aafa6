//! Hosts: the I/O collaborators around the engine.
//!
//! The engine only ever sees a text snapshot and a selection and returns a
//! new text and selection. Everything that owns an actual editable region
//! lives here: reading a snapshot out of it, resolving a selection, and
//! writing the result back.

mod file;
mod pipe;
mod watch;

pub use file::FileRegion;
pub use pipe::run_pipe;
pub use watch::run_watch;

use anyhow::Result;
use tracing::debug;

use crate::engine::{CalcEngine, Selection};

/// An editable region of text the engine can process.
///
/// `snapshot` supplies the current content and selection; implementations
/// that cannot resolve a real selection degrade to [`Selection::origin`]
/// rather than failing. `write_back` replaces the region's content and
/// places the caret; the offsets it receives index into the exact text the
/// engine returned.
pub trait EditableRegion {
    /// A human-readable label for logging.
    fn describe(&self) -> String;

    fn snapshot(&mut self) -> Result<(String, Selection)>;

    fn write_back(&mut self, text: &str, selection: Selection) -> Result<()>;
}

/// Run one snapshot -> process -> write-back cycle over a region.
///
/// Writes back only when the engine reports a change, so calling this on an
/// already-processed region is a guaranteed no-op. Returns whether a write
/// happened.
pub fn process_region(engine: &CalcEngine, region: &mut dyn EditableRegion) -> Result<bool> {
    let (text, selection) = region.snapshot()?;
    let outcome = engine.process(&text, selection);
    if !outcome.changed {
        debug!(region = %region.describe(), "no expressions, leaving region untouched");
        return Ok(false);
    }
    region.write_back(&outcome.text, outcome.selection)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory region used to observe the driver's write-back policy.
    struct MemRegion {
        text: String,
        writes: usize,
    }

    impl EditableRegion for MemRegion {
        fn describe(&self) -> String {
            "mem".to_string()
        }

        fn snapshot(&mut self) -> Result<(String, Selection)> {
            Ok((self.text.clone(), Selection::origin()))
        }

        fn write_back(&mut self, text: &str, _selection: Selection) -> Result<()> {
            self.text = text.to_string();
            self.writes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_write_back_only_when_changed() {
        let engine = CalcEngine::new();
        let mut region = MemRegion {
            text: "=(2+2)".to_string(),
            writes: 0,
        };

        assert!(process_region(&engine, &mut region).unwrap());
        assert_eq!(region.text, "4");
        assert_eq!(region.writes, 1);

        // Re-running over the processed text must not write again.
        assert!(!process_region(&engine, &mut region).unwrap());
        assert_eq!(region.writes, 1);
    }

    #[test]
    fn test_plain_text_never_writes() {
        let engine = CalcEngine::new();
        let mut region = MemRegion {
            text: "hello world".to_string(),
            writes: 0,
        };
        assert!(!process_region(&engine, &mut region).unwrap());
        assert_eq!(region.writes, 0);
    }
}
