//! File-backed editable regions.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::EditableRegion;
use crate::engine::Selection;

/// A plain file treated as one editable region.
///
/// Files carry no caret, so the selection degrades to the origin; the
/// remapped selection returned by the engine is simply dropped on
/// write-back.
pub struct FileRegion {
    path: PathBuf,
}

impl FileRegion {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EditableRegion for FileRegion {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn snapshot(&mut self) -> Result<(String, Selection)> {
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        Ok((text, Selection::origin()))
    }

    fn write_back(&mut self, text: &str, _selection: Selection) -> Result<()> {
        fs::write(&self.path, text)
            .with_context(|| format!("failed to write {}", self.path.display()))
    }
}
