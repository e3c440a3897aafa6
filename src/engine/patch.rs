//! Buffer splicing and cursor remapping.
//!
//! Replacements are applied rightmost-first so that the offsets of
//! not-yet-applied matches, which were scanned against the original buffer,
//! stay valid. The selection is remapped against each individual edit.

/// A caret or highlighted range inside a text buffer.
///
/// Offsets are byte offsets into the buffer's UTF-8 text. `start > end` is
/// legal (hosts may report anchor and focus in either order); both offsets
/// are remapped independently, so no ordering is assumed anywhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A collapsed caret at offset zero, the degraded form used when a host
    /// cannot resolve the real selection.
    pub fn origin() -> Self {
        Self { start: 0, end: 0 }
    }
}

/// Splice `replacement` over `buf[start..end]` and remap the selection
/// against that single edit.
///
/// Both boundaries must lie on char boundaries of `buf`; the scanner only
/// produces ASCII-delimited ranges, so this holds for every match it emits.
pub(crate) fn splice(
    buf: &mut String,
    start: usize,
    end: usize,
    replacement: &str,
    selection: Selection,
) -> Selection {
    buf.replace_range(start..end, replacement);
    Selection {
        start: remap_offset(selection.start, start, end, replacement.len()),
        end: remap_offset(selection.end, start, end, replacement.len()),
    }
}

/// Remap one offset across a `[start, end)` -> `replacement_len` edit.
///
/// - strictly after the edit: shift by the length delta
/// - inside the edit or at either boundary: snap to just after the
///   replacement text
/// - strictly before the edit: unchanged
///
/// The result is clamped to >= 0; the shift case cannot actually go
/// negative because `p > end` bounds it below by `start +
/// replacement_len`, but the clamp keeps the arithmetic honest.
fn remap_offset(p: usize, start: usize, end: usize, replacement_len: usize) -> usize {
    if p > end {
        let delta = replacement_len as i64 - (end - start) as i64;
        (p as i64 + delta).max(0) as usize
    } else if p >= start {
        start + replacement_len
    } else {
        p
    }
}
