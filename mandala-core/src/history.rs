//! # History
//!
//! Linear undo/redo stacks of rasterized snapshots. The surface is the source
//! of truth while a gesture is in flight; history only ever sees whole
//! committed states, captured with the guide overlay removed.
//!
//! Stacks are unbounded, like the program this replaces. A long session can
//! hold a lot of pixels - a capacity bound is a known open item.

/// One committed surface state, guides excluded. Shared so a restore can sit
/// in the scene without copying the pixels back out of the stack.
pub type Snapshot = std::sync::Arc<image::RgbaImage>;

#[derive(Default)]
pub struct History {
    undo: Vec<Snapshot>,
    redo: Vec<Snapshot>,
}
impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    /// Commit a new edit. Standard linear history: a fresh edit invalidates
    /// everything that was undone.
    pub fn push_edit(&mut self, snapshot: Snapshot) {
        self.undo.push(snapshot);
        self.redo.clear();
    }
    /// Push onto undo without touching redo. Image loads go through here -
    /// the redo trail deliberately survives a load.
    pub fn push_preserving_redo(&mut self, snapshot: Snapshot) {
        self.undo.push(snapshot);
    }
    /// Move the current state onto the redo stack. Returns false (no-op) if
    /// there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(top) = self.undo.pop() else {
            return false;
        };
        self.redo.push(top);
        true
    }
    /// Re-apply the most recently undone state, returning it. None (no-op)
    /// if nothing was undone.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        let top = self.redo.pop()?;
        self.undo.push(top);
        self.undo.last()
    }
    /// The state the surface should currently show, if any was committed.
    #[must_use]
    pub fn current(&self) -> Option<&Snapshot> {
        self.undo.last()
    }
    #[must_use]
    pub fn is_undo_empty(&self) -> bool {
        self.undo.is_empty()
    }
    #[must_use]
    pub fn is_redo_empty(&self) -> bool {
        self.redo.is_empty()
    }
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}
