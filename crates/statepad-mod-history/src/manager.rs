/// Linear undo/redo history over immutable snapshots.
///
/// Snapshots live in a single growable buffer with a cursor marking the
/// current one. Saving from a point inside the history discards every
/// snapshot after the cursor, so the timeline never branches.
use serde::Serialize;

/// Manages the snapshot timeline for a single owner.
///
/// The history never looks inside a snapshot; `S` is opaque. Snapshots are
/// handed back as shared borrows and the owner applies them onto itself.
#[derive(Clone, Serialize)]
pub struct VersionedHistory<S> {
    /// Saved snapshots, oldest first.
    snapshots: Vec<S>,
    /// Index of the current snapshot. `None` only while `snapshots` is empty.
    cursor: Option<usize>,
}

impl<S> std::fmt::Debug for VersionedHistory<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VersionedHistory")
            .field("len", &self.snapshots.len())
            .field("cursor", &self.cursor)
            .finish()
    }
}

impl<S> Default for VersionedHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> VersionedHistory<S> {
    /// Creates an empty history with the cursor before the first element.
    pub fn new() -> Self {
        Self {
            snapshots: Vec::new(),
            cursor: None,
        }
    }

    /// Creates a history whose first (and current) snapshot is `initial`.
    pub fn with_initial(initial: S) -> Self {
        let mut history = Self::new();
        history.save(initial);
        history
    }

    /// Records a new snapshot and makes it current.
    ///
    /// If the cursor is behind the newest snapshot (after one or more
    /// `undo` calls), the snapshots after the cursor are discarded first.
    pub fn save(&mut self, snapshot: S) {
        let keep = self.cursor.map_or(0, |c| c + 1);
        if keep < self.snapshots.len() {
            let discarded = self.snapshots.len() - keep;
            self.snapshots.truncate(keep);
            tracing::debug!(discarded, kept = keep, "Truncated redo branch");
        }

        self.snapshots.push(snapshot);
        self.cursor = Some(self.snapshots.len() - 1);
    }

    /// Steps back to the previous snapshot.
    ///
    /// Returns the snapshot that is now current, or `None` if there is
    /// nothing earlier. The cursor is unchanged in the latter case.
    pub fn undo(&mut self) -> Option<&S> {
        match self.cursor {
            Some(c) if c > 0 => {
                self.cursor = Some(c - 1);
                tracing::trace!(cursor = c - 1, "Undo");
                self.snapshots.get(c - 1)
            }
            _ => {
                tracing::trace!("Nothing to undo");
                None
            }
        }
    }

    /// Steps forward to the next snapshot.
    ///
    /// Returns the snapshot that is now current, or `None` if the cursor is
    /// already at the newest snapshot (or the history is empty).
    pub fn redo(&mut self) -> Option<&S> {
        match self.cursor {
            Some(c) if c + 1 < self.snapshots.len() => {
                self.cursor = Some(c + 1);
                tracing::trace!(cursor = c + 1, "Redo");
                self.snapshots.get(c + 1)
            }
            _ => {
                tracing::trace!("Nothing to redo");
                None
            }
        }
    }

    /// The snapshot at the cursor.
    pub fn current(&self) -> Option<&S> {
        self.cursor.and_then(|c| self.snapshots.get(c))
    }

    /// Index of the current snapshot, `None` while the history is empty.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Whether `undo` would return a snapshot.
    pub fn can_undo(&self) -> bool {
        self.undo_depth() > 0
    }

    /// Whether `redo` would return a snapshot.
    pub fn can_redo(&self) -> bool {
        self.redo_depth() > 0
    }

    /// Number of consecutive `undo` calls that would succeed.
    pub fn undo_depth(&self) -> usize {
        self.cursor.unwrap_or(0)
    }

    /// Number of consecutive `redo` calls that would succeed.
    pub fn redo_depth(&self) -> usize {
        match self.cursor {
            Some(c) => self.snapshots.len() - c - 1,
            None => 0,
        }
    }

    /// All saved snapshots in chronological order.
    pub fn snapshots(&self) -> &[S] {
        &self.snapshots
    }

    /// Drops every snapshot and resets the cursor.
    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.cursor = None;
    }
}
