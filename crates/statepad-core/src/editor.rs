/// Code editor owner whose snapshots are immutable `EditorState` values.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::history::Originator;

/// Complete visible state of the code editor at one instant.
///
/// Never mutated in place; `copy_with` produces a modified copy.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EditorState {
    /// Buffer text.
    pub content: String,
    /// Char offset of the caret within `content`.
    pub cursor_position: usize,
    /// Whether the buffer differs from what was last written out.
    pub unsaved_changes: bool,
}

/// Partial update for `EditorState::copy_with`. `None` keeps the old value.
#[derive(Debug, Clone, Default)]
pub struct EditorStateUpdate {
    pub content: Option<String>,
    pub cursor_position: Option<usize>,
    pub unsaved_changes: Option<bool>,
}

impl EditorStateUpdate {
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn cursor_position(mut self, pos: usize) -> Self {
        self.cursor_position = Some(pos);
        self
    }

    pub fn unsaved_changes(mut self, unsaved: bool) -> Self {
        self.unsaved_changes = Some(unsaved);
        self
    }
}

impl EditorState {
    pub fn new(content: impl Into<String>, cursor_position: usize, unsaved_changes: bool) -> Self {
        Self {
            content: content.into(),
            cursor_position,
            unsaved_changes,
        }
    }

    /// Returns a copy with the fields present in `update` replaced.
    pub fn copy_with(&self, update: EditorStateUpdate) -> Self {
        Self {
            content: update.content.unwrap_or_else(|| self.content.clone()),
            cursor_position: update.cursor_position.unwrap_or(self.cursor_position),
            unsaved_changes: update.unsaved_changes.unwrap_or(self.unsaved_changes),
        }
    }
}

impl fmt::Display for EditorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Content: {}", self.content)?;
        writeln!(f, "Cursor Position: {}", self.cursor_position)?;
        write!(f, "Unsaved Changes: {}", self.unsaved_changes)
    }
}

/// The editor itself: holds the current state and replaces it on each edit.
#[derive(Debug, Clone, Default)]
pub struct CodeEditor {
    state: EditorState,
}

impl CodeEditor {
    pub fn new(initial: EditorState) -> Self {
        Self { state: initial }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Replaces the current state with a modified copy.
    pub fn edit(&mut self, update: EditorStateUpdate) {
        self.state = self.state.copy_with(update);
    }
}

impl Originator for CodeEditor {
    type Snapshot = EditorState;

    fn snapshot(&self) -> EditorState {
        self.state.clone()
    }

    fn restore(&mut self, snapshot: &EditorState) {
        self.state = snapshot.clone();
    }
}
