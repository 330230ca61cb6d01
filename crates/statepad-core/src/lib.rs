/// Owners with snapshot-based undo/redo.
///
/// Defines the `Originator` contract between an owner and its history, the
/// `Tracked` wrapper that pairs them, and the editor and game owners.
pub mod editor;
pub mod game;
pub mod history;

pub use editor::{CodeEditor, EditorState, EditorStateUpdate};
pub use game::{Game, GameMemento};
pub use history::{Originator, Tracked, VersionedHistory};
