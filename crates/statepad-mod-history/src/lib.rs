/// Snapshot-based undo/redo history.
///
/// Provides a `VersionedHistory` that records immutable snapshots of an
/// owner's state and navigates them with undo/redo. Saving after an undo
/// discards the abandoned future, so history stays a single timeline.
pub mod manager;

pub use manager::VersionedHistory;
