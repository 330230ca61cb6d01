// Re-exports from statepad-mod-history and the owner-side contract.
// Pairs an owner with its own `VersionedHistory` of snapshots.
pub use statepad_mod_history::VersionedHistory;

/// An owner whose visible state can be captured and restored.
pub trait Originator {
    /// Immutable capture of the owner's full visible state.
    type Snapshot;

    /// Captures the current state.
    fn snapshot(&self) -> Self::Snapshot;

    /// Replaces the visible state with the one captured in `snapshot`.
    fn restore(&mut self, snapshot: &Self::Snapshot);
}

/// An owner together with the timeline of its snapshots.
///
/// The initial state is saved on construction, so the first `undo` after a
/// change brings the owner back to where it started.
pub struct Tracked<O: Originator> {
    owner: O,
    history: VersionedHistory<O::Snapshot>,
}

impl<O: Originator + std::fmt::Debug> std::fmt::Debug for Tracked<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tracked")
            .field("owner", &self.owner)
            .field("history", &self.history)
            .finish()
    }
}

impl<O: Originator> Tracked<O> {
    pub fn new(owner: O) -> Self {
        let history = VersionedHistory::with_initial(owner.snapshot());
        Self { owner, history }
    }

    pub fn owner(&self) -> &O {
        &self.owner
    }

    pub fn history(&self) -> &VersionedHistory<O::Snapshot> {
        &self.history
    }

    /// Mutates the owner and records the resulting state.
    pub fn apply<F>(&mut self, f: F)
    where
        F: FnOnce(&mut O),
    {
        f(&mut self.owner);
        self.commit();
    }

    /// Records the owner's current state.
    pub fn commit(&mut self) {
        self.history.save(self.owner.snapshot());
    }

    /// Restores the previous snapshot. Returns `false` if there is none.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.owner.restore(snapshot);
                true
            }
            None => false,
        }
    }

    /// Restores the next snapshot. Returns `false` if there is none.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.owner.restore(snapshot);
                true
            }
            None => false,
        }
    }

    /// Consumes the wrapper, returning the owner and its history.
    pub fn into_parts(self) -> (O, VersionedHistory<O::Snapshot>) {
        (self.owner, self.history)
    }
}
