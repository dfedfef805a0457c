use uuid::Uuid;

use crate::changeset::{compute_changes, ChangeSet, Snapshot};

/// one edit-form lifetime over an entity
///
/// holds the last-known-persisted snapshot the form opened with; the live
/// form state stays with the host and is passed in on each change event
#[derive(Debug, Clone)]
pub struct EditSession<S: Snapshot> {
    session_id: Uuid,
    original: S,
}

impl<S: Snapshot> EditSession<S> {
    /// open a session over the persisted snapshot
    pub fn open(original: S) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            original,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn original(&self) -> &S {
        &self.original
    }

    /// diff the live form state against the opening snapshot
    pub fn changes(&self, current: &S) -> ChangeSet<S::Field> {
        compute_changes(&self.original, current, S::tracked_fields())
    }

    /// submit gate: enabled only when something actually changed
    pub fn can_submit(&self, current: &S) -> bool {
        self.changes(current).has_changes()
    }

    /// replace the baseline after the server accepts an update
    pub fn commit(&mut self, persisted: S) {
        self.original = persisted;
    }
}
