//! Command history resource for tracking undo/redo state.

use bevy::prelude::*;

use super::commands::HistoryAction;

/// Linear undo/redo log.
///
/// `applied` counts the actions currently in effect, so the last applied
/// action sits at `applied - 1` and everything after it is the redo tail.
#[derive(Resource, Default, Debug)]
pub struct CommandHistory {
    actions: Vec<HistoryAction>,
    applied: usize,
}

impl CommandHistory {
    /// Record a new action, discarding anything that could have been redone
    pub fn record(&mut self, action: HistoryAction) {
        if self.actions.len() > self.applied {
            debug!(
                "Discarding {} redoable actions",
                self.actions.len() - self.applied
            );
        }
        self.actions.truncate(self.applied);
        self.actions.push(action);
        self.applied = self.actions.len();
    }

    /// Position of the last applied action, `None` when nothing is applied
    pub fn index(&self) -> Option<usize> {
        self.applied.checked_sub(1)
    }

    /// The action the next undo reverses
    pub fn undo_target(&self) -> Option<&HistoryAction> {
        self.index().and_then(|i| self.actions.get(i))
    }

    /// The action the next redo re-applies
    pub(super) fn redo_target_mut(&mut self) -> Option<&mut HistoryAction> {
        self.actions.get_mut(self.applied)
    }

    pub(super) fn step_back(&mut self) {
        self.applied = self.applied.saturating_sub(1);
    }

    pub(super) fn step_forward(&mut self) {
        self.applied = (self.applied + 1).min(self.actions.len());
    }

    pub fn can_undo(&self) -> bool {
        self.applied > 0
    }

    pub fn can_redo(&self) -> bool {
        self.applied < self.actions.len()
    }

    pub fn undo_count(&self) -> usize {
        self.applied
    }

    pub fn redo_count(&self) -> usize {
        self.actions.len() - self.applied
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
