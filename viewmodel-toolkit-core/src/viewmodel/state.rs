//! Per-session state of an editable entity

use std::fmt;

use super::tracker::{ChangeTracker, StateEvent};
use crate::error::{ToolkitError, ToolkitResult};

/// Source snapshot, dirty flag and validity of one editing session
pub struct EditableState<T> {
    tracker: ChangeTracker,
    source: Option<T>,
    is_valid: bool,
}

impl<T> EditableState<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tracker: ChangeTracker::new(),
            source: None,
            is_valid: true,
        }
    }

    /// Start a new initialization cycle
    ///
    /// Stores `item` as the source snapshot and clears the dirty flag. No
    /// validation runs. Returns the stored snapshot so editors can copy fields
    /// out of it.
    ///
    /// # Errors
    /// `ToolkitError::InvalidArgument` if `item` is absent
    pub fn initialize(&mut self, item: impl Into<Option<T>>) -> ToolkitResult<&T> {
        let item = item
            .into()
            .ok_or_else(|| ToolkitError::InvalidArgument("item".to_string()))?;
        self.tracker.set_dirty(false);
        Ok(&*self.source.insert(item))
    }

    /// Snapshot captured by the last [`initialize`](Self::initialize)
    pub fn source(&self) -> Option<&T> {
        self.source.as_ref()
    }

    pub fn is_dirty(&self) -> bool {
        self.tracker.is_dirty()
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Record the outcome of a validation pass and notify listeners
    pub fn set_validity(&mut self, is_valid: bool) {
        self.is_valid = is_valid;
        self.tracker.emit(StateEvent::ValidityChanged(is_valid));
    }

    pub fn tracker(&self) -> &ChangeTracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut ChangeTracker {
        &mut self.tracker
    }
}

impl<T> Default for EditableState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for EditableState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditableState")
            .field("source", &self.source)
            .field("is_dirty", &self.tracker.is_dirty())
            .field("is_valid", &self.is_valid)
            .finish()
    }
}
