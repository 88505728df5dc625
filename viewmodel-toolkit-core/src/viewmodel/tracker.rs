//! Change notification and dirty tracking

use std::fmt;

use uuid::Uuid;

/// Notification published by a [`ChangeTracker`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateEvent {
    /// A bindable property changed value
    PropertyChanged(&'static str),
    /// The dirty flag flipped
    DirtyChanged(bool),
    /// A validation pass finished
    ValidityChanged(bool),
}

type Listener = Box<dyn FnMut(&StateEvent)>;

/// Observable dirty-state tracker embedded in every view-model
///
/// Listeners are keyed: subscribing again with the same key replaces the
/// previous listener instead of adding a second one.
#[derive(Default)]
pub struct ChangeTracker {
    is_dirty: bool,
    clean_scope: bool,
    listeners: Vec<(Uuid, Listener)>,
}

impl ChangeTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    /// Whether dirty side effects are currently suppressed
    pub fn in_clean_scope(&self) -> bool {
        self.clean_scope
    }

    /// Assign `value` to `field` if it differs, then notify and mark dirty
    ///
    /// Returns `false` (and publishes nothing) when the values are equal.
    pub fn set<F: PartialEq>(
        &mut self,
        field: &mut F,
        value: F,
        property: &'static str,
        affects_dirty: bool,
    ) -> bool {
        if *field == value {
            return false;
        }
        *field = value;
        self.notify_property_changed(property);
        if affects_dirty {
            self.mark_dirty();
        }
        true
    }

    pub fn notify_property_changed(&mut self, property: &'static str) {
        self.emit(StateEvent::PropertyChanged(property));
    }

    /// Mark dirty unless inside a clean scope
    pub fn mark_dirty(&mut self) {
        if !self.clean_scope {
            self.set_dirty(true);
        }
    }

    /// Set the dirty flag, publishing `DirtyChanged` only when it flips
    pub fn set_dirty(&mut self, dirty: bool) {
        if self.is_dirty == dirty {
            return;
        }
        self.is_dirty = dirty;
        self.emit(StateEvent::DirtyChanged(dirty));
    }

    /// Enter a clean scope, returning the previous scope flag for [`restore_clean_scope`]
    ///
    /// [`restore_clean_scope`]: Self::restore_clean_scope
    pub fn enter_clean_scope(&mut self) -> bool {
        std::mem::replace(&mut self.clean_scope, true)
    }

    pub fn restore_clean_scope(&mut self, prior: bool) {
        self.clean_scope = prior;
    }

    pub fn subscribe(&mut self, key: Uuid, listener: impl FnMut(&StateEvent) + 'static) {
        self.unsubscribe(key);
        self.listeners.push((key, Box::new(listener)));
    }

    /// Remove the listener registered under `key`; returns whether one existed
    pub fn unsubscribe(&mut self, key: Uuid) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(k, _)| *k != key);
        before != self.listeners.len()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn emit(&mut self, event: StateEvent) {
        for (_, listener) in &mut self.listeners {
            listener(&event);
        }
    }
}

impl fmt::Debug for ChangeTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeTracker")
            .field("is_dirty", &self.is_dirty)
            .field("clean_scope", &self.clean_scope)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
