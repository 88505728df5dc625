//! View-model capabilities
//!
//! Editors are composed from a small capability set rather than a base-class
//! chain: [`ViewModel`] (change tracking), [`Initializable`], [`Updatable`],
//! [`Validatable`], bundled by [`EditableViewModel`]. An editor that layers on
//! top of another delegates to it explicitly, calling the inner implementation
//! before adding its own logic.

mod state;
mod tracker;

pub use state::EditableState;
pub use tracker::{ChangeTracker, StateEvent};

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::error::ToolkitResult;

/// Value type edited and returned by a dialog
///
/// `T::default()` doubles as the "cancelled / no result" sentinel.
pub trait Model: Clone + PartialEq + Default + 'static {}

impl<T: Clone + PartialEq + Default + 'static> Model for T {}

/// Sentinel check against `T::default()`
pub trait IsDefault {
    fn is_default(&self) -> bool;
}

impl<T: Default + PartialEq> IsDefault for T {
    fn is_default(&self) -> bool {
        *self == T::default()
    }
}

/// Strong handle to a view-model shared with its page
pub type ViewModelRef<VM> = Rc<RefCell<VM>>;

/// Weak handle given to commands so they do not keep their view-model alive
pub type ViewModelHandle<VM> = Weak<RefCell<VM>>;

/// Options of a single [`ViewModel::set_property`] call
pub struct SetOptions<VM> {
    property: &'static str,
    affects_dirty: bool,
    on_changed: Option<fn(&mut VM)>,
}

impl<VM> SetOptions<VM> {
    #[must_use]
    pub fn new(property: &'static str) -> Self {
        Self {
            property,
            affects_dirty: true,
            on_changed: None,
        }
    }

    /// Do not mark the view-model dirty when the value changes
    #[must_use]
    pub fn without_dirty(mut self) -> Self {
        self.affects_dirty = false;
        self
    }

    /// Side effect run after the change notification and before dirty marking
    #[must_use]
    pub fn on_changed(mut self, callback: fn(&mut VM)) -> Self {
        self.on_changed = Some(callback);
        self
    }
}

/// Change-tracking base capability of every view-model
pub trait ViewModel: 'static {
    fn tracker(&self) -> &ChangeTracker;

    fn tracker_mut(&mut self) -> &mut ChangeTracker;

    /// Parameterless initialization, run by non-modal pushes
    fn initialize_default(&mut self) -> ToolkitResult<()> {
        Ok(())
    }

    fn is_dirty(&self) -> bool {
        self.tracker().is_dirty()
    }

    fn set_dirty(&mut self, dirty: bool) {
        self.tracker_mut().set_dirty(dirty);
    }

    /// Core mutator behind every bindable property
    ///
    /// No-op returning `false` when the new value equals the current one.
    /// Otherwise assigns, publishes `PropertyChanged`, runs the optional
    /// callback, then marks dirty (suppressed inside a clean scope).
    fn set_property<F: PartialEq>(
        &mut self,
        access: impl FnOnce(&mut Self) -> &mut F,
        value: F,
        options: SetOptions<Self>,
    ) -> bool
    where
        Self: Sized,
    {
        let field = access(self);
        if *field == value {
            return false;
        }
        *field = value;

        self.tracker_mut().notify_property_changed(options.property);
        if let Some(callback) = options.on_changed {
            callback(self);
        }
        if options.affects_dirty {
            self.tracker_mut().mark_dirty();
        }
        true
    }

    /// Run `action` with dirty side effects suppressed, restoring the prior scope afterwards
    fn execute_cleanly<R>(&mut self, action: impl FnOnce(&mut Self) -> R) -> R
    where
        Self: Sized,
    {
        let prior = self.tracker_mut().enter_clean_scope();
        let result = action(self);
        self.tracker_mut().restore_clean_scope(prior);
        result
    }
}

/// Seeds a view-model from an input value
pub trait Initializable<T> {
    fn initialize(&mut self, item: T) -> ToolkitResult<()>;
}

/// Projects the current field values back into a `T`
pub trait Updatable<T: Default> {
    fn update(&self) -> ToolkitResult<T> {
        Ok(T::default())
    }
}

/// Field-level validation
///
/// Implementations set their per-field messages and finish by calling
/// [`EditableViewModel::set_validity`] with the overall outcome.
pub trait Validatable {
    fn validate(&mut self) -> bool;
}

/// A view-model editing a `T`
pub trait EditableViewModel<T: Model>:
    ViewModel + Initializable<T> + Updatable<T> + Validatable
{
    fn state(&self) -> &EditableState<T>;

    fn state_mut(&mut self) -> &mut EditableState<T>;

    fn source(&self) -> Option<&T> {
        self.state().source()
    }

    fn is_valid(&self) -> bool {
        self.state().is_valid()
    }

    fn set_validity(&mut self, is_valid: bool) {
        self.state_mut().set_validity(is_valid);
    }

    /// [`set_property`](ViewModel::set_property) followed by a validation pass
    /// when the value changed outside a clean scope
    fn set_and_validate<F: PartialEq>(
        &mut self,
        access: impl FnOnce(&mut Self) -> &mut F,
        value: F,
        options: SetOptions<Self>,
    ) -> bool
    where
        Self: Sized,
    {
        let changed = self.set_property(access, value, options);
        if changed && !self.tracker().in_clean_scope() {
            self.validate();
        }
        changed
    }
}
