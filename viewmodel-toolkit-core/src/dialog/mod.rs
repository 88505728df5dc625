//! Modal dialog machinery
//!
//! A [`DialogSession`] lives inside the editing view-model and drives one
//! dialog from configuration to its single result. [`ButtonSurfaceSync`]
//! mirrors the session's Save/Cancel buttons onto the page toolbar and the
//! inline save bar.

mod commands;
mod result_future;
mod save_bar_view;
mod session;
mod surface_sync;

pub use commands::{
    execute_default_cancel, execute_default_save, DefaultCancelCommand, DefaultSaveCommand,
};
pub use result_future::{result_channel, ResultCompleter, ResultFuture};
pub use save_bar_view::SaveBarView;
pub use session::{CommandGate, DialogConfig, DialogSession, SessionPhase};
pub use surface_sync::{ButtonSurfaceSync, SyncOptions};

use crate::viewmodel::{EditableViewModel, Model, ViewModelHandle};

/// Dialog-support capability of an editable view-model
///
/// Exposing a session is what lets a page locate and wire a save bar for it.
pub trait DialogSupport<T: Model>: EditableViewModel<T> {
    fn dialog(&self) -> &DialogSession<T>;

    fn dialog_mut(&mut self) -> &mut DialogSession<T>;

    /// Called after every successful configuration with a weak handle to the
    /// view-model, for building custom commands that act on it
    fn attach(&mut self, _handle: ViewModelHandle<Self>)
    where
        Self: Sized,
    {
    }
}
