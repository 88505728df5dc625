//! View-model toolkit core library
//!
//! Provides the modal dialog machinery for view-model based UIs, including:
//! - One-shot typed dialog results (`ResultFuture`)
//! - Dirty/validity tracking for editable entities (`EditableState`, `ChangeTracker`)
//! - Save/cancel button mirroring between toolbar and inline save bar (`ButtonSurfaceSync`)
//! - Dialog lifecycle and default commands (`DialogSession`)
//! - Page/view-model navigation (`NavigationOrchestrator`)
//!
//! This library is platform-independent: rendering, navigation stacks and
//! prompts are reached through the traits in [`traits`]. Everything runs on the
//! single UI thread, so shared state is `Rc<RefCell<_>>` and nothing is `Send`.

pub mod command;
pub mod dialog;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod viewmodel;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use command::{Command, CommandParameter, CommandRef, RelayCommand};
pub use dialog::{DialogSession, DialogSupport, ResultFuture, SessionPhase};
pub use error::{ToolkitError, ToolkitResult};
pub use services::{NavigationOrchestrator, ToolkitContext};
pub use traits::{
    ConfirmationDialog, DependencyResolver, ExceptionHandler, Navigator, Page, SaveBar,
};
pub use viewmodel::{EditableViewModel, Model, ViewModel};
