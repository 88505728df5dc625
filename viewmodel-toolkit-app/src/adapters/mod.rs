//! Headless host adapters.
//!
//! Trait implementations that need no UI framework: used by tests, command-line
//! hosts and anything else that drives dialogs programmatically.

mod confirmation;
mod exception_handler;
mod navigator;
mod page;

pub use confirmation::ScriptedConfirmation;
pub use exception_handler::{HandledError, RecordingExceptionHandler};
pub use navigator::{InMemoryNavigator, Transition};
pub use page::{surface_command, tap, view_model_of, HeadlessLayout, HeadlessPage};
