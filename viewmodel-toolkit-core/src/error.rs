//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use crate::dialog::SessionPhase;

/// Toolkit error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum ToolkitError {
    /// A required page or view-model type could not be resolved or constructed
    #[error("Could not resolve and construct the type: {0}")]
    Unresolved(String),

    /// Initialization precondition violated (e.g. absent input)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An operation that requires a configured dialog session ran before `configure`
    #[error("Dialog session must be configured before {0}")]
    NotConfigured(String),

    /// A dialog session lifecycle transition was attempted from the wrong phase
    #[error("Invalid dialog session phase: expected {expected}, found {actual}")]
    InvalidState {
        expected: SessionPhase,
        actual: SessionPhase,
    },

    /// The dialog result was resolved a second time
    #[error("Dialog result has already been resolved")]
    AlreadyResolved,

    /// The producing side of a dialog result went away without resolving it
    #[error("Dialog session ended without producing a result")]
    SessionAbandoned,

    /// No save bar could be located, injected, or inserted into the page
    #[error("No save bar was found and the page has no layout container to host one")]
    NoLayoutContainer,

    /// Navigation stack failure reported by the host
    #[error("Navigation error: {0}")]
    Navigation(String),

    /// Failure raised while producing the saved value
    #[error("Save failed: {0}")]
    Save(String),

    /// Configuration could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ToolkitError {
    /// Whether the error is expected behavior (user input, recoverable save failures),
    /// used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::InvalidArgument(_) | Self::Save(_))
    }
}

/// Toolkit Result type alias
pub type ToolkitResult<T> = std::result::Result<T, ToolkitError>;
