//! Recording exception handler

use std::cell::RefCell;

use chrono::{DateTime, Utc};
use serde::Serialize;

use viewmodel_toolkit_core::error::{ToolkitError, ToolkitResult};
use viewmodel_toolkit_core::traits::ExceptionHandler;

/// An error the handler swallowed
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandledError {
    pub handled_at: DateTime<Utc>,
    pub error: ToolkitError,
}

/// Logs every error, swallows it and keeps it for later inspection
#[derive(Default)]
pub struct RecordingExceptionHandler {
    handled: RefCell<Vec<HandledError>>,
}

impl RecordingExceptionHandler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> Vec<ToolkitError> {
        self.handled
            .borrow()
            .iter()
            .map(|handled| handled.error.clone())
            .collect()
    }

    pub fn handled(&self) -> Vec<HandledError> {
        self.handled.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.handled.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.handled.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.handled.borrow_mut().clear();
    }

    /// Handled errors as a JSON array, oldest first
    pub fn to_json(&self) -> ToolkitResult<String> {
        serde_json::to_string(&*self.handled.borrow())
            .map_err(|e| ToolkitError::Config(e.to_string()))
    }
}

impl ExceptionHandler for RecordingExceptionHandler {
    fn handle_exception(&self, error: ToolkitError) -> ToolkitResult<()> {
        if error.is_expected() {
            log::warn!("Handled toolkit error: {error}");
        } else {
            log::error!("Handled toolkit error: {error}");
        }
        self.handled.borrow_mut().push(HandledError {
            handled_at: Utc::now(),
            error,
        });
        Ok(())
    }
}
