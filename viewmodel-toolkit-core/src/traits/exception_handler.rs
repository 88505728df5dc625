//! Central error sink for boundary-crossing failures

use crate::error::{ToolkitError, ToolkitResult};

/// Exception handler Trait
///
/// Every error that reaches a navigation call or a save command is funneled
/// through the single configured handler. Returning `Ok(())` swallows the
/// error; returning `Err` re-raises it to the caller.
pub trait ExceptionHandler {
    fn handle_exception(&self, error: ToolkitError) -> ToolkitResult<()>;
}

/// Logs the error and re-raises it
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultExceptionHandler;

impl ExceptionHandler for DefaultExceptionHandler {
    fn handle_exception(&self, error: ToolkitError) -> ToolkitResult<()> {
        if error.is_expected() {
            log::warn!("Unhandled toolkit error: {error}");
        } else {
            log::error!("Unhandled toolkit error: {error}");
        }
        Err(error)
    }
}
