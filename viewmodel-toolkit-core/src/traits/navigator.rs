//! Navigation stack abstraction Trait

use async_trait::async_trait;

use super::page::PageRef;
use crate::error::ToolkitResult;

/// Host navigation stack
///
/// The stack is process-wide and LIFO; the orchestrator is its only writer.
#[async_trait(?Send)]
pub trait Navigator {
    /// Push a page onto the regular stack
    async fn push(&self, page: PageRef, animated: bool) -> ToolkitResult<()>;

    /// Push a page onto the modal stack
    async fn push_modal(&self, page: PageRef, animated: bool) -> ToolkitResult<()>;

    /// Pop the top-most modal page
    ///
    /// # Errors
    /// `ToolkitError::Navigation` if the modal stack is empty
    async fn pop_modal(&self, animated: bool) -> ToolkitResult<PageRef>;
}
