//! Yes/no prompt abstraction Trait

use async_trait::async_trait;

use crate::types::AlertDetails;

/// Yes/no dialog primitive
#[async_trait(?Send)]
pub trait ConfirmationDialog {
    /// Show the prompt and report whether the affirmative button was chosen
    async fn confirm(&self, details: &AlertDetails) -> bool;
}
