//! Navigation service layer

mod navigation_orchestrator;

pub use navigation_orchestrator::{
    Initializer, ModalOptions, NavigationOrchestrator, NullResultHandling, PushOptions,
};

use std::rc::Rc;

use crate::dialog::DialogConfig;
use crate::traits::{
    ConfirmationDialog, DependencyResolver, ExceptionHandler, Navigator, SaveBarInjector,
};
use crate::types::{DisplayMode, ToolkitConfig};

/// Toolkit context - holds every host dependency
///
/// Built once at startup by the platform layer and read thereafter; it is
/// threaded explicitly into the orchestrator instead of living in statics.
pub struct ToolkitContext {
    /// Process-wide defaults
    pub config: ToolkitConfig,
    /// Page and view-model resolution
    pub resolver: Rc<dyn DependencyResolver>,
    /// Host navigation stack
    pub navigator: Rc<dyn Navigator>,
    /// Yes/no prompt used before discarding unsaved changes
    pub confirmation_dialog: Rc<dyn ConfirmationDialog>,
    /// Sink for every boundary-crossing error
    pub exception_handler: Rc<dyn ExceptionHandler>,
}

impl ToolkitContext {
    #[must_use]
    pub fn new(
        config: ToolkitConfig,
        resolver: Rc<dyn DependencyResolver>,
        navigator: Rc<dyn Navigator>,
        confirmation_dialog: Rc<dyn ConfirmationDialog>,
        exception_handler: Rc<dyn ExceptionHandler>,
    ) -> Self {
        Self {
            config,
            resolver,
            navigator,
            confirmation_dialog,
            exception_handler,
        }
    }

    /// Session configuration for a dialog shown with `display_mode`
    pub fn dialog_config(
        &self,
        display_mode: DisplayMode,
        save_bar_injector: Option<SaveBarInjector>,
    ) -> DialogConfig {
        DialogConfig {
            display_mode,
            idiom: self.config.device_idiom,
            button_order: self.config.save_bar_order,
            hide_cancel_toolbar_item: self.config.hide_cancel_toolbar_item,
            save_bar_injector,
            confirmation: self.config.cancel_confirmation.clone(),
            ..DialogConfig::new(
                self.confirmation_dialog.clone(),
                self.exception_handler.clone(),
            )
        }
    }
}
