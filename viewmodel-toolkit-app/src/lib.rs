//! Platform-agnostic bootstrap for the view-model toolkit.
//!
//! Provides `ToolkitApp` (context + orchestrator), `ToolkitAppBuilder` (adapter
//! injection) and `load_config`, plus headless host adapters in [`adapters`].

pub mod adapters;

use std::path::Path;
use std::rc::Rc;

use viewmodel_toolkit_core::error::{ToolkitError, ToolkitResult};
use viewmodel_toolkit_core::services::{NavigationOrchestrator, ToolkitContext};
use viewmodel_toolkit_core::traits::{
    ConfirmationDialog, DefaultDependencyResolver, DefaultExceptionHandler, DependencyResolver,
    ExceptionHandler, Navigator,
};
use viewmodel_toolkit_core::types::ToolkitConfig;

/// Application-wide toolkit state.
///
/// Every host constructs this once at startup via `ToolkitAppBuilder` and hands
/// the orchestrator to whatever needs to open pages or dialogs.
pub struct ToolkitApp {
    /// Toolkit context (config + host adapters)
    pub ctx: Rc<ToolkitContext>,
    /// Navigation entry point sharing `ctx`
    pub orchestrator: NavigationOrchestrator,
}

impl ToolkitApp {
    pub fn config(&self) -> &ToolkitConfig {
        &self.ctx.config
    }
}

/// Builder for constructing `ToolkitApp` with host-specific adapters.
///
/// # Required adapters
/// - `navigator`: the host navigation stack
/// - `confirmation_dialog`: the yes/no prompt shown before discarding changes
///
/// # Optional
/// - `resolver`: defaults to `DefaultDependencyResolver`
/// - `exception_handler`: defaults to `DefaultExceptionHandler`
/// - `config`: defaults to `ToolkitConfig::default()`
pub struct ToolkitAppBuilder {
    config: Option<ToolkitConfig>,
    resolver: Option<Rc<dyn DependencyResolver>>,
    navigator: Option<Rc<dyn Navigator>>,
    confirmation_dialog: Option<Rc<dyn ConfirmationDialog>>,
    exception_handler: Option<Rc<dyn ExceptionHandler>>,
}

impl ToolkitAppBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: None,
            resolver: None,
            navigator: None,
            confirmation_dialog: None,
            exception_handler: None,
        }
    }

    #[must_use]
    pub fn config(mut self, config: ToolkitConfig) -> Self {
        self.config = Some(config);
        self
    }

    #[must_use]
    pub fn resolver(mut self, resolver: Rc<dyn DependencyResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    #[must_use]
    pub fn navigator(mut self, navigator: Rc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    #[must_use]
    pub fn confirmation_dialog(mut self, dialog: Rc<dyn ConfirmationDialog>) -> Self {
        self.confirmation_dialog = Some(dialog);
        self
    }

    #[must_use]
    pub fn exception_handler(mut self, handler: Rc<dyn ExceptionHandler>) -> Self {
        self.exception_handler = Some(handler);
        self
    }

    /// Build the `ToolkitApp`.
    ///
    /// # Errors
    /// Returns `ToolkitError::Config` if required adapters are missing.
    pub fn build(self) -> ToolkitResult<ToolkitApp> {
        let navigator = self
            .navigator
            .ok_or_else(|| ToolkitError::Config("navigator is required".to_string()))?;
        let confirmation_dialog = self.confirmation_dialog.ok_or_else(|| {
            ToolkitError::Config("confirmation_dialog is required".to_string())
        })?;
        let resolver = self
            .resolver
            .unwrap_or_else(|| Rc::new(DefaultDependencyResolver));
        let exception_handler = self
            .exception_handler
            .unwrap_or_else(|| Rc::new(DefaultExceptionHandler));
        let config = self.config.unwrap_or_default();

        log::debug!(
            "Building toolkit app: display mode {:?}, idiom {:?}",
            config.default_display_mode,
            config.device_idiom
        );

        let ctx = Rc::new(ToolkitContext::new(
            config,
            resolver,
            navigator,
            confirmation_dialog,
            exception_handler,
        ));
        let orchestrator = NavigationOrchestrator::new(Rc::clone(&ctx));

        Ok(ToolkitApp { ctx, orchestrator })
    }
}

impl Default for ToolkitAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a JSON `ToolkitConfig` from disk.
///
/// A missing file yields the defaults; an unreadable or malformed one is an error.
///
/// # Errors
/// Returns `ToolkitError::Config` on I/O or parse failure.
pub fn load_config(path: impl AsRef<Path>) -> ToolkitResult<ToolkitConfig> {
    let path = path.as_ref();
    if !path.exists() {
        log::info!("No toolkit config at {}, using defaults", path.display());
        return Ok(ToolkitConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| ToolkitError::Config(format!("{}: {e}", path.display())))?;
    let config = ToolkitConfig::from_json_str(&raw)?;
    log::info!("Loaded toolkit config from {}", path.display());
    Ok(config)
}
