//! Toolbar / save-bar mirroring

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::save_bar_view::SaveBarView;
use crate::command::{CommandParameter, CommandRef};
use crate::error::{ToolkitError, ToolkitResult};
use crate::traits::{Page, SaveBar, SaveBarInjector, SaveBarRef, ToolbarRef};
use crate::types::{ButtonOrder, ButtonRole, ButtonSlot, DeviceIdiom, DisplayMode, ToolbarItem};

const ROLES: [ButtonRole; 2] = [ButtonRole::Cancel, ButtonRole::Save];

/// Surface settings resolved when a dialog session is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    pub display_mode: DisplayMode,
    pub idiom: DeviceIdiom,
    pub button_order: ButtonOrder,
    pub hide_cancel_toolbar_item: bool,
}

/// Mediator owning the canonical Save/Cancel button state
///
/// After [`configure`](Self::configure) it is the only writer of both
/// surfaces; every setter republishes to the toolbar and the save bar before
/// returning.
pub struct ButtonSurfaceSync {
    save: ButtonSlot,
    cancel: ButtonSlot,
    toolbar: Option<ToolbarRef>,
    save_bar: Option<SaveBarRef>,
    display_mode: DisplayMode,
    idiom: DeviceIdiom,
    cancel_toolbar_visible: bool,
}

impl fmt::Debug for ButtonSurfaceSync {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonSurfaceSync")
            .field("save", &self.save)
            .field("cancel", &self.cancel)
            .field("has_save_bar", &self.save_bar.is_some())
            .field("display_mode", &self.display_mode)
            .field("idiom", &self.idiom)
            .field("cancel_toolbar_visible", &self.cancel_toolbar_visible)
            .finish_non_exhaustive()
    }
}

impl Default for ButtonSurfaceSync {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonSurfaceSync {
    #[must_use]
    pub fn new() -> Self {
        let slot = |role: ButtonRole| ButtonSlot {
            text: role.default_text().to_string(),
            command: None,
            command_parameter: CommandParameter::Null,
            is_visible: true,
        };
        Self {
            save: slot(ButtonRole::Save),
            cancel: slot(ButtonRole::Cancel),
            toolbar: None,
            save_bar: None,
            display_mode: DisplayMode::Default,
            idiom: DeviceIdiom::Phone,
            cancel_toolbar_visible: true,
        }
    }

    /// Bind to `page`'s surfaces and reconcile authored values
    ///
    /// The save bar is located on the page, else produced by `injector`, else
    /// a default [`SaveBarView`] is inserted into the page's first layout.
    /// For each button field the save bar wins if it was authored (non-empty
    /// text, a command, a non-null parameter); otherwise the canonical value
    /// is copied onto it. `defaults` fill roles that still have no command.
    ///
    /// # Errors
    /// `ToolkitError::NoLayoutContainer` if no save bar can be found or placed
    pub fn configure(
        &mut self,
        page: &mut dyn Page,
        options: SyncOptions,
        injector: Option<&SaveBarInjector>,
        defaults: [(ButtonRole, CommandRef); 2],
    ) -> ToolkitResult<()> {
        let save_bar = Self::locate_save_bar(page, options.button_order, injector)?;

        {
            let bar = save_bar.borrow();
            for role in ROLES {
                let slot = self.slot_mut(role);
                let text = bar.text(role);
                if !text.is_empty() {
                    slot.text = text;
                }
                if let Some(command) = bar.command(role) {
                    slot.command = Some(command);
                }
                let parameter = bar.command_parameter(role);
                if !parameter.is_null() {
                    slot.command_parameter = parameter;
                }
            }
        }
        for (role, command) in defaults {
            let slot = self.slot_mut(role);
            if slot.command.is_none() {
                slot.command = Some(command);
            }
        }

        self.toolbar = Some(page.toolbar());
        self.save_bar = Some(save_bar);
        self.display_mode = options.display_mode;
        self.idiom = options.idiom;
        if options.hide_cancel_toolbar_item {
            self.cancel_toolbar_visible = false;
        }

        log::debug!(
            "Button surfaces configured: mode={:?}, toolbar={}, save_bar={}",
            self.display_mode,
            self.shows_toolbar(),
            self.shows_save_bar()
        );
        self.publish();
        Ok(())
    }

    fn locate_save_bar(
        page: &mut dyn Page,
        order: ButtonOrder,
        injector: Option<&SaveBarInjector>,
    ) -> ToolkitResult<SaveBarRef> {
        if let Some(bar) = page.find_save_bar() {
            return Ok(bar);
        }
        if let Some(bar) = injector.and_then(|inject| inject(&mut *page)) {
            return Ok(bar);
        }

        let layout = page
            .first_layout()
            .ok_or(ToolkitError::NoLayoutContainer)?;
        let bar: SaveBarRef = Rc::new(RefCell::new(SaveBarView::new(order)));
        layout.add_save_bar(bar.clone());
        log::debug!("Inserted default save bar into the page layout");
        Ok(bar)
    }

    pub fn is_configured(&self) -> bool {
        self.save_bar.is_some()
    }

    pub fn slot(&self, role: ButtonRole) -> &ButtonSlot {
        match role {
            ButtonRole::Save => &self.save,
            ButtonRole::Cancel => &self.cancel,
        }
    }

    fn slot_mut(&mut self, role: ButtonRole) -> &mut ButtonSlot {
        match role {
            ButtonRole::Save => &mut self.save,
            ButtonRole::Cancel => &mut self.cancel,
        }
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn shows_toolbar(&self) -> bool {
        self.display_mode.shows_toolbar(self.idiom)
    }

    pub fn shows_save_bar(&self) -> bool {
        self.display_mode.shows_save_bar(self.idiom)
    }

    pub fn cancel_toolbar_visible(&self) -> bool {
        self.cancel_toolbar_visible
    }

    pub fn save_bar(&self) -> Option<SaveBarRef> {
        self.save_bar.clone()
    }

    pub fn set_text(&mut self, role: ButtonRole, text: impl Into<String>) {
        self.slot_mut(role).text = text.into();
        self.publish();
    }

    pub fn set_command(&mut self, role: ButtonRole, command: Option<CommandRef>) {
        self.slot_mut(role).command = command;
        self.publish();
    }

    pub fn set_command_parameter(&mut self, role: ButtonRole, parameter: CommandParameter) {
        self.slot_mut(role).command_parameter = parameter;
        self.publish();
    }

    pub fn set_button_visible(&mut self, role: ButtonRole, visible: bool) {
        self.slot_mut(role).is_visible = visible;
        self.publish();
    }

    /// Show or hide only the toolbar copy of the cancel button
    pub fn set_cancel_toolbar_visible(&mut self, visible: bool) {
        self.cancel_toolbar_visible = visible;
        self.publish();
    }

    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.display_mode = mode;
        self.publish();
    }

    /// Re-query every bound command's `can_execute` and mirror the result
    pub fn refresh_enabled(&self) {
        if let Some(toolbar) = &self.toolbar {
            let mut toolbar = toolbar.borrow_mut();
            for role in ROLES {
                if let Some(item) = toolbar.find_mut(role) {
                    item.is_enabled = self.is_enabled(role);
                }
            }
        }
        if let Some(bar) = &self.save_bar {
            let mut bar = bar.borrow_mut();
            for role in ROLES {
                bar.set_button_enabled(role, self.is_enabled(role));
            }
        }
    }

    pub fn is_enabled(&self, role: ButtonRole) -> bool {
        let slot = self.slot(role);
        slot.command
            .as_ref()
            .is_some_and(|command| command.can_execute(&slot.command_parameter))
    }

    fn toolbar_item_visible(&self, role: ButtonRole) -> bool {
        self.slot(role).is_visible && (role != ButtonRole::Cancel || self.cancel_toolbar_visible)
    }

    fn toolbar_item(&self, role: ButtonRole) -> ToolbarItem {
        let slot = self.slot(role);
        ToolbarItem {
            text: slot.text.clone(),
            command: slot.command.clone(),
            command_parameter: slot.command_parameter.clone(),
            is_enabled: self.is_enabled(role),
            ..ToolbarItem::for_role(role)
        }
    }

    /// Write the canonical state to both surfaces
    fn publish(&self) {
        if let Some(toolbar) = &self.toolbar {
            let show = self.shows_toolbar();
            let mut toolbar = toolbar.borrow_mut();
            for role in ROLES {
                toolbar.remove(role);
                if show && self.toolbar_item_visible(role) {
                    toolbar.insert(self.toolbar_item(role));
                }
            }
        }

        if let Some(bar) = &self.save_bar {
            let mut bar = bar.borrow_mut();
            bar.set_visible(self.shows_save_bar());
            for role in ROLES {
                let slot = self.slot(role);
                bar.set_text(role, &slot.text);
                bar.set_command(role, slot.command.clone());
                bar.set_command_parameter(role, slot.command_parameter.clone());
                bar.set_button_visible(role, slot.is_visible);
                bar.set_button_enabled(role, self.is_enabled(role));
            }
        }
    }
}
