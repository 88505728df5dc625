//! Dialog session lifecycle

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use serde::Serialize;
use uuid::Uuid;

use super::commands::{DefaultCancelCommand, DefaultSaveCommand};
use super::result_future::{result_channel, ResultCompleter, ResultFuture};
use super::surface_sync::{ButtonSurfaceSync, SyncOptions};
use super::DialogSupport;
use crate::command::{CommandParameter, CommandRef};
use crate::error::{ToolkitError, ToolkitResult};
use crate::traits::{
    ConfirmationDialog, DefaultExceptionHandler, ExceptionHandler, Page, SaveBarInjector,
    SaveBarRef,
};
use crate::types::{AlertDetails, ButtonOrder, ButtonRole, ButtonSlot, DeviceIdiom, DisplayMode};
use crate::viewmodel::{Model, StateEvent, ViewModelRef};

/// Lifecycle phase of a [`DialogSession`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionPhase {
    Unconfigured,
    Configured,
    Awaiting,
    Resolved,
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Inputs of the default save command's enablement predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandGate {
    pub always_enabled: bool,
    pub is_dirty: bool,
    pub is_valid: bool,
}

impl Default for CommandGate {
    fn default() -> Self {
        Self {
            always_enabled: false,
            is_dirty: false,
            is_valid: true,
        }
    }
}

impl CommandGate {
    #[must_use]
    pub fn save_can_execute(self) -> bool {
        self.always_enabled || (self.is_dirty && self.is_valid)
    }
}

/// Everything a session needs from its host when it is configured
pub struct DialogConfig {
    pub display_mode: DisplayMode,
    pub idiom: DeviceIdiom,
    pub button_order: ButtonOrder,
    pub hide_cancel_toolbar_item: bool,
    pub save_bar_injector: Option<SaveBarInjector>,
    /// Prompt used unless the view-model already set its own
    pub confirmation: AlertDetails,
    pub confirmation_dialog: Rc<dyn ConfirmationDialog>,
    pub exception_handler: Rc<dyn ExceptionHandler>,
}

impl DialogConfig {
    #[must_use]
    pub fn new(
        confirmation_dialog: Rc<dyn ConfirmationDialog>,
        exception_handler: Rc<dyn ExceptionHandler>,
    ) -> Self {
        Self {
            display_mode: DisplayMode::Default,
            idiom: DeviceIdiom::Phone,
            button_order: ButtonOrder::CancelThenSave,
            hide_cancel_toolbar_item: false,
            save_bar_injector: None,
            confirmation: AlertDetails::default(),
            confirmation_dialog,
            exception_handler,
        }
    }

    fn sync_options(&self) -> SyncOptions {
        SyncOptions {
            display_mode: self.display_mode,
            idiom: self.idiom,
            button_order: self.button_order,
            hide_cancel_toolbar_item: self.hide_cancel_toolbar_item,
        }
    }
}

/// One modal dialog's lifecycle: `Unconfigured → Configured → Awaiting → Resolved`
///
/// Owned by the editing view-model (see [`DialogSupport`]). Binds the default
/// save/cancel commands, owns the result channel and the button surfaces.
pub struct DialogSession<T> {
    id: Uuid,
    phase: SessionPhase,
    gate: Rc<Cell<CommandGate>>,
    sync: Rc<RefCell<ButtonSurfaceSync>>,
    default_save: Option<CommandRef>,
    default_cancel: Option<CommandRef>,
    completer: Option<ResultCompleter<T>>,
    pending: Option<ResultFuture<T>>,
    confirmation: Option<AlertDetails>,
    confirmation_dialog: Option<Rc<dyn ConfirmationDialog>>,
    exception_handler: Rc<dyn ExceptionHandler>,
    cancel_ignores_dirty: bool,
}

impl<T> Default for DialogSession<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DialogSession<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            phase: SessionPhase::Unconfigured,
            gate: Rc::new(Cell::new(CommandGate::default())),
            sync: Rc::new(RefCell::new(ButtonSurfaceSync::new())),
            default_save: None,
            default_cancel: None,
            completer: None,
            pending: None,
            confirmation: None,
            confirmation_dialog: None,
            exception_handler: Rc::new(DefaultExceptionHandler),
            cancel_ignores_dirty: false,
        }
    }

    /// Identity used to key this session's state listener
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Hand out the result future and start awaiting
    ///
    /// # Errors
    /// `ToolkitError::InvalidState` unless the session is `Configured`
    pub fn begin(&mut self) -> ToolkitResult<ResultFuture<T>> {
        let invalid = ToolkitError::InvalidState {
            expected: SessionPhase::Configured,
            actual: self.phase,
        };
        if self.phase != SessionPhase::Configured {
            return Err(invalid);
        }
        let future = self.pending.take().ok_or(invalid)?;
        self.phase = SessionPhase::Awaiting;
        log::debug!("Dialog session {} awaiting result", self.id);
        Ok(future)
    }

    /// Conclude the session with `value`
    ///
    /// # Errors
    /// `ToolkitError::AlreadyResolved` if the session already concluded,
    /// `ToolkitError::InvalidState` if it never started awaiting
    pub fn resolve(&mut self, value: T) -> ToolkitResult<()> {
        match self.phase {
            SessionPhase::Awaiting => {}
            SessionPhase::Resolved => {
                log::error!("Dialog session {} resolved more than once", self.id);
                return Err(ToolkitError::AlreadyResolved);
            }
            actual => {
                return Err(ToolkitError::InvalidState {
                    expected: SessionPhase::Awaiting,
                    actual,
                })
            }
        }
        self.completer
            .as_mut()
            .ok_or(ToolkitError::AlreadyResolved)?
            .resolve(value)?;
        self.phase = SessionPhase::Resolved;
        log::info!("Dialog session {} resolved", self.id);
        Ok(())
    }

    /// Current logical state of one button
    pub fn slot(&self, role: ButtonRole) -> ButtonSlot {
        self.sync.borrow().slot(role).clone()
    }

    /// Command currently bound to a button
    pub fn command(&self, role: ButtonRole) -> Option<CommandRef> {
        self.sync.borrow().slot(role).command.clone()
    }

    /// Stock save/cancel command built by the last [`configure`](DialogSession::configure),
    /// whatever command is currently bound to the button
    pub fn default_command(&self, role: ButtonRole) -> Option<CommandRef> {
        match role {
            ButtonRole::Save => self.default_save.clone(),
            ButtonRole::Cancel => self.default_cancel.clone(),
        }
    }

    pub fn set_text(&mut self, role: ButtonRole, text: impl Into<String>) {
        self.sync.borrow_mut().set_text(role, text);
    }

    pub fn set_command(&mut self, role: ButtonRole, command: Option<CommandRef>) {
        self.sync.borrow_mut().set_command(role, command);
    }

    pub fn set_command_parameter(&mut self, role: ButtonRole, parameter: CommandParameter) {
        self.sync.borrow_mut().set_command_parameter(role, parameter);
    }

    pub fn set_button_visible(&mut self, role: ButtonRole, visible: bool) {
        self.sync.borrow_mut().set_button_visible(role, visible);
    }

    pub fn cancel_toolbar_item_visible(&self) -> bool {
        self.sync.borrow().cancel_toolbar_visible()
    }

    /// Show or hide the toolbar copy of the cancel button; the save bar copy is unaffected
    pub fn set_cancel_toolbar_item_visible(&mut self, visible: bool) {
        self.sync.borrow_mut().set_cancel_toolbar_visible(visible);
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.sync.borrow().display_mode()
    }

    /// # Errors
    /// `ToolkitError::NotConfigured` before [`configure`](Self::configure)
    pub fn set_display_mode(&mut self, mode: DisplayMode) -> ToolkitResult<()> {
        if self.phase == SessionPhase::Unconfigured {
            return Err(ToolkitError::NotConfigured(
                "changing the display mode".to_string(),
            ));
        }
        self.sync.borrow_mut().set_display_mode(mode);
        Ok(())
    }

    /// Save bar bound at configuration time
    pub fn save_bar(&self) -> Option<SaveBarRef> {
        self.sync.borrow().save_bar()
    }

    pub fn save_always_enabled(&self) -> bool {
        self.gate.get().always_enabled
    }

    pub fn set_save_always_enabled(&mut self, always_enabled: bool) {
        let gate = self.gate.get();
        if gate.always_enabled == always_enabled {
            return;
        }
        self.gate.set(CommandGate {
            always_enabled,
            ..gate
        });
        self.change_commands_can_execute();
    }

    pub fn cancel_ignores_dirty(&self) -> bool {
        self.cancel_ignores_dirty
    }

    /// Let the default cancel discard unsaved changes without prompting
    pub fn set_cancel_ignores_dirty(&mut self, ignore: bool) {
        self.cancel_ignores_dirty = ignore;
    }

    pub fn confirmation_prompt(&self) -> AlertDetails {
        self.confirmation.clone().unwrap_or_default()
    }

    pub fn set_confirmation_prompt(&mut self, details: AlertDetails) {
        self.confirmation = Some(details);
    }

    pub fn confirmation_dialog(&self) -> Option<Rc<dyn ConfirmationDialog>> {
        self.confirmation_dialog.clone()
    }

    pub fn exception_handler(&self) -> Rc<dyn ExceptionHandler> {
        self.exception_handler.clone()
    }

    pub fn command_gate(&self) -> CommandGate {
        self.gate.get()
    }

    /// Live enablement inputs shared with the default save command
    ///
    /// Kept current by the session's state listener. Custom commands gate on
    /// it instead of borrowing their view-model, which is mutably borrowed
    /// while enablement is refreshed.
    pub fn gate(&self) -> Rc<Cell<CommandGate>> {
        Rc::clone(&self.gate)
    }

    /// Make both surfaces re-evaluate every bound command's `can_execute`
    pub fn change_commands_can_execute(&self) {
        refresh_surfaces(&Rc::downgrade(&self.sync));
    }

    fn state_listener(&self) -> impl FnMut(&StateEvent) + 'static {
        let gate = self.gate.clone();
        let sync = Rc::downgrade(&self.sync);
        move |event| {
            let mut current = gate.get();
            match *event {
                StateEvent::DirtyChanged(is_dirty) => current.is_dirty = is_dirty,
                StateEvent::ValidityChanged(is_valid) => current.is_valid = is_valid,
                StateEvent::PropertyChanged(_) => return,
            }
            gate.set(current);
            refresh_surfaces(&sync);
        }
    }
}

impl<T: Model> DialogSession<T> {
    /// Wire the session of `vm` against `page`
    ///
    /// Binds the default save/cancel commands to buttons that have none,
    /// configures the button surfaces, (re)subscribes to the view-model's
    /// dirty/validity changes and opens a fresh result channel. Calling it
    /// again before [`begin`](Self::begin) replaces the previous subscription.
    /// Finally the view-model's [`DialogSupport::attach`] hook runs.
    ///
    /// # Errors
    /// `ToolkitError::InvalidState` once the session is awaiting or resolved,
    /// `ToolkitError::NoLayoutContainer` if no save bar can be placed
    pub fn configure<VM>(
        vm: &ViewModelRef<VM>,
        page: &mut dyn Page,
        config: DialogConfig,
    ) -> ToolkitResult<()>
    where
        VM: DialogSupport<T>,
    {
        let handle = Rc::downgrade(vm);
        let mut editor = vm.borrow_mut();
        let (is_dirty, is_valid) = (editor.is_dirty(), editor.is_valid());

        let session = editor.dialog_mut();
        if let actual @ (SessionPhase::Awaiting | SessionPhase::Resolved) = session.phase {
            return Err(ToolkitError::InvalidState {
                expected: SessionPhase::Configured,
                actual,
            });
        }

        let save: CommandRef = Rc::new(DefaultSaveCommand::new(
            Weak::clone(&handle),
            session.gate.clone(),
        ));
        let cancel: CommandRef = Rc::new(DefaultCancelCommand::new(Weak::clone(&handle)));
        session.default_save = Some(Rc::clone(&save));
        session.default_cancel = Some(Rc::clone(&cancel));
        session.sync.borrow_mut().configure(
            page,
            config.sync_options(),
            config.save_bar_injector.as_ref(),
            [(ButtonRole::Save, save), (ButtonRole::Cancel, cancel)],
        )?;

        if session.confirmation.is_none() {
            session.confirmation = Some(config.confirmation);
        }
        session.confirmation_dialog = Some(config.confirmation_dialog);
        session.exception_handler = config.exception_handler;

        let (completer, future) = result_channel();
        session.completer = Some(completer);
        session.pending = Some(future);
        session.phase = SessionPhase::Configured;
        session.gate.set(CommandGate {
            is_dirty,
            is_valid,
            ..session.gate.get()
        });

        let id = session.id;
        let listener = session.state_listener();
        editor.tracker_mut().subscribe(id, listener);
        editor.dialog().change_commands_can_execute();
        drop(editor);

        log::debug!("Dialog session {id} configured");
        vm.borrow_mut().attach(handle);
        Ok(())
    }
}

impl<T> fmt::Debug for DialogSession<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogSession")
            .field("id", &self.id)
            .field("phase", &self.phase)
            .field("gate", &self.gate.get())
            .field("cancel_ignores_dirty", &self.cancel_ignores_dirty)
            .finish_non_exhaustive()
    }
}

fn refresh_surfaces(sync: &Weak<RefCell<ButtonSurfaceSync>>) {
    let Some(sync) = sync.upgrade() else {
        return;
    };
    match sync.try_borrow() {
        Ok(sync) => sync.refresh_enabled(),
        Err(_) => log::debug!("Button surfaces busy; enablement refresh skipped"),
    };
}
