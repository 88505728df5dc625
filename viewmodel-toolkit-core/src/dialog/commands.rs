//! Default save/cancel commands

use std::cell::Cell;
use std::marker::PhantomData;
use std::rc::Rc;

use async_trait::async_trait;

use super::session::CommandGate;
use super::DialogSupport;
use crate::command::{Command, CommandParameter};
use crate::error::{ToolkitError, ToolkitResult};
use crate::types::ButtonRole;
use crate::viewmodel::{Model, ViewModelHandle, ViewModelRef};

/// Validates, projects and resolves the dialog with the edited value
///
/// Enabled iff save is always enabled, or the editor is dirty and valid.
pub struct DefaultSaveCommand<T, VM> {
    vm: ViewModelHandle<VM>,
    gate: Rc<Cell<CommandGate>>,
    _model: PhantomData<fn() -> T>,
}

impl<T, VM> DefaultSaveCommand<T, VM> {
    pub(crate) fn new(vm: ViewModelHandle<VM>, gate: Rc<Cell<CommandGate>>) -> Self {
        Self {
            vm,
            gate,
            _model: PhantomData,
        }
    }
}

#[async_trait(?Send)]
impl<T: Model, VM: DialogSupport<T>> Command for DefaultSaveCommand<T, VM> {
    fn can_execute(&self, _parameter: &CommandParameter) -> bool {
        self.gate.get().save_can_execute()
    }

    async fn execute(&self, _parameter: CommandParameter) -> ToolkitResult<()> {
        let vm = self.vm.upgrade().ok_or(ToolkitError::SessionAbandoned)?;
        save(&vm)
    }
}

fn save<T: Model, VM: DialogSupport<T>>(vm: &ViewModelRef<VM>) -> ToolkitResult<()> {
    let mut editor = vm.borrow_mut();
    if !editor.validate() {
        log::debug!("Save skipped: validation failed");
        return Ok(());
    }

    let updated = editor.update();
    match updated {
        Ok(value) => {
            editor.dialog_mut().resolve(value)?;
            editor.set_dirty(false);
            Ok(())
        }
        Err(error) => {
            let handler = editor.dialog().exception_handler();
            drop(editor);
            log::warn!("Save failed, dialog stays open: {error}");
            handler.handle_exception(error)
        }
    }
}

/// Resolves the dialog with `T::default()`, asking first if there are unsaved changes
pub struct DefaultCancelCommand<T, VM> {
    vm: ViewModelHandle<VM>,
    _model: PhantomData<fn() -> T>,
}

impl<T, VM> DefaultCancelCommand<T, VM> {
    pub(crate) fn new(vm: ViewModelHandle<VM>) -> Self {
        Self {
            vm,
            _model: PhantomData,
        }
    }
}

#[async_trait(?Send)]
impl<T: Model, VM: DialogSupport<T>> Command for DefaultCancelCommand<T, VM> {
    async fn execute(&self, _parameter: CommandParameter) -> ToolkitResult<()> {
        let vm = self.vm.upgrade().ok_or(ToolkitError::SessionAbandoned)?;

        let prompt = {
            let editor = vm.borrow();
            let session = editor.dialog();
            (editor.is_dirty() && !session.cancel_ignores_dirty())
                .then(|| (session.confirmation_prompt(), session.confirmation_dialog()))
        };
        if let Some((details, dialog)) = prompt {
            let dialog = dialog.ok_or_else(|| {
                ToolkitError::NotConfigured("asking to discard changes".to_string())
            })?;
            if !dialog.confirm(&details).await {
                log::debug!("Cancel declined, keeping unsaved changes");
                return Ok(());
            }
        }

        vm.borrow_mut().dialog_mut().resolve(T::default())?;
        Ok(())
    }
}

/// Run the dialog's stock save, whatever command is bound to the Save button
///
/// A custom save command finishes through this to get the usual
/// validate / update / resolve sequence. With `execute_safely` it only runs if
/// the currently bound save command can execute with `parameter`.
///
/// # Errors
/// `ToolkitError::NotConfigured` before the session is configured, or whatever
/// the stock save reports
pub async fn execute_default_save<T, VM>(
    vm: &ViewModelRef<VM>,
    parameter: CommandParameter,
    execute_safely: bool,
) -> ToolkitResult<()>
where
    T: Model,
    VM: DialogSupport<T>,
{
    let (bound, default_save) = {
        let editor = vm.borrow();
        let session = editor.dialog();
        (
            session.command(ButtonRole::Save),
            session.default_command(ButtonRole::Save),
        )
    };
    let default_save =
        default_save.ok_or_else(|| ToolkitError::NotConfigured("executing save".to_string()))?;
    if execute_safely && !bound.is_some_and(|command| command.can_execute(&parameter)) {
        log::debug!("Save command cannot execute; skipped");
        return Ok(());
    }
    default_save.execute(parameter).await
}

/// Run the dialog's stock cancel, whatever command is bound to the Cancel button
///
/// `force_if_dirty` clears the dirty flag first so no confirmation is shown.
///
/// # Errors
/// `ToolkitError::NotConfigured` before the session is configured, or whatever
/// the stock cancel reports
pub async fn execute_default_cancel<T, VM>(
    vm: &ViewModelRef<VM>,
    force_if_dirty: bool,
) -> ToolkitResult<()>
where
    T: Model,
    VM: DialogSupport<T>,
{
    let default_cancel = {
        let mut editor = vm.borrow_mut();
        if force_if_dirty {
            editor.set_dirty(false);
        }
        editor.dialog().default_command(ButtonRole::Cancel)
    };
    let command = default_cancel
        .ok_or_else(|| ToolkitError::NotConfigured("executing cancel".to_string()))?;
    command.execute(CommandParameter::Null).await
}
