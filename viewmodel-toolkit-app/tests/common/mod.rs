//! Shared integration test fixtures: a customer model, its editors and a headless host

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use chrono::{Local, NaiveDate};

use viewmodel_toolkit_app::adapters::{
    view_model_of, HeadlessPage, InMemoryNavigator, RecordingExceptionHandler,
    ScriptedConfirmation,
};
use viewmodel_toolkit_app::{ToolkitApp, ToolkitAppBuilder};
use viewmodel_toolkit_core::command::{CommandParameter, CommandRef, RelayCommand};
use viewmodel_toolkit_core::dialog::{
    execute_default_save, CommandGate, DialogSession, DialogSupport,
};
use viewmodel_toolkit_core::error::{ToolkitError, ToolkitResult};
use viewmodel_toolkit_core::services::{ModalOptions, NavigationOrchestrator, NullResultHandling};
use viewmodel_toolkit_core::traits::{PageRef, ServiceRegistry};
use viewmodel_toolkit_core::types::{ButtonRole, ToolkitConfig};
use viewmodel_toolkit_core::viewmodel::{
    ChangeTracker, EditableState, EditableViewModel, Initializable, SetOptions, Updatable,
    Validatable, ViewModel, ViewModelHandle, ViewModelRef,
};

// ============ Model ============

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Customer {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub email: String,
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn customer(first_name: &str, last_name: &str) -> Customer {
    Customer {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        birth_date: today(),
        email: String::new(),
    }
}

fn required(value: &str, message: &str) -> Option<String> {
    value.trim().is_empty().then(|| message.to_string())
}

// ============ Single-dialog editor ============

#[derive(Default)]
pub struct CustomerEditor {
    state: EditableState<Customer>,
    dialog: DialogSession<Customer>,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub first_name_error: Option<String>,
    pub last_name_error: Option<String>,
    pub birth_date_error: Option<String>,
}

impl CustomerEditor {
    pub fn set_first_name(&mut self, value: &str) -> bool {
        self.set_and_validate(
            |vm| &mut vm.first_name,
            value.to_string(),
            SetOptions::new("first_name"),
        )
    }

    pub fn set_last_name(&mut self, value: &str) -> bool {
        self.set_and_validate(
            |vm| &mut vm.last_name,
            value.to_string(),
            SetOptions::new("last_name"),
        )
    }

    pub fn set_birth_date(&mut self, value: NaiveDate) -> bool {
        self.set_and_validate(|vm| &mut vm.birth_date, value, SetOptions::new("birth_date"))
    }
}

impl ViewModel for CustomerEditor {
    fn tracker(&self) -> &ChangeTracker {
        self.state.tracker()
    }

    fn tracker_mut(&mut self) -> &mut ChangeTracker {
        self.state.tracker_mut()
    }
}

impl Initializable<Customer> for CustomerEditor {
    fn initialize(&mut self, item: Customer) -> ToolkitResult<()> {
        let source = self.state.initialize(item)?.clone();
        self.set_first_name(&source.first_name);
        self.set_last_name(&source.last_name);
        self.set_birth_date(source.birth_date);
        Ok(())
    }
}

impl Updatable<Customer> for CustomerEditor {
    fn update(&self) -> ToolkitResult<Customer> {
        let mut customer = self.source().cloned().unwrap_or_default();
        customer.first_name = self.first_name.clone();
        customer.last_name = self.last_name.clone();
        customer.birth_date = self.birth_date;
        Ok(customer)
    }
}

impl Validatable for CustomerEditor {
    fn validate(&mut self) -> bool {
        self.first_name_error = required(&self.first_name, "First name is required");
        self.last_name_error = required(&self.last_name, "Last name is required");
        self.birth_date_error =
            (self.birth_date > today()).then(|| "Birth date cannot be in the future".to_string());

        let is_valid = self.first_name_error.is_none()
            && self.last_name_error.is_none()
            && self.birth_date_error.is_none();
        self.set_validity(is_valid);
        is_valid
    }
}

impl EditableViewModel<Customer> for CustomerEditor {
    fn state(&self) -> &EditableState<Customer> {
        &self.state
    }

    fn state_mut(&mut self) -> &mut EditableState<Customer> {
        &mut self.state
    }
}

impl DialogSupport<Customer> for CustomerEditor {
    fn dialog(&self) -> &DialogSession<Customer> {
        &self.dialog
    }

    fn dialog_mut(&mut self) -> &mut DialogSession<Customer> {
        &mut self.dialog
    }
}

// ============ Wizard step 1: names ============

/// First wizard step; its save button reads "Next" and opens the details step
#[derive(Default)]
pub struct NameStepEditor {
    state: EditableState<Customer>,
    dialog: DialogSession<Customer>,
    pub first_name: String,
    pub last_name: String,
    pub orchestrator: Option<NavigationOrchestrator>,
    /// Times the details step came back without a new value
    pub unchanged_returns: usize,
}

impl NameStepEditor {
    pub fn set_first_name(&mut self, value: &str) -> bool {
        self.set_and_validate(
            |vm| &mut vm.first_name,
            value.to_string(),
            SetOptions::new("first_name"),
        )
    }

    pub fn set_last_name(&mut self, value: &str) -> bool {
        self.set_and_validate(
            |vm| &mut vm.last_name,
            value.to_string(),
            SetOptions::new("last_name"),
        )
    }
}

/// "Next" is enabled under the same rule as the stock save: dirty and valid
fn next_command(
    handle: ViewModelHandle<NameStepEditor>,
    gate: Rc<Cell<CommandGate>>,
) -> CommandRef {
    RelayCommand::new(move |_| next_step(handle.clone()))
        .with_can_execute(move |_| gate.get().save_can_execute())
        .into_ref()
}

/// Open the details step with the current names; save this step once it comes back changed
async fn next_step(handle: ViewModelHandle<NameStepEditor>) -> ToolkitResult<()> {
    let vm = handle.upgrade().ok_or(ToolkitError::SessionAbandoned)?;
    let (orchestrator, draft) = {
        let mut editor = vm.borrow_mut();
        if !editor.validate() {
            return Ok(());
        }
        let orchestrator = editor
            .orchestrator
            .clone()
            .ok_or_else(|| ToolkitError::NotConfigured("next step".to_string()))?;
        (orchestrator, editor.update()?)
    };

    let result = orchestrator
        .navigate_modal::<Customer, HeadlessPage, DetailsStepEditor>(
            draft.clone(),
            ModalOptions::default().null_result(NullResultHandling::ReturnInput),
        )
        .await?;

    {
        let mut editor = vm.borrow_mut();
        editor.execute_cleanly(|e| e.initialize(result.clone()))?;
        editor.set_dirty(false);
        if result == draft {
            editor.unchanged_returns += 1;
            return Ok(());
        }
    }
    execute_default_save::<Customer, _>(&vm, CommandParameter::Null, false).await
}

impl ViewModel for NameStepEditor {
    fn tracker(&self) -> &ChangeTracker {
        self.state.tracker()
    }

    fn tracker_mut(&mut self) -> &mut ChangeTracker {
        self.state.tracker_mut()
    }
}

impl Initializable<Customer> for NameStepEditor {
    fn initialize(&mut self, item: Customer) -> ToolkitResult<()> {
        let source = self.state.initialize(item)?.clone();
        self.set_first_name(&source.first_name);
        self.set_last_name(&source.last_name);
        Ok(())
    }
}

impl Updatable<Customer> for NameStepEditor {
    fn update(&self) -> ToolkitResult<Customer> {
        let mut customer = self.source().cloned().unwrap_or_default();
        customer.first_name = self.first_name.clone();
        customer.last_name = self.last_name.clone();
        Ok(customer)
    }
}

impl Validatable for NameStepEditor {
    fn validate(&mut self) -> bool {
        let is_valid = !self.first_name.trim().is_empty() && !self.last_name.trim().is_empty();
        self.set_validity(is_valid);
        is_valid
    }
}

impl EditableViewModel<Customer> for NameStepEditor {
    fn state(&self) -> &EditableState<Customer> {
        &self.state
    }

    fn state_mut(&mut self) -> &mut EditableState<Customer> {
        &mut self.state
    }
}

impl DialogSupport<Customer> for NameStepEditor {
    fn dialog(&self) -> &DialogSession<Customer> {
        &self.dialog
    }

    fn dialog_mut(&mut self) -> &mut DialogSession<Customer> {
        &mut self.dialog
    }

    fn attach(&mut self, handle: ViewModelHandle<Self>) {
        let dialog = self.dialog_mut();
        let gate = dialog.gate();
        dialog.set_text(ButtonRole::Save, "Next");
        dialog.set_command(ButtonRole::Save, Some(next_command(handle, gate)));
    }
}

// ============ Wizard step 2: details ============

#[derive(Default)]
pub struct DetailsStepEditor {
    state: EditableState<Customer>,
    dialog: DialogSession<Customer>,
    pub birth_date: NaiveDate,
    pub email: String,
    pub email_error: Option<String>,
}

impl DetailsStepEditor {
    pub fn set_birth_date(&mut self, value: NaiveDate) -> bool {
        self.set_and_validate(|vm| &mut vm.birth_date, value, SetOptions::new("birth_date"))
    }

    pub fn set_email(&mut self, value: &str) -> bool {
        self.set_and_validate(|vm| &mut vm.email, value.to_string(), SetOptions::new("email"))
    }
}

impl ViewModel for DetailsStepEditor {
    fn tracker(&self) -> &ChangeTracker {
        self.state.tracker()
    }

    fn tracker_mut(&mut self) -> &mut ChangeTracker {
        self.state.tracker_mut()
    }
}

impl Initializable<Customer> for DetailsStepEditor {
    fn initialize(&mut self, item: Customer) -> ToolkitResult<()> {
        let source = self.state.initialize(item)?.clone();
        self.set_birth_date(source.birth_date);
        self.set_email(&source.email);
        Ok(())
    }
}

impl Updatable<Customer> for DetailsStepEditor {
    fn update(&self) -> ToolkitResult<Customer> {
        let mut customer = self.source().cloned().unwrap_or_default();
        customer.birth_date = self.birth_date;
        customer.email = self.email.clone();
        Ok(customer)
    }
}

impl Validatable for DetailsStepEditor {
    fn validate(&mut self) -> bool {
        self.email_error = (!self.email.contains('@')).then(|| "Email is invalid".to_string());
        let is_valid = self.email_error.is_none() && self.birth_date <= today();
        self.set_validity(is_valid);
        is_valid
    }
}

impl EditableViewModel<Customer> for DetailsStepEditor {
    fn state(&self) -> &EditableState<Customer> {
        &self.state
    }

    fn state_mut(&mut self) -> &mut EditableState<Customer> {
        &mut self.state
    }
}

impl DialogSupport<Customer> for DetailsStepEditor {
    fn dialog(&self) -> &DialogSession<Customer> {
        &self.dialog
    }

    fn dialog_mut(&mut self) -> &mut DialogSession<Customer> {
        &mut self.dialog
    }
}

// ============ Harness ============

pub struct Harness {
    pub app: ToolkitApp,
    pub navigator: Rc<InMemoryNavigator>,
    pub confirmation: Rc<ScriptedConfirmation>,
    pub handler: Rc<RecordingExceptionHandler>,
}

impl Harness {
    pub fn new(config: ToolkitConfig) -> Self {
        Self::with_registry(config, editor_registry())
    }

    pub fn with_registry(config: ToolkitConfig, registry: ServiceRegistry) -> Self {
        let navigator = Rc::new(InMemoryNavigator::new());
        let confirmation = Rc::new(ScriptedConfirmation::new());
        let handler = Rc::new(RecordingExceptionHandler::new());

        let app = ToolkitAppBuilder::new()
            .config(config)
            .resolver(Rc::new(registry))
            .navigator(navigator.clone())
            .confirmation_dialog(confirmation.clone())
            .exception_handler(handler.clone())
            .build()
            .expect("toolkit app should build");

        Self {
            app,
            navigator,
            confirmation,
            handler,
        }
    }

    pub fn orchestrator(&self) -> NavigationOrchestrator {
        self.app.orchestrator.clone()
    }
}

pub fn editor_registry() -> ServiceRegistry {
    let mut registry = ServiceRegistry::new();
    registry
        .register_default::<CustomerEditor>()
        .register_default::<NameStepEditor>()
        .register_default::<DetailsStepEditor>();
    registry
}

/// Open the two-step customer wizard and wait for its result
pub async fn run_wizard(
    orchestrator: NavigationOrchestrator,
    input: Customer,
) -> ToolkitResult<Customer> {
    let next_steps = orchestrator.clone();
    orchestrator
        .navigate_modal::<Customer, HeadlessPage, NameStepEditor>(
            input,
            ModalOptions::default().with_initializer(
                move |_page: &mut HeadlessPage, editor: &mut NameStepEditor| {
                    editor.orchestrator = Some(next_steps);
                    Ok(())
                },
            ),
        )
        .await
}

/// Wait until a page bound to a `VM` is on top of the modal stack
pub async fn wait_for_modal<VM: 'static>(
    navigator: &InMemoryNavigator,
) -> (PageRef, ViewModelRef<VM>) {
    for _ in 0..100 {
        if let Some(page) = navigator.top_modal() {
            if let Some(vm) = view_model_of::<VM>(&page) {
                return (page, vm);
            }
        }
        tokio::task::yield_now().await;
    }
    panic!("no modal dialog was presented");
}
