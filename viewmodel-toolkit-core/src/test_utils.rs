//! Test helper module
//!
//! Provides mock host objects, a sample editor and convenient factory methods.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::dialog::{DialogConfig, DialogSession, DialogSupport, ResultFuture, SaveBarView};
use crate::error::{ToolkitError, ToolkitResult};
use crate::services::ToolkitContext;
use crate::traits::{
    BindingContext, ConfirmationDialog, ExceptionHandler, Layout, Navigator, Page, PageRef,
    SaveBarRef, ServiceRegistry, ToolbarRef,
};
use crate::types::{AlertDetails, DisplayMode, ToolkitConfig};
use crate::viewmodel::{
    ChangeTracker, EditableState, EditableViewModel, Initializable, SetOptions, Updatable,
    Validatable, ViewModel, ViewModelHandle, ViewModelRef,
};

// ===== MockPage =====

#[derive(Default)]
pub struct MockLayout {
    pub children: Vec<SaveBarRef>,
}

impl Layout for MockLayout {
    fn add_save_bar(&mut self, save_bar: SaveBarRef) {
        self.children.push(save_bar);
    }
}

/// `MockPage::default()` has an empty layout container, like a real page body
pub struct MockPage {
    pub toolbar: ToolbarRef,
    /// Save bar authored directly in the page content
    pub save_bar: Option<SaveBarRef>,
    pub layout: Option<MockLayout>,
    pub context: Option<BindingContext>,
}

impl Default for MockPage {
    fn default() -> Self {
        Self {
            toolbar: ToolbarRef::default(),
            save_bar: None,
            layout: Some(MockLayout::default()),
            context: None,
        }
    }
}

impl MockPage {
    pub fn without_layout() -> Self {
        Self {
            layout: None,
            ..Self::default()
        }
    }

    pub fn with_save_bar(save_bar: SaveBarView) -> Self {
        Self {
            save_bar: Some(Rc::new(RefCell::new(save_bar))),
            ..Self::default()
        }
    }

    /// Save bar inserted into the layout during configuration
    pub fn inserted_save_bar(&self) -> Option<SaveBarRef> {
        self.layout.as_ref()?.children.first().cloned()
    }
}

impl Page for MockPage {
    fn toolbar(&self) -> ToolbarRef {
        self.toolbar.clone()
    }

    fn find_save_bar(&self) -> Option<SaveBarRef> {
        self.save_bar.clone().or_else(|| self.inserted_save_bar())
    }

    fn first_layout(&mut self) -> Option<&mut dyn Layout> {
        self.layout.as_mut().map(|layout| layout as &mut dyn Layout)
    }

    fn set_binding_context(&mut self, context: BindingContext) {
        self.context = Some(context);
    }

    fn binding_context(&self) -> Option<BindingContext> {
        self.context.clone()
    }
}

// ===== MockNavigator =====

#[derive(Default)]
pub struct MockNavigator {
    pages: RefCell<Vec<PageRef>>,
    modals: RefCell<Vec<PageRef>>,
    transitions: RefCell<Vec<(&'static str, bool)>>,
    push_error: RefCell<Option<String>>,
}

impl MockNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_next_push(&self, message: &str) {
        *self.push_error.borrow_mut() = Some(message.to_string());
    }

    pub fn modal_depth(&self) -> usize {
        self.modals.borrow().len()
    }

    pub fn transitions(&self) -> Vec<(&'static str, bool)> {
        self.transitions.borrow().clone()
    }

    pub fn top_modal(&self) -> Option<PageRef> {
        self.modals.borrow().last().cloned()
    }

    pub fn top_modal_view_model<VM: 'static>(&self) -> Option<ViewModelRef<VM>> {
        view_model_of(self.modals.borrow().last()?)
    }

    pub fn top_page_view_model<VM: 'static>(&self) -> Option<ViewModelRef<VM>> {
        view_model_of(self.pages.borrow().last()?)
    }

    fn take_push_error(&self) -> ToolkitResult<()> {
        match self.push_error.borrow_mut().take() {
            Some(message) => Err(ToolkitError::Navigation(message)),
            None => Ok(()),
        }
    }
}

fn view_model_of<VM: 'static>(page: &PageRef) -> Option<ViewModelRef<VM>> {
    page.borrow()
        .binding_context()?
        .downcast::<RefCell<VM>>()
        .ok()
}

#[async_trait(?Send)]
impl Navigator for MockNavigator {
    async fn push(&self, page: PageRef, animated: bool) -> ToolkitResult<()> {
        self.take_push_error()?;
        self.transitions.borrow_mut().push(("push", animated));
        self.pages.borrow_mut().push(page);
        Ok(())
    }

    async fn push_modal(&self, page: PageRef, animated: bool) -> ToolkitResult<()> {
        self.take_push_error()?;
        self.transitions.borrow_mut().push(("push_modal", animated));
        self.modals.borrow_mut().push(page);
        Ok(())
    }

    async fn pop_modal(&self, animated: bool) -> ToolkitResult<PageRef> {
        let page = self
            .modals
            .borrow_mut()
            .pop()
            .ok_or_else(|| ToolkitError::Navigation("modal stack is empty".to_string()))?;
        self.transitions.borrow_mut().push(("pop_modal", animated));
        Ok(page)
    }
}

/// Wait until a dialog for `VM` is on top of the modal stack
pub async fn wait_for_modal<VM: 'static>(navigator: &MockNavigator) -> ViewModelRef<VM> {
    for _ in 0..100 {
        if let Some(vm) = navigator.top_modal_view_model::<VM>() {
            return vm;
        }
        tokio::task::yield_now().await;
    }
    panic!("no modal dialog was presented");
}

// ===== MockConfirmation =====

#[derive(Default)]
pub struct MockConfirmation {
    answers: RefCell<VecDeque<bool>>,
    prompts: RefCell<Vec<AlertDetails>>,
}

impl MockConfirmation {
    pub fn push_answer(&self, answer: bool) {
        self.answers.borrow_mut().push_back(answer);
    }

    pub fn prompt_count(&self) -> usize {
        self.prompts.borrow().len()
    }

    pub fn prompts(&self) -> Vec<AlertDetails> {
        self.prompts.borrow().clone()
    }
}

#[async_trait(?Send)]
impl ConfirmationDialog for MockConfirmation {
    async fn confirm(&self, details: &AlertDetails) -> bool {
        self.prompts.borrow_mut().push(details.clone());
        self.answers.borrow_mut().pop_front().unwrap_or(false)
    }
}

// ===== RecordingHandler =====

/// Swallows errors and keeps them for inspection
#[derive(Default)]
pub struct RecordingHandler {
    errors: RefCell<Vec<ToolkitError>>,
}

impl RecordingHandler {
    pub fn errors(&self) -> Vec<ToolkitError> {
        self.errors.borrow().clone()
    }
}

impl ExceptionHandler for RecordingHandler {
    fn handle_exception(&self, error: ToolkitError) -> ToolkitResult<()> {
        self.errors.borrow_mut().push(error);
        Ok(())
    }
}

// ===== PersonEditor =====

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
}

pub fn person(first_name: &str, last_name: &str) -> Person {
    Person {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        birth_date: NaiveDate::default(),
    }
}

#[derive(Default)]
pub struct PersonEditor {
    state: EditableState<Person>,
    dialog: DialogSession<Person>,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub first_name_error: Option<String>,
    pub validations: usize,
    pub attach_count: usize,
    /// Makes `update` fail with this message
    pub fail_update: Option<String>,
    handle: Option<ViewModelHandle<PersonEditor>>,
}

impl PersonEditor {
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

    pub fn handle(&self) -> Option<ViewModelHandle<PersonEditor>> {
        self.handle.clone()
    }
}

impl ViewModel for PersonEditor {
    fn tracker(&self) -> &ChangeTracker {
        self.state.tracker()
    }

    fn tracker_mut(&mut self) -> &mut ChangeTracker {
        self.state.tracker_mut()
    }
}

impl Initializable<Person> for PersonEditor {
    fn initialize(&mut self, item: Person) -> ToolkitResult<()> {
        let source = self.state.initialize(item)?.clone();
        self.set_first_name(&source.first_name);
        self.set_last_name(&source.last_name);
        self.set_birth_date(source.birth_date);
        Ok(())
    }
}

impl Updatable<Person> for PersonEditor {
    fn update(&self) -> ToolkitResult<Person> {
        if let Some(message) = &self.fail_update {
            return Err(ToolkitError::Save(message.clone()));
        }
        Ok(Person {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            birth_date: self.birth_date,
        })
    }
}

impl Validatable for PersonEditor {
    fn validate(&mut self) -> bool {
        self.validations += 1;
        self.first_name_error = self
            .first_name
            .trim()
            .is_empty()
            .then(|| "First name is required".to_string());
        let is_valid = self.first_name_error.is_none() && !self.last_name.trim().is_empty();
        self.set_validity(is_valid);
        is_valid
    }
}

impl EditableViewModel<Person> for PersonEditor {
    fn state(&self) -> &EditableState<Person> {
        &self.state
    }

    fn state_mut(&mut self) -> &mut EditableState<Person> {
        &mut self.state
    }
}

impl DialogSupport<Person> for PersonEditor {
    fn dialog(&self) -> &DialogSession<Person> {
        &self.dialog
    }

    fn dialog_mut(&mut self) -> &mut DialogSession<Person> {
        &mut self.dialog
    }

    fn attach(&mut self, handle: ViewModelHandle<Self>) {
        self.attach_count += 1;
        self.handle = Some(handle);
    }
}

// ===== Factories =====

/// Dialog configuration showing both surfaces, plus its confirmation and handler mocks
pub fn test_dialog_config() -> (DialogConfig, Rc<MockConfirmation>, Rc<RecordingHandler>) {
    let confirmation = Rc::new(MockConfirmation::default());
    let handler = Rc::new(RecordingHandler::default());
    let config = DialogConfig {
        display_mode: DisplayMode::Both,
        ..DialogConfig::new(confirmation.clone(), handler.clone())
    };
    (config, confirmation, handler)
}

/// A person dialog that has been configured, cleanly initialized and begun
pub struct OpenDialog {
    pub vm: ViewModelRef<PersonEditor>,
    pub page: MockPage,
    pub result: ResultFuture<Person>,
    pub confirmation: Rc<MockConfirmation>,
    pub handler: Rc<RecordingHandler>,
}

pub fn open_person_dialog(input: Person) -> OpenDialog {
    let (config, confirmation, handler) = test_dialog_config();
    let vm = Rc::new(RefCell::new(PersonEditor::default()));
    let mut page = MockPage::default();

    DialogSession::<Person>::configure(&vm, &mut page, config).unwrap();
    let result = {
        let mut editor = vm.borrow_mut();
        editor.execute_cleanly(|e| e.initialize(input)).unwrap();
        editor.set_dirty(false);
        editor.dialog_mut().begin().unwrap()
    };

    OpenDialog {
        vm,
        page,
        result,
        confirmation,
        handler,
    }
}

pub fn create_test_context() -> (
    Rc<ToolkitContext>,
    Rc<MockNavigator>,
    Rc<MockConfirmation>,
    Rc<RecordingHandler>,
) {
    let mut registry = ServiceRegistry::new();
    registry.register_default::<PersonEditor>();
    create_test_context_with(ToolkitConfig::default(), registry)
}

pub fn create_test_context_with(
    config: ToolkitConfig,
    registry: ServiceRegistry,
) -> (
    Rc<ToolkitContext>,
    Rc<MockNavigator>,
    Rc<MockConfirmation>,
    Rc<RecordingHandler>,
) {
    let navigator = Rc::new(MockNavigator::new());
    let confirmation = Rc::new(MockConfirmation::default());
    let handler = Rc::new(RecordingHandler::default());

    let ctx = Rc::new(ToolkitContext::new(
        config,
        Rc::new(registry),
        navigator.clone(),
        confirmation.clone(),
        handler.clone(),
    ));

    (ctx, navigator, confirmation, handler)
}
