//! Headless page and button-tap helpers

use std::cell::RefCell;
use std::rc::Rc;

use viewmodel_toolkit_core::command::{CommandParameter, CommandRef};
use viewmodel_toolkit_core::dialog::SaveBarView;
use viewmodel_toolkit_core::error::ToolkitResult;
use viewmodel_toolkit_core::traits::{
    BindingContext, Layout, Page, PageRef, SaveBarRef, ToolbarRef,
};
use viewmodel_toolkit_core::types::{ButtonRole, ToolbarItem};
use viewmodel_toolkit_core::viewmodel::ViewModelRef;

/// Layout container collecting the save bars inserted into it
#[derive(Default)]
pub struct HeadlessLayout {
    children: Vec<SaveBarRef>,
}

impl HeadlessLayout {
    pub fn children(&self) -> &[SaveBarRef] {
        &self.children
    }
}

impl Layout for HeadlessLayout {
    fn add_save_bar(&mut self, save_bar: SaveBarRef) {
        self.children.push(save_bar);
    }
}

/// Page without a renderer
///
/// `HeadlessPage::default()` has an empty layout container, so a dialog shown on
/// it gets the default save bar inserted.
pub struct HeadlessPage {
    toolbar: ToolbarRef,
    authored_save_bar: Option<SaveBarRef>,
    layout: Option<HeadlessLayout>,
    context: Option<BindingContext>,
}

impl Default for HeadlessPage {
    fn default() -> Self {
        Self {
            toolbar: ToolbarRef::default(),
            authored_save_bar: None,
            layout: Some(HeadlessLayout::default()),
            context: None,
        }
    }
}

impl HeadlessPage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Page whose content has no layout container to insert a save bar into
    #[must_use]
    pub fn without_layout() -> Self {
        Self {
            layout: None,
            ..Self::default()
        }
    }

    /// Page whose content already declares a save bar
    #[must_use]
    pub fn with_save_bar(save_bar: SaveBarView) -> Self {
        Self {
            authored_save_bar: Some(Rc::new(RefCell::new(save_bar))),
            ..Self::default()
        }
    }

    /// Add a host-owned toolbar item
    #[must_use]
    pub fn with_toolbar_item(self, item: ToolbarItem) -> Self {
        self.toolbar.borrow_mut().insert(item);
        self
    }

    pub fn layout(&self) -> Option<&HeadlessLayout> {
        self.layout.as_ref()
    }
}

impl Page for HeadlessPage {
    fn toolbar(&self) -> ToolbarRef {
        Rc::clone(&self.toolbar)
    }

    fn find_save_bar(&self) -> Option<SaveBarRef> {
        self.authored_save_bar.clone().or_else(|| {
            self.layout
                .as_ref()
                .and_then(|layout| layout.children.first().cloned())
        })
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

/// View-model a page is bound to, if it is a `VM`
pub fn view_model_of<VM: 'static>(page: &PageRef) -> Option<ViewModelRef<VM>> {
    page.borrow()
        .binding_context()?
        .downcast::<RefCell<VM>>()
        .ok()
}

/// Command and parameter a user would reach by pressing `role` on `page`
///
/// The inline save bar is used when it is visible, otherwise the toolbar.
pub fn surface_command(page: &PageRef, role: ButtonRole) -> Option<(CommandRef, CommandParameter)> {
    let view = page.borrow();

    if let Some(bar) = view.find_save_bar() {
        let bar = bar.borrow();
        if bar.is_visible() && bar.is_button_visible(role) {
            return bar
                .command(role)
                .map(|command| (command, bar.command_parameter(role)));
        }
    }

    let toolbar = view.toolbar();
    let toolbar = toolbar.borrow();
    let item = toolbar.find(role)?;
    let command = item.command.clone()?;
    Some((command, item.command_parameter.clone()))
}

/// Press `role` on `page` like a user would
///
/// Returns `Ok(false)` when the button is missing or its command cannot
/// execute; otherwise runs the command to completion.
pub async fn tap(page: &PageRef, role: ButtonRole) -> ToolkitResult<bool> {
    let Some((command, parameter)) = surface_command(page, role) else {
        log::debug!("No {role} button to tap");
        return Ok(false);
    };
    if !command.can_execute(&parameter) {
        log::debug!("{role} button is disabled");
        return Ok(false);
    }
    command.execute(parameter).await?;
    Ok(true)
}
