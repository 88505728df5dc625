//! View-layer abstractions consumed by the dialog machinery

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use crate::command::{CommandParameter, CommandRef};
use crate::types::{ButtonRole, Toolbar};

/// Shared handle to an inline save bar
pub type SaveBarRef = Rc<RefCell<dyn SaveBar>>;

/// Shared handle to a page's toolbar
pub type ToolbarRef = Rc<RefCell<Toolbar>>;

/// Shared handle to a page on the navigation stack
pub type PageRef = Rc<RefCell<dyn Page>>;

/// Data context a page binds against (the view-model handle)
pub type BindingContext = Rc<dyn Any>;

/// Callback that locates or builds a custom save bar for a page
///
/// Returning `None` lets the default save bar be inserted instead.
pub type SaveBarInjector = Rc<dyn Fn(&mut dyn Page) -> Option<SaveBarRef>>;

/// Save-bar capability
///
/// The minimal contract an inline bar must honor for its Save/Cancel buttons
/// to be kept in sync with the page toolbar. Empty text, a missing command and
/// a `Null` parameter mean "not authored".
pub trait SaveBar {
    fn text(&self, role: ButtonRole) -> String;
    fn set_text(&mut self, role: ButtonRole, text: &str);

    fn command(&self, role: ButtonRole) -> Option<CommandRef>;
    fn set_command(&mut self, role: ButtonRole, command: Option<CommandRef>);

    fn command_parameter(&self, role: ButtonRole) -> CommandParameter;
    fn set_command_parameter(&mut self, role: ButtonRole, parameter: CommandParameter);

    fn is_button_visible(&self, role: ButtonRole) -> bool;
    fn set_button_visible(&mut self, role: ButtonRole, visible: bool);

    fn is_button_enabled(&self, role: ButtonRole) -> bool;
    fn set_button_enabled(&mut self, role: ButtonRole, enabled: bool);

    /// Visibility of the bar as a whole
    fn is_visible(&self) -> bool;
    fn set_visible(&mut self, visible: bool);
}

/// A layout container able to host an inserted save bar
pub trait Layout {
    fn add_save_bar(&mut self, save_bar: SaveBarRef);
}

/// A page that can be pushed onto the navigation stack
pub trait Page {
    /// Navigation-bar toolbar of the page
    fn toolbar(&self) -> ToolbarRef;

    /// Save bar already present in the page's content, if any
    fn find_save_bar(&self) -> Option<SaveBarRef>;

    /// First layout container of the page's content
    fn first_layout(&mut self) -> Option<&mut dyn Layout>;

    fn set_binding_context(&mut self, context: BindingContext);

    fn binding_context(&self) -> Option<BindingContext>;
}
