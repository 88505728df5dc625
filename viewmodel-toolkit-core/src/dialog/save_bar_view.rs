//! Default inline save bar

use std::fmt;

use crate::command::{CommandParameter, CommandRef};
use crate::traits::SaveBar;
use crate::types::{ButtonOrder, ButtonRole};

#[derive(Clone)]
struct BarButton {
    text: String,
    command: Option<CommandRef>,
    command_parameter: CommandParameter,
    is_visible: bool,
    is_enabled: bool,
}

impl Default for BarButton {
    fn default() -> Self {
        Self {
            text: String::new(),
            command: None,
            command_parameter: CommandParameter::Null,
            is_visible: true,
            is_enabled: true,
        }
    }
}

/// Save bar inserted into a page that does not author its own
///
/// Starts with empty texts and no commands so the toolbar defaults win
/// during reconciliation.
#[derive(Clone, Default)]
pub struct SaveBarView {
    order: ButtonOrder,
    save: BarButton,
    cancel: BarButton,
    is_visible: bool,
}

impl SaveBarView {
    #[must_use]
    pub fn new(order: ButtonOrder) -> Self {
        Self {
            order,
            ..Self::default()
        }
    }

    /// Pre-authored bar, as a declarative layout would produce it
    #[must_use]
    pub fn authored(order: ButtonOrder, save_text: &str, cancel_text: &str) -> Self {
        let mut bar = Self::new(order);
        bar.save.text = save_text.to_string();
        bar.cancel.text = cancel_text.to_string();
        bar
    }

    pub fn order(&self) -> ButtonOrder {
        self.order
    }

    /// Roles of the visible buttons, left to right
    pub fn ordered_roles(&self) -> Vec<ButtonRole> {
        self.order
            .roles()
            .into_iter()
            .filter(|role| self.button(*role).is_visible)
            .collect()
    }

    fn button(&self, role: ButtonRole) -> &BarButton {
        match role {
            ButtonRole::Save => &self.save,
            ButtonRole::Cancel => &self.cancel,
        }
    }

    fn button_mut(&mut self, role: ButtonRole) -> &mut BarButton {
        match role {
            ButtonRole::Save => &mut self.save,
            ButtonRole::Cancel => &mut self.cancel,
        }
    }
}

impl SaveBar for SaveBarView {
    fn text(&self, role: ButtonRole) -> String {
        self.button(role).text.clone()
    }

    fn set_text(&mut self, role: ButtonRole, text: &str) {
        text.clone_into(&mut self.button_mut(role).text);
    }

    fn command(&self, role: ButtonRole) -> Option<CommandRef> {
        self.button(role).command.clone()
    }

    fn set_command(&mut self, role: ButtonRole, command: Option<CommandRef>) {
        self.button_mut(role).command = command;
    }

    fn command_parameter(&self, role: ButtonRole) -> CommandParameter {
        self.button(role).command_parameter.clone()
    }

    fn set_command_parameter(&mut self, role: ButtonRole, parameter: CommandParameter) {
        self.button_mut(role).command_parameter = parameter;
    }

    fn is_button_visible(&self, role: ButtonRole) -> bool {
        self.button(role).is_visible
    }

    fn set_button_visible(&mut self, role: ButtonRole, visible: bool) {
        self.button_mut(role).is_visible = visible;
    }

    fn is_button_enabled(&self, role: ButtonRole) -> bool {
        self.button(role).is_enabled
    }

    fn set_button_enabled(&mut self, role: ButtonRole, enabled: bool) {
        self.button_mut(role).is_enabled = enabled;
    }

    fn is_visible(&self) -> bool {
        self.is_visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.is_visible = visible;
    }
}

impl fmt::Debug for SaveBarView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SaveBarView")
            .field("order", &self.order)
            .field("save_text", &self.save.text)
            .field("cancel_text", &self.cancel.text)
            .field("is_visible", &self.is_visible)
            .finish_non_exhaustive()
    }
}
