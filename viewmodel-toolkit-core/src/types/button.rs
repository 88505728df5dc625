//! Button slot and toolbar definitions

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::command::{CommandParameter, CommandRef};

/// Logical button of a dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ButtonRole {
    Save,
    Cancel,
}

impl ButtonRole {
    /// Text used when nothing else has been configured
    #[must_use]
    pub fn default_text(self) -> &'static str {
        match self {
            Self::Save => "Save",
            Self::Cancel => "Cancel",
        }
    }

    /// Toolbar placement: cancel left-most, save right-most
    #[must_use]
    pub fn toolbar_priority(self) -> i32 {
        match self {
            Self::Save => i32::MAX,
            Self::Cancel => i32::MIN,
        }
    }
}

impl fmt::Display for ButtonRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_text())
    }
}

/// Logical state of one button, mirrored onto every surface
#[derive(Clone, Default)]
pub struct ButtonSlot {
    pub text: String,
    pub command: Option<CommandRef>,
    pub command_parameter: CommandParameter,
    pub is_visible: bool,
}

impl fmt::Debug for ButtonSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonSlot")
            .field("text", &self.text)
            .field("has_command", &self.command.is_some())
            .field("command_parameter", &self.command_parameter)
            .field("is_visible", &self.is_visible)
            .finish()
    }
}

/// Item hosted by a page's navigation-bar toolbar
///
/// `role` is `None` for items the host page owns itself; those are never touched
/// by the dialog machinery.
#[derive(Clone)]
pub struct ToolbarItem {
    pub role: Option<ButtonRole>,
    pub text: String,
    pub command: Option<CommandRef>,
    pub command_parameter: CommandParameter,
    pub priority: i32,
    pub is_enabled: bool,
}

impl ToolbarItem {
    /// Toolbar item for a dialog button with its default text and placement
    #[must_use]
    pub fn for_role(role: ButtonRole) -> Self {
        Self {
            role: Some(role),
            text: role.default_text().to_string(),
            command: None,
            command_parameter: CommandParameter::Null,
            priority: role.toolbar_priority(),
            is_enabled: true,
        }
    }

    /// Toolbar item owned by the host page
    #[must_use]
    pub fn host(text: impl Into<String>, priority: i32) -> Self {
        Self {
            role: None,
            text: text.into(),
            command: None,
            command_parameter: CommandParameter::Null,
            priority,
            is_enabled: true,
        }
    }
}

impl fmt::Debug for ToolbarItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolbarItem")
            .field("role", &self.role)
            .field("text", &self.text)
            .field("has_command", &self.command.is_some())
            .field("command_parameter", &self.command_parameter)
            .field("priority", &self.priority)
            .field("is_enabled", &self.is_enabled)
            .finish()
    }
}

/// A page's toolbar, kept in ascending priority order
#[derive(Debug, Clone, Default)]
pub struct Toolbar {
    items: Vec<ToolbarItem>,
}

impl Toolbar {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[ToolbarItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Insert after every item of equal or lower priority
    pub fn insert(&mut self, item: ToolbarItem) {
        let index = self.items.partition_point(|i| i.priority <= item.priority);
        self.items.insert(index, item);
    }

    /// Remove the item bound to a dialog button, if present
    pub fn remove(&mut self, role: ButtonRole) -> Option<ToolbarItem> {
        let index = self.items.iter().position(|i| i.role == Some(role))?;
        Some(self.items.remove(index))
    }

    pub fn find(&self, role: ButtonRole) -> Option<&ToolbarItem> {
        self.items.iter().find(|i| i.role == Some(role))
    }

    pub fn find_mut(&mut self, role: ButtonRole) -> Option<&mut ToolbarItem> {
        self.items.iter_mut().find(|i| i.role == Some(role))
    }

    pub fn contains(&self, role: ButtonRole) -> bool {
        self.find(role).is_some()
    }
}
