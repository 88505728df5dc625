//! Display mode and device class definitions

use serde::{Deserialize, Serialize};

use super::button::ButtonRole;

/// Which physical surface(s) host a dialog's save/cancel buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DisplayMode {
    /// Neither surface is shown
    None,
    /// Toolbar on handheld layouts, inline save bar on desktop layouts
    #[default]
    Default,
    /// Only the inline save bar
    SaveBarOnly,
    /// Only the navigation-bar toolbar
    ToolbarOnly,
    /// Toolbar and inline save bar together
    Both,
}

impl DisplayMode {
    /// Whether the toolbar surface is shown under this mode on the given device class
    #[must_use]
    pub fn shows_toolbar(self, idiom: DeviceIdiom) -> bool {
        match self {
            Self::ToolbarOnly | Self::Both => true,
            Self::Default => !idiom.is_desktop(),
            Self::None | Self::SaveBarOnly => false,
        }
    }

    /// Whether the inline save bar is shown under this mode on the given device class
    #[must_use]
    pub fn shows_save_bar(self, idiom: DeviceIdiom) -> bool {
        match self {
            Self::SaveBarOnly | Self::Both => true,
            Self::Default => idiom.is_desktop(),
            Self::None | Self::ToolbarOnly => false,
        }
    }
}

/// Device class the host is running on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeviceIdiom {
    #[default]
    Phone,
    Tablet,
    Desktop,
    Tv,
    Watch,
    Unknown,
}

impl DeviceIdiom {
    /// Wide/desktop-class layouts prefer the inline save bar
    #[must_use]
    pub fn is_desktop(self) -> bool {
        matches!(self, Self::Desktop)
    }
}

/// Left-to-right order of the buttons inside an inline save bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ButtonOrder {
    #[default]
    CancelThenSave,
    SaveThenCancel,
}

impl ButtonOrder {
    /// Button roles in left-to-right order
    #[must_use]
    pub fn roles(self) -> [ButtonRole; 2] {
        match self {
            Self::CancelThenSave => [ButtonRole::Cancel, ButtonRole::Save],
            Self::SaveThenCancel => [ButtonRole::Save, ButtonRole::Cancel],
        }
    }
}
