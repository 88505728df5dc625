//! Toolkit configuration

use serde::{Deserialize, Serialize};

use super::{AlertDetails, ButtonOrder, DeviceIdiom, DisplayMode};
use crate::error::{ToolkitError, ToolkitResult};

/// Process-wide toolkit defaults, read once at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ToolkitConfig {
    /// Display mode used when a modal navigation does not specify one
    pub default_display_mode: DisplayMode,
    /// Device class the host runs on
    pub device_idiom: DeviceIdiom,
    /// Prompt shown before discarding unsaved changes
    pub cancel_confirmation: AlertDetails,
    /// Hide the toolbar copy of the cancel button (the save bar copy is unaffected)
    pub hide_cancel_toolbar_item: bool,
    /// Button order inside the default save bar
    pub save_bar_order: ButtonOrder,
    /// Animate page transitions unless a navigation call says otherwise
    pub animate_transitions: bool,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            default_display_mode: DisplayMode::Default,
            device_idiom: DeviceIdiom::Phone,
            cancel_confirmation: AlertDetails::default(),
            hide_cancel_toolbar_item: false,
            save_bar_order: ButtonOrder::CancelThenSave,
            animate_transitions: true,
        }
    }
}

impl ToolkitConfig {
    /// Parse a JSON configuration document; missing fields keep their defaults
    pub fn from_json_str(json: &str) -> ToolkitResult<Self> {
        serde_json::from_str(json).map_err(|e| ToolkitError::Config(e.to_string()))
    }

    pub fn to_json_string(&self) -> ToolkitResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ToolkitError::Config(e.to_string()))
    }
}
