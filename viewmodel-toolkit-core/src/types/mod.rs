//! Type definition module

mod alert;
mod button;
mod config;
mod display;

pub use alert::AlertDetails;
pub use button::{ButtonRole, ButtonSlot, Toolbar, ToolbarItem};
pub use config::ToolkitConfig;
pub use display::{ButtonOrder, DeviceIdiom, DisplayMode};
