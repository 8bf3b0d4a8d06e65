mod action;
mod alarms;
mod context_menus;
mod notifications;
mod offscreen;
mod runtime;
mod tabs;
mod windows;

pub use action::*;
pub use alarms::*;
pub use context_menus::*;
pub use notifications::*;
pub use offscreen::*;
pub use runtime::*;
pub use tabs::*;
pub use windows::*;
