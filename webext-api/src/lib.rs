pub mod api;
pub mod error;
pub mod types;
mod utils;

use api::{Action, Alarms, ContextMenus, Notifications, Offscreen, Runtime, Tabs, Windows};
use error::ExtensionError;
use js_sys::Object;
pub use types::*;
use wasm_bindgen::prelude::*;

#[derive(Clone)]
pub struct Browser {
	api_root: Object,
	browser_type: BrowserType,
}

impl Browser {
	pub fn browser_type(&self) -> BrowserType {
		self.browser_type.clone()
	}

	pub fn action(&self) -> Action {
		Action::new(&self.api_root, self.browser_type.clone())
	}

	pub fn alarms(&self) -> Alarms {
		Alarms::new(&self.api_root)
	}

	pub fn context_menus(&self) -> ContextMenus {
		ContextMenus::new(&self.api_root)
	}

	pub fn notifications(&self) -> Notifications {
		Notifications::new(&self.api_root)
	}

	pub fn offscreen(&self) -> Result<Offscreen, ExtensionError> {
		Offscreen::new(&self.api_root, self.browser_type.clone())
	}

	pub fn runtime(&self) -> Runtime {
		Runtime::new(&self.api_root)
	}

	pub fn tabs(&self) -> Tabs {
		Tabs::new(&self.api_root)
	}

	pub fn windows(&self) -> Windows {
		Windows::new(&self.api_root)
	}
}

/// Locates the extension API root on the global object.
///
/// Service workers have no `window`, so the lookup goes through `globalThis`.
pub fn init() -> Result<Browser, ExtensionError> {
	let global = js_sys::global();

	if let Ok(api_root) = js_sys::Reflect::get(&global, &"chrome".into()).and_then(|v| v.dyn_into::<Object>()) {
		Ok(Browser { api_root, browser_type: BrowserType::Chrome })
	} else if let Ok(api_root) = js_sys::Reflect::get(&global, &"browser".into()).and_then(|v| v.dyn_into::<Object>()) {
		Ok(Browser { api_root, browser_type: BrowserType::Firefox })
	} else {
		Err(ExtensionError::UnsupportedBrowser)
	}
}
