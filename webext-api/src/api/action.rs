use crate::{
	error::ExtensionError,
	types::BrowserType,
	utils::{call_async_fn, call_async_fn_and_de, get_api_namespace, to_js},
};
use serde::Serialize;

#[derive(Clone)]
pub struct Action {
	api: js_sys::Object,
}

impl Action {
	pub(crate) fn new(api_root: &js_sys::Object, browser_type: BrowserType) -> Self {
		let api = match browser_type {
			BrowserType::Firefox => get_api_namespace(api_root, "action").or_else(|_| get_api_namespace(api_root, "browserAction")),
			BrowserType::Chrome => get_api_namespace(api_root, "action"),
		}
		.expect("Could not find action API namespace");
		Self { api }
	}

	pub async fn get_badge_text<D: Serialize + ?Sized>(&self, details: &D) -> Result<String, ExtensionError> {
		call_async_fn_and_de(&self.api, "getBadgeText", &[to_js(details)?][..]).await
	}

	pub async fn set_badge_text<D: Serialize + ?Sized>(&self, details: &D) -> Result<(), ExtensionError> {
		call_async_fn(&self.api, "setBadgeText", &[to_js(details)?][..]).await?;
		Ok(())
	}

	pub async fn set_badge_background_color<D: Serialize + ?Sized>(&self, details: &D) -> Result<(), ExtensionError> {
		call_async_fn(&self.api, "setBadgeBackgroundColor", &[to_js(details)?][..]).await?;
		Ok(())
	}

	pub async fn set_title<D: Serialize + ?Sized>(&self, details: &D) -> Result<(), ExtensionError> {
		call_async_fn(&self.api, "setTitle", &[to_js(details)?][..]).await?;
		Ok(())
	}

	/// Icon paths must already be absolute; a service worker resolves relative
	/// paths against its own script URL.
	pub async fn set_icon<D: Serialize + ?Sized>(&self, details: &D) -> Result<(), ExtensionError> {
		call_async_fn(&self.api, "setIcon", &[to_js(details)?][..]).await?;
		Ok(())
	}
}
