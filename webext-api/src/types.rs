use crate::error::ExtensionError;
use js_sys::{Function, Object};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};
use wasm_bindgen::{JsCast, closure::WasmClosure, prelude::*};

/// Keeps a JS listener registered for as long as the handle lives.
pub struct ListenerHandle<T: ?Sized> {
	target: Object,
	closure: Option<Closure<T>>,
}

impl<T: ?Sized + WasmClosure> ListenerHandle<T> {
	/// Leaves the listener registered for the lifetime of the page.
	///
	/// Service worker listeners must survive the registration scope, so the
	/// closure is handed over to the JS heap.
	pub fn persist(mut self) {
		if let Some(closure) = self.closure.take() {
			closure.forget();
		}
	}
}

impl<T: ?Sized> Drop for ListenerHandle<T> {
	fn drop(&mut self) {
		let Some(closure) = self.closure.as_ref() else { return };
		if let Ok(remove_listener_fn) = js_sys::Reflect::get(&self.target, &"removeListener".into()).and_then(|v| v.dyn_into::<Function>()) {
			let _ = remove_listener_fn.call1(&self.target, closure.as_ref());
		}
	}
}

pub(crate) fn attach_listener<T: ?Sized + 'static>(target: &Object, closure: Closure<T>) -> Result<ListenerHandle<T>, ExtensionError> {
	let add_listener_fn: Function =
		js_sys::Reflect::get(target, &"addListener".into())?.dyn_into().map_err(|_| ExtensionError::ApiNotFound("addListener".to_string()))?;
	add_listener_fn.call1(target, closure.as_ref())?;
	Ok(ListenerHandle { target: target.clone(), closure: Some(closure) })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrowserType {
	Chrome,
	Firefox,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alarm {
	pub name: String,
	pub scheduled_time: f64,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub period_in_minutes: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnClickData {
	pub menu_item_id: String,
	pub page_url: Option<String>,
	pub selection_text: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallReason {
	Install,
	Update,
	ChromeUpdate,
	SharedModuleUpdate,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstalledDetails {
	pub reason: InstallReason,
	pub previous_version: Option<String>,
	pub id: Option<String>,
}

/// Why an offscreen document is needed; Chrome requires at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum OffscreenReason {
	Testing,
	AudioPlayback,
	IframeScripting,
	DomScraping,
	Blobs,
	DomParser,
	UserMedia,
	DisplayMedia,
	WebRtc,
	Clipboard,
	LocalStorage,
	Workers,
	BatteryStatus,
	MatchMedia,
	Geolocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentParameters {
	pub url: String,
	pub reasons: Vec<OffscreenReason>,
	pub justification: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContextType {
	Tab,
	Popup,
	Background,
	OffscreenDocument,
	SidePanel,
	DeveloperTools,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextFilter {
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub context_types: Vec<ContextType>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub document_urls: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionContext {
	pub context_type: ContextType,
	pub context_id: String,
	pub document_url: Option<String>,
	pub tab_id: i64,
	pub frame_id: i64,
	pub incognito: bool,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn every_listener_shape_can_be_persisted() {
		let _: fn(ListenerHandle<dyn FnMut()>) = ListenerHandle::persist;
		let _: fn(ListenerHandle<dyn FnMut(JsValue)>) = ListenerHandle::persist;
		let _: fn(ListenerHandle<dyn FnMut(JsValue, JsValue)>) = ListenerHandle::persist;
		let _: fn(ListenerHandle<dyn FnMut(JsValue, JsValue, JsValue) -> bool>) = ListenerHandle::persist;
	}
}
