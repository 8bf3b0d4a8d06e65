use crate::{
	error::ExtensionError,
	types::{ListenerHandle, attach_listener},
	utils::{call_async_fn_and_de, get_api_namespace, to_js},
};
use js_sys::Object;
use serde::Serialize;
use wasm_bindgen::{JsValue, prelude::*};

#[derive(Clone)]
pub struct Notifications {
	api: Object,
}

impl Notifications {
	pub(crate) fn new(api_root: &Object) -> Self {
		let api = get_api_namespace(api_root, "notifications").expect("`notifications` API not available");
		Self { api }
	}

	/// `notification_id` may be omitted (serialized as `undefined`), in which
	/// case the browser generates one. Resolves to the id actually used.
	pub async fn create<I: Serialize + ?Sized, O: Serialize + ?Sized>(&self, notification_id: &I, options: &O) -> Result<String, ExtensionError> {
		call_async_fn_and_de(&self.api, "create", &[to_js(notification_id)?, to_js(options)?][..]).await
	}

	pub fn on_clicked(&self) -> Result<OnNotificationClicked, ExtensionError> {
		Ok(OnNotificationClicked(get_api_namespace(&self.api, "onClicked")?))
	}

	pub fn on_button_clicked(&self) -> Result<OnNotificationButtonClicked, ExtensionError> {
		Ok(OnNotificationButtonClicked(get_api_namespace(&self.api, "onButtonClicked")?))
	}
}

pub struct OnNotificationClicked(Object);

impl OnNotificationClicked {
	pub fn add_listener(&self, mut callback: impl FnMut(String) + 'static) -> Result<ListenerHandle<dyn FnMut(JsValue)>, ExtensionError> {
		attach_listener(
			&self.0,
			Closure::wrap(Box::new(move |val: JsValue| {
				if let Some(notification_id) = val.as_string() {
					callback(notification_id);
				}
			}) as Box<dyn FnMut(JsValue)>),
		)
	}
}

pub struct OnNotificationButtonClicked(Object);

impl OnNotificationButtonClicked {
	pub fn add_listener(&self, mut callback: impl FnMut(String, u32) + 'static) -> Result<ListenerHandle<dyn FnMut(JsValue, JsValue)>, ExtensionError> {
		attach_listener(
			&self.0,
			Closure::wrap(Box::new(move |id: JsValue, index: JsValue| {
				if let (Some(notification_id), Some(button_index)) = (id.as_string(), index.as_f64()) {
					callback(notification_id, button_index as u32);
				}
			}) as Box<dyn FnMut(JsValue, JsValue)>),
		)
	}
}
