use crate::{
	error::ExtensionError,
	types::{ListenerHandle, OnClickData, attach_listener},
	utils::{call_async_fn, call_fn, get_api_namespace, to_js},
};
use js_sys::Object;
use serde::Serialize;
use wasm_bindgen::{JsValue, prelude::*};

#[derive(Clone)]
pub struct ContextMenus {
	api: Object,
}

impl ContextMenus {
	pub(crate) fn new(api_root: &Object) -> Self {
		let api = get_api_namespace(api_root, "contextMenus").expect("`contextMenus` API not available");
		Self { api }
	}

	/// `contextMenus.create` answers with the item id rather than a promise.
	/// Failures such as a duplicate id only surface through `lastError`, which
	/// the completion callback consumes so Chrome does not report it as unchecked.
	pub fn create<P: Serialize + ?Sized>(&self, properties: &P) -> Result<JsValue, ExtensionError> {
		let on_created = Closure::once_into_js(|| {});
		call_fn(&self.api, "create", &[to_js(properties)?, on_created][..])
	}

	pub async fn remove<I: Serialize + ?Sized>(&self, menu_item_id: &I) -> Result<(), ExtensionError> {
		call_async_fn(&self.api, "remove", &[to_js(menu_item_id)?][..]).await?;
		Ok(())
	}

	pub fn on_clicked(&self) -> Result<OnMenuClicked, ExtensionError> {
		Ok(OnMenuClicked(get_api_namespace(&self.api, "onClicked")?))
	}
}

pub struct OnMenuClicked(Object);

impl OnMenuClicked {
	pub fn add_listener(&self, mut callback: impl FnMut(OnClickData) + 'static) -> Result<ListenerHandle<dyn FnMut(JsValue)>, ExtensionError> {
		attach_listener(
			&self.0,
			Closure::wrap(Box::new(move |val: JsValue| {
				if let Ok(data) = serde_wasm_bindgen::from_value(val) {
					callback(data);
				}
			}) as Box<dyn FnMut(JsValue)>),
		)
	}
}
