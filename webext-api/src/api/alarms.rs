use crate::{
	error::ExtensionError,
	types::{Alarm, ListenerHandle, attach_listener},
	utils::{call_async_fn, call_async_fn_and_de, get_api_namespace, to_js},
};
use js_sys::Object;
use serde::{Serialize, de::DeserializeOwned};
use wasm_bindgen::{JsValue, prelude::*};

#[derive(Clone)]
pub struct Alarms {
	api: Object,
}

impl Alarms {
	pub(crate) fn new(api_root: &Object) -> Self {
		let api = get_api_namespace(api_root, "alarms").expect("`alarms` API not available");
		Self { api }
	}

	pub async fn create<N: Serialize + ?Sized, I: Serialize + ?Sized>(&self, name: &N, alarm_info: &I) -> Result<(), ExtensionError> {
		call_async_fn(&self.api, "create", &[to_js(name)?, to_js(alarm_info)?][..]).await?;
		Ok(())
	}

	/// Resolves to `undefined` when no alarm carries the name, so callers pick
	/// an `Option` or a raw value as `R`.
	pub async fn get<N: Serialize + ?Sized, R: DeserializeOwned>(&self, name: &N) -> Result<R, ExtensionError> {
		call_async_fn_and_de(&self.api, "get", &[to_js(name)?][..]).await
	}

	pub async fn clear<N: Serialize + ?Sized>(&self, name: &N) -> Result<bool, ExtensionError> {
		call_async_fn_and_de(&self.api, "clear", &[to_js(name)?][..]).await
	}

	pub async fn clear_all(&self) -> Result<bool, ExtensionError> {
		call_async_fn_and_de(&self.api, "clearAll", &[][..]).await
	}

	pub fn on_alarm(&self) -> Result<OnAlarm, ExtensionError> {
		Ok(OnAlarm(get_api_namespace(&self.api, "onAlarm")?))
	}
}

pub struct OnAlarm(Object);

impl OnAlarm {
	pub fn add_listener(&self, mut callback: impl FnMut(Alarm) + 'static) -> Result<ListenerHandle<dyn FnMut(JsValue)>, ExtensionError> {
		attach_listener(
			&self.0,
			Closure::wrap(Box::new(move |val: JsValue| {
				if let Ok(alarm) = serde_wasm_bindgen::from_value(val) {
					callback(alarm);
				}
			}) as Box<dyn FnMut(JsValue)>),
		)
	}
}
