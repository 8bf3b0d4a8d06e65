use crate::{
	error::ExtensionError,
	utils::{call_async_fn_and_de, get_api_namespace, to_js},
};
use js_sys::Object;
use serde::{Serialize, de::DeserializeOwned};

#[derive(Clone)]
pub struct Windows {
	api: Object,
}

impl Windows {
	pub(crate) fn new(api_root: &Object) -> Self {
		let api = get_api_namespace(api_root, "windows").expect("`windows` API not available");
		Self { api }
	}

	pub async fn create<D: Serialize + ?Sized, R: DeserializeOwned>(&self, create_data: &D) -> Result<R, ExtensionError> {
		call_async_fn_and_de(&self.api, "create", &[to_js(create_data)?][..]).await
	}

	pub async fn update<I: Serialize + ?Sized, U: Serialize + ?Sized, R: DeserializeOwned>(&self, window_id: &I, update_info: &U) -> Result<R, ExtensionError> {
		call_async_fn_and_de(&self.api, "update", &[to_js(window_id)?, to_js(update_info)?][..]).await
	}
}
