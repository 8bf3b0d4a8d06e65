use crate::{
	error::ExtensionError,
	utils::{call_async_fn, call_async_fn_and_de, get_api_namespace, to_js},
};
use js_sys::Object;
use serde::{Serialize, de::DeserializeOwned};

/// `chrome.tabs`. Arguments are generic so typed callers and raw JSON
/// pass-through share one surface; `R` picks the shape of the returned tab(s).
#[derive(Clone)]
pub struct Tabs {
	api: Object,
}

impl Tabs {
	pub(crate) fn new(api_root: &Object) -> Self {
		let api = get_api_namespace(api_root, "tabs").expect("`tabs` API not available");
		Self { api }
	}

	pub async fn create<P: Serialize + ?Sized, R: DeserializeOwned>(&self, properties: &P) -> Result<R, ExtensionError> {
		call_async_fn_and_de(&self.api, "create", &[to_js(properties)?][..]).await
	}

	pub async fn get<I: Serialize + ?Sized, R: DeserializeOwned>(&self, tab_id: &I) -> Result<R, ExtensionError> {
		call_async_fn_and_de(&self.api, "get", &[to_js(tab_id)?][..]).await
	}

	pub async fn update<I: Serialize + ?Sized, P: Serialize + ?Sized, R: DeserializeOwned>(&self, tab_id: &I, properties: &P) -> Result<R, ExtensionError> {
		call_async_fn_and_de(&self.api, "update", &[to_js(tab_id)?, to_js(properties)?][..]).await
	}

	pub async fn remove<I: Serialize + ?Sized>(&self, tab_ids: &I) -> Result<(), ExtensionError> {
		call_async_fn(&self.api, "remove", &[to_js(tab_ids)?][..]).await?;
		Ok(())
	}

	pub async fn query<Q: Serialize + ?Sized, R: DeserializeOwned>(&self, query_info: &Q) -> Result<R, ExtensionError> {
		call_async_fn_and_de(&self.api, "query", &[to_js(query_info)?][..]).await
	}

	pub async fn send_message<I, M, O, R>(&self, tab_id: &I, message: &M, options: &O) -> Result<R, ExtensionError>
	where
		I: Serialize + ?Sized,
		M: Serialize + ?Sized,
		O: Serialize + ?Sized,
		R: DeserializeOwned,
	{
		call_async_fn_and_de(&self.api, "sendMessage", &[to_js(tab_id)?, to_js(message)?, to_js(options)?][..]).await
	}
}
