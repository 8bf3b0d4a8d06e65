use crate::error::ExtensionError;
use js_sys::{Function, Object, Promise, Reflect};
use serde::{Serialize, de::DeserializeOwned};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

pub fn get_api_namespace(root: &JsValue, name: &str) -> Result<Object, ExtensionError> {
	Reflect::get(root, &name.into())
		.map_err(|_| ExtensionError::ApiNotFound(name.to_string()))?
		.dyn_into()
		.map_err(|_| ExtensionError::ApiNotFound(name.to_string()))
}

/// Serializes for the extension APIs: maps become plain objects, unit and
/// `None` become `undefined` so optional positional arguments stay optional.
pub fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, ExtensionError> {
	value.serialize(&serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true)).map_err(Into::into)
}

/// Calls a method that answers synchronously (`getURL`, `reload`, `contextMenus.create`).
pub fn call_fn(api: &Object, method: &str, args: &[JsValue]) -> Result<JsValue, ExtensionError> {
	let func: Function = Reflect::get(api, &method.into())?.dyn_into()?;
	let js_args = args.iter().cloned().collect::<js_sys::Array>();
	func.apply(&api.into(), &js_args).map_err(Into::into)
}

pub async fn call_async_fn(api: &Object, method: &str, args: &[JsValue]) -> Result<JsValue, ExtensionError> {
	let promise: Promise = call_fn(api, method, args)?.dyn_into()?;
	JsFuture::from(promise).await.map_err(Into::into)
}

pub async fn call_async_fn_and_de<T: DeserializeOwned>(api: &Object, method: &str, args: &[JsValue]) -> Result<T, ExtensionError> {
	let result = call_async_fn(api, method, args).await?;
	serde_wasm_bindgen::from_value(result).map_err(Into::into)
}
