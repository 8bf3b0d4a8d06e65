use crate::{
	error::ExtensionError,
	types::{ContextFilter, ExtensionContext, InstalledDetails, ListenerHandle, attach_listener},
	utils::{call_async_fn_and_de, call_fn, get_api_namespace, to_js},
};
use js_sys::{Function, Object};
use serde::{Serialize, de::DeserializeOwned};
use std::marker::PhantomData;
use wasm_bindgen::{JsValue, prelude::*};

#[derive(Clone)]
pub struct Runtime {
	api: Object,
}

impl Runtime {
	pub(crate) fn new(api_root: &Object) -> Self {
		let api = get_api_namespace(api_root, "runtime").expect("`runtime` API not available");
		Self { api }
	}

	/// Broadcasts to every extension page. Rejects with the platform's
	/// `lastError` text when nothing is listening.
	pub async fn send_message<M: Serialize + ?Sized, R: DeserializeOwned>(&self, message: &M) -> Result<R, ExtensionError> {
		call_async_fn_and_de(&self.api, "sendMessage", &[to_js(message)?][..]).await
	}

	pub fn get_url(&self, path: &str) -> Result<String, ExtensionError> {
		call_fn(&self.api, "getURL", &[path.into()][..])?.as_string().ok_or_else(|| ExtensionError::ApiError(format!("getURL returned no string for `{path}`")))
	}

	pub async fn get_contexts(&self, filter: &ContextFilter) -> Result<Vec<ExtensionContext>, ExtensionError> {
		call_async_fn_and_de(&self.api, "getContexts", &[to_js(filter)?][..]).await
	}

	pub fn reload(&self) -> Result<(), ExtensionError> {
		call_fn(&self.api, "reload", &[][..])?;
		Ok(())
	}

	pub fn on_message<T: DeserializeOwned + 'static>(&self) -> Result<OnMessage<T>, ExtensionError> {
		Ok(OnMessage::new(get_api_namespace(&self.api, "onMessage")?))
	}

	pub fn on_startup(&self) -> Result<OnStartup, ExtensionError> {
		Ok(OnStartup(get_api_namespace(&self.api, "onStartup")?))
	}

	pub fn on_installed(&self) -> Result<OnInstalled, ExtensionError> {
		Ok(OnInstalled(get_api_namespace(&self.api, "onInstalled")?))
	}
}

/// The `sendResponse` callback handed to an `onMessage` listener.
pub struct Responder(Function);

impl Responder {
	pub fn send<R: Serialize + ?Sized>(&self, response: &R) -> Result<(), ExtensionError> {
		self.0.call1(&JsValue::UNDEFINED, &to_js(response)?)?;
		Ok(())
	}
}

pub struct OnMessage<T: DeserializeOwned + 'static> {
	api: Object,
	_phantom: PhantomData<T>,
}

impl<T: DeserializeOwned + 'static> OnMessage<T> {
	fn new(api: Object) -> Self {
		Self { api, _phantom: PhantomData }
	}

	/// Registers a listener answering through `sendResponse`.
	///
	/// The callback returns `true` when it will answer later, which keeps the
	/// message channel open; `false` closes it. Messages or senders that fail
	/// to deserialize are left to other listeners.
	pub fn add_listener_with_responder<S, F>(&self, mut callback: F) -> Result<ListenerHandle<dyn FnMut(JsValue, JsValue, JsValue) -> bool>, ExtensionError>
	where
		S: DeserializeOwned,
		F: FnMut(T, S, Responder) -> bool + 'static,
	{
		attach_listener(
			&self.api,
			Closure::wrap(Box::new(move |message, sender, send_response: JsValue| {
				let Ok(send_response) = send_response.dyn_into::<Function>() else { return false };
				match (serde_wasm_bindgen::from_value(message), serde_wasm_bindgen::from_value(sender)) {
					(Ok(msg), Ok(sender)) => callback(msg, sender, Responder(send_response)),
					_ => false,
				}
			}) as Box<dyn FnMut(JsValue, JsValue, JsValue) -> bool>),
		)
	}
}

pub struct OnStartup(Object);

impl OnStartup {
	pub fn add_listener(&self, mut callback: impl FnMut() + 'static) -> Result<ListenerHandle<dyn FnMut()>, ExtensionError> {
		attach_listener(&self.0, Closure::wrap(Box::new(move || callback()) as Box<dyn FnMut()>))
	}
}

pub struct OnInstalled(Object);

impl OnInstalled {
	pub fn add_listener(&self, mut callback: impl FnMut(InstalledDetails) + 'static) -> Result<ListenerHandle<dyn FnMut(JsValue)>, ExtensionError> {
		attach_listener(
			&self.0,
			Closure::wrap(Box::new(move |val: JsValue| {
				if let Ok(details) = serde_wasm_bindgen::from_value(val) {
					callback(details);
				}
			}) as Box<dyn FnMut(JsValue)>),
		)
	}
}
