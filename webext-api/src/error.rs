use thiserror::Error;
use wasm_bindgen::{JsCast, prelude::*};

#[derive(Error, Debug)]
pub enum ExtensionError {
	#[error("The `{0}` API is not available in this context.")]
	ApiNotFound(String),

	#[error("This browser is not supported or no extension API was found.")]
	UnsupportedBrowser,

	#[error("Failed to serialize or deserialize data: {0}")]
	SerializationError(#[from] serde_wasm_bindgen::Error),

	#[error("The browser API returned an error: {0}")]
	ApiError(String),

	#[error("A JavaScript error occurred: {message}")]
	JsError { message: String, js_value: JsValue },

	#[error("An unexpected JavaScript value was thrown: {0:?}")]
	JsValue(JsValue),
}

impl ExtensionError {
	/// The text the platform reported, without the wrapper's prefix.
	///
	/// This is what `chrome.runtime.lastError.message` would have held for a
	/// callback-style call.
	pub fn platform_message(&self) -> String {
		match self {
			Self::ApiError(message) | Self::JsError { message, .. } => message.clone(),
			other => other.to_string(),
		}
	}
}

impl From<JsValue> for ExtensionError {
	fn from(js_val: JsValue) -> Self {
		if let Some(obj) = js_val.dyn_ref::<js_sys::Object>()
			&& let Ok(message_val) = js_sys::Reflect::get(obj, &"message".into())
			&& let Some(message) = message_val.as_string()
		{
			return ExtensionError::ApiError(message);
		}

		if let Some(e) = js_val.dyn_ref::<js_sys::Error>() {
			ExtensionError::JsError { message: e.message().into(), js_value: js_val }
		} else if let Some(message) = js_val.as_string() {
			ExtensionError::ApiError(message)
		} else {
			ExtensionError::JsValue(js_val)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn platform_message_strips_wrapper_text() {
		let err = ExtensionError::ApiError("Could not establish connection. Receiving end does not exist.".to_string());
		assert_eq!(err.platform_message(), "Could not establish connection. Receiving end does not exist.");
		assert_eq!(err.to_string(), "The browser API returned an error: Could not establish connection. Receiving end does not exist.");
	}

	#[test]
	fn platform_message_falls_back_to_display() {
		let err = ExtensionError::ApiNotFound("offscreen".to_string());
		assert_eq!(err.platform_message(), "The `offscreen` API is not available in this context.");
	}
}
