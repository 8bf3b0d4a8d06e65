use crate::{
	error::ExtensionError,
	types::{BrowserType, CreateDocumentParameters},
	utils::{call_async_fn, get_api_namespace, to_js},
};
use js_sys::Object;

/// `chrome.offscreen`; Chrome only.
#[derive(Clone)]
pub struct Offscreen {
	api: Object,
}

impl Offscreen {
	pub(crate) fn new(api_root: &Object, browser_type: BrowserType) -> Result<Self, ExtensionError> {
		match browser_type {
			BrowserType::Chrome => Ok(Self { api: get_api_namespace(api_root, "offscreen")? }),
			BrowserType::Firefox => Err(ExtensionError::ApiNotFound("offscreen".to_string())),
		}
	}

	/// Rejects when a document already exists; only one may be open per extension.
	pub async fn create_document(&self, parameters: &CreateDocumentParameters) -> Result<(), ExtensionError> {
		call_async_fn(&self.api, "createDocument", &[to_js(parameters)?][..]).await?;
		Ok(())
	}
}
