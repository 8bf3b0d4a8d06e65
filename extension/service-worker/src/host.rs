use async_trait::async_trait;
use common::{ApiCall, RelayError};
use serde_json::Value;
use webext_api::CreateDocumentParameters;

/// The browser surface the relay needs.
///
/// `BrowserHost` implements it over the real `chrome.*` namespaces; tests use an
/// in-memory host. Everything runs on the worker's single thread, hence `?Send`.
#[async_trait(?Send)]
pub trait ExtensionHost: 'static {
	/// Absolute URL of a file packaged with the extension.
	fn resource_url(&self, path: &str) -> String;

	async fn offscreen_document_exists(&self, document_url: &str) -> Result<bool, RelayError>;

	async fn create_offscreen_document(&self, parameters: &CreateDocumentParameters) -> Result<(), RelayError>;

	/// Sends on the runtime broadcast channel and resolves to the first reply.
	async fn broadcast(&self, message: &Value) -> Result<Value, RelayError>;

	async fn invoke(&self, call: ApiCall) -> Result<Value, RelayError>;
}
