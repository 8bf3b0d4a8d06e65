use crate::{dispatch::Disposition, host::ExtensionHost};
use async_trait::async_trait;
use common::{ApiCall, RelayError};
use serde_json::{Value, json};
use std::cell::{Cell, RefCell};
use webext_api::CreateDocumentParameters;

pub(crate) const EXTENSION_ORIGIN: &str = "chrome-extension://relaytest";

/// In-memory browser: records every call and answers like Chrome would.
#[derive(Default)]
pub(crate) struct FakeHost {
	offscreen_open: Cell<bool>,
	creation_failure: RefCell<Option<String>>,
	broadcast_failure: RefCell<Option<String>>,
	offscreen_reply: RefCell<Value>,
	call_failure: RefCell<Option<String>>,
	pub existence_queries: Cell<usize>,
	pub creations: RefCell<Vec<CreateDocumentParameters>>,
	pub broadcasts: RefCell<Vec<Value>>,
	pub calls: RefCell<Vec<ApiCall>>,
}

impl FakeHost {
	pub fn open_offscreen_document(&self) {
		self.offscreen_open.set(true);
	}

	pub fn fail_creation_with(&self, message: &str) {
		self.creation_failure.replace(Some(message.to_owned()));
	}

	pub fn succeed_creation(&self) {
		self.creation_failure.take();
	}

	pub fn fail_broadcasts_with(&self, message: &str) {
		self.broadcast_failure.replace(Some(message.to_owned()));
	}

	pub fn reply_from_offscreen(&self, reply: Value) {
		self.offscreen_reply.replace(reply);
	}

	pub fn fail_calls_with(&self, message: &str) {
		self.call_failure.replace(Some(message.to_owned()));
	}
}

#[async_trait(?Send)]
impl ExtensionHost for FakeHost {
	fn resource_url(&self, path: &str) -> String {
		format!("{EXTENSION_ORIGIN}/{path}")
	}

	async fn offscreen_document_exists(&self, document_url: &str) -> Result<bool, RelayError> {
		assert!(document_url.starts_with(EXTENSION_ORIGIN), "queried a relative url: {document_url}");
		self.existence_queries.set(self.existence_queries.get() + 1);
		Ok(self.offscreen_open.get())
	}

	async fn create_offscreen_document(&self, parameters: &CreateDocumentParameters) -> Result<(), RelayError> {
		// Creation takes a turn of the event loop, as in the browser.
		tokio::task::yield_now().await;
		self.creations.borrow_mut().push(parameters.clone());
		if let Some(message) = self.creation_failure.borrow().clone() {
			return Err(RelayError::OffscreenCreation(message));
		}
		self.offscreen_open.set(true);
		Ok(())
	}

	async fn broadcast(&self, message: &Value) -> Result<Value, RelayError> {
		self.broadcasts.borrow_mut().push(message.clone());
		if let Some(message) = self.broadcast_failure.borrow().clone() {
			return Err(RelayError::Delivery(message));
		}
		Ok(self.offscreen_reply.borrow().clone())
	}

	async fn invoke(&self, call: ApiCall) -> Result<Value, RelayError> {
		self.calls.borrow_mut().push(call.clone());
		if let Some(message) = self.call_failure.borrow().clone() {
			return Err(RelayError::Browser(message));
		}
		let result = match call {
			ApiCall::TabCreate { properties } => json!({"id": 7, "windowId": 1, "active": true, "url": properties["url"]}),
			ApiCall::WindowCreate { create_data } => json!({"id": 42, "focused": false, "type": create_data["type"]}),
			ApiCall::WindowUpdate { window_id, update_info } => json!({"id": window_id, "focused": update_info["focused"]}),
			ApiCall::GetBadgeText { .. } => json!("3"),
			ApiCall::NotificationCreate { notification_id, .. } => notification_id,
			_ => Value::Null,
		};
		Ok(result)
	}
}

/// Runs a disposition's future the way the `onMessage` glue would and returns
/// what `sendResponse` would have received.
pub(crate) async fn settle(disposition: Disposition) -> Option<Value> {
	match disposition {
		Disposition::Unhandled => None,
		Disposition::Detached(effect) => {
			effect.await;
			None
		},
		Disposition::Respond(reply) => Some(reply.await),
	}
}
