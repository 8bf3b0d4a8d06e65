use crate::host::ExtensionHost;
use async_trait::async_trait;
use common::{ApiCall, RelayError};
use log::warn;
use serde_json::Value;
use webext_api::{Browser, ContextFilter, ContextType, CreateDocumentParameters, error::ExtensionError};

/// `ExtensionHost` over the live `chrome.*` APIs.
pub struct BrowserHost {
	browser: Browser,
}

impl BrowserHost {
	pub fn new(browser: Browser) -> Self {
		Self { browser }
	}
}

#[async_trait(?Send)]
impl ExtensionHost for BrowserHost {
	fn resource_url(&self, path: &str) -> String {
		self.browser.runtime().get_url(path).unwrap_or_else(|e| {
			warn!("[service-worker] Could not resolve `{path}`: {e}");
			path.to_owned()
		})
	}

	async fn offscreen_document_exists(&self, document_url: &str) -> Result<bool, RelayError> {
		let filter = ContextFilter { context_types: vec![ContextType::OffscreenDocument], document_urls: vec![document_url.to_owned()] };
		let contexts = self.browser.runtime().get_contexts(&filter).await.map_err(|e| RelayError::ContextQuery(e.platform_message()))?;
		Ok(!contexts.is_empty())
	}

	async fn create_offscreen_document(&self, parameters: &CreateDocumentParameters) -> Result<(), RelayError> {
		let creation_failed = |e: ExtensionError| RelayError::OffscreenCreation(e.platform_message());
		self.browser.offscreen().map_err(creation_failed)?.create_document(parameters).await.map_err(creation_failed)
	}

	async fn broadcast(&self, message: &Value) -> Result<Value, RelayError> {
		self.browser.runtime().send_message(message).await.map_err(|e| RelayError::Delivery(e.platform_message()))
	}

	async fn invoke(&self, call: ApiCall) -> Result<Value, RelayError> {
		let browser = &self.browser;
		let outcome: Result<Value, ExtensionError> = match call {
			ApiCall::ContextMenuCreate { properties } => browser.context_menus().create(&properties).map(|_| Value::Null),
			ApiCall::ContextMenuRemove { menu_id } => browser.context_menus().remove(&menu_id).await.map(|()| Value::Null),
			ApiCall::GetBadgeText { details } => browser.action().get_badge_text(&details).await.map(Value::String),
			ApiCall::SetBadgeText { details } => browser.action().set_badge_text(&details).await.map(|()| Value::Null),
			ApiCall::SetBadgeBackgroundColor { details } => browser.action().set_badge_background_color(&details).await.map(|()| Value::Null),
			ApiCall::SetTitle { details } => browser.action().set_title(&details).await.map(|()| Value::Null),
			ApiCall::SetIcon { details } => browser.action().set_icon(&details).await.map(|()| Value::Null),
			ApiCall::AlarmCreate { name, info } => browser.alarms().create(&name, &info).await.map(|()| Value::Null),
			ApiCall::AlarmGet { name } => browser.alarms().get(&name).await,
			ApiCall::AlarmClear { name } => browser.alarms().clear(&name).await.map(Value::Bool),
			ApiCall::AlarmClearAll => browser.alarms().clear_all().await.map(Value::Bool),
			ApiCall::TabCreate { properties } => browser.tabs().create(&properties).await,
			ApiCall::TabGet { tab_id } => browser.tabs().get(&tab_id).await,
			ApiCall::TabUpdate { tab_id, properties } => browser.tabs().update(&tab_id, &properties).await,
			ApiCall::TabRemove { tab_ids } => browser.tabs().remove(&tab_ids).await.map(|()| Value::Null),
			ApiCall::TabQuery { query } => browser.tabs().query(&query).await,
			ApiCall::TabSendMessage { tab_id, message, options } => browser.tabs().send_message(&tab_id, &message, &options).await,
			ApiCall::NotificationCreate { notification_id, options } => browser.notifications().create(&notification_id, &options).await.map(Value::String),
			ApiCall::WindowCreate { create_data } => browser.windows().create(&create_data).await,
			ApiCall::WindowUpdate { window_id, update_info } => browser.windows().update(&window_id, &update_info).await,
			ApiCall::RuntimeReload => browser.runtime().reload().map(|()| Value::Null),
		};
		outcome.map_err(|e| RelayError::Browser(e.platform_message()))
	}
}
