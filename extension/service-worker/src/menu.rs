use crate::{host::ExtensionHost, relay::Relay};
use common::{ApiCall, RelayError};
use log::{debug, warn};
use serde_json::json;
use std::str::FromStr;
use strum::{AsRefStr, EnumString};

/// Context-menu entries the service worker handles itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum MenuEntry {
	OpenPopup,
	LoginNotice,
}

impl<H: ExtensionHost> Relay<H> {
	pub async fn on_menu_clicked(self, menu_item_id: String) {
		let Ok(entry) = MenuEntry::from_str(&menu_item_id) else {
			debug!("[service-worker] Ignoring click on menu item `{menu_item_id}`");
			return;
		};
		let outcome = match entry {
			MenuEntry::OpenPopup => self.open_popup_window().await,
			MenuEntry::LoginNotice => self.open_login_notice().await,
		};
		if let Err(e) = outcome {
			warn!("[service-worker] Menu item `{}` failed: {e}", entry.as_ref());
		}
	}

	async fn open_popup_window(&self) -> Result<(), RelayError> {
		let create_data = json!({
			"url": self.host.resource_url(&self.config.popup_page),
			"width": self.config.popup_width,
			"height": self.config.popup_height,
			"top": 0,
			"type": "popup",
			"state": "normal",
		});
		let window = self.host.invoke(ApiCall::WindowCreate { create_data }).await?;
		let window_id = window.get("id").cloned().ok_or_else(|| RelayError::Browser("created window has no id".to_owned()))?;
		self.host.invoke(ApiCall::WindowUpdate { window_id, update_info: json!({"focused": true}) }).await?;
		Ok(())
	}

	async fn open_login_notice(&self) -> Result<(), RelayError> {
		self.host.invoke(ApiCall::TabCreate { properties: json!({"url": self.config.login_notice_url}) }).await?;
		Ok(())
	}
}
