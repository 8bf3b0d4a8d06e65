//! MV3 service worker of the price-protection extension.
//!
//! Legacy background logic (DOM scraping, `localStorage`, audio) runs in an
//! offscreen document; this worker keeps that document alive, relays legacy
//! actions to it and performs the privileged `chrome.*` calls it cannot make
//! itself.

mod browser;
pub mod config;
mod dispatch;
mod events;
mod host;
mod menu;
mod offscreen;
mod relay;
#[cfg(test)]
mod testing;

pub use browser::BrowserHost;
pub use config::RelayConfig;
pub use dispatch::Disposition;
pub use host::ExtensionHost;
pub use menu::MenuEntry;
pub use offscreen::OffscreenDocument;
pub use relay::Relay;

use log::{error, warn};
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use webext_api::{Browser, api::Responder, error::ExtensionError};

#[wasm_bindgen]
pub fn main() {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::new(config::log_level()));

	let browser = match webext_api::init() {
		Ok(b) => b,
		Err(e) => {
			error!("[service-worker] Failed to initialize: {e}");
			return;
		},
	};

	let relay = Relay::new(BrowserHost::new(browser.clone()), RelayConfig::default());
	if let Err(e) = register_listeners(&browser, &relay) {
		error!("[service-worker] Failed to attach listeners: {e}");
	}
}

/// Listeners must be registered synchronously on every worker start, or Chrome
/// will not wake the worker for those events.
fn register_listeners(browser: &Browser, relay: &Relay<BrowserHost>) -> Result<(), ExtensionError> {
	let r = relay.clone();
	browser
		.alarms()
		.on_alarm()?
		.add_listener(move |alarm| match serde_json::to_value(&alarm) {
			Ok(alarm) => spawn_local(r.clone().on_alarm(alarm)),
			Err(e) => error!("[service-worker] Failed to encode alarm: {e}"),
		})?
		.persist();

	let r = relay.clone();
	browser.notifications().on_clicked()?.add_listener(move |notification_id| spawn_local(r.clone().on_notification_clicked(notification_id)))?.persist();

	let r = relay.clone();
	browser
		.notifications()
		.on_button_clicked()?
		.add_listener(move |notification_id, button_index| spawn_local(r.clone().on_notification_button_clicked(notification_id, button_index)))?
		.persist();

	let r = relay.clone();
	browser.runtime().on_startup()?.add_listener(move || spawn_local(r.clone().on_startup()))?.persist();

	let r = relay.clone();
	browser.runtime().on_installed()?.add_listener(move |details| spawn_local(r.clone().on_installed(details.reason)))?.persist();

	let r = relay.clone();
	browser
		.runtime()
		.on_message::<Value>()?
		.add_listener_with_responder(move |message, sender: Value, responder| answer(r.dispatch(message, sender), responder))?
		.persist();

	let r = relay.clone();
	browser.context_menus().on_clicked()?.add_listener(move |data| spawn_local(r.clone().on_menu_clicked(data.menu_item_id)))?.persist();

	Ok(())
}

/// Drives a disposition and tells Chrome whether to keep the channel open.
fn answer(disposition: Disposition, responder: Responder) -> bool {
	let keep_open = disposition.keeps_channel_open();
	match disposition {
		Disposition::Unhandled => {},
		Disposition::Detached(effect) => spawn_local(effect),
		Disposition::Respond(reply) => spawn_local(async move {
			let response = reply.await;
			if let Err(e) = responder.send(&response) {
				warn!("[service-worker] Failed to send response: {e}");
			}
		}),
	}
	keep_open
}
