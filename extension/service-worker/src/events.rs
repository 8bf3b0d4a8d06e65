use crate::{host::ExtensionHost, relay::Relay};
use common::{ApiCall, RelayEvent};
use log::{debug, error, info};
use serde_json::{Value, json};
use webext_api::InstallReason;

impl<H: ExtensionHost> Relay<H> {
	/// Wakes the offscreen document and tells it what happened. Nobody waits
	/// for an answer.
	pub async fn announce(self, event: RelayEvent) {
		if let Err(e) = self.offscreen.ensure().await {
			error!("[service-worker] Dropping {event}: {e}");
			return;
		}

		let message = match serde_json::to_value(&event) {
			Ok(message) => message,
			Err(e) => {
				error!("[service-worker] Failed to encode {event}: {e}");
				return;
			},
		};
		if let Err(e) = self.host.broadcast(&message).await {
			debug!("[service-worker] Nobody received {event}: {e}");
		}
	}

	pub async fn on_alarm(self, alarm: Value) {
		self.announce(RelayEvent::AlarmTriggered { alarm }).await;
	}

	pub async fn on_notification_clicked(self, notification_id: String) {
		self.announce(RelayEvent::NotificationClicked { notification_id }).await;
	}

	pub async fn on_notification_button_clicked(self, notification_id: String, button_index: u32) {
		self.announce(RelayEvent::NotificationButtonClicked { notification_id, button_index }).await;
	}

	pub async fn on_startup(self) {
		if let Err(e) = self.offscreen.ensure().await {
			error!("[service-worker] Offscreen document unavailable at startup: {e}");
		}
	}

	pub async fn on_installed(self, reason: InstallReason) {
		if let Err(e) = self.offscreen.ensure().await {
			error!("[service-worker] Offscreen document unavailable after {reason:?}: {e}");
			return;
		}
		if reason == InstallReason::Install {
			self.open_onboarding().await;
		}
	}

	async fn open_onboarding(&self) {
		info!("[service-worker] First install, opening {}", self.config.onboarding_page);
		let properties = json!({"url": self.config.onboarding_page});
		if let Err(e) = self.host.invoke(ApiCall::TabCreate { properties }).await {
			error!("[service-worker] Failed to open onboarding page: {e}");
		}
	}
}

#[cfg(test)]
mod tests {
	use crate::{config::RelayConfig, relay::Relay, testing::FakeHost};
	use common::ApiCall;
	use serde_json::json;
	use webext_api::InstallReason;

	fn relay() -> Relay<FakeHost> {
		Relay::new(FakeHost::default(), RelayConfig::default())
	}

	#[tokio::test]
	async fn alarm_wakes_offscreen_then_broadcasts() {
		let relay = relay();
		let alarm = json!({"name": "cycleTask", "scheduledTime": 1_700_000_000_000.0, "periodInMinutes": 30.0});

		relay.clone().on_alarm(alarm.clone()).await;

		assert_eq!(relay.host.creations.borrow().len(), 1);
		assert_eq!(*relay.host.broadcasts.borrow(), vec![json!({"type": "ALARM_TRIGGERED", "alarm": alarm})]);
	}

	#[tokio::test]
	async fn notification_clicks_carry_their_identity() {
		let relay = relay();

		relay.clone().on_notification_clicked("jjb_login".into()).await;
		relay.clone().on_notification_button_clicked("price-drop-17".into(), 1).await;

		assert_eq!(relay.host.creations.borrow().len(), 1);
		assert_eq!(
			*relay.host.broadcasts.borrow(),
			vec![
				json!({"type": "NOTIFICATION_CLICKED", "notificationId": "jjb_login"}),
				json!({"type": "NOTIFICATION_BUTTON_CLICKED", "notificationId": "price-drop-17", "buttonIndex": 1}),
			]
		);
	}

	#[tokio::test]
	async fn undelivered_broadcast_is_not_an_error() {
		let relay = relay();
		relay.host.fail_broadcasts_with("Could not establish connection. Receiving end does not exist.");

		relay.clone().on_notification_clicked("jjb_login".into()).await;

		assert_eq!(relay.host.broadcasts.borrow().len(), 1);
	}

	#[tokio::test]
	async fn event_is_dropped_when_offscreen_cannot_be_created() {
		let relay = relay();
		relay.host.fail_creation_with("Offscreen documents are not supported.");

		relay.clone().on_alarm(json!({"name": "cycleTask", "scheduledTime": 0.0})).await;

		assert!(relay.host.broadcasts.borrow().is_empty());
	}

	#[tokio::test]
	async fn startup_only_ensures_the_document() {
		let relay = relay();

		relay.clone().on_startup().await;

		assert_eq!(relay.host.creations.borrow().len(), 1);
		assert!(relay.host.broadcasts.borrow().is_empty());
		assert!(relay.host.calls.borrow().is_empty());
	}

	#[tokio::test]
	async fn first_install_opens_onboarding() {
		let relay = relay();

		relay.clone().on_installed(InstallReason::Install).await;

		assert_eq!(relay.host.creations.borrow().len(), 1);
		assert_eq!(*relay.host.calls.borrow(), vec![ApiCall::TabCreate { properties: json!({"url": "start.html"}) }]);
	}

	#[tokio::test]
	async fn update_does_not_open_onboarding() {
		let relay = relay();

		relay.clone().on_installed(InstallReason::Update).await;

		assert_eq!(relay.host.creations.borrow().len(), 1);
		assert!(relay.host.calls.borrow().is_empty());
	}

	#[tokio::test]
	async fn install_without_offscreen_skips_onboarding() {
		let relay = relay();
		relay.host.fail_creation_with("Offscreen documents are not supported.");

		relay.clone().on_installed(InstallReason::Install).await;

		assert!(relay.host.calls.borrow().is_empty());
	}
}
