use crate::RelayError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

/// Actions served by the offscreen document rather than by the service worker.
///
/// The wire names are historical and not uniformly cased; every odd one is
/// spelled out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr, Display, EnumIter, EnumCount)]
#[strum(serialize_all = "camelCase")]
pub enum LegacyAction {
	SaveLoginState,
	GetAccount,
	AutoLogin,
	GetTask,
	GetSetting,
	SetVariable,
	PriceProtectionNotice,
	#[strum(serialize = "checkin_notice")]
	CheckinNotice,
	GoldCoinReceived,
	BeanReceived,
	MarkCheckinStatus,
	SaveAccount,
	RunStatus,
	#[strum(serialize = "create_tab")]
	CreateTab,
	CouponReceived,
	ProductPrice,
	Promotions,
	GetPageSetting,
	OpenLogin,
	OpenPricePro,
	Paid,
	GetPriceChart,
	GetMessages,
	GetOrders,
	ClearUnread,
	OpenUrlAsMoblie,
	GetProductPrice,
	LoginFailed,
	#[strum(serialize = "option")]
	ShowOptions,
	RunTask,
	FindOrder,
	FindGood,
	MyTab,
}

/// `type` tags served directly by the service worker's privileged APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr, Display, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ProxyTag {
	UpdateContextMenu,
	ChromeAction,
	ChromeAlarms,
	ChromeTabs,
	ChromeNotifications,
	ChromeWindows,
	ChromeRuntimeReload,
}

/// Values of a message's `target` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Target {
	/// Already relayed to the offscreen document.
	Offscreen,
	/// Asks the service worker to relay it.
	OffscreenProxy,
}

/// Broadcasts emitted when a browser event wakes the service worker.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Display)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE", rename_all_fields = "camelCase")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RelayEvent {
	AlarmTriggered { alarm: Value },
	NotificationClicked { notification_id: String },
	NotificationButtonClicked { notification_id: String, button_index: u32 },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiResponse {
	pub result: Value,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
	pub error: String,
}

impl From<&RelayError> for ErrorResponse {
	fn from(err: &RelayError) -> Self {
		Self { error: err.to_string() }
	}
}

/// Copy of `message` marked as relayed, carrying who originally sent it.
///
/// `None` when the message is not a JSON object.
pub fn forwarded(message: &Value, sender: &Value) -> Option<Value> {
	let mut fields = message.as_object()?.clone();
	fields.insert("target".to_owned(), Value::String(Target::Offscreen.to_string()));
	fields.insert("originalSender".to_owned(), sender.clone());
	Some(Value::Object(fields))
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;
	use std::{collections::HashSet, str::FromStr};
	use strum::IntoEnumIterator;

	#[test]
	fn legacy_wire_names_parse_back() {
		let names: HashSet<String> = LegacyAction::iter().map(|action| action.as_ref().to_owned()).collect();
		assert_eq!(names.len(), LegacyAction::COUNT);
		for name in ["checkin_notice", "create_tab", "option", "openUrlAsMoblie", "getTask", "myTab"] {
			assert!(names.contains(name), "{name} missing from the allow-list");
		}
		assert_eq!(LegacyAction::from_str("goldCoinReceived"), Ok(LegacyAction::GoldCoinReceived));
		assert!(LegacyAction::from_str("GetTask").is_err());
	}

	#[test]
	fn allow_list_and_proxy_tags_are_disjoint() {
		for tag in ProxyTag::iter() {
			assert!(LegacyAction::from_str(tag.as_ref()).is_err());
		}
		assert_eq!(ProxyTag::ChromeRuntimeReload.as_ref(), "CHROME_RUNTIME_RELOAD");
		assert_eq!(ProxyTag::from_str("UPDATE_CONTEXT_MENU"), Ok(ProxyTag::UpdateContextMenu));
	}

	#[test]
	fn relay_events_use_wire_shape() {
		let clicked = RelayEvent::NotificationButtonClicked { notification_id: "price-drop".into(), button_index: 1 };
		assert_eq!(
			serde_json::to_value(&clicked).unwrap(),
			json!({"type": "NOTIFICATION_BUTTON_CLICKED", "notificationId": "price-drop", "buttonIndex": 1})
		);

		let alarm = RelayEvent::AlarmTriggered { alarm: json!({"name": "cycleTask", "scheduledTime": 1.0}) };
		assert_eq!(serde_json::to_value(&alarm).unwrap(), json!({"type": "ALARM_TRIGGERED", "alarm": {"name": "cycleTask", "scheduledTime": 1.0}}));
		assert_eq!(alarm.to_string(), "ALARM_TRIGGERED");
	}

	#[test]
	fn forwarded_copy_keeps_payload_and_adds_provenance() {
		let message = json!({"action": "getTask", "args": {"id": 3}, "target": "offscreen_proxy"});
		let sender = json!({"id": "ext", "url": "chrome-extension://ext/popup.html"});

		let relayed = forwarded(&message, &sender).unwrap();

		assert_eq!(
			relayed,
			json!({"action": "getTask", "args": {"id": 3}, "target": "offscreen", "originalSender": {"id": "ext", "url": "chrome-extension://ext/popup.html"}})
		);
		assert_eq!(message["target"], "offscreen_proxy");
		assert!(forwarded(&json!("getTask"), &sender).is_none());
	}

	#[test]
	fn error_response_carries_display_text() {
		let response = ErrorResponse::from(&RelayError::Delivery("Receiving end does not exist.".into()));
		assert_eq!(serde_json::to_value(response).unwrap(), json!({"error": "Receiving end does not exist."}));
	}
}
