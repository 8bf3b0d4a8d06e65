use crate::{LegacyAction, ProxyTag, Target};
use serde_json::Value;
use std::str::FromStr;

/// Where an inbound message goes. Checks run in declaration order and the
/// first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
	/// Served by a privileged API in the service worker.
	Proxy(ProxyTag),
	/// Already relayed once; relaying again would loop.
	AlreadyForwarded,
	/// Relayed to the offscreen document.
	Offscreen(ForwardReason),
	/// Not ours. No response is sent.
	Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForwardReason {
	Legacy(LegacyAction),
	Requested,
}

impl Route {
	pub fn of(message: &Value) -> Self {
		let text = |name: &str| message.get(name).and_then(Value::as_str);

		if let Some(tag) = text("type").and_then(|tag| ProxyTag::from_str(tag).ok()) {
			return Self::Proxy(tag);
		}

		let target = text("target").and_then(|target| Target::from_str(target).ok());
		if target == Some(Target::Offscreen) {
			return Self::AlreadyForwarded;
		}

		if let Some(action) = text("action").and_then(|action| LegacyAction::from_str(action).ok()) {
			Self::Offscreen(ForwardReason::Legacy(action))
		} else if target == Some(Target::OffscreenProxy) {
			Self::Offscreen(ForwardReason::Requested)
		} else {
			Self::Ignored
		}
	}
}
