use crate::{host::ExtensionHost, relay::Relay};
use common::{ApiCall, ApiResponse, ErrorResponse, ForwardReason, RelayError, Route, forwarded};
use futures::future::{FutureExt, LocalBoxFuture};
use log::{debug, error, warn};
use serde_json::Value;
use std::rc::Rc;

/// What the `onMessage` listener does with a message.
pub enum Disposition {
	/// Not ours; the channel closes without a response.
	Unhandled,
	/// Handled without a reply. The effect still has to be driven.
	Detached(LocalBoxFuture<'static, ()>),
	/// The channel stays open until the future yields the response.
	Respond(LocalBoxFuture<'static, Value>),
}

impl Disposition {
	/// The value an `onMessage` listener returns to Chrome.
	pub fn keeps_channel_open(&self) -> bool {
		matches!(self, Self::Respond(_))
	}
}

impl<H: ExtensionHost> Relay<H> {
	/// Entry point for every message on the runtime channel.
	pub fn dispatch(&self, message: Value, sender: Value) -> Disposition {
		match Route::of(&message) {
			Route::Proxy(tag) => match ApiCall::parse(tag, &message) {
				Some(call) => self.proxy(call),
				None => {
					debug!("[service-worker] Unsupported {tag} request ignored");
					Disposition::Unhandled
				},
			},
			Route::Offscreen(reason) => {
				match reason {
					ForwardReason::Legacy(action) => debug!("[service-worker] Relaying `{action}` to the offscreen document"),
					ForwardReason::Requested => debug!("[service-worker] Relaying requested message to the offscreen document"),
				}
				Disposition::Respond(self.clone().forward(message, sender).boxed_local())
			},
			Route::AlreadyForwarded | Route::Ignored => Disposition::Unhandled,
		}
	}

	fn proxy(&self, call: ApiCall) -> Disposition {
		let call = match call {
			ApiCall::SetIcon { mut details } => {
				resolve_icon_paths(&mut details, |path| self.host.resource_url(path));
				ApiCall::SetIcon { details }
			},
			other => other,
		};
		let host = Rc::clone(&self.host);

		if call.replies() {
			Disposition::Respond(
				async move {
					let response = match host.invoke(call).await {
						Ok(result) => serde_json::to_value(ApiResponse { result }),
						Err(e) => {
							warn!("[service-worker] {e}");
							serde_json::to_value(ErrorResponse::from(&e))
						},
					};
					response.unwrap_or_default()
				}
				.boxed_local(),
			)
		} else {
			Disposition::Detached(
				async move {
					if let Err(e) = host.invoke(call).await {
						debug!("[service-worker] {e}");
					}
				}
				.boxed_local(),
			)
		}
	}

	async fn forward(self, message: Value, sender: Value) -> Value {
		match self.relay_to_offscreen(&message, &sender).await {
			Ok(reply) => reply,
			Err(e) => {
				error!("[service-worker] Failed to forward message to offscreen: {e}");
				serde_json::to_value(ErrorResponse::from(&e)).unwrap_or_default()
			},
		}
	}

	async fn relay_to_offscreen(&self, message: &Value, sender: &Value) -> Result<Value, RelayError> {
		self.offscreen.ensure().await?;
		let relayed = forwarded(message, sender).ok_or_else(|| RelayError::Serialization("relayed message is not an object".to_owned()))?;
		self.host.broadcast(&relayed).await
	}
}

/// Makes `setIcon` paths absolute. A service worker would otherwise resolve
/// them against its own script location.
pub(crate) fn resolve_icon_paths(details: &mut Value, resolve: impl Fn(&str) -> String) {
	match details.get_mut("path") {
		Some(Value::String(path)) if !path.is_empty() => *path = resolve(path.as_str()),
		Some(Value::Object(paths_by_size)) => {
			for path in paths_by_size.values_mut() {
				if let Value::String(relative) = path {
					*relative = resolve(relative.as_str());
				}
			}
		},
		_ => {},
	}
}
