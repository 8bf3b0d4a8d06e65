use crate::ProxyTag;
use serde_json::Value;

/// A privileged call the service worker performs on behalf of another context.
///
/// Arguments are carried verbatim; a missing positional argument is
/// `Value::Null` and reaches the browser as `undefined`.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
	ContextMenuCreate { properties: Value },
	ContextMenuRemove { menu_id: Value },
	GetBadgeText { details: Value },
	SetBadgeText { details: Value },
	SetBadgeBackgroundColor { details: Value },
	SetTitle { details: Value },
	SetIcon { details: Value },
	AlarmCreate { name: Value, info: Value },
	AlarmGet { name: Value },
	AlarmClear { name: Value },
	AlarmClearAll,
	TabCreate { properties: Value },
	TabGet { tab_id: Value },
	TabUpdate { tab_id: Value, properties: Value },
	TabRemove { tab_ids: Value },
	TabQuery { query: Value },
	TabSendMessage { tab_id: Value, message: Value, options: Value },
	NotificationCreate { notification_id: Value, options: Value },
	WindowCreate { create_data: Value },
	WindowUpdate { window_id: Value, update_info: Value },
	RuntimeReload,
}

impl ApiCall {
	/// Reads the call a proxy message asks for.
	///
	/// `UPDATE_CONTEXT_MENU` names its operation in `action`; every other tag
	/// uses `method` plus a positional `args` array. `None` when the tag does
	/// not support the requested operation.
	pub fn parse(tag: ProxyTag, message: &Value) -> Option<Self> {
		let args = Args(message.get("args").and_then(Value::as_array).map_or(&[][..], Vec::as_slice));
		let field = |name: &str| message.get(name).cloned().unwrap_or(Value::Null);

		let call = match tag {
			ProxyTag::UpdateContextMenu => match message.get("action")?.as_str()? {
				"create" => Self::ContextMenuCreate { properties: field("menuProperties") },
				"remove" => Self::ContextMenuRemove { menu_id: field("menuId") },
				_ => return None,
			},
			ProxyTag::ChromeRuntimeReload => Self::RuntimeReload,
			_ => match (tag, message.get("method")?.as_str()?) {
				(ProxyTag::ChromeAction, "getBadgeText") => Self::GetBadgeText { details: args.at(0) },
				(ProxyTag::ChromeAction, "setBadgeText") => Self::SetBadgeText { details: args.at(0) },
				(ProxyTag::ChromeAction, "setBadgeBackgroundColor") => Self::SetBadgeBackgroundColor { details: args.at(0) },
				(ProxyTag::ChromeAction, "setTitle") => Self::SetTitle { details: args.at(0) },
				(ProxyTag::ChromeAction, "setIcon") => Self::SetIcon { details: args.at(0) },
				(ProxyTag::ChromeAlarms, "create") => Self::AlarmCreate { name: args.at(0), info: args.at(1) },
				(ProxyTag::ChromeAlarms, "get") => Self::AlarmGet { name: args.at(0) },
				(ProxyTag::ChromeAlarms, "clear") => Self::AlarmClear { name: args.at(0) },
				(ProxyTag::ChromeAlarms, "clearAll") => Self::AlarmClearAll,
				(ProxyTag::ChromeTabs, "create") => Self::TabCreate { properties: args.at(0) },
				(ProxyTag::ChromeTabs, "get") => Self::TabGet { tab_id: args.at(0) },
				(ProxyTag::ChromeTabs, "update") => Self::TabUpdate { tab_id: args.at(0), properties: args.at(1) },
				(ProxyTag::ChromeTabs, "remove") => Self::TabRemove { tab_ids: args.at(0) },
				(ProxyTag::ChromeTabs, "query") => Self::TabQuery { query: args.at(0) },
				(ProxyTag::ChromeTabs, "sendMessage") => Self::TabSendMessage { tab_id: args.at(0), message: args.at(1), options: args.at(2) },
				(ProxyTag::ChromeNotifications, "create") => Self::NotificationCreate { notification_id: args.at(0), options: args.at(1) },
				(ProxyTag::ChromeWindows, "create") => Self::WindowCreate { create_data: args.at(0) },
				(ProxyTag::ChromeWindows, "update") => Self::WindowUpdate { window_id: args.at(0), update_info: args.at(1) },
				_ => return None,
			},
		};
		Some(call)
	}

	/// Whether the caller waits for `{result: ...}`.
	pub fn replies(&self) -> bool {
		matches!(
			self,
			Self::GetBadgeText { .. }
				| Self::AlarmGet { .. }
				| Self::TabCreate { .. }
				| Self::TabGet { .. }
				| Self::TabUpdate { .. }
				| Self::TabQuery { .. }
				| Self::TabSendMessage { .. }
				| Self::NotificationCreate { .. }
				| Self::WindowCreate { .. }
		)
	}
}

struct Args<'a>(&'a [Value]);

impl Args<'_> {
	fn at(&self, index: usize) -> Value {
		self.0.get(index).cloned().unwrap_or(Value::Null)
	}
}
