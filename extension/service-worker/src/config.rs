use bon::Builder;
use webext_api::OffscreenReason;

/// Offscreen document path baked in at build time; see `build.rs`.
pub const OFFSCREEN_DOCUMENT_PATH: &str = env!("OFFSCREEN_DOCUMENT_PATH");

/// Deployment the worker was built for (`ENV`, default `Local`).
pub const ENV: &str = env!("ENV");

#[derive(Debug, Clone, Builder)]
pub struct RelayConfig {
	/// Relative path of the offscreen document inside the package.
	#[builder(into, default = OFFSCREEN_DOCUMENT_PATH.to_owned())]
	pub offscreen_path: String,
	#[builder(default = vec![OffscreenReason::DomScraping, OffscreenReason::Blobs, OffscreenReason::IframeScripting, OffscreenReason::AudioPlayback])]
	pub offscreen_reasons: Vec<OffscreenReason>,
	#[builder(into, default = "Running legacy background logic including DOM manipulation, LocalStorage and Audio".to_owned())]
	pub justification: String,
	/// Opened once, on first install.
	#[builder(into, default = "start.html".to_owned())]
	pub onboarding_page: String,
	#[builder(into, default = "popup.html".to_owned())]
	pub popup_page: String,
	#[builder(default = 800)]
	pub popup_width: u32,
	#[builder(default = 620)]
	pub popup_height: u32,
	#[builder(into, default = "https://home.jd.com".to_owned())]
	pub login_notice_url: String,
}

impl Default for RelayConfig {
	fn default() -> Self {
		Self::builder().build()
	}
}

pub fn log_level() -> log::Level {
	match ENV {
		"Local" => log::Level::Debug,
		_ => log::Level::Info,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_describe_the_packaged_extension() {
		let config = RelayConfig::default();
		assert_eq!(config.offscreen_path, OFFSCREEN_DOCUMENT_PATH);
		assert_eq!(config.offscreen_reasons.len(), 4);
		assert_eq!((config.popup_width, config.popup_height), (800, 620));
		assert_eq!(config.onboarding_page, "start.html");
		assert_eq!(config.login_notice_url, "https://home.jd.com");
	}

	#[test]
	fn builder_overrides_single_fields() {
		let config = RelayConfig::builder().offscreen_path("legacy/offscreen.html").popup_width(640).build();
		assert_eq!(config.offscreen_path, "legacy/offscreen.html");
		assert_eq!(config.popup_width, 640);
		assert_eq!(config.popup_height, 620);
		assert_eq!(config.popup_page, "popup.html");
	}
}
