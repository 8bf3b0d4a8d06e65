use crate::{config::RelayConfig, host::ExtensionHost, offscreen::OffscreenDocument};
use std::rc::Rc;

/// The service worker's relay: one per worker lifetime, cheaply cloned into
/// every listener.
pub struct Relay<H> {
	pub(crate) host: Rc<H>,
	pub(crate) config: Rc<RelayConfig>,
	pub(crate) offscreen: Rc<OffscreenDocument<H>>,
}

impl<H> Clone for Relay<H> {
	fn clone(&self) -> Self {
		Self { host: Rc::clone(&self.host), config: Rc::clone(&self.config), offscreen: Rc::clone(&self.offscreen) }
	}
}

impl<H: ExtensionHost> Relay<H> {
	pub fn new(host: H, config: RelayConfig) -> Self {
		let host = Rc::new(host);
		let offscreen = Rc::new(OffscreenDocument::new(Rc::clone(&host), &config));
		Self { host, config: Rc::new(config), offscreen }
	}
}
