use crate::{config::RelayConfig, host::ExtensionHost};
use common::RelayError;
use futures::future::{FutureExt, LocalBoxFuture, Shared};
use log::{debug, error, info};
use std::{cell::RefCell, rc::Rc};
use webext_api::CreateDocumentParameters;

type Creation = Shared<LocalBoxFuture<'static, Result<(), RelayError>>>;

/// Owner of the extension's single offscreen document.
///
/// The document is created on first demand and lives until the browser evicts
/// it; nothing here closes it. At most one setup runs at a time: callers that
/// arrive while one is pending await the same shared future and observe the
/// same outcome.
pub struct OffscreenDocument<H> {
	host: Rc<H>,
	parameters: CreateDocumentParameters,
	creating: Rc<RefCell<Option<Creation>>>,
}

impl<H: ExtensionHost> OffscreenDocument<H> {
	pub fn new(host: Rc<H>, config: &RelayConfig) -> Self {
		let parameters = CreateDocumentParameters {
			url: config.offscreen_path.clone(),
			reasons: config.offscreen_reasons.clone(),
			justification: config.justification.clone(),
		};
		Self { host, parameters, creating: Rc::default() }
	}

	/// Absolute URL the document is addressed by.
	pub fn url(&self) -> String {
		self.host.resource_url(&self.parameters.url)
	}

	/// Resolves once the offscreen document exists.
	///
	/// The setup empties the pending slot itself when it finishes, whatever
	/// the outcome, so a failed creation is retried by the next caller. A setup
	/// whose awaiters were all dropped stays in the slot and is resumed by
	/// the next caller instead of being started again.
	pub async fn ensure(&self) -> Result<(), RelayError> {
		let pending = self.creating.borrow().clone();
		let creation = match pending {
			Some(creation) => {
				debug!("[service-worker] Joining pending offscreen document setup");
				creation
			},
			None => {
				let setup = Self::setup(Rc::clone(&self.host), self.url(), self.parameters.clone(), Rc::clone(&self.creating));
				let creation = setup.boxed_local().shared();
				self.creating.replace(Some(creation.clone()));
				creation
			},
		};
		creation.await
	}

	async fn setup(host: Rc<H>, url: String, parameters: CreateDocumentParameters, slot: Rc<RefCell<Option<Creation>>>) -> Result<(), RelayError> {
		let outcome = Self::create_if_missing(&host, &url, &parameters).await;
		slot.borrow_mut().take();
		outcome
	}

	async fn create_if_missing(host: &H, url: &str, parameters: &CreateDocumentParameters) -> Result<(), RelayError> {
		if host.offscreen_document_exists(url).await? {
			return Ok(());
		}

		info!("[service-worker] Creating offscreen document {url}");
		host.create_offscreen_document(parameters).await.inspect_err(|e| error!("[service-worker] {e}"))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::FakeHost;
	use futures::future::join_all;

	fn document(host: &Rc<FakeHost>) -> OffscreenDocument<FakeHost> {
		OffscreenDocument::new(Rc::clone(host), &RelayConfig::default())
	}

	#[tokio::test]
	async fn creates_the_document_once_on_first_demand() {
		let host = Rc::new(FakeHost::default());
		let offscreen = document(&host);

		offscreen.ensure().await.unwrap();

		let created = host.creations.borrow();
		assert_eq!(created.len(), 1);
		assert_eq!(created[0].url, crate::config::OFFSCREEN_DOCUMENT_PATH);
		assert_eq!(created[0].justification, "Running legacy background logic including DOM manipulation, LocalStorage and Audio");
		assert!(host.offscreen_document_exists(&offscreen.url()).await.unwrap());
	}

	#[tokio::test]
	async fn existing_document_is_left_alone() {
		let host = Rc::new(FakeHost::default());
		host.open_offscreen_document();
		let offscreen = document(&host);

		offscreen.ensure().await.unwrap();
		offscreen.ensure().await.unwrap();

		assert!(host.creations.borrow().is_empty());
		assert_eq!(host.existence_queries.get(), 2);
	}

	#[tokio::test]
	async fn overlapping_demands_collapse_into_one_creation() {
		let host = Rc::new(FakeHost::default());
		let offscreen = document(&host);

		let outcomes = join_all((0..5).map(|_| offscreen.ensure())).await;

		assert!(outcomes.iter().all(Result::is_ok));
		assert_eq!(host.creations.borrow().len(), 1);
		assert!(offscreen.creating.borrow().is_none());
	}

	#[tokio::test]
	async fn failed_creation_reaches_every_waiter_and_is_retried() {
		let host = Rc::new(FakeHost::default());
		host.fail_creation_with("Only a single offscreen document may be created.");
		let offscreen = document(&host);

		let outcomes = join_all((0..3).map(|_| offscreen.ensure())).await;

		let expected = RelayError::OffscreenCreation("Only a single offscreen document may be created.".into());
		assert!(outcomes.iter().all(|outcome| outcome.as_ref() == Err(&expected)));
		assert_eq!(host.creations.borrow().len(), 1);
		assert!(offscreen.creating.borrow().is_none());

		host.succeed_creation();
		offscreen.ensure().await.unwrap();
		assert_eq!(host.creations.borrow().len(), 2);
	}

	#[tokio::test]
	async fn abandoned_creation_is_resumed_by_the_next_caller() {
		let host = Rc::new(FakeHost::default());
		let offscreen = document(&host);

		{
			let abandoned = offscreen.ensure();
			futures::pin_mut!(abandoned);
			assert!(futures::poll!(abandoned.as_mut()).is_pending());
		}
		assert!(offscreen.creating.borrow().is_some());

		offscreen.ensure().await.unwrap();
		offscreen.ensure().await.unwrap();

		assert_eq!(host.creations.borrow().len(), 1);
		assert!(offscreen.creating.borrow().is_none());
		assert!(host.offscreen_document_exists(&offscreen.url()).await.unwrap());
	}

	#[tokio::test]
	async fn dropping_the_initiator_keeps_joiners_on_the_same_creation() {
		let host = Rc::new(FakeHost::default());
		let offscreen = document(&host);

		let mut initiator = Box::pin(offscreen.ensure());
		let joiner = offscreen.ensure();
		futures::pin_mut!(joiner);
		assert!(futures::poll!(initiator.as_mut()).is_pending());
		assert!(futures::poll!(joiner.as_mut()).is_pending());
		drop(initiator);

		let (late, joined) = futures::join!(offscreen.ensure(), joiner);

		assert!(late.is_ok());
		assert!(joined.is_ok());
		assert_eq!(host.creations.borrow().len(), 1);
	}
}
