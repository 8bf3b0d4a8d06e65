use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures on the relay's own paths.
///
/// `Clone` because one offscreen creation failure is observed by every caller
/// awaiting the shared creation.
#[derive(Serialize, Deserialize, Debug, Error, Clone, PartialEq, Eq)]
pub enum RelayError {
	#[error("Failed to create the offscreen document: {0}")]
	OffscreenCreation(String),
	#[error("Failed to query extension contexts: {0}")]
	ContextQuery(String),
	/// Carries the platform's text verbatim; it is what the original caller sees.
	#[error("{0}")]
	Delivery(String),
	#[error("The browser API returned an error: {0}")]
	Browser(String),
	#[error("Failed to encode a relay message: {0}")]
	Serialization(String),
}

impl From<serde_json::Error> for RelayError {
	fn from(err: serde_json::Error) -> Self {
		Self::Serialization(err.to_string())
	}
}
