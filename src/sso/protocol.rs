//! Trait seam for the external CAS protocol implementation.

// self
use crate::{
	_prelude::*,
	sso::{CasConfig, CasUrls},
};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure raised by a [`CasProtocol`] implementation.
#[derive(Debug, ThisError)]
#[error("CAS protocol operation failed.")]
pub struct CasProtocolError {
	/// Implementation-specific failure.
	#[source]
	source: BoxError,
}
impl CasProtocolError {
	/// Wraps an implementation-specific error.
	pub fn new(src: impl 'static + Send + Sync + StdError) -> Self {
		Self { source: Box::new(src) }
	}

	/// Wraps a plain message.
	pub fn message(msg: impl Into<String>) -> Self {
		let message: String = msg.into();

		Self { source: message.into() }
	}
}

/// Operations the external CAS protocol library must provide.
///
/// The gateway computes server URLs and guards initialization; ticket handling,
/// user-agent redirects, and session storage stay inside the implementation.
/// `force_authentication` may therefore hand control to a redirect and only
/// return once the round-trip completes; cancellation is the implementation's
/// business. Methods are synchronous; implementations own any async bridging.
pub trait CasProtocol: Send + Sync {
	/// Receives the validated configuration and computed URLs before any other
	/// call.
	fn initialize(&self, config: &CasConfig, urls: &CasUrls) -> Result<(), CasProtocolError>;

	/// Toggles implementation debug logging.
	///
	/// The default implementation does nothing.
	fn set_debug(&self, _enabled: bool) {}

	/// Forces an authentication round-trip against the server.
	fn force_authentication(&self) -> Result<(), CasProtocolError>;

	/// Ends the CAS session across services.
	fn logout(&self) -> Result<(), CasProtocolError>;

	/// Reports whether an authenticated session exists.
	fn is_authenticated(&self) -> Result<bool, CasProtocolError>;

	/// Re-validates the current session against the server.
	fn check_authentication(&self) -> Result<bool, CasProtocolError>;

	/// CAS user id of the authenticated user.
	fn user(&self) -> Result<String, CasProtocolError>;
}
