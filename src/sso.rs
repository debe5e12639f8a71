//! CAS single-sign-on gateway.
//!
//! The gateway is an explicit value, not process-global state: build a
//! [`CasConfig`], call [`CasGateway::configure`] with a [`CasProtocol`]
//! implementation, then drive login/logout/status through the gateway. Every
//! operation invoked before configuration fails with [`SsoError::NotInitialized`].

pub mod config;
pub mod protocol;

pub use config::*;
pub use protocol::*;

// self
use crate::{
	_prelude::*,
	obs::{self, CallOutcome, SsoSpan},
};

/// SSO gateway failures.
#[derive(Debug, ThisError)]
pub enum SsoError {
	/// Gateway used before [`CasGateway::configure`].
	#[error("CAS gateway is not configured; call `configure` first.")]
	NotInitialized,
	/// Configuration validation failed.
	#[error(transparent)]
	Config(#[from] CasConfigError),
	/// Underlying protocol library failure.
	#[error(transparent)]
	Protocol(#[from] CasProtocolError),
}

/// Gateway around an external CAS protocol implementation.
///
/// Interior state lives behind a read/write lock: reconfiguration replaces it
/// wholesale (last write wins under the lock), and the lock is never held across
/// a protocol call.
#[derive(Default)]
pub struct CasGateway {
	state: RwLock<Option<Configured>>,
}

struct Configured {
	urls: CasUrls,
	version: CasVersion,
	protocol: Arc<dyn CasProtocol>,
}

impl CasGateway {
	/// Creates an unconfigured gateway.
	pub fn new() -> Self {
		Self::default()
	}

	/// Computes the server URLs, initializes the protocol, and stores the state.
	///
	/// Calling `configure` again replaces the previous configuration. The
	/// computed URLs are returned for the caller's benefit.
	pub fn configure(&self, config: CasConfig, protocol: Arc<dyn CasProtocol>) -> Result<CasUrls> {
		let urls = config.urls().map_err(SsoError::from)?;

		protocol.set_debug(config.debugging);
		protocol.initialize(&config, &urls).map_err(SsoError::from)?;

		*self.state.write() =
			Some(Configured { urls: urls.clone(), version: config.version, protocol });

		Ok(urls)
	}

	/// Reports whether [`CasGateway::configure`] has completed.
	pub fn is_configured(&self) -> bool {
		self.state.read().is_some()
	}

	/// Initiates a login flow against the CAS server.
	pub fn login(&self) -> Result<()> {
		self.guarded("login", |protocol| protocol.force_authentication())
	}

	/// Ends the CAS session across services.
	pub fn logout(&self) -> Result<()> {
		self.guarded("logout", |protocol| protocol.logout())
	}

	/// Reports whether the user currently holds an authenticated session.
	pub fn is_login(&self) -> Result<bool> {
		self.guarded("is_login", |protocol| protocol.is_authenticated())
	}

	/// Re-validates the session with the server.
	///
	/// Resolves to `false` without a server round-trip when no session exists.
	pub fn check_authentication(&self) -> Result<bool> {
		self.guarded("check_authentication", |protocol| {
			if !protocol.is_authenticated()? {
				return Ok(false);
			}

			protocol.check_authentication()
		})
	}

	/// Initiates a login flow only when no session exists yet.
	pub fn auto_login(&self) -> Result<()> {
		self.guarded("auto_login", |protocol| {
			if protocol.is_authenticated()? {
				return Ok(());
			}

			protocol.force_authentication()
		})
	}

	/// Returns the CAS user id of the authenticated user.
	pub fn user(&self) -> Result<String> {
		self.guarded("user", |protocol| protocol.user())
	}

	/// Returns the negotiated CAS protocol version.
	pub fn cas_version(&self) -> Result<CasVersion> {
		self.state
			.read()
			.as_ref()
			.map(|configured| configured.version)
			.ok_or_else(|| SsoError::NotInitialized.into())
	}

	/// Returns the server URLs computed at configuration time.
	pub fn urls(&self) -> Result<CasUrls> {
		self.state
			.read()
			.as_ref()
			.map(|configured| configured.urls.clone())
			.ok_or_else(|| SsoError::NotInitialized.into())
	}

	fn guarded<T>(
		&self,
		op: &'static str,
		run: impl FnOnce(&dyn CasProtocol) -> Result<T, CasProtocolError>,
	) -> Result<T> {
		let span = SsoSpan::new(op);
		let _entered = span.entered();

		obs::record_sso_outcome(op, CallOutcome::Attempt);

		let result = self
			.protocol()
			.and_then(|protocol| run(protocol.as_ref()).map_err(|e| SsoError::from(e).into()));

		match &result {
			Ok(_) => obs::record_sso_outcome(op, CallOutcome::Success),
			Err(_) => obs::record_sso_outcome(op, CallOutcome::Failure),
		}

		result
	}

	fn protocol(&self) -> Result<Arc<dyn CasProtocol>> {
		self.state
			.read()
			.as_ref()
			.map(|configured| configured.protocol.clone())
			.ok_or_else(|| SsoError::NotInitialized.into())
	}
}
impl Debug for CasGateway {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("CasGateway").field("configured", &self.is_configured()).finish()
	}
}
