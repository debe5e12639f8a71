//! Gateway-level error types shared across providers, transport, and SSO.
//!
//! One explicit error-return discipline covers every failure class: remote error
//! payloads, caller-side validation, local configuration problems, body decoding,
//! transport, and SSO state. Callers that want the legacy "silently empty" reading
//! of remote errors call `.ok()` on the result.

// self
use crate::{_prelude::*, provider::ProviderKind};

/// Gateway-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical gateway error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Remote API returned an error payload.
	#[error(transparent)]
	Api(#[from] ApiError),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Response body could not be decoded into the expected shape.
	#[error(transparent)]
	Decode(#[from] DecodeError),
	/// Caller-side validation failure; raised before any network call.
	#[error(transparent)]
	InvalidArgument(#[from] InvalidArgumentError),
	/// SSO gateway failure.
	#[error("{0}")]
	Sso(
		#[from]
		#[source]
		crate::sso::SsoError,
	),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
}

/// Error payload returned by a provider API, normalized across providers.
///
/// Every provider surfaces remote failures through this one shape instead of the
/// per-provider "message string or raw payload" conventions: the message comes
/// from the provider's error indicator, and the raw payload is attached only when
/// the client runs in debug mode.
#[derive(Debug, ThisError)]
#[error("{provider} returned an error: {message}.")]
pub struct ApiError {
	/// Provider that produced the payload.
	pub provider: ProviderKind,
	/// Human-readable message extracted from the payload.
	pub message: String,
	/// HTTP status code, when available.
	pub status: Option<u16>,
	/// Raw payload; present only when the client runs in debug mode.
	pub payload: Option<Value>,
}

/// Configuration and validation failures raised locally.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Endpoint path does not form a valid URL against the client's base.
	#[error("Endpoint `{endpoint}` does not form a valid URL.")]
	InvalidEndpoint {
		/// Endpoint path supplied by the caller.
		endpoint: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// A provider URL failed to parse.
	#[error("Provider URL `{url}` is invalid.")]
	InvalidProviderUrl {
		/// URL literal that failed to parse.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// OAuth1 signing key could not be loaded into the HMAC.
	#[error("OAuth1 signing key is invalid.")]
	InvalidSigningKey,
}

/// Decoding failures; classified explicitly so they never masquerade as success.
#[derive(Debug, ThisError)]
pub enum DecodeError {
	/// Response body was not valid JSON.
	#[error("{provider} returned a response body that is not valid JSON.")]
	Json {
		/// Provider that produced the body.
		provider: ProviderKind,
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code, when available.
		status: Option<u16>,
		/// Truncated preview of the offending body.
		body_preview: Option<String>,
	},
	/// Payload decoded but is missing a field the operation relies on.
	#[error("{provider} response is missing the `{path}` field.")]
	MissingField {
		/// Provider that produced the payload.
		provider: ProviderKind,
		/// JSON pointer to the missing field.
		path: &'static str,
	},
}

/// Caller-side validation failures; always hard errors, never degraded.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum InvalidArgumentError {
	/// Requested result count exceeds the provider's hard limit.
	#[error("At most {max} results are supported ({requested} requested).")]
	CountOutOfRange {
		/// Count the caller asked for.
		requested: u32,
		/// Provider-imposed upper bound, enforced client-side.
		max: u32,
	},
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the provider.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the provider.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
