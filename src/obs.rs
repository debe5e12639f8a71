//! Optional observability helpers for provider queries and SSO operations.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit spans named `social_gateway.query` (fields `provider`
//!   and `endpoint`) and `social_gateway.sso` (field `op`).
//! - Enable `metrics` to increment the `social_gateway_query_total` and
//!   `social_gateway_sso_total` counters for every attempt/success/failure.
//!
//! Without the features every hook is a no-op.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Entry to a gateway operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl CallOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::Failure => "failure",
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
