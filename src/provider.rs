//! Provider clients and the policy seam that adapts the shared REST pipeline to
//! each provider's conventions.
//!
//! Every client holds an immutable credential set plus a debug flag and exposes a
//! generic `query` operation with a handful of convenience operations layered on
//! it. Credential injection and error detection live in each client's
//! [`ProviderPolicy`] implementation.

pub mod google_plus;
pub mod linkedin;
pub mod policy;
pub mod twitter;
pub mod youtube;

pub use google_plus::*;
pub use linkedin::*;
pub use policy::*;
pub use twitter::*;
pub use youtube::*;

// self
use crate::_prelude::*;

/// Default result count for convenience operations.
pub const DEFAULT_COUNT: u32 = 100;

/// Provider labels used in errors, spans, and metrics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
	/// Google+ REST API.
	GooglePlus,
	/// YouTube Data API.
	Youtube,
	/// LinkedIn REST API.
	Linkedin,
	/// Twitter REST API.
	Twitter,
}
impl ProviderKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ProviderKind::GooglePlus => "google_plus",
			ProviderKind::Youtube => "youtube",
			ProviderKind::Linkedin => "linkedin",
			ProviderKind::Twitter => "twitter",
		}
	}
}
impl Display for ProviderKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
