//! Rust's no-fuss social API gateway—query Google+, YouTube, LinkedIn, and Twitter
//! through one uniform request contract, with CAS single sign-on on the side.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod error;
pub mod ext;
pub mod http;
pub mod obs;
pub mod provider;
pub mod rest;
pub mod sso;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::http::ReqwestHttpClient;

	/// Parses a URL that tests assume to be valid (e.g. a mock server address).
	pub fn test_url(value: &str) -> Url {
		Url::parse(value).expect("Failed to parse test URL.")
	}

	/// Builds the reqwest transport used across integration tests.
	pub fn test_reqwest_http_client() -> ReqwestHttpClient {
		ReqwestHttpClient::default()
	}
}

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	pub use parking_lot::RwLock;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use serde_json::Value;
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _, social_gateway as _, tokio as _};
