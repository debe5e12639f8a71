//! Google+ client keyed by a server API key.

// self
use crate::{
	_prelude::*,
	http::{HttpMethod, HttpRequest, SocialHttpClient},
	provider::{DEFAULT_COUNT, ProviderKind, ProviderPolicy, policy},
	rest::{self, RestFacade},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

/// Google+ REST API base URL.
pub const GOOGLE_PLUS_API_URL: &str = "https://www.googleapis.com/plus/v1/";

/// Client for the Google+ REST API.
///
/// Holds the server key and debug flag set at construction; concurrent queries on
/// one instance are safe.
pub struct GooglePlus<C>
where
	C: ?Sized + SocialHttpClient,
{
	facade: RestFacade<C>,
	server_key: String,
}
#[cfg(feature = "reqwest")]
impl GooglePlus<ReqwestHttpClient> {
	/// Creates a client backed by the crate's default reqwest transport.
	pub fn new(server_key: impl Into<String>) -> Result<Self> {
		Self::with_http_client(server_key, ReqwestHttpClient::default())
	}
}
impl<C> GooglePlus<C>
where
	C: ?Sized + SocialHttpClient,
{
	/// Creates a client that reuses the caller-provided transport.
	pub fn with_http_client(
		server_key: impl Into<String>,
		http_client: impl Into<Arc<C>>,
	) -> Result<Self> {
		let base = rest::parse_provider_url(GOOGLE_PLUS_API_URL)?;

		Ok(Self { facade: RestFacade::new(base, http_client), server_key: server_key.into() })
	}

	/// Enables or disables debug mode (attaches raw payloads to API errors).
	pub fn with_debug(mut self, debug: bool) -> Self {
		self.facade.set_debug(debug);

		self
	}

	/// Overrides the API base URL (tests, proxies). Keep the trailing `/`.
	pub fn with_base_url(mut self, base: Url) -> Self {
		self.facade.set_base(base);

		self
	}

	/// Issues a direct query against the API.
	pub async fn query(&self, endpoint: &str, params: BTreeMap<String, String>) -> Result<Value> {
		self.facade.execute(self, HttpMethod::Get, endpoint, &params).await
	}

	/// Returns the latest public activities of a user.
	pub async fn last_activities_from_user(&self, user_id: &str, count: u32) -> Result<Value> {
		let params = BTreeMap::from([("count".to_owned(), count.to_string())]);

		self.query(&format!("people/{user_id}/activities/public"), params).await
	}

	/// Same as [`GooglePlus::last_activities_from_user`] with the default count.
	pub async fn last_activities(&self, user_id: &str) -> Result<Value> {
		self.last_activities_from_user(user_id, DEFAULT_COUNT).await
	}
}
impl<C> ProviderPolicy for GooglePlus<C>
where
	C: ?Sized + SocialHttpClient,
{
	fn provider(&self) -> ProviderKind {
		ProviderKind::GooglePlus
	}

	fn authorize(&self, request: &mut HttpRequest) -> Result<()> {
		policy::append_query_pair(request, "key", &self.server_key);

		Ok(())
	}

	fn detect_error(&self, payload: &Value) -> Option<String> {
		policy::google_error_message(payload)
	}
}
impl<C> Clone for GooglePlus<C>
where
	C: ?Sized + SocialHttpClient,
{
	fn clone(&self) -> Self {
		Self { facade: self.facade.clone(), server_key: self.server_key.clone() }
	}
}
impl<C> Debug for GooglePlus<C>
where
	C: ?Sized + SocialHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("GooglePlus")
			.field("base", self.facade.base())
			.field("debug", &self.facade.debug())
			.field("server_key_set", &!self.server_key.is_empty())
			.finish()
	}
}
