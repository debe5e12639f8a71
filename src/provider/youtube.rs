//! YouTube Data API client keyed by a server API key.

// self
use crate::{
	_prelude::*,
	error::DecodeError,
	http::{HttpMethod, HttpRequest, SocialHttpClient},
	provider::{ProviderKind, ProviderPolicy, policy},
	rest::{self, RestFacade},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

/// YouTube Data API base URL.
pub const YOUTUBE_API_URL: &str = "https://www.googleapis.com/youtube/v3/";

const UPLOADS_POINTER: &str = "/items/0/contentDetails/relatedPlaylists/uploads";

/// Client for the YouTube Data API.
pub struct YouTube<C>
where
	C: ?Sized + SocialHttpClient,
{
	facade: RestFacade<C>,
	server_key: String,
}
#[cfg(feature = "reqwest")]
impl YouTube<ReqwestHttpClient> {
	/// Creates a client backed by the crate's default reqwest transport.
	pub fn new(server_key: impl Into<String>) -> Result<Self> {
		Self::with_http_client(server_key, ReqwestHttpClient::default())
	}
}
impl<C> YouTube<C>
where
	C: ?Sized + SocialHttpClient,
{
	/// Creates a client that reuses the caller-provided transport.
	pub fn with_http_client(
		server_key: impl Into<String>,
		http_client: impl Into<Arc<C>>,
	) -> Result<Self> {
		let base = rest::parse_provider_url(YOUTUBE_API_URL)?;

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

	/// Returns the latest uploads of the channel registered under a user name.
	///
	/// Two-step lookup: the channel's `contentDetails` names its uploads playlist,
	/// then the playlist items are fetched. A failed channel lookup propagates
	/// without issuing the second call; a channel without an uploads playlist is a
	/// [`DecodeError::MissingField`].
	pub async fn last_videos_from_user(&self, user_name: &str, count: u32) -> Result<Value> {
		let params = BTreeMap::from([
			("part".to_owned(), "contentDetails".to_owned()),
			("forUsername".to_owned(), user_name.to_owned()),
		]);
		let channel = self.query("channels", params).await?;
		let playlist_id = channel
			.pointer(UPLOADS_POINTER)
			.and_then(Value::as_str)
			.ok_or(DecodeError::MissingField {
				provider: ProviderKind::Youtube,
				path: UPLOADS_POINTER,
			})?
			.to_owned();
		let params = BTreeMap::from([
			("part".to_owned(), "snippet".to_owned()),
			("playlistId".to_owned(), playlist_id),
			("count".to_owned(), count.to_string()),
		]);

		self.query("playlistItems", params).await
	}
}
impl<C> ProviderPolicy for YouTube<C>
where
	C: ?Sized + SocialHttpClient,
{
	fn provider(&self) -> ProviderKind {
		ProviderKind::Youtube
	}

	fn authorize(&self, request: &mut HttpRequest) -> Result<()> {
		policy::append_query_pair(request, "key", &self.server_key);

		Ok(())
	}

	fn detect_error(&self, payload: &Value) -> Option<String> {
		policy::google_error_message(payload)
	}
}
impl<C> Clone for YouTube<C>
where
	C: ?Sized + SocialHttpClient,
{
	fn clone(&self) -> Self {
		Self { facade: self.facade.clone(), server_key: self.server_key.clone() }
	}
}
impl<C> Debug for YouTube<C>
where
	C: ?Sized + SocialHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("YouTube")
			.field("base", self.facade.base())
			.field("debug", &self.facade.debug())
			.field("server_key_set", &!self.server_key.is_empty())
			.finish()
	}
}
