//! Twitter v1.1 client authenticated with OAuth1 request signing.

// std
use std::borrow::Cow;
// self
use crate::{
	_prelude::*,
	error::InvalidArgumentError,
	ext::oauth1::{Oauth1Credentials, Oauth1Signer},
	http::{HttpMethod, HttpRequest, SocialHttpClient},
	provider::{DEFAULT_COUNT, ProviderKind, ProviderPolicy},
	rest::{self, RestFacade},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

/// Twitter v1.1 REST API base URL.
pub const TWITTER_API_URL: &str = "https://api.twitter.com/1.1/";

/// Hard upper bound the API imposes on `search/tweets`, enforced client-side.
pub const MAX_SEARCH_COUNT: u32 = 100;
/// Hard upper bound the API imposes on `statuses/user_timeline`, enforced client-side.
pub const MAX_TIMELINE_COUNT: u32 = 200;

/// Client for the Twitter v1.1 REST API.
///
/// Every request carries an OAuth1 `Authorization` header signed over the full
/// query parameter set. Search results reach back at most twenty-one days; that
/// window is the provider's, not ours.
pub struct Twitter<C>
where
	C: ?Sized + SocialHttpClient,
{
	facade: RestFacade<C>,
	signer: Oauth1Signer,
}
#[cfg(feature = "reqwest")]
impl Twitter<ReqwestHttpClient> {
	/// Creates a client backed by the crate's default reqwest transport.
	pub fn new(credentials: Oauth1Credentials) -> Result<Self> {
		Self::with_http_client(credentials, ReqwestHttpClient::default())
	}
}
impl<C> Twitter<C>
where
	C: ?Sized + SocialHttpClient,
{
	/// Creates a client that reuses the caller-provided transport.
	pub fn with_http_client(
		credentials: Oauth1Credentials,
		http_client: impl Into<Arc<C>>,
	) -> Result<Self> {
		let base = rest::parse_provider_url(TWITTER_API_URL)?;

		Ok(Self { facade: RestFacade::new(base, http_client), signer: Oauth1Signer::new(credentials) })
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
	///
	/// A `.json` suffix is appended to the endpoint when missing, matching the
	/// v1.1 resource naming.
	pub async fn query(&self, endpoint: &str, params: BTreeMap<String, String>) -> Result<Value> {
		let endpoint = if endpoint.ends_with(".json") {
			Cow::Borrowed(endpoint)
		} else {
			Cow::Owned(format!("{}.json", endpoint.trim_matches('/')))
		};

		self.facade.execute(self, HttpMethod::Get, &endpoint, &params).await
	}

	/// Searches recent tweets matching a query.
	pub async fn last_tweets_from_query(&self, query: &str, count: u32) -> Result<Value> {
		ensure_count(count, MAX_SEARCH_COUNT)?;

		let params = BTreeMap::from([
			("q".to_owned(), query.to_owned()),
			("count".to_owned(), count.to_string()),
		]);

		self.query("search/tweets", params).await
	}

	/// Searches recent tweets carrying a hashtag; `#` markers are stripped before
	/// the search so `#foo` and `foo` issue the same query.
	pub async fn last_tweets_containing_hashtag(&self, hashtag: &str, count: u32) -> Result<Value> {
		self.last_tweets_from_query(hashtag.trim_matches('#'), count).await
	}

	/// Returns the latest tweets of a user timeline.
	pub async fn last_tweets_from_user(&self, request: TimelineRequest) -> Result<Value> {
		ensure_count(request.count, MAX_TIMELINE_COUNT)?;

		let params = BTreeMap::from([
			("screen_name".to_owned(), request.screen_name),
			("count".to_owned(), request.count.to_string()),
			("exclude_replies".to_owned(), (!request.with_replies).to_string()),
			("include_rts".to_owned(), request.with_retweets.to_string()),
		]);

		self.query("statuses/user_timeline", params).await
	}

	/// Returns the user ids of the authenticated account's followers.
	pub async fn followers_user_ids(&self) -> Result<Value> {
		self.query("followers/ids", BTreeMap::new()).await
	}
}
impl<C> ProviderPolicy for Twitter<C>
where
	C: ?Sized + SocialHttpClient,
{
	fn provider(&self) -> ProviderKind {
		ProviderKind::Twitter
	}

	fn authorize(&self, request: &mut HttpRequest) -> Result<()> {
		let header = self.signer.authorization_header(request.method, &request.url)?;

		request.headers.push(("Authorization".to_owned(), header));

		Ok(())
	}

	fn detect_error(&self, payload: &Value) -> Option<String> {
		let first = payload.get("errors")?.as_array()?.first()?;

		Some(
			first
				.get("message")
				.and_then(Value::as_str)
				.map(str::to_owned)
				.unwrap_or_else(|| first.to_string()),
		)
	}
}
impl<C> Clone for Twitter<C>
where
	C: ?Sized + SocialHttpClient,
{
	fn clone(&self) -> Self {
		Self { facade: self.facade.clone(), signer: self.signer.clone() }
	}
}
impl<C> Debug for Twitter<C>
where
	C: ?Sized + SocialHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Twitter")
			.field("base", self.facade.base())
			.field("debug", &self.facade.debug())
			.field("signer", &self.signer)
			.finish()
	}
}

/// Parameters for [`Twitter::last_tweets_from_user`].
#[derive(Clone, Debug)]
pub struct TimelineRequest {
	/// Screen name of the timeline owner.
	pub screen_name: String,
	/// Includes replies when true (defaults to false).
	pub with_replies: bool,
	/// Includes retweets when true (defaults to false).
	pub with_retweets: bool,
	/// Maximum result count (defaults to 100, capped at [`MAX_TIMELINE_COUNT`]).
	pub count: u32,
}
impl TimelineRequest {
	/// Creates a request with the default flags and count.
	pub fn new(screen_name: impl Into<String>) -> Self {
		Self {
			screen_name: screen_name.into(),
			with_replies: false,
			with_retweets: false,
			count: DEFAULT_COUNT,
		}
	}

	/// Overrides the replies flag.
	pub fn with_replies(mut self, with_replies: bool) -> Self {
		self.with_replies = with_replies;

		self
	}

	/// Overrides the retweets flag.
	pub fn with_retweets(mut self, with_retweets: bool) -> Self {
		self.with_retweets = with_retweets;

		self
	}

	/// Overrides the result count.
	pub fn with_count(mut self, count: u32) -> Self {
		self.count = count;

		self
	}
}

fn ensure_count(requested: u32, max: u32) -> Result<()> {
	if requested > max {
		return Err(InvalidArgumentError::CountOutOfRange { requested, max }.into());
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn count_bounds_are_inclusive() {
		assert!(ensure_count(MAX_SEARCH_COUNT, MAX_SEARCH_COUNT).is_ok());
		assert!(matches!(
			ensure_count(MAX_SEARCH_COUNT + 1, MAX_SEARCH_COUNT),
			Err(Error::InvalidArgument(InvalidArgumentError::CountOutOfRange {
				requested: 101,
				max: 100,
			})),
		));
	}

	#[test]
	fn timeline_requests_default_to_a_bare_timeline() {
		let request = TimelineRequest::new("alice");

		assert_eq!(request.screen_name, "alice");
		assert!(!request.with_replies);
		assert!(!request.with_retweets);
		assert_eq!(request.count, DEFAULT_COUNT);
	}
}
