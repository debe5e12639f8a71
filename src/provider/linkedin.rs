//! LinkedIn client authenticated by an OAuth2 access token, plus the two static
//! OAuth2 helpers (consent URL construction and code-for-token exchange) that live
//! outside the instance contract.

// self
use crate::{
	_prelude::*,
	error::DecodeError,
	http::{HttpMethod, HttpRequest, SocialHttpClient},
	provider::{ProviderKind, ProviderPolicy, policy},
	rest::{self, RestFacade},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

/// LinkedIn REST API base URL.
pub const LINKEDIN_API_URL: &str = "https://api.linkedin.com/v1/";
/// OAuth2 consent endpoint users are redirected to.
pub const LINKEDIN_AUTHORIZATION_URL: &str = "https://www.linkedin.com/uas/oauth2/authorization";
/// OAuth2 token exchange endpoint.
pub const LINKEDIN_ACCESS_TOKEN_URL: &str = "https://www.linkedin.com/uas/oauth2/accessToken";

/// Default authorization scope requested by [`authorization_url`].
pub const DEFAULT_SCOPE: &str = "r_basicprofile rw_company_admin";

/// Client for the LinkedIn REST API.
///
/// Successful payloads are unwrapped to their `values` key; a success payload
/// without one is a [`DecodeError::MissingField`].
pub struct LinkedIn<C>
where
	C: ?Sized + SocialHttpClient,
{
	facade: RestFacade<C>,
	access_token: String,
}
#[cfg(feature = "reqwest")]
impl LinkedIn<ReqwestHttpClient> {
	/// Creates a client backed by the crate's default reqwest transport.
	pub fn new(access_token: impl Into<String>) -> Result<Self> {
		Self::with_http_client(access_token, ReqwestHttpClient::default())
	}
}
impl<C> LinkedIn<C>
where
	C: ?Sized + SocialHttpClient,
{
	/// Creates a client that reuses the caller-provided transport.
	pub fn with_http_client(
		access_token: impl Into<String>,
		http_client: impl Into<Arc<C>>,
	) -> Result<Self> {
		let base = rest::parse_provider_url(LINKEDIN_API_URL)?;

		Ok(Self { facade: RestFacade::new(base, http_client), access_token: access_token.into() })
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

	/// Returns the latest posts published on a company page.
	pub async fn last_updates_from_company(&self, company_id: &str, count: u32) -> Result<Value> {
		let params = BTreeMap::from([("count".to_owned(), count.to_string())]);

		self.query(&format!("companies/{company_id}/updates"), params).await
	}
}
impl<C> ProviderPolicy for LinkedIn<C>
where
	C: ?Sized + SocialHttpClient,
{
	fn provider(&self) -> ProviderKind {
		ProviderKind::Linkedin
	}

	fn authorize(&self, request: &mut HttpRequest) -> Result<()> {
		policy::append_query_pair(request, "oauth2_access_token", &self.access_token);
		policy::append_query_pair(request, "format", "json");

		Ok(())
	}

	fn detect_error(&self, payload: &Value) -> Option<String> {
		payload.get("errorCode")?;

		Some(
			payload
				.get("message")
				.and_then(Value::as_str)
				.map(str::to_owned)
				.unwrap_or_else(|| "LinkedIn reported an unlabeled error".to_owned()),
		)
	}

	fn unwrap_payload(&self, mut payload: Value) -> Result<Value> {
		payload.get_mut("values").map(Value::take).ok_or_else(|| {
			DecodeError::MissingField { provider: ProviderKind::Linkedin, path: "/values" }.into()
		})
	}
}
impl<C> Clone for LinkedIn<C>
where
	C: ?Sized + SocialHttpClient,
{
	fn clone(&self) -> Self {
		Self { facade: self.facade.clone(), access_token: self.access_token.clone() }
	}
}
impl<C> Debug for LinkedIn<C>
where
	C: ?Sized + SocialHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("LinkedIn")
			.field("base", self.facade.base())
			.field("debug", &self.facade.debug())
			.field("access_token_set", &!self.access_token.is_empty())
			.finish()
	}
}

/// Parameters for [`exchange_auth_code`].
#[derive(Clone)]
pub struct TokenExchangeRequest {
	/// Authorization code produced by the consent flow.
	pub code: String,
	/// Redirect URI used during authorization.
	pub redirect_uri: String,
	/// Application identifier.
	pub client_id: String,
	/// Application secret.
	pub client_secret: String,
}
impl TokenExchangeRequest {
	/// Creates an exchange request.
	pub fn new(
		code: impl Into<String>,
		redirect_uri: impl Into<String>,
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
	) -> Self {
		Self {
			code: code.into(),
			redirect_uri: redirect_uri.into(),
			client_id: client_id.into(),
			client_secret: client_secret.into(),
		}
	}
}
impl Debug for TokenExchangeRequest {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenExchangeRequest")
			.field("redirect_uri", &self.redirect_uri)
			.field("client_id", &self.client_id)
			.field("client_secret_set", &!self.client_secret.is_empty())
			.finish()
	}
}

/// Builds the OAuth2 consent URL callers redirect users to.
///
/// Pure URL construction; the calling layer owns the actual redirect and the
/// later code-for-token exchange. The token is valid for sixty days once
/// exchanged.
pub fn authorization_url(
	client_id: &str,
	redirect_uri: &str,
	state: &str,
	scope: &str,
) -> Result<Url> {
	let mut url = rest::parse_provider_url(LINKEDIN_AUTHORIZATION_URL)?;

	url.query_pairs_mut()
		.append_pair("response_type", "code")
		.append_pair("client_id", client_id)
		.append_pair("redirect_uri", redirect_uri)
		.append_pair("state", state)
		.append_pair("scope", scope);

	Ok(url)
}

/// Exchanges an authorization code for an access token payload.
///
/// The decoded payload is returned verbatim, success or error, with no
/// error-policy filtering; transport and JSON failures still classify normally.
pub async fn exchange_auth_code<C>(
	http_client: &C,
	request: &TokenExchangeRequest,
) -> Result<Value>
where
	C: ?Sized + SocialHttpClient,
{
	exchange_auth_code_at(rest::parse_provider_url(LINKEDIN_ACCESS_TOKEN_URL)?, http_client, request)
		.await
}

/// Same exchange against a caller-supplied token endpoint (tests, proxies).
pub async fn exchange_auth_code_at<C>(
	endpoint: Url,
	http_client: &C,
	request: &TokenExchangeRequest,
) -> Result<Value>
where
	C: ?Sized + SocialHttpClient,
{
	let mut url = endpoint;

	url.query_pairs_mut()
		.append_pair("grant_type", "authorization_code")
		.append_pair("code", &request.code)
		.append_pair("redirect_uri", &request.redirect_uri)
		.append_pair("client_id", &request.client_id)
		.append_pair("client_secret", &request.client_secret);

	let response = http_client.call(HttpRequest::post(url)).await?;

	rest::decode_json(ProviderKind::Linkedin, &response)
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn consent_urls_carry_every_oauth2_parameter() {
		let url = authorization_url("app-1", "https://example.com/back", "nonce-7", DEFAULT_SCOPE)
			.expect("Consent URL should build.");

		assert_eq!(url.host_str(), Some("www.linkedin.com"));
		assert_eq!(url.path(), "/uas/oauth2/authorization");

		let pairs: Vec<(String, String)> =
			url.query_pairs().map(|(name, value)| (name.into_owned(), value.into_owned())).collect();

		assert_eq!(
			pairs,
			[
				("response_type".to_owned(), "code".to_owned()),
				("client_id".to_owned(), "app-1".to_owned()),
				("redirect_uri".to_owned(), "https://example.com/back".to_owned()),
				("state".to_owned(), "nonce-7".to_owned()),
				("scope".to_owned(), DEFAULT_SCOPE.to_owned()),
			],
		);
	}
}
