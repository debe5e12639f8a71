//! Shared request/response pipeline behind every provider client.
//!
//! [`RestFacade`] owns the transport handle, the provider base URL, and the debug
//! flag. Provider clients feed it an endpoint plus ordered parameters; the facade
//! builds the URL, lets the provider's [`ProviderPolicy`] inject credentials,
//! dispatches exactly one HTTP call, decodes the body as JSON, and applies the
//! provider's error policy. Transport and decoding failures are classified
//! explicitly instead of masquerading as empty results.

// self
use crate::{
	_prelude::*,
	error::{ApiError, ConfigError, DecodeError},
	http::{HttpMethod, HttpRequest, HttpResponse, SocialHttpClient},
	obs::{self, CallOutcome, QuerySpan},
	provider::{ProviderKind, ProviderPolicy},
};

const BODY_PREVIEW_LIMIT: usize = 256;

/// Executes provider queries over a shared transport.
///
/// Immutable once the owning client finishes construction; `execute` borrows
/// `&self`, so concurrent queries through one facade are safe.
pub struct RestFacade<C>
where
	C: ?Sized + SocialHttpClient,
{
	http_client: Arc<C>,
	base: Url,
	debug: bool,
}
impl<C> RestFacade<C>
where
	C: ?Sized + SocialHttpClient,
{
	/// Creates a facade for the provided base URL and transport.
	pub fn new(base: Url, http_client: impl Into<Arc<C>>) -> Self {
		Self { http_client: http_client.into(), base, debug: false }
	}

	/// Replaces the base URL. A trailing `/` keeps the last path segment when
	/// endpoints are joined, so bases should end with one.
	pub fn set_base(&mut self, base: Url) {
		self.base = base;
	}

	/// Toggles debug mode (attaches raw payloads to API errors).
	pub fn set_debug(&mut self, debug: bool) {
		self.debug = debug;
	}

	/// Base URL queries resolve against.
	pub fn base(&self) -> &Url {
		&self.base
	}

	/// Whether raw payloads are attached to API errors.
	pub fn debug(&self) -> bool {
		self.debug
	}

	/// Builds the absolute URL for an endpoint plus ordered query parameters.
	///
	/// The endpoint is trimmed of leading and trailing `/` before joining.
	pub fn endpoint_url(&self, endpoint: &str, params: &BTreeMap<String, String>) -> Result<Url> {
		let trimmed = endpoint.trim_matches('/');
		let mut url = self.base.join(trimmed).map_err(|source| ConfigError::InvalidEndpoint {
			endpoint: endpoint.to_owned(),
			source,
		})?;

		if !params.is_empty() {
			let mut pairs = url.query_pairs_mut();

			for (name, value) in params {
				pairs.append_pair(name, value);
			}
		}

		Ok(url)
	}

	/// Runs one query through the full pipeline.
	pub async fn execute(
		&self,
		policy: &dyn ProviderPolicy,
		method: HttpMethod,
		endpoint: &str,
		params: &BTreeMap<String, String>,
	) -> Result<Value> {
		let provider = policy.provider();
		let span = QuerySpan::new(provider, endpoint);

		obs::record_query_outcome(provider, CallOutcome::Attempt);

		let result = span
			.instrument(async move {
				let url = self.endpoint_url(endpoint, params)?;
				let mut request = HttpRequest { method, url, headers: Vec::new() };

				policy.authorize(&mut request)?;

				let response = self.http_client.call(request).await?;
				let payload = decode_json(provider, &response)?;

				if let Some(message) = policy.detect_error(&payload) {
					return Err(ApiError {
						provider,
						message,
						status: Some(response.status),
						payload: self.debug.then_some(payload),
					}
					.into());
				}

				policy.unwrap_payload(payload)
			})
			.await;

		match &result {
			Ok(_) => obs::record_query_outcome(provider, CallOutcome::Success),
			Err(_) => obs::record_query_outcome(provider, CallOutcome::Failure),
		}

		result
	}
}
impl<C> Clone for RestFacade<C>
where
	C: ?Sized + SocialHttpClient,
{
	fn clone(&self) -> Self {
		Self { http_client: self.http_client.clone(), base: self.base.clone(), debug: self.debug }
	}
}
impl<C> Debug for RestFacade<C>
where
	C: ?Sized + SocialHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("RestFacade").field("base", &self.base).field("debug", &self.debug).finish()
	}
}

/// Decodes a response body as JSON, classifying failures explicitly.
pub(crate) fn decode_json(provider: ProviderKind, response: &HttpResponse) -> Result<Value> {
	let mut deserializer = serde_json::Deserializer::from_str(&response.body);

	serde_path_to_error::deserialize(&mut deserializer).map_err(|source| {
		DecodeError::Json {
			provider,
			source,
			status: Some(response.status),
			body_preview: Some(truncate_preview(&response.body)),
		}
		.into()
	})
}

/// Parses a well-known provider URL literal.
pub(crate) fn parse_provider_url(value: &str) -> Result<Url> {
	Url::parse(value)
		.map_err(|source| ConfigError::InvalidProviderUrl { url: value.to_owned(), source }.into())
}

fn truncate_preview(body: &str) -> String {
	if body.chars().count() <= BODY_PREVIEW_LIMIT {
		return body.to_owned();
	}

	let mut buf = String::new();

	for (idx, ch) in body.chars().enumerate() {
		if idx >= BODY_PREVIEW_LIMIT {
			buf.push('…');

			break;
		}
		buf.push(ch);
	}

	buf
}
