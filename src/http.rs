//! Transport primitives shared by every provider client.
//!
//! [`SocialHttpClient`] is the crate's only dependency on an HTTP stack: it takes a
//! fully prepared [`HttpRequest`] (method, URL, headers) and resolves to the raw
//! response status and body text. The gateway adds no retries, timeouts, or
//! redirect policy of its own; whatever the transport does is what callers get.
//! The default reqwest-backed implementation lives behind the `reqwest` feature.

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// self
use crate::{_prelude::*, error::TransportError};

/// HTTP methods issued by the gateway.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
	/// GET request.
	Get,
	/// POST request.
	Post,
}
impl HttpMethod {
	/// Uppercase wire name, also used in OAuth1 signature base strings.
	pub const fn as_str(self) -> &'static str {
		match self {
			HttpMethod::Get => "GET",
			HttpMethod::Post => "POST",
		}
	}
}
impl Display for HttpMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// A fully prepared outbound request.
#[derive(Clone, Debug)]
pub struct HttpRequest {
	/// Method to issue.
	pub method: HttpMethod,
	/// Absolute URL including the query string.
	pub url: Url,
	/// Header name/value pairs attached to the request.
	pub headers: Vec<(String, String)>,
}
impl HttpRequest {
	/// Creates a GET request for the provided URL.
	pub fn get(url: Url) -> Self {
		Self { method: HttpMethod::Get, url, headers: Vec::new() }
	}

	/// Creates a POST request for the provided URL.
	pub fn post(url: Url) -> Self {
		Self { method: HttpMethod::Post, url, headers: Vec::new() }
	}

	/// Attaches a header pair.
	pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.push((name.into(), value.into()));

		self
	}
}

/// Raw response surfaced by a transport.
#[derive(Clone, Debug)]
pub struct HttpResponse {
	/// HTTP status code.
	pub status: u16,
	/// Response body decoded as text.
	pub body: String,
}

/// Boxed future returned by [`SocialHttpClient::call`].
pub type TransportFuture<'a> =
	Pin<Box<dyn Future<Output = Result<HttpResponse, TransportError>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of executing provider calls.
///
/// Implementations must be `Send + Sync + 'static` so clients can share them
/// behind `Arc` without additional wrappers, and the returned futures must be
/// `Send` so queries can hop executors freely.
pub trait SocialHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Executes one HTTP call and resolves to the raw response.
	fn call(&self, request: HttpRequest) -> TransportFuture<'_>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
/// Configure any custom [`ReqwestClient`] (proxies, TLS, timeouts) and pass it in
/// via [`ReqwestHttpClient::with_client`]; the gateway uses it as-is.
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl SocialHttpClient for ReqwestHttpClient {
	fn call(&self, request: HttpRequest) -> TransportFuture<'_> {
		let client = self.0.clone();

		Box::pin(async move {
			let mut builder = match request.method {
				HttpMethod::Get => client.get(request.url),
				HttpMethod::Post => client.post(request.url),
			};

			for (name, value) in &request.headers {
				builder = builder.header(name.as_str(), value.as_str());
			}

			let response = builder.send().await.map_err(TransportError::from)?;
			let status = response.status().as_u16();
			let body = response.text().await.map_err(TransportError::from)?;

			Ok(HttpResponse { status, body })
		})
	}
}
