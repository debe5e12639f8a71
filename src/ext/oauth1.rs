//! OAuth 1.0a request signing (HMAC-SHA1) for providers that refuse plain API keys.
//!
//! Builds the `Authorization: OAuth ...` header for a method + URL per RFC 5849:
//! percent-encode with the RFC 3986 unreserved set, sort the combined query and
//! oauth parameters into the parameter string, assemble the signature base string,
//! and HMAC-SHA1 it with `enc(consumer_secret)&enc(token_secret)`. The signature
//! travels base64-encoded inside the header.

// crates.io
use base64::{Engine, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use rand::{Rng, distr::Alphanumeric};
use sha1::Sha1;
use time::OffsetDateTime;
// self
use crate::{_prelude::*, error::ConfigError, http::HttpMethod};

/// RFC 3986 unreserved characters stay verbatim; everything else is escaped.
const OAUTH_ENCODE_SET: &AsciiSet =
	&NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');
const NONCE_LEN: usize = 32;

type HmacSha1 = Hmac<Sha1>;

/// OAuth1 credential set (consumer pair + access token pair).
///
/// Immutable once handed to a signer.
#[derive(Clone)]
pub struct Oauth1Credentials {
	/// Consumer key issued by the provider.
	pub consumer_key: String,
	/// Consumer secret issued by the provider.
	pub consumer_secret: String,
	/// Access token of the acting account.
	pub access_token: String,
	/// Access token secret of the acting account.
	pub access_token_secret: String,
}
impl Oauth1Credentials {
	/// Creates a credential set.
	pub fn new(
		consumer_key: impl Into<String>,
		consumer_secret: impl Into<String>,
		access_token: impl Into<String>,
		access_token_secret: impl Into<String>,
	) -> Self {
		Self {
			consumer_key: consumer_key.into(),
			consumer_secret: consumer_secret.into(),
			access_token: access_token.into(),
			access_token_secret: access_token_secret.into(),
		}
	}
}
impl Debug for Oauth1Credentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Oauth1Credentials")
			.field("consumer_key", &self.consumer_key)
			.field("secrets_set", &true)
			.finish()
	}
}

/// Signs outbound requests with HMAC-SHA1.
#[derive(Clone, Debug)]
pub struct Oauth1Signer {
	credentials: Oauth1Credentials,
}
impl Oauth1Signer {
	/// Creates a signer around the provided credentials.
	pub fn new(credentials: Oauth1Credentials) -> Self {
		Self { credentials }
	}

	/// Builds the `Authorization` header for a method + URL with a fresh nonce and
	/// the current timestamp.
	pub fn authorization_header(&self, method: HttpMethod, url: &Url) -> Result<String> {
		let nonce: String =
			rand::rng().sample_iter(Alphanumeric).take(NONCE_LEN).map(char::from).collect();
		let timestamp = OffsetDateTime::now_utc().unix_timestamp();

		self.header_with_material(method, url, &nonce, timestamp)
	}

	/// Deterministic layer beneath [`Oauth1Signer::authorization_header`]; the
	/// nonce and timestamp are caller-supplied.
	pub fn header_with_material(
		&self,
		method: HttpMethod,
		url: &Url,
		nonce: &str,
		timestamp: i64,
	) -> Result<String> {
		let mut oauth_params = BTreeMap::from([
			("oauth_consumer_key".to_owned(), self.credentials.consumer_key.clone()),
			("oauth_nonce".to_owned(), nonce.to_owned()),
			("oauth_signature_method".to_owned(), "HMAC-SHA1".to_owned()),
			("oauth_timestamp".to_owned(), timestamp.to_string()),
			("oauth_token".to_owned(), self.credentials.access_token.clone()),
			("oauth_version".to_owned(), "1.0".to_owned()),
		]);
		let signature = self.signature(method, url, &oauth_params)?;

		oauth_params.insert("oauth_signature".to_owned(), signature);

		let mut header = String::from("OAuth ");

		for (idx, (name, value)) in oauth_params.iter().enumerate() {
			if idx > 0 {
				header.push_str(", ");
			}

			header.push_str(&percent_encode(name));
			header.push_str("=\"");
			header.push_str(&percent_encode(value));
			header.push('"');
		}

		Ok(header)
	}

	fn signature(
		&self,
		method: HttpMethod,
		url: &Url,
		oauth_params: &BTreeMap<String, String>,
	) -> Result<String> {
		let base = signature_base(method, url, oauth_params);
		let key = format!(
			"{}&{}",
			percent_encode(&self.credentials.consumer_secret),
			percent_encode(&self.credentials.access_token_secret),
		);
		let mut mac =
			HmacSha1::new_from_slice(key.as_bytes()).map_err(|_| ConfigError::InvalidSigningKey)?;

		mac.update(base.as_bytes());

		Ok(STANDARD.encode(mac.finalize().into_bytes()))
	}
}

/// Percent-encodes a value with the OAuth (RFC 3986 unreserved) set.
pub(crate) fn percent_encode(value: &str) -> String {
	utf8_percent_encode(value, OAUTH_ENCODE_SET).to_string()
}

/// Assembles the RFC 5849 signature base string over the URL's query parameters
/// plus the oauth parameters, sorted by encoded name then encoded value.
fn signature_base(method: HttpMethod, url: &Url, oauth_params: &BTreeMap<String, String>) -> String {
	let mut params: Vec<(String, String)> = oauth_params
		.iter()
		.map(|(name, value)| (percent_encode(name), percent_encode(value)))
		.collect();

	for (name, value) in url.query_pairs() {
		params.push((percent_encode(&name), percent_encode(&value)));
	}

	params.sort();

	let mut parameter_string = String::new();

	for (idx, (name, value)) in params.iter().enumerate() {
		if idx > 0 {
			parameter_string.push('&');
		}

		parameter_string.push_str(name);
		parameter_string.push('=');
		parameter_string.push_str(value);
	}

	format!(
		"{}&{}&{}",
		method.as_str(),
		percent_encode(&base_url_of(url)),
		percent_encode(&parameter_string),
	)
}

/// Scheme + authority + path, with query and fragment dropped.
fn base_url_of(url: &Url) -> String {
	let mut base = url.clone();

	base.set_query(None);
	base.set_fragment(None);

	base.to_string()
}
