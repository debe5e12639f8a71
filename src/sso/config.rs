//! CAS server configuration and URL computation.

// self
use crate::_prelude::*;

/// CAS protocol versions the gateway can negotiate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CasVersion {
	/// CAS protocol 1.0.
	#[serde(rename = "1.0")]
	V1,
	/// CAS protocol 2.0.
	#[default]
	#[serde(rename = "2.0")]
	V2,
	/// CAS protocol 3.0.
	#[serde(rename = "3.0")]
	V3,
}
impl CasVersion {
	/// Protocol version string.
	pub const fn as_str(self) -> &'static str {
		match self {
			CasVersion::V1 => "1.0",
			CasVersion::V2 => "2.0",
			CasVersion::V3 => "3.0",
		}
	}
}
impl Display for CasVersion {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Validation failures raised while computing CAS URLs.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum CasConfigError {
	/// Host must be a bare host name, without scheme, path, or query.
	#[error("CAS host `{host}` must be a bare host name.")]
	InvalidHost {
		/// Host value that failed validation.
		host: String,
	},
	/// Service id must be non-empty.
	#[error("CAS service id cannot be empty.")]
	EmptyServiceId,
	/// Computed base URL failed to parse.
	#[error("Computed CAS base URL `{url}` is invalid.")]
	InvalidBaseUrl {
		/// URL string that failed to parse.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
}

/// CAS server configuration consumed by [`CasGateway::configure`](crate::sso::CasGateway::configure).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CasConfig {
	/// CAS server host.
	pub host: String,
	/// CAS server port.
	pub port: u16,
	/// Service id announced to the server; urlencoded into the login and logout
	/// URLs.
	pub service_id: String,
	/// Context path under which the server is mounted.
	#[serde(default = "default_context")]
	pub context: String,
	/// Uses `https` when true (the default); disabling switches to `http` and
	/// tells the protocol implementation to skip server validation.
	#[serde(default = "default_ssl")]
	pub ssl: bool,
	/// Forwards debug logging to the protocol implementation.
	#[serde(default)]
	pub debugging: bool,
	/// Protocol version to negotiate.
	#[serde(default)]
	pub version: CasVersion,
}
impl CasConfig {
	/// Creates a configuration with the default context (`cas`), SSL enabled, and
	/// debugging disabled.
	pub fn new(host: impl Into<String>, port: u16, service_id: impl Into<String>) -> Self {
		Self {
			host: host.into(),
			port,
			service_id: service_id.into(),
			context: default_context(),
			ssl: default_ssl(),
			debugging: false,
			version: CasVersion::default(),
		}
	}

	/// Overrides the context path.
	pub fn with_context(mut self, context: impl Into<String>) -> Self {
		self.context = context.into();

		self
	}

	/// Enables or disables SSL.
	pub fn with_ssl(mut self, ssl: bool) -> Self {
		self.ssl = ssl;

		self
	}

	/// Enables or disables protocol debug logging.
	pub fn with_debugging(mut self, debugging: bool) -> Self {
		self.debugging = debugging;

		self
	}

	/// Overrides the protocol version.
	pub fn with_version(mut self, version: CasVersion) -> Self {
		self.version = version;

		self
	}

	/// Scheme implied by the SSL flag.
	pub fn scheme(&self) -> &'static str {
		if self.ssl { "https" } else { "http" }
	}

	/// Computes the base server URL `{scheme}://{host}:{port}/{context}/`.
	pub fn base_url(&self) -> Result<Url, CasConfigError> {
		self.validate()?;

		let context = self.context.trim_matches('/');
		let raw = format!("{}://{}:{}/{}/", self.scheme(), self.host, self.port, context);

		Url::parse(&raw).map_err(|source| CasConfigError::InvalidBaseUrl { url: raw, source })
	}

	/// Computes the full URL set handed to the protocol implementation.
	pub fn urls(&self) -> Result<CasUrls, CasConfigError> {
		let base = self.base_url()?;
		let mut login = join(&base, "login")?;

		login.query_pairs_mut().append_pair("service", &self.service_id);

		let service_validate = join(&base, "serviceValidate")?;
		let proxy_validate = join(&base, "proxyValidate")?;
		let mut logout = join(&base, "logout")?;

		logout.query_pairs_mut().append_pair("destination", &self.service_id);

		Ok(CasUrls { base, login, service_validate, proxy_validate, logout })
	}

	fn validate(&self) -> Result<(), CasConfigError> {
		if self.host.is_empty() || self.host.contains(['/', ':', '?', '#']) {
			return Err(CasConfigError::InvalidHost { host: self.host.clone() });
		}
		if self.service_id.is_empty() {
			return Err(CasConfigError::EmptyServiceId);
		}

		Ok(())
	}
}

/// Server URLs computed from a [`CasConfig`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CasUrls {
	/// Base server URL.
	pub base: Url,
	/// Login endpoint carrying the urlencoded service id.
	pub login: Url,
	/// Service ticket validation endpoint.
	pub service_validate: Url,
	/// Proxy ticket validation endpoint.
	pub proxy_validate: Url,
	/// Logout endpoint carrying the urlencoded destination.
	pub logout: Url,
}

fn join(base: &Url, segment: &str) -> Result<Url, CasConfigError> {
	base.join(segment)
		.map_err(|source| CasConfigError::InvalidBaseUrl { url: format!("{base}{segment}"), source })
}

fn default_context() -> String {
	"cas".to_owned()
}

const fn default_ssl() -> bool {
	true
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn plain_http_urls_match_the_configured_port_and_context() {
		let config = CasConfig::new("x", 443, "svc").with_ssl(false);
		let urls = config.urls().expect("URLs should compute.");

		assert_eq!(urls.base.as_str(), "http://x:443/cas/");
		assert_eq!(urls.login.as_str(), "http://x:443/cas/login?service=svc");
		assert_eq!(urls.service_validate.as_str(), "http://x:443/cas/serviceValidate");
		assert_eq!(urls.proxy_validate.as_str(), "http://x:443/cas/proxyValidate");
		assert_eq!(urls.logout.as_str(), "http://x:443/cas/logout?destination=svc");
	}

	#[test]
	fn service_ids_are_urlencoded_into_login_and_logout() {
		let config =
			CasConfig::new("sso.example.com", 8443, "https://app.example.com/?next=1").with_ssl(false);
		let urls = config.urls().expect("URLs should compute.");

		assert_eq!(
			urls.login.as_str(),
			"http://sso.example.com:8443/cas/login?service=https%3A%2F%2Fapp.example.com%2F%3Fnext%3D1",
		);
	}

	#[test]
	fn ssl_stays_the_default_scheme() {
		let config = CasConfig::new("sso.example.com", 8443, "svc");

		assert_eq!(config.scheme(), "https");
		assert_eq!(
			config.base_url().expect("Base URL should compute.").as_str(),
			"https://sso.example.com:8443/cas/",
		);
	}

	#[test]
	fn context_slashes_are_trimmed() {
		let config = CasConfig::new("x", 8080, "svc").with_ssl(false).with_context("/private-cas/");

		assert_eq!(
			config.base_url().expect("Base URL should compute.").as_str(),
			"http://x:8080/private-cas/",
		);
	}

	#[test]
	fn hosts_embedding_paths_or_schemes_are_rejected() {
		for host in ["", "x/path", "https://x", "x?y", "x#z"] {
			let config = CasConfig::new(host, 443, "svc");

			assert!(
				matches!(config.urls(), Err(CasConfigError::InvalidHost { .. })),
				"Host `{host}` should be rejected.",
			);
		}
	}

	#[test]
	fn empty_service_ids_are_rejected() {
		let config = CasConfig::new("x", 443, "");

		assert_eq!(config.urls(), Err(CasConfigError::EmptyServiceId));
	}

	#[test]
	fn versions_render_protocol_strings() {
		assert_eq!(CasVersion::default(), CasVersion::V2);
		assert_eq!(CasVersion::V2.as_str(), "2.0");
		assert_eq!(CasVersion::V3.to_string(), "3.0");
	}
}
