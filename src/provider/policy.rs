//! Policy hooks that adapt the shared REST pipeline to one provider's conventions.

// self
use crate::{_prelude::*, http::HttpRequest, provider::ProviderKind};

/// Hooks each provider implements to plug into [`RestFacade`](crate::rest::RestFacade).
///
/// `authorize` injects credentials into the outgoing request (query parameters or
/// signed headers), `detect_error` recognizes the provider's error indicator in a
/// decoded payload, and `unwrap_payload` post-processes successful payloads.
/// Implementations stay HTTP-client agnostic; the hooks only see crate-owned types.
pub trait ProviderPolicy: Send + Sync {
	/// Provider this policy speaks for.
	fn provider(&self) -> ProviderKind;

	/// Injects credentials into the outgoing request.
	fn authorize(&self, request: &mut HttpRequest) -> Result<()>;

	/// Extracts the provider's error indicator from a decoded payload, returning a
	/// human-readable message when present.
	fn detect_error(&self, payload: &Value) -> Option<String>;

	/// Post-processes a successful payload.
	///
	/// The default implementation returns the payload unchanged, which is enough
	/// for most providers.
	fn unwrap_payload(&self, payload: Value) -> Result<Value> {
		Ok(payload)
	}
}

/// Appends a credential query parameter to a request URL.
pub(crate) fn append_query_pair(request: &mut HttpRequest, name: &str, value: &str) {
	request.url.query_pairs_mut().append_pair(name, value);
}

/// Extracts the message from a Google-style `error` object.
pub(crate) fn google_error_message(payload: &Value) -> Option<String> {
	let error = payload.get("error")?;
	let message = error
		.get("message")
		.and_then(Value::as_str)
		.map(str::to_owned)
		.unwrap_or_else(|| error.to_string());

	Some(message)
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;

	#[test]
	fn google_errors_prefer_the_message_field() {
		let payload = json!({"error": {"code": 403, "message": "Daily Limit Exceeded"}});

		assert_eq!(google_error_message(&payload), Some("Daily Limit Exceeded".into()));
	}

	#[test]
	fn google_errors_fall_back_to_the_raw_error_value() {
		let payload = json!({"error": "keyInvalid"});

		assert_eq!(google_error_message(&payload), Some("\"keyInvalid\"".into()));
	}

	#[test]
	fn clean_payloads_are_not_errors() {
		assert_eq!(google_error_message(&json!({"items": []})), None);
	}
}
