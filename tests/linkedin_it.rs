// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use social_gateway::{
	_preludet::*,
	error::DecodeError,
	provider::{LinkedIn, TokenExchangeRequest, linkedin},
};

fn client(server: &MockServer) -> LinkedIn<social_gateway::http::ReqwestHttpClient> {
	LinkedIn::with_http_client("access-token", test_reqwest_http_client())
		.expect("LinkedIn client should build.")
		.with_base_url(test_url(&server.base_url()))
}

#[tokio::test]
async fn successful_payloads_unwrap_the_values_key() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/companies/1337/updates")
				.query_param("count", "10")
				.query_param("oauth2_access_token", "access-token")
				.query_param("format", "json");
			then.status(200)
				.header("content-type", "application/json")
				.json_body(json!({"_total": 1, "values": [{"updateKey": "UPDATE-1"}]}));
		})
		.await;
	let updates = client(&server)
		.last_updates_from_company("1337", 10)
		.await
		.expect("Company updates should unwrap.");

	assert_eq!(updates, json!([{"updateKey": "UPDATE-1"}]));

	mock.assert_async().await;
}

#[tokio::test]
async fn error_codes_surface_the_message_field() {
	let server = MockServer::start_async().await;
	let payload = json!({
		"errorCode": 0,
		"message": "Invalid access token.",
		"requestId": "ABC123",
		"status": 401
	});

	server
		.mock_async(|when, then| {
			when.method(GET).path("/companies/1337/updates");
			then.status(401).header("content-type", "application/json").json_body(payload.clone());
		})
		.await;

	let err = client(&server)
		.last_updates_from_company("1337", 10)
		.await
		.expect_err("Error payloads must not read as success.");
	let Error::Api(api) = err else { panic!("Expected an API error, got {err:?}.") };

	assert_eq!(api.message, "Invalid access token.");
	assert!(api.payload.is_none());
}

#[tokio::test]
async fn debug_mode_keeps_the_raw_error_payload() {
	let server = MockServer::start_async().await;
	let payload = json!({"errorCode": 0, "message": "Invalid access token.", "status": 401});

	server
		.mock_async(|when, then| {
			when.method(GET).path("/companies/1337/updates");
			then.status(401).header("content-type", "application/json").json_body(payload.clone());
		})
		.await;

	let err = client(&server)
		.with_debug(true)
		.last_updates_from_company("1337", 10)
		.await
		.expect_err("Error payloads must not read as success.");
	let Error::Api(api) = err else { panic!("Expected an API error, got {err:?}.") };

	assert_eq!(api.payload, Some(payload));
}

#[tokio::test]
async fn successes_without_values_are_missing_field_errors() {
	let server = MockServer::start_async().await;

	server
		.mock_async(|when, then| {
			when.method(GET).path("/companies/1337/updates");
			then.status(200)
				.header("content-type", "application/json")
				.json_body(json!({"_total": 0}));
		})
		.await;

	let err = client(&server)
		.last_updates_from_company("1337", 10)
		.await
		.expect_err("Payloads without `values` must not unwrap silently.");

	assert!(matches!(err, Error::Decode(DecodeError::MissingField { path: "/values", .. })));
}

#[tokio::test]
async fn token_exchange_returns_the_payload_verbatim() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/uas/oauth2/accessToken")
				.query_param("grant_type", "authorization_code")
				.query_param("code", "auth-code-1")
				.query_param("redirect_uri", "https://example.com/back")
				.query_param("client_id", "app-1")
				.query_param("client_secret", "app-secret");
			then.status(200)
				.header("content-type", "application/json")
				.json_body(json!({"access_token": "AQXdSP", "expires_in": 5184000}));
		})
		.await;
	let request =
		TokenExchangeRequest::new("auth-code-1", "https://example.com/back", "app-1", "app-secret");
	let payload = linkedin::exchange_auth_code_at(
		test_url(&server.url("/uas/oauth2/accessToken")),
		&test_reqwest_http_client(),
		&request,
	)
	.await
	.expect("Token exchange should decode.");

	assert_eq!(payload, json!({"access_token": "AQXdSP", "expires_in": 5184000}));

	mock.assert_async().await;
}

#[tokio::test]
async fn token_exchange_passes_error_payloads_through_unfiltered() {
	let server = MockServer::start_async().await;
	let error_payload = json!({
		"error": "invalid_request",
		"error_description": "missing required parameters"
	});

	server
		.mock_async(|when, then| {
			when.method(POST).path("/uas/oauth2/accessToken");
			then.status(400)
				.header("content-type", "application/json")
				.json_body(error_payload.clone());
		})
		.await;

	let request = TokenExchangeRequest::new("bad-code", "https://example.com/back", "app-1", "s");
	let payload = linkedin::exchange_auth_code_at(
		test_url(&server.url("/uas/oauth2/accessToken")),
		&test_reqwest_http_client(),
		&request,
	)
	.await
	.expect("Error payloads are returned verbatim, not filtered.");

	assert_eq!(payload, error_payload);
}
