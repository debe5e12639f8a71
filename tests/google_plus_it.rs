// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use social_gateway::{_preludet::*, error::DecodeError, provider::GooglePlus};

fn client(server: &MockServer) -> GooglePlus<social_gateway::http::ReqwestHttpClient> {
	GooglePlus::with_http_client("server-key", test_reqwest_http_client())
		.expect("Google+ client should build.")
		.with_base_url(test_url(&server.base_url()))
}

#[tokio::test]
async fn clean_payloads_pass_through_unchanged() {
	let server = MockServer::start_async().await;
	let payload = json!({"kind": "plus#activityFeed", "items": [{"id": "act-1"}]});
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/people/alice/activities/public")
				.query_param("count", "25")
				.query_param("key", "server-key");
			then.status(200).header("content-type", "application/json").json_body(payload.clone());
		})
		.await;
	let activities = client(&server)
		.last_activities_from_user("alice", 25)
		.await
		.expect("Clean payloads should pass through.");

	assert_eq!(activities, payload);

	mock.assert_async().await;
}

#[tokio::test]
async fn default_count_convenience_requests_one_hundred() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/people/bob/activities/public").query_param("count", "100");
			then.status(200)
				.header("content-type", "application/json")
				.json_body(json!({"items": []}));
		})
		.await;

	client(&server).last_activities("bob").await.expect("Default-count lookup should succeed.");

	mock.assert_async().await;
}

#[tokio::test]
async fn error_payloads_surface_without_raw_payload_by_default() {
	let server = MockServer::start_async().await;

	server
		.mock_async(|when, then| {
			when.method(GET).path("/people/alice/activities/public");
			then.status(403)
				.header("content-type", "application/json")
				.json_body(json!({"error": {"code": 403, "message": "Daily Limit Exceeded"}}));
		})
		.await;

	let err = client(&server)
		.last_activities_from_user("alice", 10)
		.await
		.expect_err("Error payloads must not read as success.");
	let Error::Api(api) = err else { panic!("Expected an API error, got {err:?}.") };

	assert_eq!(api.message, "Daily Limit Exceeded");
	assert_eq!(api.status, Some(403));
	assert!(api.payload.is_none(), "Raw payloads belong to debug mode only.");
}

#[tokio::test]
async fn debug_mode_attaches_the_raw_payload() {
	let server = MockServer::start_async().await;
	let payload = json!({"error": {"code": 400, "message": "keyInvalid"}});

	server
		.mock_async(|when, then| {
			when.method(GET).path("/people/alice/activities/public");
			then.status(400).header("content-type", "application/json").json_body(payload.clone());
		})
		.await;

	let err = client(&server)
		.with_debug(true)
		.last_activities_from_user("alice", 10)
		.await
		.expect_err("Error payloads must not read as success.");
	let Error::Api(api) = err else { panic!("Expected an API error, got {err:?}.") };

	assert_eq!(api.message, "keyInvalid");
	assert_eq!(api.payload, Some(payload));
}

#[tokio::test]
async fn non_json_bodies_classify_as_decode_errors() {
	let server = MockServer::start_async().await;

	server
		.mock_async(|when, then| {
			when.method(GET).path("/people/alice/activities/public");
			then.status(502).header("content-type", "text/html").body("<html>Bad Gateway</html>");
		})
		.await;

	let err = client(&server)
		.last_activities_from_user("alice", 10)
		.await
		.expect_err("Non-JSON bodies must not read as success.");

	assert!(matches!(err, Error::Decode(DecodeError::Json { status: Some(502), .. })));
}
