// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use social_gateway::{_preludet::*, error::DecodeError, provider::YouTube};

fn client(server: &MockServer) -> YouTube<social_gateway::http::ReqwestHttpClient> {
	YouTube::with_http_client("server-key", test_reqwest_http_client())
		.expect("YouTube client should build.")
		.with_base_url(test_url(&server.base_url()))
}

fn channel_payload(uploads: &str) -> serde_json::Value {
	json!({
		"items": [{
			"contentDetails": {"relatedPlaylists": {"uploads": uploads}}
		}]
	})
}

#[tokio::test]
async fn uploads_resolve_through_the_channel_lookup() {
	let server = MockServer::start_async().await;
	let channel_mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/channels")
				.query_param("part", "contentDetails")
				.query_param("forUsername", "creator")
				.query_param("key", "server-key");
			then.status(200)
				.header("content-type", "application/json")
				.json_body(channel_payload("UUabc123"));
		})
		.await;
	let videos = json!({"items": [{"snippet": {"title": "latest upload"}}]});
	let playlist_mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/playlistItems")
				.query_param("part", "snippet")
				.query_param("playlistId", "UUabc123")
				.query_param("count", "25")
				.query_param("key", "server-key");
			then.status(200).header("content-type", "application/json").json_body(videos.clone());
		})
		.await;
	let result = client(&server)
		.last_videos_from_user("creator", 25)
		.await
		.expect("Two-step lookup should succeed.");

	assert_eq!(result, videos);

	channel_mock.assert_async().await;
	playlist_mock.assert_async().await;
}

#[tokio::test]
async fn failed_channel_lookups_stop_before_the_playlist_call() {
	let server = MockServer::start_async().await;

	server
		.mock_async(|when, then| {
			when.method(GET).path("/channels");
			then.status(400)
				.header("content-type", "application/json")
				.json_body(json!({"error": {"code": 400, "message": "keyInvalid"}}));
		})
		.await;

	let playlist_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/playlistItems");
			then.status(200).header("content-type", "application/json").json_body(json!({}));
		})
		.await;
	let err = client(&server)
		.last_videos_from_user("creator", 25)
		.await
		.expect_err("Failed channel lookups must propagate.");

	assert!(matches!(err, Error::Api(_)));

	playlist_mock.assert_calls_async(0).await;
}

#[tokio::test]
async fn channels_without_uploads_are_missing_field_errors() {
	let server = MockServer::start_async().await;

	server
		.mock_async(|when, then| {
			when.method(GET).path("/channels");
			then.status(200)
				.header("content-type", "application/json")
				.json_body(json!({"items": []}));
		})
		.await;

	let playlist_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/playlistItems");
			then.status(200).header("content-type", "application/json").json_body(json!({}));
		})
		.await;
	let err = client(&server)
		.last_videos_from_user("creator", 25)
		.await
		.expect_err("Channels without an uploads playlist must not read as success.");

	assert!(matches!(err, Error::Decode(DecodeError::MissingField { .. })));

	playlist_mock.assert_calls_async(0).await;
}
