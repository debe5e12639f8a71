//! Runs a signed hashtag search against a mock Twitter API and prints both the
//! success payload and the normalized error a rate limit produces.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use serde_json::json;
use url::Url;
// self
use social_gateway::{ext::Oauth1Credentials, provider::Twitter};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;

	server
		.mock_async(|when, then| {
			when.method(GET).path("/search/tweets.json").query_param("q", "rustlang");
			then.status(200).header("content-type", "application/json").json_body(json!({
				"statuses": [{"id_str": "1", "text": "demo tweet about #rustlang"}]
			}));
		})
		.await;
	server
		.mock_async(|when, then| {
			when.method(GET).path("/followers/ids.json");
			then.status(429).header("content-type", "application/json").json_body(json!({
				"errors": [{"code": 88, "message": "Rate limit exceeded"}]
			}));
		})
		.await;

	let credentials =
		Oauth1Credentials::new("demo-ck", "demo-cs", "demo-token", "demo-token-secret");
	let client =
		Twitter::new(credentials)?.with_base_url(Url::parse(&server.base_url())?);
	let tweets = client.last_tweets_containing_hashtag("#rustlang", 10).await?;

	println!("search result: {tweets:#}");

	match client.followers_user_ids().await {
		Ok(_) => println!("unexpected success"),
		Err(err) => println!("follower lookup failed as staged: {err}"),
	}

	Ok(())
}
