//! Queries the latest public activities of a Google+ user against a mock API,
//! showing the normalized success/error contract over a real reqwest transport.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use serde_json::json;
use url::Url;
// self
use social_gateway::provider::GooglePlus;

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;

	server
		.mock_async(|when, then| {
			when.method(GET).path("/people/+GoogleDevelopers/activities/public");
			then.status(200).header("content-type", "application/json").json_body(json!({
				"kind": "plus#activityFeed",
				"items": [{"id": "demo-activity", "title": "Hello from the demo feed"}]
			}));
		})
		.await;

	let client = GooglePlus::new("demo-server-key")?
		.with_debug(true)
		.with_base_url(Url::parse(&server.base_url())?);
	let activities = client.last_activities_from_user("+GoogleDevelopers", 10).await?;

	println!("{activities:#}");

	Ok(())
}
