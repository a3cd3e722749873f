//! Creates an instant Zoom meeting with Server-to-Server OAuth credentials read from
//! `ZOOM_ACCOUNT_ID`, `ZOOM_CLIENT_ID`, and `ZOOM_CLIENT_SECRET` (a `.env` file works too).
//!
//! ```sh
//! cargo run --example create_meeting -- "Weekly sync"
//! ```

// crates.io
use color_eyre::Result;
use tracing_subscriber::EnvFilter;
// self
use meeting_broker::{
	auth::Credentials, flows::MeetingClient, meeting::MeetingRequest, provider::ProviderDescriptor,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;
	dotenvy::dotenv().ok();
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
		)
		.init();

	let topic = std::env::args().nth(1).unwrap_or_else(|| "Test Meeting".into());
	let client = MeetingClient::new(ProviderDescriptor::zoom()?, Credentials::from_env()?);
	let meeting = client.schedule_meeting(MeetingRequest::instant(topic)).await?;

	println!("Created meeting {}.", meeting.id);

	if let Some(join_url) = meeting.join_url.as_deref() {
		println!("Join URL: {join_url}.");
	}

	Ok(())
}
