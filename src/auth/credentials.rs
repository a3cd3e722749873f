//! Server-to-server credentials injected into the meeting client.

// self
use crate::{_prelude::*, auth::Secret, error::ConfigError};

/// Environment variable holding the provider account identifier.
pub const ACCOUNT_ID_ENV: &str = "ZOOM_ACCOUNT_ID";
/// Environment variable holding the OAuth client identifier.
pub const CLIENT_ID_ENV: &str = "ZOOM_CLIENT_ID";
/// Environment variable holding the OAuth client secret.
pub const CLIENT_SECRET_ENV: &str = "ZOOM_CLIENT_SECRET";

/// Account-level client credentials.
///
/// Construct the value once at startup and hand it to
/// [`MeetingClient`](crate::flows::MeetingClient); nothing in the crate reads the
/// process environment on its own. Fields stay public so tests can build
/// deliberately incomplete credentials and observe the request-time validation.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
	/// Provider account identifier sent with the `account_credentials` grant.
	pub account_id: String,
	/// OAuth client identifier.
	pub client_id: String,
	/// OAuth client secret.
	pub client_secret: Secret,
}
impl Credentials {
	/// Creates credentials from explicit values.
	pub fn new(
		account_id: impl Into<String>,
		client_id: impl Into<String>,
		client_secret: impl Into<Secret>,
	) -> Self {
		Self {
			account_id: account_id.into(),
			client_id: client_id.into(),
			client_secret: client_secret.into(),
		}
	}

	/// Reads `ZOOM_ACCOUNT_ID`, `ZOOM_CLIENT_ID`, and `ZOOM_CLIENT_SECRET` from the process
	/// environment.
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|name| std::env::var(name).ok())
	}

	/// Same as [`Credentials::from_env`] with an injectable variable lookup.
	pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let fetch = |name: &'static str| {
			lookup(name).ok_or(ConfigError::MissingEnvironmentVariable { name })
		};

		Ok(Self::new(fetch(ACCOUNT_ID_ENV)?, fetch(CLIENT_ID_ENV)?, fetch(CLIENT_SECRET_ENV)?))
	}

	/// Checks that the client identifier and secret are usable.
	pub fn ensure_client(&self) -> Result<(), ConfigError> {
		if self.client_id.trim().is_empty() {
			return Err(ConfigError::MissingCredential { field: "client_id" });
		}
		if self.client_secret.is_blank() {
			return Err(ConfigError::MissingCredential { field: "client_secret" });
		}

		Ok(())
	}

	/// Checks that the account identifier is usable.
	pub fn ensure_account(&self) -> Result<(), ConfigError> {
		if self.account_id.trim().is_empty() {
			Err(ConfigError::MissingCredential { field: "account_id" })
		} else {
			Ok(())
		}
	}
}
impl Debug for Credentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Credentials")
			.field("account_id", &self.account_id)
			.field("client_id", &self.client_id)
			.field("client_secret", &self.client_secret)
			.finish()
	}
}
