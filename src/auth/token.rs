//! Token endpoint response schema and the in-memory access token it yields.

// self
use crate::{_prelude::*, auth::Secret, error::AuthorizationError, obs::FlowStage};

/// Body returned by the token endpoint on success.
///
/// Every field is optional at decode time so a response without `access_token`
/// surfaces as an [`AuthorizationError`] rather than a decode failure; wrongly typed
/// fields still fail decoding.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TokenResponse {
	/// Bearer token value.
	#[serde(default)]
	pub access_token: Option<Secret>,
	/// Token type reported by the provider (`bearer`).
	#[serde(default)]
	pub token_type: Option<String>,
	/// Lifetime in seconds.
	#[serde(default)]
	pub expires_in: Option<u64>,
	/// Space-delimited scopes granted to the token.
	#[serde(default)]
	pub scope: Option<String>,
	/// API base URL the provider wants follow-up calls to use, if any.
	#[serde(default)]
	pub api_url: Option<String>,
}
impl TokenResponse {
	/// Converts the response into an [`AccessToken`] issued at `issued_at`.
	///
	/// Fails when the token is absent or blank.
	pub fn into_access_token(
		self,
		stage: FlowStage,
		issued_at: OffsetDateTime,
	) -> Result<AccessToken, AuthorizationError> {
		let secret = self
			.access_token
			.filter(|token| !token.is_blank())
			.ok_or(AuthorizationError::MissingAccessToken { stage })?;
		let expires_in = self
			.expires_in
			.map(|secs| Duration::seconds(i64::try_from(secs).unwrap_or(i64::MAX)));

		Ok(AccessToken {
			secret,
			token_type: self.token_type,
			expires_in,
			scope: self.scope,
			issued_at,
		})
	}
}

/// Short-lived bearer credential held in memory for a single orchestration run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessToken {
	/// Token value; callers must avoid logging it.
	pub secret: Secret,
	/// Token type reported by the provider.
	pub token_type: Option<String>,
	/// Lifetime reported by the provider.
	pub expires_in: Option<Duration>,
	/// Scopes granted to the token.
	pub scope: Option<String>,
	/// Instant the token response was received.
	pub issued_at: OffsetDateTime,
}
impl AccessToken {
	/// Wraps a token obtained elsewhere (no lifetime information).
	pub fn new(secret: impl Into<Secret>) -> Self {
		Self {
			secret: secret.into(),
			token_type: None,
			expires_in: None,
			scope: None,
			issued_at: OffsetDateTime::now_utc(),
		}
	}

	/// Returns the raw token value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		self.secret.expose()
	}

	/// Returns `true` when the token value is empty or whitespace only.
	pub fn is_blank(&self) -> bool {
		self.secret.is_blank()
	}

	/// Expiry instant, when the provider reported a lifetime.
	pub fn expires_at(&self) -> Option<OffsetDateTime> {
		self.expires_in.and_then(|lifetime| self.issued_at.checked_add(lifetime))
	}

	/// Returns `true` if the reported lifetime has elapsed at `instant`.
	pub fn is_expired_at(&self, instant: OffsetDateTime) -> bool {
		self.expires_at().is_some_and(|expires_at| instant >= expires_at)
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros::datetime;
	// self
	use super::*;

	fn decode(body: &str) -> TokenResponse {
		serde_json::from_str(body).expect("Token response fixture should decode.")
	}

	#[test]
	fn full_response_maps_lifetime_and_scope() {
		let issued_at = datetime!(2026-10-17 09:00 UTC);
		let token = decode(
			"{\"access_token\":\"tok1\",\"token_type\":\"bearer\",\"expires_in\":3599,\"scope\":\"meeting:write:admin\",\"api_url\":\"https://api.zoom.us\"}",
		)
		.into_access_token(FlowStage::AccessToken, issued_at)
		.expect("Complete response should yield a token.");

		assert_eq!(token.expose(), "tok1");
		assert_eq!(token.token_type.as_deref(), Some("bearer"));
		assert_eq!(token.scope.as_deref(), Some("meeting:write:admin"));
		assert_eq!(token.expires_at(), Some(datetime!(2026-10-17 09:59:59 UTC)));
		assert!(!token.is_expired_at(datetime!(2026-10-17 09:30 UTC)));
		assert!(token.is_expired_at(datetime!(2026-10-17 10:00 UTC)));
	}

	#[test]
	fn absent_or_blank_token_is_an_authorization_error() {
		let now = OffsetDateTime::now_utc();

		for body in ["{}", "{\"access_token\":\"\"}", "{\"access_token\":null}"] {
			let err = decode(body)
				.into_access_token(FlowStage::AccessToken, now)
				.expect_err("Missing token should be rejected.");

			assert!(matches!(
				err,
				AuthorizationError::MissingAccessToken { stage: FlowStage::AccessToken }
			));
		}
	}

	#[test]
	fn token_without_lifetime_never_expires_locally() {
		let token = AccessToken::new("opaque");

		assert_eq!(token.expires_at(), None);
		assert!(!token.is_expired_at(OffsetDateTime::now_utc()));
		assert_eq!(format!("{:?}", token.secret), "Secret(\"<redacted>\")");
	}
}
