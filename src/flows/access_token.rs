//! Credential exchange against the provider token endpoint.
//!
//! [`MeetingClient::request_access_token`] validates the injected credentials,
//! authenticates with `client_secret_basic` (or `client_secret_post` when the
//! descriptor asks for it), posts the grant as a form body, and decodes the
//! response into an [`AccessToken`]. Nothing is cached: every call reaches the
//! provider.

// crates.io
use oauth2::http::header::{AUTHORIZATION, CONTENT_TYPE};
use url::form_urlencoded::Serializer;
// self
use crate::{
	_prelude::*,
	auth::{self, AccessToken, TokenResponse},
	error::ConfigError,
	flows::{self, MeetingClient},
	http::{HttpRequest, ProviderHttpClient},
	obs::{self, FlowOutcome, FlowSpan, FlowStage},
	provider::ClientAuthMethod,
};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

impl<C> MeetingClient<C>
where
	C: ?Sized + ProviderHttpClient,
{
	/// Exchanges the configured credentials for a bearer token.
	///
	/// Fails with a configuration error, before any network call, when the client id or
	/// secret (or, for the account-credentials grant, the account id) is empty.
	pub async fn request_access_token(&self) -> Result<AccessToken> {
		const STAGE: FlowStage = FlowStage::AccessToken;

		let span = FlowSpan::new(STAGE);

		obs::record_stage_outcome(STAGE, FlowOutcome::Attempt);

		let result = span
			.instrument(async move {
				let request = self.token_request()?;
				let response = self.dispatch(STAGE, request).await?;
				let token = flows::decode_json::<TokenResponse>(STAGE, &response)?
					.into_access_token(STAGE, OffsetDateTime::now_utc())?;

				obs::log_stage_success(STAGE, token.token_type.as_deref().unwrap_or("bearer"));

				Ok(token)
			})
			.await;

		obs::finish_stage(STAGE, &result);

		result
	}

	fn token_request(&self) -> Result<HttpRequest> {
		let credentials = &self.credentials;
		let grant = self.descriptor.grant;

		credentials.ensure_client()?;

		let mut form = Serializer::new(String::new());

		form.append_pair("grant_type", grant.as_str());

		if grant.requires_account() {
			credentials.ensure_account()?;
			form.append_pair("account_id", &credentials.account_id);
		}

		let mut builder = flows::post(&self.descriptor.endpoints.token)
			.header(CONTENT_TYPE, FORM_CONTENT_TYPE);

		match self.descriptor.client_auth_method {
			ClientAuthMethod::ClientSecretBasic => {
				let header = auth::basic_authorization(
					&credentials.client_id,
					credentials.client_secret.expose(),
				);

				builder = builder.header(AUTHORIZATION, flows::header_value("authorization", &header)?);
			},
			ClientAuthMethod::ClientSecretPost => {
				form.append_pair("client_id", &credentials.client_id);
				form.append_pair("client_secret", credentials.client_secret.expose());
			},
		}

		builder.body(form.finish().into_bytes()).map_err(|e| ConfigError::from(e).into())
	}
}
