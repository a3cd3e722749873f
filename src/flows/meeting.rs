//! Meeting creation with a previously issued bearer token.

// crates.io
use oauth2::http::header::{AUTHORIZATION, CONTENT_TYPE};
// self
use crate::{
	_prelude::*,
	auth::AccessToken,
	error::{AuthorizationError, ConfigError},
	flows::{self, MeetingClient},
	http::{HttpRequest, ProviderHttpClient},
	meeting::{MeetingRequest, MeetingResponse},
	obs::{self, FlowOutcome, FlowSpan, FlowStage},
};

impl<C> MeetingClient<C>
where
	C: ?Sized + ProviderHttpClient,
{
	/// Creates a meeting for the configured user with `token`.
	///
	/// Sends exactly one request; a blank token fails before anything is sent.
	pub async fn create_meeting(
		&self,
		token: &AccessToken,
		request: &MeetingRequest,
	) -> Result<MeetingResponse> {
		const STAGE: FlowStage = FlowStage::CreateMeeting;

		let span = FlowSpan::new(STAGE);

		obs::record_stage_outcome(STAGE, FlowOutcome::Attempt);

		let result = span
			.instrument(async move {
				let http_request = self.meeting_request(token, request)?;
				let response = self.dispatch(STAGE, http_request).await?;
				let meeting = flows::decode_json::<MeetingResponse>(STAGE, &response)?;

				obs::log_stage_success(STAGE, &meeting.id.to_string());

				Ok(meeting)
			})
			.await;

		obs::finish_stage(STAGE, &result);

		result
	}

	fn meeting_request(&self, token: &AccessToken, request: &MeetingRequest) -> Result<HttpRequest> {
		if token.is_blank() {
			return Err(AuthorizationError::EmptyAccessToken.into());
		}

		let url = self.descriptor.meetings_endpoint(&self.user)?;
		let body =
			serde_json::to_vec(request).map_err(|source| ConfigError::RequestEncode { source })?;
		let bearer = flows::header_value("authorization", &format!("Bearer {}", token.expose()))?;

		flows::post(&url)
			.header(CONTENT_TYPE, "application/json")
			.header(AUTHORIZATION, bearer)
			.body(body)
			.map_err(|e| ConfigError::from(e).into())
	}
}
