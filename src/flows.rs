//! Token-and-action orchestration against a single provider descriptor.

mod access_token;
mod meeting;

// crates.io
use oauth2::http::{HeaderValue, Method, Request, header::ACCEPT, request::Builder};
// self
use crate::{
	_prelude::*,
	auth::{AccessToken, Credentials},
	error::{ConfigError, DecodeError, UpstreamError},
	http::{self, HttpRequest, HttpResponse, ProviderHttpClient, ResponseMetadata},
	meeting::{MeetingRequest, MeetingResponse},
	obs::FlowStage,
	provider::ProviderDescriptor,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestMeetingClient = MeetingClient<ReqwestHttpClient>;

/// User path segment addressing the token owner.
pub const DEFAULT_USER: &str = "me";

/// Selects how far [`MeetingClient::perform_action`] runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionMode {
	/// Only exchange credentials for a token.
	TokenOnly,
	/// Exchange credentials, then create the described meeting.
	CreateMeeting(MeetingRequest),
}

/// Result of [`MeetingClient::perform_action`], matching the requested [`ActionMode`].
#[derive(Clone, Debug, PartialEq)]
pub enum ActionOutcome {
	/// Token issued in [`ActionMode::TokenOnly`].
	Token(AccessToken),
	/// Meeting created in [`ActionMode::CreateMeeting`].
	Meeting(MeetingResponse),
}

/// Exchanges server-to-server credentials for a bearer token and uses it to create
/// meetings.
///
/// The client owns the HTTP transport, the provider descriptor, and the injected
/// [`Credentials`]; it holds no other state. Every orchestration run requests a
/// fresh token, and each stage makes exactly one request with no retry.
#[derive(Clone)]
pub struct MeetingClient<C>
where
	C: ?Sized + ProviderHttpClient,
{
	/// HTTP client wrapper used for every outbound provider request.
	pub http_client: Arc<C>,
	/// Provider descriptor that defines endpoints and the grant.
	pub descriptor: ProviderDescriptor,
	/// Credentials exchanged at the token endpoint.
	pub credentials: Credentials,
	/// User whose meetings are created (`me` for the token owner).
	pub user: String,
}
impl<C> MeetingClient<C>
where
	C: ?Sized + ProviderHttpClient,
{
	/// Creates a client that reuses the caller-provided transport.
	pub fn with_http_client(
		descriptor: ProviderDescriptor,
		credentials: Credentials,
		http_client: impl Into<Arc<C>>,
	) -> Self {
		Self {
			http_client: http_client.into(),
			descriptor,
			credentials,
			user: DEFAULT_USER.into(),
		}
	}

	/// Creates meetings on behalf of `user` (a user id or email) instead of the token owner.
	pub fn with_user(mut self, user: impl Into<String>) -> Self {
		self.user = user.into();

		self
	}

	/// Runs the token stage and, depending on `mode`, the meeting stage.
	///
	/// A token stage failure ends the run before the meeting endpoint is contacted.
	pub async fn perform_action(&self, mode: ActionMode) -> Result<ActionOutcome> {
		let token = self.request_access_token().await?;

		match mode {
			ActionMode::TokenOnly => Ok(ActionOutcome::Token(token)),
			ActionMode::CreateMeeting(request) =>
				self.create_meeting(&token, &request).await.map(ActionOutcome::Meeting),
		}
	}

	/// Requests a fresh token and creates `request` with it.
	pub async fn schedule_meeting(&self, request: MeetingRequest) -> Result<MeetingResponse> {
		let token = self.request_access_token().await?;

		self.create_meeting(&token, &request).await
	}

	/// Sends `request` and returns the response when its status is a success.
	async fn dispatch(&self, stage: FlowStage, request: HttpRequest) -> Result<HttpResponse> {
		let response = self
			.http_client
			.execute(request)
			.await
			.map_err(|e| http::map_client_error(stage, e))?;

		if response.status().is_success() {
			return Ok(response);
		}

		let meta = ResponseMetadata::from_response(&response);

		Err(UpstreamError {
			stage,
			status: meta.status,
			reason: meta.reason,
			retry_after: meta.retry_after,
			body_preview: http::body_preview(response.body()),
		}
		.into())
	}
}
#[cfg(feature = "reqwest")]
impl MeetingClient<ReqwestHttpClient> {
	/// Creates a new client backed by a default reqwest transport.
	pub fn new(descriptor: ProviderDescriptor, credentials: Credentials) -> Self {
		Self::with_http_client(descriptor, credentials, ReqwestHttpClient::default())
	}
}
impl<C> Debug for MeetingClient<C>
where
	C: ?Sized + ProviderHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("MeetingClient")
			.field("descriptor", &self.descriptor)
			.field("credentials", &self.credentials)
			.field("user", &self.user)
			.finish()
	}
}

/// Decodes a JSON body into `T`, naming the failing path on error.
pub(crate) fn decode_json<T>(stage: FlowStage, response: &HttpResponse) -> Result<T>
where
	T: for<'de> Deserialize<'de>,
{
	let mut deserializer = serde_json::Deserializer::from_slice(response.body());

	serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|source| DecodeError { stage, status: response.status().as_u16(), source }.into())
}

pub(crate) fn header_value(header: &'static str, value: &str) -> Result<HeaderValue> {
	HeaderValue::from_str(value)
		.map_err(|source| ConfigError::InvalidHeader { header, source }.into())
}

pub(crate) fn post(url: &Url) -> Builder {
	Request::builder()
		.method(Method::POST)
		.uri(url.as_str())
		.header(ACCEPT, HeaderValue::from_static("application/json"))
}
