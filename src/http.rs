//! Transport primitives for the token and meeting requests.
//!
//! The module exposes [`ProviderHttpClient`], the client's only dependency on an HTTP
//! stack, alongside [`ResponseMetadata`] so non-success responses can be classified
//! with consistent status and retry information. Requests and responses use the
//! `oauth2` crate's transport types (`http::Request<Vec<u8>>` /
//! `http::Response<Vec<u8>>`), so any client able to speak those can be plugged in.

pub use oauth2::{HttpClientError, HttpRequest, HttpResponse};

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// crates.io
use oauth2::http::header::{HeaderMap, RETRY_AFTER};
use time::format_description::well_known::Rfc2822;
// self
use crate::{
	_prelude::*,
	error::{ConfigError, TransportError},
	obs::FlowStage,
};

/// Boxed future returned by [`ProviderHttpClient::execute`].
pub type HttpFuture<'a, E> =
	Pin<Box<dyn Future<Output = Result<HttpResponse, HttpClientError<E>>> + 'a + Send>>;

const BODY_PREVIEW_LIMIT: usize = 256;

/// Abstraction over HTTP transports capable of executing provider requests.
///
/// Implementations must be `Send + Sync + 'static` so a single transport can be
/// shared (behind `Arc<T>`) by cloned clients, and the futures they return must be
/// `Send`. A transport executes exactly the request it is given: no retries, no
/// redirects, no caching. Non-success statuses are returned as ordinary responses;
/// only failures to obtain a response are errors.
pub trait ProviderHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Sends `request` and resolves to the provider's response.
	fn execute(&self, request: HttpRequest) -> HttpFuture<'_, Self::TransportError>;
}

/// Metadata captured from a provider response for error reporting.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResponseMetadata {
	/// HTTP status code.
	pub status: u16,
	/// Canonical status text, empty for non-standard codes.
	pub reason: String,
	/// Retry-After hint expressed as a relative duration.
	pub retry_after: Option<Duration>,
}
impl ResponseMetadata {
	/// Extracts status and retry hints from `response`.
	pub fn from_response(response: &HttpResponse) -> Self {
		let status = response.status();

		Self {
			status: status.as_u16(),
			reason: status.canonical_reason().unwrap_or_default().to_owned(),
			retry_after: parse_retry_after(response.headers()),
		}
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
/// Provider calls should not follow redirects; configure any custom [`ReqwestClient`]
/// accordingly before wrapping it.
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Builds a client with redirects disabled.
	pub fn without_redirects() -> Result<Self, ConfigError> {
		let client = ReqwestClient::builder().redirect(reqwest::redirect::Policy::none()).build()?;

		Ok(Self(client))
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl ProviderHttpClient for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn execute(&self, request: HttpRequest) -> HttpFuture<'_, Self::TransportError> {
		Box::pin(async move {
			let response =
				self.0.execute(request.try_into().map_err(Box::new)?).await.map_err(Box::new)?;
			let status = response.status();
			let headers = response.headers().to_owned();
			let mut response_new =
				HttpResponse::new(response.bytes().await.map_err(Box::new)?.to_vec());

			*response_new.status_mut() = status;
			*response_new.headers_mut() = headers;

			Ok(response_new)
		})
	}
}

/// Maps a transport failure into the crate error taxonomy, tagged with `stage`.
pub(crate) fn map_client_error<E>(stage: FlowStage, err: HttpClientError<E>) -> Error
where
	E: 'static + Send + Sync + StdError,
{
	match err {
		HttpClientError::Reqwest(inner) => TransportError::Network { stage, source: inner }.into(),
		HttpClientError::Http(inner) => ConfigError::from(inner).into(),
		HttpClientError::Io(source) => TransportError::Io { stage, source }.into(),
		HttpClientError::Other(message) => TransportError::Other { stage, message }.into(),
		other => TransportError::Other {
			stage,
			message: format!("Unhandled HTTP client error variant: {other:?}"),
		}
		.into(),
	}
}

/// Returns a lossy UTF-8 preview of `body`, truncated to a bounded length.
pub(crate) fn body_preview(body: &[u8]) -> Option<String> {
	let text = String::from_utf8_lossy(body);
	let text = text.trim();

	if text.is_empty() {
		return None;
	}
	if text.chars().count() <= BODY_PREVIEW_LIMIT {
		return Some(text.to_owned());
	}

	let mut buf = text.chars().take(BODY_PREVIEW_LIMIT).collect::<String>();

	buf.push('…');

	Some(buf)
}

fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
	let value = headers.get(RETRY_AFTER)?;
	let raw = value.to_str().ok()?.trim();

	if let Ok(secs) = raw.parse::<u64>() {
		return Some(Duration::seconds(i64::try_from(secs).unwrap_or(i64::MAX)));
	}
	if let Ok(moment) = OffsetDateTime::parse(raw, &Rfc2822) {
		let delta = moment - OffsetDateTime::now_utc();

		if delta.is_positive() {
			return Some(delta);
		}
	}

	None
}
