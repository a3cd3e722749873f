//! Client-level error types shared across stages, transports, and configuration.

// self
use crate::{_prelude::*, obs::FlowStage};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Provider answered with a non-success status.
	#[error(transparent)]
	Upstream(#[from] UpstreamError),
	/// No usable bearer token was available.
	#[error(transparent)]
	Authorization(#[from] AuthorizationError),
	/// Provider response did not match the expected schema.
	#[error(transparent)]
	Decode(#[from] DecodeError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
}
impl Error {
	/// Returns the stage that produced the error, when it is stage-specific.
	pub fn stage(&self) -> Option<FlowStage> {
		match self {
			Self::Config(_) => None,
			Self::Upstream(e) => Some(e.stage),
			Self::Authorization(e) => e.stage(),
			Self::Decode(e) => Some(e.stage),
			Self::Transport(e) => Some(e.stage()),
		}
	}
}

/// Configuration and validation failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// A required credential is empty.
	#[error("Credential `{field}` must be set and non-empty.")]
	MissingCredential {
		/// Credential field name.
		field: &'static str,
	},
	/// A required environment variable is absent or not valid unicode.
	#[error("Environment variable `{name}` is not set.")]
	MissingEnvironmentVariable {
		/// Variable name.
		name: &'static str,
	},
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] oauth2::http::Error),
	/// A header value contains characters HTTP does not allow.
	#[error("Header `{header}` contains invalid characters.")]
	InvalidHeader {
		/// Header name.
		header: &'static str,
		/// Underlying header validation failure.
		#[source]
		source: oauth2::http::header::InvalidHeaderValue,
	},
	/// Provider descriptor failed validation.
	#[error(transparent)]
	InvalidDescriptor(#[from] crate::provider::ProviderDescriptorError),
	/// Endpoint URL cannot host the requested path.
	#[error("Endpoint `{url}` cannot be used as a base URL.")]
	InvalidEndpoint {
		/// Offending URL.
		url: String,
	},
	/// Meeting request body could not be serialized.
	#[error("Meeting request could not be encoded as JSON.")]
	RequestEncode {
		/// Underlying serialization failure.
		#[source]
		source: serde_json::Error,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Non-success HTTP status returned by the provider.
#[derive(Debug, ThisError)]
#[error("{} failed: provider returned {status} {reason}.", .stage.describe())]
pub struct UpstreamError {
	/// Stage that received the response.
	pub stage: FlowStage,
	/// HTTP status code.
	pub status: u16,
	/// Canonical status text (empty when the code has none).
	pub reason: String,
	/// Retry-After hint from upstream, if supplied.
	pub retry_after: Option<Duration>,
	/// Truncated response body for diagnostics.
	pub body_preview: Option<String>,
}

/// Missing bearer token failures.
#[derive(Debug, ThisError)]
pub enum AuthorizationError {
	/// Token endpoint succeeded but its body carried no usable `access_token`.
	#[error("{} failed: response did not contain an access token.", .stage.describe())]
	MissingAccessToken {
		/// Stage that received the response.
		stage: FlowStage,
	},
	/// An empty bearer token was supplied to an authenticated call.
	#[error("Meeting creation request failed: bearer token is empty.")]
	EmptyAccessToken,
}
impl AuthorizationError {
	/// Returns the stage associated with the failure.
	pub fn stage(&self) -> Option<FlowStage> {
		match self {
			Self::MissingAccessToken { stage } => Some(*stage),
			Self::EmptyAccessToken => Some(FlowStage::CreateMeeting),
		}
	}
}

/// Provider returned a success status with a body that does not match its schema.
#[derive(Debug, ThisError)]
#[error("{} failed: provider returned malformed JSON.", .stage.describe())]
pub struct DecodeError {
	/// Stage that received the response.
	pub stage: FlowStage,
	/// HTTP status code of the response.
	pub status: u16,
	/// Structured parsing failure naming the offending path.
	#[source]
	pub source: serde_path_to_error::Error<serde_json::Error>,
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("{} failed: network error.", .stage.describe())]
	Network {
		/// Stage that issued the request.
		stage: FlowStage,
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("{} failed: I/O error.", .stage.describe())]
	Io {
		/// Stage that issued the request.
		stage: FlowStage,
		/// Underlying IO failure.
		#[source]
		source: std::io::Error,
	},
	/// Transport reported a failure it could not classify.
	#[error("{} failed: {message}.", .stage.describe())]
	Other {
		/// Stage that issued the request.
		stage: FlowStage,
		/// Transport-supplied message.
		message: String,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(stage: FlowStage, src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { stage, source: Box::new(src) }
	}

	/// Returns the stage that issued the failing request.
	pub fn stage(&self) -> FlowStage {
		match self {
			Self::Network { stage, .. } | Self::Io { stage, .. } | Self::Other { stage, .. } =>
				*stage,
		}
	}
}
