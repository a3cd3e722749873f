//! Provider descriptor data structures and helpers shared by both stages.

/// Builder API for assembling provider descriptors.
pub mod builder;
/// Grant helpers wired into provider descriptors.
pub mod grant;

pub use builder::*;
pub use grant::*;

// self
use crate::{_prelude::*, error::ConfigError};

/// Token endpoint used by Zoom Server-to-Server OAuth apps.
pub const ZOOM_TOKEN_ENDPOINT: &str = "https://zoom.us/oauth/token";
/// Zoom REST API base.
pub const ZOOM_API_BASE: &str = "https://api.zoom.us/v2/";

/// Preferred client authentication modes for token endpoint calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientAuthMethod {
	#[default]
	/// HTTP Basic with `client_id`/`client_secret`.
	ClientSecretBasic,
	/// Form POST body parameters for `client_id`/`client_secret`.
	ClientSecretPost,
}

/// Endpoint set declared by a provider descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderEndpoints {
	/// Token endpoint used for the credential exchange.
	pub token: Url,
	/// Base URL of the REST API (e.g. `https://api.zoom.us/v2/`).
	pub api_base: Url,
}

/// Immutable provider descriptor consumed by the client.
///
/// Deserialization goes through [`ProviderDescriptorBuilder`], so decoded descriptors
/// satisfy the same endpoint rules as built ones.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DescriptorFields")]
pub struct ProviderDescriptor {
	/// Descriptor label used in logs.
	pub name: String,
	/// Endpoint definitions exposed by the provider.
	pub endpoints: ProviderEndpoints,
	/// Grant used to obtain server-to-server tokens.
	pub grant: GrantType,
	/// Preferred client authentication mechanism.
	pub client_auth_method: ClientAuthMethod,
}
impl ProviderDescriptor {
	/// Creates a new builder for the provided label.
	pub fn builder(name: impl Into<String>) -> ProviderDescriptorBuilder {
		ProviderDescriptorBuilder::new(name)
	}

	/// Descriptor for Zoom's Server-to-Server OAuth apps.
	pub fn zoom() -> Result<Self, ProviderDescriptorError> {
		let parse = |endpoint: &'static str, raw: &str| {
			Url::parse(raw).map_err(|_| ProviderDescriptorError::InvalidUrl { endpoint, url: raw.into() })
		};

		Self::builder("zoom")
			.token_endpoint(parse("token", ZOOM_TOKEN_ENDPOINT)?)
			.api_base(parse("api", ZOOM_API_BASE)?)
			.grant(GrantType::AccountCredentials)
			.build()
	}

	/// Resolves the meeting collection endpoint for `user` (`me` for the token owner).
	pub fn meetings_endpoint(&self, user: &str) -> Result<Url, ConfigError> {
		let mut url = self.endpoints.api_base.clone();

		url.path_segments_mut()
			.map_err(|_| ConfigError::InvalidEndpoint { url: self.endpoints.api_base.to_string() })?
			.pop_if_empty()
			.extend(["users", user, "meetings"]);

		Ok(url)
	}
}

#[derive(Deserialize)]
struct DescriptorFields {
	name: String,
	endpoints: ProviderEndpoints,
	#[serde(default)]
	grant: GrantType,
	#[serde(default)]
	client_auth_method: ClientAuthMethod,
}
impl TryFrom<DescriptorFields> for ProviderDescriptor {
	type Error = ProviderDescriptorError;

	fn try_from(fields: DescriptorFields) -> Result<Self, Self::Error> {
		Self::builder(fields.name)
			.token_endpoint(fields.endpoints.token)
			.api_base(fields.endpoints.api_base)
			.grant(fields.grant)
			.client_auth_method(fields.client_auth_method)
			.build()
	}
}
