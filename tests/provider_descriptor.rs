// self
use meeting_broker::{
	error::{ConfigError, Error},
	provider::{
		ClientAuthMethod, GrantType, ProviderDescriptor, ProviderDescriptorBuilder,
		ProviderDescriptorError, ZOOM_API_BASE, ZOOM_TOKEN_ENDPOINT,
	},
	url::Url,
};

fn url(value: &str) -> Url {
	Url::parse(value).expect("Failed to parse mock provider URL.")
}

fn builder(name: &str) -> ProviderDescriptorBuilder {
	ProviderDescriptor::builder(name)
		.token_endpoint(url("https://auth.example.com/oauth/token"))
		.api_base(url("https://api.example.com/v2/"))
}

#[test]
fn descriptor_defaults_to_account_credentials_over_basic_auth() {
	let descriptor = builder("defaults").build().expect("Descriptor should build.");

	assert_eq!(descriptor.name, "defaults");
	assert_eq!(descriptor.grant, GrantType::AccountCredentials);
	assert_eq!(descriptor.client_auth_method, ClientAuthMethod::ClientSecretBasic);
	assert_eq!(descriptor.endpoints.token.as_str(), "https://auth.example.com/oauth/token");
}

#[test]
fn descriptor_rejects_insecure_remote_endpoints() {
	let err = builder("insecure")
		.api_base(url("http://api.example.com/v2/"))
		.build()
		.expect_err("Plain-HTTP API base should be rejected.");

	assert!(matches!(err, ProviderDescriptorError::InsecureEndpoint { endpoint: "api", .. }));

	let config: Error = ConfigError::from(err).into();

	assert_eq!(
		config.to_string(),
		"The api endpoint must use HTTPS: http://api.example.com/v2/."
	);
}

#[test]
fn descriptor_overrides_round_trip_through_serde() {
	let descriptor = builder("custom")
		.grant(GrantType::ClientCredentials)
		.client_auth_method(ClientAuthMethod::ClientSecretPost)
		.build()
		.expect("Descriptor should build.");
	let encoded = serde_json::to_value(&descriptor).expect("Descriptor should serialize.");

	assert_eq!(encoded["grant"], "client_credentials");
	assert_eq!(encoded["client_auth_method"], "client_secret_post");

	let decoded: ProviderDescriptor =
		serde_json::from_value(encoded).expect("Descriptor should deserialize.");

	assert_eq!(decoded, descriptor);
}

#[test]
fn deserialized_descriptors_are_validated() {
	let err = serde_json::from_value::<ProviderDescriptor>(serde_json::json!({
		"name": "plaintext",
		"endpoints": {
			"token": "http://auth.example.com/oauth/token",
			"api_base": "https://api.example.com/v2/",
		},
	}))
	.expect_err("Plain-HTTP token endpoint should be rejected on decode.");

	assert!(
		err.to_string().contains("The token endpoint must use HTTPS"),
		"Unexpected error: {err}."
	);

	let local = serde_json::from_value::<ProviderDescriptor>(serde_json::json!({
		"name": "local",
		"endpoints": {
			"token": "http://127.0.0.1:8080/oauth/token",
			"api_base": "http://localhost:8080/v2/",
		},
	}))
	.expect("Loopback endpoints should decode.");

	assert_eq!(local.grant, GrantType::AccountCredentials);
	assert_eq!(local.client_auth_method, ClientAuthMethod::ClientSecretBasic);
}

#[test]
fn zoom_constants_match_descriptor() {
	let descriptor = ProviderDescriptor::zoom().expect("Zoom descriptor should build.");

	assert_eq!(descriptor.endpoints.token.as_str(), ZOOM_TOKEN_ENDPOINT);
	assert_eq!(descriptor.endpoints.api_base.as_str(), ZOOM_API_BASE);
	assert_eq!(
		descriptor
			.meetings_endpoint("me")
			.expect("Meetings endpoint should resolve.")
			.as_str(),
		"https://api.zoom.us/v2/users/me/meetings"
	);
}
