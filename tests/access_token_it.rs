// crates.io
use httpmock::prelude::*;
use time::Duration;
// self
use meeting_broker::{
	auth::Credentials,
	error::{AuthorizationError, ConfigError, DecodeError, Error, UpstreamError},
	flows::MeetingClient,
	obs::FlowStage,
	provider::{ClientAuthMethod, ProviderDescriptor},
	url::Url,
};

fn build_descriptor(server: &MockServer) -> ProviderDescriptor {
	ProviderDescriptor::builder("mock-zoom")
		.token_endpoint(
			Url::parse(&server.url("/oauth/token"))
				.expect("Mock token endpoint should parse successfully."),
		)
		.api_base(Url::parse(&server.url("/v2/")).expect("Mock API base should parse successfully."))
		.build()
		.expect("Provider descriptor should build successfully.")
}

#[tokio::test]
async fn access_token_exchange_sends_basic_header_and_account_form() {
	let server = MockServer::start_async().await;
	let client = MeetingClient::new(build_descriptor(&server), Credentials::new("A", "B", "C"));
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/oauth/token")
				.header("authorization", "Basic QjpD")
				.header("content-type", "application/x-www-form-urlencoded")
				.body("grant_type=account_credentials&account_id=A");
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"tok1\",\"token_type\":\"bearer\",\"expires_in\":3599,\"scope\":\"meeting:write:admin\"}",
			);
		})
		.await;
	let token = client.request_access_token().await.expect("Token exchange should succeed.");

	assert_eq!(token.expose(), "tok1");
	assert_eq!(token.token_type.as_deref(), Some("bearer"));
	assert_eq!(token.scope.as_deref(), Some("meeting:write:admin"));
	assert!(token.expires_at().is_some());

	mock.assert_async().await;
}

#[tokio::test]
async fn access_token_exchange_supports_client_secret_post() {
	let server = MockServer::start_async().await;
	let mut descriptor = build_descriptor(&server);

	descriptor.client_auth_method = ClientAuthMethod::ClientSecretPost;

	let client = MeetingClient::new(descriptor, Credentials::new("acct", "svc", "secret"));
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/token").body(
				"grant_type=account_credentials&account_id=acct&client_id=svc&client_secret=secret",
			);
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"access_token\":\"posted\"}");
		})
		.await;
	let token = client.request_access_token().await.expect("Token exchange should succeed.");

	assert_eq!(token.expose(), "posted");

	mock.assert_async().await;
}

#[tokio::test]
async fn access_token_exchange_maps_rejection_to_upstream_error() {
	let server = MockServer::start_async().await;
	let client =
		MeetingClient::new(build_descriptor(&server), Credentials::new("A", "B", "wrong"));
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/token");
			then.status(401)
				.header("content-type", "application/json")
				.body("{\"reason\":\"Invalid client_id or client_secret\",\"error\":\"invalid_client\"}");
		})
		.await;
	let err = client.request_access_token().await.expect_err("Rejected credentials should fail.");

	match err {
		Error::Upstream(UpstreamError { stage, status, reason, body_preview, .. }) => {
			assert_eq!(stage, FlowStage::AccessToken);
			assert_eq!(status, 401);
			assert_eq!(reason, "Unauthorized");
			assert!(
				body_preview.is_some_and(|body| body.contains("invalid_client")),
				"Body preview should keep the provider's detail."
			);
		},
		other => panic!("Unexpected error variant: {other:?}."),
	}

	mock.assert_async().await;
}

#[tokio::test]
async fn access_token_exchange_surfaces_retry_after_hint() {
	let server = MockServer::start_async().await;
	let client = MeetingClient::new(build_descriptor(&server), Credentials::new("A", "B", "C"));
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/token");
			then.status(429).header("retry-after", "12");
		})
		.await;
	let err = client.request_access_token().await.expect_err("Throttled exchange should fail.");

	match err {
		Error::Upstream(UpstreamError { status, retry_after, .. }) => {
			assert_eq!(status, 429);
			assert_eq!(retry_after, Some(Duration::seconds(12)));
		},
		other => panic!("Unexpected error variant: {other:?}."),
	}

	mock.assert_async().await;
}

#[tokio::test]
async fn access_token_exchange_without_token_field_is_unauthorized() {
	let server = MockServer::start_async().await;
	let client = MeetingClient::new(build_descriptor(&server), Credentials::new("A", "B", "C"));
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/token");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"token_type\":\"bearer\",\"expires_in\":3599}");
		})
		.await;
	let err = client.request_access_token().await.expect_err("Token-less response should fail.");

	assert!(matches!(
		err,
		Error::Authorization(AuthorizationError::MissingAccessToken {
			stage: FlowStage::AccessToken
		})
	));

	mock.assert_async().await;
}

#[tokio::test]
async fn access_token_exchange_reports_malformed_json_with_path() {
	let server = MockServer::start_async().await;
	let client = MeetingClient::new(build_descriptor(&server), Credentials::new("A", "B", "C"));
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/token");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"access_token\":\"tok1\",\"expires_in\":\"soon\"}");
		})
		.await;
	let err = client.request_access_token().await.expect_err("Malformed response should fail.");

	match err {
		Error::Decode(DecodeError { stage, status, source }) => {
			assert_eq!(stage, FlowStage::AccessToken);
			assert_eq!(status, 200);
			assert_eq!(source.path().to_string(), "expires_in");
		},
		other => panic!("Unexpected error variant: {other:?}."),
	}

	mock.assert_async().await;
}

#[tokio::test]
async fn access_token_exchange_rejects_empty_credentials_without_network() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.path("/oauth/token");
			then.status(200).body("{\"access_token\":\"never\"}");
		})
		.await;

	for credentials in [Credentials::new("A", "", "C"), Credentials::new("A", "B", "")] {
		let client = MeetingClient::new(build_descriptor(&server), credentials);
		let err = client
			.request_access_token()
			.await
			.expect_err("Incomplete credentials should be rejected.");

		assert!(matches!(err, Error::Config(ConfigError::MissingCredential { .. })));
	}

	mock.assert_calls_async(0).await;
}
