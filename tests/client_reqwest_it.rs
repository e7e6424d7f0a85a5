// crates.io
use httpmock::prelude::*;
// self
use fireblocks_auth::{
	api::{CreateVaultAccountRequest, VaultAccountsFilter},
	error::{Error, HttpError},
};

mod common;

#[tokio::test]
async fn get_sends_api_key_and_bearer_without_content_type() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/v1/vault/accounts_paged")
				.query_param("limit", "5")
				.header("x-api-key", common::API_KEY)
				.header_exists("authorization")
				.header_missing("content-type");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"accounts\":[{\"id\":\"0\",\"name\":\"Default\"}]}");
		})
		.await;
	let client = common::reqwest_client(&server.base_url());
	let page = client
		.vault_accounts_paged(&VaultAccountsFilter { limit: Some(5), ..Default::default() })
		.await
		.expect("Listing should succeed against the mock.");

	assert_eq!(page.accounts[0].name, "Default");

	mock.assert_async().await;
}

#[tokio::test]
async fn post_sends_exactly_the_serialized_body() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/v1/vault/accounts")
				.header("x-api-key", common::API_KEY)
				.header("content-type", "application/json")
				.header_exists("authorization")
				.body("{\"name\":\"Ops\",\"hiddenOnUI\":false,\"autoFuel\":false}");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"id\":\"5\",\"name\":\"Ops\",\"hiddenOnUI\":false}");
		})
		.await;
	let client = common::reqwest_client(&server.base_url());
	let vault = client
		.create_vault_account(&CreateVaultAccountRequest::new("Ops"))
		.await
		.expect("Creation should succeed against the mock.");

	assert_eq!(vault.id, "5");

	mock.assert_async().await;
}

#[tokio::test]
async fn error_status_keeps_request_id_and_body() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/supported_assets");
			then.status(401)
				.header("x-request-id", "4c2b-req")
				.body("{\"message\":\"Unauthorized: JWT is expired\",\"code\":-3}");
		})
		.await;
	let client = common::reqwest_client(&server.base_url());
	let err = client.supported_assets().await.expect_err("401 should surface as an error.");

	match err {
		Error::Http(HttpError::Status { method, path, status, request_id, body }) => {
			assert_eq!(method, "GET");
			assert_eq!(path, "/v1/supported_assets");
			assert_eq!(status, 401);
			assert_eq!(request_id.as_deref(), Some("4c2b-req"));
			assert!(body.contains("JWT is expired"));
		},
		other => panic!("Unexpected error: {other:?}."),
	}

	mock.assert_async().await;
}

#[tokio::test]
async fn redirects_are_not_followed() {
	let server = MockServer::start_async().await;
	let redirect = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/supported_assets");
			then.status(302).header("location", "/v1/elsewhere");
		})
		.await;
	let target = server
		.mock_async(|when, then| {
			when.path("/v1/elsewhere");
			then.status(200).body("[]");
		})
		.await;
	let client = common::reqwest_client(&server.base_url());
	let err = client.supported_assets().await.expect_err("A redirect is not a success.");

	assert!(matches!(err, Error::Http(HttpError::Status { status: 302, .. })));

	redirect.assert_async().await;
	target.assert_calls_async(0).await;
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
	// Port 9 (discard) is closed on loopback in test environments.
	let client = common::reqwest_client("http://127.0.0.1:9");
	let err = client.get_raw("/v1/supported_assets").await.expect_err("Connection should fail.");

	assert!(matches!(err, Error::Http(HttpError::Transport(_))));
}
