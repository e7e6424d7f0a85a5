//! Creates a vault account against a local mock of the API and shows the signed headers.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use fireblocks_auth::{
	api::CreateVaultAccountRequest,
	auth::ApiKey,
	client::ReqwestApiClient,
	config::ClientConfig,
};

const PRIVATE_KEY: &str = include_str!("../tests/fixtures/rsa_private.pem");
const API_KEY: &str = "demo-api-key";

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let vault_mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/v1/vault/accounts")
				.header("x-api-key", API_KEY)
				.header("content-type", "application/json")
				.header_exists("authorization")
				.body("{\"name\":\"Treasury\",\"hiddenOnUI\":false,\"autoFuel\":true}");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"id\":\"42\",\"name\":\"Treasury\",\"hiddenOnUI\":false,\"autoFuel\":true}");
		})
		.await;
	let config = ClientConfig::builder(ApiKey::new(API_KEY)?)
		.private_key_pem(PRIVATE_KEY)
		.base_url_str(&server.base_url())?
		.build()?;
	let client = ReqwestApiClient::new(config)?;
	let mut request = CreateVaultAccountRequest::new("Treasury");

	request.auto_fuel = true;

	let vault = client.create_vault_account(&request).await?;

	println!("Created vault {} ({}).", vault.id, vault.name);

	vault_mock.assert_async().await;

	Ok(())
}
