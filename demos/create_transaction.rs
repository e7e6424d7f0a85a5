//! Submits a transfer to a one-time address against a local mock of the API, then inspects the
//! token that authorized it.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use fireblocks_auth::{
	api::{
		DestinationTransferPeerPath, OneTimeAddress, TransactionArguments, TransactionOperation,
		TransferPeerPath,
	},
	auth::{ApiKey, Credential, TokenSigner, TokenVerifier},
	client::ApiClient,
	http::{HttpMethod, ReqwestHttpClient},
	url::Url,
};

const PRIVATE_KEY: &str = include_str!("../tests/fixtures/rsa_private.pem");
const PUBLIC_KEY: &str = include_str!("../tests/fixtures/rsa_public.pem");

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let tx_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v1/transactions").header_exists("authorization");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"id\":\"9c1e\",\"status\":\"SUBMITTED\"}");
		})
		.await;
	let signer = TokenSigner::new(Credential::from_pem(ApiKey::new("demo-api-key")?, PRIVATE_KEY)?);
	let client = <ApiClient<ReqwestHttpClient>>::with_http_client(
		signer,
		Url::parse(&server.base_url())?,
		ReqwestHttpClient::default(),
	);
	let args = TransactionArguments {
		asset_id: "ETH_TEST5".into(),
		operation: TransactionOperation::Transfer,
		source: TransferPeerPath::vault("0"),
		destination: Some(DestinationTransferPeerPath::one_time_address(OneTimeAddress {
			address: "0x00000000219ab540356cBB839Cbe05303d7705Fa".into(),
			tag: None,
		})),
		amount: "0.001".into(),
		note: Some("Created by the create_transaction demo".into()),
		external_tx_id: None,
	};
	let response = client.create_transaction(&args).await?;

	println!("Transaction {} is {:?}.", response.id, response.status);

	tx_mock.assert_async().await;

	// Sign the same request offline to show what the service checks.
	let body = serde_json::to_vec(&args)?;
	let request = client.prepare(HttpMethod::Post, "/v1/transactions", Some(body.clone()))?;
	let token = request
		.header("authorization")
		.and_then(|value| value.strip_prefix("Bearer "))
		.unwrap_or_default();
	let claims = TokenVerifier::from_public_pem(PUBLIC_KEY)?.verify_request(
		token,
		"/v1/transactions",
		Some(&body),
	)?;

	println!("Token for {} expires at {:?}.", claims.uri, claims.expires_at());

	Ok(())
}
