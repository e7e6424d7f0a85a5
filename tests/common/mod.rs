//! Fixtures shared by the integration tests.

#![allow(dead_code)]

// self
use fireblocks_auth::{
	auth::{ApiKey, Credential, TokenSigner, TokenVerifier},
	client::ReqwestApiClient,
	config::ClientConfig,
	http::ApiRequest,
};

pub const PRIVATE_KEY: &str = include_str!("../fixtures/rsa_private.pem");
pub const PUBLIC_KEY: &str = include_str!("../fixtures/rsa_public.pem");
pub const API_KEY: &str = "it-3f9d-api-key";

pub fn api_key() -> ApiKey {
	ApiKey::new(API_KEY).expect("Fixture API key should be valid.")
}

pub fn signer() -> TokenSigner {
	TokenSigner::new(
		Credential::from_pem(api_key(), PRIVATE_KEY).expect("Fixture private key should parse."),
	)
}

pub fn verifier() -> TokenVerifier {
	TokenVerifier::from_public_pem(PUBLIC_KEY).expect("Fixture public key should parse.")
}

/// Builds a reqwest-backed client pointed at a loopback mock server.
pub fn reqwest_client(base_url: &str) -> ReqwestApiClient {
	let config = ClientConfig::builder(api_key())
		.private_key_pem(PRIVATE_KEY)
		.base_url_str(base_url)
		.expect("Mock server URL should parse.")
		.build()
		.expect("Loopback config should build.");

	ReqwestApiClient::new(config).expect("Reqwest client should build.")
}

pub fn bearer(request: &ApiRequest) -> &str {
	request
		.header("authorization")
		.and_then(|value| value.strip_prefix("Bearer "))
		.expect("Bearer header should be present.")
}
