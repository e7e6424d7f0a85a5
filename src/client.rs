//! Signed API client.
//!
//! Every call signs a fresh token for the exact path (with query) and body bytes it is about to
//! send, attaches `Authorization: Bearer <token>` plus `X-API-Key`, and hands the request to the
//! configured [`ApiHttpClient`]. Non-2xx answers surface as [`HttpError::Status`]; nothing is
//! retried or cached.

// self
use crate::{
	_prelude::*,
	auth::TokenSigner,
	error::{ConfigError, HttpError, SerializationError},
	http::{
		API_KEY_HEADER, AUTHORIZATION_HEADER, ApiHttpClient, ApiRequest, CONTENT_TYPE_HEADER,
		HttpMethod,
	},
	obs::{self, CallOutcome, CallSpan},
};
#[cfg(feature = "reqwest")] use crate::{config::ClientConfig, http::ReqwestHttpClient};

const JSON_CONTENT_TYPE: &str = "application/json";
const CUSTOM_OPERATION: &str = "custom";

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestApiClient = ApiClient<ReqwestHttpClient>;

/// Calls the REST API with per-request signed tokens.
#[derive(Clone)]
pub struct ApiClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Signer producing one token per request.
	pub signer: TokenSigner,
	/// API root that signed paths are appended to.
	pub base_url: Url,
	/// Transport used for every outbound request.
	pub http_client: Arc<C>,
}
impl<C> ApiClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Creates a client over a caller-provided transport.
	pub fn with_http_client(
		signer: TokenSigner,
		base_url: Url,
		http_client: impl Into<Arc<C>>,
	) -> Self {
		Self { signer, base_url, http_client: http_client.into() }
	}

	/// Builds a signed request without sending it.
	///
	/// `path` is relative to the base URL and may carry a query string. It is resolved into the
	/// final URL first; the token's `uri` claim is that URL's path and query, so percent-encoding
	/// and dot-segment removal apply to both alike.
	pub fn prepare(
		&self,
		method: HttpMethod,
		path: &str,
		body: Option<Vec<u8>>,
	) -> Result<ApiRequest> {
		let url = request_url(&self.base_url, path)?;
		let path = signed_uri(&url);
		let token = self.signer.sign(&path, body.as_deref())?;
		let mut headers = vec![
			(AUTHORIZATION_HEADER, token.header_value()),
			(API_KEY_HEADER, self.signer.api_key().to_string()),
		];

		if body.is_some() {
			headers.push((CONTENT_TYPE_HEADER, JSON_CONTENT_TYPE.into()));
		}

		Ok(ApiRequest { method, url, path, headers, body })
	}

	/// Signed GET returning the raw response body.
	pub async fn get_raw(&self, path: &str) -> Result<Vec<u8>> {
		self.call(CUSTOM_OPERATION, HttpMethod::Get, path, None).await
	}

	/// Signed POST of pre-serialized JSON bytes returning the raw response body.
	pub async fn post_raw(&self, path: &str, body: Vec<u8>) -> Result<Vec<u8>> {
		self.call(CUSTOM_OPERATION, HttpMethod::Post, path, Some(body)).await
	}

	/// Signed GET decoding a JSON response.
	pub async fn get<T>(&self, path: &str) -> Result<T>
	where
		T: DeserializeOwned,
	{
		self.fetch(CUSTOM_OPERATION, path).await
	}

	/// Signed POST of a JSON body decoding a JSON response.
	pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
	where
		B: ?Sized + Serialize,
		T: DeserializeOwned,
	{
		self.send(CUSTOM_OPERATION, path, body).await
	}

	pub(crate) async fn fetch<T>(&self, operation: &'static str, path: &str) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let bytes = self.call(operation, HttpMethod::Get, path, None).await?;

		decode(path, &bytes)
	}

	pub(crate) async fn send<B, T>(&self, operation: &'static str, path: &str, body: &B) -> Result<T>
	where
		B: ?Sized + Serialize,
		T: DeserializeOwned,
	{
		// Serialized once; these exact bytes are hashed and sent.
		let body = serde_json::to_vec(body).map_err(SerializationError::Body)?;
		let bytes = self.call(operation, HttpMethod::Post, path, Some(body)).await?;

		decode(path, &bytes)
	}

	async fn call(
		&self,
		operation: &'static str,
		method: HttpMethod,
		path: &str,
		body: Option<Vec<u8>>,
	) -> Result<Vec<u8>> {
		let span = CallSpan::new(operation, method);

		obs::record_call_outcome(operation, CallOutcome::Attempt);

		let result = span
			.instrument(async {
				let request = self.prepare(method, path, body)?;
				let path = request.path.clone();
				let response = self.http_client.execute(request).await?;

				span.record_status(response.status);
				obs::record_response_status(operation, response.status);

				if response.is_success() {
					Ok(response.body)
				} else {
					Err(Error::from(HttpError::Status {
						method: method.as_str(),
						path,
						status: response.status,
						request_id: response.request_id,
						body: String::from_utf8_lossy(&response.body).into_owned(),
					}))
				}
			})
			.await;
		let outcome = CallOutcome::of(&result);

		span.record_outcome(outcome);
		obs::record_call_outcome(operation, outcome);

		result
	}
}
#[cfg(feature = "reqwest")]
impl ApiClient<ReqwestHttpClient> {
	/// Creates a client with its own reqwest transport built from `config`.
	pub fn new(config: ClientConfig) -> Result<Self> {
		let http_client = ReqwestHttpClient::from_config(&config)?;

		Ok(Self::with_http_client(TokenSigner::new(config.credential), config.base_url, http_client))
	}
}
impl<C> Debug for ApiClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ApiClient")
			.field("base_url", &self.base_url.as_str())
			.field("api_key", self.signer.api_key())
			.finish()
	}
}

fn request_url(base: &Url, path: &str) -> Result<Url> {
	let invalid = || ConfigError::InvalidRequestPath { path: path.to_owned() };

	// Anything with its own scheme would otherwise be glued onto the base as a path.
	if Url::parse(path).is_ok() {
		return Err(invalid().into());
	}

	let path = if path.starts_with('/') { path.to_owned() } else { format!("/{path}") };
	let url = Url::parse(&format!("{}{path}", base.as_str().trim_end_matches('/')))
		.map_err(|_| invalid())?;

	if url.fragment().is_some() || url.origin() != base.origin() {
		return Err(invalid().into());
	}

	Ok(url)
}

fn signed_uri(url: &Url) -> String {
	match url.query() {
		Some(query) => format!("{}?{query}", url.path()),
		None => url.path().to_owned(),
	}
}

fn decode<T>(path: &str, bytes: &[u8]) -> Result<T>
where
	T: DeserializeOwned,
{
	let mut deserializer = serde_json::Deserializer::from_slice(bytes);

	serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|source| Error::Decode { path: path.to_owned(), source })
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{
		_preludet::*,
		auth::{TokenVerifier, body_hash},
	};

	#[derive(Debug, Deserialize)]
	struct Echo {
		id: String,
	}

	fn verifier() -> TokenVerifier {
		TokenVerifier::from_public_pem(TEST_PUBLIC_KEY).expect("Fixture public key should parse.")
	}

	#[test]
	fn prepare_binds_path_and_headers() {
		let client = recording_client(RecordingHttpClient::respond(200, "{}"));
		let request = client
			.prepare(HttpMethod::Get, "v1/vault/accounts_paged?limit=2", None)
			.expect("Request should prepare.");

		assert_eq!(request.path, "/v1/vault/accounts_paged?limit=2");
		assert_eq!(request.url.as_str(), "https://api.test/v1/vault/accounts_paged?limit=2");
		assert_eq!(request.header("X-API-Key"), Some(TEST_API_KEY));
		assert_eq!(request.header("Content-Type"), None);

		let bearer = request.header("Authorization").expect("Authorization header is required.");
		let token = bearer.strip_prefix("Bearer ").expect("Header should use the Bearer scheme.");

		verifier()
			.verify_request(token, "/v1/vault/accounts_paged?limit=2", None)
			.expect("Token should be bound to the request.");
	}

	fn signed_matches_wire(client: &ApiClient<RecordingHttpClient>, path: &str) -> ApiRequest {
		let request = client.prepare(HttpMethod::Get, path, None).expect("Request should prepare.");
		let token = request
			.header("authorization")
			.and_then(|value| value.strip_prefix("Bearer "))
			.expect("Bearer header should be present.");
		let claims = verifier().verify(token).expect("Token should verify.");

		assert_eq!(claims.uri, signed_uri(&request.url));
		assert_eq!(claims.uri, request.path);

		request
	}

	#[test]
	fn signed_uri_is_percent_encoded_like_the_wire() {
		let client = recording_client(RecordingHttpClient::respond(200, "{}"));
		let request = signed_matches_wire(&client, "/v1/vault/accounts_paged?namePrefix=My Vault");

		assert_eq!(request.path, "/v1/vault/accounts_paged?namePrefix=My%20Vault");
		assert_eq!(
			request.url.as_str(),
			"https://api.test/v1/vault/accounts_paged?namePrefix=My%20Vault"
		);
	}

	#[test]
	fn signed_uri_has_dot_segments_removed() {
		let client = recording_client(RecordingHttpClient::respond(200, "{}"));
		let request = signed_matches_wire(&client, "/v1/a/../transactions");

		assert_eq!(request.path, "/v1/transactions");
		assert_eq!(request.url.path(), "/v1/transactions");
	}

	#[test]
	fn base_path_prefix_is_signed_when_present() {
		let base_url = Url::parse("https://api.test/gateway").expect("Base URL should parse.");
		let client = <ApiClient<RecordingHttpClient>>::with_http_client(
			test_signer(),
			base_url,
			RecordingHttpClient::respond(200, "{}"),
		);
		let request = signed_matches_wire(&client, "/v1/supported_assets");

		assert_eq!(request.path, "/gateway/v1/supported_assets");
	}

	#[test]
	fn absolute_and_fragment_paths_are_rejected() {
		let client = recording_client(RecordingHttpClient::respond(200, "{}"));

		for path in ["https://evil.test/v1/x", "mailto:ops@api.test", "/v1/x#frag"] {
			let err = client.prepare(HttpMethod::Get, path, None).expect_err("Path must be rejected.");

			assert!(matches!(err, Error::Config(ConfigError::InvalidRequestPath { .. })), "{path}");
		}
	}

	#[tokio::test]
	async fn post_hashes_the_bytes_it_sends() {
		#[derive(Serialize)]
		#[serde(rename_all = "camelCase")]
		struct NewVault<'a> {
			name: &'a str,
			#[serde(rename = "hiddenOnUI")]
			hidden_on_ui: bool,
		}

		let transport = RecordingHttpClient::respond(200, r#"{"id":"7"}"#);
		let client = recording_client(transport.clone());
		let echo: Echo = client
			.post("/v1/vault/accounts", &NewVault { name: "MyVault", hidden_on_ui: true })
			.await
			.expect("POST should succeed.");

		assert_eq!(echo.id, "7");

		let recorded = transport.recorded();
		let request = recorded.first().expect("One request should be recorded.");
		let body = request.body.as_deref().expect("POST should carry a body.");

		assert_eq!(body, br#"{"name":"MyVault","hiddenOnUI":true}"#);
		assert_eq!(request.header("content-type"), Some("application/json"));

		let token = request
			.header("authorization")
			.and_then(|value| value.strip_prefix("Bearer "))
			.expect("Bearer header should be present.");
		let claims = verifier()
			.verify_request(token, "/v1/vault/accounts", Some(body))
			.expect("Token should be bound to the body.");

		assert_eq!(claims.body_hash, Some(body_hash(body)));
	}

	#[tokio::test]
	async fn non_success_status_is_an_http_error() {
		let client = recording_client(RecordingHttpClient::respond(401, "{\"code\":-7}"));
		let err = client.get_raw("/v1/vault/accounts_paged").await.expect_err("401 must fail.");

		match err {
			Error::Http(HttpError::Status { method, path, status, request_id, body }) => {
				assert_eq!(method, "GET");
				assert_eq!(path, "/v1/vault/accounts_paged");
				assert_eq!(status, 401);
				assert_eq!(request_id.as_deref(), Some("req-test"));
				assert_eq!(body, "{\"code\":-7}");
			},
			other => panic!("Unexpected error: {other:?}."),
		}
	}

	#[tokio::test]
	async fn decode_failures_carry_the_json_path() {
		let client = recording_client(RecordingHttpClient::respond(200, r#"{"id":7}"#));
		let err = client.get::<Echo>("/v1/vault/accounts/7").await.expect_err("Wrong type.");

		match err {
			Error::Decode { path, source } => {
				assert_eq!(path, "/v1/vault/accounts/7");
				assert_eq!(source.path().to_string(), "id");
			},
			other => panic!("Unexpected error: {other:?}."),
		}
	}

	#[tokio::test]
	async fn every_call_gets_a_fresh_nonce() {
		let transport = RecordingHttpClient::respond(200, "[]");
		let client = recording_client(transport.clone());

		for _ in 0..3 {
			client.get_raw("/v1/supported_assets").await.expect("GET should succeed.");
		}

		let nonces = transport
			.recorded()
			.iter()
			.map(|request| {
				let token = request
					.header("authorization")
					.and_then(|value| value.strip_prefix("Bearer "))
					.expect("Bearer header should be present.");

				verifier().verify(token).expect("Token should verify.").nonce
			})
			.collect::<std::collections::HashSet<_>>();

		assert_eq!(nonces.len(), 3);
	}
}
