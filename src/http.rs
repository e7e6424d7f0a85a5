//! Transport primitives for signed API calls.
//!
//! [`ApiClient`](crate::client::ApiClient) builds a fully signed [`ApiRequest`] (bearer token,
//! API key, and body bytes already fixed) and hands it to an [`ApiHttpClient`]. Transports only
//! move bytes; they never alter the path or body, because either change would invalidate the
//! token's `uri` or `bodyHash` claim.

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// crates.io
#[cfg(feature = "reqwest")]
use reqwest::{
	Method,
	header::{HeaderMap, HeaderName, HeaderValue},
	redirect::Policy,
};
// self
use crate::{_prelude::*, error::TransportError};
#[cfg(feature = "reqwest")] use crate::{config::ClientConfig, error::ConfigError};

/// Header carrying the signed bearer token.
pub const AUTHORIZATION_HEADER: &str = "authorization";
/// Header carrying the caller's API key.
pub const API_KEY_HEADER: &str = "x-api-key";
/// Header declaring the body media type.
pub const CONTENT_TYPE_HEADER: &str = "content-type";
/// Header in which the service echoes its request identifier.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// HTTP methods used by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
	/// Read-only call without a body.
	Get,
	/// Call carrying a JSON body.
	Post,
}
impl HttpMethod {
	/// Returns the wire label.
	pub const fn as_str(self) -> &'static str {
		match self {
			HttpMethod::Get => "GET",
			HttpMethod::Post => "POST",
		}
	}
}
impl Display for HttpMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Fully signed outbound request.
#[derive(Clone)]
pub struct ApiRequest {
	/// HTTP method.
	pub method: HttpMethod,
	/// Absolute URL; its path and query are what the token signs.
	pub url: Url,
	/// Path and query exactly as bound into the token's `uri` claim.
	pub path: String,
	/// Header name/value pairs; names are lowercase.
	pub headers: Vec<(&'static str, String)>,
	/// Body bytes exactly as hashed into the token's `bodyHash` claim.
	pub body: Option<Vec<u8>>,
}
impl ApiRequest {
	/// Looks up a header value by case-insensitive name.
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(key, _)| key.eq_ignore_ascii_case(name))
			.map(|(_, value)| value.as_str())
	}
}
impl Debug for ApiRequest {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		let headers = self
			.headers
			.iter()
			.map(|(name, value)| {
				if *name == AUTHORIZATION_HEADER { (*name, "<redacted>") } else { (*name, value.as_str()) }
			})
			.collect::<Vec<_>>();

		f.debug_struct("ApiRequest")
			.field("method", &self.method)
			.field("url", &self.url.as_str())
			.field("headers", &headers)
			.field("body_len", &self.body.as_ref().map(Vec::len))
			.finish()
	}
}

/// Raw response returned by a transport.
#[derive(Clone, Debug, Default)]
pub struct ApiResponse {
	/// HTTP status code.
	pub status: u16,
	/// Value of the `X-Request-ID` response header, if any.
	pub request_id: Option<String>,
	/// Response body bytes.
	pub body: Vec<u8>,
}
impl ApiResponse {
	/// Returns `true` for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Boxed future returned by [`ApiHttpClient::execute`].
pub type HttpFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, TransportError>> + 'a + Send>>;

/// Abstraction over HTTP transports able to deliver signed requests.
///
/// Implementations must be `Send + Sync + 'static` so a single transport can be shared behind an
/// `Arc` by every client clone. Non-2xx responses are returned as [`ApiResponse`] values; only
/// delivery failures become [`TransportError`]s.
pub trait ApiHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Sends the request and collects the full response body.
	fn execute(&self, request: ApiRequest) -> HttpFuture<'_, ApiResponse>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// Redirects are never followed: a redirected request would reach a path other than the one
/// bound into its token.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Builds a client honoring the configured timeout and user agent.
	pub fn from_config(config: &ClientConfig) -> Result<Self, ConfigError> {
		let client = ReqwestClient::builder()
			.timeout(config.timeout)
			.user_agent(config.user_agent.as_str())
			.redirect(Policy::none())
			.build()?;

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
impl ApiHttpClient for ReqwestHttpClient {
	fn execute(&self, request: ApiRequest) -> HttpFuture<'_, ApiResponse> {
		Box::pin(async move {
			let method = match request.method {
				HttpMethod::Get => Method::GET,
				HttpMethod::Post => Method::POST,
			};
			let headers = header_map(&request.headers)?;
			let mut builder = self.0.request(method, request.url).headers(headers);

			if let Some(body) = request.body {
				builder = builder.body(body);
			}

			let response = builder.send().await?;
			let status = response.status().as_u16();
			let request_id = response
				.headers()
				.get(REQUEST_ID_HEADER)
				.and_then(|value| value.to_str().ok())
				.map(str::to_owned);
			let body = response.bytes().await?.to_vec();

			Ok(ApiResponse { status, request_id, body })
		})
	}
}

#[cfg(feature = "reqwest")]
fn header_map(headers: &[(&'static str, String)]) -> Result<HeaderMap, TransportError> {
	let mut map = HeaderMap::with_capacity(headers.len());

	for &(name, ref value) in headers {
		let key = HeaderName::from_bytes(name.as_bytes())
			.map_err(|_| TransportError::InvalidHeader { name })?;
		let value =
			HeaderValue::from_str(value).map_err(|_| TransportError::InvalidHeader { name })?;

		map.insert(key, value);
	}

	Ok(map)
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn request() -> ApiRequest {
		ApiRequest {
			method: HttpMethod::Post,
			url: Url::parse("https://api.test/v1/vault/accounts").expect("URL should parse."),
			path: "/v1/vault/accounts".into(),
			headers: vec![
				(AUTHORIZATION_HEADER, "Bearer secret.token.value".into()),
				(API_KEY_HEADER, "key".into()),
			],
			body: Some(b"{}".to_vec()),
		}
	}

	#[test]
	fn header_lookup_ignores_case() {
		let request = request();

		assert_eq!(request.header("X-API-Key"), Some("key"));
		assert_eq!(request.header("Content-Type"), None);
	}

	#[test]
	fn debug_redacts_bearer_token() {
		let rendered = format!("{:?}", request());

		assert!(!rendered.contains("secret.token.value"));
		assert!(rendered.contains("<redacted>"));
		assert!(rendered.contains("body_len: Some(2)"));
	}

	#[test]
	fn success_covers_2xx_only() {
		assert!(ApiResponse { status: 201, ..Default::default() }.is_success());
		assert!(!ApiResponse { status: 302, ..Default::default() }.is_success());
		assert!(!ApiResponse { status: 401, ..Default::default() }.is_success());
	}

	#[cfg(feature = "reqwest")]
	#[test]
	fn header_map_rejects_unsendable_values() {
		let err = header_map(&[(API_KEY_HEADER, "line\nbreak".into())])
			.expect_err("Newlines cannot be sent in headers.");

		assert!(matches!(err, TransportError::InvalidHeader { name: API_KEY_HEADER }));
		assert_eq!(
			header_map(&[(API_KEY_HEADER, "key".into())]).expect("Plain values are valid.").len(),
			1
		);
	}
}
