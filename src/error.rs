//! Crate-level error types shared by the signer, configuration, and client layers.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Key material or signature generation failed.
	#[error(transparent)]
	Signing(#[from] SigningError),
	/// A request body or claim set could not be encoded.
	#[error(transparent)]
	Serialization(#[from] SerializationError),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// The HTTP call failed.
	#[error(transparent)]
	Http(#[from] HttpError),
	/// A successful response body did not match the expected shape.
	#[error("Response from {path} could not be decoded.")]
	Decode {
		/// Request path whose response failed to decode.
		path: String,
		/// Structured parsing failure including the JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}

/// Failures raised while loading key material or producing a signature.
#[derive(Debug, ThisError)]
pub enum SigningError {
	/// Private key file could not be read.
	#[error("Private key could not be read from {}.", path.display())]
	KeyRead {
		/// Path that was read.
		path: PathBuf,
		/// Underlying IO failure.
		#[source]
		source: std::io::Error,
	},
	/// Private key is not a valid PEM-encoded RSA key.
	#[error("Private key is not a valid PEM-encoded RSA key.")]
	InvalidKey {
		/// Parser failure.
		#[source]
		source: jsonwebtoken::errors::Error,
	},
	/// The request URI to bind into the token was empty.
	#[error("Token URI cannot be empty.")]
	EmptyUri,
	/// The signing primitive rejected the claim set.
	#[error("RS256 signing failed.")]
	Crypto {
		/// Underlying signing failure.
		#[source]
		source: jsonwebtoken::errors::Error,
	},
}

/// Failures raised while encoding request bodies or claim sets.
#[derive(Debug, ThisError)]
pub enum SerializationError {
	/// The request body could not be serialized to JSON.
	#[error("Request body could not be serialized to JSON.")]
	Body(#[source] serde_json::Error),
	/// The claim set could not be serialized.
	#[error("Token claims could not be serialized.")]
	Claims(#[source] jsonwebtoken::errors::Error),
}

/// Configuration and validation failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// No private key was supplied.
	#[error("A private key (PEM or file path) is required.")]
	MissingPrivateKey,
	/// A required environment variable is absent.
	#[error("Environment variable `{name}` is not set.")]
	MissingEnv {
		/// Variable name.
		name: &'static str,
	},
	/// API key failed validation.
	#[error(transparent)]
	InvalidApiKey(#[from] crate::auth::ApiKeyError),
	/// Base URL cannot be parsed.
	#[error("Base URL is invalid.")]
	InvalidBaseUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Base URL must use HTTPS unless it points at a loopback host.
	#[error("Base URL must use HTTPS: {url}.")]
	InsecureBaseUrl {
		/// URL that failed validation.
		url: String,
	},
	/// Base URL carries a query or fragment that would corrupt signed URIs.
	#[error("Base URL must not carry a query or fragment: {url}.")]
	BaseUrlHasQuery {
		/// URL that failed validation.
		url: String,
	},
	/// Base URL carries a path prefix that signed URIs would not cover.
	#[error("Base URL must not carry a path: {url}.")]
	BaseUrlHasPath {
		/// URL that failed validation.
		url: String,
	},
	/// A request path is absolute, carries a fragment, or escapes the base URL's origin.
	#[error("Request path `{path}` must be relative to the base URL.")]
	InvalidRequestPath {
		/// Rejected path.
		path: String,
	},
	/// A path segment supplied to an endpoint helper is empty or not URL-safe.
	#[error("The {name} path parameter `{value}` must be non-empty and URL-safe.")]
	InvalidPathParam {
		/// Parameter name.
		name: &'static str,
		/// Rejected value.
		value: String,
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

/// The HTTP call failed.
#[derive(Debug, ThisError)]
pub enum HttpError {
	/// Transport could not deliver the request or read the response.
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Service answered with a non-success status.
	#[error("{method} {path} failed with status {status}.")]
	Status {
		/// HTTP method label.
		method: &'static str,
		/// Request path (including query).
		path: String,
		/// HTTP status code.
		status: u16,
		/// Service-assigned request identifier, when returned.
		request_id: Option<String>,
		/// Raw response body, lossily decoded as UTF-8.
		body: String,
	},
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Header value could not be encoded for the wire.
	#[error("Header `{name}` contains characters that cannot be sent.")]
	InvalidHeader {
		/// Header name.
		name: &'static str,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
impl From<TransportError> for Error {
	fn from(e: TransportError) -> Self {
		Self::Http(e.into())
	}
}
