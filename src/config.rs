//! Client configuration: credentials, base URL, and transport settings.

// std
use std::{env, time::Duration as StdDuration};
// self
use crate::{
	_prelude::*,
	auth::{ApiKey, Credential},
	error::ConfigError,
};

/// Production API root.
pub const PRODUCTION_URL: &str = "https://api.fireblocks.io";
/// Sandbox API root.
pub const SANDBOX_URL: &str = "https://sandbox-api.fireblocks.io";

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "FIREBLOCKS_API_KEY";
/// Environment variable holding a path to the PEM private key.
pub const ENV_SECRET_KEY_PATH: &str = "FIREBLOCKS_SECRET_KEY_PATH";
/// Environment variable holding the PEM private key itself.
pub const ENV_SECRET_KEY: &str = "FIREBLOCKS_SECRET_KEY";
/// Environment variable overriding the API root.
pub const ENV_API_URL: &str = "FIREBLOCKS_API_URL";

const DEFAULT_TIMEOUT: StdDuration = StdDuration::from_secs(30);
const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Where the private key comes from.
#[derive(Clone)]
pub enum KeySource {
	/// PEM text held in memory.
	Pem(String),
	/// Path to a PEM file.
	File(PathBuf),
}
impl Debug for KeySource {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			Self::Pem(_) => f.write_str("Pem(<redacted>)"),
			Self::File(path) => f.debug_tuple("File").field(path).finish(),
		}
	}
}

/// Validated client configuration.
#[derive(Clone, Debug)]
pub struct ClientConfig {
	/// Parsed signing credential.
	pub credential: Credential,
	/// API root; signed paths are appended to it.
	pub base_url: Url,
	/// Per-request timeout applied by the transport.
	pub timeout: StdDuration,
	/// `User-Agent` sent with every request.
	pub user_agent: String,
}
impl ClientConfig {
	/// Starts a builder for the provided API key.
	pub fn builder(api_key: ApiKey) -> ClientConfigBuilder {
		ClientConfigBuilder::new(api_key)
	}

	/// Loads configuration from `FIREBLOCKS_*` environment variables.
	///
	/// `FIREBLOCKS_API_KEY` is required, plus either `FIREBLOCKS_SECRET_KEY_PATH` or
	/// `FIREBLOCKS_SECRET_KEY`. `FIREBLOCKS_API_URL` defaults to production.
	pub fn from_env() -> Result<Self> {
		Self::from_lookup(|name| env::var(name).ok().filter(|value| !value.is_empty()))
	}

	pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
	where
		F: Fn(&'static str) -> Option<String>,
	{
		let api_key = lookup(ENV_API_KEY).ok_or(ConfigError::MissingEnv { name: ENV_API_KEY })?;
		let mut builder = Self::builder(ApiKey::new(api_key.trim()).map_err(ConfigError::from)?);

		if let Some(path) = lookup(ENV_SECRET_KEY_PATH) {
			builder = builder.private_key_path(path);
		} else if let Some(pem) = lookup(ENV_SECRET_KEY) {
			builder = builder.private_key_pem(pem);
		} else {
			return Err(ConfigError::MissingEnv { name: ENV_SECRET_KEY_PATH }.into());
		}
		if let Some(url) = lookup(ENV_API_URL) {
			builder = builder.base_url_str(&url)?;
		}

		builder.build()
	}
}

/// Builder for [`ClientConfig`] values.
#[derive(Debug)]
pub struct ClientConfigBuilder {
	/// API key for the `sub` claim and `X-API-Key` header.
	pub api_key: ApiKey,
	/// Private key source.
	pub key: Option<KeySource>,
	/// API root (defaults to [`PRODUCTION_URL`]).
	pub base_url: Option<Url>,
	/// Request timeout (defaults to 30 seconds).
	pub timeout: StdDuration,
	/// `User-Agent` header value.
	pub user_agent: String,
}
impl ClientConfigBuilder {
	/// Creates a new builder seeded with the provided API key.
	pub fn new(api_key: ApiKey) -> Self {
		Self {
			api_key,
			key: None,
			base_url: None,
			timeout: DEFAULT_TIMEOUT,
			user_agent: DEFAULT_USER_AGENT.into(),
		}
	}

	/// Uses PEM text held in memory.
	pub fn private_key_pem(mut self, pem: impl Into<String>) -> Self {
		self.key = Some(KeySource::Pem(pem.into()));

		self
	}

	/// Reads the PEM from a file at build time.
	pub fn private_key_path(mut self, path: impl Into<PathBuf>) -> Self {
		self.key = Some(KeySource::File(path.into()));

		self
	}

	/// Sets the API root.
	pub fn base_url(mut self, url: Url) -> Self {
		self.base_url = Some(url);

		self
	}

	/// Parses and sets the API root.
	pub fn base_url_str(self, url: &str) -> Result<Self, ConfigError> {
		let url = Url::parse(url).map_err(|source| ConfigError::InvalidBaseUrl { source })?;

		Ok(self.base_url(url))
	}

	/// Targets the sandbox environment.
	pub fn sandbox(self) -> Result<Self, ConfigError> {
		self.base_url_str(SANDBOX_URL)
	}

	/// Overrides the request timeout.
	pub fn timeout(mut self, timeout: StdDuration) -> Self {
		self.timeout = timeout;

		self
	}

	/// Overrides the `User-Agent` header.
	pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
		self.user_agent = user_agent.into();

		self
	}

	/// Consumes the builder, loading the key and validating the URL.
	pub fn build(self) -> Result<ClientConfig> {
		let base_url = match self.base_url {
			Some(url) => url,
			None => Url::parse(PRODUCTION_URL)
				.map_err(|source| ConfigError::InvalidBaseUrl { source })?,
		};

		validate_base_url(&base_url)?;

		let credential = match self.key.ok_or(ConfigError::MissingPrivateKey)? {
			KeySource::Pem(pem) => Credential::from_pem(self.api_key, pem)?,
			KeySource::File(path) => Credential::from_pem_file(self.api_key, path)?,
		};

		Ok(ClientConfig { credential, base_url, timeout: self.timeout, user_agent: self.user_agent })
	}
}

fn validate_base_url(url: &Url) -> Result<(), ConfigError> {
	if url.query().is_some() || url.fragment().is_some() {
		return Err(ConfigError::BaseUrlHasQuery { url: url.to_string() });
	}
	if url.path() != "/" {
		return Err(ConfigError::BaseUrlHasPath { url: url.to_string() });
	}
	if url.scheme() == "https" || (url.scheme() == "http" && is_loopback(url)) {
		Ok(())
	} else {
		Err(ConfigError::InsecureBaseUrl { url: url.to_string() })
	}
}

fn is_loopback(url: &Url) -> bool {
	match url.host() {
		Some(url::Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
		Some(url::Host::Ipv4(addr)) => addr.is_loopback(),
		Some(url::Host::Ipv6(addr)) => addr.is_loopback(),
		None => false,
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::collections::HashMap;
	// self
	use super::*;
	use crate::{_preludet::*, error::SigningError};

	fn api_key() -> ApiKey {
		ApiKey::new(TEST_API_KEY).expect("Fixture API key should be valid.")
	}

	#[test]
	fn defaults_target_production() {
		let config = ClientConfig::builder(api_key())
			.private_key_pem(TEST_PRIVATE_KEY)
			.build()
			.expect("Config with PEM should build.");

		assert_eq!(config.base_url.as_str(), "https://api.fireblocks.io/");
		assert_eq!(config.timeout, DEFAULT_TIMEOUT);
		assert!(config.user_agent.starts_with("fireblocks-auth/"));
		assert_eq!(config.credential.api_key().as_ref(), TEST_API_KEY);
	}

	#[test]
	fn sandbox_and_loopback_urls_are_accepted() {
		let config = ClientConfig::builder(api_key())
			.private_key_pem(TEST_PRIVATE_KEY)
			.sandbox()
			.expect("Sandbox URL should parse.")
			.build()
			.expect("Sandbox config should build.");

		assert_eq!(config.base_url.as_str(), "https://sandbox-api.fireblocks.io/");

		for url in ["http://127.0.0.1:8080", "http://localhost:3000", "http://[::1]:9000"] {
			ClientConfig::builder(api_key())
				.private_key_pem(TEST_PRIVATE_KEY)
				.base_url_str(url)
				.expect("Loopback URL should parse.")
				.build()
				.expect("Loopback HTTP should be permitted.");
		}
	}

	#[test]
	fn rejects_insecure_or_decorated_urls() {
		let err = ClientConfig::builder(api_key())
			.private_key_pem(TEST_PRIVATE_KEY)
			.base_url_str("http://api.fireblocks.io")
			.expect("URL should parse.")
			.build()
			.expect_err("Plain HTTP to a remote host must be rejected.");

		assert!(matches!(err, Error::Config(ConfigError::InsecureBaseUrl { .. })));

		let err = ClientConfig::builder(api_key())
			.private_key_pem(TEST_PRIVATE_KEY)
			.base_url_str("https://api.fireblocks.io/?x=1")
			.expect("URL should parse.")
			.build()
			.expect_err("Query strings must be rejected.");

		assert!(matches!(err, Error::Config(ConfigError::BaseUrlHasQuery { .. })));

		let err = ClientConfig::builder(api_key())
			.private_key_pem(TEST_PRIVATE_KEY)
			.base_url_str("https://api.test/gateway")
			.expect("URL should parse.")
			.build()
			.expect_err("A path prefix would be sent but never signed.");

		assert!(matches!(err, Error::Config(ConfigError::BaseUrlHasPath { .. })));

		ClientConfig::builder(api_key())
			.private_key_pem(TEST_PRIVATE_KEY)
			.base_url_str("https://api.test/")
			.expect("URL should parse.")
			.build()
			.expect("A bare trailing slash is the root path.");
		assert!(matches!(
			ClientConfig::builder(api_key()).base_url_str("not a url"),
			Err(ConfigError::InvalidBaseUrl { .. })
		));
	}

	#[test]
	fn key_is_required_and_must_parse() {
		let err = ClientConfig::builder(api_key()).build().expect_err("Key is required.");

		assert!(matches!(err, Error::Config(ConfigError::MissingPrivateKey)));

		let err = ClientConfig::builder(api_key())
			.private_key_pem("garbage")
			.build()
			.expect_err("Garbage key must be rejected.");

		assert!(matches!(err, Error::Signing(SigningError::InvalidKey { .. })));
	}

	#[test]
	fn environment_lookup_prefers_key_path() {
		let path = std::env::temp_dir()
			.join(format!("fireblocks-auth-env-key-{}.pem", std::process::id()));

		std::fs::write(&path, TEST_PRIVATE_KEY).expect("Fixture key should be writable.");

		let vars = HashMap::from([
			(ENV_API_KEY, format!("{TEST_API_KEY}\n")),
			(ENV_SECRET_KEY_PATH, path.display().to_string()),
			(ENV_SECRET_KEY, "ignored".to_owned()),
			(ENV_API_URL, SANDBOX_URL.to_owned()),
		]);
		let config = ClientConfig::from_lookup(|name| vars.get(name).cloned());

		std::fs::remove_file(&path).expect("Fixture key should be removable.");

		let config = config.expect("Environment config should build.");

		assert_eq!(config.credential.api_key().as_ref(), TEST_API_KEY);
		assert_eq!(config.base_url.as_str(), "https://sandbox-api.fireblocks.io/");
	}

	#[test]
	fn environment_lookup_reports_missing_variables() {
		let err = ClientConfig::from_lookup(|_| None).expect_err("API key is required.");

		assert!(matches!(err, Error::Config(ConfigError::MissingEnv { name: ENV_API_KEY })));

		let err = ClientConfig::from_lookup(|name| (name == ENV_API_KEY).then(|| "k".to_owned()))
			.expect_err("Key material is required.");

		assert!(matches!(err, Error::Config(ConfigError::MissingEnv { name: ENV_SECRET_KEY_PATH })));

		let config = ClientConfig::from_lookup(|name| match name {
			ENV_API_KEY => Some("k".to_owned()),
			ENV_SECRET_KEY => Some(TEST_PRIVATE_KEY.to_owned()),
			_ => None,
		})
		.expect("Inline PEM should be accepted.");

		assert_eq!(config.base_url.as_str(), "https://api.fireblocks.io/");
	}
}
