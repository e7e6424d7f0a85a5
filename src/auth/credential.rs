//! RSA signing keys and the API credential that pairs one with an API key.

// crates.io
use jsonwebtoken::{Algorithm, EncodingKey, Header, errors::ErrorKind};
// self
use crate::{
	_prelude::*,
	auth::ApiKey,
	error::{SerializationError, SigningError},
};

/// Parsed RSA private key producing RS256 compact JWTs.
///
/// The PEM is parsed once; the resulting key is never mutated and is safe to share across
/// threads.
#[derive(Clone)]
pub struct SigningKey(EncodingKey);
impl SigningKey {
	/// Parses a PEM-encoded RSA private key (PKCS#1 or PKCS#8).
	pub fn from_pem(pem: impl AsRef<[u8]>) -> Result<Self, SigningError> {
		EncodingKey::from_rsa_pem(pem.as_ref())
			.map(Self)
			.map_err(|source| SigningError::InvalidKey { source })
	}

	/// Reads and parses a PEM-encoded RSA private key from disk.
	pub fn from_pem_file(path: impl AsRef<Path>) -> Result<Self, SigningError> {
		let path = path.as_ref();
		let pem = std::fs::read(path)
			.map_err(|source| SigningError::KeyRead { path: path.to_owned(), source })?;

		Self::from_pem(pem)
	}

	/// Signs any serializable payload as an RS256 compact JWT (`typ = JWT`).
	pub fn sign<T>(&self, payload: &T) -> Result<String>
	where
		T: Serialize,
	{
		jsonwebtoken::encode(&Header::new(Algorithm::RS256), payload, &self.0).map_err(|e| {
			if matches!(e.kind(), ErrorKind::Json(_)) {
				Error::from(SerializationError::Claims(e))
			} else {
				Error::from(SigningError::Crypto { source: e })
			}
		})
	}
}
impl Debug for SigningKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("SigningKey(<redacted>)")
	}
}

/// Immutable API credential: the API key plus the private key that signs its requests.
#[derive(Clone)]
pub struct Credential {
	api_key: ApiKey,
	key: SigningKey,
}
impl Credential {
	/// Pairs an API key with an already parsed signing key.
	pub fn new(api_key: ApiKey, key: SigningKey) -> Self {
		Self { api_key, key }
	}

	/// Parses a PEM-encoded RSA private key (PKCS#1 or PKCS#8).
	pub fn from_pem(api_key: ApiKey, pem: impl AsRef<[u8]>) -> Result<Self, SigningError> {
		Ok(Self::new(api_key, SigningKey::from_pem(pem)?))
	}

	/// Reads and parses a PEM-encoded RSA private key from disk.
	pub fn from_pem_file(api_key: ApiKey, path: impl AsRef<Path>) -> Result<Self, SigningError> {
		Ok(Self::new(api_key, SigningKey::from_pem_file(path)?))
	}

	/// API key bound into the `sub` claim and the `X-API-Key` header.
	pub fn api_key(&self) -> &ApiKey {
		&self.api_key
	}

	/// Private key used for request tokens.
	pub fn signing_key(&self) -> &SigningKey {
		&self.key
	}
}
impl Debug for Credential {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Credential")
			.field("api_key", &self.api_key)
			.field("private_key", &"<redacted>")
			.finish()
	}
}
