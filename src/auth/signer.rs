//! RS256 request-token signer.
//!
//! Every call builds a fresh [`TokenClaims`] (new nonce, `iat` = now, `exp` = `iat` + 55 s,
//! optional `bodyHash`) and signs it immediately. The signer holds no mutable state, so one
//! instance can be cloned into or shared across any number of threads.

// crates.io
use uuid::Uuid;
// self
use crate::{
	_prelude::*,
	auth::{ApiKey, BearerToken, Credential, TokenClaims},
	error::SigningError,
};

/// Signs request tokens with a shared [`Credential`].
#[derive(Clone, Debug)]
pub struct TokenSigner {
	credential: Arc<Credential>,
}
impl TokenSigner {
	/// Wraps a credential for signing.
	pub fn new(credential: impl Into<Arc<Credential>>) -> Self {
		Self { credential: credential.into() }
	}

	/// API key bound into every token.
	pub fn api_key(&self) -> &ApiKey {
		self.credential.api_key()
	}

	/// Signs a token for `path` (and `body`, when one is sent) issued now.
	pub fn sign(&self, path: &str, body: Option<&[u8]>) -> Result<BearerToken> {
		self.sign_at(path, body, OffsetDateTime::now_utc())
	}

	/// Signs a token issued at an explicit instant.
	pub fn sign_at(
		&self,
		path: &str,
		body: Option<&[u8]>,
		issued_at: OffsetDateTime,
	) -> Result<BearerToken> {
		let claims = self.claims(path, body, issued_at)?;

		self.sign_claims(&claims)
	}

	/// Builds the claim set for a request without signing it.
	pub fn claims(
		&self,
		path: &str,
		body: Option<&[u8]>,
		issued_at: OffsetDateTime,
	) -> Result<TokenClaims> {
		if path.is_empty() {
			return Err(SigningError::EmptyUri.into());
		}

		let nonce = Uuid::new_v4().to_string();

		Ok(TokenClaims::new(path, self.api_key().as_ref(), nonce, body, issued_at))
	}

	/// Signs a prepared claim set with RS256.
	pub fn sign_claims(&self, claims: &TokenClaims) -> Result<BearerToken> {
		self.credential.signing_key().sign(claims).map(BearerToken::new)
	}
}
