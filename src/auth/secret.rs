//! Signed bearer token wrapper that redacts the compact JWT.

// crates.io
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
// self
use crate::{_prelude::*, auth::TokenClaims};

/// Signed compact JWT presented in the `Authorization` header.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);
impl BearerToken {
	pub(crate) fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the compact `header.payload.signature` string. Callers must avoid logging it.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Formats the `Authorization` header value.
	pub fn header_value(&self) -> String {
		format!("Bearer {}", self.0)
	}

	/// Decodes the payload segment without checking the signature.
	///
	/// Intended for diagnostics; use [`TokenVerifier`](crate::auth::TokenVerifier) to trust the
	/// claims.
	pub fn claims_unverified(&self) -> Option<TokenClaims> {
		let payload = self.0.split('.').nth(1)?;
		let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;

		serde_json::from_slice(&bytes).ok()
	}
}
impl AsRef<str> for BearerToken {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for BearerToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("BearerToken").field(&"<redacted>").finish()
	}
}
impl Display for BearerToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}
