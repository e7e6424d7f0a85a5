//! Claim set signed into every request token, plus lifecycle helpers.

// crates.io
use sha2::{Digest, Sha256};
// self
use crate::_prelude::*;

/// Validity window of every signed token.
pub const TOKEN_LIFETIME: Duration = Duration::seconds(55);

/// Lowercase-hex SHA-256 digest binding a token to one request body.
pub fn body_hash(body: &[u8]) -> String {
	hex::encode(Sha256::digest(body))
}

/// Lifecycle status of a claim set at a given instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenStatus {
	/// The issued-at instant is in the future.
	Pending,
	/// The token is inside its validity window.
	Active,
	/// The expiry instant has passed.
	Expired,
}

/// Claims carried by a request token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
	/// Request path (with query) the token is bound to.
	pub uri: String,
	/// Per-token unique value preventing replay.
	pub nonce: String,
	/// Issue time, seconds since the Unix epoch.
	pub iat: i64,
	/// Expiry time, seconds since the Unix epoch.
	pub exp: i64,
	/// API key of the caller.
	pub sub: String,
	/// Digest of the request body, present only when a body is sent.
	#[serde(rename = "bodyHash", default, skip_serializing_if = "Option::is_none")]
	pub body_hash: Option<String>,
}
impl TokenClaims {
	/// Builds a claim set issued at `issued_at` (truncated to whole seconds).
	pub fn new(
		uri: impl Into<String>,
		sub: impl Into<String>,
		nonce: impl Into<String>,
		body: Option<&[u8]>,
		issued_at: OffsetDateTime,
	) -> Self {
		let iat = issued_at.unix_timestamp();

		Self {
			uri: uri.into(),
			nonce: nonce.into(),
			iat,
			exp: iat + TOKEN_LIFETIME.whole_seconds(),
			sub: sub.into(),
			body_hash: body.map(body_hash),
		}
	}

	/// Issue instant; `None` if `iat` is outside the representable range.
	pub fn issued_at(&self) -> Option<OffsetDateTime> {
		OffsetDateTime::from_unix_timestamp(self.iat).ok()
	}

	/// Expiry instant; `None` if `exp` is outside the representable range.
	pub fn expires_at(&self) -> Option<OffsetDateTime> {
		OffsetDateTime::from_unix_timestamp(self.exp).ok()
	}

	/// Length of the validity window.
	pub fn lifetime(&self) -> Duration {
		Duration::seconds(self.exp - self.iat)
	}

	/// Returns `true` when the claims carry a digest matching `body`.
	pub fn matches_body(&self, body: Option<&[u8]>) -> bool {
		match (self.body_hash.as_deref(), body) {
			(None, None) => true,
			(Some(expected), Some(bytes)) => expected == body_hash(bytes),
			_ => false,
		}
	}

	/// Computes the lifecycle status at a given instant.
	pub fn status_at(&self, instant: OffsetDateTime) -> TokenStatus {
		let now = instant.unix_timestamp();

		if now < self.iat {
			return TokenStatus::Pending;
		}
		if now >= self.exp {
			return TokenStatus::Expired;
		}

		TokenStatus::Active
	}

	/// Convenience helper that checks the status using the current UTC instant.
	pub fn status(&self) -> TokenStatus {
		self.status_at(OffsetDateTime::now_utc())
	}
}
