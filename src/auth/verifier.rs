//! Relying-party verification of request tokens and other RS256 payloads.
//!
//! The service performs these checks on its side; the verifier mirrors them so mock servers,
//! callback handlers, and tests can confirm a token is well formed before it leaves the process.

// crates.io
use jsonwebtoken::{Algorithm, DecodingKey, Validation, errors::ErrorKind};
// self
use crate::{
	_prelude::*,
	auth::{TokenClaims, TokenStatus},
};

/// Reasons a token is rejected by [`TokenVerifier`].
#[derive(Debug, ThisError)]
pub enum VerifyError {
	/// Public key is not a valid PEM-encoded RSA key.
	#[error("Public key is not a valid PEM-encoded RSA key.")]
	InvalidKey(#[source] jsonwebtoken::errors::Error),
	/// Token expiry has passed.
	#[error("Token has expired.")]
	Expired,
	/// Token claims an issue time in the future.
	#[error("Token is not yet valid.")]
	NotYetValid,
	/// Signature does not match the public key.
	#[error("Token signature is invalid.")]
	InvalidSignature,
	/// Token could not be decoded.
	#[error("Token could not be decoded.")]
	Malformed(#[source] jsonwebtoken::errors::Error),
	/// Token is bound to a different URI.
	#[error("Token is bound to `{claimed}`, not `{actual}`.")]
	UriMismatch {
		/// URI in the claims.
		claimed: String,
		/// URI of the request received.
		actual: String,
	},
	/// `bodyHash` does not match the request body.
	#[error("Token body hash does not match the request body.")]
	BodyHashMismatch,
}

/// Verifies RS256 tokens against a public key.
#[derive(Clone)]
pub struct TokenVerifier {
	key: DecodingKey,
	request_validation: Validation,
	payload_validation: Validation,
}
impl TokenVerifier {
	/// Parses a PEM-encoded RSA public key.
	pub fn from_public_pem(pem: impl AsRef<[u8]>) -> Result<Self, VerifyError> {
		let key = DecodingKey::from_rsa_pem(pem.as_ref()).map_err(VerifyError::InvalidKey)?;
		let mut request_validation = Validation::new(Algorithm::RS256);

		request_validation.leeway = 0;
		request_validation.set_required_spec_claims(&["exp", "iat", "sub"]);

		let mut payload_validation = Validation::new(Algorithm::RS256);

		payload_validation.leeway = 0;
		payload_validation.set_required_spec_claims::<&str>(&[]);

		Ok(Self { key, request_validation, payload_validation })
	}

	/// Checks signature and the 55-second window, returning the trusted claims.
	///
	/// A token is accepted from `iat` up to, but not including, `exp`.
	pub fn verify(&self, token: &str) -> Result<TokenClaims, VerifyError> {
		let claims = jsonwebtoken::decode::<TokenClaims>(token, &self.key, &self.request_validation)
			.map(|data| data.claims)
			.map_err(decode_error)?;

		match claims.status_at(OffsetDateTime::now_utc()) {
			TokenStatus::Active => Ok(claims),
			TokenStatus::Pending => Err(VerifyError::NotYetValid),
			TokenStatus::Expired => Err(VerifyError::Expired),
		}
	}

	/// Verifies the token and checks it is bound to the request actually received.
	pub fn verify_request(
		&self,
		token: &str,
		uri: &str,
		body: Option<&[u8]>,
	) -> Result<TokenClaims, VerifyError> {
		let claims = self.verify(token)?;

		if claims.uri != uri {
			return Err(VerifyError::UriMismatch { claimed: claims.uri, actual: uri.to_owned() });
		}
		if !claims.matches_body(body) {
			return Err(VerifyError::BodyHashMismatch);
		}

		Ok(claims)
	}

	/// Verifies an arbitrary signed payload, such as a co-signer callback request.
	///
	/// No claim is required. `exp` is enforced when present and an `iat` in the future is
	/// rejected.
	pub fn verify_as<T>(&self, token: &str) -> Result<T, VerifyError>
	where
		T: DeserializeOwned,
	{
		let payload =
			jsonwebtoken::decode::<serde_json::Value>(token, &self.key, &self.payload_validation)
				.map(|data| data.claims)
				.map_err(decode_error)?;

		if payload
			.get("iat")
			.and_then(serde_json::Value::as_i64)
			.is_some_and(|iat| iat > OffsetDateTime::now_utc().unix_timestamp())
		{
			return Err(VerifyError::NotYetValid);
		}

		serde_json::from_value(payload).map_err(|e| VerifyError::Malformed(e.into()))
	}
}
impl Debug for TokenVerifier {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("TokenVerifier(..)")
	}
}

fn decode_error(e: jsonwebtoken::errors::Error) -> VerifyError {
	if matches!(e.kind(), ErrorKind::ExpiredSignature) {
		VerifyError::Expired
	} else if matches!(e.kind(), ErrorKind::InvalidSignature) {
		VerifyError::InvalidSignature
	} else {
		VerifyError::Malformed(e)
	}
}
