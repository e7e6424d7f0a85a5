//! API key identifier issued by the service and bound into every token's `sub` claim.

// std
use std::ops::Deref;
// self
use crate::_prelude::*;

const API_KEY_MAX_LEN: usize = 128;

/// Error returned when API key validation fails.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum ApiKeyError {
	/// The key was empty.
	#[error("API key cannot be empty.")]
	Empty,
	/// The key contains whitespace characters.
	#[error("API key contains whitespace.")]
	ContainsWhitespace,
	/// The key exceeded the allowed character count.
	#[error("API key exceeds {max} characters.")]
	TooLong {
		/// Maximum permitted character count.
		max: usize,
	},
}

/// Opaque API key sent as `X-API-Key` and used as the token subject.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ApiKey(String);
impl ApiKey {
	/// Creates a new API key after validation.
	pub fn new(value: impl AsRef<str>) -> Result<Self, ApiKeyError> {
		let view = value.as_ref();

		validate_view(view)?;

		Ok(Self(view.to_owned()))
	}
}
impl Deref for ApiKey {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl AsRef<str> for ApiKey {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl From<ApiKey> for String {
	fn from(value: ApiKey) -> Self {
		value.0
	}
}
impl TryFrom<String> for ApiKey {
	type Error = ApiKeyError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		validate_view(&value)?;

		Ok(Self(value))
	}
}
impl Debug for ApiKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "ApiKey({})", self.0)
	}
}
impl Display for ApiKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}
impl FromStr for ApiKey {
	type Err = ApiKeyError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}

fn validate_view(view: &str) -> Result<(), ApiKeyError> {
	if view.is_empty() {
		return Err(ApiKeyError::Empty);
	}
	if view.chars().any(char::is_whitespace) {
		return Err(ApiKeyError::ContainsWhitespace);
	}
	if view.len() > API_KEY_MAX_LEN {
		return Err(ApiKeyError::TooLong { max: API_KEY_MAX_LEN });
	}

	Ok(())
}
