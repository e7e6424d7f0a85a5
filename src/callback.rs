//! Co-signer callback handler primitives.
//!
//! The co-signer posts an RS256 JWT describing a pending request, signed with its own key. A
//! handler verifies it with the co-signer's public key and answers with an RS256 JWT of the form
//! `{"action", "requestId", "rejectionReason"}` signed with the handler's private key. The
//! signed response is sent back as the plain-text HTTP body.

// self
use crate::{
	_prelude::*,
	auth::{SigningKey, TokenVerifier, VerifyError},
};

/// Decision returned to the co-signer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CallbackAction {
	/// Let the co-signer sign the request.
	Approve,
	/// Refuse the request.
	Reject,
	/// Defer to the workspace's other policies.
	Ignore,
}
impl CallbackAction {
	/// Returns the wire label.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallbackAction::Approve => "APPROVE",
			CallbackAction::Reject => "REJECT",
			CallbackAction::Ignore => "IGNORE",
		}
	}
}
impl Display for CallbackAction {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Verified co-signer request. Only `requestId` is interpreted; everything else is kept as-is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallbackRequest {
	/// Identifier echoed back in the response.
	pub request_id: String,
	/// Remaining payload fields (transaction details, timestamps, ...).
	#[serde(flatten)]
	pub details: serde_json::Map<String, serde_json::Value>,
}

/// Response payload signed back to the co-signer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallbackResponse {
	/// Decision.
	pub action: CallbackAction,
	/// Identifier of the request being answered.
	pub request_id: String,
	/// Reason shown for non-approvals; serialized as `null` when absent.
	pub rejection_reason: Option<String>,
}
impl CallbackResponse {
	/// Approves the request.
	pub fn approve(request_id: impl Into<String>) -> Self {
		Self { action: CallbackAction::Approve, request_id: request_id.into(), rejection_reason: None }
	}

	/// Rejects the request with a reason.
	pub fn reject(request_id: impl Into<String>, reason: impl Into<String>) -> Self {
		Self {
			action: CallbackAction::Reject,
			request_id: request_id.into(),
			rejection_reason: Some(reason.into()),
		}
	}

	/// Leaves the decision to other policies.
	pub fn ignore(request_id: impl Into<String>) -> Self {
		Self { action: CallbackAction::Ignore, request_id: request_id.into(), rejection_reason: None }
	}

	/// Maps a tri-state decision: `Some(true)` approves, `Some(false)` rejects, `None` ignores.
	///
	/// Anything short of an approval carries `reason`.
	pub fn from_decision(
		request_id: impl Into<String>,
		decision: Option<bool>,
		reason: impl Into<String>,
	) -> Self {
		let action = match decision {
			Some(true) => return Self::approve(request_id),
			Some(false) => CallbackAction::Reject,
			None => CallbackAction::Ignore,
		};

		Self { action, request_id: request_id.into(), rejection_reason: Some(reason.into()) }
	}
}

/// Verifies co-signer requests and signs the responses.
#[derive(Clone, Debug)]
pub struct CallbackHandler {
	key: SigningKey,
	cosigner: TokenVerifier,
}
impl CallbackHandler {
	/// Pairs the handler's private key with the co-signer's public key.
	pub fn new(key: SigningKey, cosigner: TokenVerifier) -> Self {
		Self { key, cosigner }
	}

	/// Verifies a raw request body and decodes it as a [`CallbackRequest`].
	pub fn authenticate(&self, body: &str) -> Result<CallbackRequest, VerifyError> {
		self.authenticate_as(body)
	}

	/// Verifies a raw request body and decodes it into a caller-defined shape.
	pub fn authenticate_as<T>(&self, body: &str) -> Result<T, VerifyError>
	where
		T: DeserializeOwned,
	{
		self.cosigner.verify_as(body.trim())
	}

	/// Signs a response, returning the compact JWT to send as the response body.
	pub fn respond(&self, response: &CallbackResponse) -> Result<String> {
		self.key.sign(response)
	}
}
