//! Optional observability helpers for API calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `fireblocks_auth.call` with the `operation`
//!   (endpoint helper) and `method` fields, plus `status` and `outcome` once known.
//! - Enable `metrics` to increment `fireblocks_auth_call_total` (labeled `operation` and
//!   `outcome`) and `fireblocks_auth_response_total` (labeled `operation` and status `class`).

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::{_prelude::*, error::HttpError};

/// Outcome labels recorded for each call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Entry to a client call.
	Attempt,
	/// The service answered 2xx.
	Success,
	/// The service answered with a non-success status (bad token, validation, ...).
	Rejected,
	/// The request was signed but never got an answer.
	Unreachable,
	/// The request failed locally before anything was sent (path, body, or signing).
	Unsent,
}
impl CallOutcome {
	/// Classifies the result of a signed call.
	pub fn of<T>(result: &Result<T>) -> Self {
		match result {
			Ok(_) => Self::Success,
			Err(Error::Http(HttpError::Status { .. })) => Self::Rejected,
			Err(Error::Http(HttpError::Transport(_))) => Self::Unreachable,
			Err(_) => Self::Unsent,
		}
	}

	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::Rejected => "rejected",
			CallOutcome::Unreachable => "unreachable",
			CallOutcome::Unsent => "unsent",
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Buckets an HTTP status into its class label (`2xx`, `4xx`, ...).
pub fn status_class(status: u16) -> &'static str {
	match status {
		100..=199 => "1xx",
		200..=299 => "2xx",
		300..=399 => "3xx",
		400..=499 => "4xx",
		500..=599 => "5xx",
		_ => "other",
	}
}
