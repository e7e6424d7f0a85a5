// self
use crate::obs::CallOutcome;

/// Records a call outcome via the global metrics recorder (when enabled).
pub fn record_call_outcome(operation: &'static str, outcome: CallOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"fireblocks_auth_call_total",
			"operation" => operation,
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (operation, outcome);
	}
}

/// Counts a received response by status class.
pub fn record_response_status(operation: &'static str, status: u16) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"fireblocks_auth_response_total",
			"operation" => operation,
			"class" => crate::obs::status_class(status)
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (operation, status);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn recording_without_a_recorder_is_a_noop() {
		record_call_outcome("vault_accounts_paged", CallOutcome::Rejected);
		record_response_status("vault_accounts_paged", 401);
	}
}
