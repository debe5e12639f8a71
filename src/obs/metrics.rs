// self
use crate::{obs::CallOutcome, provider::ProviderKind};

/// Records a provider query outcome via the global metrics recorder (when enabled).
pub fn record_query_outcome(provider: ProviderKind, outcome: CallOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"social_gateway_query_total",
			"provider" => provider.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (provider, outcome);
	}
}

/// Records an SSO operation outcome via the global metrics recorder (when enabled).
pub fn record_sso_outcome(op: &'static str, outcome: CallOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"social_gateway_sso_total",
			"op" => op,
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (op, outcome);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn recorders_noop_without_metrics() {
		record_query_outcome(ProviderKind::GooglePlus, CallOutcome::Failure);
		record_sso_outcome("login", CallOutcome::Attempt);
	}
}
