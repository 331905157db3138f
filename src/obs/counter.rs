// self
use crate::obs::{ConnectorOp, OpOutcome};

const PROVIDER_LABEL: &str = "bitbucket";

/// Records an operation outcome via the global metrics recorder (when enabled).
pub fn record_op_outcome(op: ConnectorOp, outcome: OpOutcome) {
	#[cfg(feature = "metrics")]
	metrics::counter!(
		"bitbucket_connector_op_total",
		"provider" => PROVIDER_LABEL,
		"op" => op.as_str(),
		"outcome" => outcome.as_str()
	)
	.increment(1);

	#[cfg(not(feature = "metrics"))]
	let _ = (PROVIDER_LABEL, op, outcome);
}

/// Records a rejected repository fullname, labeled by its segment count.
pub fn record_rejected_fullname(segments: usize) {
	#[cfg(feature = "metrics")]
	metrics::counter!(
		"bitbucket_connector_rejected_fullname_total",
		"shape" => rejection_shape(segments)
	)
	.increment(1);

	#[cfg(not(feature = "metrics"))]
	let _ = rejection_shape(segments);
}

/// Classifies a fullname that did not split into exactly two segments.
pub fn rejection_shape(segments: usize) -> &'static str {
	match segments {
		0 | 1 => "missing_separator",
		2 => "well_formed",
		_ => "extra_separator",
	}
}
