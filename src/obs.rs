//! Optional observability helpers for connector operations.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit spans named `bitbucket_connector.op` carrying `op` plus the
//!   `server_url` or repository `fullname` involved, with a warn event on every failure.
//! - Enable `metrics` to increment `bitbucket_connector_op_total` (labels `provider`, `op`,
//!   `outcome`) and `bitbucket_connector_rejected_fullname_total` (label `shape`).

mod counter;
mod span;

pub use counter::*;
pub use span::*;

// self
use crate::_prelude::*;

/// Connector operations observed by the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConnectorOp {
	/// Descriptor assembly.
	Construct,
	/// Repository fullname parsing.
	ParseRepository,
	/// Parking a request token and issuing the authorize URL.
	BeginAuthorization,
	/// Recovering a parked request token after the user authorized it.
	CompleteAuthorization,
}
impl ConnectorOp {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ConnectorOp::Construct => "construct",
			ConnectorOp::ParseRepository => "parse_repository",
			ConnectorOp::BeginAuthorization => "begin_authorization",
			ConnectorOp::CompleteAuthorization => "complete_authorization",
		}
	}
}
impl Display for ConnectorOp {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpOutcome {
	/// Entry to a connector helper.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl OpOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			OpOutcome::Attempt => "attempt",
			OpOutcome::Success => "success",
			OpOutcome::Failure => "failure",
		}
	}
}
impl Display for OpOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
