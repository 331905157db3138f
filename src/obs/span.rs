// self
use crate::{
	_prelude::*,
	obs::{self, ConnectorOp, OpOutcome},
};

/// Span scoped to one connector operation and the server or fullname it concerns.
///
/// With `tracing` disabled the span only remembers its operation so outcomes still reach
/// the metrics counters.
#[derive(Clone, Debug)]
pub struct OpSpan {
	op: ConnectorOp,
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl OpSpan {
	/// Opens a span for an operation against `server_url`.
	pub fn for_server(op: ConnectorOp, server_url: &str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::debug_span!(
				"bitbucket_connector.op",
				op = op.as_str(),
				server_url,
				fullname = tracing::field::Empty,
			);

			Self { op, span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = server_url;

			Self { op }
		}
	}

	/// Opens a span for parsing `fullname`.
	pub fn for_fullname(fullname: &str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::debug_span!(
				"bitbucket_connector.op",
				op = ConnectorOp::ParseRepository.as_str(),
				server_url = tracing::field::Empty,
				fullname,
			);

			Self { op: ConnectorOp::ParseRepository, span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = fullname;

			Self { op: ConnectorOp::ParseRepository }
		}
	}

	/// Operation this span tracks.
	pub fn op(&self) -> ConnectorOp {
		self.op
	}

	/// Runs a synchronous section inside the span.
	pub fn run<T>(&self, f: impl FnOnce() -> T) -> T {
		#[cfg(feature = "tracing")]
		{
			self.span.in_scope(f)
		}
		#[cfg(not(feature = "tracing"))]
		{
			f()
		}
	}

	/// Awaits `fut` inside the span without holding a guard across `.await` points.
	pub async fn run_async<Fut>(&self, fut: Fut) -> Fut::Output
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone()).await
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut.await
		}
	}

	/// Counts an attempt.
	pub fn attempt(&self) {
		obs::record_op_outcome(self.op, OpOutcome::Attempt);
	}

	/// Counts the outcome of `result`, logging the error on failure.
	pub fn finish<T, E>(&self, result: &Result<T, E>)
	where
		E: Display,
	{
		match result {
			Ok(_) => obs::record_op_outcome(self.op, OpOutcome::Success),
			Err(e) => {
				#[cfg(feature = "tracing")]
				self.span.in_scope(|| tracing::warn!(error = %e, "Connector operation failed."));
				#[cfg(not(feature = "tracing"))]
				let _ = e;

				obs::record_op_outcome(self.op, OpOutcome::Failure);
			},
		}
	}
}
