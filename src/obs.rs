//! Optional observability helpers for strategy flows.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `freedomworks_auth.flow` with the
//!   `strategy` and `stage` fields.
//! - Enable `metrics` to increment the `freedomworks_auth_flow_total` counter for every
//!   attempt/success/failure, labeled by `strategy`, `stage`, and `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Steps of the OAuth 1.0a login observed by the strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowStage {
	/// Temporary credentials + redirect.
	RequestToken,
	/// Verifier exchange on the provider callback.
	AccessToken,
	/// Signed profile fetch and normalization.
	UserProfile,
	/// Caller-supplied verify callback.
	Verify,
}
impl FlowStage {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FlowStage::RequestToken => "request_token",
			FlowStage::AccessToken => "access_token",
			FlowStage::UserProfile => "user_profile",
			FlowStage::Verify => "verify",
		}
	}
}
impl Display for FlowStage {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowOutcome {
	/// Entry to a stage.
	Attempt,
	/// Successful completion.
	Success,
	/// Error propagated back to the caller.
	Failure,
}
impl FlowOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FlowOutcome::Attempt => "attempt",
			FlowOutcome::Success => "success",
			FlowOutcome::Failure => "failure",
		}
	}
}
impl Display for FlowOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Runs `fut` inside a stage span and records attempt + success/failure around it.
pub(crate) async fn observe<T, E, Fut>(strategy: &str, stage: FlowStage, fut: Fut) -> Result<T, E>
where
	Fut: Future<Output = Result<T, E>>,
{
	let span = FlowSpan::new(strategy, stage);

	record_flow_outcome(strategy, stage, FlowOutcome::Attempt);

	let result = span.instrument(fut).await;

	match &result {
		Ok(_) => record_flow_outcome(strategy, stage, FlowOutcome::Success),
		Err(_) => record_flow_outcome(strategy, stage, FlowOutcome::Failure),
	}

	result
}
