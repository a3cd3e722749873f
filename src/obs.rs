//! Optional observability helpers for the token and meeting stages.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `meeting_broker.flow` with the `stage` field,
//!   plus a `warn` event whenever a stage fails.
//! - Enable `metrics` to increment the `meeting_broker_stage_total` counter for every
//!   attempt/success/failure, labeled by `stage` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Request stages driven by the meeting client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowStage {
	/// Credential exchange against the token endpoint.
	AccessToken,
	/// Meeting creation against the provider API.
	CreateMeeting,
}
impl FlowStage {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FlowStage::AccessToken => "access_token",
			FlowStage::CreateMeeting => "create_meeting",
		}
	}

	/// Human-readable name used in error messages.
	pub const fn describe(self) -> &'static str {
		match self {
			FlowStage::AccessToken => "Access token request",
			FlowStage::CreateMeeting => "Meeting creation request",
		}
	}
}
impl Display for FlowStage {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowOutcome {
	/// Entry to a stage.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
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

/// Records the final outcome of a stage and logs the error when it failed.
pub fn finish_stage<T>(stage: FlowStage, result: &Result<T>) {
	match result {
		Ok(_) => record_stage_outcome(stage, FlowOutcome::Success),
		Err(e) => {
			log_stage_failure(stage, e);
			record_stage_outcome(stage, FlowOutcome::Failure);
		},
	}
}
