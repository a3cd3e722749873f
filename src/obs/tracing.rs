// self
use crate::{_prelude::*, obs::FlowStage};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedFlow<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedFlow<F> = F;

/// A span builder used by the client stages.
#[derive(Clone, Debug)]
pub struct FlowSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl FlowSpan {
	/// Creates a new span tagged with the provided stage.
	pub fn new(stage: FlowStage) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("meeting_broker.flow", stage = stage.as_str());

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = stage;

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedFlow<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Emits a `warn` event describing a failed stage.
///
/// The error's full source chain is flattened into the `cause` field so the
/// original diagnostic survives in the log line.
pub fn log_stage_failure(stage: FlowStage, error: &Error) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(
			stage = stage.as_str(),
			error = %error,
			cause = %source_chain(error),
			"Stage failed."
		);
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (stage, error);
	}
}

/// Emits a `debug` event for a completed stage.
pub fn log_stage_success(stage: FlowStage, detail: &str) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(stage = stage.as_str(), detail, "Stage completed.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (stage, detail);
	}
}

/// Joins an error's `source()` chain with `: `.
pub fn source_chain(error: &(dyn StdError + 'static)) -> String {
	let mut buf = String::new();
	let mut cursor = error.source();

	while let Some(cause) = cursor {
		if !buf.is_empty() {
			buf.push_str(": ");
		}

		buf.push_str(&cause.to_string());

		cursor = cause.source();
	}

	buf
}
