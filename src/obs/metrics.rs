// self
use crate::obs::{FlowOutcome, FlowStage};

/// Records a stage outcome via the global metrics recorder (when enabled).
pub fn record_stage_outcome(stage: FlowStage, outcome: FlowOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"meeting_broker_stage_total",
			"stage" => stage.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (stage, outcome);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn record_stage_outcome_noop_without_metrics() {
		record_stage_outcome(FlowStage::CreateMeeting, FlowOutcome::Failure);
	}

	#[cfg(feature = "metrics")]
	#[test]
	fn stage_counter_carries_stage_and_outcome_labels() {
		// std
		use std::sync::Mutex;
		// crates.io
		use ::metrics::{
			Counter, Gauge, Histogram, Key, KeyName, Metadata, Recorder, SharedString, Unit,
		};

		#[derive(Default)]
		struct CapturingRecorder(Mutex<Vec<String>>);
		impl Recorder for CapturingRecorder {
			fn describe_counter(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

			fn describe_gauge(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

			fn describe_histogram(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

			fn register_counter(&self, key: &Key, _: &Metadata<'_>) -> Counter {
				let labels = key
					.labels()
					.map(|label| format!("{}={}", label.key(), label.value()))
					.collect::<Vec<_>>()
					.join(",");

				self.0
					.lock()
					.expect("Recorder lock should not be poisoned.")
					.push(format!("{}{{{labels}}}", key.name()));

				Counter::noop()
			}

			fn register_gauge(&self, _: &Key, _: &Metadata<'_>) -> Gauge {
				Gauge::noop()
			}

			fn register_histogram(&self, _: &Key, _: &Metadata<'_>) -> Histogram {
				Histogram::noop()
			}
		}

		let recorder = CapturingRecorder::default();

		::metrics::with_local_recorder(&recorder, || {
			record_stage_outcome(FlowStage::AccessToken, FlowOutcome::Attempt);
			record_stage_outcome(FlowStage::CreateMeeting, FlowOutcome::Failure);
		});

		assert_eq!(
			*recorder.0.lock().expect("Recorder lock should not be poisoned."),
			[
				"meeting_broker_stage_total{stage=access_token,outcome=attempt}",
				"meeting_broker_stage_total{stage=create_meeting,outcome=failure}",
			]
		);
	}
}
