// self
use crate::obs::{FlowOutcome, FlowStage};

/// Records a stage outcome via the global metrics recorder (when enabled).
pub fn record_flow_outcome(strategy: &str, stage: FlowStage, outcome: FlowOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"freedomworks_auth_flow_total",
			"strategy" => strategy.to_owned(),
			"stage" => stage.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (strategy, stage, outcome);
	}
}
