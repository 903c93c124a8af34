//! What-if scenario impact estimation.
//!
//! The simulation dialog lets an operator sketch an intervention (hold a
//! train, reroute it, bump its priority) and see a rough impact figure.
//! The figures are illustrative heuristics only and never feed back into
//! train state.

use railwatch_types::{ImpactEstimate, ScenarioKind, ScenarioRequest};
use tracing::debug;

/// Bounds for the hold duration parameter, in minutes.
const HOLD_MINUTES_RANGE: (u32, u32) = (1, 30);

/// Estimate the impact of a proposed intervention.
///
/// Unrecognized scenario kinds (forward-compatible dialog payloads)
/// produce the zero estimate rather than an error.
pub fn estimate(request: &ScenarioRequest) -> ImpactEstimate {
    match request.kind {
        ScenarioKind::Hold => {
            let minutes = request.hold_minutes.clamp(HOLD_MINUTES_RANGE.0, HOLD_MINUTES_RANGE.1);
            ImpactEstimate {
                delay_change: i64::from(minutes),
                throughput_impact: -8,
                affected_trains: 3,
            }
        }
        ScenarioKind::Reroute => ImpactEstimate {
            delay_change: -5,
            throughput_impact: 12,
            affected_trains: 1,
        },
        // Raising to the highest urgency helps the train at the cost of the
        // network; milder bumps cost the train instead.
        ScenarioKind::Priority if request.priority_level < 2 => ImpactEstimate {
            delay_change: -8,
            throughput_impact: 15,
            affected_trains: 2,
        },
        ScenarioKind::Priority => ImpactEstimate {
            delay_change: 3,
            throughput_impact: -5,
            affected_trains: 2,
        },
        ScenarioKind::Unknown => {
            debug!("unrecognized scenario kind, returning zero estimate");
            ImpactEstimate::NONE
        }
    }
}

#[cfg(test)]
mod tests {
    use railwatch_types::SegmentId;

    use super::*;

    #[test]
    fn hold_adds_its_duration_as_delay() {
        let impact = estimate(&ScenarioRequest::hold(10));
        assert_eq!(
            impact,
            ImpactEstimate {
                delay_change: 10,
                throughput_impact: -8,
                affected_trains: 3,
            }
        );
    }

    #[test]
    fn hold_duration_is_clamped_to_its_valid_range() {
        assert_eq!(estimate(&ScenarioRequest::hold(0)).delay_change, 1);
        assert_eq!(estimate(&ScenarioRequest::hold(45)).delay_change, 30);
        assert_eq!(estimate(&ScenarioRequest::hold(30)).delay_change, 30);
    }

    #[test]
    fn reroute_trades_delay_for_throughput() {
        let impact = estimate(&ScenarioRequest::reroute(SegmentId::new("S3")));
        assert_eq!(
            impact,
            ImpactEstimate {
                delay_change: -5,
                throughput_impact: 12,
                affected_trains: 1,
            }
        );
    }

    #[test]
    fn top_priority_helps_the_train() {
        let impact = estimate(&ScenarioRequest::priority(1));
        assert_eq!(
            impact,
            ImpactEstimate {
                delay_change: -8,
                throughput_impact: 15,
                affected_trains: 2,
            }
        );
    }

    #[test]
    fn lower_priority_levels_cost_the_train() {
        let expected = ImpactEstimate {
            delay_change: 3,
            throughput_impact: -5,
            affected_trains: 2,
        };
        assert_eq!(estimate(&ScenarioRequest::priority(2)), expected);
        assert_eq!(estimate(&ScenarioRequest::priority(3)), expected);
    }

    #[test]
    fn unknown_kinds_estimate_zero_impact() {
        let request = ScenarioRequest {
            kind: ScenarioKind::Unknown,
            ..ScenarioRequest::default()
        };
        assert_eq!(estimate(&request), ImpactEstimate::NONE);
    }
}
