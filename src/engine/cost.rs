//! Costing and downstream cost avoidance.
//!
//! Two distinct value types: effort actually removed during delivery
//! (direct savings, per phase) and a policy-scaled estimate of future
//! operational benefit (avoidance, attached to the post-go-live phase).
//! The preset's `ongoing_factor` picks what fraction of delivery savings
//! recurs; `multiplier` scales the resulting figure.

use crate::core::phase::Phase;
use crate::core::{CostAvoidanceConfig, PhaseCost};
use std::collections::BTreeMap;

/// Per-phase costs, direct savings and the post-go-live avoidance figure.
///
/// If the delivery phases net out to added effort, avoidance floors at
/// zero before the multiplier is applied.
pub fn costs_and_savings(
    baseline_hours: &BTreeMap<Phase, f64>,
    modeled_hours: &BTreeMap<Phase, f64>,
    blended_rate: f64,
    avoidance: CostAvoidanceConfig,
) -> BTreeMap<Phase, PhaseCost> {
    let mut costs: BTreeMap<Phase, PhaseCost> = Phase::ALL
        .into_iter()
        .map(|phase| {
            let baseline_cost =
                baseline_hours.get(&phase).copied().unwrap_or(0.0) * blended_rate;
            let modeled_cost = modeled_hours.get(&phase).copied().unwrap_or(0.0) * blended_rate;
            (
                phase,
                PhaseCost {
                    baseline_cost,
                    modeled_cost,
                    savings: baseline_cost - modeled_cost,
                    avoidance: 0.0,
                },
            )
        })
        .collect();

    let delivery_savings = delivery_savings_total(&costs);
    if let Some(cost) = costs.get_mut(&Phase::PostGoLive) {
        cost.avoidance = delivery_savings.max(0.0) * avoidance.ongoing_factor * avoidance.multiplier;
    }

    costs
}

/// Direct savings summed over the delivery phases (post-go-live excluded).
pub fn delivery_savings_total(costs: &BTreeMap<Phase, PhaseCost>) -> f64 {
    Phase::delivery()
        .filter_map(|phase| costs.get(&phase))
        .map(|c| c.savings)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{default_phase_allocation, DEFAULT_BLENDED_RATE, DEFAULT_TOTAL_HOURS};
    use crate::engine::phases::baseline_hours;

    fn shrunk(baseline: &BTreeMap<Phase, f64>, factor: f64) -> BTreeMap<Phase, f64> {
        baseline.iter().map(|(&p, &h)| (p, h * factor)).collect()
    }

    #[test]
    fn savings_are_cost_differences() {
        let baseline = baseline_hours(DEFAULT_TOTAL_HOURS, &default_phase_allocation());
        let modeled = shrunk(&baseline, 0.9);
        let costs = costs_and_savings(
            &baseline,
            &modeled,
            DEFAULT_BLENDED_RATE,
            CostAvoidanceConfig::disabled(),
        );

        for phase in Phase::ALL {
            let cost = &costs[&phase];
            assert!(
                (cost.savings - (cost.baseline_cost - cost.modeled_cost)).abs() < 1e-9
            );
        }
    }

    #[test]
    fn avoidance_sits_only_on_post_go_live() {
        let baseline = baseline_hours(DEFAULT_TOTAL_HOURS, &default_phase_allocation());
        let modeled = shrunk(&baseline, 0.9);
        let config = CostAvoidanceConfig {
            multiplier: 2.5,
            ongoing_factor: 0.8,
        };
        let costs = costs_and_savings(&baseline, &modeled, DEFAULT_BLENDED_RATE, config);

        for phase in Phase::delivery() {
            assert_eq!(costs[&phase].avoidance, 0.0);
        }
        let expected = delivery_savings_total(&costs) * 0.8 * 2.5;
        assert!((costs[&Phase::PostGoLive].avoidance - expected).abs() < 1e-9);
    }

    #[test]
    fn zero_multiplier_kills_avoidance() {
        let baseline = baseline_hours(DEFAULT_TOTAL_HOURS, &default_phase_allocation());
        let modeled = shrunk(&baseline, 0.5);
        let config = CostAvoidanceConfig {
            multiplier: 0.0,
            ongoing_factor: 1.5,
        };
        let costs = costs_and_savings(&baseline, &modeled, DEFAULT_BLENDED_RATE, config);
        assert!(costs.values().all(|c| c.avoidance == 0.0));
    }

    #[test]
    fn net_added_effort_floors_avoidance_at_zero() {
        let baseline = baseline_hours(DEFAULT_TOTAL_HOURS, &default_phase_allocation());
        // Modeled hours above baseline: initiatives added effort.
        let modeled = shrunk(&baseline, 1.1);
        let config = CostAvoidanceConfig {
            multiplier: 4.0,
            ongoing_factor: 1.2,
        };
        let costs = costs_and_savings(&baseline, &modeled, DEFAULT_BLENDED_RATE, config);
        assert_eq!(costs[&Phase::PostGoLive].avoidance, 0.0);
    }
}
