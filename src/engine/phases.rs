//! Phase-level hour aggregation.
//!
//! Deltas are summed across initiatives into the baseline — independent,
//! additive contributions rather than compounding percentages, so each
//! initiative's effect stays auditable. The zero floor keeps aggressively
//! stacked initiatives from producing negative phase hours; when it
//! triggers, configured savings are silently understated here and the
//! plausibility check in [`crate::report`] is the caller's signal.

use crate::core::initiative::Initiative;
use crate::core::phase::Phase;
use std::collections::BTreeMap;

/// `baseline[p] = total_hours · allocation[p] / 100`. Allocation is never
/// negative, so the baseline sums back to the total exactly.
pub fn baseline_hours(
    total_hours: f64,
    phase_allocation: &BTreeMap<Phase, f64>,
) -> BTreeMap<Phase, f64> {
    Phase::ALL
        .into_iter()
        .map(|phase| {
            let pct = phase_allocation.get(&phase).copied().unwrap_or(0.0);
            (phase, total_hours * pct / 100.0)
        })
        .collect()
}

/// `modeled[p] = max(0, baseline[p] + Σ_i effective[i,p])`.
pub fn modeled_hours(
    baseline: &BTreeMap<Phase, f64>,
    effective_deltas: &BTreeMap<Initiative, BTreeMap<Phase, f64>>,
) -> BTreeMap<Phase, f64> {
    Phase::ALL
        .into_iter()
        .map(|phase| {
            let delta: f64 = effective_deltas
                .values()
                .filter_map(|row| row.get(&phase))
                .sum();
            let base = baseline.get(&phase).copied().unwrap_or(0.0);
            (phase, (base + delta).max(0.0))
        })
        .collect()
}
