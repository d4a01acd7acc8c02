//! Summary tables, KPIs and the reporting-layer plausibility check.
//!
//! Nothing here computes new model quantities — only sums, variances and
//! percentage formatting over what the engine already produced.

pub mod writer;

use crate::core::initiative::Initiative;
use crate::core::phase::Phase;
use crate::core::{
    CostAvoidanceConfig, InitiativeImpact, KpiSummary, PhaseCost, PhaseSummaryRow, ScenarioInputs,
};
use crate::core::matrix::CalibratedMatrix;
use im::Vector;
use std::collections::BTreeMap;

/// Total cost reduction beyond this fraction is flagged as implausible
/// (reporting-layer warning only; the engine never enforces it).
pub const MAX_CREDIBLE_COST_REDUCTION: f64 = 0.30;

/// Per-phase summary rows in delivery order.
pub fn phase_summary(
    baseline_hours: &BTreeMap<Phase, f64>,
    modeled_hours: &BTreeMap<Phase, f64>,
    costs: &BTreeMap<Phase, PhaseCost>,
    risk_adjusted_hours: &BTreeMap<Phase, f64>,
) -> Vector<PhaseSummaryRow> {
    Phase::ALL
        .into_iter()
        .map(|phase| {
            let baseline = baseline_hours.get(&phase).copied().unwrap_or(0.0);
            let modeled = modeled_hours.get(&phase).copied().unwrap_or(0.0);
            let cost = costs.get(&phase).copied().unwrap_or_default();

            let hour_variance = modeled - baseline;
            let hour_variance_pct = if baseline > 0.0 {
                hour_variance / baseline * 100.0
            } else {
                0.0
            };
            let cost_variance = cost.modeled_cost - cost.baseline_cost;
            let cost_variance_pct = if cost.baseline_cost > 0.0 {
                cost_variance / cost.baseline_cost * 100.0
            } else {
                0.0
            };

            PhaseSummaryRow {
                phase,
                baseline_hours: baseline,
                modeled_hours: modeled,
                hour_variance,
                hour_variance_pct,
                baseline_cost: cost.baseline_cost,
                modeled_cost: cost.modeled_cost,
                cost_variance,
                cost_variance_pct,
                risk_adjusted_hours: risk_adjusted_hours.get(&phase).copied().unwrap_or(0.0),
            }
        })
        .collect()
}

/// Headline totals across all phases.
pub fn kpi_summary(
    baseline_hours: &BTreeMap<Phase, f64>,
    modeled_hours: &BTreeMap<Phase, f64>,
    costs: &BTreeMap<Phase, PhaseCost>,
) -> KpiSummary {
    let total_baseline_hours: f64 = baseline_hours.values().sum();
    let total_modeled_hours: f64 = modeled_hours.values().sum();
    let total_hours_saved = total_baseline_hours - total_modeled_hours;
    let total_hours_saved_pct = if total_baseline_hours > 0.0 {
        total_hours_saved / total_baseline_hours * 100.0
    } else {
        0.0
    };

    let total_baseline_cost: f64 = costs.values().map(|c| c.baseline_cost).sum();
    let total_modeled_cost: f64 = costs.values().map(|c| c.modeled_cost).sum();
    let total_cost_savings: f64 = costs.values().map(|c| c.savings).sum();
    let total_cost_avoidance: f64 = costs.values().map(|c| c.avoidance).sum();

    KpiSummary {
        total_baseline_hours,
        total_modeled_hours,
        total_hours_saved,
        total_hours_saved_pct,
        total_baseline_cost,
        total_modeled_cost,
        total_cost_savings,
        total_cost_avoidance,
        total_financial_benefit: total_cost_savings + total_cost_avoidance,
    }
}

/// Per-initiative contribution rows for the active initiatives, sorted
/// most beneficial (most negative total impact) first.
///
/// Avoidance attribution mirrors the phase-level rule: an initiative whose
/// delivery phases net out to savings gets its share of downstream
/// avoidance credited against its post-go-live cost impact.
pub fn initiative_impacts(
    matrix: &CalibratedMatrix,
    effective_deltas: &BTreeMap<Initiative, BTreeMap<Phase, f64>>,
    inputs: &ScenarioInputs,
) -> Vector<InitiativeImpact> {
    let CostAvoidanceConfig {
        multiplier,
        ongoing_factor,
    } = inputs.cost_avoidance;

    let empty_row = BTreeMap::new();
    let mut rows: Vec<InitiativeImpact> = Initiative::ALL
        .into_iter()
        .filter(|&i| inputs.maturity(i) > 0.0)
        .map(|initiative| {
            let row = effective_deltas.get(&initiative).unwrap_or(&empty_row);
            let delivery_hours: f64 = Phase::delivery()
                .map(|p| row.get(&p).copied().unwrap_or(0.0))
                .sum();
            let post_go_live_hours = row.get(&Phase::PostGoLive).copied().unwrap_or(0.0);

            let delivery_cost_impact = delivery_hours * inputs.blended_rate;
            let mut post_go_live_cost_impact = post_go_live_hours * inputs.blended_rate;
            if delivery_cost_impact < 0.0 {
                let avoidance_value = delivery_cost_impact.abs() * ongoing_factor * multiplier;
                post_go_live_cost_impact -= avoidance_value;
            }

            InitiativeImpact {
                initiative,
                maturity_pct: inputs.maturity(initiative),
                calibrated_delta: matrix.row_total(initiative),
                effective_delta: row.values().sum(),
                delivery_hours,
                post_go_live_hours,
                delivery_cost_impact,
                post_go_live_cost_impact,
                total_financial_impact: delivery_cost_impact + post_go_live_cost_impact,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        a.total_financial_impact
            .partial_cmp(&b.total_financial_impact)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    rows.into_iter().collect()
}

/// Post-hoc credibility check on the overall cost reduction. Returns a
/// warning message when the modeled reduction exceeds
/// [`MAX_CREDIBLE_COST_REDUCTION`]; never an error.
pub fn plausibility_warning(kpis: &KpiSummary) -> Option<String> {
    if kpis.total_modeled_cost >= kpis.total_baseline_cost || kpis.total_baseline_cost <= 0.0 {
        return None;
    }
    let reduction =
        (kpis.total_baseline_cost - kpis.total_modeled_cost) / kpis.total_baseline_cost;
    if reduction > MAX_CREDIBLE_COST_REDUCTION {
        Some(format!(
            "total cost reduction of {:.1}% exceeds the credible limit of {:.0}%; \
             consider lowering initiative maturity levels",
            reduction * 100.0,
            MAX_CREDIBLE_COST_REDUCTION * 100.0
        ))
    } else {
        None
    }
}
