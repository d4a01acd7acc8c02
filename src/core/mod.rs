//! Core data model: scenario inputs, static catalogs, and result structures.
//!
//! Everything here is plain data with serde derives; the computation lives
//! in [`crate::engine`], [`crate::roles`], [`crate::categories`] and
//! [`crate::report`]. Maps are keyed by typed enums and `BTreeMap` so that
//! iteration order — and therefore serialized output — is deterministic.

pub mod category;
pub mod initiative;
pub mod matrix;
pub mod phase;

pub use category::SavingsCategory;
pub use initiative::{Initiative, MultiplierGroup};
pub use matrix::{CalibratedMatrix, BUILTIN_MATRIX_VERSION, REFERENCE_HOURS};
pub use phase::Phase;

use crate::error::ShiftmapError;
use crate::roles::RoleGroup;
use im::Vector;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_TOTAL_HOURS: f64 = 17_054.0;
pub const DEFAULT_BLENDED_RATE: f64 = 100.0;

/// Tolerance for "percentages sum to 100" checks, matching the rounding
/// slack a hand-edited scenario file needs.
pub const ALLOCATION_TOLERANCE: f64 = 0.01;

/// Default share of total hours per phase, in percent.
pub fn default_phase_allocation() -> BTreeMap<Phase, f64> {
    [
        (Phase::Discover, 5.0),
        (Phase::Plan, 10.0),
        (Phase::Design, 15.0),
        (Phase::Build, 25.0),
        (Phase::Test, 20.0),
        (Phase::Deploy, 10.0),
        (Phase::PostGoLive, 15.0),
    ]
    .into_iter()
    .collect()
}

/// Default per-phase risk weights: later phases carry more schedule risk.
pub fn default_risk_weights() -> BTreeMap<Phase, f64> {
    Phase::ALL
        .into_iter()
        .enumerate()
        .map(|(i, phase)| (phase, (i + 1) as f64))
        .collect()
}

/// Policy knobs for the downstream cost-avoidance figure, usually selected
/// from the named preset catalog in [`crate::config::presets`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CostAvoidanceConfig {
    /// Scales the avoidance figure.
    pub multiplier: f64,
    /// Fraction of total delivery-phase savings counted as ongoing avoidance.
    pub ongoing_factor: f64,
}

impl CostAvoidanceConfig {
    pub fn disabled() -> Self {
        Self {
            multiplier: 0.0,
            ongoing_factor: 0.0,
        }
    }
}

/// Caller-owned inputs for one scenario run. Immutable once handed to the
/// engine; every run recomputes from scratch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInputs {
    pub total_hours: f64,
    /// Blended cost per hour used for phase-level costing.
    pub blended_rate: f64,
    /// Percent of total hours per phase; must sum to 100.
    pub phase_allocation: BTreeMap<Phase, f64>,
    /// Adoption/effectiveness percent (0–100) per initiative; absent means 0.
    pub maturity_levels: BTreeMap<Initiative, f64>,
    pub risk_weights: BTreeMap<Phase, f64>,
    pub cost_avoidance: CostAvoidanceConfig,
}

impl Default for ScenarioInputs {
    fn default() -> Self {
        Self {
            total_hours: DEFAULT_TOTAL_HOURS,
            blended_rate: DEFAULT_BLENDED_RATE,
            phase_allocation: default_phase_allocation(),
            maturity_levels: BTreeMap::new(),
            risk_weights: default_risk_weights(),
            cost_avoidance: CostAvoidanceConfig::disabled(),
        }
    }
}

impl ScenarioInputs {
    /// Validate well-formedness before a run. The engine itself assumes
    /// valid inputs; this is the collaborator-level check the CLI and the
    /// scenario-file loader apply.
    pub fn validate(&self) -> Result<(), ShiftmapError> {
        if !self.total_hours.is_finite() || self.total_hours <= 0.0 {
            return Err(ShiftmapError::input(format!(
                "total hours must be positive, got {}",
                self.total_hours
            )));
        }
        if !self.blended_rate.is_finite() || self.blended_rate < 0.0 {
            return Err(ShiftmapError::input(format!(
                "blended rate must be non-negative, got {}",
                self.blended_rate
            )));
        }

        let allocation_sum: f64 = self.phase_allocation.values().sum();
        if (allocation_sum - 100.0).abs() > ALLOCATION_TOLERANCE {
            return Err(ShiftmapError::input(format!(
                "phase allocation must sum to 100, got {:.2}",
                allocation_sum
            )));
        }
        if let Some((phase, pct)) = self
            .phase_allocation
            .iter()
            .find(|(_, &pct)| !pct.is_finite() || pct < 0.0)
        {
            return Err(ShiftmapError::input(format!(
                "phase allocation for {} must be non-negative, got {}",
                phase, pct
            )));
        }

        if let Some((initiative, pct)) = self
            .maturity_levels
            .iter()
            .find(|(_, &pct)| !pct.is_finite() || !(0.0..=100.0).contains(&pct))
        {
            return Err(ShiftmapError::input(format!(
                "maturity for {} must be in 0..=100, got {}",
                initiative, pct
            )));
        }

        if let Some((phase, weight)) = self
            .risk_weights
            .iter()
            .find(|(_, &w)| !w.is_finite() || w < 0.0)
        {
            return Err(ShiftmapError::input(format!(
                "risk weight for {} must be non-negative, got {}",
                phase, weight
            )));
        }

        if self.cost_avoidance.multiplier < 0.0 || self.cost_avoidance.ongoing_factor < 0.0 {
            return Err(ShiftmapError::input(
                "cost avoidance multiplier and ongoing factor must be non-negative".to_string(),
            ));
        }

        Ok(())
    }

    /// Maturity for one initiative, defaulting absent entries to 0.
    pub fn maturity(&self, initiative: Initiative) -> f64 {
        self.maturity_levels.get(&initiative).copied().unwrap_or(0.0)
    }
}

/// Per-phase cost figures. Direct savings apply to delivery phases; the
/// avoidance figure is attached to the post-go-live phase only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PhaseCost {
    pub baseline_cost: f64,
    pub modeled_cost: f64,
    pub savings: f64,
    pub avoidance: f64,
}

/// One row of the per-phase summary table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhaseSummaryRow {
    pub phase: Phase,
    pub baseline_hours: f64,
    pub modeled_hours: f64,
    pub hour_variance: f64,
    pub hour_variance_pct: f64,
    pub baseline_cost: f64,
    pub modeled_cost: f64,
    pub cost_variance: f64,
    pub cost_variance_pct: f64,
    pub risk_adjusted_hours: f64,
}

/// Headline figures for the KPI strip.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    pub total_baseline_hours: f64,
    pub total_modeled_hours: f64,
    pub total_hours_saved: f64,
    pub total_hours_saved_pct: f64,
    pub total_baseline_cost: f64,
    pub total_modeled_cost: f64,
    pub total_cost_savings: f64,
    pub total_cost_avoidance: f64,
    pub total_financial_benefit: f64,
}

/// Per-initiative contribution breakdown, for the active initiatives only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InitiativeImpact {
    pub initiative: Initiative,
    pub maturity_pct: f64,
    /// Full-maturity delta total from the calibrated matrix.
    pub calibrated_delta: f64,
    /// Delta total after size and maturity scaling.
    pub effective_delta: f64,
    pub delivery_hours: f64,
    pub post_go_live_hours: f64,
    pub delivery_cost_impact: f64,
    pub post_go_live_cost_impact: f64,
    pub total_financial_impact: f64,
}

/// One row of the role savings summary, costed at the role's own rate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoleSummaryRow {
    pub role: String,
    pub group: RoleGroup,
    pub baseline_hours: f64,
    pub modeled_hours: f64,
    pub hours_saved: f64,
    pub pct_saved: f64,
    pub hourly_rate: f64,
    pub cost_savings: f64,
}

/// Role × phase hour and cost tables for both scenarios.
///
/// Baseline hours reconcile exactly: for every phase the role rows sum to
/// the phase-level hours. Modeled hours do not — the role-multiplier
/// correction `(2 - m)` rescales each role independently, so the modeled
/// role rows are a directional nudge, not an exact split of the phase total.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoleAllocation {
    pub baseline_hours: BTreeMap<String, BTreeMap<Phase, f64>>,
    pub modeled_hours: BTreeMap<String, BTreeMap<Phase, f64>>,
    pub baseline_costs: BTreeMap<String, BTreeMap<Phase, f64>>,
    pub modeled_costs: BTreeMap<String, BTreeMap<Phase, f64>>,
    /// Derived per-role benefit multiplier `m` (1.0 = neutral).
    pub multipliers: BTreeMap<String, f64>,
    pub baseline_group_totals: BTreeMap<RoleGroup, f64>,
    pub modeled_group_totals: BTreeMap<RoleGroup, f64>,
    pub summary: Vector<RoleSummaryRow>,
}

/// Hours and cost attributed to one strategic category for one role.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryCell {
    pub hours: f64,
    pub cost: f64,
}

/// Per-role savings split across the three strategic categories, plus the
/// per-category grand totals. Rows decompose each role's saved hours
/// exactly: the three cells sum to that role's total hours saved.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub by_role: BTreeMap<String, BTreeMap<SavingsCategory, CategoryCell>>,
    pub totals: BTreeMap<SavingsCategory, CategoryCell>,
}

/// Everything one engine run produces. Pure function of the inputs and the
/// injected catalogs: identical inputs serialize byte-identically.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResults {
    pub matrix_version: String,
    pub inputs: ScenarioInputs,
    pub effective_deltas: BTreeMap<Initiative, BTreeMap<Phase, f64>>,
    pub baseline_hours: BTreeMap<Phase, f64>,
    pub modeled_hours: BTreeMap<Phase, f64>,
    pub costs: BTreeMap<Phase, PhaseCost>,
    pub risk_adjusted_hours: BTreeMap<Phase, f64>,
    pub roles: RoleAllocation,
    pub categories: CategoryBreakdown,
    pub summary: Vector<PhaseSummaryRow>,
    pub initiative_impacts: Vector<InitiativeImpact>,
    pub kpis: KpiSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_allocation_sums_to_100() {
        let total: f64 = default_phase_allocation().values().sum();
        assert!((total - 100.0).abs() < ALLOCATION_TOLERANCE);
    }

    #[test]
    fn default_inputs_validate() {
        assert!(ScenarioInputs::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_allocation_sum() {
        let mut inputs = ScenarioInputs::default();
        inputs.phase_allocation.insert(Phase::Build, 40.0);
        assert!(inputs.validate().is_err());
    }

    #[test]
    fn validate_rejects_out_of_range_maturity() {
        let mut inputs = ScenarioInputs::default();
        inputs
            .maturity_levels
            .insert(Initiative::AutomatedTesting, 130.0);
        assert!(inputs.validate().is_err());
    }

    #[test]
    fn absent_maturity_reads_as_zero() {
        let inputs = ScenarioInputs::default();
        assert_eq!(inputs.maturity(Initiative::AiAutomation), 0.0);
    }
}
