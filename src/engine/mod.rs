//! The efficiency engine: composes the calculation stages into one run.
//!
//! Construction injects the calibrated matrix and the role catalog and
//! validates both, so a constructed engine can only produce well-formed
//! results. `run` is a pure function of its inputs — no I/O, no shared
//! mutable state — which makes engines safe to share across threads and
//! scenario runs trivially parallel.

pub mod cost;
pub mod phases;
pub mod risk;
pub mod scaling;

use crate::categories;
use crate::core::initiative::validate_catalog;
use crate::core::matrix::CalibratedMatrix;
use crate::core::{ScenarioInputs, ScenarioResults};
use crate::error::ShiftmapError;
use crate::report;
use crate::roles::{allocation, RoleCatalog};
use once_cell::sync::Lazy;

static BUILTIN_ENGINE: Lazy<EfficiencyEngine> = Lazy::new(EfficiencyEngine::builtin);

/// Process-wide engine over the built-in catalogs. The catalogs are
/// read-only after initialization, so sharing one engine across threads
/// and scenario runs needs no locking.
pub fn builtin_engine() -> &'static EfficiencyEngine {
    &BUILTIN_ENGINE
}

pub struct EfficiencyEngine {
    matrix: CalibratedMatrix,
    roles: RoleCatalog,
}

impl EfficiencyEngine {
    /// Build an engine around an explicit matrix and role catalog.
    pub fn new(matrix: CalibratedMatrix, roles: RoleCatalog) -> Result<Self, ShiftmapError> {
        validate_catalog()?;
        Ok(Self { matrix, roles })
    }

    /// Engine over the built-in calibration and staffing model.
    pub fn builtin() -> Self {
        match Self::new(CalibratedMatrix::builtin(), RoleCatalog::builtin()) {
            Ok(engine) => engine,
            Err(_) => unreachable!("built-in catalogs are valid"),
        }
    }

    pub fn matrix(&self) -> &CalibratedMatrix {
        &self.matrix
    }

    pub fn roles(&self) -> &RoleCatalog {
        &self.roles
    }

    /// Run the full pipeline for one scenario.
    ///
    /// Assumes validated inputs (see [`ScenarioInputs::validate`]); the
    /// engine itself only guards the divisions whose denominators can
    /// legitimately be zero.
    pub fn run(&self, inputs: &ScenarioInputs) -> ScenarioResults {
        let effective_deltas =
            scaling::effective_deltas(&self.matrix, &inputs.maturity_levels, inputs.total_hours);

        let baseline_hours = phases::baseline_hours(inputs.total_hours, &inputs.phase_allocation);
        let modeled_hours = phases::modeled_hours(&baseline_hours, &effective_deltas);

        let costs = cost::costs_and_savings(
            &baseline_hours,
            &modeled_hours,
            inputs.blended_rate,
            inputs.cost_avoidance,
        );
        let risk_adjusted_hours = risk::risk_adjusted_hours(&modeled_hours, &inputs.risk_weights);

        let roles = allocation::allocate(
            &self.roles,
            &baseline_hours,
            &modeled_hours,
            &inputs.maturity_levels,
        );
        let categories = categories::decompose(
            &self.roles,
            &roles.baseline_hours,
            &roles.modeled_hours,
            &inputs.maturity_levels,
        );

        let summary =
            report::phase_summary(&baseline_hours, &modeled_hours, &costs, &risk_adjusted_hours);
        let initiative_impacts =
            report::initiative_impacts(&self.matrix, &effective_deltas, inputs);
        let kpis = report::kpi_summary(&baseline_hours, &modeled_hours, &costs);

        ScenarioResults {
            matrix_version: self.matrix.version().to_string(),
            inputs: inputs.clone(),
            effective_deltas,
            baseline_hours,
            modeled_hours,
            costs,
            risk_adjusted_hours,
            roles,
            categories,
            summary,
            initiative_impacts,
            kpis,
        }
    }
}

impl Default for EfficiencyEngine {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::initiative::Initiative;

    #[test]
    fn run_with_defaults_is_identity() {
        let engine = EfficiencyEngine::builtin();
        let results = engine.run(&ScenarioInputs::default());
        assert_eq!(results.baseline_hours, results.modeled_hours);
        assert_eq!(results.kpis.total_hours_saved, 0.0);
    }

    #[test]
    fn run_reports_matrix_version() {
        let engine = EfficiencyEngine::builtin();
        let results = engine.run(&ScenarioInputs::default());
        assert_eq!(results.matrix_version, engine.matrix().version());
    }

    #[test]
    fn active_initiatives_reduce_hours() {
        let engine = EfficiencyEngine::builtin();
        let mut inputs = ScenarioInputs::default();
        inputs
            .maturity_levels
            .insert(Initiative::AutomatedTesting, 60.0);
        let results = engine.run(&inputs);
        assert!(results.kpis.total_modeled_hours < results.kpis.total_baseline_hours);
        assert_eq!(results.initiative_impacts.len(), 1);
    }
}
