//! Property tests for the model's numeric invariants.

use proptest::prelude::*;
use shiftmap::core::{Initiative, Phase, ScenarioInputs};
use shiftmap::engine::EfficiencyEngine;
use std::collections::BTreeMap;

fn maturity_map(levels: &[f64]) -> BTreeMap<Initiative, f64> {
    Initiative::ALL
        .into_iter()
        .zip(levels.iter().copied())
        .collect()
}

fn arbitrary_inputs() -> impl Strategy<Value = ScenarioInputs> {
    (
        1_000.0..200_000.0f64,
        0.0..500.0f64,
        prop::collection::vec(0.0..=100.0f64, Initiative::COUNT),
    )
        .prop_map(|(total_hours, blended_rate, levels)| ScenarioInputs {
            total_hours,
            blended_rate,
            maturity_levels: maturity_map(&levels),
            ..ScenarioInputs::default()
        })
}

proptest! {
    /// Baseline hours always reproduce the total exactly.
    #[test]
    fn prop_baseline_sums_to_total(inputs in arbitrary_inputs()) {
        let results = EfficiencyEngine::builtin().run(&inputs);
        let total: f64 = results.baseline_hours.values().sum();
        prop_assert!((total - inputs.total_hours).abs() < 1e-6);
    }

    /// Modeled hours never go negative, however hard initiatives stack.
    #[test]
    fn prop_modeled_hours_are_non_negative(inputs in arbitrary_inputs()) {
        let results = EfficiencyEngine::builtin().run(&inputs);
        prop_assert!(results.modeled_hours.values().all(|&h| h >= 0.0));
    }

    /// The baseline role split reconciles with phase hours at every phase.
    #[test]
    fn prop_baseline_role_split_reconciles(inputs in arbitrary_inputs()) {
        let results = EfficiencyEngine::builtin().run(&inputs);
        for phase in Phase::ALL {
            let role_sum: f64 = results
                .roles
                .baseline_hours
                .values()
                .map(|row| row[&phase])
                .sum();
            prop_assert!((role_sum - results.baseline_hours[&phase]).abs() < 1e-6);
        }
    }

    /// The category cells decompose each role's saved hours exactly.
    #[test]
    fn prop_category_decomposition_is_exact(inputs in arbitrary_inputs()) {
        let results = EfficiencyEngine::builtin().run(&inputs);
        for row in results.roles.summary.iter() {
            let cell_sum: f64 = results.categories.by_role[&row.role]
                .values()
                .map(|c| c.hours)
                .sum();
            // Tolerance scales with magnitude for large random projects.
            let tolerance = 1e-9 * (1.0 + row.hours_saved.abs());
            prop_assert!((cell_sum - row.hours_saved).abs() < tolerance);
        }
    }

    /// All-zero maturity is the identity scenario for any project size.
    #[test]
    fn prop_zero_maturity_is_identity(
        total_hours in 1_000.0..200_000.0f64,
        blended_rate in 0.0..500.0f64,
    ) {
        let inputs = ScenarioInputs {
            total_hours,
            blended_rate,
            ..ScenarioInputs::default()
        };
        let results = EfficiencyEngine::builtin().run(&inputs);
        prop_assert_eq!(&results.baseline_hours, &results.modeled_hours);
        prop_assert_eq!(results.kpis.total_hours_saved_pct, 0.0);
    }

    /// Avoidance is proportional to the preset multiplier.
    #[test]
    fn prop_avoidance_scales_with_multiplier(
        level in 1.0..=100.0f64,
        multiplier in 0.0..6.0f64,
    ) {
        let base = ScenarioInputs {
            maturity_levels: maturity_map(&[level; Initiative::COUNT]),
            cost_avoidance: shiftmap::core::CostAvoidanceConfig {
                multiplier: 1.0,
                ongoing_factor: 0.8,
            },
            ..ScenarioInputs::default()
        };
        let scaled = ScenarioInputs {
            cost_avoidance: shiftmap::core::CostAvoidanceConfig {
                multiplier,
                ongoing_factor: 0.8,
            },
            ..base.clone()
        };

        let engine = EfficiencyEngine::builtin();
        let unit = engine.run(&base).kpis.total_cost_avoidance;
        let result = engine.run(&scaled).kpis.total_cost_avoidance;
        prop_assert!((result - unit * multiplier).abs() < 1e-6 * (1.0 + unit));
    }
}
