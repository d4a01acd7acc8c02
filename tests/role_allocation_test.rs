use shiftmap::core::{Initiative, Phase, ScenarioInputs};
use shiftmap::engine::EfficiencyEngine;
use shiftmap::roles::{RoleCatalog, RoleGroup};
use std::collections::BTreeMap;

fn automation_only_inputs(pct: f64) -> ScenarioInputs {
    ScenarioInputs {
        maturity_levels: [(Initiative::AutomatedTesting, pct)].into_iter().collect(),
        ..ScenarioInputs::default()
    }
}

#[test]
fn baseline_role_hours_reconcile_per_phase() {
    let engine = EfficiencyEngine::builtin();
    let results = engine.run(&automation_only_inputs(80.0));

    for phase in Phase::ALL {
        let role_sum: f64 = results
            .roles
            .baseline_hours
            .values()
            .map(|row| row[&phase])
            .sum();
        assert!(
            (role_sum - results.baseline_hours[&phase]).abs() < 1e-6,
            "phase {}: {} vs {}",
            phase,
            role_sum,
            results.baseline_hours[&phase]
        );
    }
}

#[test]
fn modeled_role_hours_do_not_reconcile_when_multipliers_differ() {
    // The (2 - m) correction rescales each role independently; with
    // non-uniform multipliers the role rows stop summing to the phase
    // total. That asymmetry is part of the model's contract.
    let engine = EfficiencyEngine::builtin();
    let results = engine.run(&automation_only_inputs(100.0));

    let modeled_role_total: f64 = results
        .roles
        .modeled_hours
        .values()
        .flat_map(|row| row.values())
        .sum();
    let modeled_phase_total: f64 = results.modeled_hours.values().sum();
    assert!((modeled_role_total - modeled_phase_total).abs() > 1.0);
}

#[test]
fn neutral_multipliers_keep_modeled_reconciliation() {
    let engine = EfficiencyEngine::builtin();
    let results = engine.run(&ScenarioInputs::default());

    for phase in Phase::ALL {
        let role_sum: f64 = results
            .roles
            .modeled_hours
            .values()
            .map(|row| row[&phase])
            .sum();
        assert!((role_sum - results.modeled_hours[&phase]).abs() < 1e-6);
    }
}

#[test]
fn multipliers_reflect_benefit_factors() {
    let engine = EfficiencyEngine::builtin();
    let results = engine.run(&automation_only_inputs(100.0));

    // A single active initiative makes each role's multiplier exactly its
    // factor for that initiative's group.
    assert_eq!(results.roles.multipliers["Test Engineer"], 1.4);
    assert_eq!(results.roles.multipliers["Project Manager"], 0.85);

    // m > 1 shrinks a role's modeled share; m < 1 grows it, relative to
    // the uncorrected (2 - 1) split.
    let test_engineer = results
        .roles
        .summary
        .iter()
        .find(|r| r.role == "Test Engineer")
        .unwrap();
    let change_lead = results
        .roles
        .summary
        .iter()
        .find(|r| r.role == "Change Management Lead")
        .unwrap();
    assert!(test_engineer.pct_saved > change_lead.pct_saved);
}

#[test]
fn group_totals_split_pod_and_pooled() {
    let engine = EfficiencyEngine::builtin();
    let results = engine.run(&automation_only_inputs(60.0));
    let catalog = RoleCatalog::builtin();

    for (group_totals, hours) in [
        (&results.roles.baseline_group_totals, &results.roles.baseline_hours),
        (&results.roles.modeled_group_totals, &results.roles.modeled_hours),
    ] {
        for group in RoleGroup::ALL {
            let expected: f64 = catalog
                .group_members(group)
                .iter()
                .map(|name| hours[*name].values().sum::<f64>())
                .sum();
            assert!((group_totals[&group] - expected).abs() < 1e-9);
        }
    }
}

#[test]
fn role_costs_use_role_rates() {
    let engine = EfficiencyEngine::builtin();
    let results = engine.run(&automation_only_inputs(40.0));
    let catalog = RoleCatalog::builtin();

    for role in catalog.iter() {
        for phase in Phase::ALL {
            let expected = results.roles.baseline_hours[&role.name][&phase] * role.hourly_rate;
            assert!(
                (results.roles.baseline_costs[&role.name][&phase] - expected).abs() < 1e-9
            );
        }
    }
}

#[test]
fn summary_savings_match_hour_tables() {
    let engine = EfficiencyEngine::builtin();
    let results = engine.run(&automation_only_inputs(70.0));

    for row in results.roles.summary.iter() {
        let baseline: f64 = results.roles.baseline_hours[&row.role].values().sum();
        let modeled: f64 = results.roles.modeled_hours[&row.role].values().sum();
        assert!((row.baseline_hours - baseline).abs() < 1e-9);
        assert!((row.modeled_hours - modeled).abs() < 1e-9);
        assert!((row.hours_saved - (baseline - modeled)).abs() < 1e-9);
        assert!((row.cost_savings - row.hours_saved * row.hourly_rate).abs() < 1e-9);
    }
}

#[test]
fn custom_catalog_with_unstaffed_phase_guards_division() {
    // Two roles, neither staffed in Discover: that phase's hours simply
    // stay unallocated instead of dividing by zero.
    let catalog = RoleCatalog::new(vec![
        role_def("Builder", RoleGroup::Pod, 1000.0, 100.0, [0.0, 10.0, 20.0, 40.0, 20.0, 5.0, 5.0]),
        role_def("Tester", RoleGroup::Pooled, 500.0, 90.0, [0.0, 5.0, 10.0, 20.0, 50.0, 10.0, 5.0]),
    ])
    .unwrap();
    let engine =
        EfficiencyEngine::new(shiftmap::core::CalibratedMatrix::builtin(), catalog).unwrap();

    let results = engine.run(&ScenarioInputs::default());
    for row in results.roles.baseline_hours.values() {
        assert_eq!(row[&Phase::Discover], 0.0);
    }
}

fn role_def(
    name: &str,
    group: RoleGroup,
    base_hours: f64,
    hourly_rate: f64,
    allocation: [f64; Phase::COUNT],
) -> shiftmap::roles::RoleDefinition {
    shiftmap::roles::RoleDefinition {
        name: name.to_string(),
        group,
        base_hours,
        hourly_rate,
        phase_allocation: Phase::ALL.into_iter().zip(allocation).collect(),
        benefit_factors: BTreeMap::new(),
    }
}
