//! Distributes phase-level hours onto roles.
//!
//! The split is proportional to each role's staffing weight in the phase
//! (`base_hours · phase_allocation / 100`), so for every phase the role
//! rows sum back to the phase total exactly. The modeled scenario then
//! applies the `(2 - m)` benefit correction per role, which intentionally
//! gives up that reconciliation — see the note on
//! [`RoleAllocation`](crate::core::RoleAllocation).

use crate::core::initiative::Initiative;
use crate::core::phase::Phase;
use crate::core::{RoleAllocation, RoleSummaryRow};
use crate::roles::multipliers::role_multipliers;
use crate::roles::{RoleCatalog, RoleGroup};
use im::Vector;
use std::collections::BTreeMap;

/// Split phase-level hours across roles proportionally to staffing weights.
/// A phase nobody is allocated to contributes zero to every role.
pub fn split_phase_hours(
    catalog: &RoleCatalog,
    phase_hours: &BTreeMap<Phase, f64>,
) -> BTreeMap<String, BTreeMap<Phase, f64>> {
    let phase_weight_totals: BTreeMap<Phase, f64> = Phase::ALL
        .into_iter()
        .map(|phase| {
            let total: f64 = catalog
                .iter()
                .map(|role| role.base_hours * role.phase_fraction(phase))
                .sum();
            (phase, total)
        })
        .collect();

    catalog
        .iter()
        .map(|role| {
            let row = Phase::ALL
                .into_iter()
                .map(|phase| {
                    let weight_total = phase_weight_totals[&phase];
                    let hours = if weight_total > 0.0 {
                        let weight = role.base_hours * role.phase_fraction(phase);
                        phase_hours.get(&phase).copied().unwrap_or(0.0) * weight / weight_total
                    } else {
                        0.0
                    };
                    (phase, hours)
                })
                .collect();
            (role.name.clone(), row)
        })
        .collect()
}

/// Apply the `(2 - m)` correction: a role that benefits more than average
/// (`m > 1`) keeps fewer modeled hours, one that benefits less keeps more.
pub fn apply_benefit_correction(
    role_hours: &BTreeMap<String, BTreeMap<Phase, f64>>,
    multipliers: &BTreeMap<String, f64>,
) -> BTreeMap<String, BTreeMap<Phase, f64>> {
    role_hours
        .iter()
        .map(|(name, row)| {
            let m = multipliers.get(name).copied().unwrap_or(1.0);
            let corrected = row.iter().map(|(&phase, &hours)| (phase, hours * (2.0 - m))).collect();
            (name.clone(), corrected)
        })
        .collect()
}

/// Cost each role's hours at that role's own hourly rate.
pub fn role_costs(
    catalog: &RoleCatalog,
    role_hours: &BTreeMap<String, BTreeMap<Phase, f64>>,
) -> BTreeMap<String, BTreeMap<Phase, f64>> {
    role_hours
        .iter()
        .map(|(name, row)| {
            let rate = catalog.get(name).map(|r| r.hourly_rate).unwrap_or(0.0);
            let costs = row.iter().map(|(&phase, &hours)| (phase, hours * rate)).collect();
            (name.clone(), costs)
        })
        .collect()
}

/// Total hours per role group.
pub fn group_totals(
    catalog: &RoleCatalog,
    role_hours: &BTreeMap<String, BTreeMap<Phase, f64>>,
) -> BTreeMap<RoleGroup, f64> {
    let mut totals: BTreeMap<RoleGroup, f64> =
        RoleGroup::ALL.into_iter().map(|g| (g, 0.0)).collect();
    for role in catalog.iter() {
        if let Some(row) = role_hours.get(&role.name) {
            let role_total: f64 = row.values().sum();
            if let Some(total) = totals.get_mut(&role.group) {
                *total += role_total;
            }
        }
    }
    totals
}

fn role_summary(
    catalog: &RoleCatalog,
    baseline: &BTreeMap<String, BTreeMap<Phase, f64>>,
    modeled: &BTreeMap<String, BTreeMap<Phase, f64>>,
) -> Vector<RoleSummaryRow> {
    catalog
        .iter()
        .map(|role| {
            let baseline_hours: f64 = baseline
                .get(&role.name)
                .map(|row| row.values().sum())
                .unwrap_or(0.0);
            let modeled_hours: f64 = modeled
                .get(&role.name)
                .map(|row| row.values().sum())
                .unwrap_or(0.0);
            let hours_saved = baseline_hours - modeled_hours;
            let pct_saved = if baseline_hours > 0.0 {
                hours_saved / baseline_hours * 100.0
            } else {
                0.0
            };
            RoleSummaryRow {
                role: role.name.clone(),
                group: role.group,
                baseline_hours,
                modeled_hours,
                hours_saved,
                pct_saved,
                hourly_rate: role.hourly_rate,
                cost_savings: hours_saved * role.hourly_rate,
            }
        })
        .collect()
}

/// Full role allocation for one scenario: baseline and corrected modeled
/// hour tables, cost tables at role rates, group totals and the summary.
pub fn allocate(
    catalog: &RoleCatalog,
    baseline_phase_hours: &BTreeMap<Phase, f64>,
    modeled_phase_hours: &BTreeMap<Phase, f64>,
    maturity_levels: &BTreeMap<Initiative, f64>,
) -> RoleAllocation {
    let multipliers = role_multipliers(catalog, maturity_levels);

    let baseline_hours = split_phase_hours(catalog, baseline_phase_hours);
    let modeled_uncorrected = split_phase_hours(catalog, modeled_phase_hours);
    let modeled_hours = apply_benefit_correction(&modeled_uncorrected, &multipliers);

    let baseline_costs = role_costs(catalog, &baseline_hours);
    let modeled_costs = role_costs(catalog, &modeled_hours);
    let baseline_group_totals = group_totals(catalog, &baseline_hours);
    let modeled_group_totals = group_totals(catalog, &modeled_hours);
    let summary = role_summary(catalog, &baseline_hours, &modeled_hours);

    RoleAllocation {
        baseline_hours,
        modeled_hours,
        baseline_costs,
        modeled_costs,
        multipliers,
        baseline_group_totals,
        modeled_group_totals,
        summary,
    }
}
