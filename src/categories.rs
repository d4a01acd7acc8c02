//! Strategic category decomposition of role-level savings.
//!
//! Each role's total hours saved splits across the three categories using
//! the active initiatives' category weights, blended by each initiative's
//! share of total active maturity. Because every initiative's weights sum
//! to 1.0 and the maturity shares sum to 1.0, the three cells reproduce the
//! role's saved hours exactly — whatever those saved hours are; the
//! decomposition is independent of the non-reconciling role-multiplier
//! step upstream.

use crate::core::category::SavingsCategory;
use crate::core::initiative::Initiative;
use crate::core::phase::Phase;
use crate::core::{CategoryBreakdown, CategoryCell};
use crate::roles::RoleCatalog;
use std::collections::BTreeMap;

/// Blended category weights over the active initiatives:
/// `blend[c] = Σ_i (maturity[i] / Σ_j maturity[j]) · weight[i][c]`.
/// With nothing active there is no blend and every weight is zero.
pub fn blended_category_weights(
    maturity_levels: &BTreeMap<Initiative, f64>,
) -> BTreeMap<SavingsCategory, f64> {
    let total_maturity: f64 = Initiative::ALL
        .into_iter()
        .map(|i| maturity_levels.get(&i).copied().unwrap_or(0.0).max(0.0))
        .sum();

    SavingsCategory::ALL
        .into_iter()
        .map(|category| {
            let blended = if total_maturity > 0.0 {
                Initiative::ALL
                    .into_iter()
                    .map(|initiative| {
                        let maturity =
                            maturity_levels.get(&initiative).copied().unwrap_or(0.0).max(0.0);
                        maturity / total_maturity * initiative.category_weight(category)
                    })
                    .sum()
            } else {
                0.0
            };
            (category, blended)
        })
        .collect()
}

/// Decompose each role's saved hours (baseline minus modeled, summed over
/// phases) into the three strategic categories, costed at the role's rate.
pub fn decompose(
    catalog: &RoleCatalog,
    baseline_role_hours: &BTreeMap<String, BTreeMap<Phase, f64>>,
    modeled_role_hours: &BTreeMap<String, BTreeMap<Phase, f64>>,
    maturity_levels: &BTreeMap<Initiative, f64>,
) -> CategoryBreakdown {
    let blend = blended_category_weights(maturity_levels);

    let mut by_role = BTreeMap::new();
    let mut totals: BTreeMap<SavingsCategory, CategoryCell> = SavingsCategory::ALL
        .into_iter()
        .map(|c| (c, CategoryCell::default()))
        .collect();

    for role in catalog.iter() {
        let baseline: f64 = baseline_role_hours
            .get(&role.name)
            .map(|row| row.values().sum())
            .unwrap_or(0.0);
        let modeled: f64 = modeled_role_hours
            .get(&role.name)
            .map(|row| row.values().sum())
            .unwrap_or(0.0);
        let saved = baseline - modeled;

        let cells: BTreeMap<SavingsCategory, CategoryCell> = SavingsCategory::ALL
            .into_iter()
            .map(|category| {
                let hours = saved * blend[&category];
                (
                    category,
                    CategoryCell {
                        hours,
                        cost: hours * role.hourly_rate,
                    },
                )
            })
            .collect();

        for (category, cell) in &cells {
            if let Some(total) = totals.get_mut(category) {
                total.hours += cell.hours;
                total.cost += cell.cost;
            }
        }
        by_role.insert(role.name.clone(), cells);
    }

    CategoryBreakdown { by_role, totals }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{default_phase_allocation, DEFAULT_TOTAL_HOURS};
    use crate::engine::phases::baseline_hours;
    use crate::roles::allocation::split_phase_hours;

    fn role_tables() -> (
        RoleCatalog,
        BTreeMap<String, BTreeMap<Phase, f64>>,
        BTreeMap<String, BTreeMap<Phase, f64>>,
    ) {
        let catalog = RoleCatalog::builtin();
        let baseline_phase = baseline_hours(DEFAULT_TOTAL_HOURS, &default_phase_allocation());
        let modeled_phase: BTreeMap<Phase, f64> =
            baseline_phase.iter().map(|(&p, &h)| (p, h * 0.92)).collect();
        let baseline = split_phase_hours(&catalog, &baseline_phase);
        let modeled = split_phase_hours(&catalog, &modeled_phase);
        (catalog, baseline, modeled)
    }

    #[test]
    fn blend_with_single_initiative_is_its_weights() {
        let maturity = [(Initiative::IntegrationCodeReuse, 80.0)].into_iter().collect();
        let blend = blended_category_weights(&maturity);

        for category in SavingsCategory::ALL {
            assert!(
                (blend[&category]
                    - Initiative::IntegrationCodeReuse.category_weight(category))
                .abs()
                    < 1e-12
            );
        }
    }

    #[test]
    fn blend_sums_to_one_when_active() {
        let maturity = [
            (Initiative::AutomatedTesting, 70.0),
            (Initiative::AiAutomation, 30.0),
            (Initiative::PreconfiguredEnvironments, 10.0),
        ]
        .into_iter()
        .collect();
        let blend = blended_category_weights(&maturity);
        let sum: f64 = blend.values().sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn decomposition_is_exact_per_role() {
        let (catalog, baseline, modeled) = role_tables();
        let maturity = [
            (Initiative::AutomatedTesting, 60.0),
            (Initiative::MigrationAccelerators, 40.0),
        ]
        .into_iter()
        .collect();
        let breakdown = decompose(&catalog, &baseline, &modeled, &maturity);

        for role in catalog.iter() {
            let saved: f64 = baseline[&role.name].values().sum::<f64>()
                - modeled[&role.name].values().sum::<f64>();
            let cell_sum: f64 = breakdown.by_role[&role.name]
                .values()
                .map(|c| c.hours)
                .sum();
            assert!(
                (cell_sum - saved).abs() < 1e-9,
                "{}: {} != {}",
                role.name,
                cell_sum,
                saved
            );
        }
    }

    #[test]
    fn totals_accumulate_roles() {
        let (catalog, baseline, modeled) = role_tables();
        let maturity = [(Initiative::AutomatedTesting, 50.0)].into_iter().collect();
        let breakdown = decompose(&catalog, &baseline, &modeled, &maturity);

        for category in SavingsCategory::ALL {
            let from_roles: f64 = breakdown
                .by_role
                .values()
                .map(|cells| cells[&category].hours)
                .sum();
            assert!((breakdown.totals[&category].hours - from_roles).abs() < 1e-9);
        }
    }

    #[test]
    fn zero_maturity_yields_empty_decomposition() {
        let (catalog, baseline, _) = role_tables();
        let breakdown = decompose(&catalog, &baseline, &baseline, &BTreeMap::new());
        assert!(breakdown
            .totals
            .values()
            .all(|cell| cell.hours == 0.0 && cell.cost == 0.0));
    }
}
