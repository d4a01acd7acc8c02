//! Per-role benefit multipliers derived from active initiatives.
//!
//! A role's multiplier `m` is the maturity-weighted average of its benefit
//! factors over the initiatives that are actually active. With nothing
//! active the average is undefined, so the multiplier is neutral (1.0).

use crate::core::initiative::Initiative;
use crate::roles::RoleCatalog;
use std::collections::BTreeMap;

/// Derive `m[role]` from the scenario's maturity levels.
///
/// `m[r] = Σ_i (maturity[i]/100) · factor[r][group(i)] / Σ_i (maturity[i]/100)`
/// over initiatives with maturity > 0.
pub fn role_multipliers(
    catalog: &RoleCatalog,
    maturity_levels: &BTreeMap<Initiative, f64>,
) -> BTreeMap<String, f64> {
    let active: Vec<(Initiative, f64)> = Initiative::ALL
        .into_iter()
        .filter_map(|i| {
            let pct = maturity_levels.get(&i).copied().unwrap_or(0.0);
            (pct > 0.0).then_some((i, pct / 100.0))
        })
        .collect();
    let total_weight: f64 = active.iter().map(|(_, w)| w).sum();

    catalog
        .iter()
        .map(|role| {
            let multiplier = if total_weight > 0.0 {
                let weighted: f64 = active
                    .iter()
                    .map(|&(initiative, weight)| {
                        weight * role.benefit_factor(initiative.multiplier_group())
                    })
                    .sum();
                weighted / total_weight
            } else {
                1.0
            };
            (role.name.clone(), multiplier)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::initiative::MultiplierGroup;

    #[test]
    fn no_active_initiatives_is_neutral() {
        let catalog = RoleCatalog::builtin();
        let multipliers = role_multipliers(&catalog, &BTreeMap::new());
        assert!(multipliers.values().all(|&m| m == 1.0));
    }

    #[test]
    fn single_initiative_uses_its_group_factor() {
        let catalog = RoleCatalog::builtin();
        let maturity = [(Initiative::AutomatedTesting, 100.0)].into_iter().collect();
        let multipliers = role_multipliers(&catalog, &maturity);

        // Maturity weight cancels with a single active initiative.
        let test_engineer = catalog.get("Test Engineer").unwrap();
        assert_eq!(
            multipliers["Test Engineer"],
            test_engineer.benefit_factor(MultiplierGroup::Automation)
        );
        assert_eq!(multipliers["Test Engineer"], 1.4);
    }

    #[test]
    fn multiplier_is_weighted_by_maturity_share() {
        let catalog = RoleCatalog::builtin();
        // Automation at 80, Methodology (via Migration Accelerators) at 20.
        let maturity = [
            (Initiative::AutomatedTesting, 80.0),
            (Initiative::MigrationAccelerators, 20.0),
        ]
        .into_iter()
        .collect();
        let multipliers = role_multipliers(&catalog, &maturity);

        let role = catalog.get("Project Manager").unwrap();
        let expected = (0.8 * role.benefit_factor(MultiplierGroup::Automation)
            + 0.2 * role.benefit_factor(MultiplierGroup::Methodology))
            / 1.0;
        assert!((multipliers["Project Manager"] - expected).abs() < 1e-12);
    }
}
