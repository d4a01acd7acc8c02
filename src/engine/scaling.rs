//! Maturity and project-size scaling of the calibrated matrix.

use crate::core::initiative::Initiative;
use crate::core::matrix::CalibratedMatrix;
use crate::core::phase::Phase;
use std::collections::BTreeMap;

/// Scale the calibrated deltas by project size and per-initiative maturity.
///
/// `effective[i,p] = matrix[i,p] · (total_hours / reference_hours) ·
/// (maturity[i] / 100)`. Both factors are linear and commute; an initiative
/// at maturity 0 contributes exactly zero. No caps are applied here — the
/// only saturation in the model is the zero floor during phase aggregation.
pub fn effective_deltas(
    matrix: &CalibratedMatrix,
    maturity_levels: &BTreeMap<Initiative, f64>,
    total_hours: f64,
) -> BTreeMap<Initiative, BTreeMap<Phase, f64>> {
    let size_ratio = total_hours / matrix.reference_hours();

    Initiative::ALL
        .into_iter()
        .map(|initiative| {
            let maturity_fraction =
                maturity_levels.get(&initiative).copied().unwrap_or(0.0) / 100.0;
            let row = Phase::ALL
                .into_iter()
                .map(|phase| {
                    (
                        phase,
                        matrix.delta(initiative, phase) * size_ratio * maturity_fraction,
                    )
                })
                .collect();
            (initiative, row)
        })
        .collect()
}

/// Sum of one initiative's effective deltas across all phases.
pub fn row_total(row: &BTreeMap<Phase, f64>) -> f64 {
    row.values().sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::matrix::REFERENCE_HOURS;

    #[test]
    fn zero_maturity_contributes_nothing() {
        let matrix = CalibratedMatrix::builtin();
        let deltas = effective_deltas(&matrix, &BTreeMap::new(), REFERENCE_HOURS);
        for row in deltas.values() {
            assert!(row.values().all(|&d| d == 0.0));
        }
    }

    #[test]
    fn full_maturity_at_reference_size_is_the_matrix() {
        let matrix = CalibratedMatrix::builtin();
        let maturity = Initiative::ALL.into_iter().map(|i| (i, 100.0)).collect();
        let deltas = effective_deltas(&matrix, &maturity, REFERENCE_HOURS);

        for initiative in Initiative::ALL {
            for phase in Phase::ALL {
                assert_eq!(
                    deltas[&initiative][&phase],
                    matrix.delta(initiative, phase)
                );
            }
        }
    }

    #[test]
    fn size_and_maturity_scale_linearly() {
        let matrix = CalibratedMatrix::builtin();
        let maturity = [(Initiative::AutomatedTesting, 50.0)].into_iter().collect();
        let deltas = effective_deltas(&matrix, &maturity, REFERENCE_HOURS * 2.0);

        assert_eq!(
            deltas[&Initiative::AutomatedTesting][&Phase::Test],
            matrix.delta(Initiative::AutomatedTesting, Phase::Test) * 2.0 * 0.5
        );
    }
}
