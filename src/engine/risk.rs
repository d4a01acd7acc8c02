//! Risk-weighted planning hours.

use crate::core::phase::Phase;
use std::collections::BTreeMap;

/// `risk_adjusted[p] = modeled[p] · risk_weight[p]`. A phase without a
/// configured weight passes through unchanged. Reporting-only: the result
/// never feeds back into costs or savings.
pub fn risk_adjusted_hours(
    modeled_hours: &BTreeMap<Phase, f64>,
    risk_weights: &BTreeMap<Phase, f64>,
) -> BTreeMap<Phase, f64> {
    Phase::ALL
        .into_iter()
        .map(|phase| {
            let hours = modeled_hours.get(&phase).copied().unwrap_or(0.0);
            let weight = risk_weights.get(&phase).copied().unwrap_or(1.0);
            (phase, hours * weight)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::default_risk_weights;

    #[test]
    fn weights_multiply_elementwise() {
        let modeled: BTreeMap<Phase, f64> =
            Phase::ALL.into_iter().map(|p| (p, 100.0)).collect();
        let adjusted = risk_adjusted_hours(&modeled, &default_risk_weights());

        assert_eq!(adjusted[&Phase::Discover], 100.0);
        assert_eq!(adjusted[&Phase::PostGoLive], 700.0);
    }

    #[test]
    fn missing_weight_passes_through() {
        let modeled: BTreeMap<Phase, f64> =
            Phase::ALL.into_iter().map(|p| (p, 50.0)).collect();
        let adjusted = risk_adjusted_hours(&modeled, &BTreeMap::new());
        assert!(adjusted.values().all(|&h| h == 50.0));
    }
}
