//! The calibrated initiative × phase hour-delta matrix.
//!
//! Deltas are hours added to a phase at 100% maturity on a project of
//! `reference_hours` total size; negative values are savings. The built-in
//! matrix is calibrated so that a 17,054-hour project with every initiative
//! at 50% maturity saves ~8% of total hours (and ~16% at 100%).
//!
//! The matrix is an explicit, versioned value injected into
//! [`EfficiencyEngine`](crate::engine::EfficiencyEngine) at construction
//! time, so alternative calibrations can coexist and be tested side by side.

use crate::core::initiative::Initiative;
use crate::core::phase::Phase;
use crate::error::ShiftmapError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const BUILTIN_MATRIX_VERSION: &str = "calibrated-v3";

/// Total project hours the built-in calibration was tuned against.
pub const REFERENCE_HOURS: f64 = 17_054.0;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CalibratedMatrix {
    version: String,
    reference_hours: f64,
    deltas: BTreeMap<Initiative, BTreeMap<Phase, f64>>,
}

impl CalibratedMatrix {
    /// Construct a matrix from explicit rows. Fails when `reference_hours`
    /// is not a positive finite number or a row is missing a phase entry.
    pub fn new(
        version: impl Into<String>,
        reference_hours: f64,
        deltas: BTreeMap<Initiative, BTreeMap<Phase, f64>>,
    ) -> Result<Self, ShiftmapError> {
        if !reference_hours.is_finite() || reference_hours <= 0.0 {
            return Err(ShiftmapError::config(format!(
                "matrix reference hours must be positive, got {}",
                reference_hours
            )));
        }
        for initiative in Initiative::ALL {
            let row = deltas.get(&initiative).ok_or_else(|| {
                ShiftmapError::config(format!("matrix is missing a row for {}", initiative))
            })?;
            for phase in Phase::ALL {
                if !row.contains_key(&phase) {
                    return Err(ShiftmapError::config(format!(
                        "matrix row for {} is missing phase {}",
                        initiative, phase
                    )));
                }
            }
        }
        Ok(Self {
            version: version.into(),
            reference_hours,
            deltas,
        })
    }

    /// The built-in calibrated matrix.
    pub fn builtin() -> Self {
        let rows: [(Initiative, [f64; Phase::COUNT]); Initiative::COUNT] = [
            (
                Initiative::ModernizationTooling,
                [-13.0, -19.0, -32.0, -51.0, -128.0, -26.0, -96.0],
            ),
            (
                Initiative::AiAutomation,
                [-10.0, -16.0, -26.0, -77.0, -115.0, -51.0, -64.0],
            ),
            (
                Initiative::MigrationAccelerators,
                [-19.0, -32.0, -45.0, -64.0, -102.0, -19.0, -77.0],
            ),
            (
                Initiative::PreconfiguredEnvironments,
                [-26.0, -38.0, -51.0, -96.0, -77.0, -38.0, -115.0],
            ),
            (
                Initiative::AutomatedTesting,
                [-6.0, -10.0, -38.0, -128.0, -160.0, -32.0, -51.0],
            ),
            (
                Initiative::DataConversionToolkit,
                [-16.0, -26.0, -35.0, -58.0, -64.0, -22.0, -58.0],
            ),
            (
                Initiative::IntegrationCodeReuse,
                [-22.0, -29.0, -42.0, -115.0, -179.0, -29.0, -90.0],
            ),
        ];

        let deltas = rows
            .into_iter()
            .map(|(initiative, row)| {
                let by_phase = Phase::ALL.into_iter().zip(row).collect();
                (initiative, by_phase)
            })
            .collect();

        // Rows above cover every initiative and phase, so new() cannot fail.
        match Self::new(BUILTIN_MATRIX_VERSION, REFERENCE_HOURS, deltas) {
            Ok(matrix) => matrix,
            Err(_) => unreachable!("built-in matrix is complete"),
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn reference_hours(&self) -> f64 {
        self.reference_hours
    }

    /// Hour delta for one initiative in one phase at 100% maturity on a
    /// reference-sized project.
    pub fn delta(&self, initiative: Initiative, phase: Phase) -> f64 {
        self.deltas
            .get(&initiative)
            .and_then(|row| row.get(&phase))
            .copied()
            .unwrap_or(0.0)
    }

    /// Sum of an initiative's deltas across all phases.
    pub fn row_total(&self, initiative: Initiative) -> f64 {
        Phase::ALL.iter().map(|&p| self.delta(initiative, p)).sum()
    }
}
