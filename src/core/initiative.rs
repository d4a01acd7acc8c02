//! The fixed catalog of improvement initiatives.
//!
//! Each initiative is a named lever with a calibrated per-phase hour-delta
//! profile (owned by the [`CalibratedMatrix`](super::matrix::CalibratedMatrix)),
//! a weight vector over the three strategic savings categories, and a
//! multiplier group that decides how its benefits distribute across roles.
//! Category weights are validated to sum to 1.0 by
//! [`validate_catalog`], called when an engine is constructed.

use crate::core::category::SavingsCategory;
use crate::error::ShiftmapError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Initiative {
    ModernizationTooling,
    AiAutomation,
    MigrationAccelerators,
    PreconfiguredEnvironments,
    AutomatedTesting,
    DataConversionToolkit,
    IntegrationCodeReuse,
}

/// Benefit-distribution group an initiative belongs to. Each role carries a
/// per-group benefit factor; the group is the join key between initiatives
/// and role multipliers.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum MultiplierGroup {
    Tooling,
    Automation,
    Methodology,
    Environments,
    DataMigration,
    Reuse,
}

impl Initiative {
    pub const COUNT: usize = 7;

    pub const ALL: [Initiative; Initiative::COUNT] = [
        Initiative::ModernizationTooling,
        Initiative::AiAutomation,
        Initiative::MigrationAccelerators,
        Initiative::PreconfiguredEnvironments,
        Initiative::AutomatedTesting,
        Initiative::DataConversionToolkit,
        Initiative::IntegrationCodeReuse,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Initiative::ModernizationTooling => "Modernization Tooling",
            Initiative::AiAutomation => "AI & Automation",
            Initiative::MigrationAccelerators => "Migration Accelerators",
            Initiative::PreconfiguredEnvironments => "Preconfigured Environments",
            Initiative::AutomatedTesting => "Automated Testing",
            Initiative::DataConversionToolkit => "Data Conversion Toolkit",
            Initiative::IntegrationCodeReuse => "Integration Code Reuse",
        }
    }

    /// Parse an initiative from a user-facing name or kebab-case key.
    pub fn parse(s: &str) -> Option<Self> {
        let key = s.to_lowercase().replace(['_', ' '], "-").replace('&', "and");
        match key.as_str() {
            "modernization-tooling" => Some(Initiative::ModernizationTooling),
            "ai-automation" | "ai-and-automation" => Some(Initiative::AiAutomation),
            "migration-accelerators" => Some(Initiative::MigrationAccelerators),
            "preconfigured-environments" => Some(Initiative::PreconfiguredEnvironments),
            "automated-testing" => Some(Initiative::AutomatedTesting),
            "data-conversion-toolkit" => Some(Initiative::DataConversionToolkit),
            "integration-code-reuse" => Some(Initiative::IntegrationCodeReuse),
            _ => None,
        }
    }

    /// Which benefit-distribution group this initiative's savings follow.
    pub fn multiplier_group(self) -> MultiplierGroup {
        match self {
            Initiative::ModernizationTooling => MultiplierGroup::Tooling,
            Initiative::AiAutomation => MultiplierGroup::Automation,
            Initiative::MigrationAccelerators => MultiplierGroup::Methodology,
            Initiative::PreconfiguredEnvironments => MultiplierGroup::Environments,
            Initiative::AutomatedTesting => MultiplierGroup::Automation,
            Initiative::DataConversionToolkit => MultiplierGroup::DataMigration,
            Initiative::IntegrationCodeReuse => MultiplierGroup::Reuse,
        }
    }

    /// Weight of this initiative's savings in each strategic category.
    /// Each vector sums to 1.0; see [`validate_catalog`].
    pub fn category_weight(self, category: SavingsCategory) -> f64 {
        use SavingsCategory::{AiAutomation, ConfigurationReuse, Methodology};
        match self {
            Initiative::ModernizationTooling => match category {
                ConfigurationReuse => 0.30,
                Methodology => 0.30,
                AiAutomation => 0.40,
            },
            Initiative::AiAutomation => match category {
                ConfigurationReuse => 0.05,
                Methodology => 0.15,
                AiAutomation => 0.80,
            },
            Initiative::MigrationAccelerators => match category {
                ConfigurationReuse => 0.50,
                Methodology => 0.35,
                AiAutomation => 0.15,
            },
            Initiative::PreconfiguredEnvironments => match category {
                ConfigurationReuse => 0.70,
                Methodology => 0.20,
                AiAutomation => 0.10,
            },
            Initiative::AutomatedTesting => match category {
                ConfigurationReuse => 0.10,
                Methodology => 0.30,
                AiAutomation => 0.60,
            },
            Initiative::DataConversionToolkit => match category {
                ConfigurationReuse => 0.45,
                Methodology => 0.35,
                AiAutomation => 0.20,
            },
            Initiative::IntegrationCodeReuse => match category {
                ConfigurationReuse => 0.60,
                Methodology => 0.25,
                AiAutomation => 0.15,
            },
        }
    }
}

impl fmt::Display for Initiative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Check every initiative's category-weight vector sums to 1.0.
pub fn validate_catalog() -> Result<(), ShiftmapError> {
    for initiative in Initiative::ALL {
        let sum: f64 = SavingsCategory::ALL
            .iter()
            .map(|&c| initiative.category_weight(c))
            .sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ShiftmapError::config(format!(
                "category weights for {} sum to {:.4}, expected 1.0",
                initiative, sum
            )));
        }
    }
    Ok(())
}
