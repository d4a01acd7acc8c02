//! Named cost-avoidance presets.
//!
//! Each preset pairs an avoidance `multiplier` with an `ongoing_factor`
//! (fraction of delivery savings counted as recurring avoidance), so a
//! caller can pick a risk posture by name without touching the model:
//! - **None**: development savings only
//! - **Minimal**: very conservative long-term benefits
//! - **Conservative**: risk-averse estimate
//! - **Moderate**: typical shift-left benefits (recommended)
//! - **Aggressive**: high-maturity organization with strong processes
//! - **Maximum**: best case with full delivery automation

use crate::core::CostAvoidanceConfig;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum AvoidancePreset {
    /// No cost avoidance
    None,
    /// 0.5x multiplier, 25% ongoing factor
    Minimal,
    /// 1.5x multiplier, 50% ongoing factor
    Conservative,
    /// 2.5x multiplier, 80% ongoing factor (recommended)
    Moderate,
    /// 4x multiplier, 120% ongoing factor
    Aggressive,
    /// 6x multiplier, 150% ongoing factor
    Maximum,
}

impl AvoidancePreset {
    pub const ALL: [AvoidancePreset; 6] = [
        AvoidancePreset::None,
        AvoidancePreset::Minimal,
        AvoidancePreset::Conservative,
        AvoidancePreset::Moderate,
        AvoidancePreset::Aggressive,
        AvoidancePreset::Maximum,
    ];

    /// Convert the preset to concrete avoidance parameters.
    pub fn to_config(self) -> CostAvoidanceConfig {
        let (multiplier, ongoing_factor) = match self {
            AvoidancePreset::None => (0.0, 0.0),
            AvoidancePreset::Minimal => (0.5, 0.25),
            AvoidancePreset::Conservative => (1.5, 0.5),
            AvoidancePreset::Moderate => (2.5, 0.8),
            AvoidancePreset::Aggressive => (4.0, 1.2),
            AvoidancePreset::Maximum => (6.0, 1.5),
        };
        CostAvoidanceConfig {
            multiplier,
            ongoing_factor,
        }
    }

    /// Parse a preset from its string name (returns Option instead of Result).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "none" => Some(AvoidancePreset::None),
            "minimal" => Some(AvoidancePreset::Minimal),
            "conservative" => Some(AvoidancePreset::Conservative),
            "moderate" => Some(AvoidancePreset::Moderate),
            "aggressive" => Some(AvoidancePreset::Aggressive),
            "maximum" | "max" => Some(AvoidancePreset::Maximum),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AvoidancePreset::None => "none",
            AvoidancePreset::Minimal => "minimal",
            AvoidancePreset::Conservative => "conservative",
            AvoidancePreset::Moderate => "moderate",
            AvoidancePreset::Aggressive => "aggressive",
            AvoidancePreset::Maximum => "maximum",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            AvoidancePreset::None => "No cost avoidance - development savings only",
            AvoidancePreset::Minimal => "Very conservative long-term benefits",
            AvoidancePreset::Conservative => "Minimal long-term benefits, risk-averse estimate",
            AvoidancePreset::Moderate => "Typical shift-left benefits, industry average",
            AvoidancePreset::Aggressive => "High-maturity organization with strong processes",
            AvoidancePreset::Maximum => "Best-case scenario with full delivery automation",
        }
    }
}

impl Default for AvoidancePreset {
    fn default() -> Self {
        AvoidancePreset::Moderate
    }
}

impl fmt::Display for AvoidancePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
