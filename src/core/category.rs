//! Strategic savings categories for executive reporting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three fixed strategic buckets into which per-role savings are
/// decomposed. Every initiative owns a weight vector over these buckets that
/// sums to 1.0, so the decomposition is exact.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum SavingsCategory {
    ConfigurationReuse,
    Methodology,
    AiAutomation,
}

impl SavingsCategory {
    pub const COUNT: usize = 3;

    pub const ALL: [SavingsCategory; SavingsCategory::COUNT] = [
        SavingsCategory::ConfigurationReuse,
        SavingsCategory::Methodology,
        SavingsCategory::AiAutomation,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SavingsCategory::ConfigurationReuse => "Configuration Reuse",
            SavingsCategory::Methodology => "Methodology & Process",
            SavingsCategory::AiAutomation => "AI & Automation",
        }
    }
}

impl fmt::Display for SavingsCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
