// Export modules for library usage
pub mod categories;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod report;
pub mod roles;

// Re-export commonly used types
pub use crate::core::{
    CalibratedMatrix, CategoryBreakdown, CategoryCell, CostAvoidanceConfig, Initiative,
    InitiativeImpact, KpiSummary, MultiplierGroup, Phase, PhaseCost, PhaseSummaryRow,
    RoleAllocation, RoleSummaryRow, SavingsCategory, ScenarioInputs, ScenarioResults,
};

pub use crate::config::{load_scenario, parse_scenario, AvoidancePreset};

pub use crate::engine::{builtin_engine, EfficiencyEngine};

pub use crate::error::ShiftmapError;

pub use crate::report::{plausibility_warning, MAX_CREDIBLE_COST_REDUCTION};

pub use crate::report::writer::{create_writer, OutputFormat, OutputWriter};

pub use crate::roles::{RoleCatalog, RoleDefinition, RoleGroup};
