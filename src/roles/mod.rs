//! Role catalog: named team functions with base hours, rates, per-phase
//! allocation vectors and per-group benefit factors.
//!
//! Roles fall into two groups: the Pod (core delivery team, staffed for the
//! whole engagement) and the Pooled specialists (shared across projects).
//! Each role's phase-allocation vector must sum to 100; the catalog checks
//! this at construction time. Benefit factors say how strongly a role gains
//! from each initiative multiplier group; a missing entry means neutral
//! (1.0).

pub mod allocation;
pub mod multipliers;

use crate::core::initiative::MultiplierGroup;
use crate::core::phase::Phase;
use crate::error::ShiftmapError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum RoleGroup {
    /// Core delivery team, dedicated to the engagement.
    Pod,
    /// Shared specialist pool.
    Pooled,
}

impl RoleGroup {
    pub const ALL: [RoleGroup; 2] = [RoleGroup::Pod, RoleGroup::Pooled];

    pub fn label(self) -> &'static str {
        match self {
            RoleGroup::Pod => "Pod",
            RoleGroup::Pooled => "Pooled",
        }
    }
}

impl fmt::Display for RoleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoleDefinition {
    pub name: String,
    pub group: RoleGroup,
    /// Staffing-plan hours for a reference-sized project; only the relative
    /// sizes matter for the proportional split.
    pub base_hours: f64,
    pub hourly_rate: f64,
    /// Percent of this role's time per phase; sums to 100.
    pub phase_allocation: BTreeMap<Phase, f64>,
    /// Benefit factor per initiative multiplier group; absent means 1.0.
    pub benefit_factors: BTreeMap<MultiplierGroup, f64>,
}

impl RoleDefinition {
    /// Share of this role's time in one phase, as a fraction.
    pub fn phase_fraction(&self, phase: Phase) -> f64 {
        self.phase_allocation.get(&phase).copied().unwrap_or(0.0) / 100.0
    }

    pub fn benefit_factor(&self, group: MultiplierGroup) -> f64 {
        self.benefit_factors.get(&group).copied().unwrap_or(1.0)
    }
}

/// Read-only set of role definitions, validated at construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoleCatalog {
    roles: Vec<RoleDefinition>,
}

impl RoleCatalog {
    pub fn new(roles: Vec<RoleDefinition>) -> Result<Self, ShiftmapError> {
        if roles.is_empty() {
            return Err(ShiftmapError::config("role catalog is empty"));
        }
        let mut seen = std::collections::BTreeSet::new();
        for role in &roles {
            if !seen.insert(role.name.clone()) {
                return Err(ShiftmapError::config(format!(
                    "duplicate role name: {}",
                    role.name
                )));
            }
            if !role.base_hours.is_finite() || role.base_hours < 0.0 {
                return Err(ShiftmapError::config(format!(
                    "base hours for {} must be non-negative, got {}",
                    role.name, role.base_hours
                )));
            }
            if !role.hourly_rate.is_finite() || role.hourly_rate < 0.0 {
                return Err(ShiftmapError::config(format!(
                    "hourly rate for {} must be non-negative, got {}",
                    role.name, role.hourly_rate
                )));
            }
            let allocation_sum: f64 = role.phase_allocation.values().sum();
            if (allocation_sum - 100.0).abs() > crate::core::ALLOCATION_TOLERANCE {
                return Err(ShiftmapError::config(format!(
                    "phase allocation for {} sums to {:.2}, expected 100",
                    role.name, allocation_sum
                )));
            }
        }
        Ok(Self { roles })
    }

    /// The built-in ten-role staffing model.
    pub fn builtin() -> Self {
        match Self::new(builtin_roles()) {
            Ok(catalog) => catalog,
            Err(_) => unreachable!("built-in role catalog is valid"),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoleDefinition> {
        self.roles.iter()
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&RoleDefinition> {
        self.roles.iter().find(|r| r.name == name)
    }

    pub fn total_base_hours(&self) -> f64 {
        self.roles.iter().map(|r| r.base_hours).sum()
    }

    /// Role names per group, in catalog order.
    pub fn group_members(&self, group: RoleGroup) -> Vec<&str> {
        self.roles
            .iter()
            .filter(|r| r.group == group)
            .map(|r| r.name.as_str())
            .collect()
    }
}

fn role(
    name: &str,
    group: RoleGroup,
    base_hours: f64,
    hourly_rate: f64,
    allocation: [f64; Phase::COUNT],
    factors: &[(MultiplierGroup, f64)],
) -> RoleDefinition {
    RoleDefinition {
        name: name.to_string(),
        group,
        base_hours,
        hourly_rate,
        phase_allocation: Phase::ALL.into_iter().zip(allocation).collect(),
        benefit_factors: factors.iter().copied().collect(),
    }
}

// Phase order: Discover, Plan, Design, Build, Test, Deploy, Post Go-Live.
fn builtin_roles() -> Vec<RoleDefinition> {
    use MultiplierGroup::*;
    vec![
        role(
            "Project Manager",
            RoleGroup::Pod,
            1900.0,
            95.0,
            [10.0, 15.0, 15.0, 20.0, 15.0, 10.0, 15.0],
            &[
                (Methodology, 1.2),
                (Tooling, 1.05),
                (Automation, 0.85),
                (Environments, 0.9),
                (DataMigration, 0.9),
                (Reuse, 0.9),
            ],
        ),
        role(
            "Solution Architect",
            RoleGroup::Pod,
            1400.0,
            140.0,
            [15.0, 20.0, 30.0, 15.0, 10.0, 5.0, 5.0],
            &[
                (Tooling, 1.15),
                (Reuse, 1.2),
                (Methodology, 1.1),
                (Automation, 0.95),
                (Environments, 1.05),
                (DataMigration, 0.95),
            ],
        ),
        role(
            "Functional Consultant",
            RoleGroup::Pod,
            2600.0,
            115.0,
            [10.0, 15.0, 20.0, 25.0, 15.0, 5.0, 10.0],
            &[
                (Reuse, 1.25),
                (Methodology, 1.1),
                (Automation, 0.9),
                (Environments, 0.95),
            ],
        ),
        role(
            "Technical Consultant",
            RoleGroup::Pod,
            2400.0,
            120.0,
            [5.0, 10.0, 20.0, 35.0, 15.0, 10.0, 5.0],
            &[
                (Tooling, 1.2),
                (Automation, 1.15),
                (Reuse, 1.15),
                (Environments, 1.1),
                (DataMigration, 1.05),
                (Methodology, 0.95),
            ],
        ),
        role(
            "Integration Engineer",
            RoleGroup::Pod,
            1800.0,
            125.0,
            [5.0, 10.0, 15.0, 40.0, 15.0, 10.0, 5.0],
            &[
                (Reuse, 1.3),
                (Automation, 1.1),
                (Tooling, 1.1),
                (Environments, 1.05),
                (Methodology, 0.9),
            ],
        ),
        role(
            "Data Migration Specialist",
            RoleGroup::Pooled,
            1600.0,
            110.0,
            [10.0, 10.0, 15.0, 30.0, 20.0, 10.0, 5.0],
            &[
                (DataMigration, 1.35),
                (Automation, 1.05),
                (Tooling, 1.05),
                (Methodology, 0.95),
            ],
        ),
        role(
            "Test Engineer",
            RoleGroup::Pooled,
            2000.0,
            100.0,
            [0.0, 5.0, 10.0, 20.0, 45.0, 10.0, 10.0],
            &[
                (Automation, 1.4),
                (Environments, 1.15),
                (Reuse, 1.05),
            ],
        ),
        role(
            "DevOps Engineer",
            RoleGroup::Pooled,
            1200.0,
            130.0,
            [5.0, 10.0, 10.0, 25.0, 15.0, 25.0, 10.0],
            &[
                (Environments, 1.35),
                (Automation, 1.2),
                (Tooling, 1.1),
                (Methodology, 0.9),
                (DataMigration, 0.95),
            ],
        ),
        role(
            "Reporting Analyst",
            RoleGroup::Pooled,
            1100.0,
            105.0,
            [5.0, 10.0, 15.0, 25.0, 20.0, 10.0, 15.0],
            &[
                (Reuse, 1.1),
                (Automation, 1.05),
                (DataMigration, 1.1),
                (Methodology, 0.95),
                (Environments, 0.95),
            ],
        ),
        role(
            "Change Management Lead",
            RoleGroup::Pooled,
            1000.0,
            90.0,
            [15.0, 20.0, 10.0, 10.0, 10.0, 15.0, 20.0],
            &[
                (Methodology, 1.25),
                (Automation, 0.8),
                (Tooling, 0.95),
                (Reuse, 0.9),
                (Environments, 0.9),
                (DataMigration, 0.9),
            ],
        ),
    ]
}
