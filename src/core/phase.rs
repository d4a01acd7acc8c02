//! The ordered set of delivery phases.
//!
//! Six delivery phases plus a post-go-live operational phase. The enum's
//! declaration order is the canonical display order; `Ord` derives from it,
//! so `BTreeMap<Phase, _>` iterates phases in delivery sequence.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    Discover,
    Plan,
    Design,
    Build,
    Test,
    Deploy,
    PostGoLive,
}

impl Phase {
    pub const COUNT: usize = 7;

    /// All phases in delivery order.
    pub const ALL: [Phase; Phase::COUNT] = [
        Phase::Discover,
        Phase::Plan,
        Phase::Design,
        Phase::Build,
        Phase::Test,
        Phase::Deploy,
        Phase::PostGoLive,
    ];

    /// Delivery phases only (everything before post-go-live). Direct cost
    /// savings apply here; the post-go-live phase carries avoidance instead.
    pub fn delivery() -> impl Iterator<Item = Phase> {
        Self::ALL.into_iter().filter(|p| !p.is_post_go_live())
    }

    pub fn is_post_go_live(self) -> bool {
        matches!(self, Phase::PostGoLive)
    }

    /// Human-readable phase name for tables and reports.
    pub fn label(self) -> &'static str {
        match self {
            Phase::Discover => "Discover",
            Phase::Plan => "Plan",
            Phase::Design => "Design",
            Phase::Build => "Build",
            Phase::Test => "Test",
            Phase::Deploy => "Deploy",
            Phase::PostGoLive => "Post Go-Live",
        }
    }

    /// Parse a phase from a user-facing name (returns Option instead of Result).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['_', ' '], "-").as_str() {
            "discover" => Some(Phase::Discover),
            "plan" => Some(Phase::Plan),
            "design" => Some(Phase::Design),
            "build" => Some(Phase::Build),
            "test" => Some(Phase::Test),
            "deploy" => Some(Phase::Deploy),
            "post-go-live" | "postgolive" => Some(Phase::PostGoLive),
            _ => None,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
