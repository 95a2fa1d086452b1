use serde::{Deserialize, Serialize};

use super::RoadmapItem;

/// A top-level grouping of roadmap items sharing a theme.
///
/// Branches are immutable catalog data. Item order within a branch is
/// display-relevant and preserved as authored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoadmapBranch {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Symbolic icon name, resolved to a glyph by the catalog's icon
    /// resolver. Unrecognized names fall back to a generic marker.
    pub icon: String,
    /// Display color token (hex).
    pub color: String,
    pub priority: Priority,
    pub items: Vec<RoadmapItem>,
}

/// Branch priority, used by the view controller's priority filter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Critical,
    High,
    Medium,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "critical" => Some(Self::Critical),
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            _ => None,
        }
    }
}
