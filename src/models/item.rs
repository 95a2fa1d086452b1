use serde::{Deserialize, Serialize};

/// A single roadmap entry within a branch.
///
/// The `id` is globally unique across the whole catalog and is shown to the
/// user as a display code (e.g. `WEB-03`). It is also the key under which the
/// item's completion flag is persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoadmapItem {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    /// Affects indentation and labeling only; no behavioral difference.
    #[serde(rename = "type")]
    pub item_type: ItemType,
}

/// The presentational kind of a roadmap item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    Task,
    Subtask,
    Research,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::Subtask => "subtask",
            Self::Research => "research",
        }
    }
}
