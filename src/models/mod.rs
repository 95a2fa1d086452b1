//! Domain models for the goji roadmap.
//!
//! # Core Concepts
//!
//! ## Static Entities
//!
//! - [`RoadmapBranch`]: a top-level grouping of roadmap items sharing a
//!   theme, priority, icon and color. Defined entirely by the catalog.
//! - [`RoadmapItem`]: an individual task, subtask or research note. Item ids
//!   double as display codes and as keys into the status store.
//!
//! ## Mutable State
//!
//! - [`StatusMap`]: the persisted id → completed record. Absence of a key
//!   means "not completed", not "unknown". Entries are never deleted; ids
//!   for items removed from the catalog simply become inert.

mod branch;
mod item;
mod status;

pub use branch::*;
pub use item::*;
pub use status::*;
