//! Client-side roadmap state: filters, expansion, aggregation, and
//! optimistic toggles.
//!
//! [`RoadmapView`] composes the static catalog with a local mirror of the
//! persisted status map. Toggles flip the mirror immediately and confirm
//! asynchronously through a [`StatusBackend`]; a failed write reverts the
//! flip. There is no retry and no queueing, the user just sees the item
//! flick back.

use std::collections::HashSet;

use crate::catalog;
use crate::client::RoadmapClient;
use crate::models::{Priority, RoadmapBranch, RoadmapItem, StatusMap};

/// The seam between the view controller and the wire.
///
/// Both operations are total: a failed fetch reads as an empty map and a
/// failed write reports `false`, matching the availability-over-correctness
/// policy of the read path and the revert semantics of the write path.
pub trait StatusBackend {
    fn load_status(&self) -> impl std::future::Future<Output = StatusMap> + Send;
    fn store_status(
        &self,
        id: &str,
        completed: bool,
    ) -> impl std::future::Future<Output = bool> + Send;
}

impl StatusBackend for RoadmapClient {
    async fn load_status(&self) -> StatusMap {
        self.status().await.unwrap_or_default()
    }

    async fn store_status(&self, id: &str, completed: bool) -> bool {
        self.set_status(id, completed).await.is_ok()
    }
}

/// Branch selection: everything, or a single branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchSelection {
    All,
    Branch(String),
}

/// Priority filter. Only meaningful while the selection is [`BranchSelection::All`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityFilter {
    All,
    Only(Priority),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Pending,
    Completed,
}

/// Per-branch completion aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BranchProgress {
    pub completed: usize,
    pub total: usize,
    /// Rounded to the nearest integer percent.
    pub percent: u32,
}

pub struct RoadmapView {
    completed: StatusMap,
    selected: BranchSelection,
    priority_filter: PriorityFilter,
    status_filter: StatusFilter,
    search_query: String,
    expanded: HashSet<String>,
}

impl Default for RoadmapView {
    fn default() -> Self {
        Self::new()
    }
}

impl RoadmapView {
    /// Fresh view: nothing filtered, every branch expanded, empty mirror.
    pub fn new() -> Self {
        Self {
            completed: StatusMap::new(),
            selected: BranchSelection::All,
            priority_filter: PriorityFilter::All,
            status_filter: StatusFilter::All,
            search_query: String::new(),
            expanded: all_branch_ids(),
        }
    }

    /// Seed the local mirror from the backend. A failed fetch leaves the
    /// mirror empty; the page still renders with everything incomplete.
    pub async fn load<B: StatusBackend>(&mut self, backend: &B) {
        self.completed = backend.load_status().await;
    }

    // ============================================================
    // Toggles
    // ============================================================

    /// Optimistically flip an item and confirm through the backend.
    ///
    /// The local mirror changes before the write is issued. If the write
    /// fails the flip is reverted. Returns the settled value, so a return
    /// equal to the prior state means the update did not stick.
    pub async fn toggle_item<B: StatusBackend>(&mut self, backend: &B, id: &str) -> bool {
        let new_value = !self.is_completed(id);
        self.completed.insert(id.to_string(), new_value);

        if !backend.store_status(id, new_value).await {
            self.completed.insert(id.to_string(), !new_value);
            return !new_value;
        }
        new_value
    }

    pub fn is_completed(&self, id: &str) -> bool {
        self.completed.get(id).copied().unwrap_or(false)
    }

    // ============================================================
    // Selection and expansion
    // ============================================================

    /// Select a branch. Selecting [`BranchSelection::All`] expands every
    /// branch; selecting one branch collapses the expansion set to exactly
    /// that branch, discarding any manual expand/collapse state.
    pub fn select_branch(&mut self, selection: BranchSelection) {
        match &selection {
            BranchSelection::All => self.expanded = all_branch_ids(),
            BranchSelection::Branch(id) => {
                self.expanded = HashSet::from([id.clone()]);
            }
        }
        self.selected = selection;
    }

    pub fn selected_branch(&self) -> &BranchSelection {
        &self.selected
    }

    /// Flip a branch's expansion, independent of selection.
    pub fn toggle_branch(&mut self, branch_id: &str) {
        if !self.expanded.remove(branch_id) {
            self.expanded.insert(branch_id.to_string());
        }
    }

    pub fn is_expanded(&self, branch_id: &str) -> bool {
        self.expanded.contains(branch_id)
    }

    // ============================================================
    // Filters
    // ============================================================

    pub fn set_priority_filter(&mut self, filter: PriorityFilter) {
        self.priority_filter = filter;
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.status_filter = filter;
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Branches surviving selection and the priority filter. The priority
    /// filter only applies while the selection is `All`; with a single
    /// branch selected the priority control is not shown.
    pub fn filtered_branches(&self) -> Vec<&'static RoadmapBranch> {
        let mut branches: Vec<_> = catalog::branches().iter().collect();

        match &self.selected {
            BranchSelection::All => {
                if let PriorityFilter::Only(priority) = self.priority_filter {
                    branches.retain(|b| b.priority == priority);
                }
            }
            BranchSelection::Branch(id) => branches.retain(|b| &b.id == id),
        }

        branches
    }

    /// Items of a branch matching the search predicate and the status
    /// filter. Search is case-insensitive over title, description and id.
    pub fn filter_items<'a>(&self, branch: &'a RoadmapBranch) -> Vec<&'a RoadmapItem> {
        branch
            .items
            .iter()
            .filter(|item| self.matches_search(item) && self.matches_status(item))
            .collect()
    }

    fn matches_search(&self, item: &RoadmapItem) -> bool {
        if self.search_query.is_empty() {
            return true;
        }
        let query = self.search_query.to_lowercase();
        item.title.to_lowercase().contains(&query)
            || item
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&query))
            || item.id.to_lowercase().contains(&query)
    }

    fn matches_status(&self, item: &RoadmapItem) -> bool {
        match self.status_filter {
            StatusFilter::All => true,
            StatusFilter::Completed => self.is_completed(&item.id),
            StatusFilter::Pending => !self.is_completed(&item.id),
        }
    }

    fn item_filter_engaged(&self) -> bool {
        !self.search_query.is_empty() || self.status_filter != StatusFilter::All
    }

    /// The items to display for a branch, or `None` when the branch should
    /// be dropped from the list entirely.
    ///
    /// A branch with zero matches is dropped only when a search or status
    /// filter is actually engaged; otherwise the full item list is shown, so
    /// empty filter results hide nothing by accident.
    pub fn visible_items<'a>(&self, branch: &'a RoadmapBranch) -> Option<Vec<&'a RoadmapItem>> {
        let filtered = self.filter_items(branch);
        if filtered.is_empty() {
            if self.item_filter_engaged() {
                return None;
            }
            return Some(branch.items.iter().collect());
        }
        Some(filtered)
    }

    // ============================================================
    // Aggregates
    // ============================================================

    /// Fixed by the static catalog.
    pub fn total_items(&self) -> usize {
        catalog::total_items_count()
    }

    /// True entries across the whole mirror, not just visible items. Stale
    /// ids from removed catalog items still count until overwritten.
    pub fn completed_count(&self) -> usize {
        self.completed.values().filter(|&&done| done).count()
    }

    pub fn progress_percent(&self) -> u32 {
        percent(self.completed_count(), self.total_items())
    }

    pub fn branch_progress(&self, branch: &RoadmapBranch) -> BranchProgress {
        let completed = branch
            .items
            .iter()
            .filter(|item| self.is_completed(&item.id))
            .count();
        BranchProgress {
            completed,
            total: branch.items.len(),
            percent: percent(completed, branch.items.len()),
        }
    }
}

fn percent(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u32
}

fn all_branch_ids() -> HashSet<String> {
    catalog::branches().iter().map(|b| b.id.clone()).collect()
}
