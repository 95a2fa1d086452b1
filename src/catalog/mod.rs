//! The static roadmap catalog.
//!
//! An immutable, ordered tree of branches and items describing the studio's
//! launch roadmap. Built once per process; the status store and view
//! controller treat it as read-only collaborator data. Item ids are unique
//! across the whole catalog because they key the persisted status map.

mod icons;

pub use icons::BranchIcon;

use std::sync::OnceLock;

use crate::models::{ItemType, Priority, RoadmapBranch, RoadmapItem};

static BRANCHES: OnceLock<Vec<RoadmapBranch>> = OnceLock::new();

/// All branches in display order.
pub fn branches() -> &'static [RoadmapBranch] {
    BRANCHES.get_or_init(build_catalog)
}

/// Look up a branch by id.
pub fn find_branch(id: &str) -> Option<&'static RoadmapBranch> {
    branches().iter().find(|b| b.id == id)
}

/// Total number of items across every branch.
pub fn total_items_count() -> usize {
    branches().iter().map(|b| b.items.len()).sum()
}

fn task(id: &str, title: &str, description: Option<&str>) -> RoadmapItem {
    item(id, title, description, ItemType::Task)
}

fn subtask(id: &str, title: &str, description: Option<&str>) -> RoadmapItem {
    item(id, title, description, ItemType::Subtask)
}

fn research(id: &str, title: &str, description: Option<&str>) -> RoadmapItem {
    item(id, title, description, ItemType::Research)
}

fn item(id: &str, title: &str, description: Option<&str>, item_type: ItemType) -> RoadmapItem {
    RoadmapItem {
        id: id.to_string(),
        title: title.to_string(),
        description: description.map(str::to_string),
        item_type,
    }
}

#[allow(clippy::too_many_arguments)]
fn branch(
    id: &str,
    title: &str,
    description: &str,
    icon: &str,
    color: &str,
    priority: Priority,
    items: Vec<RoadmapItem>,
) -> RoadmapBranch {
    RoadmapBranch {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
        priority,
        items,
    }
}

fn build_catalog() -> Vec<RoadmapBranch> {
    vec![
        branch(
            "positioning",
            "Positioning",
            "Brand story, audience, and the promise we make",
            "target",
            "#ef4444",
            Priority::Critical,
            vec![
                task(
                    "POS-01",
                    "Write the studio positioning statement",
                    Some("One sentence: who we serve, what we make, why it is different"),
                ),
                task(
                    "POS-02",
                    "Map the target client segments",
                    Some("Startups needing identity work vs established brands needing a refresh"),
                ),
                subtask("POS-03", "Collect proof points for each segment", None),
                research(
                    "POS-04",
                    "Competitor teardown of five studios in our price band",
                    None,
                ),
                task(
                    "POS-05",
                    "Messaging guide for site copy and proposals",
                    Some("Tone, vocabulary, and the claims we are allowed to make"),
                ),
            ],
        ),
        branch(
            "offer",
            "Service Packages",
            "What clients can buy and what it costs",
            "package",
            "#f97316",
            Priority::Critical,
            vec![
                task(
                    "OFF-01",
                    "Define the three core packages",
                    Some("Identity sprint, full brand system, ongoing design retainer"),
                ),
                subtask(
                    "OFF-02",
                    "Scope deliverables and timeline per package",
                    None,
                ),
                task("OFF-03", "Set package pricing and payment schedule", None),
                research(
                    "OFF-04",
                    "Survey past clients on what they actually valued",
                    None,
                ),
                task(
                    "OFF-05",
                    "Write the order intake questionnaire",
                    Some("Feeds the order-tracking flow on the site"),
                ),
            ],
        ),
        branch(
            "website",
            "Website",
            "Landing page, portfolio, and the client dashboard",
            "globe",
            "#3b82f6",
            Priority::Critical,
            vec![
                task(
                    "WEB-01",
                    "Landing page with portfolio highlights",
                    Some("Hero, selected work, package overview, contact"),
                ),
                task("WEB-02", "Portfolio case study template", None),
                subtask("WEB-03", "Migrate the first six case studies", None),
                task(
                    "WEB-04",
                    "Order tracking flow for clients",
                    Some("Stepper from brief received through delivery"),
                ),
                task("WEB-05", "Client dashboard and profile pages", None),
                research(
                    "WEB-06",
                    "Measure landing page conversion baselines",
                    None,
                ),
            ],
        ),
        branch(
            "operations",
            "Operations",
            "How work moves from brief to delivery",
            "cog",
            "#8b5cf6",
            Priority::High,
            vec![
                task("OPS-01", "Project pipeline from brief to delivery", None),
                subtask(
                    "OPS-02",
                    "Template the kickoff and handoff checklists",
                    None,
                ),
                task(
                    "OPS-03",
                    "File naming and asset archive conventions",
                    Some("One archive per client, one source of truth per deliverable"),
                ),
                task("OPS-04", "Weekly capacity planning ritual", None),
            ],
        ),
        branch(
            "finance",
            "Finance",
            "Money in, money out, and the paperwork between",
            "wallet",
            "#22c55e",
            Priority::High,
            vec![
                task("FIN-01", "Split operating and tax accounts", None),
                task(
                    "FIN-02",
                    "Invoicing and late-payment policy",
                    Some("Net-14 default, deposit before kickoff"),
                ),
                subtask("FIN-03", "Automate invoice reminders", None),
                research("FIN-04", "Pick accounting software and a bookkeeper", None),
            ],
        ),
        branch(
            "team",
            "Team",
            "Who does the work and how they grow",
            "users",
            "#06b6d4",
            Priority::Medium,
            vec![
                task("TEAM-01", "Hire a second product designer", None),
                task("TEAM-02", "Freelancer bench for overflow work", None),
                research(
                    "TEAM-03",
                    "Compensation benchmarks for senior designers",
                    None,
                ),
                subtask("TEAM-04", "Write the onboarding week plan", None),
            ],
        ),
        branch(
            "legal",
            "Legal",
            "Contracts, IP, and the studio's name",
            "scale",
            "#64748b",
            Priority::Medium,
            vec![
                task(
                    "LEG-01",
                    "Standard services agreement reviewed by counsel",
                    None,
                ),
                task(
                    "LEG-02",
                    "IP transfer terms for client work",
                    Some("Transfer on final payment, portfolio rights retained"),
                ),
                research("LEG-03", "Trademark search for the studio name", None),
            ],
        ),
        branch(
            "partners",
            "Partnerships",
            "Referrals, vendors, and co-marketing",
            "handshake",
            "#eab308",
            Priority::Medium,
            vec![
                task("PRT-01", "Referral agreement with two dev agencies", None),
                task("PRT-02", "Print and production vendor shortlist", None),
                research(
                    "PRT-03",
                    "Co-marketing pilot with a no-code platform",
                    None,
                ),
            ],
        ),
    ]
}
