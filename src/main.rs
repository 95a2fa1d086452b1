use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use goji_roadmap::api;
use goji_roadmap::catalog::{self, BranchIcon};
use goji_roadmap::client::RoadmapClient;
use goji_roadmap::models::Priority;
use goji_roadmap::store::StatusStore;
use goji_roadmap::view::{PriorityFilter, RoadmapView};

#[derive(Parser)]
#[command(name = "goji")]
#[command(about = "Roadmap status service for the goji design studio")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the roadmap status server
    Serve {
        /// Port for HTTP API
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Path of the backing status file (defaults to the user data dir)
        #[arg(short, long)]
        data: Option<PathBuf>,
    },
    /// Show roadmap progress from a running server
    Progress {
        /// Only show branches of this priority (critical, high, medium)
        #[arg(long)]
        priority: Option<String>,
    },
    /// Flip one item's completion flag
    Toggle {
        /// Item id, e.g. WEB-04
        id: String,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "goji_roadmap=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Commands::Serve { port, data }) => serve(port, data).await?,
        Some(Commands::Progress { priority }) => {
            let filter = match priority.as_deref() {
                Some(name) => {
                    let priority = Priority::from_str(name).ok_or_else(|| {
                        anyhow::anyhow!("Unknown priority '{}' (critical, high, medium)", name)
                    })?;
                    PriorityFilter::Only(priority)
                }
                None => PriorityFilter::All,
            };
            progress(filter).await;
        }
        Some(Commands::Toggle { id }) => toggle(&id).await,
        None => serve(3000, None).await?,
    }

    Ok(())
}

async fn serve(port: u16, data: Option<PathBuf>) -> anyhow::Result<()> {
    let store = match data {
        Some(path) => StatusStore::open(path),
        None => StatusStore::open_default()?,
    };
    tracing::info!("Persisting roadmap status to {}", store.path().display());

    let app = api::create_router(store);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    tracing::info!("goji roadmap server listening on http://127.0.0.1:{}", port);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn progress(filter: PriorityFilter) {
    let client = RoadmapClient::from_env();
    let mut view = RoadmapView::new();
    view.load(&client).await;
    view.set_priority_filter(filter);

    println!(
        "{} of {} tasks complete ({}%)\n",
        view.completed_count(),
        view.total_items(),
        view.progress_percent()
    );

    for branch in view.filtered_branches() {
        let progress = view.branch_progress(branch);
        println!(
            "{} {:<18} [{}] {:>2}/{:<2} {:>3}%",
            BranchIcon::resolve(&branch.icon).glyph(),
            branch.title,
            branch.priority.as_str(),
            progress.completed,
            progress.total,
            progress.percent
        );
    }
}

async fn toggle(id: &str) {
    if catalog::branches()
        .iter()
        .flat_map(|b| &b.items)
        .all(|item| item.id != id)
    {
        eprintln!("Warning: '{}' is not in the catalog; writing anyway", id);
    }

    let client = RoadmapClient::from_env();
    let mut view = RoadmapView::new();
    view.load(&client).await;

    let before = view.is_completed(id);
    let settled = view.toggle_item(&client, id).await;

    if settled == before {
        eprintln!("Update failed; {} is still {}", id, state_label(before));
    } else {
        println!("{} is now {}", id, state_label(settled));
    }
}

fn state_label(completed: bool) -> &'static str {
    if completed {
        "complete"
    } else {
        "pending"
    }
}
